//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `CachedRemoteData<E, _>` as a type constructor
//! directly. [`TypeConstructor`] uses a GAT to name "the same constructor
//! applied to another type", which is all `Functor` and `Applicative` need.
//!
//! # Example
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//! use cached_remote_data::typeclass::TypeConstructor;
//!
//! type Names = <CachedRemoteData<String, u32> as TypeConstructor>::WithType<String>;
//!
//! let names: Names = CachedRemoteData::Success("ada".to_string());
//! assert!(names.is_success());
//! ```

use crate::remote::{CachedRemoteData, RemoteData};

/// A type constructor applied to one type parameter.
///
/// # Associated Types
///
/// - `Inner`: the value type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`. For the remote data
///   types the error type is held fixed.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The value type this constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<E, A> TypeConstructor for CachedRemoteData<E, A> {
    type Inner = A;
    type WithType<B> = CachedRemoteData<E, B>;
}

impl<E, A> TypeConstructor for RemoteData<E, A> {
    type Inner = A;
    type WithType<B> = RemoteData<E, B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_inner_type_is_value_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<CachedRemoteData<String, i32>>();
    }

    #[test]
    fn cached_with_type_preserves_error_type() {
        fn assert_with_type<E, A, B>()
        where
            CachedRemoteData<E, A>:
                TypeConstructor<Inner = A, WithType<B> = CachedRemoteData<E, B>>,
        {
        }

        assert_with_type::<String, i32, bool>();
        assert_with_type::<std::io::ErrorKind, Vec<u8>, String>();
    }

    #[test]
    fn remote_data_with_type_preserves_error_type() {
        fn assert_with_type<E, A, B>()
        where
            RemoteData<E, A>: TypeConstructor<Inner = A, WithType<B> = RemoteData<E, B>>,
        {
        }

        assert_with_type::<String, i32, char>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <CachedRemoteData<String, i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool::<Step2>();
    }
}
