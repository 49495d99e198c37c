#![cfg(feature = "typeclass")]
//! Property-based tests for Bifunctor laws.
//!
//! - **Identity Law**: `bf.bimap(|x| x, |y| y) == bf`
//! - **Composition Law**: `bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)`
//! - **first/second Consistency Law**: `bf.bimap(f, g) == bf.first(f).second(g)`

use cached_remote_data::remote::{CachedRemoteData, RemoteData};
use cached_remote_data::typeclass::Bifunctor;
use proptest::prelude::*;

fn cached_strategy() -> impl Strategy<Value = CachedRemoteData<String, i32>> {
    prop_oneof![
        Just(CachedRemoteData::NotAsked),
        Just(CachedRemoteData::Loading),
        any::<String>().prop_map(CachedRemoteData::Failure),
        any::<i32>().prop_map(CachedRemoteData::Success),
        any::<i32>().prop_map(CachedRemoteData::Refreshing),
        (any::<String>(), any::<i32>()).prop_map(|(error, value)| CachedRemoteData::Stale(error, value)),
    ]
}

fn remote_strategy() -> impl Strategy<Value = RemoteData<String, i32>> {
    prop_oneof![
        Just(RemoteData::NotAsked),
        Just(RemoteData::Loading),
        any::<String>().prop_map(RemoteData::Failure),
        any::<i32>().prop_map(RemoteData::Success),
    ]
}

proptest! {
    #[test]
    fn prop_cached_identity_law(value in cached_strategy()) {
        let result = value.clone().bimap(|e| e, |x| x);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_cached_composition_law(value in cached_strategy()) {
        let f1 = |s: String| s.len();
        let f2 = |n: usize| n.wrapping_add(10);
        let g1 = |x: i32| x.wrapping_add(1);
        let g2 = |x: i32| x.wrapping_mul(2);

        let left = value.clone().bimap(|e| f2(f1(e)), |x| g2(g1(x)));
        let right = value.bimap(f1, g1).bimap(f2, g2);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_cached_first_second_consistency(value in cached_strategy()) {
        let f = |s: String| s.len();
        let g = |x: i32| x.wrapping_mul(2);

        let by_bimap = value.clone().bimap(f, g);
        let by_first_second = value.clone().first(f).second(g);
        let by_second_first = value.second(g).first(f);

        prop_assert_eq!(by_bimap.clone(), by_first_second);
        prop_assert_eq!(by_bimap, by_second_first);
    }

    #[test]
    fn prop_cached_bimap_ref_matches_bimap(value in cached_strategy()) {
        let by_ref = value.bimap_ref(String::len, |x| x.wrapping_add(7));
        let by_value = value.bimap(|e| e.len(), |x| x.wrapping_add(7));
        prop_assert_eq!(by_ref, by_value);
    }

    #[test]
    fn prop_cached_first_matches_map_error(value in cached_strategy()) {
        let left = value.clone().first(|e| e.to_uppercase());
        let right = value.map_error(|e| e.to_uppercase());
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_remote_identity_law(value in remote_strategy()) {
        let result = value.clone().bimap(|e| e, |x| x);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_remote_first_second_consistency(value in remote_strategy()) {
        let f = |s: String| s.len();
        let g = |x: i32| x.wrapping_mul(2);

        let by_bimap = value.clone().bimap(f, g);
        let by_first_second = value.first(f).second(g);

        prop_assert_eq!(by_bimap, by_first_second);
    }
}
