//! Payload-free names for the six lifecycle states.
//!
//! [`StateKind`] lets callers talk about *which* state a
//! [`CachedRemoteData`](super::CachedRemoteData) is in without touching its
//! payloads: logging, metrics labels, and assertions that only care about
//! the resulting variant all use it.

use std::fmt;

/// The variant of a [`CachedRemoteData`](super::CachedRemoteData), without its payload.
///
/// # Examples
///
/// ```rust
/// use cached_remote_data::remote::{CachedRemoteData, StateKind};
///
/// let stale: CachedRemoteData<&str, i32> = CachedRemoteData::Stale("timeout", 42);
/// assert_eq!(stale.kind(), StateKind::Stale);
/// assert!(stale.kind().has_value());
/// assert!(stale.kind().has_error());
/// assert_eq!(stale.kind().to_string(), "stale");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StateKind {
    /// No fetch has been initiated and nothing is cached.
    NotAsked,
    /// A first fetch is in flight.
    Loading,
    /// The only fetch attempt failed.
    Failure,
    /// A fetch succeeded and its value is current.
    Success,
    /// A cached value exists and a new fetch is in flight.
    Refreshing,
    /// A cached value exists and the latest refresh failed.
    Stale,
}

impl StateKind {
    /// All six kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::NotAsked,
        Self::Loading,
        Self::Failure,
        Self::Success,
        Self::Refreshing,
        Self::Stale,
    ];

    /// Returns `true` for `Success`, `Refreshing` and `Stale`.
    #[inline]
    pub const fn has_value(self) -> bool {
        matches!(self, Self::Success | Self::Refreshing | Self::Stale)
    }

    /// Returns `true` for `Failure` and `Stale`.
    #[inline]
    pub const fn has_error(self) -> bool {
        matches!(self, Self::Failure | Self::Stale)
    }

    /// Returns `true` for `Success` and `Failure`: a fetch completed and
    /// nothing further is in flight.
    #[inline]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    /// The `snake_case` label used by `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAsked => "not_asked",
            Self::Loading => "loading",
            Self::Failure => "failure",
            Self::Success => "success",
            Self::Refreshing => "refreshing",
            Self::Stale => "stale",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StateKind::NotAsked, false, false, false)]
    #[case(StateKind::Loading, false, false, false)]
    #[case(StateKind::Failure, false, true, true)]
    #[case(StateKind::Success, true, false, true)]
    #[case(StateKind::Refreshing, true, false, false)]
    #[case(StateKind::Stale, true, true, false)]
    fn kind_classification(
        #[case] kind: StateKind,
        #[case] has_value: bool,
        #[case] has_error: bool,
        #[case] is_settled: bool,
    ) {
        assert_eq!(kind.has_value(), has_value);
        assert_eq!(kind.has_error(), has_error);
        assert_eq!(kind.is_settled(), is_settled);
    }

    #[rstest]
    fn display_labels_are_distinct() {
        let mut labels: Vec<String> = StateKind::ALL.iter().map(ToString::to_string).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 6);
    }
}
