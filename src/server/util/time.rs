//! Time and date calculation utilities.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// How long a GSF blacklist lookup result is reused before it is fetched again.
pub const GSF_CACHE_HOURS: i64 = 24;

/// Returns true if a GSF status recorded at `last_update_time` must be fetched again.
///
/// The cached status is valid for [`GSF_CACHE_HOURS`] after it was recorded; at exactly
/// that age it is considered stale.
pub fn gsf_cache_expired(last_update_time: NaiveDateTime, now: DateTime<Utc>) -> bool {
    now.naive_utc() - last_update_time >= Duration::hours(GSF_CACHE_HOURS)
}
