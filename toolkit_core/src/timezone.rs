//! # World Clock
//!
//! Wall-clock time in named IANA zones. Zone resolution and offset math
//! come from the embedded chrono-tz database, so the core works with no
//! network at all; the optional [`fetch_timezones`] call only refreshes
//! the list of zone names offered in selection UI.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::{FetchError, ToolError, ToolResult};

/// Zone list endpoint for [`fetch_timezones`].
const TIMEZONE_ENDPOINT: &str = "https://worldtimeapi.org/api/timezone";

/// Zones offered in selection UI when the live list is unavailable.
pub static COMMON_TIMEZONES: &[&str] = &[
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "America/Chicago",
    "America/Los_Angeles",
    "America/New_York",
    "America/Toronto",
    "Asia/Dubai",
    "Asia/Hong_Kong",
    "Asia/Kolkata",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Tokyo",
    "Australia/Melbourne",
    "Australia/Sydney",
    "Europe/Berlin",
    "Europe/London",
    "Europe/Moscow",
    "Europe/Paris",
    "Pacific/Auckland",
    "Pacific/Honolulu",
];

/// Wall-clock time in one zone.
///
/// ## JSON Example
///
/// ```json
/// {
///   "zone_id": "Asia/Tokyo",
///   "local_time": "2024-03-01 09:30:00",
///   "utc_offset": "+09:00"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneTime {
    /// IANA zone id the time was resolved in
    pub zone_id: String,

    /// Local time, "YYYY-MM-DD HH:MM:SS"
    pub local_time: String,

    /// Offset from UTC at that instant, "+HH:MM" or "-HH:MM"
    pub utc_offset: String,
}

/// Wall-clock time in a zone at a given instant.
///
/// # Returns
///
/// * `Ok(ZoneTime)` - Formatted local time and UTC offset
/// * `Err(ToolError)` - `TimezoneNotFound` if the id is not a valid IANA
///   zone name
pub fn wall_clock(zone_id: &str, at: DateTime<Utc>) -> ToolResult<ZoneTime> {
    let tz: Tz = zone_id
        .parse()
        .map_err(|_| ToolError::timezone_not_found(zone_id))?;

    let local = at.with_timezone(&tz);
    Ok(ZoneTime {
        zone_id: zone_id.to_string(),
        local_time: local.format("%Y-%m-%d %H:%M:%S").to_string(),
        utc_offset: local.format("%:z").to_string(),
    })
}

/// Wall-clock time in a zone right now.
pub fn wall_clock_now(zone_id: &str) -> ToolResult<ZoneTime> {
    wall_clock(zone_id, Utc::now())
}

/// Fetch the full IANA zone list from the time provider.
pub fn fetch_timezones() -> Result<Vec<String>, FetchError> {
    let response = reqwest::blocking::get(TIMEZONE_ENDPOINT)
        .and_then(|r| r.error_for_status())
        .map_err(|e| FetchError::new("timezone list", e.to_string()))?;

    response
        .json()
        .map_err(|e| FetchError::new("timezone list", e.to_string()))
}

/// The live zone list when reachable, the common subset otherwise.
pub fn timezones_or_fallback() -> Vec<String> {
    match fetch_timezones() {
        Ok(zones) => zones,
        Err(_) => COMMON_TIMEZONES.iter().map(|z| z.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_fixed_offset_zone() {
        // Tokyo has no DST; always UTC+9.
        let result = wall_clock("Asia/Tokyo", instant(2024, 3, 1, 0, 30)).unwrap();
        assert_eq!(result.local_time, "2024-03-01 09:30:00");
        assert_eq!(result.utc_offset, "+09:00");
    }

    #[test]
    fn test_half_hour_offset_zone() {
        let result = wall_clock("Asia/Kolkata", instant(2024, 3, 1, 0, 0)).unwrap();
        assert_eq!(result.local_time, "2024-03-01 05:30:00");
        assert_eq!(result.utc_offset, "+05:30");
    }

    #[test]
    fn test_dst_shifts_offset() {
        // New York is UTC-5 in January and UTC-4 in July.
        let winter = wall_clock("America/New_York", instant(2024, 1, 15, 12, 0)).unwrap();
        let summer = wall_clock("America/New_York", instant(2024, 7, 15, 12, 0)).unwrap();
        assert_eq!(winter.utc_offset, "-05:00");
        assert_eq!(summer.utc_offset, "-04:00");
    }

    #[test]
    fn test_date_rolls_across_midnight() {
        let result = wall_clock("Pacific/Auckland", instant(2024, 6, 1, 20, 0)).unwrap();
        assert!(result.local_time.starts_with("2024-06-02"));
    }

    #[test]
    fn test_unknown_zone_rejected() {
        let result = wall_clock_now("Mars/Olympus_Mons");
        assert!(matches!(result, Err(ToolError::TimezoneNotFound { .. })));
    }

    #[test]
    fn test_common_zones_all_resolve() {
        let at = instant(2024, 3, 1, 0, 0);
        for zone in COMMON_TIMEZONES {
            assert!(wall_clock(zone, at).is_ok(), "{} failed to resolve", zone);
        }
    }

    #[test]
    fn test_common_zones_sorted() {
        let mut sorted = COMMON_TIMEZONES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, COMMON_TIMEZONES);
    }

    #[test]
    fn test_zone_time_serialization() {
        let result = wall_clock("Europe/London", instant(2024, 1, 1, 12, 0)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ZoneTime = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
