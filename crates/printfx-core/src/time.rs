//! Broken-down calendar time collaborator.
//!
//! The date/time renderer consumes this read-only. Callers usually build
//! one with [`CalendarTime::from_unix`]; embedded callers with an RTC can
//! fill the fields directly.

/// Broken-down time (like `struct tm`, plus fractional seconds and zone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTime {
    /// Full year (e.g. 2017).
    pub year: i32,
    /// Month (1-12).
    pub mon: u8,
    /// Day of month (1-31).
    pub mday: u8,
    /// Day of week (0 = Sunday).
    pub wday: u8,
    /// Day of year (1-366).
    pub yday: u16,
    /// Hours (0-23).
    pub hour: u8,
    /// Minutes (0-59).
    pub min: u8,
    /// Seconds (0-59).
    pub sec: u8,
    /// Microseconds (0-999_999).
    pub usec: u32,
    /// Zone offset from UTC in minutes (0 for UTC).
    pub tz_offset_min: i16,
    /// Zone name, empty if unnamed.
    pub tz_name: &'static str,
}

impl Default for CalendarTime {
    fn default() -> Self {
        CalendarTime {
            year: 1970,
            mon: 1,
            mday: 1,
            wday: 4, // Thursday
            yday: 1,
            hour: 0,
            min: 0,
            sec: 0,
            usec: 0,
            tz_offset_min: 0,
            tz_name: "",
        }
    }
}

/// Month lengths for a non-leap year.
const MDAYS: [u16; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Abbreviated month names, January first.
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviated weekday names, Sunday first.
pub const WDAY_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Gregorian leap-year rule.
pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl CalendarTime {
    /// Build a UTC calendar time from seconds + microseconds since the
    /// Unix epoch. Civil-from-days conversion, proleptic Gregorian.
    pub fn from_unix(secs: i64, usec: u32) -> Self {
        let days = secs.div_euclid(86_400);
        let mut rem = secs.rem_euclid(86_400);
        let hour = (rem / 3600) as u8;
        rem %= 3600;
        let min = (rem / 60) as u8;
        let sec = (rem % 60) as u8;

        let wday = ((days + 4).rem_euclid(7)) as u8;

        // Howard Hinnant's civil_from_days.
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (y + i64::from(m <= 2)) as i32;

        let mut yday: u16 = u16::from(d);
        for len in MDAYS.iter().take(m as usize - 1) {
            yday += len;
        }
        if m > 2 && is_leap(year) {
            yday += 1;
        }

        CalendarTime {
            year,
            mon: m,
            mday: d,
            wday,
            yday,
            hour,
            min,
            sec,
            usec,
            tz_offset_min: 0,
            tz_name: "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let t = CalendarTime::from_unix(0, 0);
        assert_eq!((t.year, t.mon, t.mday), (1970, 1, 1));
        assert_eq!(t.wday, 4); // Thursday
        assert_eq!(t.yday, 1);
        assert_eq!((t.hour, t.min, t.sec), (0, 0, 0));
    }

    #[test]
    fn test_known_timestamp() {
        // Sun, 10 Sep 2017 20:50:37 GMT
        let t = CalendarTime::from_unix(1_505_076_637, 0);
        assert_eq!((t.year, t.mon, t.mday), (2017, 9, 10));
        assert_eq!(t.wday, 0); // Sunday
        assert_eq!((t.hour, t.min, t.sec), (20, 50, 37));
        assert_eq!(t.yday, 253);
    }

    #[test]
    fn test_leap_day() {
        // 2020-02-29 12:00:00 UTC
        let t = CalendarTime::from_unix(1_582_977_600, 0);
        assert_eq!((t.year, t.mon, t.mday), (2020, 2, 29));
        assert_eq!(t.yday, 60);
        assert!(is_leap(2020));
        assert!(!is_leap(1900));
        assert!(is_leap(2000));
    }

    #[test]
    fn test_pre_epoch() {
        // 1969-12-31 23:59:59
        let t = CalendarTime::from_unix(-1, 0);
        assert_eq!((t.year, t.mon, t.mday), (1969, 12, 31));
        assert_eq!((t.hour, t.min, t.sec), (23, 59, 59));
        assert_eq!(t.wday, 3); // Wednesday
    }
}
