//! Date/time renderer.
//!
//! Builds output field-by-field from a broken-down [`CalendarTime`],
//! honoring the descriptor's component presence flags. Alternate form
//! renders the long `Sun, 10 Sep 2017 20:50:37 GMT` style; grouping
//! swaps the `:`/`.` time punctuation for `h`/`m`/`s` unit suffixes;
//! relative mode renders a duration from a microsecond count instead of
//! an absolute timestamp.

use crate::error::PrintError;
use crate::render::field;
use crate::sink::Out;
use crate::time::{CalendarTime, MONTH_ABBR, WDAY_ABBR};

/// Fractional-second digits: explicit precision (0-6), default 3.
fn frac_digits(out: &Out<'_>) -> usize {
    if out.desc.precision_set {
        (out.desc.precision as usize).min(6)
    } else {
        3
    }
}

fn push_2(buf: &mut Vec<u8>, v: u8) {
    buf.push(b'0' + v / 10);
    buf.push(b'0' + v % 10);
}

fn push_year(buf: &mut Vec<u8>, year: i32) {
    for b in year.to_string().bytes() {
        buf.push(b);
    }
}

fn push_frac(buf: &mut Vec<u8>, usec: u32, digits: usize) {
    if digits == 0 {
        return;
    }
    buf.push(b'.');
    let mut div: u32 = 100_000;
    for _ in 0..digits {
        buf.push(b'0' + ((usec / div) % 10) as u8);
        div /= 10;
    }
}

/// Render an absolute timestamp per the presence flags.
pub fn datetime(out: &mut Out<'_>, t: &CalendarTime) -> Result<(), PrintError> {
    let mut body = Vec::with_capacity(40);
    if out.desc.alt_form {
        alt_body(out, t, &mut body);
    } else {
        plain_body(out, t, &mut body);
    }
    field(out, &body)
}

/// `Sun, 10 Sep 2017 20:50:37 GMT` style.
fn alt_body(out: &Out<'_>, t: &CalendarTime, body: &mut Vec<u8>) {
    let d = &out.desc;
    let has_date = d.year_ok || d.mon_ok || d.mday_ok;
    if d.dow_ok || has_date {
        body.extend_from_slice(WDAY_ABBR[(t.wday % 7) as usize].as_bytes());
        body.extend_from_slice(b", ");
    }
    if d.mday_ok {
        push_2(body, t.mday);
        body.push(b' ');
    }
    if d.mon_ok {
        body.extend_from_slice(MONTH_ABBR[(t.mon - 1) as usize].as_bytes());
        body.push(b' ');
    }
    if d.year_ok {
        push_year(body, t.year);
    }
    if d.hour_ok {
        if has_date {
            body.push(b' ');
        }
        push_2(body, t.hour);
        if d.min_ok {
            body.push(b':');
            push_2(body, t.min);
        }
        if d.sec_ok {
            body.push(b':');
            push_2(body, t.sec);
        }
    }
    if !d.no_zone {
        body.push(b' ');
        if t.tz_offset_min == 0 {
            body.extend_from_slice(if t.tz_name.is_empty() {
                b"GMT"
            } else {
                t.tz_name.as_bytes()
            });
        } else {
            push_offset(body, t.tz_offset_min);
        }
    }
}

/// ISO-style `2017-09-10T20:50:37.000Z`.
fn plain_body(out: &Out<'_>, t: &CalendarTime, body: &mut Vec<u8>) {
    let d = &out.desc;
    let has_date = d.year_ok || d.mon_ok || d.mday_ok;
    if d.year_ok {
        push_year(body, t.year);
    }
    if d.yday_ok && !d.mon_ok {
        body.push(b'-');
        let y = t.yday;
        body.push(b'0' + (y / 100) as u8);
        push_2(body, (y % 100) as u8);
    }
    if d.mon_ok {
        if d.year_ok {
            body.push(b'-');
        }
        push_2(body, t.mon);
    }
    if d.mday_ok {
        if d.year_ok || d.mon_ok {
            body.push(b'-');
        }
        push_2(body, t.mday);
    }
    if d.hour_ok {
        if has_date {
            body.push(b'T');
        }
        push_2(body, t.hour);
        if d.group {
            body.push(b'h');
            if d.min_ok {
                push_2(body, t.min);
                body.push(b'm');
            }
            if d.sec_ok {
                push_2(body, t.sec);
                body.push(b's');
            }
        } else {
            if d.min_ok {
                body.push(b':');
                push_2(body, t.min);
            }
            if d.sec_ok {
                body.push(b':');
                push_2(body, t.sec);
                push_frac(body, t.usec, frac_digits(out));
            }
        }
    }
    if !d.no_zone {
        if t.tz_offset_min == 0 {
            body.push(b'Z');
        } else {
            push_offset(body, t.tz_offset_min);
        }
        if d.plus && !t.tz_name.is_empty() {
            body.push(b'(');
            body.extend_from_slice(t.tz_name.as_bytes());
            body.push(b')');
        }
    }
}

fn push_offset(body: &mut Vec<u8>, offset_min: i16) {
    body.push(if offset_min < 0 { b'-' } else { b'+' });
    let m = offset_min.unsigned_abs();
    push_2(body, (m / 60) as u8);
    body.push(b':');
    push_2(body, (m % 60) as u8);
}

/// Render an elapsed duration from a microsecond count:
/// `3d12:34:56.789`, or `3d12h34m56s` with the grouping flag.
pub fn elapsed(out: &mut Out<'_>, micros: u64) -> Result<(), PrintError> {
    let total_sec = micros / 1_000_000;
    let usec = (micros % 1_000_000) as u32;
    let days = total_sec / 86_400;
    let hour = ((total_sec / 3600) % 24) as u8;
    let min = ((total_sec / 60) % 60) as u8;
    let sec = (total_sec % 60) as u8;

    let mut body = Vec::with_capacity(24);
    if days > 0 {
        for b in days.to_string().bytes() {
            body.push(b);
        }
        body.push(b'd');
    }
    if out.desc.group {
        push_2(&mut body, hour);
        body.push(b'h');
        push_2(&mut body, min);
        body.push(b'm');
        push_2(&mut body, sec);
        body.push(b's');
    } else {
        push_2(&mut body, hour);
        body.push(b':');
        push_2(&mut body, min);
        body.push(b':');
        push_2(&mut body, sec);
        push_frac(&mut body, usec, frac_digits(out));
    }
    field(out, &body)
}
