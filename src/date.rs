//! Date-format pattern rendering.
//!
//! Patterns use the familiar annotation-style letters: `y` (year of era),
//! `M` (month), `d` (day), `H` (hour 0-23), `h` (clock hour 1-12), `m`
//! (minute), `s` (second). Runs of the same letter set the minimum field
//! width; text between single quotes is copied literally (`''` is a literal
//! quote), and any other character passes through unchanged.
//!
//! Year rendering follows the extended-year convention: a two-letter `yy`
//! field keeps only the last two digits, and a four-or-more-letter field
//! prefixes `+` when the year of era needs more digits than the field width
//! (e.g. the minimum representable date renders its year as `+262145`).

use crate::error::{Error, Result};
use crate::value::Leaf;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

struct Parts {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

/// Renders a date/time leaf through `pattern`.
///
/// # Errors
///
/// Fails when the pattern uses an unsupported letter, has an unterminated
/// quote, or asks for a component the value does not have (a date letter
/// applied to a time-only value, and vice versa).
pub(crate) fn format_pattern(leaf: &Leaf, pattern: &str) -> Result<String> {
    let parts = match leaf {
        Leaf::Date(d) => Parts {
            date: Some(*d),
            time: None,
        },
        Leaf::Time(t) => Parts {
            date: None,
            time: Some(*t),
        },
        Leaf::DateTime(dt) => Parts {
            date: Some(dt.date()),
            time: Some(dt.time()),
        },
        _ => {
            return Err(Error::date_pattern(
                "date pattern applied to a non-date value",
            ))
        }
    };

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.peek() == Some(&ch) {
                chars.next();
                count += 1;
            }
            write_component(&mut out, &parts, ch, count)?;
        } else if ch == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
            } else {
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '\'' {
                        closed = true;
                        break;
                    }
                    out.push(c);
                }
                if !closed {
                    return Err(Error::date_pattern("unterminated quote in pattern"));
                }
            }
        } else {
            out.push(ch);
        }
    }

    Ok(out)
}

fn write_component(out: &mut String, parts: &Parts, letter: char, count: usize) -> Result<()> {
    match letter {
        'y' => {
            let year = require_date(parts, letter)?.year();
            // Year of era: 1 BCE is year 0 proleptic.
            let era_year = if year >= 1 {
                i64::from(year)
            } else {
                1 - i64::from(year)
            };
            write_year(out, era_year, count);
        }
        'M' => {
            if count > 2 {
                return Err(Error::date_pattern("text month names are not supported"));
            }
            pad(out, require_date(parts, letter)?.month(), count);
        }
        'd' => pad(out, require_date(parts, letter)?.day(), count),
        'H' => pad(out, require_time(parts, letter)?.hour(), count),
        'h' => {
            let hour = require_time(parts, letter)?.hour() % 12;
            pad(out, if hour == 0 { 12 } else { hour }, count);
        }
        'm' => pad(out, require_time(parts, letter)?.minute(), count),
        's' => pad(out, require_time(parts, letter)?.second(), count),
        _ => {
            return Err(Error::date_pattern(format!(
                "unsupported pattern letter '{letter}'"
            )))
        }
    }
    Ok(())
}

fn require_date(parts: &Parts, letter: char) -> Result<NaiveDate> {
    parts.date.ok_or_else(|| {
        Error::date_pattern(format!(
            "pattern letter '{letter}' needs a date component the value lacks"
        ))
    })
}

fn require_time(parts: &Parts, letter: char) -> Result<NaiveTime> {
    parts.time.ok_or_else(|| {
        Error::date_pattern(format!(
            "pattern letter '{letter}' needs a time component the value lacks"
        ))
    })
}

fn pad(out: &mut String, value: u32, count: usize) {
    let digits = value.to_string();
    for _ in digits.len()..count {
        out.push('0');
    }
    out.push_str(&digits);
}

fn write_year(out: &mut String, era_year: i64, count: usize) {
    if count == 2 {
        out.push_str(&format!("{:02}", era_year.rem_euclid(100)));
        return;
    }
    let digits = era_year.to_string();
    if count >= 4 && digits.len() > count {
        out.push('+');
    }
    for _ in digits.len()..count {
        out.push('0');
    }
    out.push_str(&digits);
}
