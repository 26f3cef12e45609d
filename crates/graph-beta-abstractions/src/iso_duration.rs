//! ISO-8601 duration values (`P1DT2H30M`, `PT0.5S`, ...).
//!
//! Only the designators the service emits are accepted: years, weeks and
//! days in the date part; hours, minutes and (fractional) seconds in the
//! time part. Months are rejected since they have no fixed length.

use std::fmt;
use std::str::FromStr;

use crate::SerializationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    pub years: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl IsoDuration {
    pub fn is_zero(&self) -> bool {
        *self == IsoDuration::default()
    }

    fn has_time_part(&self) -> bool {
        self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.milliseconds > 0
    }
}

/// Splits `12H30M` into `[("12", 'H'), ("30", 'M')]`.
fn components(part: &str) -> Result<Vec<(&str, char)>, &'static str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        if i == start {
            return Err("designator without a number");
        }
        out.push((&part[start..i], c));
        start = i + c.len_utf8();
    }
    if start != part.len() {
        return Err("number without a designator");
    }
    Ok(out)
}

fn whole(number: &str) -> Result<u32, &'static str> {
    number.parse::<u32>().map_err(|_| "component is not a whole number")
}

fn seconds_and_millis(number: &str) -> Result<(u32, u32), &'static str> {
    let Some((secs, frac)) = number.split_once('.') else {
        return Ok((whole(number)?, 0));
    };
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err("malformed fractional seconds");
    }
    let secs = if secs.is_empty() { 0 } else { whole(secs)? };
    let mut millis = 0u32;
    for (i, digit) in frac.bytes().take(3).enumerate() {
        millis += u32::from(digit - b'0') * 10u32.pow(2 - i as u32);
    }
    Ok((secs, millis))
}

impl FromStr for IsoDuration {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SerializationError::invalid_value("duration", s, reason);
        let rest = s
            .strip_prefix('P')
            .ok_or_else(|| invalid("missing `P` designator"))?;
        let (date, time) = match rest.split_once('T') {
            Some((_, "")) => return Err(invalid("empty time part")),
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };
        if date.is_empty() && time.is_none() {
            return Err(invalid("no components"));
        }

        let mut out = IsoDuration::default();
        for (number, unit) in components(date).map_err(invalid)? {
            let n = whole(number).map_err(invalid)?;
            match unit {
                'Y' => out.years = n,
                'W' => out.weeks = n,
                'D' => out.days = n,
                'M' => return Err(invalid("month durations are not supported")),
                _ => return Err(invalid("unexpected date designator")),
            }
        }
        if let Some(time) = time {
            for (number, unit) in components(time).map_err(invalid)? {
                match unit {
                    'H' => out.hours = whole(number).map_err(invalid)?,
                    'M' => out.minutes = whole(number).map_err(invalid)?,
                    'S' => {
                        let (secs, millis) = seconds_and_millis(number).map_err(invalid)?;
                        out.seconds = secs;
                        out.milliseconds = millis;
                    }
                    _ => return Err(invalid("unexpected time designator")),
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        f.write_str("P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if !self.has_time_part() {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours > 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes > 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.milliseconds > 0 {
            let frac = format!("{:03}", self.milliseconds);
            write!(f, "{}.{}S", self.seconds, frac.trim_end_matches('0'))?;
        } else if self.seconds > 0 {
            write!(f, "{}S", self.seconds)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_canonical_matrix() {
        for text in ["PT1H", "P1DT2H30M", "P2W", "P1Y", "PT0.5S", "PT1.25S", "P3DT4H5M6.789S"] {
            let parsed: IsoDuration = text.parse().unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn parse_components() {
        let d: IsoDuration = "P1Y2W3DT4H5M6.7S".parse().unwrap();
        assert_eq!(
            d,
            IsoDuration {
                years: 1,
                weeks: 2,
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
                milliseconds: 700,
            }
        );
    }

    #[test]
    fn zero_formats_as_pt0s() {
        assert_eq!(IsoDuration::default().to_string(), "PT0S");
        assert!("PT0S".parse::<IsoDuration>().unwrap().is_zero());
    }

    #[test]
    fn rejects_malformed() {
        for text in ["", "1H", "P", "PT", "P1M", "PT1", "PTH", "P1.5D", "PT1.S", "P1X"] {
            assert!(text.parse::<IsoDuration>().is_err(), "{text} should fail");
        }
    }
}
