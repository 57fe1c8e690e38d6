// src/config/duration.rs

use std::time::Duration;

use crate::errors::{Result, SpyrunError};

const NANOS_PER_UNIT: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Parse a duration string like `"100ms"`, `"1.5s"` or `"1h30m"`.
///
/// A string is a sequence of decimal numbers, each with an optional fraction
/// and a mandatory unit suffix (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`). A bare
/// `"0"` is also accepted. Negative durations are rejected since there is no
/// sensible way to sleep for them.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let invalid = |reason: String| SpyrunError::InvalidDuration {
        input: s.to_string(),
        reason,
    };

    let mut rest = s.trim();
    if rest.is_empty() {
        return Err(invalid("empty duration string".to_string()));
    }
    if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    } else if rest.starts_with('-') {
        return Err(invalid("negative durations are not supported".to_string()));
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (int_part, after_int) = rest.split_at(int_len);

        let (frac_part, after_num) = match after_int.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
                tail.split_at(frac_len)
            }
            None => ("", after_int),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid(format!("expected a number at '{}'", rest)));
        }

        let unit_len = after_num
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after_num.len());
        let (unit, tail) = after_num.split_at(unit_len);
        if unit.is_empty() {
            return Err(invalid("missing unit suffix".to_string()));
        }
        let per_unit = NANOS_PER_UNIT
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, nanos)| *nanos)
            .ok_or_else(|| {
                invalid(format!(
                    "unknown unit '{}'; expected ns, us, ms, s, m, or h",
                    unit
                ))
            })?;

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| invalid("number out of range".to_string()))?
        };
        let mut nanos = whole
            .checked_mul(per_unit)
            .ok_or_else(|| invalid("duration out of range".to_string()))?;

        // Digits beyond nanosecond precision cannot contribute.
        let frac_digits = &frac_part[..frac_part.len().min(18)];
        if !frac_digits.is_empty() {
            let frac: u128 = frac_digits
                .parse()
                .map_err(|_| invalid("fraction out of range".to_string()))?;
            let scale = 10u128.pow(frac_digits.len() as u32);
            nanos += frac * per_unit / scale;
        }

        total = total
            .checked_add(nanos)
            .ok_or_else(|| invalid("duration out of range".to_string()))?;
        rest = tail;
    }

    let total = u64::try_from(total).map_err(|_| invalid("duration out of range".to_string()))?;
    Ok(Duration::from_nanos(total))
}
