use chrono::TimeDelta;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    #[error("empty duration")]
    Empty,
    #[error("bad number {0:?} in duration")]
    BadNumber(String),
    #[error("missing unit after {0:?} in duration")]
    MissingUnit(String),
    #[error("unknown unit {0:?} in duration")]
    UnknownUnit(String),
}

/// Parses a compound numeric-suffix span such as `1h30m`, `45m0s` or
/// `1.5h` into a [`TimeDelta`].
///
/// The grammar is an optional sign followed by one or more
/// `<decimal><unit>` groups, with units `ns`, `us`/`µs`, `ms`, `s`, `m`
/// and `h`. The bare string `0` is a valid zero span. Sign applies to the
/// whole span, so negative spans parse here and are rejected by the
/// positivity checks downstream.
pub fn parse_span(input: &str) -> Result<TimeDelta, SpanError> {
    let mut rest = input;
    if rest.is_empty() {
        return Err(SpanError::Empty);
    }

    let negative = match rest.as_bytes()[0] {
        b'-' => {
            rest = &rest[1..];
            true
        }
        b'+' => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(SpanError::Empty);
    }

    let mut total_ns = 0.0_f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(SpanError::BadNumber(rest.to_string()));
        }
        let (number, tail) = rest.split_at(number_len);
        let value: f64 = number
            .parse()
            .map_err(|_| SpanError::BadNumber(number.to_string()))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        if unit_len == 0 {
            return Err(SpanError::MissingUnit(number.to_string()));
        }
        let (unit, tail) = tail.split_at(unit_len);
        let unit_ns = match unit {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 6e10,
            "h" => 3.6e12,
            _ => return Err(SpanError::UnknownUnit(unit.to_string())),
        };

        total_ns += value * unit_ns;
        rest = tail;
    }

    if negative {
        total_ns = -total_ns;
    }

    Ok(TimeDelta::nanoseconds(total_ns.round() as i64))
}
