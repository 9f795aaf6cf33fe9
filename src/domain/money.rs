use thiserror::Error;

/// Money is represented as signed integer cents to avoid floating-point
/// precision issues. $50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents with exactly two fractional digits.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid money format")]
pub struct ParseCentsError;

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Digits beyond the second fractional place are truncated, matching the
/// two-decimal display convention.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_part, frac_part) = match unsigned.split_once('.') {
        Some((units, frac)) if !frac.contains('.') => (units, frac),
        Some(_) => return Err(ParseCentsError),
        None => (unsigned, ""),
    };

    if units_part.is_empty() && frac_part.is_empty() {
        return Err(ParseCentsError);
    }

    let units: i64 = if units_part.is_empty() {
        0
    } else {
        units_part.parse().map_err(|_| ParseCentsError)?
    };

    let frac: i64 = match frac_part.len() {
        0 => 0,
        // A single digit like "5" means 50 cents
        1 => frac_part.parse::<i64>().map_err(|_| ParseCentsError)? * 10,
        _ => frac_part
            .get(..2)
            .ok_or(ParseCentsError)?
            .parse()
            .map_err(|_| ParseCentsError)?,
    };

    let cents = units * 100 + frac;
    Ok(if negative { -cents } else { cents })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("  42.50 "), Ok(4250));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // truncates
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("").is_err());
        assert!(parse_cents("-").is_err());
        assert!(parse_cents(".").is_err());
        assert!(parse_cents("12,34").is_err());
    }

    #[test]
    fn test_parse_format_round_trip() {
        for input in ["0.00", "1.00", "42.50", "-12.34", "1500.00"] {
            let cents = parse_cents(input).unwrap();
            assert_eq!(format_cents(cents), input);
        }
    }
}
