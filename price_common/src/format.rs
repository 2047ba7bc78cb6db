//! USD display formatting for quoted prices.
//!
//! Quotes arrive as decimal strings and are shown with en-US digit grouping
//! and at most [`MAX_FRACTION_DIGITS`] fractional digits, trailing zeros
//! dropped: `"1234.5"` becomes `$1,234.5`.

/// Upper bound on fractional digits shown.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Currency symbol placed in front of the amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Format a quoted price for display.
///
/// The value is rounded half away from zero on its shortest decimal
/// representation, so `0.0000005` shows as `$0.000001`.
///
/// Returns `None` when `raw` does not parse to a finite number.
pub fn format_usd(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let (integer, fraction) = round_fraction(&value.abs().to_string(), MAX_FRACTION_DIGITS);
    let fraction = fraction.trim_end_matches('0');
    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    let mut out = format!("{}{}{}", CURRENCY_SYMBOL, sign, group_thousands(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    Some(out)
}

/// Round a plain unsigned decimal string (`"12.3456789"`) half-up to at most
/// `digits` fractional places. Returns the integer and fractional digit strings.
fn round_fraction(decimal: &str, digits: usize) -> (String, String) {
    let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let kept = fraction.len().min(digits);
    let mut all: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(kept))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|&b| b >= b'5') {
        let mut i = all.len();
        loop {
            if i == 0 {
                all.insert(0, 1);
                break;
            }
            i -= 1;
            if all[i] == 9 {
                all[i] = 0;
            } else {
                all[i] += 1;
                break;
            }
        }
    }

    let int_len = all.len() - kept;
    let digits_to_string = |d: &[u8]| d.iter().map(|&b| char::from(b'0' + b)).collect::<String>();
    (digits_to_string(&all[..int_len]), digits_to_string(&all[int_len..]))
}

/// Insert `,` between every group of three digits, counted from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part() {
        assert_eq!(format_usd("1234.5").as_deref(), Some("$1,234.5"));
        assert_eq!(format_usd("1000000").as_deref(), Some("$1,000,000"));
        assert_eq!(format_usd("999").as_deref(), Some("$999"));
        assert_eq!(format_usd("12345678.25").as_deref(), Some("$12,345,678.25"));
    }

    #[test]
    fn limits_fraction_digits() {
        assert_eq!(format_usd("1.23").as_deref(), Some("$1.23"));
        assert_eq!(format_usd("0.000001234").as_deref(), Some("$0.000001"));
        assert_eq!(format_usd("0.1234567").as_deref(), Some("$0.123457"));
        assert_eq!(format_usd("2.5000000").as_deref(), Some("$2.5"));
        assert_eq!(format_usd("0.0000001").as_deref(), Some("$0"));
    }

    #[test]
    fn rounds_half_up_on_decimal_digits() {
        assert_eq!(format_usd("0.0000005").as_deref(), Some("$0.000001"));
        assert_eq!(format_usd("0.1234565").as_deref(), Some("$0.123457"));
        assert_eq!(format_usd("0.1234564").as_deref(), Some("$0.123456"));
        assert_eq!(format_usd("-0.0000005").as_deref(), Some("$-0.000001"));
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_usd("9.9999995").as_deref(), Some("$10"));
        assert_eq!(format_usd("999999.9999999").as_deref(), Some("$1,000,000"));
        assert_eq!(format_usd("0.9999999").as_deref(), Some("$1"));
    }

    #[test]
    fn accepts_surrounding_whitespace_and_exponents() {
        assert_eq!(format_usd(" 42 ").as_deref(), Some("$42"));
        assert_eq!(format_usd("1e3").as_deref(), Some("$1,000"));
    }

    #[test]
    fn negative_sign_follows_currency_symbol() {
        assert_eq!(format_usd("-1234.5").as_deref(), Some("$-1,234.5"));
        assert_eq!(format_usd("-0.0000001").as_deref(), Some("$0"));
    }

    #[test]
    fn rejects_non_finite_or_garbage() {
        assert_eq!(format_usd(""), None);
        assert_eq!(format_usd("abc"), None);
        assert_eq!(format_usd("NaN"), None);
        assert_eq!(format_usd("inf"), None);
    }
}
