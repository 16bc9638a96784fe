// src/domain/format.rs

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number the way an en-US `toLocaleString` does: comma-grouped
/// integer part, at most three fraction digits, trailing zeros trimmed.
///
/// Rounding is half away from zero on the shortest decimal form, so
/// `1.0005` becomes `1.001`. Negative values keep their sign even when
/// they round to zero.
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let symbol = if value > 0.0 { "∞" } else { "-∞" };
        return symbol.to_string();
    }

    let (int_part, frac_part) = round_fraction(&format!("{}", value.abs()), MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Rounds a plain decimal string to `digits` fraction digits, half up.
/// Returns the integer digits and exactly `digits` fraction digits.
fn round_fraction(decimal: &str, digits: usize) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));

    let mut kept: Vec<u8> = int_part.bytes().collect();
    kept.extend(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits));

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let int_digits = String::from_utf8_lossy(&kept[..split]).into_owned();
    let frac_digits = String::from_utf8_lossy(&kept[split..]).into_owned();
    (int_digits, frac_digits)
}

/// Plain number without grouping; whole numbers drop the `.0`.
pub fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

pub fn map_link(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={latitude},{longitude}")
}
