//! One-decimal magnitude rendering.

/// Render a magnitude with exactly one digit after the decimal point.
///
/// Rounds half-up (away from zero) on the shortest decimal form of the
/// value, so `2.45` gives `2.5` regardless of its binary representation.
/// A value that rounds to zero is shown without a sign. Non-finite values
/// render as `NaN`, `inf` or `-inf`.
pub fn format_magnitude(magnitude: f64) -> String {
    if !magnitude.is_finite() {
        return magnitude.to_string();
    }

    // Display for f64 never uses exponent notation.
    let shortest = magnitude.abs().to_string();
    let (whole, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut fraction = fraction.bytes();
    let tenths = fraction.next().unwrap_or(b'0');
    let rounds_up = fraction.next().is_some_and(|d| d >= b'5');

    let mut digits: Vec<u8> = whole.bytes().chain([tenths]).collect();
    if rounds_up {
        increment(&mut digits);
    }

    let negative = magnitude < 0.0 && digits.iter().any(|&d| d != b'0');
    let (whole, tenths) = digits.split_at(digits.len() - 1);

    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(whole.iter().copied().map(char::from));
    out.push('.');
    out.extend(tenths.iter().copied().map(char::from));
    out
}

/// Add one to a big-endian run of ASCII digits.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
