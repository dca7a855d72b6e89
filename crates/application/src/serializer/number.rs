//! Number text in the host's canonical form
//!
//! Integral values print without a fraction, the shortest round-trip digits
//! are used, and the exponent form kicks in below 1e-6 and from 1e21 on.

/// JSON encoding of a number. Non-finite values have no JSON form and encode as `null`.
pub fn to_json(n: f64) -> String {
    if n.is_finite() {
        canonical(n)
    } else {
        "null".to_string()
    }
}

/// Inspection text of a number, as shown inside typed array dumps.
pub fn inspect(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else {
        canonical(n)
    }
}

fn canonical(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        let zeros = usize::try_from(point - k).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= 21 {
        let split = usize::try_from(point).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < point && point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let lead = if digits.len() == 1 {
            digits.clone()
        } else {
            format!("{}.{}", &digits[..1], &digits[1..])
        };
        format!("{lead}e{sign}{}", exponent.abs())
    };

    if n < 0.0 { format!("-{body}") } else { body }
}
