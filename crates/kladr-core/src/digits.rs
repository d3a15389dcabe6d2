// crates/kladr-core/src/digits.rs

//! # Digit-string arithmetic
//!
//! Codes reach 19 digits and keep their leading zeros, so they never go
//! through integer types. Everything here works on ASCII digit strings of
//! arbitrary length.

/// `true` if `s` is non-empty and made of ASCII digits only.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `true` if every character of `s` is `'0'` (the empty string counts as zero).
pub fn is_zero(s: &str) -> bool {
    s.bytes().all(|b| b == b'0')
}

/// Adds one to a decimal digit string, carrying leftwards.
///
/// The width is kept unless the carry runs off the left edge, in which case
/// the result is one digit longer. The empty string increments to `"1"`.
///
/// ```rust
/// use kladr_core::digits::increment;
///
/// assert_eq!(increment("0199"), "0200");
/// assert_eq!(increment("999"), "1000");
/// ```
pub fn increment(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    let mut carried = Vec::with_capacity(out.len() + 1);
    carried.push(b'1');
    carried.extend_from_slice(&out);
    String::from_utf8_lossy(&carried).into_owned()
}

/// Range bounds over fixed-width keys of `width` digits.
///
/// Returns `None` when no key of that width can carry the prefix. An
/// upper bound of `None` means the range is open to the end of the keyspace
/// (the prefix was all nines, or empty).
pub fn prefix_bounds(prefix: &str, width: usize) -> Option<(String, Option<String>)> {
    if prefix.len() > width {
        return None;
    }
    let tail = width - prefix.len();
    let lower = pad_zeros(prefix, tail);
    let next = increment(prefix);
    let upper = (next.len() == prefix.len()).then(|| pad_zeros(&next, tail));
    Some((lower, upper))
}

/// Truncates `code` to `width` digits, or right-pads it with zeros.
pub fn fit(code: &str, width: usize) -> String {
    if code.len() >= width {
        code[..width].to_owned()
    } else {
        pad_zeros(code, width - code.len())
    }
}

fn pad_zeros(s: &str, n: usize) -> String {
    let mut out = String::with_capacity(s.len() + n);
    out.push_str(s);
    out.extend(std::iter::repeat('0').take(n));
    out
}
