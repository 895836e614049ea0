//! Unsigned digit-sequence arithmetic.
//!
//! Magnitudes are stored most significant digit first, one decimal digit
//! (0-9) per byte, with no leading zeros. Zero is the empty sequence.

use std::cmp::Ordering;

/// Drops leading zeros so the sequence satisfies the magnitude invariant.
pub(crate) fn trim(mut digits: Vec<u8>) -> Vec<u8> {
    let first = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    digits.drain(..first);
    digits
}

/// Multiplies a magnitude by `10^zeros`.
pub(crate) fn shift(digits: &[u8], zeros: u32) -> Vec<u8> {
    if digits.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(digits.len() + zeros as usize);
    out.extend_from_slice(digits);
    out.resize(digits.len() + zeros as usize, 0);
    out
}

pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut lhs = a.iter().rev();
    let mut rhs = b.iter().rev();
    let mut carry = 0u8;
    loop {
        let (x, y) = match (lhs.next(), rhs.next()) {
            (None, None) => break,
            (x, y) => (x.copied().unwrap_or(0), y.copied().unwrap_or(0)),
        };
        let sum = x + y + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out.reverse();
    trim(out)
}

/// Computes `a - b`. Callers guarantee `a >= b`.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut rhs = b.iter().rev();
    let mut borrow = 0u8;
    for &x in a.iter().rev() {
        let y = rhs.next().copied().unwrap_or(0) + borrow;
        if x >= y {
            out.push(x - y);
            borrow = 0;
        } else {
            out.push(x + 10 - y);
            borrow = 1;
        }
    }
    out.reverse();
    trim(out)
}

pub(crate) fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    // Little-endian column sums, carried in a second pass.
    let mut columns = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().rev().enumerate() {
        for (j, &y) in b.iter().rev().enumerate() {
            columns[i + j] += u64::from(x) * u64::from(y);
        }
    }
    let mut carry = 0u64;
    for column in &mut columns {
        let value = *column + carry;
        *column = value % 10;
        carry = value / 10;
    }
    #[allow(clippy::cast_possible_truncation)]
    let out = columns.iter().rev().map(|&d| d as u8).collect();
    trim(out)
}

/// Brings down `digit` into `remainder` and returns the next quotient digit.
pub(crate) fn division_step(remainder: &mut Vec<u8>, digit: u8, divisor: &[u8]) -> u8 {
    if !(remainder.is_empty() && digit == 0) {
        remainder.push(digit);
    }
    let mut quotient = 0u8;
    while cmp(remainder, divisor) != Ordering::Less {
        *remainder = sub(remainder, divisor);
        quotient += 1;
    }
    quotient
}

/// Schoolbook long division. Returns `(quotient, remainder)`.
///
/// `divisor` must be non-zero.
pub(crate) fn div_rem(dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, Vec<u8>) {
    debug_assert!(!divisor.is_empty());
    let mut quotient = Vec::with_capacity(dividend.len());
    let mut remainder = Vec::with_capacity(divisor.len() + 1);
    for &digit in dividend {
        let q = division_step(&mut remainder, digit, divisor);
        if !(quotient.is_empty() && q == 0) {
            quotient.push(q);
        }
    }
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(text: &str) -> Vec<u8> {
        trim(text.bytes().map(|b| b - b'0').collect())
    }

    fn text(digits: &[u8]) -> String {
        if digits.is_empty() {
            return "0".to_string();
        }
        digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim(vec![0, 0, 1, 0]), vec![1, 0]);
        assert!(trim(vec![0, 0]).is_empty());
    }

    #[test]
    fn test_shift() {
        assert_eq!(text(&shift(&digits("12"), 3)), "12000");
        assert!(shift(&[], 3).is_empty());
    }

    #[test]
    fn test_add_with_carry() {
        assert_eq!(text(&add(&digits("999"), &digits("1"))), "1000");
        assert_eq!(text(&add(&[], &digits("42"))), "42");
    }

    #[test]
    fn test_sub_with_borrow() {
        assert_eq!(text(&sub(&digits("1000"), &digits("1"))), "999");
        assert_eq!(text(&sub(&digits("42"), &digits("42"))), "0");
    }

    #[test]
    fn test_mul() {
        assert_eq!(text(&mul(&digits("2099"), &digits("20"))), "41980");
        assert_eq!(
            text(&mul(&digits("99999999999"), &digits("99999999999"))),
            "9999999999800000000001"
        );
        assert!(mul(&digits("5"), &[]).is_empty());
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = div_rem(&digits("9999"), &digits("3"));
        assert_eq!(text(&q), "3333");
        assert!(r.is_empty());

        let (q, r) = div_rem(&digits("10"), &digits("4"));
        assert_eq!(text(&q), "2");
        assert_eq!(text(&r), "2");

        let (q, r) = div_rem(&digits("7"), &digits("12"));
        assert!(q.is_empty());
        assert_eq!(text(&r), "7");
    }

    #[test]
    fn test_cmp() {
        assert_eq!(cmp(&digits("100"), &digits("99")), Ordering::Greater);
        assert_eq!(cmp(&digits("12"), &digits("13")), Ordering::Less);
        assert_eq!(cmp(&[], &[]), Ordering::Equal);
    }
}
