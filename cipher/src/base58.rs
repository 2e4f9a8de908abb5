//! Base58 encoding and decoding.
//!
//! The decoder works over a fixed output width: the input is read as a
//! single big-endian base 58 number, values shorter than the requested
//! width are left-padded with zero bytes and values that do not fit are
//! rejected. The encoder produces the canonical string for a byte slice,
//! rendering leading zero bytes as `1` characters.

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

static BASE58_CHARS: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[rustfmt::skip]
static BASE58_DIGITS: [Option<u8>; 128] = [
    None,     None,     None,     None,     None,     None,     None,     None,     // 0-7
    None,     None,     None,     None,     None,     None,     None,     None,     // 8-15
    None,     None,     None,     None,     None,     None,     None,     None,     // 16-23
    None,     None,     None,     None,     None,     None,     None,     None,     // 24-31
    None,     None,     None,     None,     None,     None,     None,     None,     // 32-39
    None,     None,     None,     None,     None,     None,     None,     None,     // 40-47
    None,     Some(0),  Some(1),  Some(2),  Some(3),  Some(4),  Some(5),  Some(6),  // 48-55
    Some(7),  Some(8),  None,     None,     None,     None,     None,     None,     // 56-63
    None,     Some(9),  Some(10), Some(11), Some(12), Some(13), Some(14), Some(15), // 64-71
    Some(16), None,     Some(17), Some(18), Some(19), Some(20), Some(21), None,     // 72-79
    Some(22), Some(23), Some(24), Some(25), Some(26), Some(27), Some(28), Some(29), // 80-87
    Some(30), Some(31), Some(32), None,     None,     None,     None,     None,     // 88-95
    None,     Some(33), Some(34), Some(35), Some(36), Some(37), Some(38), Some(39), // 96-103
    Some(40), Some(41), Some(42), Some(43), None,     Some(44), Some(45), Some(46), // 104-111
    Some(47), Some(48), Some(49), Some(50), Some(51), Some(52), Some(53), Some(54), // 112-119
    Some(55), Some(56), Some(57), None,     None,     None,     None,     None,     // 120-127
];

/// An error that can occur while decoding a base58 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid character encountered.
    #[error("invalid base58 character {0:#x}")]
    InvalidCharacter(u8),
    /// The decoded value does not fit the requested width.
    #[error("decoded base58 value exceeds the fixed output width")]
    Overflow,
}

/// Decodes a base58-encoded string into an `N` byte big-endian array.
///
/// The whole string is interpreted as one base 58 number. A value that
/// needs fewer than `N` bytes is left-padded with zeroes; a value that
/// needs more fails with [`Error::Overflow`].
pub fn decode_fixed<const N: usize>(data: &str) -> Result<[u8; N], Error> {
    let mut ret = [0u8; N];
    for d58 in data.bytes() {
        // Compute "X = X * 58 + next_digit" in base 256
        if usize::from(d58) >= BASE58_DIGITS.len() {
            return Err(Error::InvalidCharacter(d58));
        }
        let mut carry = match BASE58_DIGITS[usize::from(d58)] {
            Some(d58) => u32::from(d58),
            None => return Err(Error::InvalidCharacter(d58)),
        };
        for d256 in ret.iter_mut().rev() {
            carry += u32::from(*d256) * 58;
            *d256 = carry as u8;
            carry /= 256;
        }
        if carry != 0 {
            return Err(Error::Overflow);
        }
    }
    Ok(ret)
}

/// Encodes `data` as a base58 string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&d256| d256 == 0).count();
    // log2(256) / log2(58) ~ 1.37 = 137 / 100
    let mut digits: Vec<u8> = Vec::with_capacity(1 + data.len() * 137 / 100);
    // Build in little endian with 0-58 in place of characters...
    for &d256 in &data[zeros..] {
        let mut carry = u32::from(d256);
        for d58 in digits.iter_mut() {
            carry += u32::from(*d58) << 8;
            *d58 = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    // ... then reverse it and convert to chars
    let mut ret = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        ret.push('1');
    }
    for &d58 in digits.iter().rev() {
        ret.push(char::from(BASE58_CHARS[usize::from(d58)]));
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_fixed_basics() {
        assert_eq!(decode_fixed::<1>("1"), Ok([0]));
        assert_eq!(decode_fixed::<1>("2"), Ok([1]));
        assert_eq!(decode_fixed::<1>("21"), Ok([58]));
        assert_eq!(decode_fixed::<2>("21"), Ok([0, 58]));
        assert_eq!(decode_fixed::<2>("211"), Ok([13, 36]));
    }

    #[test]
    fn decode_fixed_pads_short_values() {
        assert_eq!(decode_fixed::<4>("1"), Ok([0, 0, 0, 0]));
        assert_eq!(decode_fixed::<4>("211"), Ok([0, 0, 13, 36]));
    }

    #[test]
    fn decode_fixed_rejects_bad_characters() {
        // The four visually ambiguous characters excluded from the alphabet.
        assert_eq!(decode_fixed::<4>("0"), Err(Error::InvalidCharacter(b'0')));
        assert_eq!(decode_fixed::<4>("O"), Err(Error::InvalidCharacter(b'O')));
        assert_eq!(decode_fixed::<4>("I"), Err(Error::InvalidCharacter(b'I')));
        assert_eq!(decode_fixed::<4>("l"), Err(Error::InvalidCharacter(b'l')));
        // No whitespace trimming.
        assert_eq!(decode_fixed::<4>(" 1"), Err(Error::InvalidCharacter(b' ')));
        // Non base58 char.
        assert_eq!(decode_fixed::<4>("¢"), Err(Error::InvalidCharacter(194)));
    }

    #[test]
    fn decode_fixed_rejects_oversized_values() {
        assert_eq!(decode_fixed::<1>("zz"), Err(Error::Overflow));
        assert_eq!(decode_fixed::<2>("zzz"), Err(Error::Overflow));
    }

    #[test]
    fn encode_basics() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]), "1");
        assert_eq!(encode(&[1]), "2");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(&[13, 36]), "211");

        // Leading zeroes
        assert_eq!(encode(&[0, 13, 36]), "1211");
        assert_eq!(encode(&[0, 0, 0, 0, 13, 36]), "1111211");
    }

    #[test]
    fn fixed_width_roundtrip() {
        let bytes = [7u8, 0, 255, 33, 90];
        assert_eq!(decode_fixed::<5>(&encode(&bytes)), Ok(bytes));

        // Leading zero bytes survive the trip through the `1` prefix.
        let bytes = [0u8, 0, 9, 255, 33];
        assert_eq!(decode_fixed::<5>(&encode(&bytes)), Ok(bytes));
    }
}
