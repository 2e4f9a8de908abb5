//! MDL addresses.
//!
//! An address travels as a base58 string covering a fixed 25 byte
//! value. Short values are left-padded with zero bytes on decode, and
//! the trailing checksum is verified before an [`Address`] is handed
//! out.

use core::fmt;
use core::str::FromStr;

use hashes::{ripemd160, sha256, Hash};
use thiserror::Error;

use crate::base58;

/// Length in bytes of a serialized address.
pub const ADDRESS_LEN: usize = 25;

/// Length in bytes of the checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// An error that can occur while decoding an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input string is empty.
    #[error("address string is empty")]
    EmptyInput,
    /// A character outside the base58 alphabet.
    #[error("invalid base58 character {0:#x}")]
    InvalidCharacter(u8),
    /// The base58 value needs more than [`ADDRESS_LEN`] bytes.
    #[error("base58 value longer than 25 bytes")]
    Overflow,
    /// The checksum carried by the input does not match its payload.
    #[error("checksum mismatch: expected {expected:02x?}, found {actual:02x?}")]
    ChecksumMismatch {
        /// Checksum recomputed from the version and digest.
        expected: [u8; CHECKSUM_LEN],
        /// Checksum carried in the input.
        actual: [u8; CHECKSUM_LEN],
    },
}

impl From<base58::Error> for DecodeError {
    fn from(e: base58::Error) -> DecodeError {
        match e {
            base58::Error::InvalidCharacter(b) => DecodeError::InvalidCharacter(b),
            base58::Error::Overflow => DecodeError::Overflow,
        }
    }
}

/// An MDL address.
///
/// The printable form is the base58 encoding of 25 bytes: the version,
/// the 20 byte key digest and a 4 byte checksum. The checksum is the
/// leading [`CHECKSUM_LEN`] bytes of the SHA-256 hash of the version
/// and digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    /// Address format version.
    pub version: u8,
    /// Digest identifying the key the address pays to.
    pub hash: ripemd160::Hash,
}

impl Address {
    /// Computes the checksum of the version and digest bytes.
    pub fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let mut payload = [0u8; ADDRESS_LEN - CHECKSUM_LEN];
        payload[0] = self.version;
        payload[1..].copy_from_slice(&self.hash[..]);
        let digest = sha256::Hash::hash(&payload);
        let mut checksum = [0u8; CHECKSUM_LEN];
        checksum.copy_from_slice(&digest[..CHECKSUM_LEN]);
        checksum
    }

    /// Builds an address from its serialized form, verifying the
    /// trailing checksum.
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Result<Address, DecodeError> {
        let mut digest = [0u8; 20];
        digest.copy_from_slice(&bytes[1..21]);
        let address = Address {
            version: bytes[0],
            hash: ripemd160::Hash::from_byte_array(digest),
        };

        let expected = address.checksum();
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(&bytes[21..]);
        if expected != actual {
            return Err(DecodeError::ChecksumMismatch { expected, actual });
        }
        Ok(address)
    }

    /// Serializes the address, appending its checksum.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LEN] {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = self.version;
        bytes[1..21].copy_from_slice(&self.hash[..]);
        bytes[21..].copy_from_slice(&self.checksum());
        bytes
    }

    /// Returns the null address, with zero version and digest.
    pub fn null() -> Address {
        Address {
            version: 0,
            hash: ripemd160::Hash::all_zeros(),
        }
    }

    /// Whether this is the null address.
    pub fn is_null(&self) -> bool {
        *self == Address::null()
    }
}

impl FromStr for Address {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Address, DecodeError> {
        if s.is_empty() {
            return Err(DecodeError::EmptyInput);
        }
        let bytes = base58::decode_fixed::<ADDRESS_LEN>(s)?;
        Address::from_bytes(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base58::encode(&self.to_bytes()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a base58 address string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Address, E>
            where
                E: serde::de::Error,
            {
                v.parse::<Address>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

/// Decodes the first `len` bytes of `s` as an address.
///
/// Variant of address parsing for callers that supply the text together
/// with an explicit length. Returns the decoded address and `true` on
/// success. On any failure, including a `len` that runs past the end of
/// `s` or splits a multi-byte character, returns [`Address::null`] and
/// `false`.
pub fn decode_base58_address(s: &str, len: usize) -> (Address, bool) {
    let Some(prefix) = s.get(..len) else {
        return (Address::null(), false);
    };
    match prefix.parse::<Address>() {
        Ok(address) => (address, true),
        Err(_) => (Address::null(), false),
    }
}
