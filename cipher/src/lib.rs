//! MDL Cipher Library
//!
//! This library provides the address primitives for the MDL chain:
//! base58 decoding and encoding over fixed-width values, and parsing of
//! printable addresses with checksum verification.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

extern crate core;
#[cfg(feature = "std")]
extern crate std;

pub mod address;
pub mod base58;

pub use address::{decode_base58_address, Address, DecodeError, ADDRESS_LEN, CHECKSUM_LEN};
