//! Byte-order constants.
//!
//! Primary Source References:
//! - glibc 2.22: endian.h, bits/endian.h
//!
//! The header carries both byte-order bodies behind preprocessor guards;
//! here `BYTE_ORDER` collapses to the build target's order via
//! `cfg(target_endian)`.

pub const LITTLE_ENDIAN: i32 = 1234; // Least significant byte first
pub const BIG_ENDIAN: i32 = 4321; // Most significant byte first
pub const PDP_ENDIAN: i32 = 3412; // LSB first within 16-bit halves

#[cfg(target_endian = "little")]
pub const BYTE_ORDER: i32 = LITTLE_ENDIAN;
#[cfg(target_endian = "big")]
pub const BYTE_ORDER: i32 = BIG_ENDIAN;

pub const FLOAT_WORD_ORDER: i32 = BYTE_ORDER;
