//! Fixed-width integer limits.
//!
//! Primary Source References:
//! - glibc 2.22: stdint.h

// ===== Signed Minima =====
pub const INT8_MIN: i8 = -128;
pub const INT16_MIN: i16 = -32767 - 1;
pub const INT32_MIN: i32 = -2147483647 - 1;
pub const INT64_MIN: i64 = -9223372036854775807 - 1;

// ===== Signed Maxima =====
pub const INT8_MAX: i8 = 127;
pub const INT16_MAX: i16 = 32767;
pub const INT32_MAX: i32 = 2147483647;
pub const INT64_MAX: i64 = 9223372036854775807;

// ===== Unsigned Maxima =====
pub const UINT8_MAX: u8 = 255;
pub const UINT16_MAX: u16 = 65535;
pub const UINT32_MAX: u32 = 4294967295;
pub const UINT64_MAX: u64 = 18446744073709551615;
