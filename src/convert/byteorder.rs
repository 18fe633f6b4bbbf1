//! Byte-order conversion helpers.
//!
//! These mirror the expressions of `bits/byteswap.h`, `endian.h` and the
//! `ntohl`/`htonl` macro family of `netinet/in.h`.  The header picks one
//! of two mutually exclusive bodies per macro (identity or swap) with a
//! preprocessor guard; `to_be`/`from_be`/`to_le`/`from_le` make the same
//! choice at compile time for the build target.

// ===== Unconditional Byte Swaps =====

pub fn bswap_16(x: u16) -> u16 {
    x.swap_bytes()
}

pub fn bswap_32(x: u32) -> u32 {
    x.swap_bytes()
}

pub fn bswap_64(x: u64) -> u64 {
    x.swap_bytes()
}

// ===== Host / Network Order =====
// Network order is big-endian.

pub fn htons(hostshort: u16) -> u16 {
    hostshort.to_be()
}

pub fn htonl(hostlong: u32) -> u32 {
    hostlong.to_be()
}

pub fn ntohs(netshort: u16) -> u16 {
    u16::from_be(netshort)
}

pub fn ntohl(netlong: u32) -> u32 {
    u32::from_be(netlong)
}

// ===== Host / Explicit Endianness =====

pub fn htobe16(x: u16) -> u16 {
    x.to_be()
}

pub fn htobe32(x: u32) -> u32 {
    x.to_be()
}

pub fn htobe64(x: u64) -> u64 {
    x.to_be()
}

pub fn htole16(x: u16) -> u16 {
    x.to_le()
}

pub fn htole32(x: u32) -> u32 {
    x.to_le()
}

pub fn htole64(x: u64) -> u64 {
    x.to_le()
}

pub fn be16toh(x: u16) -> u16 {
    u16::from_be(x)
}

pub fn be32toh(x: u32) -> u32 {
    u32::from_be(x)
}

pub fn be64toh(x: u64) -> u64 {
    u64::from_be(x)
}

pub fn le16toh(x: u16) -> u16 {
    u16::from_le(x)
}

pub fn le32toh(x: u32) -> u32 {
    u32::from_le(x)
}

pub fn le64toh(x: u64) -> u64 {
    u64::from_le(x)
}
