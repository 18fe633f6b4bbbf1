//! Constant bindings for the Linux networking, socket, IPv6,
//! pthread-size, time and byte-order headers.
//!
//! The crate carries three things:
//! - flat `pub const` bindings with the C names kept verbatim, resolved
//!   at compile time to the build target's word size and byte order
//!   (`constants`);
//! - a name → value registry built once and immutable afterwards, for
//!   consumers that address the bindings as data (`table`);
//! - pure helpers replicating the handful of expressions the headers
//!   define as macros: byte swaps, host/network order conversion,
//!   address class tests and device number packing (`convert`).
//!
//! There is no I/O and no mutable state after initialization; everything
//! here is safe to share across threads.

pub mod constants;
pub mod convert;
pub mod table;

pub use constants::*;
pub use convert::*;
pub use table::{
    entries, entries_in, entry, export_cbor, lookup, name_of, Category, ConstDef, ConstValue,
    UnknownConstant,
};
