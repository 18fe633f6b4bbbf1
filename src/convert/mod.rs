pub mod addr;
pub mod byteorder;
pub mod sysmacros;

pub use addr::*;
pub use byteorder::*;
pub use sysmacros::*;
