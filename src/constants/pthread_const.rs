//! Sizes of the opaque pthread types.
//!
//! Primary Source References:
//! - glibc 2.22: bits/pthreadtypes.h (x86_64 and 32-bit variants)
//! - glibc 2.22: bits/wordsize.h
//!
//! The header defines these once per architecture; exactly one variant
//! is selected here by the target's word size.  The x32 variant from the
//! source header is not carried — it corresponds to no Rust pointer
//! width.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("no pthread layout variant matches this target's word size");

// ===== Word Size =====
#[cfg(target_pointer_width = "64")]
pub const __WORDSIZE: u32 = 64;
#[cfg(target_pointer_width = "32")]
pub const __WORDSIZE: u32 = 32;

// ===== pthread Type Sizes, 64-bit =====
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_ATTR_T: usize = 56;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_MUTEX_T: usize = 40;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_MUTEXATTR_T: usize = 4;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_COND_T: usize = 48;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_CONDATTR_T: usize = 4;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_RWLOCK_T: usize = 56;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_RWLOCKATTR_T: usize = 8;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_BARRIER_T: usize = 32;
#[cfg(target_pointer_width = "64")]
pub const __SIZEOF_PTHREAD_BARRIERATTR_T: usize = 4;

// ===== pthread Type Sizes, 32-bit =====
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_ATTR_T: usize = 36;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_MUTEX_T: usize = 24;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_MUTEXATTR_T: usize = 4;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_COND_T: usize = 48;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_CONDATTR_T: usize = 4;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_RWLOCK_T: usize = 32;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_RWLOCKATTR_T: usize = 8;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_BARRIER_T: usize = 20;
#[cfg(target_pointer_width = "32")]
pub const __SIZEOF_PTHREAD_BARRIERATTR_T: usize = 4;
