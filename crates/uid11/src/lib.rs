//! Compact, sortable, URL-safe 64-bit identifiers.
//!
//! Two pieces make up this crate:
//!
//! - [`base58`]: a fixed-width codec that maps every `u64` to exactly 11
//!   characters of the Bitcoin Base58 alphabet. Because the width is fixed,
//!   encoded strings sort exactly like the integers they represent.
//! - [`xid`]: a time-plus-random layout that packs the milliseconds elapsed
//!   since 2011-11-11T11:11:11.111Z into the high 44 bits and 20 random bits
//!   into the low bits, so later IDs sort after earlier ones.
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use uid11::{base58, xid};
//!
//! let raw = xid::generate();
//! let encoded = base58::encode(raw);
//! assert_eq!(encoded.as_str().len(), 11);
//! assert_eq!(base58::decode(&encoded).unwrap(), raw);
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod base58;
mod error;
#[cfg(feature = "std")]
mod generator;
mod id;
mod rand;
#[cfg(feature = "serde")]
pub mod serde;
#[cfg(feature = "std")]
mod thread_random;
mod time;
pub mod xid;

pub use crate::base58::{Base58Error, Base58Formatter};
pub use crate::error::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use crate::thread_random::*;
pub use crate::time::*;
