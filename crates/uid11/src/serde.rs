//! Field adapters for `#[serde(with = "...")]`.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use uid11::Xid;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "uid11::serde::as_base58")]
//!     id: Xid,
//!     #[serde(with = "uid11::serde::as_native")]
//!     parent: Xid,
//! }
//! ```
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes an [`Xid`](crate::Xid) as its raw `u64`.
///
/// Every `u64` is a valid xid, so deserialization never fails on range.
pub mod as_native {
    use super::*;
    use crate::Xid;

    pub fn serialize<S>(id: &Xid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Xid, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Xid::from_raw)
    }
}

/// Serializes an [`Xid`](crate::Xid) as its 11 character Base58 string.
pub mod as_base58 {
    use super::*;
    use crate::{Error, Xid};

    pub fn serialize<S>(id: &Xid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Xid, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base58Visitor;

        impl ::serde::de::Visitor<'_> for Base58Visitor {
            type Value = Xid;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("an 11 character base58 string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: ::serde::de::Error,
            {
                Xid::decode(v).map_err(|e| ::serde::de::Error::custom(Error::Base58Error(e)))
            }
        }

        d.deserialize_str(Base58Visitor)
    }
}
