use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Domain tag prepended to every content hash.
///
/// Prevents a record hash from colliding with hashes computed elsewhere over
/// the same bytes under a different interpretation.
const CONTENT_DOMAIN: &str = "roadline-record-v1";

/// Content identifier for a stored record.
///
/// A `Cid` is the BLAKE3 hash of a record's serialized bytes, computed under
/// a fixed domain tag. Identical content always produces the same `Cid`,
/// making records deduplicatable and verifiable. Everywhere outside the blob
/// store the identifier is an opaque token.
///
/// The external representation (HTTP paths, the index file, the ledger) is
/// always lowercase hex, so `Cid` serializes as a hex string rather than a
/// byte array.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cid([u8; 32]);

impl Cid {
    /// Compute the identifier for a record's serialized bytes.
    pub fn for_content(data: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(CONTENT_DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Self(*hasher.finalize().as_bytes())
    }

    /// Create a `Cid` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Recompute the hash of `data` and compare against this identifier.
    pub fn verifies(&self, data: &[u8]) -> bool {
        Self::for_content(data) == *self
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cid({})", self.short_hex())
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Cid {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Cid> for [u8; 32] {
    fn from(id: Cid) -> Self {
        id.0
    }
}

// The index file is a hand-inspectable JSON document of identifier strings,
// so serde uses the hex form rather than the derived byte-array form.

impl Serialize for Cid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CidVisitor;

        impl Visitor<'_> for CidVisitor {
            type Value = Cid;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 64-character hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Cid, E> {
                Cid::from_hex(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(CidVisitor)
    }
}
