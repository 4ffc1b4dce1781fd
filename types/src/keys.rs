//! Script (control) key types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 33-byte compressed secp256k1 public key controlling spend authority
/// over an asset output.
///
/// This crate never derives or tweaks keys; it only carries their serialized
/// form. Key derivation lives with the wallet collaborator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptKey(pub [u8; 33]);

impl ScriptKey {
    /// The well-known NUMS (nothing-up-my-sleeve) point: a public key with no
    /// discoverable private counterpart. An output controlled by this key can
    /// never be spent, which is exactly what burn outputs and tombstones need.
    pub const NUMS: Self = Self([
        0x02, 0x7c, 0x79, 0xb9, 0xb2, 0x6e, 0x46, 0x38, 0x95, 0xee, 0xf5,
        0x67, 0x9d, 0x85, 0x58, 0x94, 0x2c, 0x86, 0xc4, 0xad, 0x22, 0x33,
        0xad, 0xef, 0x01, 0xbc, 0x3e, 0x6d, 0x54, 0x0b, 0x36, 0x53, 0xfe,
    ]);

    pub fn new(bytes: [u8; 33]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Whether this key is the NUMS marker, i.e. provably unspendable.
    pub fn is_unspendable(&self) -> bool {
        *self == Self::NUMS
    }
}

impl fmt::Debug for ScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScriptKey({:02x}{:02x}{:02x}{:02x}..)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

impl fmt::Display for ScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Serialize for ScriptKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for ScriptKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> serde::de::Visitor<'de> for KeyVisitor {
            type Value = ScriptKey;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "33 bytes")
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                let arr: [u8; 33] = v
                    .try_into()
                    .map_err(|_| E::invalid_length(v.len(), &self))?;
                Ok(ScriptKey(arr))
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut arr = [0u8; 33];
                for (i, byte) in arr.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(ScriptKey(arr))
            }
        }

        deserializer.deserialize_bytes(KeyVisitor)
    }
}
