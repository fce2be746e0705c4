//! hash.rs
//!
//! Content addressing over canonical encodings.
//!
//! Because every value has exactly one encoding, the digest of that encoding
//! identifies the value. Keccak-256 is the default; SHA-256 is available for
//! callers that address content with it.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use sha2::Sha256;
use sha3::{Digest as _, Keccak256};

use crate::decode::{Decode, Stream};
use crate::encode::{encode_to_vec, Encode, Sink};
use crate::types::Result;

pub const HASH_LEN: usize = 32;

/// Supported digest algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HashAlg {
    Keccak256,
    Sha256,
}

/// A 32-byte digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash(pub [u8; HASH_LEN]);

impl Hash {
    pub const ZERO: Hash = Hash([0u8; HASH_LEN]);

    /// Build from arbitrary bytes: longer input keeps its last 32 bytes,
    /// shorter input is left-padded with zeros.
    pub fn from_slice(b: &[u8]) -> Self {
        let b = if b.len() > HASH_LEN { &b[b.len() - HASH_LEN..] } else { b };
        let mut out = [0u8; HASH_LEN];
        out[HASH_LEN - b.len()..].copy_from_slice(b);
        Hash(out)
    }

    /// Parse hex with or without a `0x` prefix. Odd-length input gets a leading zero nibble.
    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = if s.len() % 2 == 1 {
            hex::decode(format!("0{s}"))?
        } else {
            hex::decode(s)?
        };
        Ok(Self::from_slice(&bytes))
    }

    pub fn digest(alg: HashAlg, data: &[u8]) -> Self {
        match alg {
            HashAlg::Keccak256 => Hash(Keccak256::digest(data).into()),
            HashAlg::Sha256 => Hash(Sha256::digest(data).into()),
        }
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl FromStr for Hash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LEN]> for Hash {
    fn from(b: [u8; HASH_LEN]) -> Self {
        Hash(b)
    }
}

impl Encode for Hash {
    #[inline]
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_string(&self.0);
        Ok(())
    }
}

impl Decode for Hash {
    #[inline]
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        <[u8; HASH_LEN]>::decode(stream).map(Hash)
    }
}

#[inline]
pub fn keccak256(data: &[u8]) -> Hash {
    Hash::digest(HashAlg::Keccak256, data)
}

#[inline]
pub fn sha256(data: &[u8]) -> Hash {
    Hash::digest(HashAlg::Sha256, data)
}

/// Keccak-256 of the canonical encoding of `value`.
pub fn hash_encoded<T: Encode + ?Sized>(value: &T) -> Result<Hash> {
    encode_to_vec(value).map(|enc| keccak256(&enc))
}
