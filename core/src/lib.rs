//! rlp-core
//!
//! Canonical Recursive Length Prefix codec.
//! Byte strings and nested lists in, one unique byte sequence out.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Codec layers
pub mod decode;
pub mod encode;
pub mod record;

// Values built on the codec
pub mod hash;
pub mod raw;

pub use decode::{decode_bytes, decode_bytes_with, decode_reader, ConfigError, Decode, Stream, StreamConfig};
pub use encode::{encode_list, encode_string, encode_to_vec, encode_to_writer, encode_uint, encoded_len, Encode, Sink};
pub use hash::{hash_encoded, keccak256, sha256, Hash, HashAlg};
pub use raw::Raw;
pub use types::{Kind, PrefixFault, Result, RlpError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::impl_record_codec;
    pub use crate::{Decode, Encode, Kind, Raw, Result, RlpError, Sink, Stream, StreamConfig};
}
