//! decode/traits.rs
//!
//! The `Decode` capability and its structural implementations.
//!
//! Mirrors `encode/traits.rs`: every type that encodes structurally decodes
//! structurally, and a hand-written impl takes over the whole sub-decoding.

use std::io::Read;
use std::mem::size_of;

use bytes::Bytes;

use crate::decode::stream::Stream;
use crate::types::{Kind, Result};

/// Values that can be read back from their canonical encoding.
pub trait Decode: Sized {
    /// Consume exactly one value from `stream`.
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self>;

    /// Read a value that may be absent. The empty string means absent.
    ///
    /// Hooks whose absent form is something else override this together with
    /// `Encode::encode_absent`.
    fn decode_optional<R: Read>(stream: &mut Stream<R>) -> Result<Option<Self>> {
        if stream.kind()? == (Kind::String, 0) {
            stream.skip()?;
            return Ok(None);
        }
        Self::decode(stream).map(Some)
    }
}

macro_rules! impl_decode_uint {
    ($($t:ty),+) => {
        $(
            impl Decode for $t {
                #[inline]
                fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
                    // `uint` bounds the payload to the width, so the cast is lossless.
                    Ok(stream.uint(size_of::<$t>())? as $t)
                }
            }
        )+
    };
}

impl_decode_uint!(u8, u16, u32, u64, u128, usize);

impl Decode for bool {
    #[inline]
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        stream.boolean()
    }
}

impl Decode for String {
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        let b = stream.bytes()?;
        Ok(String::from_utf8(b.to_vec())?)
    }
}

impl Decode for Bytes {
    #[inline]
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        stream.bytes()
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        let mut out = [0u8; N];
        stream.read_bytes_exact(&mut out)?;
        Ok(out)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        stream.enter_list()?;
        let mut out = Vec::new();
        while !stream.at_list_end() {
            out.push(T::decode(stream)?);
        }
        stream.exit_list()?;
        Ok(out)
    }
}

/// The empty string reads as `None`.
///
/// `Some(v)` whose own encoding is the empty string (`Some(0)`, `Some(false)`,
/// `Some(String::new())`) therefore decodes as `None`; callers that must tell
/// them apart encode the presence explicitly.
impl<T: Decode> Decode for Option<T> {
    #[inline]
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        T::decode_optional(stream)
    }
}

impl<T: Decode> Decode for Box<T> {
    #[inline]
    fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
        T::decode(stream).map(Box::new)
    }
}

macro_rules! impl_decode_tuple {
    ($($name:ident),+) => {
        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode<R: Read>(stream: &mut Stream<R>) -> Result<Self> {
                stream.enter_list()?;
                let value = ($($name::decode(stream)?,)+);
                stream.exit_list()?;
                Ok(value)
            }
        }
    };
}

impl_decode_tuple!(A);
impl_decode_tuple!(A, B);
impl_decode_tuple!(A, B, C);
impl_decode_tuple!(A, B, C, D);
impl_decode_tuple!(A, B, C, D, E);
impl_decode_tuple!(A, B, C, D, E, F);
