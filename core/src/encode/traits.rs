//! encode/traits.rs
//!
//! The `Encode` capability and its structural implementations.
//!
//! A type either writes itself through a hand-written `Encode` impl (a hook that owns
//! its entire sub-encoding) or uses one of the structural rules below:
//! - scalars and byte strings go through the primitive encoder
//! - sequences and tuples encode each element in order, then wrap them in a list
//! - records use `impl_record_codec!`, which encodes fields in declaration order

use bytes::Bytes;

use crate::encode::sink::Sink;
use crate::types::Result;

/// Values with a canonical encoding.
pub trait Encode {
    /// Write the complete, self-contained encoding of `self`.
    fn encode(&self, sink: &mut Sink) -> Result<()>;

    /// Write the encoding of an absent value of this type (`Option::None`).
    ///
    /// Defaults to the empty string. Hooks that give "nil" a different shape
    /// override this, and must still produce a valid encoding.
    fn encode_absent(sink: &mut Sink) -> Result<()>
    where
        Self: Sized,
    {
        sink.write_string(&[]);
        Ok(())
    }
}

macro_rules! impl_encode_uint {
    ($($t:ty),+) => {
        $(
            impl Encode for $t {
                #[inline]
                fn encode(&self, sink: &mut Sink) -> Result<()> {
                    sink.write_uint(*self as u128);
                    Ok(())
                }
            }
        )+
    };
}

impl_encode_uint!(u8, u16, u32, u64, u128, usize);

impl Encode for bool {
    #[inline]
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_bool(*self);
        Ok(())
    }
}

impl Encode for str {
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_string(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_string(self.as_bytes());
        Ok(())
    }
}

impl Encode for Bytes {
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_string(self);
        Ok(())
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_string(self);
        Ok(())
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        sink.write_list(|sink| {
            for item in self {
                item.encode(sink)?;
            }
            Ok(())
        })
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        self.as_slice().encode(sink)
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        match self {
            Some(v) => v.encode(sink),
            None => T::encode_absent(sink),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        (**self).encode(sink)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    #[inline]
    fn encode(&self, sink: &mut Sink) -> Result<()> {
        (**self).encode(sink)
    }
}

macro_rules! impl_encode_tuple {
    ($($name:ident => $idx:tt),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            fn encode(&self, sink: &mut Sink) -> Result<()> {
                sink.write_list(|sink| {
                    $( self.$idx.encode(sink)?; )+
                    Ok(())
                })
            }
        }
    };
}

impl_encode_tuple!(A => 0);
impl_encode_tuple!(A => 0, B => 1);
impl_encode_tuple!(A => 0, B => 1, C => 2);
impl_encode_tuple!(A => 0, B => 1, C => 2, D => 3);
impl_encode_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4);
impl_encode_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
