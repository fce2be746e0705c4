//! record.rs
//!
//! Structural fallback for record types.
//!
//! A record encodes as a list of its fields in declaration order; decoding reads the
//! fields back in the same order and requires the list to hold nothing else. Types
//! that need a different shape implement `Encode` / `Decode` by hand instead.

/// Implement `Encode` and `Decode` for a struct as the ordered list of the named fields.
///
/// ```
/// use rlp_core::{decode_bytes, encode_to_vec, impl_record_codec};
///
/// #[derive(Debug, PartialEq)]
/// struct Account {
///     nonce: u64,
///     name: String,
/// }
///
/// impl_record_codec!(Account { nonce, name });
///
/// let acct = Account { nonce: 1, name: "cat".into() };
/// let enc = encode_to_vec(&acct).unwrap();
/// assert_eq!(enc, vec![0xc5, 0x01, 0x83, b'c', b'a', b't']);
/// assert_eq!(decode_bytes::<Account>(&enc).unwrap(), acct);
/// ```
#[macro_export]
macro_rules! impl_record_codec {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Encode for $ty {
            fn encode(&self, sink: &mut $crate::Sink) -> $crate::Result<()> {
                sink.write_list(|sink| {
                    $( sink.append(&self.$field)?; )+
                    Ok(())
                })
            }
        }

        impl $crate::Decode for $ty {
            fn decode<R: ::std::io::Read>(
                stream: &mut $crate::Stream<R>,
            ) -> $crate::Result<Self> {
                stream.enter_list()?;
                // Struct expressions evaluate their fields in source order.
                let value = $ty {
                    $( $field: stream.decode()?, )+
                };
                stream.exit_list()?;
                Ok(value)
            }
        }
    };
}
