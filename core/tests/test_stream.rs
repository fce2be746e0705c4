// Stream cursor suite. Covers the decoder's safety guarantees:

// * truncated input always reports end of input
// * list payloads are consumed exactly (no over- or under-reads)
// * declared sizes and nesting are bounded before anything is read
// * only canonical prefixes are accepted

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::Bytes;
    use rlp_core::{
        decode_bytes, decode_bytes_with, decode_reader, encode_to_vec, Kind, PrefixFault, Raw,
        RlpError, Sink, Stream, StreamConfig,
    };

    fn stream(input: &[u8]) -> Stream<&[u8]> {
        Stream::from_slice(input, StreamConfig::default())
    }

    fn sample_encodings() -> Vec<Vec<u8>> {
        vec![
            vec![0x05],
            vec![0x81, 0x80],
            encode_to_vec("dog").unwrap(),
            encode_to_vec(&"x".repeat(56)).unwrap(),
            encode_to_vec(&"y".repeat(1024)).unwrap(),
            encode_to_vec(&vec![1u64, 2, 3]).unwrap(),
            encode_to_vec(&(vec!["cat"; 20], 1024u64)).unwrap(),
            encode_to_vec(&vec![vec![vec![0u8]]]).unwrap(),
        ]
    }

    // # ✅ 1. Truncation

    #[test]
    fn every_truncated_encoding_is_unexpected_eof() {
        for enc in sample_encodings() {
            let cut = &enc[..enc.len() - 1];
            let res = decode_bytes::<Raw>(cut);
            assert!(
                matches!(res, Err(RlpError::UnexpectedEof)),
                "input {:02x?} gave {:?}",
                cut,
                res
            );
        }
    }

    #[test]
    fn empty_input_is_unexpected_eof() {
        assert!(matches!(decode_bytes::<u64>(&[]), Err(RlpError::UnexpectedEof)));
        assert!(matches!(stream(&[]).kind(), Err(RlpError::UnexpectedEof)));
    }

    #[test]
    fn truncated_long_header() {
        // Claims two length bytes, provides one.
        assert!(matches!(decode_bytes::<Bytes>(&[0xb9, 0x04]), Err(RlpError::UnexpectedEof)));
    }

    #[test]
    fn oversized_claim_fails_before_allocation() {
        // 4096 declared, 0 present.
        let mut s = stream(&[0xb9, 0x10, 0x00]);
        assert!(matches!(s.kind(), Err(RlpError::UnexpectedEof)));
    }

    #[test]
    fn short_reader_is_unexpected_eof() {
        let input = [0x83, b'd', b'o'];
        let res: Result<Bytes, _> = decode_reader(Cursor::new(&input[..]), StreamConfig::default());
        assert!(matches!(res, Err(RlpError::UnexpectedEof)));
    }

    // # ✅ 2. Exact consumption of list payloads

    #[test]
    fn child_overrunning_list_is_trailing_data() {
        // List declares one payload byte; the child claims two more.
        let input = [0xc1, 0x82, 0x04, 0x00];
        assert!(matches!(
            decode_bytes::<Vec<u64>>(&input),
            Err(RlpError::TrailingData { boundary: 2, cursor: 4 })
        ));
    }

    #[test]
    fn unread_list_payload_is_trailing_data() {
        // Two elements present, one expected.
        let input = [0xc2, 0x01, 0x02];
        assert!(matches!(
            decode_bytes::<(u8,)>(&input),
            Err(RlpError::TrailingData { boundary: 3, cursor: 2 })
        ));
    }

    #[test]
    fn bytes_after_top_level_value() {
        assert!(matches!(
            decode_bytes::<u8>(&[0x80, 0x80]),
            Err(RlpError::TrailingData { boundary: 2, cursor: 1 })
        ));
    }

    #[test]
    fn reader_leaves_following_bytes_unread() {
        let input = [0x83, b'd', b'o', b'g', 0xc0];
        let mut cur = Cursor::new(&input[..]);
        let s: String = decode_reader(&mut cur, StreamConfig::default()).unwrap();
        assert_eq!(s, "dog");
        assert_eq!(cur.position(), 4);
    }

    #[test]
    fn end_of_list_and_not_in_list() {
        let mut s = stream(&[0xc1, 0x01]);
        assert_eq!(s.enter_list().unwrap(), 1);
        assert!(!s.at_list_end());
        assert_eq!(s.uint(8).unwrap(), 1);
        assert!(s.at_list_end());
        assert!(matches!(s.kind(), Err(RlpError::EndOfList)));
        s.exit_list().unwrap();
        assert!(matches!(s.exit_list(), Err(RlpError::NotInList)));
        assert!(s.at_input_end());
    }

    #[test]
    fn walk_nested_lists() {
        // ["cat", ["dog", 7]]
        let enc = encode_to_vec(&("cat", ("dog", 7u8))).unwrap();
        let mut s = stream(&enc);
        s.enter_list().unwrap();
        assert_eq!(s.kind().unwrap(), (Kind::String, 3));
        assert_eq!(&s.bytes().unwrap()[..], b"cat");
        assert_eq!(s.kind().unwrap(), (Kind::List, 5));
        s.enter_list().unwrap();
        assert_eq!(s.depth(), 2);
        assert_eq!(&s.bytes().unwrap()[..], b"dog");
        assert_eq!(s.uint(1).unwrap(), 7);
        s.exit_list().unwrap();
        s.exit_list().unwrap();
        assert_eq!(s.depth(), 0);
        assert_eq!(s.position(), enc.len() as u64);
    }

    // # ✅ 3. Resource limits

    #[test]
    fn declared_size_above_max_size() {
        let cfg = StreamConfig::default().with_max_size(4);
        assert!(matches!(
            decode_bytes_with::<Bytes>(&[0x85, b'h', b'e', b'l', b'l', b'o'], cfg),
            Err(RlpError::SizeExceeded { size: 5, max: 4 })
        ));
        assert_eq!(
            &decode_bytes_with::<Bytes>(&[0x84, b'h', b'e', b'l', b'l'], cfg).unwrap()[..],
            b"hell"
        );
    }

    #[test]
    fn huge_declared_size_on_unbounded_reader() {
        // Eight length bytes of 0xff: rejected from the header alone.
        let mut input = vec![0xbf];
        input.extend_from_slice(&[0xff; 8]);
        let res: Result<Bytes, _> = decode_reader(Cursor::new(input), StreamConfig::default());
        assert!(matches!(res, Err(RlpError::SizeExceeded { size: u64::MAX, .. })));
    }

    #[test]
    fn declared_size_near_u64_max_does_not_overflow() {
        let cfg = StreamConfig::default().with_max_size(usize::MAX);
        let mut input = vec![0xbf];
        input.extend_from_slice(&[0xff; 8]);

        assert!(matches!(
            decode_bytes_with::<Bytes>(&input, cfg),
            Err(RlpError::UnexpectedEof)
        ));
        let res: Result<Bytes, _> = decode_reader(Cursor::new(input.clone()), cfg);
        assert!(matches!(res, Err(RlpError::UnexpectedEof)));

        // Same claim from a list header.
        input[0] = 0xff;
        let mut s = Stream::new(Cursor::new(input), cfg);
        assert!(matches!(s.enter_list(), Err(RlpError::UnexpectedEof)));
    }

    #[test]
    fn nesting_beyond_max_depth() {
        let cfg = StreamConfig::default().with_max_depth(2);
        let mut s = Stream::from_slice(&[0xc2, 0xc1, 0xc0], cfg);
        s.enter_list().unwrap();
        s.enter_list().unwrap();
        assert!(matches!(s.enter_list(), Err(RlpError::DepthExceeded { max: 2 })));
    }

    #[test]
    fn default_depth_limit_is_enforced() {
        let mut sink = Sink::new();
        let heads: Vec<usize> = (0..200).map(|_| sink.begin_list()).collect();
        for h in heads.into_iter().rev() {
            sink.end_list(h).unwrap();
        }
        let enc = sink.finish().unwrap();

        let mut s = stream(&enc);
        let mut entered = 0;
        let err = loop {
            match s.enter_list() {
                Ok(_) => entered += 1,
                Err(e) => break e,
            }
        };
        assert_eq!(entered, 128);
        assert!(matches!(err, RlpError::DepthExceeded { max: 128 }));
    }

    // # ✅ 4. Canonical prefixes

    #[test]
    fn long_form_for_short_payload() {
        let mut input = vec![0xb8, 0x05];
        input.extend_from_slice(b"hello");
        assert!(matches!(
            decode_bytes::<Bytes>(&input),
            Err(RlpError::MalformedPrefix { offset: 0, fault: PrefixFault::ShortFormRequired })
        ));

        let input = [0xf8, 0x01, 0x01];
        assert!(matches!(
            decode_bytes::<Vec<u8>>(&input),
            Err(RlpError::MalformedPrefix { fault: PrefixFault::ShortFormRequired, .. })
        ));
    }

    #[test]
    fn length_with_leading_zero() {
        let mut input = vec![0xb9, 0x00, 0x40];
        input.extend_from_slice(&[0u8; 64]);
        assert!(matches!(
            decode_bytes::<Bytes>(&input),
            Err(RlpError::MalformedPrefix { fault: PrefixFault::LeadingZeroLength, .. })
        ));
    }

    #[test]
    fn wrapped_single_byte() {
        assert!(matches!(
            decode_bytes::<Bytes>(&[0x81, 0x05]),
            Err(RlpError::MalformedPrefix { offset: 0, fault: PrefixFault::SingleByteWrapped })
        ));
        // Offsets are absolute.
        assert!(matches!(
            decode_bytes::<Vec<Bytes>>(&[0xc3, 0x80, 0x81, 0x00]),
            Err(RlpError::MalformedPrefix { offset: 2, fault: PrefixFault::SingleByteWrapped })
        ));
        assert_eq!(&decode_bytes::<Bytes>(&[0x81, 0x80]).unwrap()[..], &[0x80]);
    }

    // # ✅ 5. Cursor operations

    #[test]
    fn read_bytes_exact_checks_length() {
        let mut out = [0u8; 4];
        let mut s = stream(&[0x83, 1, 2, 3]);
        assert!(matches!(
            s.read_bytes_exact(&mut out),
            Err(RlpError::LengthMismatch { expected: 4, actual: 3 })
        ));

        let mut out = [0u8; 3];
        s.read_bytes_exact(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn skip_and_raw() {
        let enc = encode_to_vec(&(vec!["a", "b"], "x".repeat(60), 5u8)).unwrap();
        let mut s = stream(&enc);
        s.enter_list().unwrap();
        s.skip().unwrap();
        let raw = s.raw().unwrap();
        assert_eq!(raw, encode_to_vec(&"x".repeat(60)).unwrap());
        assert_eq!(s.raw().unwrap(), vec![0x05]);
        s.exit_list().unwrap();
    }

    #[test]
    fn skip_validates_nested_headers() {
        let mut s = stream(&[0xc2, 0x81, 0x05]);
        assert!(matches!(
            s.skip(),
            Err(RlpError::MalformedPrefix { offset: 1, fault: PrefixFault::SingleByteWrapped })
        ));

        let mut s = stream(&[0xc4, 0xc3, 0xb8, 0x01, 0x61]);
        assert!(matches!(
            s.skip(),
            Err(RlpError::MalformedPrefix { offset: 2, fault: PrefixFault::ShortFormRequired })
        ));
    }

    #[test]
    fn skip_respects_max_depth() {
        let cfg = StreamConfig::default().with_max_depth(1);
        let mut s = Stream::from_slice(&[0xc1, 0xc0], cfg);
        assert!(matches!(s.skip(), Err(RlpError::DepthExceeded { max: 1 })));

        let mut s = Stream::from_slice(&[0xc2, 0x80, 0x01], cfg);
        s.skip().unwrap();
        assert!(s.at_input_end());
    }

    #[test]
    fn raw_rejects_non_canonical_child() {
        assert!(matches!(
            decode_bytes::<Raw>(&[0xc2, 0x81, 0x05]),
            Err(RlpError::MalformedPrefix { offset: 1, fault: PrefixFault::SingleByteWrapped })
        ));
        assert!(matches!(
            decode_bytes::<(u8, Raw)>(&[0xc4, 0x01, 0xc2, 0x81, 0x05]),
            Err(RlpError::MalformedPrefix { offset: 3, fault: PrefixFault::SingleByteWrapped })
        ));
        // Child overrunning its list inside a raw value.
        assert!(matches!(
            decode_bytes::<Raw>(&[0xc2, 0x83, 0x61, 0x62]),
            Err(RlpError::TrailingData { boundary: 3, cursor: 5 })
        ));
    }

    #[test]
    fn uint_width_applies_to_single_bytes() {
        let mut s = stream(&[0x05]);
        assert!(matches!(s.uint(0), Err(RlpError::IntegerOverflow { size: 1, max: 0 })));
        assert_eq!(stream(&[0x80]).uint(0).unwrap(), 0);
        assert_eq!(stream(&[0x05]).uint(1).unwrap(), 5);
    }

    #[test]
    fn raw_reproduces_wrapped_byte() {
        let mut s = stream(&[0x81, 0xaa]);
        assert_eq!(s.raw().unwrap(), vec![0x81, 0xaa]);
    }

    #[test]
    fn type_mismatch_does_not_consume() {
        let mut s = stream(&[0xc0]);
        assert!(matches!(
            s.bytes(),
            Err(RlpError::TypeMismatch { expected: Kind::String, found: Kind::List })
        ));
        s.enter_list().unwrap();
        s.exit_list().unwrap();

        let mut s = stream(&[0x80]);
        assert!(matches!(
            s.enter_list(),
            Err(RlpError::TypeMismatch { expected: Kind::List, found: Kind::String })
        ));
    }

    #[test]
    fn config_is_carried() {
        let cfg = StreamConfig::new(Some(1024), Some(4));
        let s = Stream::from_slice(&[0x80], cfg);
        assert_eq!(s.config().max_size, 1024);
        assert_eq!(s.config().max_depth, 4);
    }
}
