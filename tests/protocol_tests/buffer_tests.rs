//! Tests for the wire reader/writer primitives

use tokenreq::protocol::buffer::{WireReader, WireWriter};
use tokenreq::TokenError;

#[test]
fn test_reader_sequential_reads() {
    let data = [0x12, 0x34, 0x56, 0xA0, 0xA1, 0xA2];
    let mut reader = WireReader::new(&data);

    assert_eq!(reader.read_u16("tag").unwrap(), 0x1234);
    assert_eq!(reader.read_u8("id").unwrap(), 0x56);
    assert_eq!(reader.read_array::<3>("blob").unwrap(), [0xA0, 0xA1, 0xA2]);
    assert_eq!(reader.remaining(), 0);
    assert!(reader.finish().is_ok());
}

#[test]
fn test_reader_short_read_names_field() {
    let data = [0x01, 0x02, 0x03];
    let mut reader = WireReader::new(&data);

    match reader.read_array::<4>("blob") {
        Err(TokenError::TruncatedInput {
            field,
            expected,
            available,
        }) => {
            assert_eq!(field, "blob");
            assert_eq!(expected, 4);
            assert_eq!(available, 3);
        }
        other => panic!("Expected TruncatedInput, got {:?}", other),
    }
}

#[test]
fn test_reader_u16_prefixed() {
    let data = [0x00, 0x03, 0xAA, 0xBB, 0xCC, 0xDD];
    let mut reader = WireReader::new(&data);

    assert_eq!(reader.read_u16_prefixed("inner").unwrap(), &[0xAA, 0xBB, 0xCC]);
    assert_eq!(reader.remaining(), 1);
    assert!(matches!(
        reader.finish(),
        Err(TokenError::TrailingBytes { remaining: 1 })
    ));
}

#[test]
fn test_reader_u16_prefixed_missing_content() {
    let data = [0x00, 0x05, 0xAA];
    let mut reader = WireReader::new(&data);

    assert!(matches!(
        reader.read_u16_prefixed("inner"),
        Err(TokenError::TruncatedInput {
            expected: 5,
            available: 1,
            ..
        })
    ));
}

#[test]
fn test_reader_u16_prefixed_zero_length() {
    let data = [0x00, 0x00];
    let mut reader = WireReader::new(&data);

    assert!(reader.read_u16_prefixed("inner").unwrap().is_empty());
}

#[test]
fn test_writer_layout() {
    let mut writer = WireWriter::with_capacity(16);
    assert!(writer.is_empty());

    writer.put_u16(0x0003);
    writer.put_u8(0x7F);
    writer.put_u16_prefixed(&[0x01, 0x02]);
    writer.put_slice(&[0xEE]);

    assert_eq!(writer.len(), 8);
    assert_eq!(
        writer.freeze().as_ref(),
        &[0x00, 0x03, 0x7F, 0x00, 0x02, 0x01, 0x02, 0xEE]
    );
}
