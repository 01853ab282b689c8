//! Test suite for ByteReader and ByteWriter edge cases.
use super::*;

#[test]
/// Sequential little-endian reads across primitive widths.
fn test_read_sequence() {
    let data = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE];
    let mut reader = ByteReader::new(&data);
    assert_eq!(reader.read_u8().unwrap(), 0x12);
    assert_eq!(reader.read_u16().unwrap(), 0x5634);
    assert_eq!(reader.read_u32().unwrap(), 0xDEBC9A78);
    assert_eq!(reader.remaining(), 0);
}

#[test]
/// Signed reads reinterpret the most significant bit as sign.
fn test_read_signed() {
    let data = [0xFF, 0x18, 0xFD, 0x00, 0x00, 0x00, 0x80];
    let mut reader = ByteReader::new(&data);
    assert_eq!(reader.read_i8().unwrap(), -1);
    assert_eq!(reader.read_i16().unwrap(), -744);
    assert_eq!(reader.read_i32().unwrap(), i32::MIN);
}

#[test]
/// Detects out-of-bounds reads and leaves the cursor untouched.
fn test_read_out_of_bounds() {
    let data = [0xFF, 0xFF];
    let mut reader = ByteReader::new(&data);
    assert!(reader.read_u8().is_ok());
    assert!(matches!(
        reader.read_u32(),
        Err(ByteReaderError::OutOfBounds {
            asked: 4,
            available: 1
        })
    ));
    assert_eq!(reader.cursor(), 1);
    assert_eq!(reader.read_u8().unwrap(), 0xFF);
}

#[test]
/// Reading from an empty buffer must fail immediately.
fn test_read_empty_buffer() {
    let data: [u8; 0] = [];
    let mut reader = ByteReader::new(&data);
    assert!(matches!(
        reader.read_u8(),
        Err(ByteReaderError::OutOfBounds {
            asked: 1,
            available: 0
        })
    ));
}

#[test]
/// Extract full and partial slices.
fn test_read_slice() {
    let data = [0xFF, 0xAF, 0xE2, 0xF1, 0xBC];
    let mut reader = ByteReader::new(&data);
    assert_eq!(reader.read_slice(3).unwrap(), &[0xFF, 0xAF, 0xE2]);
    assert_eq!(reader.read_slice(2).unwrap(), &[0xF1, 0xBC]);
    assert!(matches!(
        reader.read_slice(1),
        Err(ByteReaderError::OutOfBounds {
            asked: 1,
            available: 0
        })
    ));
}

//==================================================================================TEST_BYTEWRITER

#[test]
/// Sequential little-endian writes across primitive widths.
fn test_write_sequence() {
    let mut buffer = [0u8; 7];
    let mut writer = ByteWriter::new(&mut buffer);
    assert!(writer.write_u8(0x12).is_ok());
    assert!(writer.write_u16(0x5634).is_ok());
    assert!(writer.write_u32(0xDEBC9A78).is_ok());
    assert_eq!(writer.cursor(), 7);
    assert_eq!(buffer, [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE]);
}

#[test]
/// Signed writes round-trip through their unsigned bit pattern.
fn test_write_signed() {
    let mut buffer = [0u8; 7];
    let mut writer = ByteWriter::new(&mut buffer);
    assert!(writer.write_i8(-1).is_ok());
    assert!(writer.write_i16(-744).is_ok());
    assert!(writer.write_i32(i32::MIN).is_ok());
    assert_eq!(buffer, [0xFF, 0x18, 0xFD, 0x00, 0x00, 0x00, 0x80]);
}

#[test]
/// Writing past capacity triggers `OutOfBounds` without partial writes.
fn test_write_out_of_bounds() {
    let mut buffer = [0xEE; 3];
    let mut writer = ByteWriter::new(&mut buffer);
    assert!(writer.write_u16(0xBEEF).is_ok());
    assert!(matches!(
        writer.write_u32(0xDEADBEEF),
        Err(ByteWriterError::OutOfBounds {
            asked: 4,
            available: 1
        })
    ));
    assert_eq!(buffer, [0xEF, 0xBE, 0xEE]);
}

#[test]
/// Writing into an empty buffer triggers `OutOfBounds`.
fn test_write_empty_buffer() {
    let mut buffer = [];
    let mut writer = ByteWriter::new(&mut buffer);
    assert!(matches!(
        writer.write_u8(0xFF),
        Err(ByteWriterError::OutOfBounds {
            asked: 1,
            available: 0
        })
    ));
}

#[test]
/// Copy slices and zero padding into the buffer.
fn test_write_slice_and_zeros() {
    let mut buffer = [0xFF; 6];
    let mut writer = ByteWriter::new(&mut buffer);
    assert!(writer.write_slice(&[0xDF, 0xCF]).is_ok());
    assert!(writer.write_zeros(3).is_ok());
    assert_eq!(buffer, [0xDF, 0xCF, 0x00, 0x00, 0x00, 0xFF]);
}

#[test]
/// Overlong slices and padding are refused.
fn test_write_overlong_slice() {
    let mut buffer = [0u8; 2];
    let mut writer = ByteWriter::new(&mut buffer);
    assert!(matches!(
        writer.write_slice(&[1, 2, 3]),
        Err(ByteWriterError::OutOfBounds {
            asked: 3,
            available: 2
        })
    ));
    assert!(matches!(
        writer.write_zeros(3),
        Err(ByteWriterError::OutOfBounds {
            asked: 3,
            available: 2
        })
    ));
}
