//! Bounds-checked reads over a byte buffer
//!
//! The RBM container mixes endianness: the magic compares big-endian while
//! section headers and payload fields are little-endian, so every read
//! spells out its width and byte order. A read that would pass the end of
//! the buffer returns [`DecodeError::OutOfBounds`] and leaves the position
//! where it was, so the reported offset is the offset of the failed read.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{DecodeError, Result};

/// Forward-only reader over an immutable byte buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    len: usize,
    rest: &'a [u8],
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { len: buf.len(), rest: buf }
    }

    /// Offset of the next read from the start of the buffer.
    pub fn position(&self) -> usize {
        self.len - self.rest.len()
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn out_of_bounds(&self, wanted: usize) -> DecodeError {
        DecodeError::OutOfBounds {
            offset: self.position(),
            wanted,
            available: self.rest.len(),
        }
    }

    // The ByteOrder decoders panic on short slices; read_slice checks the
    // length before any bytes are consumed.

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_slice(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_slice(1)?[0] as i8)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_slice(2)?))
    }

    pub fn read_i16_le(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.read_slice(2)?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_slice(4)?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_slice(4)?))
    }

    /// Big-endian u32, used for the file magic.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.read_slice(4)?))
    }

    pub fn read_f32_le(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.read_slice(4)?))
    }

    pub fn read_f64_le(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.read_slice(8)?))
    }

    /// Bytes up to the first NUL, advancing past the terminator.
    ///
    /// Names are nominally ASCII; anything else is kept lossily rather
    /// than failing the decode.
    pub fn read_cstr(&mut self) -> Result<String> {
        let nul = self
            .rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| self.out_of_bounds(self.rest.len() + 1))?;
        let (raw, tail) = self.rest.split_at(nul);
        let text = String::from_utf8_lossy(raw).into_owned();
        self.rest = &tail[1..];
        Ok(text)
    }

    /// Borrow the next `len` bytes without copying.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.rest.len() {
            return Err(self.out_of_bounds(len));
        }
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        Ok(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_in_order() {
        let bytes = [0x01, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_u16_le().unwrap(), 2);
        assert_eq!(cursor.read_u32_le().unwrap(), 3);
        assert_eq!(cursor.position(), 7);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn big_and_little_endian_differ() {
        let bytes = [0x52, 0x42, 0x4D, 0x00];
        assert_eq!(Cursor::new(&bytes).read_u32_be().unwrap(), 0x5242_4D00);
        assert_eq!(Cursor::new(&bytes).read_u32_le().unwrap(), 0x004D_4252);
    }

    #[test]
    fn floats_read_little_endian() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1.5f32.to_le_bytes());
        bytes.extend_from_slice(&(-2.25f64).to_le_bytes());
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_f32_le().unwrap(), 1.5);
        assert_eq!(cursor.read_f64_le().unwrap(), -2.25);
    }

    #[test]
    fn overrun_reports_offset_and_keeps_position() {
        let bytes = [0xAA, 0xBB];
        let mut cursor = Cursor::new(&bytes);
        cursor.read_u8().unwrap();
        let err = cursor.read_u32_le().unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfBounds { offset: 1, wanted: 4, available: 1 }
        );
        // Failed read must not consume anything.
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u8().unwrap(), 0xBB);
    }

    #[test]
    fn failed_float_read_keeps_remaining_bytes() {
        let bytes = 3.5f32.to_le_bytes();
        let mut cursor = Cursor::new(&bytes);
        let err = cursor.read_f64_le().unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfBounds { offset: 0, wanted: 8, available: 4 }
        );
        assert_eq!(cursor.read_f32_le().unwrap(), 3.5);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn signed_reads_use_twos_complement() {
        let bytes = [0xFF, 0xFE, 0xFF, 0xFC, 0xFF, 0xFF, 0xFF];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_i8().unwrap(), -1);
        assert_eq!(cursor.read_i16_le().unwrap(), -2);
        assert_eq!(cursor.read_i32_le().unwrap(), -4);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn signed_overrun_keeps_position() {
        let bytes = [0x7F, 0x00];
        let mut cursor = Cursor::new(&bytes);
        let err = cursor.read_i32_le().unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfBounds { offset: 0, wanted: 4, available: 2 }
        );
        assert_eq!(cursor.read_i16_le().unwrap(), 0x7F);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn cstr_stops_at_nul() {
        let bytes = b"layer_1\0rest";
        let mut cursor = Cursor::new(bytes);
        assert_eq!(cursor.read_cstr().unwrap(), "layer_1");
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn unterminated_cstr_is_out_of_bounds() {
        let mut cursor = Cursor::new(b"abc");
        assert!(matches!(
            cursor.read_cstr(),
            Err(DecodeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn slice_borrows_without_copying() {
        let bytes = [1u8, 2, 3, 4];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_slice(3).unwrap(), &[1, 2, 3]);
        assert_eq!(cursor.remaining(), 1);
        assert!(cursor.read_slice(2).is_err());
    }
}
