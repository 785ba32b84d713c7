//! Custom `Write` trait

use bytes::{BufMut, BytesMut};

use crate::error::Error;

/// A sequential byte sink for encoding.
///
/// Object safe for the same reason as [`Read`](crate::read::Read): encode
/// dispatch works through `&mut dyn Write`.
pub trait Write {
    /// Write a slice of bytes
    fn write(&mut self, buf: &[u8]) -> Result<(), Error>;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Error>;
}

impl Write for Vec<u8> {
    fn write(&mut self, buf: &[u8]) -> Result<(), Error> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.push(byte);
        Ok(())
    }
}

impl Write for BytesMut {
    fn write(&mut self, buf: &[u8]) -> Result<(), Error> {
        self.put_slice(buf);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.put_u8(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::Write;

    #[test]
    fn vec_sink() {
        let mut buf = Vec::new();
        buf.write(&[1, 2]).unwrap();
        buf.write_byte(3).unwrap();
        assert_eq!(buf, vec![1, 2, 3]);
    }

    #[test]
    fn bytes_mut_sink() {
        let mut buf = BytesMut::new();
        buf.write(&[1, 2]).unwrap();
        buf.write_byte(3).unwrap();
        assert_eq!(&buf[..], &[1, 2, 3]);
    }
}
