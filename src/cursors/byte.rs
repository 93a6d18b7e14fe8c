use crate::AtomicCursor;

/// A specialized cursor for byte data (u8)
pub type ByteCursor<'code> = AtomicCursor<'code, u8>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_newline_is_an_ordinary_token() {
        let data = b"ab\ncd";
        let cursor = ByteCursor::new(data);

        let cursor = cursor.advance(2);
        assert_eq!(cursor.value().unwrap(), b'\n');
        assert_eq!(cursor.next().value().unwrap(), b'c');
    }

    #[test]
    fn test_null_byte_handling() {
        let data = b"a\0b";
        let mut cursor = ByteCursor::new(data);

        assert_eq!(cursor.value().unwrap(), b'a');

        cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), b'\0');

        cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), b'b');

        cursor = cursor.next();
        assert!(matches!(cursor, ByteCursor::EndOfFile { .. }));
    }

    #[test]
    fn test_consecutive_eof_checks() {
        let data = b"x";
        let cursor = ByteCursor::new(data);

        let cursor = cursor.next();
        assert!(matches!(cursor, ByteCursor::EndOfFile { .. }));

        // EOF cursor should stay at EOF
        let cursor = cursor.next();
        assert!(matches!(cursor, ByteCursor::EndOfFile { .. }));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_try_next_eof_error() {
        let data = b"x";
        let cursor = ByteCursor::new(data).next();

        let result = cursor.try_next();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("already at end of input")
        );
    }
}
