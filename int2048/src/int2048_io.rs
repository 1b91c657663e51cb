use std::io::{BufRead, Write};

use log::debug;

use crate::Int2048;
use crate::error::Int2048Error;

// 实现流式读写
impl Int2048 {
    /// Reads the next whitespace-delimited integer from `reader`.
    ///
    /// Leading ASCII whitespace is skipped and the delimiter after the token
    /// is left unread. Returns `Ok(None)` once the input is exhausted.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Option<Int2048>, Int2048Error> {
        let mut token = Vec::new();
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut consumed = 0;
            let mut done = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                consumed += 1;
            }
            reader.consume(consumed);

            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&token);
        match text.parse() {
            Ok(val) => Ok(Some(val)),
            Err(err) => {
                debug!("rejected token {:?}: {}", text, err);
                Err(err)
            }
        }
    }

    /// Writes the canonical decimal form, without a trailing newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), Int2048Error> {
        write!(out, "{}", self)?;
        Ok(())
    }
}

#[test]
fn test_read_tokens() {
    let mut input = "  12 -34\n\t0007\n-0   ".as_bytes();
    let mut read = || Int2048::read_from(&mut input).unwrap();
    assert_eq!(read(), Some(Int2048::from(12)));
    assert_eq!(read(), Some(Int2048::from(-34)));
    assert_eq!(read(), Some(Int2048::from(7)));
    assert_eq!(read(), Some(Int2048::zero()));
    assert_eq!(read(), None);
    assert_eq!(read(), None);
}

#[test]
fn test_read_leaves_delimiter() {
    let mut input = "123 rest".as_bytes();
    assert_eq!(Int2048::read_from(&mut input).unwrap(), Some(Int2048::from(123)));
    assert_eq!(input, b" rest");
}

#[test]
fn test_read_across_buffer_boundary() {
    use std::io::BufReader;

    let text = "98765432109876543210 -1";
    let mut reader = BufReader::with_capacity(3, text.as_bytes());
    let first = Int2048::read_from(&mut reader).unwrap().unwrap();
    assert_eq!(first.to_string(), "98765432109876543210");
    assert_eq!(Int2048::read_from(&mut reader).unwrap(), Some(Int2048::from(-1)));
}

#[test]
fn test_read_rejects_garbage() {
    use crate::ParseErrorKind;

    let mut input = "12x4 5".as_bytes();
    let err = Int2048::read_from(&mut input).unwrap_err();
    assert_eq!(err.parse_kind(), Some(ParseErrorKind::InvalidDigit { ch: 'x', index: 2 }));
    // the bad token is consumed, reading resumes after it
    assert_eq!(Int2048::read_from(&mut input).unwrap(), Some(Int2048::from(5)));
}

#[test]
fn test_write() {
    let mut out = Vec::new();
    Int2048::from(-100020003_i64).write_to(&mut out).unwrap();
    out.push(b' ');
    Int2048::zero().write_to(&mut out).unwrap();
    assert_eq!(out, b"-100020003 0");
}
