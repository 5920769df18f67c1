//! Quoted string decoding
//!
//! Turns the `"..."` part of a PO line into raw bytes, resolving C-style
//! escapes. Bytes outside escapes are copied through untouched.

use crate::error::{Po2LmoError, Result};

/// Decode one quoted string occupying the whole of `text`.
///
/// `text` must start with `"`; only whitespace may follow the closing quote.
pub(crate) fn unquote(text: &[u8], line: usize) -> Result<Vec<u8>> {
    let body = match text.split_first() {
        Some((b'"', body)) => body,
        _ => return Err(Po2LmoError::parse(line, "expected a quoted string")),
    };

    let mut out = Vec::with_capacity(body.len());
    let mut pos = 0;

    while pos < body.len() {
        let byte = body[pos];
        pos += 1;

        match byte {
            b'"' => {
                let rest = &body[pos..];
                if !rest.trim_ascii().is_empty() {
                    return Err(Po2LmoError::parse(
                        line,
                        format!(
                            "unexpected text after closing quote: {:?}",
                            String::from_utf8_lossy(rest.trim_ascii())
                        ),
                    ));
                }
                return Ok(out);
            }
            b'\\' => {
                let Some(&esc) = body.get(pos) else {
                    break;
                };
                pos += 1;
                match esc {
                    b'n' => out.push(b'\n'),
                    b't' => out.push(b'\t'),
                    b'r' => out.push(b'\r'),
                    b'a' => out.push(0x07),
                    b'b' => out.push(0x08),
                    b'f' => out.push(0x0c),
                    b'v' => out.push(0x0b),
                    b'0'..=b'7' => {
                        // Three octal digits reach 0o777; only one byte's worth is valid
                        let (value, used) = read_digits(&body[pos - 1..], 3, 8);
                        let byte = u8::try_from(value).map_err(|_| {
                            Po2LmoError::parse(
                                line,
                                format!("octal escape \\{value:o} out of range"),
                            )
                        })?;
                        out.push(byte);
                        pos += used - 1;
                    }
                    b'x' => {
                        let (value, used) = read_digits(&body[pos..], 2, 16);
                        if used == 0 {
                            return Err(Po2LmoError::parse(
                                line,
                                "\\x escape without hex digits",
                            ));
                        }
                        let byte = u8::try_from(value).map_err(|_| {
                            Po2LmoError::parse(
                                line,
                                format!("hex escape \\x{value:x} out of range"),
                            )
                        })?;
                        out.push(byte);
                        pos += used;
                    }
                    // `\"`, `\\`, `\'`, `\?` and anything unrecognised: the character itself
                    other => out.push(other),
                }
            }
            _ => out.push(byte),
        }
    }

    Err(Po2LmoError::parse(line, "unterminated string"))
}

/// Read up to `max` digits in `radix`; returns (value, digits consumed)
fn read_digits(text: &[u8], max: usize, radix: u32) -> (u32, usize) {
    let mut value = 0u32;
    let mut used = 0;
    for &b in text.iter().take(max) {
        match (b as char).to_digit(radix) {
            Some(d) => {
                value = value * radix + d;
                used += 1;
            }
            None => break,
        }
    }
    (value, used)
}
