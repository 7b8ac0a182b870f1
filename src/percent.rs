/*!
URL percent-encoding.

Decoding is *lenient*: a `%` that does not start a valid escape is kept as a literal `%`, and decoding carries on.  It never fails.
*/
use std::string::FromUtf8Error;

const HEX_UPPER: &'static [u8; 16] = b"0123456789ABCDEF";

/**
Returns `true` if `b` must be escaped.

This is every byte outside printable ASCII, plus space and the characters that are reserved or unsafe in URLs.
*/
#[inline]
pub fn needs_escape(b: u8) -> bool {
    match b {
        b' ' | b'$' | b'&' | b'+' | b',' | b'/' | b':' | b';' | b'=' | b'?' | b'@'
        | b'"' | b'<' | b'>' | b'#' | b'%' | b'{' | b'}' | b'|' | b'\\' | b'^' | b'~'
        | b'[' | b']' | b'`' => true,
        33..=126 => false,
        _ => true,
    }
}

/**
Percent-encodes `input`.

Each byte for which `needs_escape` is true becomes `%` followed by two uppercase hex digits.  All other bytes are copied.
*/
pub fn encode<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len());

    for &b in input {
        if needs_escape(b) {
            out.push('%');
            out.push(HEX_UPPER[(b >> 4) as usize] as char);
            out.push(HEX_UPPER[(b & 0x0f) as usize] as char);
        } else {
            out.push(b as char);
        }
    }

    out
}

/**
Decodes percent-encoded `input`.

`+` becomes a space, and `%` followed by two hex digits (in either case) becomes the byte they spell.  A `%` with fewer than two hex digits after it is copied as-is, and decoding resumes immediately after it; so `"50%"` and `"%zz"` decode to themselves.
*/
pub fn decode<T: ?Sized + AsRef<[u8]>>(input: &T) -> Vec<u8> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len());
    let mut at = 0;

    while at < input.len() {
        match input[at] {
            b'+' => out.push(b' '),
            b'%' => match escaped_byte(&input[at + 1..]) {
                Some(b) => {
                    out.push(b);
                    at += 2;
                },
                None => out.push(b'%'),
            },
            b => out.push(b),
        }
        at += 1;
    }

    out
}

/**
Decodes percent-encoded `input` as UTF-8.

# Failure

Fails if the decoded bytes are not valid UTF-8.  The error still holds the decoded bytes.
*/
pub fn decode_utf8<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<String, FromUtf8Error> {
    String::from_utf8(decode(input))
}

fn escaped_byte(rest: &[u8]) -> Option<u8> {
    match (rest.get(0).cloned().and_then(hex_value), rest.get(1).cloned().and_then(hex_value)) {
        (Some(hi), Some(lo)) => Some((hi << 4) | lo),
        _ => None,
    }
}

#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
