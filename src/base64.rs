/*!
Base64, with the standard RFC 4648 alphabet and `=` padding.

Decoding is *strict*: anything other than a well-formed sequence of 4-character groups is an error, and no partial output is returned.  The one concession is that decoding stops at the first padded group, ignoring whatever follows it.
*/
use std::error::Error as StdError;
use std::fmt;

const ALPHABET: &'static [u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: u8 = b'=';

/// Marks bytes outside the alphabet in `DECODE_TABLE`.
const NOP: u8 = 0xff;

static DECODE_TABLE: [u8; 256] = {
    const N: u8 = NOP;
    [
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N,62, N, N, N,63,
       52,53,54,55,56,57,58,59,60,61, N, N, N, N, N, N,
        N, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9,10,11,12,13,14,
       15,16,17,18,19,20,21,22,23,24,25, N, N, N, N, N,
        N,26,27,28,29,30,31,32,33,34,35,36,37,38,39,40,
       41,42,43,44,45,46,47,48,49,50,51, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
        N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N,
    ]
};

/**
An error encountered while decoding Base64.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the alphabet, at the given offset.
    BadByte { byte: u8, at: usize },
    /// Padding in the first or second position of a group.
    BadPadding { at: usize },
    /// The input ended partway through a group.
    BadLength,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::BadByte { byte, at } => write!(fmt, "invalid byte {:#04x} at offset {}", byte, at),
            DecodeError::BadPadding { at } => write!(fmt, "misplaced padding at offset {}", at),
            DecodeError::BadLength => write!(fmt, "input is not a whole number of groups"),
        }
    }
}

impl StdError for DecodeError {}

/**
Encodes `input` as Base64.

The output is padded with `=` to a multiple of 4 characters.  Empty input encodes to the empty string.
*/
pub fn encode<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity((input.len() + 2) / 3 * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).cloned().unwrap_or(0);
        let b2 = chunk.get(2).cloned().unwrap_or(0);

        out.push(sextet_char(b0 >> 2));
        out.push(sextet_char((b0 << 4) | (b1 >> 4)));

        match chunk.len() {
            1 => out.push_str("=="),
            2 => {
                out.push(sextet_char(b1 << 2));
                out.push('=');
            },
            _ => {
                out.push(sextet_char((b1 << 2) | (b2 >> 6)));
                out.push(sextet_char(b2));
            },
        }
    }

    out
}

/**
Decodes Base64 `input`.

Decoding consumes 4-character groups.  A `=` in the third or fourth position of a group ends the data; anything after that group is ignored.

# Failure

Fails if `input` contains a byte outside the alphabet, has padding in the first two positions of a group, or ends partway through a group.  `"YQ=="` decodes to `"a"`, but `"YQ="` is an error.
*/
pub fn decode<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len() / 4 * 3);

    for (n, group) in input.chunks(4).enumerate() {
        if group.len() < 4 {
            return Err(DecodeError::BadLength);
        }

        let base = n * 4;
        let c0 = sextet(group[0], base)?;
        let c1 = sextet(group[1], base + 1)?;
        out.push((c0 << 2) | (c1 >> 4));

        if group[2] == PAD {
            return Ok(out);
        }
        let c2 = sextet(group[2], base + 2)?;
        out.push((c1 << 4) | (c2 >> 2));

        if group[3] == PAD {
            return Ok(out);
        }
        let c3 = sextet(group[3], base + 3)?;
        out.push((c2 << 6) | c3);
    }

    Ok(out)
}

#[inline]
fn sextet_char(v: u8) -> char {
    ALPHABET[(v & 0x3f) as usize] as char
}

#[inline]
fn sextet(byte: u8, at: usize) -> Result<u8, DecodeError> {
    match DECODE_TABLE[byte as usize] {
        NOP if byte == PAD => Err(DecodeError::BadPadding { at: at }),
        NOP => Err(DecodeError::BadByte { byte: byte, at: at }),
        v => Ok(v),
    }
}
