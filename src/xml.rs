/*!
Escaping of text for XML character data and attribute values.

Escaping is *lenient*: malformed UTF-8, and characters XML 1.0 does not allow, are replaced with U+FFFD rather than rejected.  The output is always well-formed UTF-8.

There is no unescaping counterpart.
*/
use std::ops::RangeInclusive;
use std::str;

/// U+FFFD, the Unicode replacement character.
pub const REPLACEMENT: &'static str = "\u{fffd}";

/**
Escapes UTF-8 `input` for inclusion in an XML document.

* `&`, `<`, `>`, `"`, and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;`, and `&apos;`.
* Tab, LF, CR, and everything from U+0020 up are copied, except U+FFFE and U+FFFF.
* A well-formed multibyte sequence is copied whole; no escaping happens inside one.
* Each malformed sequence (a lead byte, plus however many continuation bytes fit before things went wrong) becomes a single U+FFFD.  So does every other byte that cannot start a character, and every other control character.

```
assert_eq!(strcodec::xml::escape(b"<a>&'\""), "&lt;a&gt;&amp;&apos;&quot;");
assert_eq!(strcodec::xml::escape(b"x\x80y"), "x\u{fffd}y");
```
*/
pub fn escape<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len() + 20);
    let mut at = 0;

    while at < input.len() {
        let b = input[at];
        match b {
            b'&' => out.push_str("&amp;"),
            b'<' => out.push_str("&lt;"),
            b'>' => out.push_str("&gt;"),
            b'"' => out.push_str("&quot;"),
            b'\'' => out.push_str("&apos;"),
            0x09 | 0x0a | 0x0d | 0x20..=0x7f => out.push(b as char),
            _ => {
                match sequence_len(&input[at..]) {
                    Ok(len) => {
                        push_checked(&mut out, &input[at..at + len]);
                        at += len;
                    },
                    Err(len) => {
                        out.push_str(REPLACEMENT);
                        at += len;
                    },
                }
                continue;
            },
        }
        at += 1;
    }

    out
}

/**
Escapes `input` for inclusion in an XML document.  See `escape`.
*/
pub fn escape_str(input: &str) -> String {
    escape(input)
}

/**
Works out how long the multibyte sequence at the start of `bytes` is.

Returns `Ok(len)` for a well-formed sequence.  Otherwise returns `Err(len)`, where `len` covers the lead byte and every continuation byte that matched before the first mismatch (or the end of input); it is always at least 1.
*/
fn sequence_len(bytes: &[u8]) -> Result<usize, usize> {
    let (len, second) = match lead_byte(bytes[0]) {
        Some(lead) => lead,
        None => return Err(1),
    };

    for i in 1..len {
        let valid = if i == 1 { second.clone() } else { 0x80..=0xbf };
        match bytes.get(i) {
            Some(b) if valid.contains(b) => (),
            _ => return Err(i),
        }
    }

    Ok(len)
}

/**
Classifies a lead byte: the length of the sequence it starts, and the range its *second* byte must fall in.

The ranges are those of well-formed UTF-8, which exclude overlong forms, surrogates, and values past U+10FFFF.  Later continuation bytes are always `80..=BF`.
*/
fn lead_byte(b: u8) -> Option<(usize, RangeInclusive<u8>)> {
    match b {
        0xc2..=0xdf => Some((2, 0x80..=0xbf)),
        0xe0 => Some((3, 0xa0..=0xbf)),
        0xe1..=0xec | 0xee..=0xef => Some((3, 0x80..=0xbf)),
        0xed => Some((3, 0x80..=0x9f)),
        0xf0 => Some((4, 0x90..=0xbf)),
        0xf1..=0xf3 => Some((4, 0x80..=0xbf)),
        0xf4 => Some((4, 0x80..=0x8f)),
        _ => None,
    }
}

/// Copies a well-formed sequence, unless it is one of the noncharacters XML forbids.
fn push_checked(out: &mut String, seq: &[u8]) {
    match str::from_utf8(seq) {
        Ok(s) if s != "\u{fffe}" && s != "\u{ffff}" => out.push_str(s),
        _ => out.push_str(REPLACEMENT),
    }
}
