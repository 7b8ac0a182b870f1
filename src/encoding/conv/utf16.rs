/*!
Wide text as UTF-16: code points above U+FFFF take a surrogate pair.
*/
use std::iter::Peekable;
use encoding::WUnit;
use super::WcToUniError;

pub fn encode_str(out: &mut Vec<WUnit>, s: &str) {
    out.reserve(s.len());
    out.extend(s.encode_utf16().map(|cu| WUnit::from_u32(cu as u32)));
}

/**
Decodes wide units into code points.

An unpaired surrogate is reported as `InvalidAt`, and a high surrogate at the very end as `Incomplete`.  The unit following an unpaired high surrogate is *not* consumed, so decoding picks up again from there.
*/
pub struct WcToUniIter<It> where It: Iterator<Item=WUnit> {
    at: usize,
    iter: Peekable<It>,
}

impl<It> WcToUniIter<It> where It: Iterator<Item=WUnit> {
    pub fn new(iter: It) -> WcToUniIter<It> {
        WcToUniIter {
            at: 0,
            iter: iter.peekable(),
        }
    }
}

impl<It> Iterator for WcToUniIter<It> where It: Iterator<Item=WUnit> {
    type Item = Result<char, WcToUniError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cu0 = match self.iter.next() {
            Some(cu0) => cu0.to_u32() as u16,
            None => return None,
        };

        let at = self.at;
        self.at += 1;

        let r = match cu0 {
            0x0000..=0xd7ff | 0xe000..=0xffff => {
                // Surrogates are excluded by the pattern.
                ::std::char::from_u32(cu0 as u32).ok_or(WcToUniError::InvalidAt(at))
            },
            0xdc00..=0xdfff => Err(WcToUniError::InvalidAt(at)),
            _ /* 0xd800..=0xdbff */ => {
                let cu1 = match self.iter.peek() {
                    Some(cu1) => cu1.to_u32() as u16,
                    None => return Some(Err(WcToUniError::Incomplete)),
                };

                if !(0xdc00 <= cu1 && cu1 <= 0xdfff) {
                    return Some(Err(WcToUniError::InvalidAt(at)));
                }

                self.iter.next();
                self.at += 1;

                let hi = (cu0 & 0x3ff) as u32;
                let lo = (cu1 & 0x3ff) as u32;
                let cp = 0x10000 + ((hi << 10) | lo);
                ::std::char::from_u32(cp).ok_or(WcToUniError::InvalidAt(at))
            },
        };

        Some(r)
    }
}
