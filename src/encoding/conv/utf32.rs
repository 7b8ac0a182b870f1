/*!
Wide text as UTF-32: one unit per code point.
*/
use encoding::WUnit;
use super::WcToUniError;

pub fn encode_str(out: &mut Vec<WUnit>, s: &str) {
    out.reserve(s.len());
    out.extend(s.chars().map(|c| WUnit::from_u32(c as u32)));
}

/**
Decodes wide units into code points.

Surrogates and values past U+10FFFF are reported as `InvalidAt`; the iterator carries on with the next unit afterwards.
*/
pub struct WcToUniIter<It> {
    at: usize,
    iter: It,
}

impl<It> WcToUniIter<It> {
    pub fn new(iter: It) -> Self {
        WcToUniIter {
            at: 0,
            iter: iter,
        }
    }
}

impl<It> Iterator for WcToUniIter<It> where It: Iterator<Item=WUnit> {
    type Item = Result<char, WcToUniError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cp = match self.iter.next() {
            Some(cu) => cu.to_u32(),
            None => return None,
        };

        let at = self.at;
        self.at += 1;

        match ::std::char::from_u32(cp) {
            Some(c) => Some(Ok(c)),
            None => Some(Err(WcToUniError::InvalidAt(at))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
