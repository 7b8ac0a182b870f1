#![cfg(not(windows))]
extern crate strcodec;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use strcodec::WUnit;
use strcodec::encoding::conv::{self, WcToUniError};
use strcodec::encoding::conv::wide::WcToUniIter;

fn units(cps: &[u32]) -> Vec<WUnit> {
    cps.iter().map(|&cp| WUnit::from_u32(cp)).collect()
}

#[test]
fn test_garcon() {
    const WORD: &'static str = "gªrçon";
    const WORD_W: &'static [u32] = &[0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E];

    assert_eq!(conv::utf8_to_wide(WORD.as_bytes()), units(WORD_W));
    assert_eq!(conv::try_wide_to_utf8(&units(WORD_W)).expect(here!()), WORD);
}

#[test]
fn test_astral() {
    assert_eq!(conv::utf8_to_wide("\u{1f600}".as_bytes()), units(&[0x1f600]));
    assert_eq!(conv::wide_to_utf8(&units(&[0x1f600])), "\u{1f600}");
}

#[test]
fn test_invalid_units() {
    let bad = units(&[0x61, 0xdc00, 0x110000, 0x62]);
    assert_eq!(conv::wide_to_utf8(&bad), "a\u{fffd}\u{fffd}b");

    let rs: Vec<_> = WcToUniIter::new(bad.iter().cloned()).collect();
    assert_eq!(rs, vec![
        Ok('a'),
        Err(WcToUniError::InvalidAt(1)),
        Err(WcToUniError::InvalidAt(2)),
        Ok('b'),
    ]);
}

#[test]
fn test_raw() {
    let wcu = WUnit::from_u32(0x4e2d);
    assert_eq!(wcu.to_u32(), 0x4e2d);
    assert_eq!(WUnit::new(wcu.raw()), wcu);
}
