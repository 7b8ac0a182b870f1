extern crate strcodec;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use std::ffi::OsString;
use strcodec::{LocaleMode, Transcoder, WUnit};
use strcodec::encoding::replacement_unit;
use strcodec::encoding::conv::{self, MbsToWcError, TextServices, TranscodeError, Trap, WcToUniError, WcsToMbError};
use strcodec::encoding::conv::passthrough;

/// Latin-1, minus the C1 controls, so there is something to reject in both directions.
#[derive(Debug)]
struct Latin1;

impl TextServices for Latin1 {
    fn probe_locale_mode(&self) -> LocaleMode {
        LocaleMode::Ansi
    }

    fn locale_to_wide(&self, src: &[u8], trap: Trap) -> Result<Vec<WUnit>, MbsToWcError> {
        let mut out = vec![];
        for (at, &b) in src.iter().enumerate() {
            match (b, trap) {
                (0x80..=0x9f, Trap::Strict) => return Err(MbsToWcError::InvalidAt(at)),
                (0x80..=0x9f, Trap::Replace) => out.push(replacement_unit()),
                (b, _) => out.push(WUnit::from_u32(b as u32)),
            }
        }
        Ok(out)
    }

    fn wide_to_locale(&self, src: &[WUnit], trap: Trap) -> Result<Vec<u8>, WcsToMbError> {
        let mut out = vec![];
        for (at, wcu) in src.iter().enumerate() {
            match (wcu.to_u32(), trap) {
                (0x80..=0x9f, Trap::Strict) | (0x100..=0xffff_ffff, Trap::Strict) => return Err(WcsToMbError::InvalidAt(at)),
                (0x80..=0x9f, Trap::Replace) | (0x100..=0xffff_ffff, Trap::Replace) => out.push(b'?'),
                (v, _) => out.push(v as u8),
            }
        }
        Ok(out)
    }
}

/// Refuses everything, the way a platform does for an unknown code page.
#[derive(Debug)]
struct Refusing;

impl TextServices for Refusing {
    fn probe_locale_mode(&self) -> LocaleMode {
        LocaleMode::Ansi
    }

    fn locale_to_wide(&self, _: &[u8], _: Trap) -> Result<Vec<WUnit>, MbsToWcError> {
        Err(MbsToWcError::Rejected)
    }

    fn wide_to_locale(&self, _: &[WUnit], _: Trap) -> Result<Vec<u8>, WcsToMbError> {
        Err(WcsToMbError::Rejected)
    }
}

fn mode_of(vars: &[(&str, &str)]) -> LocaleMode {
    LocaleMode::from_vars(|name| vars.iter()
        .find(|&&(k, _)| k == name)
        .map(|&(_, v)| OsString::from(v)))
}

#[test]
fn test_ansi_mode() {
    let tc = Transcoder::probed(Latin1);
    assert_eq!(tc.mode(), LocaleMode::Ansi);

    assert_eq!(tc.utf8_to_locale("garçon".as_bytes()), b"gar\xe7on");
    assert_eq!(tc.locale_to_utf8(b"gar\xe7on"), "garçon".as_bytes());
    assert_eq!(tc.locale_to_wide(b"\xaa"), [WUnit::from_u32(0xaa)]);
    assert_eq!(tc.wide_to_locale(&[WUnit::from_u32(0xe7)]), b"\xe7");
}

#[test]
fn test_ansi_mode_lenient() {
    let tc = Transcoder::new(Latin1, LocaleMode::Ansi);

    assert_eq!(tc.utf8_to_locale("中文123".as_bytes()), b"??123");
    assert_eq!(tc.utf8_to_locale(b"a\xffb"), b"a?b");
    assert_eq!(tc.locale_to_utf8(b"a\x85b"), "a\u{fffd}b".as_bytes());
    assert_eq!(tc.locale_to_wide(b"\x90"), [replacement_unit()]);
}

#[test]
fn test_ansi_mode_strict() {
    let tc = Transcoder::new(Latin1, LocaleMode::Ansi);

    assert_eq!(tc.try_utf8_to_locale("ça".as_bytes()).expect(here!()), b"\xe7a");
    assert_eq!(tc.try_locale_to_utf8(b"\xe7a").expect(here!()), "ça");

    assert_eq!(tc.try_utf8_to_locale("a中".as_bytes()),
        Err(TranscodeError::Encode(WcsToMbError::InvalidAt(1))));
    assert_eq!(tc.try_utf8_to_locale(b"ab\xff"), Err(TranscodeError::InvalidUtf8At(2)));
    assert_eq!(tc.try_locale_to_utf8(b"a\x85"),
        Err(TranscodeError::Decode(MbsToWcError::InvalidAt(1))));
    assert_eq!(tc.try_locale_to_wide(b"\x9f"), Err(MbsToWcError::InvalidAt(0)));
    assert_eq!(tc.try_wide_to_locale(&[WUnit::from_u32(0x4e2d)]), Err(WcsToMbError::InvalidAt(0)));
}

#[test]
fn test_utf8_mode_is_identity() {
    // The services would transcode these; in UTF-8 mode they must not be asked.
    let tc = Transcoder::new(Latin1, LocaleMode::Utf8);

    assert_eq!(tc.utf8_to_locale("中文".as_bytes()), "中文".as_bytes());
    assert_eq!(tc.locale_to_utf8(b"\xc3\xa7"), b"\xc3\xa7");
    assert_eq!(tc.locale_to_utf8(b"bad \xff"), b"bad \xff");
    assert_eq!(tc.try_locale_to_utf8("中文".as_bytes()).expect(here!()), "中文");
    assert_eq!(tc.try_locale_to_utf8(b"\xff"), Err(TranscodeError::InvalidUtf8At(0)));
    assert_eq!(tc.try_utf8_to_locale(b"a\xc3"), Err(TranscodeError::InvalidUtf8At(1)));
    assert_eq!(tc.try_utf8_to_locale("中文".as_bytes()).expect(here!()), "中文".as_bytes());
}

#[test]
fn test_refused_input() {
    let tc = Transcoder::probed(Refusing);

    assert!(tc.locale_to_wide(b"abc").is_empty());
    assert!(tc.wide_to_locale(&conv::utf8_to_wide(b"abc")).is_empty());
    assert!(tc.utf8_to_locale(b"abc").is_empty());
    assert!(tc.locale_to_utf8(b"abc").is_empty());

    assert_eq!(tc.try_locale_to_wide(b"abc"), Err(MbsToWcError::Rejected));
    assert_eq!(tc.try_utf8_to_locale(b"abc"), Err(TranscodeError::Encode(WcsToMbError::Rejected)));
    assert_eq!(tc.try_locale_to_utf8(b"abc"), Err(TranscodeError::Decode(MbsToWcError::Rejected)));
}

#[test]
fn test_empty() {
    let tc = Transcoder::new(&Latin1, LocaleMode::Ansi);
    assert!(tc.locale_to_wide(b"").is_empty());
    assert!(tc.wide_to_locale(&[]).is_empty());
    assert!(tc.utf8_to_locale(b"").is_empty());
    assert!(tc.locale_to_utf8(b"").is_empty());
    assert_eq!(tc.try_locale_to_utf8(b"").expect(here!()), "");
    assert!(conv::utf8_to_wide(b"").is_empty());
    assert_eq!(conv::wide_to_utf8(&[]), "");
}

#[test]
fn test_passthrough() {
    let tc = Transcoder::probed(passthrough::Services);
    assert_eq!(tc.mode(), LocaleMode::Utf8);
    assert_eq!(tc.locale_to_wide("中文123".as_bytes()), conv::utf8_to_wide("中文123".as_bytes()));
    assert_eq!(tc.wide_to_locale(&conv::utf8_to_wide("中文123".as_bytes())), "中文123".as_bytes());

    let services = passthrough::Services;
    assert_eq!(services.locale_to_wide(b"a\xffb", Trap::Strict), Err(MbsToWcError::InvalidAt(1)));
    assert_eq!(services.locale_to_wide(b"a\xe4\xb8", Trap::Strict), Err(MbsToWcError::Incomplete));
    assert_eq!(services.locale_to_wide(b"a\xffb", Trap::Replace).expect(here!()),
        [WUnit::from_u32(0x61), replacement_unit(), WUnit::from_u32(0x62)]);

    let lone = [WUnit::from_u32(0x61), WUnit::from_u32(0xd800)];
    assert_eq!(services.wide_to_locale(&lone, Trap::Strict), Err(WcsToMbError::InvalidAt(1)));
    assert_eq!(services.wide_to_locale(&lone, Trap::Replace).expect(here!()), b"a?");
}

#[test]
fn test_utf8_wide() {
    let wide = conv::utf8_to_wide("中文123".as_bytes());
    assert_eq!(conv::wide_to_utf8(&wide), "中文123");
    assert_eq!(conv::try_wide_to_utf8(&wide).expect(here!()), "中文123");
    assert_eq!(conv::try_utf8_to_wide("中文123".as_bytes()).expect(here!()), wide);

    assert_eq!(conv::utf8_to_wide(b"a\xffb"),
        [WUnit::from_u32(0x61), replacement_unit(), WUnit::from_u32(0x62)]);
    assert_eq!(conv::try_utf8_to_wide(b"a\xff").unwrap_err().valid_up_to(), 1);

    let bad = [WUnit::from_u32(0xd800), WUnit::from_u32(0x61)];
    assert_eq!(conv::wide_to_utf8(&bad), "\u{fffd}a");
    assert_eq!(conv::try_wide_to_utf8(&bad), Err(WcToUniError::InvalidAt(0)));
}

#[test]
fn test_root_names() {
    let wide = strcodec::utf8_to_unicode("中文123".as_bytes());
    assert_eq!(strcodec::unicode_to_utf8(&wide), "中文123");

    // Whatever the ambient locale, ASCII survives.
    assert_eq!(strcodec::ansi_to_unicode(b"abc"), strcodec::utf8_to_unicode(b"abc"));
    assert_eq!(strcodec::unicode_to_ansi(&wide[2..]), b"123");
    assert_eq!(strcodec::utf8_to_ansi(b"abc"), b"abc");
    assert_eq!(strcodec::ansi_to_utf8(b"abc"), b"abc");
}

#[test]
fn test_root_types() {
    let tc: strcodec::Transcoder<passthrough::Services> =
        strcodec::Transcoder::new(passthrough::Services, strcodec::LocaleMode::Ansi);
    assert_eq!(tc.mode(), strcodec::LocaleMode::Ansi);
    assert_eq!(tc.locale_to_wide(b"a"), [strcodec::WUnit::from_u32(0x61)]);
}

#[test]
fn test_locale_is_utf8_cached() {
    let first = strcodec::locale_is_utf8();
    assert_eq!(strcodec::locale_is_utf8(), first);
    assert_eq!(LocaleMode::current().is_utf8(), first);
    assert_eq!(Transcoder::native().mode().is_utf8(), first);
}

#[test]
fn test_mode_from_vars() {
    assert_eq!(mode_of(&[]), LocaleMode::Utf8);
    assert_eq!(mode_of(&[("LANG", "en_US.UTF-8")]), LocaleMode::Utf8);
    assert_eq!(mode_of(&[("LANG", "en_US.utf8")]), LocaleMode::Utf8);
    assert_eq!(mode_of(&[("LANG", "de_DE.ISO-8859-1")]), LocaleMode::Ansi);
    assert_eq!(mode_of(&[("LANG", "C")]), LocaleMode::Ansi);
    assert_eq!(mode_of(&[("LC_CTYPE", "C"), ("LANG", "en_US.UTF-8")]), LocaleMode::Ansi);
    assert_eq!(mode_of(&[("LC_ALL", "POSIX"), ("LANG", "en_US.UTF-8")]), LocaleMode::Ansi);
    assert_eq!(mode_of(&[("LC_CTYPE", ""), ("LC_ALL", "zh_CN.UTF-8"), ("LANG", "C")]), LocaleMode::Utf8);
}

#[test]
fn test_mode_from_locale_name() {
    assert_eq!(LocaleMode::from_locale_name("zh_CN.GBK"), LocaleMode::Ansi);
    assert_eq!(LocaleMode::from_locale_name("C.Utf-8"), LocaleMode::Utf8);
    assert!(LocaleMode::Utf8.is_utf8());
    assert!(!LocaleMode::Ansi.is_utf8());
}
