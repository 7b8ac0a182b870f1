/*!
This crate provides stateless text transformations: Base64, URL percent-encoding, XML escaping, and conversion between UTF-8, wide text, and the narrow ("ANSI") encoding of the current locale.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

Every operation is a plain function from one buffer to another.  Note that the operations do *not* share an error policy.  *Strict* operations fail outright on malformed input; *lenient* operations repair it and always succeed.  You should *always* check which one you are calling.

| Operation | Function | Policy |
| ---: | --- | --- |
| `base64_encode` | `base64::encode` | Total |
| `base64_decode` | `base64::decode` | Strict |
| `url_encode` | `percent::encode` | Total |
| `url_decode` | `percent::decode` | Lenient: bad escapes are copied |
| `xml_encode` | `xml::escape` | Lenient: bad UTF-8 becomes U+FFFD |
| `utf8_to_unicode` | `encoding::conv::utf8_to_wide` | Lenient; `try_utf8_to_wide` is strict |
| `unicode_to_utf8` | `encoding::conv::wide_to_utf8` | Lenient; `try_wide_to_utf8` is strict |
| `ansi_to_unicode` | `encoding::conv::locale_to_wide` | Lenient; `Transcoder::try_locale_to_wide` is strict |
| `unicode_to_ansi` | `encoding::conv::wide_to_locale` | Lenient; `Transcoder::try_wide_to_locale` is strict |
| `utf8_to_ansi` | `encoding::conv::utf8_to_locale` | Lenient; `Transcoder::try_utf8_to_locale` is strict |
| `ansi_to_utf8` | `encoding::conv::locale_to_utf8` | Lenient; `Transcoder::try_locale_to_utf8` is strict |
| `locale_is_utf8` | `encoding::locale_is_utf8` | Cached for the life of the process |

The names in the first column are also exported from the crate root.

The `strutil` module holds assorted helpers (trimming, ASCII case, tokenizing, parsing and formatting) which work on narrow text, wide text, and `char` slices alike.
*/

extern crate libc;
extern crate once_cell;

pub mod base64;
#[doc(hidden)] pub mod doc;
pub mod encoding;
pub mod percent;
pub mod strutil;
pub mod xml;

mod ffi;

pub use encoding::{LocaleMode, WUnit};
pub use encoding::conv::Transcoder;

pub use base64::decode as base64_decode;
pub use base64::encode as base64_encode;
pub use percent::decode as url_decode;
pub use percent::encode as url_encode;
pub use xml::escape as xml_encode;

pub use encoding::conv::locale_to_utf8 as ansi_to_utf8;
pub use encoding::conv::locale_to_wide as ansi_to_unicode;
pub use encoding::conv::utf8_to_locale as utf8_to_ansi;
pub use encoding::conv::utf8_to_wide as utf8_to_unicode;
pub use encoding::conv::wide_to_locale as unicode_to_ansi;
pub use encoding::conv::wide_to_utf8 as unicode_to_utf8;
pub use encoding::locale_is_utf8;
