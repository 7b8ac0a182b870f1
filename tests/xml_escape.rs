extern crate strcodec;

use strcodec::xml;

#[test]
fn test_entities() {
    assert_eq!(xml::escape(b"<a>&'\""), "&lt;a&gt;&amp;&apos;&quot;");
    assert_eq!(xml::escape_str("1 < 2 && 3 > 2"), "1 &lt; 2 &amp;&amp; 3 &gt; 2");
    assert_eq!(xml::escape(""), "");
}

#[test]
fn test_controls() {
    assert_eq!(xml::escape(b"a\tb\nc\rd"), "a\tb\nc\rd");
    assert_eq!(xml::escape(b"a\x00b"), "a\u{fffd}b");
    assert_eq!(xml::escape(b"\x01\x1f"), "\u{fffd}\u{fffd}");
    assert_eq!(xml::escape(b"\x7f"), "\x7f");
}

#[test]
fn test_multibyte_copied() {
    assert_eq!(xml::escape_str("garçon"), "garçon");
    assert_eq!(xml::escape_str("中文<123>"), "中文&lt;123&gt;");
    assert_eq!(xml::escape_str("\u{1f600}&"), "\u{1f600}&amp;");
    assert_eq!(xml::escape_str("\u{10ffff}"), "\u{10ffff}");
}

#[test]
fn test_lone_continuation() {
    let out = xml::escape(b"ab\x80cd");
    assert_eq!(out.as_bytes(), b"ab\xef\xbf\xbdcd");
}

#[test]
fn test_truncated() {
    // Lead byte plus the continuation bytes that did fit become one replacement.
    assert_eq!(xml::escape(b"\xe4\xb8"), "\u{fffd}");
    assert_eq!(xml::escape(b"\xe4\xb8x"), "\u{fffd}x");
    assert_eq!(xml::escape(b"\xf0\x9f\x98<"), "\u{fffd}&lt;");
    assert_eq!(xml::escape(b"\xc3"), "\u{fffd}");
}

#[test]
fn test_ill_formed() {
    // Overlong.
    assert_eq!(xml::escape(b"\xc0\xaf"), "\u{fffd}\u{fffd}");
    assert_eq!(xml::escape(b"\xe0\x80\xaf"), "\u{fffd}\u{fffd}\u{fffd}");
    // Surrogate.
    assert_eq!(xml::escape(b"\xed\xa0\x80"), "\u{fffd}\u{fffd}\u{fffd}");
    // Past U+10FFFF.
    assert_eq!(xml::escape(b"\xf4\x90\x80\x80"), "\u{fffd}\u{fffd}\u{fffd}\u{fffd}");
    assert_eq!(xml::escape(b"\xff"), "\u{fffd}");
}

#[test]
fn test_noncharacters() {
    assert_eq!(xml::escape(b"a\xef\xbf\xbeb"), "a\u{fffd}b");
    assert_eq!(xml::escape(b"a\xef\xbf\xbfb"), "a\u{fffd}b");
    assert_eq!(xml::escape_str("\u{fffd}"), "\u{fffd}");
}

#[test]
fn test_root_name() {
    assert_eq!(strcodec::xml_encode("<"), "&lt;");
}
