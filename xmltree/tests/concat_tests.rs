use embedded_io::Write;
use xmltree::ConcatString;

#[test]
fn test_empty_accumulator() {
    let mut s = ConcatString::new();

    assert!(s.is_empty());
    assert_eq!(s.allocated(), 0);
    assert_eq!(s.flush(), "");
}

#[test]
fn test_push_str_concatenates() {
    let mut s = ConcatString::new();
    s.push_str("Hello").unwrap();
    s.push_str(", ").unwrap();
    s.push_str("world").unwrap();

    assert_eq!(s.as_str(), "Hello, world");
    assert_eq!(s.len(), 12);
}

#[test]
fn test_grows_in_sixteen_byte_steps() {
    let mut s = ConcatString::new();

    s.push_str("a").unwrap();
    assert_eq!(s.allocated(), 16);

    s.push_str("bcdefghijklmnop").unwrap();
    assert_eq!(s.len(), 16);
    assert_eq!(s.allocated(), 16);

    s.push_str("q").unwrap();
    assert_eq!(s.allocated(), 32);

    s.push_str(&"x".repeat(40)).unwrap();
    assert_eq!(s.allocated(), 64);
}

#[test]
fn test_push_filtered_keeps_printable_ascii() {
    let mut s = ConcatString::new();

    s.push_filtered("tab\there\nnew\u{7f}line é~").unwrap();

    assert_eq!(s.as_str(), "tabherenewline ~");
}

#[test]
fn test_flush_returns_text_and_resets() {
    let mut s = ConcatString::new();
    s.push_str("first").unwrap();

    let text = s.flush();

    assert_eq!(text, "first");
    assert!(s.is_empty());
    assert_eq!(s.allocated(), 0);

    s.push_str("second").unwrap();
    assert_eq!(s.flush(), "second");
}

#[test]
fn test_clone_is_independent() {
    let mut s = ConcatString::new();
    s.push_str("shared").unwrap();

    let mut copy = s.clone();
    copy.push_str("_copy").unwrap();

    assert_eq!(s.as_str(), "shared");
    assert_eq!(copy.as_str(), "shared_copy");
}

#[test]
fn test_embedded_io_write_sink() {
    let mut s = ConcatString::new();

    s.write_all(b"<a>").unwrap();
    s.write_all("ü".as_bytes()).unwrap();

    assert_eq!(s.as_str(), "<a>ü");
}

#[test]
fn test_embedded_io_rejects_invalid_utf8() {
    let mut s = ConcatString::new();
    s.push_str("ok").unwrap();

    assert!(s.write_all(&[0xff, 0xfe]).is_err());
    assert_eq!(s.as_str(), "ok");
}

#[test]
fn test_filtered_out_input_does_not_grow() {
    let mut s = ConcatString::new();
    s.push_str("abc").unwrap();

    assert_eq!(s.push_filtered("\u{1}\u{2}"), Ok(()));
    assert_eq!(s.as_str(), "abc");
    assert_eq!(s.allocated(), 16);
}
