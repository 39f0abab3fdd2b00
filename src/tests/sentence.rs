use crate::Sentence;

#[test]
fn test_frame_standard_sentence() {
    let sentence = Sentence::frame(b"$GPGGA,123456,data*41\r").unwrap();

    assert_eq!(sentence, "$GPGGA,123456,data*41");
    assert_eq!(sentence.lead(), '$');
    assert!(!sentence.is_encapsulated());
    assert_eq!(sentence.len(), 21);
    assert!(!sentence.is_empty());
    assert_eq!(sentence.to_str(), Ok("$GPGGA,123456,data*41"));
}

#[test]
fn test_frame_encapsulated_sentence() {
    let sentence = Sentence::frame(b"!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,0*26").unwrap();

    assert_eq!(sentence.lead(), '!');
    assert!(sentence.is_encapsulated());
}

#[test]
fn test_frame_rejects_garbage() {
    assert!(Sentence::frame(b"skfvdalfdadnsldasdc").is_none());
    assert!(Sentence::frame(b"").is_none());
    assert!(Sentence::frame(b"\r").is_none());
    assert!(Sentence::frame(b" $GPGGA").is_none());
    assert!(Sentence::frame(b"GPGGA,$").is_none());
}

#[test]
fn test_frame_trims_only_the_right() {
    let sentence = Sentence::frame(b"$GPGGA, ,data \t \r").unwrap();
    assert_eq!(sentence, "$GPGGA, ,data");

    let sentence = Sentence::frame(b"$\r").unwrap();
    assert_eq!(sentence, "$");
    assert_eq!(sentence.len(), 1);
    assert!(!sentence.is_empty());
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let raw = [b'$', b'G', 0xFF, b'A', b'\r'];
    let sentence = Sentence::frame(&raw).unwrap();

    assert_eq!(sentence.as_bytes(), &raw[..4]);
    assert!(sentence.to_str().is_err());
    assert_eq!(sentence.to_string(), "$G\u{FFFD}A");
}
