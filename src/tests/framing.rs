use nom::{Err, IResult, error::ErrorKind};

use crate::framing::{Records, lead, record, trim_trailing};

#[test]
fn test_record_stops_at_first_delimiter() {
    let res: IResult<_, _> = record(b"$GPAAA\r\n$GPBBB\r\n");
    assert_eq!(res, Ok((&b"$GPBBB\r\n"[..], &b"$GPAAA\r"[..])));
}

#[test]
fn test_record_empty_segment() {
    let res: IResult<_, _> = record(b"\nrest");
    assert_eq!(res, Ok((&b"rest"[..], &b""[..])));
}

#[test]
fn test_record_without_delimiter() {
    let res: IResult<_, _> = record(b"$GPAAA,1*00\r");
    assert!(res.is_err());

    let res: IResult<_, _> = record(b"");
    assert!(res.is_err());
}

#[test]
fn test_lead() {
    let res: IResult<_, _> = lead(b"$GPGGA");
    assert_eq!(res, Ok((&b"$GPGGA"[..], '$')));

    let res: IResult<_, _> = lead(b"!AIVDM");
    assert_eq!(res, Ok((&b"!AIVDM"[..], '!')));

    let res: IResult<_, _> = lead(b"GPGGA");
    let err = res.unwrap_err();
    if let Err::Error(e) = err {
        assert_eq!(e.code, ErrorKind::OneOf);
    } else {
        panic!("Unexpected error")
    }
}

#[test]
fn test_lead_rejects_leading_whitespace_and_empty() {
    let res: IResult<_, _> = lead(b" $GPGGA");
    assert!(res.is_err());

    let res: IResult<_, _> = lead(b"");
    assert!(res.is_err());
}

#[test]
fn test_lead_rejects_non_ascii() {
    let res: IResult<_, _> = lead(&[0xA4, b'G', b'P']);
    assert!(res.is_err());
}

#[test]
fn test_trim_trailing() {
    assert_eq!(trim_trailing(b"$GPAAA\r"), b"$GPAAA");
    assert_eq!(trim_trailing(b"$GPAAA \t\r\r"), b"$GPAAA");
    assert_eq!(trim_trailing(b"  $GPAAA"), b"  $GPAAA");
    assert_eq!(trim_trailing(b"$GP AAA"), b"$GP AAA");
    assert_eq!(trim_trailing(b"\r\t "), b"");
    assert_eq!(trim_trailing(b""), b"");
}

#[test]
fn test_records_split_semantics() {
    let mut records = Records::new(b"a\n\nb\r\nc");

    assert_eq!(records.next(), Some(&b"a"[..]));
    assert_eq!(records.next(), Some(&b""[..]));
    assert_eq!(records.next(), Some(&b"b\r"[..]));
    assert_eq!(records.next(), None);
    assert_eq!(records.next(), None);

    assert_eq!(records.rest(), b"c");
    assert_eq!(records.consumed(), 6);
}

#[test]
fn test_records_trailing_delimiter_leaves_empty_rest() {
    let mut records = Records::new(b"$GPAAA\r\n");

    assert_eq!(records.by_ref().count(), 1);
    assert_eq!(records.rest(), b"");
    assert_eq!(records.consumed(), 8);
}
