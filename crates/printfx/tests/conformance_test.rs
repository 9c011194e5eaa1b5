//! End-to-end conformance: format strings through the public wrappers.

use printfx::{
    Arg, CalendarTime, GrowBuf, PrintError, SinkError, SocketTx, devprintfx, fprintfx, snprintfx,
    sprintfx, uprintfx,
};

fn s(fmt: &str, args: &[Arg<'_>]) -> String {
    sprintfx(fmt, args).unwrap()
}

#[test]
fn test_integer_conversions() {
    assert_eq!(s("%d", &[Arg::I32(0)]), "0");
    assert_eq!(s("%5d", &[Arg::I32(42)]), "   42");
    assert_eq!(s("%-5d|", &[Arg::I32(42)]), "42   |");
    assert_eq!(s("%05d", &[Arg::I32(-42)]), "-0042");
    assert_eq!(s("%+d", &[Arg::I32(42)]), "+42");
    assert_eq!(s("%'d", &[Arg::I32(1_234_567)]), "1,234,567");
    assert_eq!(s("%ld", &[Arg::I64(i64::MIN)]), "-9223372036854775808");
    assert_eq!(s("%lu", &[Arg::U64(u64::MAX)]), "18446744073709551615");
}

#[test]
fn test_radix_conversions() {
    assert_eq!(s("%x", &[Arg::U32(0xDEAD)]), "dead");
    assert_eq!(s("%04X", &[Arg::U32(255)]), "00FF");
    assert_eq!(s("%#x", &[Arg::U32(255)]), "0xff");
    assert_eq!(s("%#o", &[Arg::U32(8)]), "010");
    assert_eq!(s("%'x", &[Arg::U32(0xDEAD_BEEF)]), "dead_beef");
}

#[test]
fn test_left_justify_beats_zero_pad() {
    assert_eq!(s("%-05d|", &[Arg::I32(42)]), "42   |");
    assert_eq!(s("%0-5d|", &[Arg::I32(42)]), "42   |");
}

#[test]
fn test_percent_escape_consumes_no_argument() {
    assert_eq!(s("100%%", &[]), "100%");
    assert_eq!(s("%%%d", &[Arg::I32(1)]), "%1");
}

#[test]
fn test_float_conversions() {
    assert_eq!(s("%f", &[Arg::F64(std::f64::consts::PI)]), "3.141593");
    assert_eq!(s("%.2f", &[Arg::F64(2.5)]), "2.50");
    assert_eq!(s("%.2e", &[Arg::F64(0.000123)]), "1.23e-04");
    assert_eq!(s("%g", &[Arg::F64(100.0)]), "100");
    assert_eq!(s("%g", &[Arg::F64(1_234_567.0)]), "1.23457e+06");
}

#[test]
fn test_float_specials() {
    assert_eq!(s("%f", &[Arg::F64(f64::NAN)]), "nan");
    assert_eq!(s("%F", &[Arg::F64(f64::INFINITY)]), "INF");
    assert_eq!(s("%f", &[Arg::F64(f64::NEG_INFINITY)]), "-inf");
    assert_eq!(s("%08f", &[Arg::F64(f64::INFINITY)]), "     inf");
}

#[test]
fn test_string_and_char() {
    assert_eq!(s("%s", &[Arg::Str("hello")]), "hello");
    assert_eq!(s("%.3s", &[Arg::Str("hello")]), "hel");
    assert_eq!(s("%7s", &[Arg::Str("hi")]), "     hi");
    assert_eq!(s("[%c]", &[Arg::Char(b'x')]), "[x]");
}

#[test]
fn test_url_encoding() {
    assert_eq!(s("%U", &[Arg::Str("a b/c?d=1")]), "a%20b%2Fc%3Fd%3D1");
}

#[test]
fn test_sgr_sequences() {
    assert_eq!(s("%C", &[Arg::U32(0x011F_0000)]), "\x1b[1;31m");
    assert_eq!(s("%C", &[Arg::U32(0x0007_0000)]), "\x1b[7m");
    assert_eq!(s("%C", &[Arg::U32(0)]), "\x1b[0m");
}

#[test]
fn test_network_addresses() {
    assert_eq!(s("%I", &[Arg::Bytes(&[192, 168, 1, 1])]), "192.168.1.1");
    assert_eq!(s("%0I", &[Arg::Bytes(&[10, 0, 0, 1])]), "010.000.000.001");
    let mac = [0x01u8, 0x23, 0x45, 0x67, 0x89, 0xAB];
    assert_eq!(s("%[']m", &[Arg::Bytes(&mac)]), "01:23:45:67:89:ab");
    assert_eq!(s("%M", &[Arg::Bytes(&mac)]), "0123456789AB");
}

#[test]
fn test_hexdump() {
    let data = [0xDEu8, 0xAD, 0xBE, 0xEF];
    assert_eq!(s("%[-+]h", &[Arg::Bytes(&data)]), "de ad be ef  ....");
    let zero_addr = format!("0x{}: ", "0".repeat((usize::BITS / 4) as usize));
    assert_eq!(
        s("%[!]h", &[Arg::Bytes(&data)]),
        format!("{zero_addr}de ad be ef")
    );
    assert_eq!(s("%[!]h", &[Arg::Bytes(&[])]), zero_addr);
    assert_eq!(s("%[-]h", &[Arg::Bytes(&[])]), "");
}

#[test]
fn test_datetime() {
    // Sun, 10 Sep 2017 20:50:37 UTC
    let t = CalendarTime::from_unix(1_505_076_637, 0);
    assert_eq!(s("%D", &[Arg::Time(&t)]), "2017-09-10");
    assert_eq!(s("%Z", &[Arg::Time(&t)]), "2017-09-10T20:50:37.000Z");
    assert_eq!(s("%#Z", &[Arg::Time(&t)]), "Sun, 10 Sep 2017 20:50:37 GMT");
    assert_eq!(s("%['].0T", &[Arg::Time(&t)]), "20h50m37s");
}

#[test]
fn test_elapsed() {
    let micros = ((25 * 3600 + 2 * 60 + 3) as u64) * 1_000_000 + 456_000;
    assert_eq!(s("%!T", &[Arg::U64(micros)]), "1d01:02:03.456");
    assert_eq!(
        s("%['!]T", &[Arg::U64(3_723_000_000u64)]),
        "01h02m03s"
    );
}

#[test]
fn test_snprintfx_truncation_semantics() {
    let mut buf = [0u8; 6];
    let n = snprintfx(&mut buf, "%s", &[Arg::Str("hello world")]).unwrap();
    assert_eq!(n, 11);
    assert_eq!(&buf, b"hello ");

    // Exact fit is not truncation.
    let mut buf = [0u8; 5];
    let n = snprintfx(&mut buf, "%s", &[Arg::Str("hello")]).unwrap();
    assert_eq!(n, 5);
}

#[test]
fn test_uprintfx_accumulates_across_calls() {
    let mut buf = GrowBuf::new();
    uprintfx(&mut buf, "%d,", &[Arg::I32(1)]).unwrap();
    uprintfx(&mut buf, "%d", &[Arg::I32(2)]).unwrap();
    assert_eq!(buf.as_bytes(), b"1,2");
}

#[test]
fn test_fprintfx_stream() {
    let mut sink = Vec::new();
    fprintfx(&mut sink, "%s=%d", &[Arg::Str("n"), Arg::I32(3)]).unwrap();
    assert_eq!(sink, b"n=3");
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        sprintfx("%q", &[]).unwrap_err(),
        PrintError::Parse { byte: b'q', .. }
    ));
    assert!(matches!(
        sprintfx("%[*]h", &[]).unwrap_err(),
        PrintError::Parse { byte: b'*', .. }
    ));
    assert!(sprintfx("end%", &[]).unwrap_err().is_parse());
}

#[test]
fn test_argument_errors() {
    assert!(matches!(
        sprintfx("%d", &[]).unwrap_err(),
        PrintError::MissingArg { index: 0 }
    ));
    assert!(matches!(
        sprintfx("%d", &[Arg::Str("x")]).unwrap_err(),
        PrintError::ArgMismatch { index: 0, .. }
    ));
    assert!(matches!(
        sprintfx("%I", &[Arg::Bytes(&[1, 2, 3])]).unwrap_err(),
        PrintError::ArgMismatch { .. }
    ));
}

#[test]
fn test_device_failure_preserves_prefix() {
    let mut seen = Vec::new();
    let mut putc = |b: u8| -> Result<(), SinkError> {
        if seen.len() == 4 {
            return Err(SinkError::Device);
        }
        seen.push(b);
        Ok(())
    };
    let err = devprintfx(&mut putc, "ok: %d", &[Arg::I32(42)]).unwrap_err();
    match err {
        PrintError::Sink { written, source } => {
            assert_eq!(written, 4);
            assert!(matches!(source, SinkError::Device));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(seen, b"ok: ");
}

#[test]
fn test_socket_sink_end_to_end() {
    struct Capture(Vec<u8>);
    impl SocketTx for Capture {
        fn send(&mut self, byte: u8) -> Result<usize, SinkError> {
            self.0.push(byte);
            Ok(1)
        }
    }
    let mut sock = Capture(Vec::new());
    let n = printfx::socprintfx(&mut sock, "%'b", &[Arg::U32(0xAAAA_AAAA)]).unwrap();
    assert_eq!(n, 39);
    assert_eq!(sock.0, b"1010-1010|1010-1010 1010-1010|1010-1010");
}

#[test]
fn test_concurrent_calls_are_independent() {
    // No shared state outside the console lock: parallel formatting
    // into private buffers must never interfere.
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let mut buf = GrowBuf::new();
                for _ in 0..100 {
                    uprintfx(&mut buf, "%d;", &[Arg::I32(i)]).unwrap();
                }
                buf.len()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 200);
    }
}
