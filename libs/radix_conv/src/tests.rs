use super::*;

fn radix(value: u32) -> Radix {
    Radix::new(value).expect("test radix must be valid")
}

fn render(magnitude: u64, sign: Sign, to: u32, case: Case) -> String {
    let mut buffer = DigitBuffer::new();
    render_magnitude(&mut buffer, magnitude, sign, radix(to), case)
        .expect("default buffer is large enough")
        .to_owned()
}

fn converter(from: u32, to: u32, case: Case, order: OutputOrder) -> Converter {
    Converter::new(Settings {
        from_base: radix(from),
        to_base: radix(to),
        case,
        order,
        capacity: DigitBuffer::DEFAULT_CAPACITY,
    })
    .expect("default capacity must be allocatable")
}

#[test]
fn radix_range() {
    Radix::new(0).expect_err("0 is not a base");
    Radix::new(1).expect_err("1 is not a base");
    Radix::new(37).expect_err("37 has no digits");
    assert_eq!(Radix::new(2), Ok(Radix::MIN));
    assert_eq!(Radix::new(36), Ok(Radix::MAX));
    assert_eq!("16".parse::<Radix>(), Ok(Radix::HEX));
    assert_eq!("x".parse::<Radix>(), Err(Error::BadBase("x".to_owned())));
    assert_eq!("-2".parse::<Radix>(), Err(Error::BadBase("-2".to_owned())));
}

#[test]
fn bad_base_message() {
    let err = Radix::new(1).expect_err("1 is not a base");
    assert_eq!(err.to_string(), "base `1` is out of the supported range (2-36)");
}

#[test]
fn sign_marker_is_ascii_dash() {
    assert_eq!(SIGN_MARKER, '-');

    let text = render(5, Sign::Negative, 2, Case::Lower);
    assert_eq!(text.chars().next(), Some(SIGN_MARKER));
    assert_eq!(text, "-101");
}

#[test]
fn parse_simple() {
    assert_eq!(parse_magnitude("255", Radix::DECIMAL), Ok((255, Sign::Positive)));
    assert_eq!(parse_magnitude("ff", Radix::HEX), Ok((255, Sign::Positive)));
    assert_eq!(parse_magnitude("FF", Radix::HEX), Ok((255, Sign::Positive)));
    assert_eq!(parse_magnitude("-10", Radix::DECIMAL), Ok((10, Sign::Negative)));
    assert_eq!(parse_magnitude("1010", Radix::BINARY), Ok((10, Sign::Positive)));
    assert_eq!(parse_magnitude("0", Radix::BINARY), Ok((0, Sign::Positive)));
    assert_eq!(parse_magnitude("000", Radix::OCTAL), Ok((0, Sign::Positive)));
    assert_eq!(parse_magnitude("zz", Radix::MAX), Ok((35 * 36 + 35, Sign::Positive)));
}

#[test]
fn parse_rejects_invalid_digits() {
    assert_eq!(
        parse_magnitude("G", Radix::HEX),
        Err(Error::BadNumber(NumberError::InvalidDigit {
            ch: 'G',
            position: 1,
            radix: Radix::HEX
        }))
    );
    assert_eq!(
        parse_magnitude("-19", Radix::OCTAL),
        Err(Error::BadNumber(NumberError::InvalidDigit {
            ch: '9',
            position: 3,
            radix: Radix::OCTAL
        }))
    );

    // nothing is truncated at the first bad digit
    parse_magnitude("12 3", Radix::DECIMAL).expect_err("space is not a digit");
    parse_magnitude("1_000", Radix::DECIMAL).expect_err("no separators");
    parse_magnitude("+1", Radix::DECIMAL).expect_err("only '-' is a sign");
    parse_magnitude("--1", Radix::DECIMAL).expect_err("only one sign");
}

#[test]
fn parse_rejects_empty() {
    assert_eq!(
        parse_magnitude("", Radix::DECIMAL),
        Err(Error::BadNumber(NumberError::Empty))
    );
    assert_eq!(
        parse_magnitude("-", Radix::DECIMAL),
        Err(Error::BadNumber(NumberError::Empty))
    );
}

#[test]
fn parse_detects_overflow() {
    assert_eq!(
        parse_magnitude("18446744073709551615", Radix::DECIMAL),
        Ok((u64::MAX, Sign::Positive))
    );
    assert_eq!(
        parse_magnitude("18446744073709551616", Radix::DECIMAL),
        Err(Error::Overflow)
    );
    assert_eq!(
        parse_magnitude(&"1".repeat(65), Radix::BINARY),
        Err(Error::Overflow)
    );
    assert_eq!(
        parse_magnitude("-ffffffffffffffff", Radix::HEX),
        Ok((u64::MAX, Sign::Negative))
    );
}

#[test]
fn parse_bad_digit_beats_overflow() {
    let input = format!("{}x", "9".repeat(40));
    assert!(matches!(
        parse_magnitude(&input, Radix::DECIMAL),
        Err(Error::BadNumber(NumberError::InvalidDigit { ch: 'x', position: 41, .. }))
    ));
}

#[test]
fn digit_count_boundaries() {
    assert_eq!(digit_count(0, Radix::BINARY), 1);
    assert_eq!(digit_count(1, Radix::BINARY), 1);
    assert_eq!(digit_count(2, Radix::BINARY), 2);
    assert_eq!(digit_count(999, Radix::DECIMAL), 3);
    assert_eq!(digit_count(1000, Radix::DECIMAL), 4);
    assert_eq!(digit_count(u64::MAX, Radix::BINARY), 64);
    assert_eq!(digit_count(u64::MAX, Radix::HEX), 16);
    assert_eq!(digit_count(u64::MAX, Radix::DECIMAL), 20);
    assert_eq!(digit_count(u64::MAX, Radix::MAX), 13);
}

#[test]
fn render_simple() {
    assert_eq!(render(255, Sign::Positive, 16, Case::Upper), "FF");
    assert_eq!(render(255, Sign::Positive, 16, Case::Lower), "ff");
    assert_eq!(render(10, Sign::Negative, 2, Case::Lower), "-1010");
    assert_eq!(render(0, Sign::Positive, 36, Case::Lower), "0");
    assert_eq!(render(0, Sign::Negative, 10, Case::Lower), "-0");
    assert_eq!(render(u64::MAX, Sign::Positive, 10, Case::Lower), "18446744073709551615");
    assert_eq!(render(u64::MAX, Sign::Positive, 2, Case::Lower), "1".repeat(64));
}

#[test]
fn render_exact_capacity() {
    // "-1010" takes 5 characters plus the terminator
    let mut buffer = DigitBuffer::try_with_capacity(6).expect("tiny allocation");
    let text = render_magnitude(&mut buffer, 10, Sign::Negative, Radix::BINARY, Case::Lower)
        .expect("exactly fits");
    assert_eq!(text, "-1010");

    let mut buffer = DigitBuffer::try_with_capacity(5).expect("tiny allocation");
    assert_eq!(
        render_magnitude(&mut buffer, 10, Sign::Negative, Radix::BINARY, Case::Lower),
        Err(Error::TooBig {
            required: 6,
            capacity: 5
        })
    );
}

#[test]
fn render_too_big_leaves_buffer() {
    let mut buffer = DigitBuffer::try_with_capacity(4).expect("tiny allocation");
    render_magnitude(&mut buffer, 5, Sign::Positive, Radix::BINARY, Case::Lower)
        .expect("101 fits");

    render_magnitude(&mut buffer, 8, Sign::Positive, Radix::BINARY, Case::Lower)
        .expect_err("1000 needs 5 slots");
    assert_eq!(buffer.as_str(), "101");
}

#[test]
fn convert_end_to_end() {
    let order = OutputOrder::FrontToBack;

    let mut c = converter(10, 16, Case::Upper, order);
    assert_eq!(c.convert("255").expect("valid").to_string(), "FF");

    let mut c = converter(10, 2, Case::Lower, order);
    assert_eq!(c.convert("-10").expect("valid").to_string(), "-1010");

    let mut c = converter(16, 10, Case::Lower, order);
    assert_eq!(c.convert("ff").expect("valid").to_string(), "255");

    let mut c = converter(2, 16, Case::Upper, order);
    assert_eq!(c.convert("1010").expect("valid").to_string(), "A");
}

#[test]
fn convert_output_order() {
    let mut c = converter(16, 16, Case::Upper, OutputOrder::FrontToBack);
    assert_eq!(c.convert("a5").expect("valid").to_string(), "A5");

    c.set_order(OutputOrder::BackToFront);
    let rendered = c.convert("a5").expect("valid");
    assert_eq!(rendered.to_string(), "5A");
    assert_eq!(rendered.as_str(), "A5");

    // the sign takes part in the traversal
    assert_eq!(c.convert("-a5").expect("valid").to_string(), "5A-");
}

#[test]
fn convert_failure_keeps_settings() {
    let mut c = converter(8, 2, Case::Lower, OutputOrder::FrontToBack);
    let before = *c.settings();

    c.convert("9").expect_err("9 is not octal");
    assert_eq!(*c.settings(), before);

    c.resize(usize::MAX).expect_err("cannot allocate");
    assert_eq!(*c.settings(), before);
    assert_eq!(c.convert("7").expect("buffer still usable").to_string(), "111");
}

#[test]
fn configure_failure_keeps_settings() {
    let mut c = converter(10, 2, Case::Lower, OutputOrder::FrontToBack);
    let before = *c.settings();

    let err = c
        .configure(Settings {
            from_base: Radix::HEX,
            to_base: Radix::OCTAL,
            case: Case::Upper,
            order: OutputOrder::BackToFront,
            capacity: usize::MAX,
        })
        .expect_err("cannot allocate");

    assert!(matches!(err, Error::AllocationFailure { capacity: usize::MAX, .. }));
    assert_eq!(*c.settings(), before);
    assert_eq!(c.convert("10").expect("old settings still apply").to_string(), "1010");
}

#[test]
fn configure_replaces_everything() {
    let mut c = Converter::new(Settings::default()).expect("default settings");
    let next = Settings::from_raw(16, 8, 1, "l", 16).expect("valid settings");

    c.configure(next).expect("tiny allocation");
    assert_eq!(*c.settings(), next);
    assert_eq!(c.convert("ff").expect("valid").to_string(), "377");

    c.convert("ffffffffffffffff")
        .expect_err("22 octal digits don't fit 16 slots");
}

#[test]
fn settings_from_raw_validates() {
    assert!(matches!(Settings::from_raw(1, 10, 0, "l", 8), Err(Error::BadBase(_))));
    assert!(matches!(Settings::from_raw(10, 37, 0, "l", 8), Err(Error::BadBase(_))));
    assert!(matches!(Settings::from_raw(10, 2, 2, "l", 8), Err(Error::BadCase(_))));
    assert!(matches!(Settings::from_raw(10, 2, 0, "x", 8), Err(Error::BadOutputOrder(_))));
}

#[test]
fn settings_deserialize() {
    let settings: Settings = toml::from_str(
        r#"
        from_base = 16
        to_base = 36
        case = "upper"
        order = "l"
        "#,
    )
    .expect("valid toml settings");

    assert_eq!(settings.from_base, Radix::HEX);
    assert_eq!(settings.to_base, Radix::MAX);
    assert_eq!(settings.case, Case::Upper);
    assert_eq!(settings.order, OutputOrder::FrontToBack);
    assert_eq!(settings.capacity, DigitBuffer::DEFAULT_CAPACITY);

    toml::from_str::<Settings>("to_base = 40").expect_err("base out of range");
    toml::from_str::<Settings>("order = \"sideways\"").expect_err("unknown order");
}
