use decimal128::Decimal128;

#[test]
fn it_returns_negative_infinity() {
    let vec: [u8; 16] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xf8,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!("-Infinity".to_string(), dec128.to_string());
}

#[test]
fn it_returns_positive_infinity() {
    let vec: [u8; 16] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x78,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!("Infinity".to_string(), dec128.to_string());
}

#[test]
fn it_returns_nan() {
    let vec: [u8; 16] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x7c,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!("NaN".to_string(), dec128.to_string());
}

#[test]
fn it_returns_0_001234() {
    let vec: [u8; 16] = [
        0xd2, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x34,
        0x30,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!("0.001234".to_string(), dec128.to_string());
}

#[test]
fn it_returns_123456789012() {
    let vec: [u8; 16] = [
        0x14, 0x1a, 0x99, 0xbe, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
        0x30,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!("123456789012".to_string(), dec128.to_string());
}

#[test]
fn it_returns_0_00123400000() {
    let vec: [u8; 16] = [
        0x40, 0xef, 0x5a, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2a,
        0x30,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!("0.00123400000".to_string(), dec128.to_string());
}

#[test]
fn it_returns_0_1234567890123456789012345678901234() {
    let vec: [u8; 16] = [
        0xf2, 0xaf, 0x96, 0x7e, 0xd0, 0x5c, 0x82, 0xde, 0x32, 0x97, 0xff, 0x6f, 0xde, 0x3c, 0xfc,
        0x2f,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!(
        "0.1234567890123456789012345678901234".to_string(),
        dec128.to_string()
    );
}

#[test]
fn it_returns_1_000000000000000000000000000000000_e_6144() {
    let vec: [u8; 16] = [
        0x00, 0x00, 0x00, 0x00, 0x0a, 0x5b, 0xc1, 0x38, 0x93, 0x8d, 0x44, 0xc6, 0x4d, 0x31, 0xfe,
        0x5f,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!(
        "1.000000000000000000000000000000000E+6144".to_string(),
        dec128.to_string()
    );
}

#[test]
fn it_returns_1_e_6176() {
    let vec: [u8; 16] = [
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00,
    ];
    let dec128 = Decimal128::from_bytes(&vec);
    assert_eq!("1E-6176".to_string(), dec128.to_string());
}
