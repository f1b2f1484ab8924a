use super::*;
use crate::convert::ConversionError;

// ======================== Binary operators ========================

#[test]
fn add_mixed_types() {
    assert_eq!(add::<u8, i16, i32>(200, -300), Ok(-100));
    assert_eq!(add::<f32, i32, f64>(0.25, 2), Ok(2.25));
}

#[test]
fn add_conversion_failure() {
    assert_eq!(
        add::<i32, i32, u8>(-1, 2),
        Err(ArithError::Conversion(ConversionError::Overflow))
    );
}

#[test]
fn subtract_multiply() {
    assert_eq!(subtract::<i64, u8, i64>(10, 25), Ok(-15));
    assert_eq!(multiply::<f64, u32, f64>(1.5, 4), Ok(6.0));
}

#[test]
fn divide_integer_truncates() {
    assert_eq!(divide::<i32, i32, i32>(-7, 2), Ok(-3));
    assert_eq!(divide::<i32, i32, f32>(-7, 2), Ok(-3.5));
}

#[test]
fn divide_by_zero() {
    assert_eq!(divide::<i32, i32, i32>(1, 0), Err(ArithError::DivisionByZero));
    assert_eq!(divide::<f64, f32, f64>(1.0, 0.0), Err(ArithError::DivisionByZero));
    assert_eq!(modulus::<u8, u8, u8>(5, 0), Err(ArithError::DivisionByZero));
    assert_eq!(modulo::<i32, i32, i32>(5, 0), Err(ArithError::DivisionByZero));
}

#[test]
fn signed_min_over_minus_one() {
    let overflow = Err(ArithError::Conversion(ConversionError::Overflow));
    assert_eq!(divide::<i32, i32, i32>(i32::MIN, -1), overflow);
    assert_eq!(divide::<i64, i8, i8>(-128, -1), Err(ArithError::Conversion(ConversionError::Overflow)));
    assert_eq!(modulus::<i32, i32, i32>(i32::MIN, -1), Ok(0));
    assert_eq!(modulo::<i32, i32, i32>(i32::MIN, -1), Ok(0));
    assert_eq!(divide::<i32, i32, i32>(i32::MIN, 1), Ok(i32::MIN));
    assert_eq!(divide::<i32, i32, i32>(i32::MIN + 1, -1), Ok(i32::MAX));
}

// ======================== Remainders ========================

#[test]
fn modulus_truncated_sign() {
    assert_eq!(modulus::<i32, i32, i32>(7, 3), Ok(1));
    assert_eq!(modulus::<i32, i32, i32>(-7, 3), Ok(-1));
    assert_eq!(modulus::<i32, i32, i32>(7, -3), Ok(1));
}

#[test]
fn modulo_spreadsheet_sign() {
    assert_eq!(modulo::<i32, i32, i32>(7, 3), Ok(1));
    assert_eq!(modulo::<i32, i32, i32>(-7, 3), Ok(2));
    assert_eq!(modulo::<i32, i32, i32>(7, -3), Ok(-2));
    assert_eq!(modulo::<i32, i32, i32>(-7, -3), Ok(-1));
    assert_eq!(modulo::<i32, i32, i32>(-6, 3), Ok(0));
}

#[test]
fn modulo_float() {
    let r: f64 = modulo(-1.25_f64, 1.0_f64).unwrap();
    assert!((r - 0.75).abs() < 1e-15);
}

// ======================== Unary ========================

#[test]
fn increment_decrement() {
    assert_eq!(increment::<u8, u16>(255), Ok(256));
    assert_eq!(decrement::<i32, i32>(0), Ok(-1));
    assert_eq!(increment::<f64, f64>(0.5), Ok(1.5));
}

#[test]
fn increment_overflow() {
    assert_eq!(
        increment::<u8, u8>(255),
        Err(ArithError::Conversion(ConversionError::Overflow))
    );
    assert_eq!(
        decrement::<u32, u32>(0),
        Err(ArithError::Conversion(ConversionError::Overflow))
    );
}

#[test]
fn negate_signed_and_float() {
    assert_eq!(negate::<i32, i32>(5), Ok(-5));
    assert_eq!(negate::<u8, i16>(200), Ok(-200));
    assert_eq!(negate::<f64, f64>(-2.5), Ok(2.5));
    assert_eq!(negate::<u32, u32>(0), Ok(0));
}

#[test]
fn negate_unrepresentable() {
    assert!(negate::<u8, u8>(1).is_err());
    assert!(negate::<i8, i8>(i8::MIN).is_err());
}

#[test]
fn equals_after_conversion() {
    assert_eq!(equals::<u8, f64, f64>(3, 3.0), Ok(true));
    assert_eq!(equals::<f64, i32, i32>(3.7, 3), Ok(true));
    assert_eq!(equals::<f64, i32, f64>(3.7, 3), Ok(false));
}

// ======================== GCD ========================

#[test]
fn gcd_basic() {
    assert_eq!(gcd::<i32, i32, i32>(54, 24), Ok(6));
    assert_eq!(gcd::<i32, i32, i32>(24, 54), Ok(6));
    assert_eq!(gcd::<u64, u64, u64>(17, 5), Ok(1));
    assert_eq!(gcd::<i32, i32, i32>(0, -8), Ok(8));
}

#[test]
fn gcd_both_zero() {
    assert_eq!(gcd::<i32, i32, i32>(0, 0), Err(ArithError::DivisionByZero));
}

// ======================== Range helpers ========================

#[test]
fn clamp_bounds() {
    assert_eq!(clamp(5, 0, 3), 3);
    assert_eq!(clamp(-1.0_f64, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2_u8, 1, 4), 2);
}

#[test]
fn wrap_ranges() {
    assert_eq!(wrap(10_i32, 0, 10), Ok(0));
    assert_eq!(wrap(-10_i32, 0, 10), Ok(0));
    assert_eq!(wrap(-11_i32, 0, 10), Ok(9));
    assert_eq!(wrap(25_i32, 0, 10), Ok(5));
    assert_eq!(wrap(-90.0_f64, -180.0, 180.0), Ok(-90.0));
    assert_eq!(wrap(190.0_f64, -180.0, 180.0), Ok(-170.0));
}

#[test]
fn wrap_signed_range_wider_than_max() {
    assert_eq!(wrap(0_i8, -100, 100), Ok(0));
    assert_eq!(wrap(120_i8, -100, 100), Ok(-80));
    assert_eq!(wrap(-128_i8, -100, 100), Ok(72));
    assert_eq!(wrap(-100_i8, 100, 120), Ok(100));
    assert_eq!(wrap(i64::MIN, i64::MIN + 1, i64::MAX), Ok(i64::MAX - 1));
    assert_eq!(wrap(i128::MAX, i128::MIN, i128::MAX), Ok(i128::MIN));
}

#[test]
fn wrap_empty_range() {
    assert_eq!(wrap(1, 3, 3), Err(ArithError::DivisionByZero));
    assert_eq!(wrap(1, 4, 3), Err(ArithError::DivisionByZero));
}

#[test]
fn round_decimals() {
    assert!((round_to(1.23456_f64, 2) - 1.23).abs() < 1e-12);
    assert!((round_to(2.5_f32, 0) - 3.0).abs() < 1e-6);
}

#[test]
fn round_beyond_float_precision_is_identity() {
    assert_eq!(round_to(1.25_f64, u32::MAX), 1.25);
    assert_eq!(round_to(1.25_f64, 400), 1.25);
    assert_eq!(round_to(1e300_f64, 20), 1e300);
    assert_eq!(round_to(-0.5_f32, 3_000_000_000), -0.5);
}

#[test]
fn display() {
    assert_eq!(format!("{}", ArithError::DivisionByZero), "division by zero");
    let s = format!("{}", ArithError::Conversion(ConversionError::Overflow));
    assert!(s.starts_with("operand conversion failed"));
}
