use super::*;

// ======================== improper / proper ========================

#[test]
fn improper_negative_whole() {
    let f = MixedFraction::new(-1_i32, -1, 2);
    assert_eq!(to_improper(f), Ok(MixedFraction::new(0, -3, 2)));
}

#[test]
fn proper_already_proper_is_unchanged() {
    let f = MixedFraction::new(4_u16, 1, 3);
    assert_eq!(to_proper(f), Ok(f));
}

#[test]
fn improper_then_proper_restores() {
    let f = MixedFraction::new(5_i64, 2, 7);
    assert_eq!(to_proper(to_improper(f).unwrap()), Ok(f));
}

#[test]
fn zero_denominator_rejected() {
    let f = MixedFraction::new(1_i32, 1, 0);
    assert_eq!(to_improper(f), Err(ArithError::DivisionByZero));
    assert_eq!(to_proper(f), Err(ArithError::DivisionByZero));
    assert_eq!(simplify(f), Err(ArithError::DivisionByZero));
    assert_eq!(scale_denominator(f, 4), Err(ArithError::DivisionByZero));
}

#[test]
fn signed_min_over_minus_one_is_overflow() {
    let overflow = Err(ArithError::Conversion(ConversionError::Overflow));
    let f = MixedFraction::new(0_i32, i32::MIN, -1);
    assert_eq!(to_proper(f), overflow);
    assert_eq!(simplify(f), overflow);
    assert_eq!(scale_denominator(f, 1), overflow);
    assert_eq!(
        to_proper(MixedFraction::new(0_i32, i32::MIN, 1)),
        Ok(MixedFraction::new(i32::MIN, 0, 1))
    );
}

// ======================== simplify ========================

#[test]
fn simplify_four_eighths() {
    let f = simplify(MixedFraction::new(0_i32, 4, 8)).unwrap();
    assert_eq!(<(i32, i32, i32)>::from(f), (0, 1, 2));
}

#[test]
fn simplify_carries_whole_units() {
    let f = simplify(MixedFraction::new(1_u32, 10, 4)).unwrap();
    assert_eq!(f, MixedFraction::new(3, 1, 2));
}

#[test]
fn simplify_exact_whole() {
    let f = simplify(MixedFraction::new(2_i32, 6, 3)).unwrap();
    assert_eq!(f, MixedFraction::new(4, 0, 1));
}

#[test]
fn simplify_zero_numerator() {
    let f = simplify(MixedFraction::new(7_i8, 0, 5)).unwrap();
    assert_eq!(f, MixedFraction::new(7, 0, 1));
}

#[test]
fn simplify_negative_denominator() {
    let f = simplify(MixedFraction::new(0_i32, 6, -9)).unwrap();
    assert_eq!(f, MixedFraction::new(0, -2, 3));
}

#[test]
fn simplify_is_idempotent() {
    let once = simplify(MixedFraction::new(0_i64, 42, 12)).unwrap();
    assert_eq!(simplify(once), Ok(once));
    assert_eq!(once, MixedFraction::new(3, 1, 2));
}

// ======================== scale_denominator ========================

#[test]
fn scale_down_truncates() {
    let f = scale_denominator(MixedFraction::new(0_i32, 2, 3), 4).unwrap();
    assert_eq!(f, MixedFraction::new(0, 2, 4));
}

#[test]
fn scale_preserves_value() {
    let f = MixedFraction::new(2_i32, 3, 8);
    let g = scale_denominator(f, 32).unwrap();
    assert_eq!(g.to_float::<f64>(), f.to_float::<f64>());
}

#[test]
fn scale_to_zero_rejected() {
    let f = MixedFraction::new(0_u8, 1, 2);
    assert_eq!(scale_denominator(f, 0), Err(ArithError::DivisionByZero));
}

// ======================== round_to_mixed_fraction ========================

#[test]
fn round_exact_binary_fraction() {
    assert_eq!(
        round_to_mixed_fraction(3.375_f64, 8_u8),
        Ok(MixedFraction::new(3, 3, 8))
    );
}

#[test]
fn round_prefers_smallest_denominator() {
    // 0.5 is hit exactly by 1/2, 2/4, 3/6 and 4/8.
    assert_eq!(
        round_to_mixed_fraction(0.5_f64, 8_i32),
        Ok(MixedFraction::new(0, 1, 2))
    );
}

#[test]
fn round_up_to_whole() {
    assert_eq!(
        round_to_mixed_fraction(2.99_f64, 4_i32),
        Ok(MixedFraction::new(3, 0, 1))
    );
}

#[test]
fn round_down_to_whole() {
    assert_eq!(
        round_to_mixed_fraction(5.01_f32, 4_u32),
        Ok(MixedFraction::new(5, 0, 1))
    );
}

#[test]
fn round_half_with_unit_accuracy() {
    assert_eq!(
        round_to_mixed_fraction(2.5_f64, 1_i32),
        Ok(MixedFraction::new(3, 0, 1))
    );
}

#[test]
fn round_negative() {
    assert_eq!(
        round_to_mixed_fraction(-0.25_f64, 16_i16),
        Ok(MixedFraction::new(0, -1, 4))
    );
}

#[test]
fn round_negative_into_unsigned_fails() {
    assert!(matches!(
        round_to_mixed_fraction(-1.5_f64, 4_u32),
        Err(ArithError::Conversion(_))
    ));
}

#[test]
fn round_non_finite_fails() {
    assert!(round_to_mixed_fraction(f64::NAN, 4_i32).is_err());
    assert!(round_to_mixed_fraction(f64::INFINITY, 4_i32).is_err());
}

#[test]
fn round_zero_accuracy_fails() {
    assert_eq!(
        round_to_mixed_fraction(1.5_f64, 0_i32),
        Err(ArithError::DivisionByZero)
    );
}

#[test]
fn round_error_bounded_by_accuracy() {
    let accuracy = 12_i32;
    for i in 0..200 {
        let x = -5.0 + f64::from(i) * 0.0517;
        let f = round_to_mixed_fraction(x, accuracy).unwrap();
        assert!(f.denominator >= 1 && f.denominator <= accuracy);
        let err = (f.to_float::<f64>().unwrap() - x).abs();
        assert!(err <= 0.5 / f64::from(accuracy) + 1e-12, "x = {}", x);
    }
}

// ======================== display ========================

#[test]
fn display_forms() {
    use alloc::string::ToString;
    assert_eq!(MixedFraction::new(2_i32, 1, 4).to_string(), "2 1/4");
    assert_eq!(MixedFraction::new(-2_i32, -1, 4).to_string(), "-2 1/4");
    assert_eq!(MixedFraction::new(0_i32, -3, 8).to_string(), "-3/8");
    assert_eq!(MixedFraction::new(6_u8, 0, 1).to_string(), "6");
}
