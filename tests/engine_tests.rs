mod common;
use common::STANDARD_SHIFT;
use rshiftlog::core::calculator::ShiftCalculator;
use rshiftlog::errors::AppError;
use rshiftlog::utils::{format_duration, parse_duration};

#[test]
fn test_full_day_gives_positive_residual() {
    let calc = ShiftCalculator::new(STANDARD_SHIFT);
    let r = calc.compute("09:00", "17:00").expect("compute");

    assert_eq!(r.worked, 480);
    assert_eq!(r.residual, 18);
    assert_eq!(format_duration(r.worked), "8h 0m");
    assert_eq!(format_duration(r.residual), "0h 18m");
}

#[test]
fn test_short_day_gives_negative_residual() {
    let calc = ShiftCalculator::new(STANDARD_SHIFT);
    let r = calc.compute("09:00", "16:00").expect("compute");

    assert_eq!(r.worked, 420);
    assert_eq!(r.residual, -42);
    assert_eq!(format_duration(r.worked), "7h 0m");
    assert_eq!(format_duration(r.residual), "-0h 42m");
}

#[test]
fn test_exit_not_after_entry_is_invalid_order() {
    let calc = ShiftCalculator::new(STANDARD_SHIFT);

    for (entry, exit) in [("09:00", "09:00"), ("17:00", "09:00"), ("00:01", "00:00")] {
        let err = calc.compute(entry, exit).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidOrder { .. }),
            "{entry}-{exit}: expected InvalidOrder, got {err:?}"
        );
    }
}

#[test]
fn test_malformed_times_are_invalid_format() {
    let calc = ShiftCalculator::new(STANDARD_SHIFT);

    for bad in ["9:00", "25:00", "09:60", "ab:cd", "", "0900", "09:00:00", "09.00"] {
        let err = calc.compute(bad, "18:00").unwrap_err();
        assert!(
            matches!(err, AppError::InvalidFormat(_)),
            "{bad:?}: expected InvalidFormat, got {err:?}"
        );
        assert!(err.is_validation());
    }

    // exit is validated too
    assert!(matches!(
        calc.compute("09:00", "5pm"),
        Err(AppError::InvalidFormat(_))
    ));
}

#[test]
fn test_times_are_trimmed() {
    let calc = ShiftCalculator::new(STANDARD_SHIFT);
    let r = calc.compute(" 08:30 ", "17:00\n").expect("compute");
    assert_eq!(r.worked, 510);
    assert_eq!(r.residual, 48);
}

#[test]
fn test_worked_matches_wall_clock_difference() {
    let calc = ShiftCalculator::new(STANDARD_SHIFT);

    let r = calc.compute("00:00", "23:59").expect("compute");
    assert_eq!(r.worked, 23 * 60 + 59);
    assert_eq!(r.residual, 23 * 60 + 59 - STANDARD_SHIFT);

    let r = calc.compute("12:59", "13:00").expect("compute");
    assert_eq!(r.worked, 1);
    assert_eq!(format_duration(r.residual), "-7h 41m");
}

#[test]
fn test_formatted_durations_parse_back_exactly() {
    for mins in -1500..=1500 {
        let text = format_duration(mins);
        assert_eq!(parse_duration(&text).expect(&text), mins, "{text}");
    }
}

#[test]
fn test_parse_duration_accepts_config_forms() {
    assert_eq!(parse_duration("7h 42m").unwrap(), 462);
    assert_eq!(parse_duration("7h42m").unwrap(), 462);
    assert_eq!(parse_duration("8h").unwrap(), 480);
    assert_eq!(parse_duration("-0h 24m").unwrap(), -24);
    assert_eq!(parse_duration("  -1h 5m ").unwrap(), -65);
}

#[test]
fn test_parse_duration_rejects_garbage() {
    for bad in ["", "abc", "7:42", "h m", "7h 42", "42m", "+1h 0m", "1h -5m"] {
        assert!(
            matches!(parse_duration(bad), Err(AppError::InvalidFormat(_))),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_parse_duration_rejects_out_of_range_hours() {
    for huge in [
        "200000000000000000h 0m",
        "-200000000000000000h 0m",
        "153722867280912930h 59m",
        "99999999999999999999h",
    ] {
        assert!(
            matches!(parse_duration(huge), Err(AppError::InvalidFormat(_))),
            "{huge:?} should be rejected"
        );
    }
}
