//! End-to-end coverage of the `Consume` policy.
//!
//! `Consume` walks the pattern once: a digit or letter that fails its test
//! is discarded together with its pattern position, leaving a gap in the
//! output rather than retrying. Condition placeholders are the documented
//! exception — one with no allow-list left is skipped without spending any
//! input, so later pattern positions still see the same character.

use inputmask::{InvalidInputPolicy, Mask};

fn base_mask() -> Mask {
    Mask::new("LL-DD").with_policy(InvalidInputPolicy::Consume)
}

fn phone_mask() -> Mask {
    Mask::new("+C(DDD)-DDD-DD-DD")
        .with_policy(InvalidInputPolicy::Consume)
        .with_conditions(["7, 8"])
        .with_template("+7(DDD)-DDD-DD-DD")
}

fn condition_mask() -> Mask {
    Mask::new("C-DD")
        .with_policy(InvalidInputPolicy::Consume)
        .with_conditions(["7,8"])
}

#[test]
fn base_expression() {
    let mask = base_mask();
    for (input, expected) in [
        ("aa12", "aa-12"),
        ("1212", "-12"),
        ("12aa", ""),
        ("", ""),
        ("a", "a"),
        ("ab", "ab"),
        ("ab1", "ab-1"),
        ("ab12", "ab-12"),
        ("ab123", "ab-12"),
        ("abcd12", "ab"),
        ("a b 1 2", "a"),
        ("!!ab__12??", ""),
    ] {
        assert_eq!(mask.apply_to(input), expected, "input: {input:?}");
    }
}

#[test]
fn phone_full_formatting() {
    let mask = phone_mask();
    for (input, expected) in [
        ("7011234567", "+7(011)-234-56-7"),
        ("+7(701)-123-45-67", "+7(701)-123-45-67"),
        ("7 01 123 45 67", "+7(01)-12-3-45"),
        ("7(701)1234567", "+7(701)-123-45-67"),
        ("87011234567", "+7(701)-123-45-67"),
        ("77011234567", "+7(701)-123-45-67"),
    ] {
        assert_eq!(mask.apply_to(input), expected, "input: {input:?}");
    }
}

#[test]
fn phone_partial_formatting() {
    let mask = phone_mask();
    for (input, expected) in [
        ("", ""),
        ("7", "+7"),
        ("77", "+7(7"),
        ("7701", "+7(701"),
        ("77011", "+7(701)-1"),
        ("770112", "+7(701)-12"),
        ("7701123", "+7(701)-123"),
        ("77011234", "+7(701)-123-4"),
    ] {
        assert_eq!(mask.apply_to(input), expected, "input: {input:?}");
    }
}

#[test]
fn phone_never_exceeds_limit() {
    let mask = phone_mask();
    let long = "701123456789999999999";
    assert!(mask.apply_to(long).chars().count() <= mask.limit());
}

#[test]
fn phone_masking_is_idempotent() {
    let mask = phone_mask();
    let once = mask.apply_to("7011234567");
    let twice = mask.apply_to(&once);
    assert_eq!(once, twice);
}

#[test]
fn condition_gates_the_first_position() {
    let mask = condition_mask();
    for (input, expected) in [
        ("712", "7-12"),
        ("8 12", "8-12"),
        ("912", "-12"),
        ("7123", "7-12"),
    ] {
        assert_eq!(mask.apply_to(input), expected, "input: {input:?}");
    }
}

#[test]
fn failed_condition_still_spends_one_input_character() {
    // "9" fails the allow-list and is discarded; the dash and digits still
    // format. This is the intended peek-then-discard split: only a missing
    // allow-list leaves the input untouched.
    let mask = condition_mask();
    assert_eq!(mask.apply_to("912"), "-12");
}

#[test]
fn missing_condition_does_not_spend_input() {
    // No allow-list at all: the `C` position is skipped outright and the
    // same character is offered to the positions after it.
    let mask = Mask::new("C-DD").with_policy(InvalidInputPolicy::Consume);
    assert_eq!(mask.apply_to("12"), "-12");
}
