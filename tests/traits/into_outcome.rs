use crate::common::Boom;
use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
use outcome_rail::Outcome;

#[test]
fn result_into_outcome_preserves_both_sides() {
    assert_eq!(Ok::<i32, Boom>(1).into_outcome(), Outcome::Succeeded(Some(1)));
    assert_eq!(Err::<i32, Boom>(Boom("x")).into_outcome(), Outcome::Failed(Boom("x")));
}

#[test]
fn option_ok_or_failed_supplies_default_error() {
    assert_eq!(Some(5).ok_or_failed(|| Boom("missing")), Outcome::Succeeded(Some(5)));
    assert_eq!(None::<i32>.ok_or_failed(|| Boom("missing")), Outcome::Failed(Boom("missing")));
}
