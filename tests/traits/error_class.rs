use crate::common::{checked_div, Boom, DivideByZero};
use outcome_rail::traits::{narrow, of_type, when, Always, ErrorClass};
use outcome_rail::{BoxedError, Outcome};
use std::error::Error;

#[test]
fn of_type_downcasts_send_sync_boxes() {
    let boxed: BoxedError = Box::new(DivideByZero);
    assert_eq!(of_type::<DivideByZero>().catch(boxed).ok(), Some(DivideByZero));
}

#[test]
fn of_type_downcasts_plain_boxes() {
    let boxed: Box<dyn Error> = Box::new(Boom("plain"));
    assert_eq!(of_type::<Boom>().catch(boxed).ok(), Some(Boom("plain")));
}

#[test]
fn of_type_hands_back_original_box() {
    let boxed: BoxedError = Box::new(Boom("kept"));
    let rejected = of_type::<DivideByZero>().catch(boxed).unwrap_err();
    assert_eq!(rejected.downcast_ref::<Boom>(), Some(&Boom("kept")));
}

#[test]
fn of_type_rejects_other_concrete_types() {
    let outcome = Outcome::of(|| checked_div(1, 0), of_type::<Boom>());
    assert!(outcome.is_err());
}

#[test]
fn when_catches_on_predicate() {
    let soft = when(|e: &Boom| e.0.starts_with("soft"));
    assert_eq!(soft.catch(Boom("soft limit")), Ok(Boom("soft limit")));

    let soft = when(|e: &Boom| e.0.starts_with("soft"));
    assert_eq!(soft.catch(Boom("hard limit")), Err(Boom("hard limit")));
}

#[test]
fn narrow_converts_caught_failures() {
    let class = narrow(|e: BoxedError| e.downcast::<DivideByZero>().map(|e| *e));
    let outcome = Outcome::of(|| checked_div(4, 0), class).unwrap();
    assert_eq!(outcome, Outcome::Failed(DivideByZero));
}

#[test]
fn always_catches_everything() {
    assert_eq!(Always.catch(Boom("any")), Ok(Boom("any")));

    let outcome = Outcome::of(|| Err::<i32, _>(Boom("any")), Always).unwrap();
    assert_eq!(outcome.into_error(), Some(Boom("any")));
}

#[test]
#[cfg(feature = "std")]
fn io_kind_filters_by_error_kind() {
    use outcome_rail::traits::io_kind;
    use std::io;

    let read = || -> io::Result<String> { Err(io::Error::from(io::ErrorKind::NotFound)) };
    let missing = Outcome::of(read, io_kind(io::ErrorKind::NotFound)).unwrap();
    assert!(missing.is_failure());

    let denied = || -> io::Result<String> { Err(io::Error::from(io::ErrorKind::PermissionDenied)) };
    let escaped = Outcome::of(denied, io_kind(io::ErrorKind::NotFound)).unwrap_err();
    assert_eq!(escaped.kind(), io::ErrorKind::PermissionDenied);
}
