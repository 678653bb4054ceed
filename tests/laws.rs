use outcomes::{Either, Nullable, Outcome};
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = outcomes::Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(outcomes::Result::success),
        "[a-z]{1,8}".prop_map(outcomes::Result::failure),
    ]
}

fn half(x: i32) -> outcomes::Result<i32, String> {
    if x % 2 == 0 {
        outcomes::Result::success(x / 2)
    } else {
        outcomes::Result::failure(format!("{} is odd", x))
    }
}

fn positive(x: i32) -> outcomes::Result<i32, String> {
    if x > 0 {
        outcomes::Result::success(x)
    } else {
        outcomes::Result::failure(format!("{} is not positive", x))
    }
}

fn shout(e: String) -> outcomes::Result<i32, usize> {
    if e.len() % 2 == 0 {
        outcomes::Result::success(e.len() as i32)
    } else {
        outcomes::Result::failure(e.len())
    }
}

proptest! {
    #[test]
    fn success_holds_data(d in any::<i32>()) {
        let r: outcomes::Result<i32, String> = outcomes::Result::success(d);
        prop_assert!(r.is_success());
        prop_assert!(!r.is_failure());
        prop_assert_eq!(r.data(), Some(&d));
    }

    #[test]
    fn failure_holds_error(e in "[a-z]{1,8}") {
        let r: outcomes::Result<i32, String> = outcomes::Result::failure(e.clone());
        prop_assert!(r.is_failure());
        prop_assert_eq!(r.error(), Some(&e));
    }

    #[test]
    fn map_identity(r in outcome()) {
        prop_assert_eq!(r.clone().map(|d| d), r);
    }

    #[test]
    fn map_on_failure_never_calls_mapper(e in "[a-z]{1,8}") {
        let mapped = outcomes::Result::<i32, String>::failure(e.clone()).map(|_| -> i32 { unreachable!() });
        prop_assert_eq!(mapped, outcomes::Result::Failure(e));
    }

    #[test]
    fn flat_map_is_compose_with_failure(r in outcome()) {
        prop_assert_eq!(r.clone().flat_map(half), r.compose(half, outcomes::Result::failure));
    }

    #[test]
    fn recover_is_compose_with_success(r in outcome()) {
        prop_assert_eq!(r.clone().recover(shout), r.compose(outcomes::Result::success, shout));
    }

    #[test]
    fn flat_map_is_associative(r in outcome()) {
        let left = r.clone().flat_map(half).flat_map(positive);
        let right = r.flat_map(|x| half(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn success_is_left_identity_of_flat_map(d in any::<i32>()) {
        prop_assert_eq!(outcomes::Result::success(d).flat_map(half), half(d));
    }

    #[test]
    fn otherwise_always_succeeds(r in outcome()) {
        let recovered = r.clone().otherwise(|e| e.len() as i32);
        prop_assert!(recovered.is_success());
        if r.is_success() {
            prop_assert_eq!(recovered, r);
        }
    }

    #[test]
    fn or_else_matches_std(r in outcome(), fallback in any::<i32>()) {
        let std_result: std::result::Result<i32, String> = r.clone().into();
        prop_assert_eq!(r.or_else(fallback), std_result.unwrap_or(fallback));
    }

    #[test]
    fn swap_twice_is_identity(v in any::<i32>(), left in any::<bool>()) {
        let either: Either<i32, i32> = if left { Either::left(v) } else { Either::right(v) };
        prop_assert_eq!(either.swap().swap(), either);
        prop_assert_eq!(either.swap().is_left(), either.is_right());
    }

    #[test]
    fn swap_moves_payload(v in any::<i64>()) {
        prop_assert_eq!(Either::<i64, ()>::left(v).swap().into_right(), Some(v));
        prop_assert_eq!(Either::<(), i64>::right(v).swap().into_left(), Some(v));
    }

    #[test]
    fn nullable_matches_option(v in proptest::option::of(any::<i32>())) {
        let nullable = Nullable::from(v);
        prop_assert_eq!(nullable.is_null(), v.is_none());
        prop_assert_eq!(nullable.clone().map(|x| x.wrapping_add(1)).into_option(), v.map(|x| x.wrapping_add(1)));
        prop_assert_eq!(nullable.clone().filter(|x| x % 3 == 0).into_option(), v.filter(|x| x % 3 == 0));
        prop_assert_eq!(nullable.stream().count(), usize::from(v.is_some()));
        prop_assert_eq!(nullable, Nullable::from(v));
    }
}
