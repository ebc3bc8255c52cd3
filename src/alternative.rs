//! One of two outcomes, conventionally failure on the left and success on the
//! right.
//!
//! Both sides are first class: every right-biased combinator has a left-biased
//! twin, and each one passes the other variant through untouched without
//! calling the supplied function. Chaining them gives railway composition,
//! where the first `Left` rides along to the end of the chain.

use log::debug;

use crate::error::{violated, ContainerError, Result};
use crate::optional::Optional;
use crate::{IntoSeq, Seq};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Alternative<L, R> {
    /// Failure, by convention
    Left(L),
    /// Success, by convention
    Right(R),
}

impl<L, R> Alternative<L, R> {
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Build a `Left` from a value that may be missing.
    ///
    /// Fails with [`ContainerError::InvariantViolation`] on `None`.
    pub fn try_left(value: Option<L>) -> Result<Self> {
        match value {
            Some(l) => Ok(Self::Left(l)),
            None => {
                debug!("Rejected absent payload for Left");
                Err(ContainerError::InvariantViolation { variant: "Left" })
            }
        }
    }

    /// Build a `Right` from a value that may be missing.
    ///
    /// Fails with [`ContainerError::InvariantViolation`] on `None`.
    pub fn try_right(value: Option<R>) -> Result<Self> {
        match value {
            Some(r) => Ok(Self::Right(r)),
            None => {
                debug!("Rejected absent payload for Right");
                Err(ContainerError::InvariantViolation { variant: "Right" })
            }
        }
    }

    /// Like [`Alternative::try_left`], for callers that have already proven
    /// the value is there.
    ///
    /// # Panics
    /// If `value` is `None`.
    #[track_caller]
    pub fn require_left(value: Option<L>) -> Self {
        match Self::try_left(value) {
            Ok(alt) => alt,
            Err(e) => violated(e),
        }
    }

    /// # Panics
    /// If `value` is `None`.
    #[track_caller]
    pub fn require_right(value: Option<R>) -> Self {
        match Self::try_right(value) {
            Ok(alt) => alt,
            Err(e) => violated(e),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrow the held value without giving up the container
    pub fn as_ref(&self) -> Alternative<&L, &R> {
        match self {
            Self::Left(l) => Alternative::Left(l),
            Self::Right(r) => Alternative::Right(r),
        }
    }

    pub fn map_right<R2>(self, f: impl FnOnce(R) -> R2) -> Alternative<L, R2> {
        match self {
            Self::Left(l) => Alternative::Left(l),
            Self::Right(r) => Alternative::Right(f(r)),
        }
    }

    /// Same as [`Alternative::map_right`]
    pub fn map<R2>(self, f: impl FnOnce(R) -> R2) -> Alternative<L, R2> {
        self.map_right(f)
    }

    pub fn map_left<L2>(self, f: impl FnOnce(L) -> L2) -> Alternative<L2, R> {
        match self {
            Self::Left(l) => Alternative::Left(f(l)),
            Self::Right(r) => Alternative::Right(r),
        }
    }

    /// Continue the chain with `f` on success; a `Left` is passed on as is.
    pub fn flat_map_right<R2>(
        self,
        f: impl FnOnce(R) -> Alternative<L, R2>,
    ) -> Alternative<L, R2> {
        match self {
            Self::Left(l) => Alternative::Left(l),
            Self::Right(r) => f(r),
        }
    }

    /// Recover from (or rewrite) a failure with `f`; a `Right` is passed on
    /// as is.
    pub fn flat_map_left<L2>(
        self,
        f: impl FnOnce(L) -> Alternative<L2, R>,
    ) -> Alternative<L2, R> {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => Alternative::Right(r),
        }
    }

    /// Reduce to a single value. Exactly one of the two functions runs.
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(r) => r,
        }
    }

    pub fn to_optional(self) -> Optional<R> {
        match self {
            Self::Left(_) => Optional::Empty,
            Self::Right(r) => Optional::Present(r),
        }
    }

    pub fn to_option(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    pub fn into_result(self) -> std::result::Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }

    /// A view yielding the `Right` value, or nothing for a `Left`.
    pub fn to_sequence(&self) -> Seq<'_, R> {
        self.as_ref().to_option().into_iter()
    }

    pub fn into_sequence(self) -> IntoSeq<R> {
        self.to_option().into_iter()
    }
}

impl<L, R> From<std::result::Result<R, L>> for Alternative<L, R> {
    fn from(res: std::result::Result<R, L>) -> Self {
        match res {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

impl<L, R> From<Alternative<L, R>> for std::result::Result<R, L> {
    fn from(alt: Alternative<L, R>) -> Self {
        alt.into_result()
    }
}

impl<L, R> IntoIterator for Alternative<L, R> {
    type Item = R;
    type IntoIter = IntoSeq<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_sequence()
    }
}

impl<'a, L, R> IntoIterator for &'a Alternative<L, R> {
    type Item = &'a R;
    type IntoIter = Seq<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_sequence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    type Alt = Alternative<String, i32>;

    fn err(s: &str) -> Alt {
        Alternative::left(s.to_string())
    }

    #[test]
    fn fold_returns_held_value() {
        assert_eq!(err("Error").fold(|l| l, |r| r.to_string()), "Error");
        assert_eq!(Alt::right(10).fold(|l| l, |r| r.to_string()), "10");
    }

    #[test]
    fn fold_picks_exactly_one_branch() {
        assert_eq!(err("E").fold(|_| 1, |_| 2), 1);
        assert_eq!(Alt::right(10).fold(|_| 1, |_| 2), 2);

        let calls = Cell::new(0);
        let out = Alt::right(3).fold(
            |_| {
                calls.set(calls.get() + 1);
                "left"
            },
            |_| {
                calls.set(calls.get() + 1);
                "right"
            },
        );
        assert_eq!(out, "right");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn map_right_doubles() {
        assert_eq!(Alt::right(5).map_right(|x| x * 2).get_or_else(0), 10);
        assert_eq!(Alt::right(5).map(|x| x * 2), Alt::right(10));
    }

    #[test]
    fn map_right_skips_left() {
        let called = Cell::new(false);
        let out = err("E").map_right(|x| {
            called.set(true);
            x * 2
        });

        assert_eq!(out.fold(|l| l, |r| r.to_string()), "E");
        assert!(!called.get());
    }

    #[test]
    fn map_left_rewrites_only_failures() {
        let out = err("Error").map_left(|l| l + " Modified");
        assert_eq!(out, err("Error Modified"));

        let called = Cell::new(false);
        let out = Alt::right(10).map_left(|l| {
            called.set(true);
            l.len()
        });
        assert_eq!(out, Alternative::right(10));
        assert!(!called.get());
    }

    #[test]
    fn flat_map_right() {
        let half = |x: i32| -> Alt {
            if x % 2 == 0 {
                Alternative::right(x / 2)
            } else {
                Alternative::left(format!("{} is odd", x))
            }
        };

        assert_eq!(Alt::right(8).flat_map_right(half), Alt::right(4));
        assert_eq!(
            Alt::right(8)
                .flat_map_right(half)
                .flat_map_right(half)
                .flat_map_right(half)
                .flat_map_right(half),
            err("1 is odd")
        );
        assert_eq!(err("Error").flat_map_right(half), err("Error"));
    }

    #[test]
    fn flat_map_left() {
        let recover = |l: String| -> Alternative<usize, i32> {
            if l.is_empty() {
                Alternative::right(0)
            } else {
                Alternative::left(l.len())
            }
        };

        assert_eq!(err("Error").flat_map_left(recover), Alternative::left(5));
        assert_eq!(err("").flat_map_left(recover), Alternative::right(0));
        assert_eq!(Alt::right(10).flat_map_left(recover), Alternative::right(10));
    }

    #[test]
    fn get_or_else() {
        assert_eq!(err("Error").get_or_else(0), 0);
        assert_eq!(Alt::right(10).get_or_else(0), 10);
    }

    #[test]
    fn introspection() {
        let left = err("Error");
        assert!(left.is_left());
        assert!(!left.is_right());

        let right = Alt::right(10);
        assert!(right.is_right());
        assert!(!right.is_left());
    }

    #[test]
    fn exhaustive_match() {
        match Alt::right(10) {
            Alternative::Left(_) => panic!("expected Right"),
            Alternative::Right(v) => assert_eq!(v, 10),
        }

        match err("Error") {
            Alternative::Left(v) => assert_eq!(v, "Error"),
            Alternative::Right(_) => panic!("expected Left"),
        }
    }

    #[test]
    fn as_ref_keeps_original() {
        let alt = err("abc");
        assert_eq!(alt.as_ref().map_left(|l| l.len()).fold(|n| n, |_| 0), 3);
        assert_eq!(alt, err("abc"));
    }

    #[test]
    fn to_optional() {
        assert_eq!(Alt::right(10).to_optional(), Optional::present(10));
        assert_eq!(err("Error").to_optional(), Optional::empty());
        assert_eq!(Alt::right(10).to_option(), Some(10));
        assert_eq!(err("Error").to_option(), None);
    }

    #[test]
    fn to_sequence() {
        let right = Alt::right(10);
        assert_eq!(right.to_sequence().count(), 1);
        assert_eq!(right.to_sequence().next(), Some(&10));
        assert_eq!(err("Error").to_sequence().count(), 0);

        let total: i32 = vec![Alt::right(1), err("x"), Alt::right(2)]
            .into_iter()
            .flatten()
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn result_bridge() {
        let ok: std::result::Result<i32, String> = Ok(1);
        assert_eq!(Alt::from(ok), Alt::right(1));

        let back: std::result::Result<i32, String> = err("no").into();
        assert_eq!(back, Err("no".to_string()));
    }

    #[test]
    fn absent_payloads_are_rejected() {
        assert_eq!(
            Alt::try_left(None),
            Err(ContainerError::InvariantViolation { variant: "Left" })
        );
        assert_eq!(
            Alt::try_right(None),
            Err(ContainerError::InvariantViolation { variant: "Right" })
        );
        assert_eq!(Alt::try_right(Some(1)), Ok(Alt::right(1)));
        assert_eq!(Alt::require_left(Some("E".into())), err("E"));
    }

    #[test]
    #[should_panic(expected = "cannot construct `Left` from an absent value")]
    fn require_left_panics_on_none() {
        Alt::require_left(None);
    }

    #[test]
    #[should_panic(expected = "cannot construct `Right` from an absent value")]
    fn require_right_panics_on_none() {
        Alt::require_right(None);
    }

    fn any_alt() -> impl Strategy<Value = Alternative<String, i32>> {
        prop_oneof![
            ".*".prop_map(Alternative::<String, i32>::left),
            any::<i32>().prop_map(Alternative::<String, i32>::right),
        ]
    }

    proptest! {
        #[test]
        fn map_right_identity(a in any_alt()) {
            prop_assert_eq!(a.clone().map_right(|x| x), a);
        }

        #[test]
        fn map_right_composes(a in any_alt()) {
            let f = |x: i32| x.wrapping_mul(3);
            let g = |x: i32| x.wrapping_sub(7);
            prop_assert_eq!(a.clone().map_right(f).map_right(g), a.map_right(|x| g(f(x))));
        }

        #[test]
        fn map_left_laws(a in any_alt()) {
            prop_assert_eq!(a.clone().map_left(|x| x), a.clone());

            let f = |s: String| s.len();
            let g = |n: usize| n + 1;
            prop_assert_eq!(a.clone().map_left(f).map_left(g), a.map_left(|s| g(f(s))));
        }

        #[test]
        fn left_short_circuits(l in ".*") {
            let alt: Alt = Alternative::left(l.clone());
            prop_assert_eq!(alt.clone().map_right(|_| -> i32 { panic!("mapper ran") }), alt.clone());
            prop_assert_eq!(
                alt.clone().flat_map_right(|_| -> Alt { panic!("mapper ran") }),
                alt
            );
        }

        #[test]
        fn right_short_circuits(r in any::<i32>()) {
            let alt: Alt = Alternative::right(r);
            prop_assert_eq!(alt.clone().map_left(|_| -> u8 { panic!("mapper ran") }), Alternative::right(r));
            prop_assert_eq!(
                alt.clone().flat_map_left(|_| -> Alternative<u8, i32> { panic!("mapper ran") }),
                Alternative::right(r)
            );
        }

        #[test]
        fn flat_map_right_left_identity(r in any::<i32>()) {
            let f = |x: i32| -> Alt {
                if x < 0 { Alternative::left(x.to_string()) } else { Alternative::right(x / 2) }
            };
            prop_assert_eq!(Alt::right(r).flat_map_right(f), f(r));
        }

        #[test]
        fn bridges_agree(a in any_alt()) {
            prop_assert_eq!(a.is_right(), a.to_sequence().len() == 1);
            prop_assert_eq!(a.clone().to_optional().into_option(), a.clone().to_option());
            prop_assert_eq!(Alt::from(a.clone().into_result()), a);
        }
    }
}
