use std::fmt::{self, Debug};

use log::{debug, warn};

use crate::err::{ConfigError, LawViolation};

/// A type that is its own monoid: `empty()` is the identity and `concat` is
/// associative with `empty()` as a unit on both sides.
pub trait Monoid: Sized {
    fn empty() -> Self;
    fn concat(self, other: Self) -> Self;
}

type AppendFn<T> = Box<dyn Fn(T, T) -> T>;

/// The two primitives every reduction rule is built from: an identity value
/// and an associative `append`.
///
/// The laws are a caller contract. Nothing here checks them during a fold;
/// [`MonoidAdapter::check_laws`] is available for callers who want to test a
/// monoid on sample values up front.
pub struct MonoidAdapter<T> {
    identity: T,
    append: AppendFn<T>,
}

impl<T: Clone> MonoidAdapter<T> {
    pub fn new<F>(identity: T, append: F) -> Self
    where
        F: Fn(T, T) -> T + 'static,
    {
        Self {
            identity,
            append: Box::new(append),
        }
    }

    pub fn builder() -> MonoidBuilder<T> {
        MonoidBuilder::default()
    }

    #[inline]
    pub fn identity(&self) -> T {
        self.identity.clone()
    }

    #[inline]
    pub fn append(&self, a: T, b: T) -> T {
        (self.append)(a, b)
    }

    /// Left fold starting from the identity.
    #[inline]
    pub fn fold<I>(&self, items: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        self.fold_from(self.identity(), items)
    }

    /// `append(append(append(seed, x0), x1), ...)`. An empty sequence
    /// returns `seed` untouched.
    pub fn fold_from<I>(&self, seed: T, items: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().fold(seed, |acc, x| self.append(acc, x))
    }

    /// Folds a sparse sequence. Holes are dropped before folding, so they
    /// contribute nothing rather than an extra identity operand.
    pub fn fold_present<I>(&self, items: I) -> T
    where
        I: IntoIterator<Item = Option<T>>,
    {
        self.fold(items.into_iter().flatten())
    }

    #[inline]
    pub fn or_identity(&self, value: Option<T>) -> T {
        value.unwrap_or_else(|| self.identity())
    }
}

impl<M> MonoidAdapter<M>
where
    M: Monoid + Clone + 'static,
{
    pub fn of_monoid() -> Self {
        Self::new(M::empty(), M::concat)
    }
}

impl<T> MonoidAdapter<T>
where
    T: Clone + PartialEq + Debug,
{
    /// Checks both identity laws on every sample and associativity on every
    /// ordered triple of samples. Returns the first violation found.
    pub fn check_laws(&self, samples: &[T]) -> Result<(), LawViolation> {
        for x in samples {
            if self.append(self.identity(), x.clone()) != *x {
                return violation(LawViolation::LeftIdentity {
                    value: format!("{x:?}"),
                });
            }
            if self.append(x.clone(), self.identity()) != *x {
                return violation(LawViolation::RightIdentity {
                    value: format!("{x:?}"),
                });
            }
        }

        for a in samples {
            for b in samples {
                for c in samples {
                    let lhs = self.append(self.append(a.clone(), b.clone()), c.clone());
                    let rhs = self.append(a.clone(), self.append(b.clone(), c.clone()));
                    if lhs != rhs {
                        return violation(LawViolation::Associativity {
                            a: format!("{a:?}"),
                            b: format!("{b:?}"),
                            c: format!("{c:?}"),
                        });
                    }
                }
            }
        }

        debug!("monoid laws hold on {} samples", samples.len());
        Ok(())
    }
}

fn violation(err: LawViolation) -> Result<(), LawViolation> {
    warn!("{err}");
    Err(err)
}

impl<T: Debug> Debug for MonoidAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonoidAdapter")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Assembles a monoid from parts that may or may not be present, e.g. when
/// they are picked up from a plugin or a config table. `build` refuses to
/// produce an adapter unless both parts are there.
pub struct MonoidBuilder<T> {
    identity: Option<T>,
    append: Option<AppendFn<T>>,
}

impl<T> Default for MonoidBuilder<T> {
    fn default() -> Self {
        Self {
            identity: None,
            append: None,
        }
    }
}

impl<T: Clone> MonoidBuilder<T> {
    pub fn identity(mut self, identity: T) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn append<F>(mut self, append: F) -> Self
    where
        F: Fn(T, T) -> T + 'static,
    {
        self.append = Some(Box::new(append));
        self
    }

    pub fn build(self) -> Result<MonoidAdapter<T>, ConfigError> {
        match (self.identity, self.append) {
            (Some(identity), Some(append)) => {
                debug!("monoid configured");
                Ok(MonoidAdapter { identity, append })
            }
            (None, None) => Err(ConfigError::Empty),
            (None, Some(_)) => Err(ConfigError::MissingIdentity),
            (Some(_), None) => Err(ConfigError::MissingAppend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Text(String);

    impl Monoid for Text {
        fn empty() -> Self {
            Text(String::new())
        }

        fn concat(self, other: Self) -> Self {
            Text(self.0 + &other.0)
        }
    }

    fn text(s: &str) -> Text {
        Text(s.to_owned())
    }

    fn sum() -> MonoidAdapter<i64> {
        MonoidAdapter::new(0, |a, b| a + b)
    }

    #[test]
    fn fold_keeps_source_order() {
        init();
        let m = MonoidAdapter::<Text>::of_monoid();
        let folded = m.fold(vec![text("a"), text("b"), text("c")]);
        assert_eq!(folded, text("abc"));
    }

    #[test]
    fn fold_of_nothing_is_the_seed() {
        let m = MonoidAdapter::<Text>::of_monoid();
        assert_eq!(m.fold(Vec::new()), Text::empty());
        assert_eq!(m.fold_from(text("seed"), Vec::new()), text("seed"));
    }

    #[test]
    fn fold_from_puts_seed_first() {
        let m = MonoidAdapter::<Text>::of_monoid();
        assert_eq!(m.fold_from(text(">"), vec![text("x"), text("y")]), text(">xy"));
    }

    #[test]
    fn holes_are_dropped_before_folding() {
        let arity = MonoidAdapter::new(Vec::<u8>::new(), |mut a, b| {
            a.extend(b);
            a
        });
        let folded = arity.fold_present(vec![Some(vec![1]), None, Some(vec![2]), None]);
        assert_eq!(folded, vec![1, 2]);
    }

    #[test]
    fn absent_optional_is_identity() {
        let m = sum();
        assert_eq!(m.or_identity(None), 0);
        assert_eq!(m.or_identity(Some(7)), 7);
    }

    #[test]
    fn builder_requires_both_parts() {
        init();
        let empty = MonoidBuilder::<bool>::default().build();
        assert_eq!(empty.unwrap_err(), ConfigError::Empty);

        let no_append = MonoidAdapter::builder().identity(false).build();
        assert_eq!(no_append.unwrap_err(), ConfigError::MissingAppend);

        let no_identity = MonoidAdapter::<bool>::builder().append(|a, b| a || b).build();
        assert_eq!(no_identity.unwrap_err(), ConfigError::MissingIdentity);
    }

    #[test]
    fn builder_produces_working_adapter() -> anyhow::Result<()> {
        let any = MonoidAdapter::builder()
            .identity(false)
            .append(|a, b| a || b)
            .build()?;
        assert!(!any.fold(vec![false, false]));
        assert!(any.fold(vec![false, true, false]));
        Ok(())
    }

    #[test]
    fn lawful_monoids_pass() -> anyhow::Result<()> {
        init();
        sum().check_laws(&[0, 1, -4, 9])?;
        MonoidAdapter::<Text>::of_monoid().check_laws(&[text(""), text("a"), text("bc")])?;
        Ok(())
    }

    #[test]
    fn subtraction_is_not_associative() {
        init();
        let minus = MonoidAdapter::new(0i64, |a, b| a - b);
        let err = minus.check_laws(&[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            LawViolation::LeftIdentity { .. } | LawViolation::Associativity { .. }
        ));
    }

    #[test]
    fn wrong_identity_is_reported() {
        let bad = MonoidAdapter::new(1i64, |a, b| a + b);
        let err = bad.check_laws(&[5]).unwrap_err();
        assert_eq!(
            err,
            LawViolation::LeftIdentity {
                value: "5".to_owned()
            }
        );
    }
}
