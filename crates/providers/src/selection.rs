//! Choosing between explicitly supplied credentials and a fallback source

use crate::fixed::StaticSource;
use crate::source::CredentialSource;
use async_trait::async_trait;
use credkit_core::{is_usable, Credentials, Error, Result};

/// The outcome of [`select`]: a fixed pair or the untouched fallback
#[derive(Debug)]
pub enum Selection<F> {
    /// Both explicit values were usable and wrapped verbatim
    Fixed(StaticSource),
    /// The fallback source, exactly as it was passed in
    Fallback(F),
}

impl<F> Selection<F> {
    /// Whether the explicit pair was chosen
    pub fn is_fixed(&self) -> bool {
        matches!(self, Selection::Fixed(_))
    }

    /// Whether the fallback was chosen
    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback(_))
    }

    /// Borrow the fallback when it was chosen
    pub fn fallback(&self) -> Option<&F> {
        match self {
            Selection::Fallback(fallback) => Some(fallback),
            Selection::Fixed(_) => None,
        }
    }

    /// Take the fallback back when it was chosen
    pub fn into_fallback(self) -> Option<F> {
        match self {
            Selection::Fallback(fallback) => Some(fallback),
            Selection::Fixed(_) => None,
        }
    }
}

#[async_trait]
impl<F: CredentialSource> CredentialSource for Selection<F> {
    async fn resolve(&self) -> Result<Credentials> {
        match self {
            Selection::Fixed(source) => source.resolve().await,
            Selection::Fallback(source) => source.resolve().await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Selection::Fixed(source) => source.name(),
            Selection::Fallback(source) => source.name(),
        }
    }
}

/// Pick explicitly supplied credentials or defer to `fallback`.
///
/// Both accessors are evaluated exactly once, identifier first. If either
/// accessor fails, its error is returned as is and the fallback is dropped
/// unused (a failing identifier accessor means the secret accessor never
/// runs).
///
/// When both values are present and non-blank after trimming, the
/// untrimmed values are wrapped in a [`StaticSource`]. Otherwise, including
/// when only one of the two is usable, the fallback is returned unchanged
/// and unresolved; a pair is never assembled from one explicit field and
/// one discovered field. Falling back is not an error, so a fallback that
/// cannot resolve only fails later, when its `resolve` is called.
pub fn select<I, S, F, E>(
    identifier: I,
    secret: S,
    fallback: F,
) -> std::result::Result<Selection<F>, E>
where
    I: FnOnce() -> std::result::Result<Option<String>, E>,
    S: FnOnce() -> std::result::Result<Option<String>, E>,
    F: CredentialSource,
    E: From<Error>,
{
    select_or_else(identifier, secret, || Ok(fallback))
}

/// [`select`] with a fallback that is only built when it is needed.
///
/// `build_fallback` runs after both accessors, and only when the explicit
/// pair is unusable. A usable pair therefore never depends on whether the
/// fallback could have been configured.
pub fn select_or_else<I, S, B, F, E>(
    identifier: I,
    secret: S,
    build_fallback: B,
) -> std::result::Result<Selection<F>, E>
where
    I: FnOnce() -> std::result::Result<Option<String>, E>,
    S: FnOnce() -> std::result::Result<Option<String>, E>,
    B: FnOnce() -> std::result::Result<F, E>,
    F: CredentialSource,
    E: From<Error>,
{
    let identifier = identifier()?;
    let secret = secret()?;

    let identifier_usable = is_usable(identifier.as_deref());
    let secret_usable = is_usable(secret.as_deref());

    match (identifier, secret) {
        (Some(identifier), Some(secret)) if identifier_usable && secret_usable => {
            let source = StaticSource::new(identifier, secret)?;
            tracing::debug!(
                identifier = %source.credentials().masked_identifier(),
                "Using explicitly supplied credentials"
            );
            Ok(Selection::Fixed(source))
        }
        _ => {
            let fallback = build_fallback()?;
            tracing::debug!(
                identifier_usable,
                secret_usable,
                fallback = %fallback.name(),
                "Explicit credentials unusable, deferring to fallback source"
            );
            Ok(Selection::Fallback(fallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor;
    use std::cell::Cell;

    fn fallback() -> StaticSource {
        StaticSource::new("FALLBACK", "fallback-secret").unwrap()
    }

    #[test]
    fn test_both_usable_selects_fixed() {
        let selection = select(
            accessor::value(Some("AKIA123")),
            accessor::value(Some("secret456")),
            fallback(),
        )
        .unwrap();

        match selection {
            Selection::Fixed(source) => {
                assert_eq!(source.credentials().identifier(), "AKIA123");
                assert_eq!(source.credentials().secret(), "secret456");
            }
            Selection::Fallback(_) => panic!("expected the explicit pair"),
        }
    }

    #[test]
    fn test_partial_values_fall_back() {
        let selection = select(accessor::absent(), accessor::value(Some("secret456")), fallback())
            .unwrap();
        assert_eq!(selection.fallback(), Some(&fallback()));

        let selection = select(accessor::value(Some("AKIA123")), accessor::absent(), fallback())
            .unwrap();
        assert!(selection.is_fallback());
    }

    #[test]
    fn test_raw_values_are_stored_untrimmed() {
        let selection = select(
            accessor::value(Some("  AKIA123\t")),
            accessor::value(Some("secret456\n")),
            fallback(),
        )
        .unwrap();

        let Selection::Fixed(source) = selection else {
            panic!("expected the explicit pair");
        };
        assert_eq!(source.credentials().identifier(), "  AKIA123\t");
        assert_eq!(source.credentials().secret(), "secret456\n");
    }

    #[test]
    fn test_accessor_error_propagates_and_stops_evaluation() {
        let secret_calls = Cell::new(0);

        let result = select(
            || Err(Error::environment("AWS_ACCESS_KEY_ID", "store offline")),
            || {
                secret_calls.set(secret_calls.get() + 1);
                Ok(Some("secret456".to_string()))
            },
            fallback(),
        );

        assert!(matches!(result, Err(Error::Environment { .. })));
        assert_eq!(secret_calls.get(), 0);
    }

    #[test]
    fn test_name_follows_selected_source() {
        let fixed = select(
            accessor::value(Some("AKIA123")),
            accessor::value(Some("secret456")),
            crate::ChainSource::new(),
        )
        .unwrap();
        assert_eq!(fixed.name(), "static");

        let fell_back = select(accessor::absent(), accessor::absent(), crate::ChainSource::new())
            .unwrap();
        assert_eq!(fell_back.name(), "chain");
        assert!(fell_back.into_fallback().is_some());
    }

    #[test]
    fn test_fallback_builder_skipped_for_usable_pair() {
        let built = Cell::new(0);

        let selection = select_or_else(
            accessor::value(Some("AKIA123")),
            accessor::value(Some("secret456")),
            || -> Result<StaticSource> {
                built.set(built.get() + 1);
                Err(Error::configuration("fallback cannot be configured"))
            },
        )
        .unwrap();

        assert!(selection.is_fixed());
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn test_fallback_builder_runs_after_accessors() {
        let order = Cell::new(Vec::new());
        let push = |step: &'static str| {
            let mut steps = order.take();
            steps.push(step);
            order.set(steps);
        };

        let selection = select_or_else(
            || {
                push("identifier");
                Ok::<_, Error>(None)
            },
            || {
                push("secret");
                Ok(Some("secret456".to_string()))
            },
            || {
                push("fallback");
                Ok(fallback())
            },
        )
        .unwrap();

        assert!(selection.is_fallback());
        assert_eq!(order.take(), vec!["identifier", "secret", "fallback"]);
    }

    #[test]
    fn test_fallback_builder_error_propagates() {
        let result = select_or_else(
            accessor::absent(),
            accessor::absent(),
            || -> Result<StaticSource> { Err(Error::configuration("no settings")) },
        );

        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
