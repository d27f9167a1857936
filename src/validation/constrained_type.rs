//! Helper for building constrained string value objects.
//!
//! Each function is generic and can be used with any newtype and any
//! per-type error enum.

use super::{FormatRule, ValidatedNel};

/// The checks every string value object performs, in order.
///
/// The first failing check wins; a single field never reports more than
/// one violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Input absent or blank.
    Required,
    /// Input present but rejected by the format rule. Holds the raw input.
    InvalidFormat(String),
}

/// Checks a raw, possibly absent input against a format rule.
///
/// # Rules
///
/// 1. `None`, empty or whitespace-only input is [`Violation::Required`].
/// 2. Input rejected by `rule` is [`Violation::InvalidFormat`] carrying the
///    input unchanged.
/// 3. Otherwise the input is returned unchanged (no trimming).
///
/// # Errors
///
/// Returns the first [`Violation`] encountered.
///
/// # Examples
///
/// ```
/// use stella_domain::validation::FormatRule;
/// use stella_domain::validation::constrained_type::{check_format, Violation};
///
/// let rule = FormatRule::placeholder();
/// assert_eq!(check_format(None, &rule), Err(Violation::Required));
/// assert_eq!(check_format(Some("  "), &rule), Err(Violation::Required));
/// assert_eq!(
///     check_format(Some("short"), &rule),
///     Err(Violation::InvalidFormat("short".to_string()))
/// );
/// ```
pub fn check_format<'a>(value: Option<&'a str>, rule: &FormatRule) -> Result<&'a str, Violation> {
    match value {
        None => Err(Violation::Required),
        Some(value) if value.trim().is_empty() => Err(Violation::Required),
        Some(value) if !rule.is_satisfied_by(value) => {
            Err(Violation::InvalidFormat(value.to_string()))
        }
        Some(value) => Ok(value),
    }
}

/// Creates a string value object with a format rule.
///
/// # Arguments
///
/// * `field_name` - Field name used in log events
/// * `constructor` - Constructor that takes the accepted string and produces `T`
/// * `into_error` - Maps a [`Violation`] to the type's own error enum
/// * `rule` - Format rule to apply
/// * `value` - Raw, possibly absent input
///
/// # Examples
///
/// ```
/// use stella_domain::validation::FormatRule;
/// use stella_domain::validation::constrained_type::{create_formatted, Violation};
///
/// #[derive(Debug, PartialEq)]
/// struct Code(String);
///
/// let rule = FormatRule::pattern("^C[0-9]+$").unwrap();
/// let created = create_formatted("Code", Code, |violation| violation, &rule, Some("C42"));
/// assert_eq!(created.ok(), Some(Code("C42".to_string())));
/// ```
pub fn create_formatted<T, E, C, M>(
    field_name: &str,
    constructor: C,
    into_error: M,
    rule: &FormatRule,
    value: Option<&str>,
) -> ValidatedNel<E, T>
where
    C: FnOnce(String) -> T,
    M: FnOnce(Violation) -> E,
{
    match check_format(value, rule) {
        Ok(accepted) => {
            tracing::trace!(field = field_name, "value accepted");
            ValidatedNel::valid(constructor(accepted.to_string()))
        }
        Err(violation) => {
            tracing::debug!(
                field = field_name,
                rule = rule.describe(),
                ?violation,
                "value rejected"
            );
            ValidatedNel::invalid_nel(into_error(violation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct TestString(String);

    fn placeholder_value() -> String {
        "abc123".repeat(5) + "xy"
    }

    // =========================================================================
    // check_format Tests
    // =========================================================================

    #[rstest]
    fn check_format_absent_is_required() {
        assert_eq!(
            check_format(None, &FormatRule::placeholder()),
            Err(Violation::Required)
        );
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    #[case("\u{3000}")]
    fn check_format_blank_is_required(#[case] input: &str) {
        assert_eq!(
            check_format(Some(input), &FormatRule::placeholder()),
            Err(Violation::Required)
        );
    }

    #[rstest]
    #[case("short")]
    #[case(" abcdefghijklmnopqrstuvwxyz012345")]
    #[case("ABCDEFGHIJKLMNOPQRSTUVWXYZ012345")]
    fn check_format_mismatch_keeps_raw_input(#[case] input: &str) {
        assert_eq!(
            check_format(Some(input), &FormatRule::placeholder()),
            Err(Violation::InvalidFormat(input.to_string()))
        );
    }

    #[rstest]
    fn check_format_accepts_matching_input_unchanged() {
        let input = placeholder_value();

        assert_eq!(
            check_format(Some(input.as_str()), &FormatRule::placeholder()),
            Ok(input.as_str())
        );
    }

    #[rstest]
    fn check_format_blank_wins_over_format_rule() {
        let accept_all = FormatRule::predicate("anything", |_| true);

        assert_eq!(check_format(Some("   "), &accept_all), Err(Violation::Required));
    }

    // =========================================================================
    // create_formatted Tests
    // =========================================================================

    #[rstest]
    fn create_formatted_valid() {
        let input = placeholder_value();
        let result = create_formatted(
            "Test",
            TestString,
            |violation| violation,
            &FormatRule::placeholder(),
            Some(input.as_str()),
        );

        assert_eq!(result.ok(), Some(TestString(input)));
    }

    #[rstest]
    fn create_formatted_maps_violation_into_error() {
        let result = create_formatted(
            "Test",
            TestString,
            |violation| format!("{violation:?}"),
            &FormatRule::placeholder(),
            Some("short"),
        );

        let errors = result.err().unwrap();
        assert_eq!(errors.into_vec(), vec!["InvalidFormat(\"short\")".to_string()]);
    }
}
