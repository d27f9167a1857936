//! Pluggable format rules for string value objects.
//!
//! Every value object checks its input against exactly one [`FormatRule`].
//! The default is a placeholder pattern; real deployments swap it per type
//! through [`FormatRules`] or [`crate::config::ValidationConfig`].

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

/// Placeholder pattern applied when no rule is configured:
/// exactly 32 lowercase ASCII letters or digits.
pub const PLACEHOLDER_PATTERN: &str = "^[a-z0-9]{32}$";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("Invalid placeholder regex pattern"));

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single format check applied to a present, non-blank input.
///
/// # Examples
///
/// ```rust
/// use stella_domain::validation::FormatRule;
///
/// let placeholder = FormatRule::placeholder();
/// assert!(placeholder.is_satisfied_by(&"a".repeat(32)));
/// assert!(!placeholder.is_satisfied_by("short"));
///
/// let digits = FormatRule::pattern(r"^\d{7}$").unwrap();
/// assert!(digits.is_satisfied_by("1500001"));
///
/// let short = FormatRule::predicate("at most 8 chars", |value| value.chars().count() <= 8);
/// assert!(short.is_satisfied_by("Shibuya"));
/// ```
#[derive(Clone)]
pub enum FormatRule {
    /// The whole input must match the regular expression.
    Pattern {
        /// The pattern as written.
        source: String,
        /// `source` compiled with anchors around it.
        regex: Regex,
    },
    /// The input must satisfy an arbitrary predicate.
    Predicate {
        /// Human-readable description, used in logs.
        description: String,
        /// The check itself.
        check: Predicate,
    },
}

impl FormatRule {
    /// Returns the placeholder rule (`^[a-z0-9]{32}$`).
    #[must_use]
    pub fn placeholder() -> Self {
        Self::Pattern {
            source: PLACEHOLDER_PATTERN.to_string(),
            regex: PLACEHOLDER_REGEX.clone(),
        }
    }

    /// Compiles a regular expression into a rule.
    ///
    /// The rule is satisfied only when the pattern matches the entire input,
    /// whether or not `pattern` carries its own `^`/`$` anchors.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self::Pattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Wraps a predicate into a rule.
    pub fn predicate<F>(description: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate {
            description: description.into(),
            check: Arc::new(check),
        }
    }

    /// Returns true if `value` satisfies this rule.
    #[must_use]
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Self::Pattern { regex, .. } => regex.is_match(value),
            Self::Predicate { check, .. } => check(value),
        }
    }

    /// Describes the rule: the pattern source or the predicate description.
    #[must_use]
    pub fn describe(&self) -> &str {
        match self {
            Self::Pattern { source, .. } => source,
            Self::Predicate { description, .. } => description,
        }
    }
}

impl Default for FormatRule {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Debug for FormatRule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern { source, .. } => formatter.debug_tuple("Pattern").field(source).finish(),
            Self::Predicate { description, .. } => formatter
                .debug_struct("Predicate")
                .field("description", description)
                .finish_non_exhaustive(),
        }
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.describe())
    }
}

// =============================================================================
// FormatRules
// =============================================================================

/// One [`FormatRule`] per value-object type.
///
/// `Default` assigns the placeholder rule to every type.
///
/// # Examples
///
/// ```rust
/// use stella_domain::validation::{FormatRule, FormatRules};
///
/// let rules = FormatRules::default()
///     .with_store_name(FormatRule::predicate("non-empty", |value| !value.is_empty()));
/// assert!(rules.store_name().is_satisfied_by("Cafe Stella"));
/// assert!(!rules.store_id().is_satisfied_by("Cafe Stella"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormatRules {
    store_id: FormatRule,
    store_name: FormatRule,
    store_address: FormatRule,
    consumer_id: FormatRule,
}

impl FormatRules {
    /// Creates a rule set from one rule per type.
    #[must_use]
    pub const fn new(
        store_id: FormatRule,
        store_name: FormatRule,
        store_address: FormatRule,
        consumer_id: FormatRule,
    ) -> Self {
        Self {
            store_id,
            store_name,
            store_address,
            consumer_id,
        }
    }

    /// Replaces the `StoreId` rule.
    #[must_use]
    pub fn with_store_id(mut self, rule: FormatRule) -> Self {
        self.store_id = rule;
        self
    }

    /// Replaces the `StoreName` rule.
    #[must_use]
    pub fn with_store_name(mut self, rule: FormatRule) -> Self {
        self.store_name = rule;
        self
    }

    /// Replaces the `StoreAddress` rule.
    #[must_use]
    pub fn with_store_address(mut self, rule: FormatRule) -> Self {
        self.store_address = rule;
        self
    }

    /// Replaces the `ConsumerId` rule.
    #[must_use]
    pub fn with_consumer_id(mut self, rule: FormatRule) -> Self {
        self.consumer_id = rule;
        self
    }

    /// Rule applied to `StoreId`.
    #[must_use]
    pub const fn store_id(&self) -> &FormatRule {
        &self.store_id
    }

    /// Rule applied to `StoreName`.
    #[must_use]
    pub const fn store_name(&self) -> &FormatRule {
        &self.store_name
    }

    /// Rule applied to `StoreAddress`.
    #[must_use]
    pub const fn store_address(&self) -> &FormatRule {
        &self.store_address
    }

    /// Rule applied to `ConsumerId`.
    #[must_use]
    pub const fn consumer_id(&self) -> &FormatRule {
        &self.consumer_id
    }
}

static_assertions::assert_impl_all!(FormatRule: Send, Sync, Clone);
static_assertions::assert_impl_all!(FormatRules: Send, Sync, Clone);
