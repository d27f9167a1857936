//! Batch validation of many store inputs.
//!
//! Each input is validated independently, so the batch can run in parallel
//! with the `rayon` feature. Output order always follows input order.

use crate::validation::{FormatRules, NonEmptyVec, ValidatedNel};

use super::{Store, StoreError, UnvalidatedStore};

/// Validation outcome of a single store input.
pub type StoreValidation = ValidatedNel<StoreError, Store>;

/// Validates every input in order.
///
/// # Examples
///
/// ```
/// use stella_domain::domain::store::{UnvalidatedStore, validate_stores};
/// use stella_domain::validation::FormatRules;
///
/// let raw = "a".repeat(32);
/// let inputs = vec![
///     UnvalidatedStore::new(Some(raw.clone()), Some(raw.clone()), Some(raw)),
///     UnvalidatedStore::default(),
/// ];
/// let results = validate_stores(&FormatRules::default(), &inputs);
/// assert!(results[0].is_valid());
/// assert!(results[1].is_invalid());
/// ```
pub fn validate_stores(rules: &FormatRules, inputs: &[UnvalidatedStore]) -> Vec<StoreValidation> {
    let results: Vec<StoreValidation> = inputs
        .iter()
        .map(|input| input.validate_with(rules))
        .collect();
    log_summary(&results);
    results
}

/// Validates every input on the rayon thread pool.
///
/// Returns the same results, in the same order, as [`validate_stores`].
#[cfg(feature = "rayon")]
pub fn validate_stores_par(
    rules: &FormatRules,
    inputs: &[UnvalidatedStore],
) -> Vec<StoreValidation> {
    use rayon::prelude::*;

    let results: Vec<StoreValidation> = inputs
        .par_iter()
        .map(|input| input.validate_with(rules))
        .collect();
    log_summary(&results);
    results
}

/// Splits batch results into accepted stores and the errors of each rejected input.
#[must_use]
pub fn partition_results(
    results: Vec<StoreValidation>,
) -> (Vec<Store>, Vec<NonEmptyVec<StoreError>>) {
    let mut stores = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result.into_result() {
            Ok(store) => stores.push(store),
            Err(errors) => failures.push(errors),
        }
    }
    (stores, failures)
}

fn log_summary(results: &[StoreValidation]) {
    let rejected = results.iter().filter(|result| result.is_invalid()).count();
    tracing::debug!(
        total = results.len(),
        accepted = results.len() - rejected,
        rejected,
        "store batch validated"
    );
}
