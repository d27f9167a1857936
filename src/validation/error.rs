//! Common error abstraction for domain-object validation.

/// An error produced while validating a domain object.
///
/// Every error must carry a message suitable for showing to an end user.
/// Implementors are usually `thiserror` enums, so the default
/// [`error_message`](ValidationError::error_message) is their `Display`
/// output.
///
/// # Examples
///
/// ```rust
/// use stella_domain::domain::store::StoreIdError;
/// use stella_domain::validation::ValidationError;
///
/// let error = StoreIdError::Required;
/// assert_eq!(error.field_name(), "StoreId");
/// assert_eq!(error.error_message(), "StoreId is required");
/// ```
pub trait ValidationError: std::error::Error {
    /// Name of the value object the error concerns.
    fn field_name(&self) -> &'static str;

    /// Human-readable error message.
    fn error_message(&self) -> String {
        self.to_string()
    }
}
