use crate::domain::SubscriberEmail;

/// Turns a raw form value into a [`SubscriberEmail`].
///
/// Handlers receive this through the application state so tests can swap in
/// their own implementation.
pub trait EmailValidator: Send + Sync {
    fn validate(&self, input: &str) -> Result<SubscriberEmail, String>;
}

/// Trims surrounding whitespace, then checks the address grammar. No
/// canonicalization beyond that.
pub struct SyntaxEmailValidator;

impl EmailValidator for SyntaxEmailValidator {
    fn validate(&self, input: &str) -> Result<SubscriberEmail, String> {
        SubscriberEmail::parse(input.trim().to_string())
    }
}
