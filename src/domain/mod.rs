mod email_validator;
mod subscriber_email;

pub use email_validator::{EmailValidator, SyntaxEmailValidator};
pub use subscriber_email::SubscriberEmail;
