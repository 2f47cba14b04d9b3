use validator::validate_email;

#[derive(Debug)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<SubscriberEmail, String> {
        // `validate_email` implements the HTML5 grammar, which admits
        // dotless domains such as `user@localhost`; subscriptions require a
        // dotted host.
        let has_dotted_domain = s
            .rsplit_once('@')
            .map_or(false, |(_, domain)| domain.contains('.'));
        if validate_email(&s) && has_dotted_domain {
            Ok(Self(s))
        } else {
            Err(format!("`{}` is not a valid email", s))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
