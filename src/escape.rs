/// Output escaping for generated markup.
///
/// Handlers receive this through the application state so tests can swap in
/// their own implementation.
pub trait Escaper: Send + Sync {
    /// Escape text placed between HTML tags.
    fn escape_html(&self, input: &str) -> String;
    /// Escape a value placed inside a double-quoted attribute.
    fn escape_attribute(&self, input: &str) -> String;
    /// Escape a URL placed inside a double-quoted attribute, keeping it
    /// readable.
    fn escape_url(&self, input: &str) -> String;
}

pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape_html(&self, input: &str) -> String {
        htmlescape::encode_minimal(input)
    }

    fn escape_attribute(&self, input: &str) -> String {
        htmlescape::encode_attribute(input)
    }

    fn escape_url(&self, input: &str) -> String {
        htmlescape::encode_minimal(input)
    }
}
