use crate::escape::Escaper;

/// Every submission result falls in exactly one of these two buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertCategory {
    Success,
    Danger,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::Success => "success",
            AlertCategory::Danger => "danger",
        }
    }
}

/// A Bootstrap alert fragment conveying a submission result.
#[derive(Debug)]
pub struct Alert {
    category: AlertCategory,
    message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: AlertCategory::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            category: AlertCategory::Danger,
            message: message.into(),
        }
    }

    pub fn category(&self) -> AlertCategory {
        self.category
    }

    pub fn render(&self, escaper: &dyn Escaper) -> String {
        format!(
            r#"<div class="alert alert-{}" role="alert">{}</div>"#,
            escaper.escape_attribute(self.category.as_str()),
            escaper.escape_html(&self.message),
        )
    }
}
