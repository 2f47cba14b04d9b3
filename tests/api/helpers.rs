use htmx_news::configuration::get_settings;
use htmx_news::startup::Application;
use htmx_news::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_home(&self) -> String {
        self.api_client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .expect("Failed to read response body.")
    }

    pub async fn get_subscription_form(&self) -> String {
        self.api_client
            .get(&format!("{}/subscriptions/form", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .expect("Failed to read response body.")
    }

    pub async fn post_subscription(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/subscriptions", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Pulls the freshly minted token out of the rendered form's hidden
    /// input, the same way the browser would submit it.
    pub async fn valid_token(&self) -> String {
        let html = self.get_subscription_form().await;
        extract_hidden_field(&html, "token")
    }
}

// Launch our application in the background ~somehow~
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let settings = {
        let mut configuration = get_settings().expect("Failed to read config.toml");
        configuration.application.port = 0; // Random OS port
        configuration
    };

    let application = Application::build(settings)
        .await
        .expect("Failed to build application");

    let address = format!("http://127.0.0.1:{}", application.port());

    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}

pub fn extract_hidden_field(html: &str, name: &str) -> String {
    let marker = format!(r#"name="{}" value=""#, name);
    let start = html
        .find(&marker)
        .unwrap_or_else(|| panic!("No `{}` field in form:\n{}", name, html))
        + marker.len();
    let rest = &html[start..];
    let end = rest.find('"').expect("Unterminated attribute value");
    rest[..end].to_string()
}

/// Unwraps the `{"success": true, "data": "<fragment>"}` envelope and
/// returns the alert fragment.
pub async fn alert_fragment(response: reqwest::Response) -> String {
    assert!(response.status().is_success());
    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse response as JSON.");
    assert_eq!(Some(true), body["success"].as_bool());
    body["data"]
        .as_str()
        .expect("Envelope payload is not a string")
        .to_string()
}
