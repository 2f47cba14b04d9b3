use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Public base URL, used to build the submission endpoint the form
    /// posts back to.
    pub base_url: String,
    pub hmac_secret: Secret<String>,
    /// How long an issued token stays valid. Verification accepts two
    /// half-lifetime windows, so the effective maximum is one full lifetime.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub token_lifetime_seconds: u64,
}

pub fn get_settings() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
