use htmx_news::configuration::get_settings;
use htmx_news::startup::Application;
use htmx_news::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("htmx-news".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);
    let configuration = get_settings().expect("Failed to read config.toml");
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
