use crate::configuration::Settings;
use crate::domain::{EmailValidator, SyntaxEmailValidator};
use crate::escape::{Escaper, HtmlEscaper};
use crate::routes::{health_check, home, subscribe, subscription_form};
use crate::token::{HmacTokenService, TokenService};
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let token_service = HmacTokenService::new(
            configuration.application.hmac_secret,
            configuration.application.token_lifetime_seconds,
        );
        let server = run(
            listener,
            configuration.application.base_url,
            Arc::new(token_service),
            Arc::new(HtmlEscaper),
            Arc::new(SyntaxEmailValidator),
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub struct ApplicationBaseUrl(pub String);

pub fn run(
    listener: TcpListener,
    base_url: String,
    token_service: Arc<dyn TokenService>,
    escaper: Arc<dyn Escaper>,
    email_validator: Arc<dyn EmailValidator>,
) -> Result<Server, std::io::Error> {
    let base_url = Data::new(ApplicationBaseUrl(base_url));
    let token_service: Data<dyn TokenService> = Data::from(token_service);
    let escaper: Data<dyn Escaper> = Data::from(escaper);
    let email_validator: Data<dyn EmailValidator> = Data::from(email_validator);
    let server = HttpServer::new(move || {
        App::new()
            // Middleware
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/subscriptions/form", web::get().to(subscription_form))
            .route("/subscriptions", web::post().to(subscribe))
            .app_data(base_url.clone())
            .app_data(token_service.clone())
            .app_data(escaper.clone())
            .app_data(email_validator.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
