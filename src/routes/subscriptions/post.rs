use crate::alert::Alert;
use crate::domain::EmailValidator;
use crate::escape::Escaper;
use crate::routes::SUBSCRIBE_ACTION;
use crate::token::TokenService;
use actix_web::{web, HttpResponse};

const CONFIRMATION_MESSAGE: &str = "Subscription successful! You will receive our news.";

#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub email: String,
}

//region SubscribeError & Implementations
/// The two user-visible failure kinds. Both surface as danger alerts inside
/// a successful transport response, never as HTTP errors.
#[derive(thiserror::Error, Debug)]
pub enum SubscribeError {
    #[error("Security failure (invalid token).")]
    InvalidToken,
    #[error("Invalid email address.")]
    InvalidEmail,
}
//endregion

//region HTTP handlers
#[tracing::instrument(
    name = "Handling a subscription request",
    skip(form, token_service, escaper, email_validator),
    fields(
        subscriber_email = %form.email,
    )
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    token_service: web::Data<dyn TokenService>,
    escaper: web::Data<dyn Escaper>,
    email_validator: web::Data<dyn EmailValidator>,
) -> HttpResponse {
    // Each early return is the only alert this request will ever see.
    if !token_service.verify(&form.token, SUBSCRIBE_ACTION) {
        tracing::warn!("Submission rejected: token verification failed");
        return alert_response(
            Alert::danger(SubscribeError::InvalidToken.to_string()),
            escaper.get_ref(),
        );
    }

    let email = match email_validator.validate(&form.email) {
        Err(_) => {
            return alert_response(
                Alert::danger(SubscribeError::InvalidEmail.to_string()),
                escaper.get_ref(),
            )
        }
        Ok(email) => email,
    };

    // Subscriber storage is not wired up yet; the address is acknowledged
    // and dropped.
    tracing::info!(subscriber_email = %email.as_ref(), "New subscription accepted");
    alert_response(Alert::success(CONFIRMATION_MESSAGE), escaper.get_ref())
}
//endregion

//region Helper functions
/// Wraps an alert in the JSON envelope the client swaps into the page. The
/// transport call always reports success; only the alert category differs.
fn alert_response(alert: Alert, escaper: &dyn Escaper) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": alert.render(escaper),
    }))
}
//endregion
