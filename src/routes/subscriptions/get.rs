use crate::escape::Escaper;
use crate::routes::SUBSCRIBE_ACTION;
use crate::startup::ApplicationBaseUrl;
use crate::token::TokenService;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::HttpResponse;

//region HTTP handlers
pub async fn subscription_form(
    base_url: Data<ApplicationBaseUrl>,
    token_service: Data<dyn TokenService>,
    escaper: Data<dyn Escaper>,
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_subscription_form(
            &base_url.0,
            token_service.get_ref(),
            escaper.get_ref(),
        ))
}
//endregion

/// Renders the subscription form fragment.
///
/// The form posts asynchronously to the submission endpoint and swaps the
/// response into the `#htmx-response` container below it. A fresh
/// action-scoped token is minted on every render.
pub fn render_subscription_form(
    base_url: &str,
    token_service: &dyn TokenService,
    escaper: &dyn Escaper,
) -> String {
    let endpoint = format!("{}/subscriptions", base_url);
    let token = token_service.issue(SUBSCRIBE_ACTION);
    format!(
        r##"<form
hx-post="{endpoint}"
hx-target="#htmx-response"
hx-swap="innerHTML"
>
<input type="hidden" name="action" value="{action}">
<input type="hidden" name="token" value="{token}">
<div class="mb-3">
<input
type="email"
name="email"
class="form-control"
placeholder="Your e-mail"
required
>
</div>
<button class="btn btn-primary">Subscribe</button>
</form>
<div id="htmx-response" class="mt-3"></div>"##,
        endpoint = escaper.escape_url(&endpoint),
        action = escaper.escape_attribute(SUBSCRIBE_ACTION),
        token = escaper.escape_attribute(&token),
    )
}
