use crate::escape::Escaper;
use crate::routes::{render_subscription_form, SUBSCRIBE_ACTION};
use crate::startup::ApplicationBaseUrl;
use crate::token::TokenService;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::HttpResponse;

/// Pinned htmx runtime, loaded from the CDN.
const HTMX_CDN_URL: &str = "https://unpkg.com/htmx.org@1.9.12";

pub async fn home(
    base_url: Data<ApplicationBaseUrl>,
    token_service: Data<dyn TokenService>,
    escaper: Data<dyn Escaper>,
) -> HttpResponse {
    // Page-level config for scripts other than the form itself: the
    // submission endpoint and a token valid for the same action scope.
    let script_config = serde_json::json!({
        "endpoint": format!("{}/subscriptions", base_url.0),
        "token": token_service.issue(SUBSCRIBE_ACTION),
    });
    let form = render_subscription_form(&base_url.0, token_service.get_ref(), escaper.get_ref());
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta http-equiv="content-type" content="text/html; charset=utf-8">
<title>Newsletter</title>
<script src="{htmx_src}" defer></script>
<script>window.HTMX_NEWS = {script_config};</script>
</head>
<body>
{form}
</body>
</html>"#,
            htmx_src = escaper.escape_url(HTMX_CDN_URL),
        ))
}
