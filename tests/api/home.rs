use crate::helpers::spawn_app;

#[tokio::test]
async fn home_page_registers_the_htmx_script() {
    let app = spawn_app().await;

    let html = app.get_home().await;

    assert!(html.contains("https://unpkg.com/htmx.org@1.9.12"));
}

#[tokio::test]
async fn home_page_exposes_endpoint_and_token_to_scripts() {
    let app = spawn_app().await;

    let html = app.get_home().await;

    assert!(html.contains("window.HTMX_NEWS"));
    assert!(html.contains(r#""endpoint""#));
    assert!(html.contains(r#""token""#));
}

#[tokio::test]
async fn home_page_embeds_the_subscription_form() {
    let app = spawn_app().await;

    let html = app.get_home().await;

    assert!(html.contains("<form"));
    assert!(html.contains(r#"name="token""#));
    assert!(html.contains(r#"id="htmx-response""#));
}
