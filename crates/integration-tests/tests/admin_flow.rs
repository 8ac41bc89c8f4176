//! Admin login, message listing and logout over HTTP.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;

use portfolio_integration_tests::{ADMIN_PASSWORD, TestSite, location};
use portfolio_core::ContactError;
use portfolio_site::routes::admin::LIST_FAILED_NOTICE;
use portfolio_site::services::{INCORRECT_PASSWORD_NOTICE, LOGGED_OUT_NOTICE};

const PROMPT: &str = r#"name="password""#;
const LOGOUT_LINK: &str = r#"href="/admin/logout""#;

async fn login(site: &TestSite, client: &reqwest::Client, password: &str) -> reqwest::Response {
    client
        .post(site.url("/admin"))
        .form(&[("password", password)])
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_unauthenticated_sees_prompt() {
    let site = TestSite::spawn().await;
    let body = site.page(&site.client(), "/admin").await;

    assert!(body.contains(PROMPT));
    assert!(!body.contains(LOGOUT_LINK));
}

#[tokio::test]
async fn test_wrong_password_redirects_with_notice() {
    let site = TestSite::spawn().await;
    let client = site.client();

    let resp = login(&site, &client, "koalapo").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let body = site.page(&client, "/admin").await;
    assert!(body.contains(INCORRECT_PASSWORD_NOTICE));
    assert!(body.contains(PROMPT));
}

#[tokio::test]
async fn test_failed_login_keeps_pending_notices() {
    let site = TestSite::spawn().await;
    let client = site.client();
    let invalid_email = ContactError::InvalidEmail.to_string();

    site.submit_contact(
        &client,
        &[("name", "A"), ("email", "bad"), ("message", "a valid message")],
    )
    .await;
    login(&site, &client, "nope").await;

    let body = site.page(&client, "/admin").await;
    assert!(body.contains(&invalid_email));
    assert!(body.contains(INCORRECT_PASSWORD_NOTICE));

    // Both were consumed by that page.
    assert!(!site.page(&client, "/").await.contains(&invalid_email));
}

#[tokio::test]
async fn test_successful_login_shows_pending_notices() {
    let site = TestSite::spawn().await;
    let client = site.client();

    login(&site, &client, "nope").await;
    let resp = login(&site, &client, ADMIN_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains(INCORRECT_PASSWORD_NOTICE));
    assert!(body.contains(LOGOUT_LINK));
}

#[tokio::test]
async fn test_unreadable_messages_render_notice() {
    let site = TestSite::spawn().await;
    let client = site.client();

    login(&site, &client, ADMIN_PASSWORD).await;
    sqlx::query("DROP TABLE contacts")
        .execute(site.pool())
        .await
        .unwrap();

    let resp = client.get(site.url("/admin")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains(LIST_FAILED_NOTICE));
    assert!(body.contains(LOGOUT_LINK));
    assert!(!body.to_lowercase().contains("no such table"));
}

#[tokio::test]
async fn test_login_lists_messages_newest_first() {
    let site = TestSite::spawn().await;
    let visitor = site.client();
    let admin = site.client();

    for (name, email) in [("Firstsender", "first@x.com"), ("Secondsender", "second@x.com")] {
        site.submit_contact(
            &visitor,
            &[("name", name), ("email", email), ("message", "Hello there, this works")],
        )
        .await;
    }

    let resp = login(&site, &admin, ADMIN_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();

    assert!(body.contains(LOGOUT_LINK));
    let second = body.find("Secondsender").unwrap();
    let first = body.find("Firstsender").unwrap();
    assert!(second < first);

    // The session stays authenticated on later visits.
    let again = site.page(&admin, "/admin").await;
    assert!(again.contains("Firstsender"));
    assert!(!again.contains(PROMPT));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let site = TestSite::spawn().await;
    let admin = site.client();
    let visitor = site.client();

    login(&site, &admin, ADMIN_PASSWORD).await;

    assert!(site.page(&visitor, "/admin").await.contains(PROMPT));
    assert!(site.page(&admin, "/admin").await.contains(LOGOUT_LINK));
}

#[tokio::test]
async fn test_logout_returns_to_prompt() {
    let site = TestSite::spawn().await;
    let client = site.client();

    login(&site, &client, ADMIN_PASSWORD).await;

    let resp = client.get(site.url("/admin/logout")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let body = site.page(&client, "/admin").await;
    assert!(body.contains(LOGGED_OUT_NOTICE));
    assert!(body.contains(PROMPT));
    assert!(!body.contains(LOGOUT_LINK));
}

#[tokio::test]
async fn test_logout_without_login() {
    let site = TestSite::spawn().await;
    let client = site.client();

    let resp = client.get(site.url("/admin/logout")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(site.page(&client, "/admin").await.contains(PROMPT));
}

#[tokio::test]
async fn test_admin_pages_are_not_cached() {
    let site = TestSite::spawn().await;
    let resp = site.client().get(site.url("/admin")).send().await.unwrap();

    let cache_control = resp.headers().get("cache-control").unwrap();
    assert!(cache_control.to_str().unwrap().contains("no-store"));
}
