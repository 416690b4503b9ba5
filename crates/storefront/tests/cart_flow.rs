//! End-to-end tests for the storefront router.
//!
//! Drives the real router with `tower::ServiceExt::oneshot` against the
//! shipped content exports, replaying the session cookie between requests
//! the way a browser would.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use tower::ServiceExt;

use shamba_catalog::CatalogStore;
use shamba_storefront::config::StorefrontConfig;
use shamba_storefront::state::AppState;

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from("kX9#mP2$vL8@qR5!wT3&nY7*zB4^cF6j"),
        content_dir: PathBuf::from("content"),
    }
}

fn test_app() -> Router {
    let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    let catalog = CatalogStore::load(&content_dir).expect("catalog");
    app_with(catalog)
}

fn app_with(catalog: CatalogStore) -> Router {
    shamba_storefront::app(AppState::new(test_config(), catalog))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

/// Extract the session cookie pair from a response.
fn session_cookie(response: &axum::response::Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .expect("cookie string");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = test_app();

    let response = app.clone().oneshot(get("/health")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");

    let response = app.oneshot(get("/health/ready")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_fails_with_empty_catalog() {
    let app = app_with(CatalogStore::default());

    let response = app.oneshot(get("/health/ready")).await.expect("response");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn home_page_renders_featured_sections() {
    let app = test_app();

    let response = app.oneshot(get("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Featured Products"));
    assert!(body.contains("Latest Recipes"));
    assert!(body.contains("Tomatoes"));
}

#[tokio::test]
async fn our_story_page_renders() {
    let app = test_app();

    let response = app.oneshot(get("/our-story")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Our Story"));
    assert!(body.contains("Our Values"));
}

#[tokio::test]
async fn product_page_shows_price_and_unknown_handle_404s() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/shop/tomatoes"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("KES 180.00"));

    let response = app
        .oneshot(get("/shop/no-such-product"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recipe_listing_is_newest_first() {
    let app = test_app();

    let response = app.oneshot(get("/recipes")).await.expect("response");
    let body = body_string(response).await;

    let honey = body.find("Honey-Glazed Roast Vegetables").expect("honey");
    let sukuma = body.find("Sukuma Wiki with Caramelized Onions").expect("sukuma");
    let omelette = body
        .find("Kienyeji Egg and Spinach Omelette")
        .expect("omelette");
    assert!(honey < sukuma);
    assert!(sukuma < omelette);
}

#[tokio::test]
async fn directory_pages_render() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/directory/farmers/green-valley-farm"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Limuru"));

    let response = app
        .oneshot(get("/directory/ingredients/sukuma-wiki"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Leafy Greens"));
}

#[tokio::test]
async fn add_to_cart_opens_drawer_and_triggers_refresh() {
    let app = test_app();

    let response = app
        .oneshot(post_form(
            "/cart/add",
            "product_id=gid://shop/Product/1",
            None,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").expect("trigger"),
        "cart-updated"
    );

    let body = body_string(response).await;
    assert!(body.contains("cart-drawer--open"));
    assert!(body.contains("Tomatoes"));
    assert!(body.contains("KES 180.00"));
}

#[tokio::test]
async fn add_to_cart_rejects_unknown_product() {
    let app = test_app();

    let response = app
        .oneshot(post_form(
            "/cart/add",
            "product_id=gid://shop/Product/999",
            None,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Item unavailable"));
}

#[tokio::test]
async fn cart_persists_across_requests_via_session_cookie() {
    let app = test_app();

    // Add the same product twice; quantities merge into one line.
    let response = app
        .clone()
        .oneshot(post_form(
            "/cart/add",
            "product_id=gid://shop/Product/1",
            None,
        ))
        .await
        .expect("response");
    let cookie = session_cookie(&response);

    let response = app
        .clone()
        .oneshot(post_form(
            "/cart/add",
            "product_id=gid://shop/Product/1",
            Some(&cookie),
        ))
        .await
        .expect("response");
    let body = body_string(response).await;
    assert!(body.contains("KES 360.00"));

    // The badge sees the merged quantity.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/cart/count")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(body_string(response).await.trim(), "2");

    // Setting quantity to zero removes the line.
    let response = app
        .oneshot(post_form(
            "/cart/update",
            "product_id=gid://shop/Product/1&quantity=0",
            Some(&cookie),
        ))
        .await
        .expect("response");
    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn close_then_open_toggles_the_drawer() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form(
            "/cart/add",
            "product_id=gid://shop/Product/2",
            None,
        ))
        .await
        .expect("response");
    let cookie = session_cookie(&response);
    assert!(body_string(response).await.contains("cart-drawer--open"));

    let response = app
        .clone()
        .oneshot(post_form("/cart/close", "", Some(&cookie)))
        .await
        .expect("response");
    assert!(!body_string(response).await.contains("cart-drawer--open"));

    let response = app
        .oneshot(post_form("/cart/open", "", Some(&cookie)))
        .await
        .expect("response");
    assert!(body_string(response).await.contains("cart-drawer--open"));
}
