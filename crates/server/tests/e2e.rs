use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::auth::{BasicAuthConfig, ServerState};
use server::routes;
use service::menu::{repo::in_memory::InMemoryMenuRepository, MenuService};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let repo = Arc::new(InMemoryMenuRepository::with_default_menu());
    let state = ServerState {
        service: Arc::new(MenuService::new(repo)),
        auth: BasicAuthConfig { username: "user".into(), password: "password".into() },
    };

    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_menu_lists_seeded_catalog_with_wire_field_names() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/menu", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 3);

    // every field is emitted, defaults included, under the wire names
    let first = &items[0];
    assert_eq!(first["name"], "Capricciosa");
    assert_eq!(first["price"], 12);
    assert_eq!(first["veganFriendly"], false);
    assert_eq!(first["createdOn"], "2022-01-01T00:00:00Z");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_list_includes_new_item() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/menu", app.base_url))
        .json(&json!({"name": "Margherita", "price": 9}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/menu", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 4);
    assert!(items.iter().any(|p| p["name"] == "Margherita" && p["price"] == 9));
    Ok(())
}

#[tokio::test]
async fn e2e_create_rejects_invalid_payloads() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // name too short
    let res = c
        .post(format!("{}/menu", app.base_url))
        .json(&json!({"name": "ab", "price": 9}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // non-positive price
    let res = c
        .post(format!("{}/menu", app.base_url))
        .json(&json!({"name": "Margherita", "price": 0}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // nothing was appended
    let res = c.get(format!("{}/menu", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body.as_array().expect("array body").len(), 3);
    Ok(())
}

#[tokio::test]
async fn e2e_image_requires_basic_auth() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .get(format!("{}/menu/image?name=Regina", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    assert!(res.headers().get("www-authenticate").is_some());

    let res = c
        .get(format!("{}/menu/image?name=Regina", app.base_url))
        .basic_auth("user", Some("wrong"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn e2e_image_found_and_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .get(format!("{}/menu/image?name=Regina", app.base_url))
        .basic_auth("user", Some("password"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("image/jpeg")
    );
    let bytes = res.bytes().await?;
    // JPEG SOI/EOI markers
    assert_eq!(&bytes[..2], [0xFF, 0xD8].as_slice());
    assert_eq!(&bytes[bytes.len() - 2..], [0xFF, 0xD9].as_slice());

    let res = c
        .get(format!("{}/menu/image?name=NoSuchPizza", app.base_url))
        .basic_auth("user", Some("password"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.bytes().await?;
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_user_current_returns_principal() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/user/current", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c
        .get(format!("{}/user/current", app.base_url))
        .basic_auth("user", Some("password"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "user");
    Ok(())
}
