use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use toko_backend::{
    bootstrap::services::build_state,
    routers::init_router,
    shared::{config::Config, infra::repository::InMemoryDatabase, repository::Repositories},
};

const ADMIN_NO_TELP: &str = "0800";

fn test_config(upload_dir: &str) -> Config {
    Config {
        db_driver: "postgres".to_string(),
        db_user: String::new(),
        db_password: String::new(),
        db_host: "127.0.0.1".to_string(),
        db_port: 5432,
        db_name: String::new(),
        database_url: None,
        database_max_connections: 1,
        database_min_connections: 1,
        database_connect_timeout: 1,
        database_idle_timeout: 1,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        rust_log: "info".to_string(),
        app_env: "test".to_string(),
        jwt_secret: "integration_secret".to_string(),
        upload_dir: upload_dir.to_string(),
        admin_no_telp: Some(ADMIN_NO_TELP.to_string()),
    }
}

struct TestApp {
    router: Router,
    _uploads: tempfile::TempDir,
}

fn app() -> TestApp {
    let uploads = tempfile::tempdir().unwrap();
    let config = test_config(uploads.path().to_str().unwrap());
    let repos = Repositories::in_memory(InMemoryDatabase::new());
    let state = build_state(Arc::new(config), repos);
    TestApp {
        router: init_router(state),
        _uploads: uploads,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn register_and_login(router: &Router, nama: &str, no_telp: &str) -> String {
    let (status, _) = send(
        router,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({
                "nama": nama,
                "kata_sandi": "rahasia123",
                "no_telp": no_telp,
                "email": format!("{}@example.com", no_telp),
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        router,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "no_telp": no_telp, "kata_sandi": "rahasia123" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["token"].as_str().unwrap().to_string()
}

async fn create_category(router: &Router, token: &str, nama: &str) -> i64 {
    let (status, body) = send(
        router,
        json_request(
            "POST",
            "/api/category",
            Some(token),
            json!({ "nama_category": nama }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let app = app();
    let (status, body) = send(&app.router, get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "OK");
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let app = app();

    for request in [
        get("/api/user", None),
        get("/api/trx", None),
        get("/api/toko/my", None),
        json_request("POST", "/api/category", None, json!({ "nama_category": "Baju" })),
    ] {
        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], 401);
    }
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = app();
    let (status, _) = send(&app.router, get("/api/user", Some("not-a-jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_and_read_profile() {
    let app = app();
    let token = register_and_login(&app.router, "Budi", "0811").await;

    let (status, body) = send(&app.router, get("/api/user", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "0811@example.com");
    assert!(body["data"].get("kata_sandi").is_none());

    let (status, body) = send(&app.router, get("/api/toko/my", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nama_toko"], "Toko Budi");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = app();
    register_and_login(&app.router, "Budi", "0811").await;

    let (status, body) = send(
        &app.router,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "no_telp": "0811", "kata_sandi": "salah" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "no telp or password is wrong");
}

#[tokio::test]
async fn malformed_input_is_bad_request() {
    let app = app();

    let (status, _) = send(&app.router, get("/api/category/abc", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app.router, get("/api/product?min_harga=murah", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_gets_json_404() {
    let app = app();
    let (status, body) = send(&app.router, get("/api/nope", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn only_the_configured_admin_manages_categories() {
    let app = app();
    let admin = register_and_login(&app.router, "Admin", ADMIN_NO_TELP).await;
    let member = register_and_login(&app.router, "Budi", "0811").await;

    let (status, _) = send(
        &app.router,
        json_request(
            "POST",
            "/api/category",
            Some(&member),
            json!({ "nama_category": "Makanan" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let id = create_category(&app.router, &admin, "Makanan").await;
    let (status, body) = send(&app.router, get(&format!("/api/category/{}", id), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nama_category"], "Makanan");
}

#[tokio::test]
async fn create_product_then_order_it() {
    let app = app();
    let admin = register_and_login(&app.router, "Admin", ADMIN_NO_TELP).await;
    let token = register_and_login(&app.router, "Budi", "0811").await;
    let category_id = create_category(&app.router, &admin, "Minuman").await;

    let boundary = "X-TOKO-BOUNDARY";
    let mut body = String::new();
    for (name, value) in [
        ("nama_produk", "Kopi Susu".to_string()),
        ("category_id", category_id.to_string()),
        ("harga_reseller", "900".to_string()),
        ("harga_konsumen", "1000".to_string()),
        ("stok", "3".to_string()),
    ] {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"photos\"; filename=\"kopi.png\"\r\nContent-Type: image/png\r\n\r\npng\r\n--{boundary}--\r\n"
    ));

    let request = Request::builder()
        .method("POST")
        .uri("/api/product")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body))
        .unwrap();
    let (status, created) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["slug"], "kopi-susu");
    assert_eq!(created["data"]["photos"].as_array().unwrap().len(), 1);
    let product_id = created["data"]["id"].as_i64().unwrap();

    let (status, alamat) = send(
        &app.router,
        json_request(
            "POST",
            "/api/user/alamat",
            Some(&token),
            json!({
                "judul_alamat": "Rumah",
                "nama_penerima": "Budi",
                "no_telp": "0811",
                "detail_alamat": "Jl. Merdeka 1",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, order) = send(
        &app.router,
        json_request(
            "POST",
            "/api/trx",
            Some(&token),
            json!({
                "method_bayar": "transfer",
                "alamat_kirim": alamat["data"]["id"],
                "detail_trx": [{ "product_id": product_id, "kuantitas": 2 }],
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["data"]["harga_total"], 2000);

    let (status, body) = send(
        &app.router,
        get(&format!("/api/product/{}", product_id), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["stok"], 1);
}
