#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use shortpath::application::services::UrlService;
use shortpath::domain::entities::NewUrlMapping;
use shortpath::domain::repositories::UrlRepository;
use shortpath::infrastructure::persistence::MemoryUrlRepository;
use shortpath::routes::app_router;
use shortpath::state::AppState;
use shortpath::utils::id_generator::{RandomIdGenerator, generate_id};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

/// State with a fixed public origin, backed by a fresh in-memory store.
pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    create_state(Some(BASE_URL.to_string()), false)
}

/// State without a configured origin; short URLs follow the request headers.
pub fn create_host_state(behind_proxy: bool) -> (AppState, Arc<MemoryUrlRepository>) {
    create_state(None, behind_proxy)
}

fn create_state(
    base_url: Option<String>,
    behind_proxy: bool,
) -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(
        repository.clone(),
        Arc::new(RandomIdGenerator),
    ));

    (
        AppState::new(url_service, base_url, behind_proxy),
        repository,
    )
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub async fn create_test_mapping(repository: &MemoryUrlRepository, shortid: &str, url: &str) {
    repository
        .create(NewUrlMapping {
            identifier: shortid.to_string(),
            original_url: url.to_string(),
        })
        .await
        .unwrap();
}

pub async fn shorten(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/url/shorten").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub fn shorten_body(url: &str, custom_id: Option<&str>) -> Value {
    match custom_id {
        Some(id) => json!({ "originalUrl": url, "URLID": id }),
        None => json!({ "originalUrl": url }),
    }
}

/// Migrated PostgreSQL schema private to one test.
pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

/// Creates a fresh schema in `DATABASE_URL` and migrates it.
///
/// Returns `None` when `DATABASE_URL` is unset so store tests are skipped on
/// machines without PostgreSQL.
pub async fn test_db() -> Option<TestDb> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let admin = PgPool::connect(&database_url).await.unwrap();

    let schema = format!("test_{}", generate_id().to_lowercase().replace('-', "_"));
    sqlx::query(&format!("CREATE SCHEMA \"{schema}\""))
        .execute(&admin)
        .await
        .unwrap();

    let options = PgConnectOptions::from_str(&database_url)
        .unwrap()
        .options([("search_path", schema.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    Some(TestDb {
        pool,
        admin,
        schema,
    })
}

impl TestDb {
    pub async fn cleanup(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA \"{}\" CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .unwrap();
    }
}
