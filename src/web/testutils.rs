// src/web/testutils.rs
//! Contexto de teste para exercitar o router completo sem abrir sockets.

use crate::{db, state::AppState, web::routes::create_router};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub(crate) struct TestContext {
    pool: SqlitePool,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let pool = db::pool_de_teste().await;
        let app = create_router(AppState { db_pool: pool.clone() });
        Self { pool, app }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Envia um pedido e devolve o estado e o corpo em texto.
    pub(crate) async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Como `send_raw`, mas interpreta a resposta como JSON.
    pub(crate) async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, text) = self.send_raw(method, uri, body).await;
        let json = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("Resposta não é JSON ({}): {}", e, text));
        (status, json)
    }
}
