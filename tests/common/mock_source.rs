//! Mock HTTP source for exercising the dataset fetch.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Response, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Serve one fixed response for `GET /dataset.json` on an ephemeral port.
pub async fn serve(status: u16, body: String) -> SocketAddr {
    let router = Router::new().route(
        "/dataset.json",
        get(move || async move {
            Response::builder()
                .status(StatusCode::from_u16(status).expect("valid status"))
                .header("content-type", "application/json")
                .body(Body::from(body))
                .expect("mock response")
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock source");
    let addr = listener.local_addr().expect("mock source addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

pub fn dataset_url(addr: SocketAddr) -> String {
    format!("http://{}/dataset.json", addr)
}
