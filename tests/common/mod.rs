#![allow(dead_code)]

use axum::{Json, Router, http::StatusCode, routing::get, routing::post};
use domain_lookup::infrastructure::HttpDomainBackend;
use domain_lookup::navigation::NavigationTable;
use domain_lookup::state::AppState;
use domain_lookup::store::LookupStore;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Canned answer of one stub endpoint.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

/// Answers of the stub backend, one per endpoint.
#[derive(Clone)]
pub struct Replies {
    pub domain: Reply,
    pub history: Reply,
    pub status: Reply,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            domain: Reply::new(StatusCode::CREATED, domain_body(2)),
            history: Reply::new(StatusCode::OK, history_body(&["google.com", "example.com"])),
            status: Reply::new(StatusCode::OK, json!({ "status": "OK" })),
        }
    }
}

/// A backend stub listening on an ephemeral local port.
pub struct StubBackend {
    pub url: Url,
    domain_hits: Arc<AtomicUsize>,
    history_hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<Value>>>,
}

impl StubBackend {
    pub fn domain_hits(&self) -> usize {
        self.domain_hits.load(Ordering::SeqCst)
    }

    pub fn history_hits(&self) -> usize {
        self.history_hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Value> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn client(&self) -> HttpDomainBackend {
        HttpDomainBackend::new(self.url.clone(), Duration::from_secs(5)).unwrap()
    }
}

pub async fn spawn_backend(replies: Replies) -> StubBackend {
    let domain_hits = Arc::new(AtomicUsize::new(0));
    let history_hits = Arc::new(AtomicUsize::new(0));
    let last_request = Arc::new(Mutex::new(None));

    let app = Router::new()
        .route(
            "/domain",
            post({
                let hits = domain_hits.clone();
                let last = last_request.clone();
                let reply = replies.domain.clone();
                move |Json(body): Json<Value>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    *last.lock().unwrap() = Some(body);
                    (reply.status, Json(reply.body))
                }
            }),
        )
        .route(
            "/get-last-domains",
            get({
                let hits = history_hits.clone();
                let reply = replies.history.clone();
                move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (reply.status, Json(reply.body))
                }
            }),
        )
        .route(
            "/status",
            get({
                let reply = replies.status.clone();
                move || async move { (reply.status, Json(reply.body)) }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        url: Url::parse(&format!("http://{addr}")).unwrap(),
        domain_hits,
        history_hits,
        last_request,
    }
}

/// URL of a local port nothing listens on.
pub async fn unreachable_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn unreachable_client(url: Url) -> HttpDomainBackend {
    HttpDomainBackend::new(url, Duration::from_secs(2)).unwrap()
}

pub fn domain_body(servers: usize) -> Value {
    let servers: Vec<Value> = (0..servers)
        .map(|i| {
            json!({
                "address": format!("172.217.{i}.14"),
                "country": "US",
                "owner": format!("Google LLC {i}"),
                "ssl_grade": "A"
            })
        })
        .collect();

    json!({
        "servers": servers,
        "servers_changed": false,
        "ssl_grade": "A",
        "previous_ssl_grade": "A+",
        "logo": "https://www.google.com/favicon.ico",
        "title": "Google",
        "is_down": false
    })
}

pub fn history_body(titles: &[&str]) -> Value {
    Value::Array(
        titles
            .iter()
            .map(|title| {
                json!({
                    "ssl_grade": "B",
                    "previous_ssl_grade": "A",
                    "logo": format!("https://{title}/favicon.ico"),
                    "title": title,
                    "is_down": false
                })
            })
            .collect(),
    )
}

pub fn create_test_state(backend: HttpDomainBackend, base_path: &str) -> AppState {
    let store = Arc::new(LookupStore::new(Arc::new(backend)));
    AppState::new(store, Arc::new(NavigationTable::new(base_path)))
}
