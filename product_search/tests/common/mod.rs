// common/mod.rs - Shared test utilities
//
// - ScriptedSource: in-memory ProductSource that replays queued results
// - ManualClock: Runtime whose clock only moves when told to
// - serve_once: one-shot HTTP server on localhost for the reqwest client

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use product_search::web_app::api::{ProductSource, Runtime};
use product_search::web_app::error::{Result, SearchError};
use product_search::web_app::model::{Product, QueryKey};

/// Replays queued responses in order; an empty queue answers with an
/// empty page. Every call yields once before resolving so concurrent
/// callers can interleave.
#[derive(Default)]
pub struct ScriptedSource {
    responses: RefCell<VecDeque<Result<Vec<Product>>>>,
    calls: RefCell<Vec<QueryKey>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(&self, products: Vec<Product>) -> &Self {
        self.responses.borrow_mut().push_back(Ok(products));
        self
    }

    pub fn fail(&self) -> &Self {
        self.responses.borrow_mut().push_back(Err(SearchError::FetchFailed));
        self
    }

    pub fn calls(&self) -> Vec<QueryKey> {
        self.calls.borrow().clone()
    }
}

impl ProductSource for ScriptedSource {
    fn fetch_page(&self, key: &QueryKey) -> impl Future<Output = Result<Vec<Product>>> {
        self.calls.borrow_mut().push(key.clone());
        let next = self.responses.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()));
        async move {
            tokio::task::yield_now().await;
            next
        }
    }
}

/// Clock that starts at a fixed instant; sleeps complete immediately and
/// are recorded
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
    slept: RefCell<Vec<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()),
            slept: RefCell::new(Vec::new()),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + chrono::Duration::seconds(secs));
    }

    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Runtime for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.slept.borrow_mut().push(duration);
        std::future::ready(())
    }
}

pub fn products(items: &[(u64, &str)]) -> Vec<Product> {
    items
        .iter()
        .map(|(id, title)| Product::new(*id, *title))
        .collect()
}

pub fn ids(items: &[Product]) -> Vec<u64> {
    items.iter().map(|p| p.id).collect()
}

/// Accept one connection, answer it with `status` and `body`, and resolve
/// to the request line that was received.
///
/// Returns the base URL to point the client at (already ending in `/api`).
pub async fn serve_once(
    status: u16,
    body: &str,
) -> anyhow::Result<(String, JoinHandle<anyhow::Result<String>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;

        let mut request = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let n = socket.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let reason = if status < 400 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;

        let request = String::from_utf8_lossy(&request);
        Ok(request.lines().next().unwrap_or_default().to_string())
    });

    Ok((format!("http://{}/api", addr), handle))
}
