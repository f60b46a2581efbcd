//! Test doubles shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use mosaic_lib::modules::provider::{
    domain::{ImageRecord, ImageSource},
    traits::{FetchRequest, ImageProvider, ProviderPage},
};
use mosaic_lib::shared::errors::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serves a fixed number of records and counts how often it was called
pub struct FakeProvider {
    source: ImageSource,
    available: usize,
    total_pages: Option<u32>,
    fail: bool,
    calls: AtomicUsize,
    quotas: Mutex<Vec<usize>>,
}

impl FakeProvider {
    pub fn new(source: ImageSource, available: usize) -> Self {
        Self {
            source,
            available,
            total_pages: None,
            fail: false,
            calls: AtomicUsize::new(0),
            quotas: Mutex::new(Vec::new()),
        }
    }

    pub fn with_total_pages(mut self, pages: u32) -> Self {
        self.total_pages = Some(pages);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn quotas(&self) -> Vec<usize> {
        self.quotas.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for FakeProvider {
    fn source(&self) -> ImageSource {
        self.source
    }

    async fn fetch(&self, request: &FetchRequest) -> AppResult<ProviderPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.quotas.lock().unwrap().push(request.quota);
        if self.fail {
            return Err(AppError::ApiError("Status 500: upstream exploded".into()));
        }
        // Deliberately ignores the quota to exercise truncation
        let records = (0..self.available)
            .map(|i| {
                ImageRecord::new(
                    self.source,
                    format!("https://img.test/{}/{}/{}", self.source, request.page, i),
                )
            })
            .collect();
        Ok(ProviderPage::new(records, self.total_pages))
    }
}

/// Accepts connections forever and hands each one to `respond`
async fn spawn_raw_upstream<F, Fut>(respond: F) -> String
where
    F: Fn(TcpStream) -> Fut + Send + Sync + Copy + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(respond(socket));
        }
    });
    format!("http://{}", addr)
}

/// Upstream that answers every request with `body` after `delay`
pub async fn spawn_slow_json_upstream(delay: Duration, body: &'static str) -> String {
    spawn_raw_upstream(move |mut socket| async move {
        let mut request = [0u8; 2048];
        let _ = socket.read(&mut request).await;
        tokio::time::sleep(delay).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
    })
    .await
}

/// Upstream that promises `declared` bytes, sends `sent` of them, then goes quiet
pub async fn spawn_stalling_upstream(declared: usize, sent: usize, stall: Duration) -> String {
    spawn_raw_upstream(move |mut socket| async move {
        let mut request = [0u8; 2048];
        let _ = socket.read(&mut request).await;
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\n\r\n",
            declared
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&vec![0xFFu8; sent]).await;
        tokio::time::sleep(stall).await;
    })
    .await
}
