//! In-memory transport for driving the client without a network
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use fmprep::client::FinancialModelingPrep;
use fmprep::request::{HttpResponse, Request};
use fmprep::{Error, Result};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Records every requested URL and replays queued responses in order.
///
/// Once the queue is empty every request fails with a transport error.
#[derive(Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    calls: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn ok(&self, body: impl Into<String>) -> &Self {
        self.respond(200, body)
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(Error::Transport(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Request for MockClient {
    type Response = HttpResponse;

    fn new() -> Self {
        Self::default()
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport(format!("no response queued for {url}"))))
    }
}

pub fn client() -> FinancialModelingPrep<MockClient> {
    FinancialModelingPrep::default()
}

pub const BASE: &str = "https://financialmodelingprep.com/api/v3";

/// Log lines written by the thread's subscriber while the guard is held
#[derive(Clone, Default)]
pub struct Logs(Arc<Mutex<Vec<u8>>>);

impl Logs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Logs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Logs {
    type Writer = Logs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn capture_logs() -> (Logs, DefaultGuard) {
    let logs = Logs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
