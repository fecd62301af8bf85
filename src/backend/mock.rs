//! In-memory backend that replays canned replies and records every request.

use super::{ApiRequest, Backend, Method};
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use serde_json::Value;
use std::cell::RefCell;
use std::io;

#[derive(Debug, Clone)]
enum Reply {
    Json(u16, Value),
    Timeout,
}

#[derive(Debug, Clone)]
struct Stub {
    method: Method,
    url: String,
    params: Option<Record>,
    reply: Reply,
}

/// The most recently registered matching stub wins, so a test can change a
/// reply (e.g. the list after a delete) by registering it again.
#[derive(Debug, Default)]
pub struct MockBackend {
    stubs: RefCell<Vec<Stub>>,
    history: RefCell<Vec<ApiRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, url: &str, params: Option<Record>, reply: Reply) -> &Self {
        self.stubs.borrow_mut().push(Stub {
            method,
            url: url.to_string(),
            params,
            reply,
        });
        self
    }

    pub fn reply(&self, method: Method, url: &str, status: u16, body: Value) -> &Self {
        self.push(method, url, None, Reply::Json(status, body))
    }

    /// Like [`reply`](Self::reply) but only for requests with exactly `params`.
    pub fn reply_with_params(
        &self,
        method: Method,
        url: &str,
        params: Record,
        status: u16,
        body: Value,
    ) -> &Self {
        self.push(method, url, Some(params), Reply::Json(status, body))
    }

    pub fn timeout(&self, method: Method, url: &str) -> &Self {
        self.push(method, url, None, Reply::Timeout)
    }

    pub fn history(&self) -> Vec<ApiRequest> {
        self.history.borrow().clone()
    }

    pub fn requests(&self, method: Method) -> Vec<ApiRequest> {
        self.history
            .borrow()
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    pub fn reset_history(&self) {
        self.history.borrow_mut().clear();
    }
}

impl Backend for MockBackend {
    fn send(&self, request: &ApiRequest) -> AppResult<Value> {
        self.history.borrow_mut().push(request.clone());

        let stubs = self.stubs.borrow();
        let stub = stubs.iter().rev().find(|s| {
            s.method == request.method
                && s.url == request.url
                && s.params.as_ref().is_none_or(|p| *p == request.params)
        });

        match stub.map(|s| &s.reply) {
            Some(Reply::Json(status, body)) if (200..300).contains(status) => Ok(body.clone()),
            Some(Reply::Json(status, body)) => Err(AppError::Backend {
                status: *status,
                body: body.to_string(),
            }),
            Some(Reply::Timeout) => Err(AppError::Io(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("timeout: {request}"),
            ))),
            None => Err(AppError::Backend {
                status: 404,
                body: format!("no stub for {request}"),
            }),
        }
    }
}
