//! Access to the REST backend.
//!
//! Pages talk to the backend only through [`Backend::send`], so the HTTP
//! client can be swapped for [`mock::MockBackend`] in tests.

pub mod http;
pub mod mock;

use crate::errors::AppResult;
use crate::models::Record;
use serde_json::Value;
use std::fmt;

pub use http::HttpBackend;
pub use mock::MockBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// One backend call: path, query parameters and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub params: Record,
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Record::new(),
            data: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name, value);
        self
    }

    pub fn params(mut self, params: Record) -> Self {
        self.params = params;
        self
    }

    pub fn data(mut self, body: Value) -> Self {
        self.data = Some(body);
        self
    }

    /// Query string pairs with every value rendered as text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .fields()
            .filter_map(|(k, _)| self.params.text(k).map(|v| (k.clone(), v)))
            .collect()
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)?;
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            let qs: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, "?{}", qs.join("&"))?;
        }
        Ok(())
    }
}

pub trait Backend {
    /// Perform the request and return the decoded JSON body (`Null` when
    /// the body is empty). Non-2xx statuses are errors.
    fn send(&self, request: &ApiRequest) -> AppResult<Value>;
}
