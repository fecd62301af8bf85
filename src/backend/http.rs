use super::{ApiRequest, Backend, Method};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;

/// Blocking HTTP implementation over `reqwest`.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &cfg.session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| AppError::Config(format!("invalid session_cookie: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.server_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Backend for HttpBackend {
    fn send(&self, request: &ApiRequest) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, request.url);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &url)
            .query(&request.query_pairs());
        if let Some(body) = &request.data {
            builder = builder.json(body);
        }

        tracing::debug!(%request, "sending backend request");
        let response = builder.send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            tracing::warn!(%request, status = status.as_u16(), "backend request failed");
            return Err(AppError::Backend {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
