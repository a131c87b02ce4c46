//! Executes [`ApiCall`]s against the backend with `gloo-net`.
//!
//! Non-2xx responses are turned into [`ApiError::Status`] carrying the
//! backend's JSON error body when it sent one. Every failure is logged to the
//! browser console before it is handed back to the caller.

use common::api::{ApiCall, ApiError, Method};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::api_base_url;

async fn send(call: &ApiCall) -> Result<Response, ApiError> {
    let url = call.url(&api_base_url());
    let builder = match call.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };

    let request = match call.body() {
        Some(body) => builder.json(&body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    gloo_console::log!(format!("{} {}", call.method(), url));
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let raw_body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &raw_body))
}

fn logged<T>(call: &ApiCall, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        gloo_console::error!(format!("{} failed: {}", call, err));
    }
    result
}

/// Issues `call` and decodes the JSON response body.
pub async fn fetch_json<T: DeserializeOwned>(call: &ApiCall) -> Result<T, ApiError> {
    let result = match send(call).await {
        Ok(response) => response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        Err(err) => Err(err),
    };
    logged(call, result)
}

/// Issues `call` and discards the response body.
pub async fn execute(call: &ApiCall) -> Result<(), ApiError> {
    logged(call, send(call).await.map(|_| ()))
}
