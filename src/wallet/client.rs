//! HTTP client for the wallet service.
//!
//! This module wraps `reqwest` with the base URL, optional bearer token, and
//! response status handling used by every wallet request.

use super::error::WalletError;
use log::*;
use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

/// Body sent to create a new member account.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub membership_type: &'a str,
}

/// Error body returned by the wallet service.
///
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Makes requests to the wallet service.
///
pub struct Client {
    base_url: String,
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and optional API key.
    ///
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self, WalletError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.map(str::to_owned),
            http_client: reqwest::Client::builder().build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Succeed if the service reports itself healthy.
    ///
    pub async fn health(&self) -> Result<(), WalletError> {
        let response = self.request(Method::GET, "health").send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Create a member account.
    ///
    pub async fn create_member(&self, member: &NewMember<'_>) -> Result<(), WalletError> {
        let response = self
            .request(Method::POST, "members")
            .json(member)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);
        let builder = self.http_client.request(method, url);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Turn non-success responses into errors carrying the service message.
    ///
    async fn check(response: Response) -> Result<Response, WalletError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unable to read response"));
        error!(
            "Wallet request failed with status {}: {}",
            status, text
        );
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message);
        Err(WalletError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
