//! HTTP/JSON client for the external auth service.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::{
    error::auth::AuthError,
    model::auth::{AuthUser, LoginParams, RegisterParams, Role},
};

use super::AuthClient;

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Serialize)]
struct AuthorizeRequest<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct UpdateRoleRequest<'a> {
    username: &'a str,
    role: Role,
}

/// `AuthClient` talking to the auth service at `base_url`.
///
/// Endpoints, relative to the base URL:
/// - `POST register`, `POST login` - return `{"token": ...}`
/// - `POST authorize` - takes `{"token": ...}`, returns `{"id", "username", "role"}`
/// - `PUT users/role` - takes `{"username", "role"}`
#[derive(Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Reads a JSON body from a successful response, classifying failures otherwise.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(format!("unreadable response: {}", e)))
    }

    /// Server errors mean the service is unhealthy; client errors are a refusal.
    async fn status_error(response: Response) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request refused")
                .to_string()
        } else {
            body.trim().to_string()
        };

        if status.is_server_error() {
            AuthError::ServiceUnavailable(format!("{}: {}", status, message))
        } else {
            AuthError::Rejected(message)
        }
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn register(&self, params: RegisterParams) -> Result<String, AuthError> {
        let response = self
            .http
            .post(self.url("register"))
            .json(&params)
            .send()
            .await?;

        Ok(Self::read_json::<TokenResponse>(response).await?.token)
    }

    async fn login(&self, params: LoginParams) -> Result<String, AuthError> {
        let response = self
            .http
            .post(self.url("login"))
            .json(&params)
            .send()
            .await?;

        Ok(Self::read_json::<TokenResponse>(response).await?.token)
    }

    async fn authorize(&self, token: &str) -> Result<AuthUser, AuthError> {
        let response = self
            .http
            .post(self.url("authorize"))
            .json(&AuthorizeRequest { token })
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST => {
                Err(AuthError::InvalidToken)
            }
            _ => Self::read_json::<AuthUser>(response).await,
        }
    }

    async fn update_user_role(&self, username: &str, role: Role) -> Result<(), AuthError> {
        let response = self
            .http
            .put(self.url("users/role"))
            .json(&UpdateRoleRequest { username, role })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(())
    }
}
