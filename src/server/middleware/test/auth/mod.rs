use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::auth::{AuthUser, LoginParams, RegisterParams, Role},
    service::auth::AuthClient,
};

mod require;

/// In-process auth service that knows a fixed set of tokens.
#[derive(Default)]
struct StubAuthClient {
    users: HashMap<String, AuthUser>,
    unavailable: bool,
}

impl StubAuthClient {
    fn with_user(mut self, token: &str, id: i64, role: Role) -> Self {
        self.users.insert(
            token.to_string(),
            AuthUser {
                id,
                username: format!("user{}", id),
                role,
            },
        );
        self
    }

    fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl AuthClient for StubAuthClient {
    async fn register(&self, _params: RegisterParams) -> Result<String, AuthError> {
        Err(AuthError::Rejected("not supported".to_string()))
    }

    async fn login(&self, _params: LoginParams) -> Result<String, AuthError> {
        Err(AuthError::Rejected("not supported".to_string()))
    }

    async fn authorize(&self, token: &str) -> Result<AuthUser, AuthError> {
        if self.unavailable {
            return Err(AuthError::ServiceUnavailable("503".to_string()));
        }

        self.users.get(token).cloned().ok_or(AuthError::InvalidToken)
    }

    async fn update_user_role(&self, _username: &str, _role: Role) -> Result<(), AuthError> {
        Ok(())
    }
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
