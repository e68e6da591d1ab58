//! Identity and authorization through the external auth service.
//!
//! Users, passwords and roles are owned by a separate service. This module defines the
//! `AuthClient` seam the rest of the application talks to, the HTTP implementation used
//! in production, and `AuthService`, which adds logging around the client calls.

pub mod http;

use async_trait::async_trait;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{AuthUser, LoginParams, RegisterParams, Role},
};

/// Operations offered by the external auth service.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Registers a user and returns an access token for them.
    async fn register(&self, params: RegisterParams) -> Result<String, AuthError>;

    /// Exchanges credentials for an access token.
    async fn login(&self, params: LoginParams) -> Result<String, AuthError>;

    /// Resolves an access token to the user it was issued for.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Token expired, malformed or unknown
    /// - `Err(AuthError::ServiceUnavailable | ReqwestErr)` - Service could not be reached
    async fn authorize(&self, token: &str) -> Result<AuthUser, AuthError>;

    /// Assigns a new role to the named user.
    async fn update_user_role(&self, username: &str, role: Role) -> Result<(), AuthError>;
}

pub struct AuthService<'a> {
    client: &'a dyn AuthClient,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a dyn AuthClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, params: RegisterParams) -> Result<String, AppError> {
        let username = params.username.clone();
        let token = self.client.register(params).await?;

        tracing::info!("Registered user '{}'", username);

        Ok(token)
    }

    pub async fn login(&self, params: LoginParams) -> Result<String, AppError> {
        let username = params.username.clone();

        self.client.login(params).await.map_err(|err| {
            tracing::warn!("Login failed for '{}': {}", username, err);
            err.into()
        })
    }

    /// Changes the role of a user; the caller must already be authorized as admin.
    pub async fn update_user_role(
        &self,
        admin: &AuthUser,
        username: &str,
        role: Role,
    ) -> Result<(), AppError> {
        self.client.update_user_role(username, role).await?;

        tracing::info!(
            "User '{}' set role of '{}' to {:?}",
            admin.username,
            username,
            role
        );

        Ok(())
    }
}
