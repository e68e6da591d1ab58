use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{AuthUser, Role},
    service::auth::AuthClient,
};

pub enum Permission {
    Admin,
    /// Satisfied by managers and admins.
    Manager,
}

/// Resolves the bearer token of a request and checks the caller's role.
pub struct AuthGuard<'a> {
    auth_client: &'a dyn AuthClient,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(auth_client: &'a dyn AuthClient, headers: &'a HeaderMap) -> Self {
        Self {
            auth_client,
            headers,
        }
    }

    /// Authorizes the caller and verifies every listed permission.
    ///
    /// An empty permission list only requires a valid token.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Caller holds all permissions
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Auth service did not accept the token
    /// - `Err(AuthError::AccessDenied)` - Caller's role is insufficient
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user = self.auth_client.authorize(token).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Operation requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Manager => {
                    if !matches!(user.role, Role::Manager | Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Operation requires the manager role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
