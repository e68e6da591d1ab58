//! Domain models for identities resolved through the external auth service.

use serde::{Deserialize, Serialize};

use crate::model::auth::{LoginDto, RegisterDto, RoleDto};

/// Role assigned to a user by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Manager,
    Admin,
}

impl From<RoleDto> for Role {
    fn from(dto: RoleDto) -> Self {
        match dto {
            RoleDto::User => Role::User,
            RoleDto::Manager => Role::Manager,
            RoleDto::Admin => Role::Admin,
        }
    }
}

/// Identity of the caller as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Parameters for registering a new user with the auth service.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterParams {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

/// Credentials for logging in through the auth service.
#[derive(Debug, Clone, Serialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}
