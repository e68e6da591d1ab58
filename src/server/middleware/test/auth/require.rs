use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let client = StubAuthClient::default().with_user("t", 1, Role::Admin);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&client, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an Authorization header with a non-bearer scheme.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let client = StubAuthClient::default().with_user("t", 1, Role::Admin);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dDp0"));

    let result = AuthGuard::new(&client, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token the auth service does not know.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let client = StubAuthClient::default().with_user("t", 1, Role::Admin);
    let headers = bearer("other");

    let result = AuthGuard::new(&client, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that any valid token passes when no permission is required.
///
/// Expected: Ok(AuthUser) for a plain user
#[tokio::test]
async fn valid_token_passes_without_permissions() -> Result<(), AppError> {
    let client = StubAuthClient::default().with_user("t", 5, Role::User);
    let headers = bearer("t");

    let user = AuthGuard::new(&client, &headers).require(&[]).await?;

    assert_eq!(user.id, 5);
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests the admin permission for an admin.
///
/// Expected: Ok(AuthUser)
#[tokio::test]
async fn admin_passes_admin_check() -> Result<(), AppError> {
    let client = StubAuthClient::default().with_user("t", 1, Role::Admin);
    let headers = bearer("t");

    let user = AuthGuard::new(&client, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests the admin permission for a manager.
///
/// Expected: Err(AccessDenied) carrying the user id
#[tokio::test]
async fn manager_fails_admin_check() -> Result<(), AppError> {
    let client = StubAuthClient::default().with_user("t", 9, Role::Manager);
    let headers = bearer("t");

    let result = AuthGuard::new(&client, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(9, _)))
    ));

    Ok(())
}

/// Tests the manager permission for managers, admins and plain users.
///
/// Expected: managers and admins pass, users are denied
#[tokio::test]
async fn manager_check_accepts_managers_and_admins() -> Result<(), AppError> {
    let client = StubAuthClient::default()
        .with_user("manager", 1, Role::Manager)
        .with_user("admin", 2, Role::Admin)
        .with_user("user", 3, Role::User);

    for token in ["manager", "admin"] {
        let headers = bearer(token);
        let result = AuthGuard::new(&client, &headers)
            .require(&[Permission::Manager])
            .await;
        assert!(result.is_ok(), "{} should pass", token);
    }

    let headers = bearer("user");
    let result = AuthGuard::new(&client, &headers)
        .require(&[Permission::Manager])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(3, _)))
    ));

    Ok(())
}

/// Tests an unreachable auth service.
///
/// Expected: Err(ServiceUnavailable)
#[tokio::test]
async fn propagates_service_failure() -> Result<(), AppError> {
    let client = StubAuthClient::unavailable();
    let headers = bearer("t");

    let result = AuthGuard::new(&client, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::ServiceUnavailable(_)))
    ));

    Ok(())
}
