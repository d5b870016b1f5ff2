use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{HeaderMap, HeaderValue},
};
use recruit::server::{
    controller::auth::{callback, CallbackParams},
    data::user::UserRepository,
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};
use recruit_test_utils::constant::TEST_OWNER_HASH;

use super::*;

fn peer() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([10, 0, 0, 7], 40000)))
}

async fn params(test: &TestContext, state: &str) -> Result<CallbackParams, TestError> {
    SessionAuthCsrf::insert(&test.session, "state")
        .await
        .map_err(app_err)?;

    Ok(CallbackParams {
        state: state.to_string(),
        code: "code".to_string(),
    })
}

/// Expect 307 redirect with a new user logged in for an unknown character
#[tokio::test]
async fn logs_in_new_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recruit_tables()
        .with_jwt_endpoints(95465499, TEST_OWNER_HASH)
        .build()
        .await?;
    let params = params(&test, "state").await?;

    let result = callback(
        State(test.app_state()),
        peer(),
        HeaderMap::new(),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let user_id = SessionUserId::get(&test.session).await.map_err(app_err)?;
    assert!(user_id.is_some());

    let user = UserRepository::new(&test.db)
        .get_model(user_id.unwrap_or_default())
        .await?;
    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.login_count, 1);
    assert_eq!(user.current_login_ip.as_deref(), Some("10.0.0.7"));
    test.assert_mocks();

    Ok(())
}

/// Expect the forwarded client IP to be recorded instead of the proxy address
#[tokio::test]
async fn records_forwarded_ip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recruit_tables()
        .with_jwt_endpoints(95465499, TEST_OWNER_HASH)
        .build()
        .await?;
    let params = params(&test, "state").await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        "x-forwarded-for",
        "203.0.113.9, 10.0.0.1"
            .parse::<HeaderValue>()
            .map_err(|e| TestError::Other(Box::new(e)))?,
    );

    let result = callback(
        State(test.app_state()),
        peer(),
        headers,
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_ok());

    let user_id = SessionUserId::get(&test.session)
        .await
        .map_err(app_err)?
        .unwrap_or_default();
    let user = UserRepository::new(&test.db).get_model(user_id).await?;
    assert_eq!(
        user.and_then(|user| user.current_login_ip).as_deref(),
        Some("203.0.113.9")
    );

    Ok(())
}

/// Expect 400 when the CSRF state doesn't match
#[tokio::test]
async fn bad_request_on_csrf_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let params = params(&test, "incorrect_state").await?;

    let result = callback(
        State(test.app_state()),
        peer(),
        HeaderMap::new(),
        test.session,
        Query(params),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the token exchange fails
#[tokio::test]
async fn error_when_token_exchange_fails() -> Result<(), TestError> {
    // No JWT endpoints are mocked so the token request fails
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let params = params(&test, "state").await?;

    let result = callback(
        State(test.app_state()),
        peer(),
        HeaderMap::new(),
        test.session,
        Query(params),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
