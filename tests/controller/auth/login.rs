use recruit::server::{controller::auth::login, model::session::auth::SessionAuthCsrf};

use super::*;

/// Expect 307 redirect to EVE SSO with the CSRF state stored in session
#[tokio::test]
async fn redirects_to_sso_and_stores_csrf_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let state = SessionAuthCsrf::get(&test.session).await.map_err(app_err)?;
    assert!(!state.is_empty());
    assert!(location.contains(&state));

    Ok(())
}
