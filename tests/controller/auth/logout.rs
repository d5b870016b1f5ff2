use recruit::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect 307 redirect to login with the user cleared from session
#[tokio::test]
async fn clears_session_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login(&test, 1).await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let maybe_user_id = SessionUserId::get(&test.session).await.map_err(app_err)?;
    assert!(maybe_user_id.is_none());

    Ok(())
}

/// Expect 307 redirect even when nobody is logged in
#[tokio::test]
async fn redirects_without_session_data() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
