use recruit::server::controller::auth::get_user;

use super::*;

/// Expect 200 with the main character and role names of the logged in user
#[tokio::test]
async fn returns_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_roles(42, &["recruiter"])
        .await?;
    login(&test, user.id).await?;

    let result = get_user(State(test.app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    assert_eq!(body["id"], user.id);
    assert_eq!(body["character_id"], 42);
    assert_eq!(body["character_name"], "Character 42");
    assert_eq!(body["roles"], serde_json::json!(["recruiter"]));

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn unauthorized_without_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;

    let result = get_user(State(test.app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 500 when the user table is missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login(&test, 1).await?;

    let result = get_user(State(test.app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
