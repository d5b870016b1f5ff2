//! Tests for the current user's characters, main character and API keys.

use recruit::{
    model::user::AddApiKeyDto,
    server::controller::user::{
        add_api_key, get_user_characters, list_api_keys, remove_api_key, set_main_character,
    },
};
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 listing only the logged in user's characters
#[tokio::test]
async fn lists_own_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    test.eve().insert_character(2, "Alt", Some(user.id)).await?;
    test.user().insert_user_with_main(3, "Stranger").await?;
    login(&test, user.id).await?;

    let result = get_user_characters(State(test.app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    let names: Vec<&str> = body
        .as_array()
        .map(|characters| {
            characters
                .iter()
                .filter_map(|character| character["name"].as_str())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Main"));
    assert!(names.contains(&"Alt"));

    Ok(())
}

/// Expect 401 and no lookup when nobody is logged in
#[tokio::test]
async fn characters_require_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;

    let result = get_user_characters(State(test.app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 and the main character switched to an owned alt
#[tokio::test]
async fn sets_owned_character_as_main() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    let alt = test.eve().insert_character(2, "Alt", Some(user.id)).await?;
    login(&test, user.id).await?;

    let result = set_main_character(State(test.app_state()), test.session, Path(2)).await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user = entity::prelude::RecruitUser::find_by_id(user.id)
        .one(&test.db)
        .await?;
    assert_eq!(user.and_then(|user| user.main_character_id), Some(alt.id));

    Ok(())
}

/// Expect 400 when choosing another user's character as main
#[tokio::test]
async fn rejects_foreign_main_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    test.user().insert_user_with_main(2, "Stranger").await?;
    login(&test, user.id).await?;

    let result = set_main_character(State(test.app_state()), test.session, Path(2)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect API keys to be added, listed and removed for their owner
#[tokio::test]
async fn manages_api_keys() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    login(&test, user.id).await?;

    let added = add_api_key(
        State(test.app_state()),
        test.session.clone(),
        Json(AddApiKeyDto {
            api_id: 1234,
            api_key: "secret".to_string(),
            character_ids: Vec::new(),
        }),
    )
    .await
    .map_err(app_err)?
    .into_response();
    assert_eq!(added.status(), StatusCode::CREATED);

    let listed = list_api_keys(State(test.app_state()), test.session.clone())
        .await
        .map_err(app_err)?
        .into_response();
    let body = body_json(listed).await?;
    assert_eq!(body[0]["api_id"], 1234);
    assert_eq!(body[0]["valid"], false);

    let removed = remove_api_key(State(test.app_state()), test.session.clone(), Path(1234))
        .await
        .map_err(app_err)?
        .into_response();
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::EveApiKeyPair::find().all(&test.db).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Expect 409 when the API ID is already registered
#[tokio::test]
async fn conflict_on_duplicate_api_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (owner, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (user, _) = test.user().insert_user_with_main(2, "Other").await?;
    test.eve().insert_api_key(owner.id, 1234).await?;
    login(&test, user.id).await?;

    let result = add_api_key(
        State(test.app_state()),
        test.session,
        Json(AddApiKeyDto {
            api_id: 1234,
            api_key: "secret".to_string(),
            character_ids: Vec::new(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when removing another user's API key
#[tokio::test]
async fn cannot_remove_foreign_api_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (owner, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (user, _) = test.user().insert_user_with_main(2, "Other").await?;
    test.eve().insert_api_key(owner.id, 1234).await?;
    login(&test, user.id).await?;

    let result = remove_api_key(State(test.app_state()), test.session, Path(1234)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
