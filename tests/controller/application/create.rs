use recruit::{model::recruit::CreateApplicationDto, server::controller::application::create_application};
use sea_orm::EntityTrait;

use super::*;

fn answers(characters: Vec<i64>) -> CreateApplicationDto {
    CreateApplicationDto {
        characters,
        how_long_playing: "Since 2010".to_string(),
        play_style: "Fleet PvP".to_string(),
        find_out: "Reddit".to_string(),
        thesis: "Looking for a home".to_string(),
    }
}

/// Expect 201 with a New application linked to every listed character
#[tokio::test]
async fn creates_application_for_owned_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    test.eve().insert_character(2, "Alt", Some(user.id)).await?;
    login(&test, user.id).await?;

    let result = create_application(
        State(test.app_state()),
        test.session,
        Json(answers(vec![1, 2, 2])),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await?;
    assert_eq!(body["status"], "New");
    assert_eq!(body["main_character_name"], "Main");
    assert_eq!(body["user_id"], user.id);

    let linked = entity::prelude::HrApplicationCharacter::find()
        .all(&test.db)
        .await?;
    assert_eq!(linked.len(), 2);

    Ok(())
}

/// Expect 400 when a listed character belongs to someone else
#[tokio::test]
async fn rejects_foreign_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    test.user().insert_user_with_main(2, "Stranger").await?;
    login(&test, user.id).await?;

    let result = create_application(
        State(test.app_state()),
        test.session,
        Json(answers(vec![1, 2])),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let applications = entity::prelude::HrApplication::find().all(&test.db).await?;
    assert!(applications.is_empty());

    Ok(())
}

/// Expect 400 when no characters are listed
#[tokio::test]
async fn rejects_empty_character_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    login(&test, user.id).await?;

    let result = create_application(State(test.app_state()), test.session, Json(answers(vec![]))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when the user hasn't chosen a main character
#[tokio::test]
async fn requires_main_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let user = test.user().insert_user().await?;
    test.eve().insert_character(1, "Unlinked Main", Some(user.id)).await?;
    login(&test, user.id).await?;

    let result = create_application(State(test.app_state()), test.session, Json(answers(vec![1]))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
