//! Tests for the internal blacklist endpoints.

use recruit::{
    model::{api::PageParams, blacklist::CreateBlacklistEntryDto},
    server::controller::blacklist::{add_entry, list_entries, remove_entry},
};
use sea_orm::EntityTrait;

use super::*;

/// Expect staff to list entries, newest first
#[tokio::test]
async fn staff_lists_entries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    test.blacklist().insert_entry("Old Spy", None).await?;
    test.blacklist()
        .insert_entry("New Spy", Some("10.1.2.3"))
        .await?;
    login(&test, reviewer.id).await?;

    let result = list_entries(
        State(test.app_state()),
        test.session,
        Query(PageParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["entries"][0]["name"], "New Spy");
    assert_eq!(body["entries"][1]["name"], "Old Spy");

    Ok(())
}

/// Expect 403 for members without a staff role
#[tokio::test]
async fn members_cannot_list_entries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    login(&test, user.id).await?;

    let result = list_entries(
        State(test.app_state()),
        test.session,
        Query(PageParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 201 with the creator recorded
#[tokio::test]
async fn staff_adds_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    login(&test, recruiter.id).await?;

    let result = add_entry(
        State(test.app_state()),
        test.session,
        Json(CreateBlacklistEntryDto {
            name: "Awoxer".to_string(),
            notes: Some("Shot a freighter".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await?;
    assert_eq!(body["name"], "Awoxer");
    assert_eq!(body["creator_id"], recruiter.id);

    Ok(())
}

/// Expect 400 when the character name is blank
#[tokio::test]
async fn rejects_entry_without_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    login(&test, recruiter.id).await?;

    let result = add_entry(
        State(test.app_state()),
        test.session,
        Json(CreateBlacklistEntryDto {
            name: " ".to_string(),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect only admins to remove entries
#[tokio::test]
async fn removal_is_admin_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    let (admin, _) = test.user().insert_user_with_roles(10, &["admin"]).await?;
    let entry = test.blacklist().insert_entry("Spy", None).await?;

    login(&test, recruiter.id).await?;
    let denied = remove_entry(State(test.app_state()), test.session.clone(), Path(entry.id)).await;
    assert!(denied.is_err());
    assert_eq!(
        denied.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    login(&test, admin.id).await?;
    let resp = remove_entry(State(test.app_state()), test.session.clone(), Path(entry.id))
        .await
        .map_err(app_err)?
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::BlacklistCharacter::find()
        .all(&test.db)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Expect 404 when removing a missing entry
#[tokio::test]
async fn not_found_for_missing_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    login(&test, admin.id).await?;

    let result = remove_entry(State(test.app_state()), test.session, Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
