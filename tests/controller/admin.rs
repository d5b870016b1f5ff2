//! Tests for role management and alliance/corporation records.

use recruit::{
    model::admin::{AllianceDto, CorporationDto},
    server::controller::admin::{
        assign_role, list_roles, remove_role, upsert_alliance, upsert_corporation,
    },
};
use sea_orm::EntityTrait;

use super::*;

fn alliance(name: &str) -> AllianceDto {
    AllianceDto {
        alliance_id: 99000001,
        name: name.to_string(),
        ticker: "ALLY".to_string(),
        executor_corporation_id: None,
        member_count: Some(100),
        is_blue: true,
    }
}

/// Expect admins to list every seeded role
#[tokio::test]
async fn admin_lists_roles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    login(&test, admin.id).await?;

    let resp = list_roles(State(test.app_state()), test.session)
        .await
        .map_err(app_err)?
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(4));

    Ok(())
}

/// Expect 403 for non-admin staff
#[tokio::test]
async fn recruiters_cannot_list_roles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    login(&test, recruiter.id).await?;

    let result = list_roles(State(test.app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a granted role to show up and disappear again once removed
#[tokio::test]
async fn grants_and_revokes_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    login(&test, admin.id).await?;

    let granted = assign_role(
        State(test.app_state()),
        test.session.clone(),
        Path((user.id, "reviewer".to_string())),
    )
    .await
    .map_err(app_err)?
    .into_response();
    let body = body_json(granted).await?;
    assert_eq!(body[0]["name"], "reviewer");

    let revoked = remove_role(
        State(test.app_state()),
        test.session,
        Path((user.id, "reviewer".to_string())),
    )
    .await
    .map_err(app_err)?
    .into_response();
    let body = body_json(revoked).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expect 404 for an unknown role name
#[tokio::test]
async fn not_found_for_unknown_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    login(&test, admin.id).await?;

    let result = assign_role(
        State(test.app_state()),
        test.session,
        Path((admin.id, "emperor".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect alliances to be updated in place by EVE ID and corporations to resolve them
#[tokio::test]
async fn upserts_alliance_and_corporation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    login(&test, admin.id).await?;

    upsert_alliance(
        State(test.app_state()),
        test.session.clone(),
        Json(alliance("Old Name")),
    )
    .await
    .map_err(app_err)?;
    let resp = upsert_alliance(
        State(test.app_state()),
        test.session.clone(),
        Json(alliance("New Name")),
    )
    .await
    .map_err(app_err)?
    .into_response();
    let body = body_json(resp).await?;
    assert_eq!(body["name"], "New Name");

    let alliances = entity::prelude::EveAlliance::find().all(&test.db).await?;
    assert_eq!(alliances.len(), 1);

    let resp = upsert_corporation(
        State(test.app_state()),
        test.session,
        Json(CorporationDto {
            corporation_id: 98000001,
            name: "Corp".to_string(),
            ticker: "CORP".to_string(),
            member_count: None,
            is_blue: false,
            alliance_id: Some(99000001),
        }),
    )
    .await
    .map_err(app_err)?
    .into_response();
    let body = body_json(resp).await?;
    assert_eq!(body["alliance_id"], 99000001);

    Ok(())
}

/// Expect 404 when the corporation's alliance isn't recorded
#[tokio::test]
async fn corporation_requires_known_alliance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    login(&test, admin.id).await?;

    let result = upsert_corporation(
        State(test.app_state()),
        test.session,
        Json(CorporationDto {
            corporation_id: 98000001,
            name: "Corp".to_string(),
            ticker: "CORP".to_string(),
            member_count: None,
            is_blue: false,
            alliance_id: Some(1),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
