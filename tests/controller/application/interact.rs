use recruit::server::controller::application::interact;
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 with the new status and the recruiter recorded as reviewer
#[tokio::test]
async fn recruiter_approves_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "Pending")
        .await?;
    login(&test, recruiter.id).await?;

    let result = interact(
        State(test.app_state()),
        test.session,
        Path((application.id, "approve".to_string())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    assert_eq!(body["result"], "Approved");
    assert_eq!(body["message"], "Main's application Approved");

    let stored = entity::prelude::HrApplication::find_by_id(application.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_some());
    let stored = stored.unwrap();
    assert_eq!(stored.status, "Approved");
    assert_eq!(stored.reviewer_user_id, Some(recruiter.id));
    assert_eq!(stored.last_user_id, Some(recruiter.id));
    assert!(stored.last_action_at.is_some());

    Ok(())
}

/// Expect 403 when a reviewer tries to approve
#[tokio::test]
async fn reviewer_cannot_approve() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    login(&test, reviewer.id).await?;

    let result = interact(
        State(test.app_state()),
        test.session,
        Path((application.id, "approve".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the applicant to delete their own New application with its children
#[tokio::test]
async fn owner_deletes_new_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, main) = test.user().insert_user_with_main(1, "Main").await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    test.recruit().link_character(application.id, main.id).await?;
    test.recruit()
        .insert_comment(application.id, reviewer.id, "Note")
        .await?;
    login(&test, applicant.id).await?;

    let resp = interact(
        State(test.app_state()),
        test.session,
        Path((application.id, "delete".to_string())),
    )
    .await
    .map_err(app_err)?
    .into_response();

    let body = body_json(resp).await?;
    assert_eq!(body["result"], "deleted");

    assert!(entity::prelude::HrApplication::find().all(&test.db).await?.is_empty());
    assert!(entity::prelude::HrApplicationCharacter::find()
        .all(&test.db)
        .await?
        .is_empty());
    assert!(entity::prelude::HrApplicationComment::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Expect 403 when the applicant deletes an application already under review
#[tokio::test]
async fn owner_cannot_delete_pending_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "Pending")
        .await?;
    login(&test, applicant.id).await?;

    let result = interact(
        State(test.app_state()),
        test.session,
        Path((application.id, "delete".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for members acting on someone else's application
#[tokio::test]
async fn not_found_for_other_members() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (stranger, _) = test.user().insert_user_with_main(2, "Stranger").await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    login(&test, stranger.id).await?;

    let result = interact(
        State(test.app_state()),
        test.session,
        Path((application.id, "close".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect admins to hide an application without touching its status
#[tokio::test]
async fn admin_hides_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "Pending")
        .await?;
    login(&test, admin.id).await?;

    let resp = interact(
        State(test.app_state()),
        test.session,
        Path((application.id, "hide".to_string())),
    )
    .await
    .map_err(app_err)?
    .into_response();

    let body = body_json(resp).await?;
    assert_eq!(body["result"], "hidden");

    let stored = entity::prelude::HrApplication::find_by_id(application.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_some());
    let stored = stored.unwrap();
    assert!(stored.hidden);
    assert_eq!(stored.status, "Pending");

    Ok(())
}

/// Expect 400 for an unknown action
#[tokio::test]
async fn bad_request_on_unknown_action() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    let application = test
        .recruit()
        .insert_application(admin.id, "Character 9", "New")
        .await?;
    login(&test, admin.id).await?;

    let result = interact(
        State(test.app_state()),
        test.session,
        Path((application.id, "promote".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
