//! Tests for staff comments on applications.

use recruit::{
    model::recruit::CommentTextDto,
    server::controller::comment::{create_comment, delete_comment, edit_comment},
};
use sea_orm::EntityTrait;

use super::*;

fn text(comment: &str) -> Json<CommentTextDto> {
    Json(CommentTextDto {
        comment: comment.to_string(),
    })
}

/// Expect 201 with the comment attributed to the reviewer
#[tokio::test]
async fn reviewer_comments_on_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    login(&test, reviewer.id).await?;

    let result = create_comment(
        State(test.app_state()),
        test.session,
        Path(application.id),
        text("  Solid killboard  "),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await?;
    assert_eq!(body["user_id"], reviewer.id);
    assert_eq!(body["application_id"], application.id);
    assert!(body["comment"]
        .as_str()
        .is_some_and(|comment| comment.contains("Solid killboard")));

    Ok(())
}

/// Expect 400 for a blank comment
#[tokio::test]
async fn rejects_blank_comment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    login(&test, reviewer.id).await?;

    let result = create_comment(
        State(test.app_state()),
        test.session,
        Path(application.id),
        text("   "),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 when the applicant comments on their own application
#[tokio::test]
async fn members_cannot_comment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    login(&test, applicant.id).await?;

    let result = create_comment(
        State(test.app_state()),
        test.session,
        Path(application.id),
        text("Please hurry"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the author to edit their comment
#[tokio::test]
async fn author_edits_comment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    let comment = test
        .recruit()
        .insert_comment(application.id, reviewer.id, "Frist")
        .await?;
    login(&test, reviewer.id).await?;

    let resp = edit_comment(
        State(test.app_state()),
        test.session,
        Path((application.id, comment.id)),
        text("First"),
    )
    .await
    .map_err(app_err)?
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::HrApplicationComment::find_by_id(comment.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_some());
    let stored = stored.unwrap();
    assert_eq!(stored.comment, "First");
    assert!(stored.updated_at.is_some());

    Ok(())
}

/// Expect 403 when another non-admin staff member edits the comment
#[tokio::test]
async fn other_staff_cannot_edit_comment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (author, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let (recruiter, _) = test.user().insert_user_with_roles(10, &["recruiter"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    let comment = test
        .recruit()
        .insert_comment(application.id, author.id, "Mine")
        .await?;
    login(&test, recruiter.id).await?;

    let result = edit_comment(
        State(test.app_state()),
        test.session,
        Path((application.id, comment.id)),
        text("Not yours"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect admins to delete any comment
#[tokio::test]
async fn admin_deletes_comment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (author, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let (admin, _) = test.user().insert_user_with_roles(10, &["admin"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    let comment = test
        .recruit()
        .insert_comment(application.id, author.id, "Off topic")
        .await?;
    login(&test, admin.id).await?;

    let resp = delete_comment(
        State(test.app_state()),
        test.session,
        Path((application.id, comment.id)),
    )
    .await
    .map_err(app_err)?
    .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::HrApplicationComment::find()
        .all(&test.db)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Expect 404 when the comment belongs to a different application
#[tokio::test]
async fn not_found_for_comment_on_other_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (admin, _) = test.user().insert_user_with_roles(9, &["admin"]).await?;
    let first = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    let second = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    let comment = test
        .recruit()
        .insert_comment(first.id, admin.id, "Note")
        .await?;
    login(&test, admin.id).await?;

    let result = delete_comment(
        State(test.app_state()),
        test.session,
        Path((second.id, comment.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
