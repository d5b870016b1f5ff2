use recruit::server::controller::application::view_application;

use super::*;

/// Expect 200 without the review section for the applicant
#[tokio::test]
async fn owner_sees_application_without_review() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    let application = test.recruit().insert_application(user.id, "Main", "New").await?;
    login(&test, user.id).await?;

    let result = view_application(State(test.app_state()), test.session, Path(application.id)).await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    assert_eq!(body["application"]["id"], application.id);
    assert!(body["review"].is_null());

    Ok(())
}

/// Expect 404 for a user who neither owns the application nor is staff
#[tokio::test]
async fn hidden_from_other_members() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (stranger, _) = test.user().insert_user_with_main(2, "Stranger").await?;
    let application = test.recruit().insert_application(user.id, "Main", "New").await?;
    login(&test, stranger.id).await?;

    let result = view_application(State(test.app_state()), test.session, Path(application.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect staff to get the review with GSF and internal blacklist notices
#[tokio::test]
async fn staff_review_reports_blacklist_hits() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recruit_tables()
        .with_gsf_endpoint(1, "BANNED", 1)
        .build()
        .await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    test.recruit()
        .insert_comment(application.id, reviewer.id, "Looks fine")
        .await?;
    test.blacklist().insert_entry("Main", None).await?;
    login(&test, reviewer.id).await?;

    let result = view_application(
        State(test.app_state_with_gsf()?),
        test.session.clone(),
        Path(application.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    let review = &body["review"];
    assert_eq!(review["gsf_blacklist"][0]["character_name"], "Main");
    assert_eq!(review["gsf_blacklist"][0]["status"], "BANNED");
    assert_eq!(review["comments"][0]["comment"], "Looks fine");
    assert_eq!(review["evewho"]["Main"], "Main");

    let messages: Vec<&str> = review["notices"]
        .as_array()
        .map(|notices| {
            notices
                .iter()
                .filter_map(|notice| notice["message"].as_str())
                .collect()
        })
        .unwrap_or_default();
    assert!(messages.contains(&"Check GSF blacklist results for character(s) Main"));
    assert!(messages.contains(&"Double check blacklist, [Main] matched"));
    test.assert_mocks();

    Ok(())
}

/// Expect the GSF lookup to be skipped when the status is already cached
#[tokio::test]
async fn staff_review_uses_cached_gsf_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recruit_tables()
        .with_gsf_endpoint(1, "BANNED", 0)
        .build()
        .await?;
    let (applicant, main) = test.user().insert_user_with_main(1, "Main").await?;
    let (reviewer, _) = test.user().insert_user_with_roles(9, &["reviewer"]).await?;
    let application = test
        .recruit()
        .insert_application(applicant.id, "Main", "New")
        .await?;
    test.blacklist()
        .insert_gsf_status(main.id, "NOT FOUND", chrono::Utc::now().naive_utc())
        .await?;
    login(&test, reviewer.id).await?;

    let resp = view_application(
        State(test.app_state_with_gsf()?),
        test.session.clone(),
        Path(application.id),
    )
    .await
    .map_err(app_err)?
    .into_response();

    let body = body_json(resp).await?;
    assert_eq!(body["review"]["gsf_blacklist"][0]["status"], "NOT FOUND");
    assert_eq!(
        body["review"]["notices"][0]["message"],
        "All blacklists are clean."
    );
    test.assert_mocks();

    Ok(())
}
