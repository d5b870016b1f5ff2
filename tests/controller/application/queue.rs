use recruit::{model::recruit::QueueParams, server::controller::application::application_queue};

use super::*;

fn application_ids(body: &serde_json::Value) -> Vec<i64> {
    body["applications"]
        .as_array()
        .map(|applications| {
            applications
                .iter()
                .filter_map(|application| application["id"].as_i64())
                .collect()
        })
        .unwrap_or_default()
}

/// Expect the default filter to list visible applications that are still open
#[tokio::test]
async fn current_filter_lists_open_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    let open = test.recruit().insert_application(applicant.id, "Main", "New").await?;
    let pending = test
        .recruit()
        .insert_application(applicant.id, "Main", "Pending")
        .await?;
    test.recruit()
        .insert_application(applicant.id, "Main", "Approved")
        .await?;
    let hidden = test.recruit().insert_application(applicant.id, "Main", "New").await?;
    test.recruit().set_hidden(hidden.id, true).await?;
    login(&test, recruiter.id).await?;

    let result = application_queue(
        State(test.app_state()),
        test.session,
        Query(QueueParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.map_err(app_err)?.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    let mut ids = application_ids(&body);
    ids.sort_unstable();
    assert_eq!(ids, vec![open.id as i64, pending.id as i64]);

    Ok(())
}

/// Expect the mine filter to list only applications the caller worked on
#[tokio::test]
async fn mine_filter_lists_involved_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    let reviewed = test.recruit().insert_application(applicant.id, "Main", "New").await?;
    test.recruit().set_reviewer(reviewed.id, recruiter.id).await?;
    let commented = test.recruit().insert_application(applicant.id, "Main", "New").await?;
    test.recruit()
        .insert_comment(commented.id, recruiter.id, "Ping")
        .await?;
    test.recruit().insert_application(applicant.id, "Main", "New").await?;
    login(&test, recruiter.id).await?;

    let resp = application_queue(
        State(test.app_state()),
        test.session,
        Query(QueueParams {
            filter: Some(2),
            ..Default::default()
        }),
    )
    .await
    .map_err(app_err)?
    .into_response();

    let body = body_json(resp).await?;
    let mut ids = application_ids(&body);
    ids.sort_unstable();
    assert_eq!(ids, vec![reviewed.id as i64, commented.id as i64]);

    Ok(())
}

/// Expect search to match main character names case-insensitively, hidden included
#[tokio::test]
async fn search_matches_main_character_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (applicant, _) = test.user().insert_user_with_main(1, "Joe Pilot").await?;
    let (other, _) = test.user().insert_user_with_main(2, "Someone").await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    let matched = test
        .recruit()
        .insert_application(applicant.id, "Joe Pilot", "Closed")
        .await?;
    test.recruit().set_hidden(matched.id, true).await?;
    test.recruit()
        .insert_application(other.id, "Someone", "New")
        .await?;
    login(&test, recruiter.id).await?;

    let resp = application_queue(
        State(test.app_state()),
        test.session,
        Query(QueueParams {
            page: Some(3),
            filter: None,
            search: Some("joe".to_string()),
        }),
    )
    .await
    .map_err(app_err)?
    .into_response();

    let body = body_json(resp).await?;
    assert_eq!(body["page"], 1);
    assert_eq!(application_ids(&body), vec![matched.id as i64]);

    Ok(())
}

/// Expect 403 for members without a staff role
#[tokio::test]
async fn forbidden_for_members() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    login(&test, user.id).await?;

    let result = application_queue(
        State(test.app_state()),
        test.session,
        Query(QueueParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 for an unknown filter
#[tokio::test]
async fn bad_request_on_unknown_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (recruiter, _) = test.user().insert_user_with_roles(9, &["recruiter"]).await?;
    login(&test, recruiter.id).await?;

    let result = application_queue(
        State(test.app_state()),
        test.session,
        Query(QueueParams {
            filter: Some(7),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
