use recruit::{model::api::PageParams, server::controller::application::my_applications};

use super::*;

/// Expect 200 listing the user's visible applications, newest first
#[tokio::test]
async fn lists_own_visible_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;
    let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
    let (other, _) = test.user().insert_user_with_main(2, "Other").await?;
    let first = test.recruit().insert_application(user.id, "Main", "Rejected").await?;
    let second = test.recruit().insert_application(user.id, "Main", "New").await?;
    let hidden = test.recruit().insert_application(user.id, "Main", "New").await?;
    test.recruit().set_hidden(hidden.id, true).await?;
    test.recruit().insert_application(other.id, "Other", "New").await?;
    login(&test, user.id).await?;

    let result = my_applications(
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
    let ids: Vec<i64> = body["applications"]
        .as_array()
        .map(|applications| {
            applications
                .iter()
                .filter_map(|application| application["id"].as_i64())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(ids, vec![second.id as i64, first.id as i64]);

    Ok(())
}
