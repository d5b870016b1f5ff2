//! Recruitment fixtures: applications, linked characters and comments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ApplicationCharacterModel, ApplicationModel, CommentModel},
    TestContext,
};

impl TestContext {
    pub fn recruit(&self) -> RecruitFixtures<'_> {
        RecruitFixtures { context: self }
    }
}

pub struct RecruitFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> RecruitFixtures<'a> {
    /// Insert a visible application with placeholder answers
    pub async fn insert_application(
        &self,
        user_id: i32,
        main_character_name: &str,
        status: &str,
    ) -> Result<ApplicationModel, TestError> {
        Ok(
            entity::prelude::HrApplication::insert(entity::hr_application::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                main_character_name: ActiveValue::Set(main_character_name.to_string()),
                status: ActiveValue::Set(status.to_string()),
                how_long_playing: ActiveValue::Set("5 years".to_string()),
                play_style: ActiveValue::Set("PvP".to_string()),
                find_out: ActiveValue::Set("A friend".to_string()),
                thesis: ActiveValue::Set("I like spaceships".to_string()),
                reviewer_user_id: ActiveValue::Set(None),
                last_user_id: ActiveValue::Set(None),
                hidden: ActiveValue::Set(false),
                training: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                last_action_at: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn link_character(
        &self,
        application_id: i32,
        character_pk: i32,
    ) -> Result<ApplicationCharacterModel, TestError> {
        Ok(entity::prelude::HrApplicationCharacter::insert(
            entity::hr_application_character::ActiveModel {
                application_id: ActiveValue::Set(application_id),
                character_id: ActiveValue::Set(character_pk),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_comment(
        &self,
        application_id: i32,
        user_id: i32,
        comment: &str,
    ) -> Result<CommentModel, TestError> {
        Ok(entity::prelude::HrApplicationComment::insert(
            entity::hr_application_comment::ActiveModel {
                application_id: ActiveValue::Set(application_id),
                user_id: ActiveValue::Set(user_id),
                comment: ActiveValue::Set(comment.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn set_hidden(
        &self,
        application_id: i32,
        hidden: bool,
    ) -> Result<ApplicationModel, TestError> {
        self.update(entity::hr_application::ActiveModel {
            id: ActiveValue::Unchanged(application_id),
            hidden: ActiveValue::Set(hidden),
            ..Default::default()
        })
        .await
    }

    pub async fn set_training(
        &self,
        application_id: i32,
        training: bool,
    ) -> Result<ApplicationModel, TestError> {
        self.update(entity::hr_application::ActiveModel {
            id: ActiveValue::Unchanged(application_id),
            training: ActiveValue::Set(training),
            ..Default::default()
        })
        .await
    }

    pub async fn set_reviewer(
        &self,
        application_id: i32,
        reviewer_user_id: i32,
    ) -> Result<ApplicationModel, TestError> {
        self.update(entity::hr_application::ActiveModel {
            id: ActiveValue::Unchanged(application_id),
            reviewer_user_id: ActiveValue::Set(Some(reviewer_user_id)),
            ..Default::default()
        })
        .await
    }

    async fn update(
        &self,
        application: entity::hr_application::ActiveModel,
    ) -> Result<ApplicationModel, TestError> {
        Ok(application.update(&self.context.db).await?)
    }
}
