use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::CommentModel;

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        application_id: i32,
        user_id: i32,
        comment: String,
    ) -> Result<CommentModel, DbErr> {
        entity::hr_application_comment::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            user_id: ActiveValue::Set(user_id),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, comment_id: i32) -> Result<Option<CommentModel>, DbErr> {
        entity::prelude::HrApplicationComment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// Comments on the application in the order they were written
    pub async fn get_for_application(
        &self,
        application_id: i32,
    ) -> Result<Vec<CommentModel>, DbErr> {
        entity::prelude::HrApplicationComment::find()
            .filter(entity::hr_application_comment::Column::ApplicationId.eq(application_id))
            .order_by_asc(entity::hr_application_comment::Column::CreatedAt)
            .order_by_asc(entity::hr_application_comment::Column::Id)
            .all(self.db)
            .await
    }

    /// IDs of applications the user has commented on
    pub async fn get_application_ids_commented_by(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::HrApplicationComment::find()
            .filter(entity::hr_application_comment::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|comment| comment.application_id)
            .collect())
    }

    pub async fn update_text(
        &self,
        comment: CommentModel,
        text: String,
    ) -> Result<CommentModel, DbErr> {
        let mut comment_am = comment.into_active_model();
        comment_am.comment = ActiveValue::Set(text);
        comment_am.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        comment_am.update(self.db).await
    }

    pub async fn delete(&self, comment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::HrApplicationComment::delete_by_id(comment_id)
            .exec(self.db)
            .await
    }
}
