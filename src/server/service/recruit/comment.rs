use sea_orm::DatabaseConnection;

use crate::{
    model::recruit::CommentDto,
    server::{
        data::recruit::{application::ApplicationRepository, comment::CommentRepository},
        error::{auth::AuthError, recruit::RecruitError, Error},
        model::{db::CommentModel, user::CurrentUser},
        service::recruit::to_comment_dto,
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a staff comment to an application
    pub async fn create_comment(
        &self,
        current: &CurrentUser,
        application_id: i32,
        text: String,
    ) -> Result<CommentDto, Error> {
        if !current.is_staff() {
            return Err(AuthError::denied(current.id(), "comment on applications").into());
        }

        let text = validate_text(text)?;

        if ApplicationRepository::new(self.db)
            .get_by_id(application_id)
            .await?
            .is_none()
        {
            return Err(RecruitError::ApplicationNotFound(application_id).into());
        }

        let comment = CommentRepository::new(self.db)
            .create(application_id, current.id(), text)
            .await?;

        Ok(to_comment_dto(comment))
    }

    /// Replaces the text of a comment, allowed for its staff author and admins
    pub async fn edit_comment(
        &self,
        current: &CurrentUser,
        application_id: i32,
        comment_id: i32,
        text: String,
    ) -> Result<CommentDto, Error> {
        let comment = self
            .get_modifiable(current, application_id, comment_id, "edit comments")
            .await?;
        let text = validate_text(text)?;

        let comment = CommentRepository::new(self.db)
            .update_text(comment, text)
            .await?;

        Ok(to_comment_dto(comment))
    }

    /// Deletes a comment, allowed for its staff author and admins
    pub async fn delete_comment(
        &self,
        current: &CurrentUser,
        application_id: i32,
        comment_id: i32,
    ) -> Result<(), Error> {
        let comment = self
            .get_modifiable(current, application_id, comment_id, "delete comments")
            .await?;

        CommentRepository::new(self.db).delete(comment.id).await?;

        Ok(())
    }

    async fn get_modifiable(
        &self,
        current: &CurrentUser,
        application_id: i32,
        comment_id: i32,
        action: &str,
    ) -> Result<CommentModel, Error> {
        if !current.is_staff() {
            return Err(AuthError::denied(current.id(), action).into());
        }

        if ApplicationRepository::new(self.db)
            .get_by_id(application_id)
            .await?
            .is_none()
        {
            return Err(RecruitError::ApplicationNotFound(application_id).into());
        }

        let Some(comment) = CommentRepository::new(self.db)
            .get_by_id(comment_id)
            .await?
            .filter(|comment| comment.application_id == application_id)
        else {
            return Err(RecruitError::CommentNotFound {
                application_id,
                comment_id,
            }
            .into());
        };

        if comment.user_id != current.id() && !current.is_admin() {
            return Err(AuthError::denied(current.id(), action).into());
        }

        Ok(comment)
    }
}

fn validate_text(text: String) -> Result<String, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(RecruitError::EmptyComment.into());
    }

    Ok(text.to_string())
}
