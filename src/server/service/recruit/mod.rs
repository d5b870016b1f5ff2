//! Recruitment service layer.
//!
//! Implements the application workflow: submitting applications, the staff review view with
//! blacklist checks, status actions, the staff queue and reviewer comments.

pub mod application;
pub mod comment;
pub mod queue;

use crate::{
    model::recruit::{ApplicationDto, CommentDto},
    server::model::db::{ApplicationModel, CommentModel},
};

pub(crate) fn to_application_dto(model: ApplicationModel) -> ApplicationDto {
    ApplicationDto {
        id: model.id,
        user_id: model.user_id,
        main_character_name: model.main_character_name,
        status: model.status,
        how_long_playing: model.how_long_playing,
        play_style: model.play_style,
        find_out: model.find_out,
        thesis: model.thesis,
        reviewer_user_id: model.reviewer_user_id,
        last_user_id: model.last_user_id,
        hidden: model.hidden,
        training: model.training,
        created_at: model.created_at,
        last_action_at: model.last_action_at,
    }
}

pub(crate) fn to_comment_dto(model: CommentModel) -> CommentDto {
    CommentDto {
        id: model.id,
        application_id: model.application_id,
        user_id: model.user_id,
        comment: model.comment,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
