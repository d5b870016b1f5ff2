use std::collections::BTreeMap;

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel, TransactionTrait};

use crate::{
    model::recruit::{
        ApplicationActionDto, ApplicationDto, ApplicationPageDto, ApplicationReviewDto,
        ApplicationViewDto, CreateApplicationDto,
    },
    server::{
        data::{
            eve::character::CharacterRepository,
            recruit::{
                application::{ApplicationAnswers, ApplicationRepository},
                comment::CommentRepository,
            },
            user::UserRepository,
        },
        error::{auth::AuthError, recruit::RecruitError, Error},
        model::{
            application::{ApplicationAction, ApplicationStatus},
            db::{ApplicationModel, EveCharacterModel},
            user::CurrentUser,
        },
        service::{
            blacklist::{
                check::BlacklistCheckService,
                gsf::{GsfClient, GsfService},
            },
            recruit::{to_application_dto, to_comment_dto},
            user::character::to_character_dtos,
        },
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
    gsf_client: Option<&'a GsfClient>,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection, gsf_client: Option<&'a GsfClient>) -> Self {
        Self { db, gsf_client }
    }

    /// The user's own visible applications, newest first
    pub async fn get_my_applications(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<ApplicationPageDto, Error> {
        let page = page.max(1);
        let result = ApplicationRepository::new(self.db)
            .get_page_for_user(user_id, page, per_page)
            .await?;

        Ok(ApplicationPageDto {
            page,
            total_pages: result.total_pages,
            applications: result
                .applications
                .into_iter()
                .map(to_application_dto)
                .collect(),
        })
    }

    /// Submits a new application for the user's characters
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Application created with status `New`
    /// - `Err(AuthError::MainCharacterRequired)` - The user has no main character
    /// - `Err(RecruitError::NoCharactersSelected)` - No characters were listed
    /// - `Err(RecruitError::CharacterNotOwned)` - A listed character isn't owned by the user
    pub async fn create_application(
        &self,
        current: &CurrentUser,
        application: CreateApplicationDto,
    ) -> Result<ApplicationDto, Error> {
        let Some(main_character) = current.main_character.as_ref() else {
            return Err(AuthError::MainCharacterRequired.into());
        };

        let mut character_ids = application.characters;
        character_ids.sort_unstable();
        character_ids.dedup();

        if character_ids.is_empty() {
            return Err(RecruitError::NoCharactersSelected.into());
        }

        let txn = self.db.begin().await?;
        let application_repo = ApplicationRepository::new(&txn);

        let characters = CharacterRepository::new(&txn)
            .get_many_by_character_ids(&character_ids)
            .await?;

        for character_id in &character_ids {
            let owned = characters.iter().any(|character| {
                character.character_id == *character_id && character.user_id == Some(current.id())
            });

            if !owned {
                return Err(RecruitError::CharacterNotOwned(*character_id).into());
            }
        }

        let model = application_repo
            .create(
                current.id(),
                main_character.name.clone(),
                ApplicationAnswers {
                    how_long_playing: application.how_long_playing,
                    play_style: application.play_style,
                    find_out: application.find_out,
                    thesis: application.thesis,
                },
            )
            .await?;

        let linked: Vec<i32> = characters.iter().map(|character| character.id).collect();
        application_repo.link_characters(model.id, &linked).await?;

        txn.commit().await?;

        Ok(to_application_dto(model))
    }

    /// Shows an application to staff with the full review, or to its owner alone
    ///
    /// Anyone else gets `ApplicationNotFound` so application IDs can't be enumerated.
    pub async fn view_application(
        &self,
        current: &CurrentUser,
        application_id: i32,
    ) -> Result<ApplicationViewDto, Error> {
        let Some(application) = ApplicationRepository::new(self.db)
            .get_by_id(application_id)
            .await?
        else {
            return Err(RecruitError::ApplicationNotFound(application_id).into());
        };

        if current.is_staff() {
            let review = self.build_review(&application).await?;

            return Ok(ApplicationViewDto {
                application: to_application_dto(application),
                review: Some(review),
            });
        }

        if application.user_id == current.id() {
            return Ok(ApplicationViewDto {
                application: to_application_dto(application),
                review: None,
            });
        }

        Err(RecruitError::ApplicationNotFound(application_id).into())
    }

    async fn build_review(
        &self,
        application: &ApplicationModel,
    ) -> Result<ApplicationReviewDto, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let application_repo = ApplicationRepository::new(self.db);

        let Some(applicant) = UserRepository::new(self.db)
            .get_model(application.user_id)
            .await?
        else {
            return Err(RecruitError::UserNotFound(application.user_id).into());
        };

        let mut characters: Vec<EveCharacterModel> = character_repo
            .get_owned_by_user(application.user_id)
            .await?;
        characters.extend(
            character_repo
                .get_previously_owned_by_user(application.user_id)
                .await?,
        );

        let evewho: BTreeMap<String, String> = characters
            .iter()
            .map(|character| (character.name.clone(), character.name.replace(' ', "+")))
            .collect();

        let gsf_service = GsfService::new(self.db, self.gsf_client);
        let gsf_blacklist = gsf_service.get_statuses(&characters).await?;

        let gsf_checked = gsf_service.is_configured().then_some(gsf_blacklist.as_slice());
        let notices = BlacklistCheckService::new(self.db)
            .check_applicant(&applicant, &characters, gsf_checked)
            .await?;

        let related_applications = application_repo
            .get_related(application.user_id, application.id)
            .await?
            .into_iter()
            .map(to_application_dto)
            .collect();

        let comments = CommentRepository::new(self.db)
            .get_for_application(application.id)
            .await?
            .into_iter()
            .map(to_comment_dto)
            .collect();

        Ok(ApplicationReviewDto {
            characters: to_character_dtos(self.db, characters).await?,
            related_applications,
            comments,
            evewho,
            gsf_blacklist,
            notices,
        })
    }

    /// Performs a workflow action on an application
    ///
    /// # Returns
    /// - `Ok(ApplicationActionDto)` - The new status, or `hidden`, `unhidden`, `deleted`
    /// - `Err(AuthError::MainCharacterRequired)` - The actor has no main character
    /// - `Err(AuthError::AccessDenied)` - The actor's roles don't permit the action
    /// - `Err(RecruitError::ApplicationNotFound)` - Missing, or not visible to the actor
    pub async fn interact(
        &self,
        current: &CurrentUser,
        application_id: i32,
        action: ApplicationAction,
    ) -> Result<ApplicationActionDto, Error> {
        if current.main_character.is_none() {
            return Err(AuthError::MainCharacterRequired.into());
        }

        let application_repo = ApplicationRepository::new(self.db);

        let Some(application) = application_repo.get_by_id(application_id).await? else {
            return Err(RecruitError::ApplicationNotFound(application_id).into());
        };

        let is_owner = application.user_id == current.id();
        let permitted_as_staff = current.has_any_role(action.permitted_roles());
        let permitted_as_owner = is_owner
            && action == ApplicationAction::Delete
            && application.status == ApplicationStatus::New.as_str();

        if !permitted_as_staff && !permitted_as_owner {
            if !current.is_staff() && !is_owner {
                return Err(RecruitError::ApplicationNotFound(application_id).into());
            }

            tracing::debug!(
                "User ID {} denied {} on application ID {}",
                current.id(),
                action,
                application_id
            );

            return Err(AuthError::denied(current.id(), format!("{} applications", action)).into());
        }

        let main_character_name = application.main_character_name.clone();

        let result = match action {
            ApplicationAction::Delete => {
                let txn = self.db.begin().await?;
                ApplicationRepository::new(&txn)
                    .delete_with_children(application.id)
                    .await?;
                txn.commit().await?;

                "deleted".to_string()
            }
            ApplicationAction::Hide | ApplicationAction::Unhide => {
                let hidden = action == ApplicationAction::Hide;
                let mut application_am = application.into_active_model();
                application_am.hidden = ActiveValue::Set(hidden);
                application_am.last_user_id = ActiveValue::Set(Some(current.id()));
                application_am.last_action_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
                application_repo.update(application_am).await?;

                let result = if hidden { "hidden" } else { "unhidden" };
                result.to_string()
            }
            _ => {
                let Some(status) = action.target_status() else {
                    return Err(Error::InternalError(format!(
                        "action {} has no target status",
                        action
                    )));
                };

                let reviewer_user_id = application.reviewer_user_id.or(Some(current.id()));
                let mut application_am = application.into_active_model();
                application_am.status = ActiveValue::Set(status.to_string());
                application_am.reviewer_user_id = ActiveValue::Set(reviewer_user_id);
                application_am.last_user_id = ActiveValue::Set(Some(current.id()));
                application_am.last_action_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
                if action == ApplicationAction::Training {
                    application_am.training = ActiveValue::Set(true);
                }
                application_repo.update(application_am).await?;

                status.to_string()
            }
        };

        Ok(ApplicationActionDto {
            application_id,
            message: format!("{}'s application {}", main_character_name, result),
            result,
        })
    }
}
