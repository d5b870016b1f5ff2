use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    data::page_index,
    model::{application::ApplicationStatus, db::ApplicationModel},
};

/// Answers to the application questions.
pub struct ApplicationAnswers {
    pub how_long_playing: String,
    pub play_style: String,
    pub find_out: String,
    pub thesis: String,
}

/// One page of applications together with the total page count.
pub struct ApplicationPage {
    pub applications: Vec<ApplicationModel>,
    pub total_pages: u64,
}

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a `New` application for the user
    pub async fn create(
        &self,
        user_id: i32,
        main_character_name: String,
        answers: ApplicationAnswers,
    ) -> Result<ApplicationModel, DbErr> {
        entity::hr_application::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            main_character_name: ActiveValue::Set(main_character_name),
            status: ActiveValue::Set(ApplicationStatus::New.to_string()),
            how_long_playing: ActiveValue::Set(answers.how_long_playing),
            play_style: ActiveValue::Set(answers.play_style),
            find_out: ActiveValue::Set(answers.find_out),
            thesis: ActiveValue::Set(answers.thesis),
            reviewer_user_id: ActiveValue::Set(None),
            last_user_id: ActiveValue::Set(None),
            hidden: ActiveValue::Set(false),
            training: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            last_action_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Links characters (by record ID) to the application
    pub async fn link_characters(
        &self,
        application_id: i32,
        character_ids: &[i32],
    ) -> Result<(), DbErr> {
        if character_ids.is_empty() {
            return Ok(());
        }

        let links = character_ids
            .iter()
            .map(|character_id| entity::hr_application_character::ActiveModel {
                application_id: ActiveValue::Set(application_id),
                character_id: ActiveValue::Set(*character_id),
            });

        entity::prelude::HrApplicationCharacter::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_id(&self, application_id: i32) -> Result<Option<ApplicationModel>, DbErr> {
        entity::prelude::HrApplication::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// Record IDs of the characters linked to the application
    pub async fn get_linked_character_ids(&self, application_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::HrApplicationCharacter::find()
            .filter(entity::hr_application_character::Column::ApplicationId.eq(application_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.character_id)
            .collect())
    }

    /// IDs of applications linked to any of the given characters
    pub async fn get_ids_linked_to_characters(
        &self,
        character_ids: Vec<i32>,
    ) -> Result<Vec<i32>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::HrApplicationCharacter::find()
            .filter(entity::hr_application_character::Column::CharacterId.is_in(character_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.application_id)
            .collect())
    }

    /// Other applications submitted by the same user, oldest first
    pub async fn get_related(
        &self,
        user_id: i32,
        exclude_application_id: i32,
    ) -> Result<Vec<ApplicationModel>, DbErr> {
        entity::prelude::HrApplication::find()
            .filter(entity::hr_application::Column::UserId.eq(user_id))
            .filter(entity::hr_application::Column::Id.ne(exclude_application_id))
            .order_by_asc(entity::hr_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Visible applications of the user, newest first
    pub async fn get_page_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<ApplicationPage, DbErr> {
        let select = entity::prelude::HrApplication::find()
            .filter(entity::hr_application::Column::Hidden.eq(false))
            .filter(entity::hr_application::Column::UserId.eq(user_id))
            .order_by_desc(entity::hr_application::Column::Id);

        self.paginate(select, page, per_page).await
    }

    /// Applications matching `condition`, optionally with training applications first
    pub async fn get_page_matching(
        &self,
        condition: Condition,
        training_first: bool,
        page: u64,
        per_page: u64,
    ) -> Result<ApplicationPage, DbErr> {
        let mut select = entity::prelude::HrApplication::find().filter(condition);

        if training_first {
            select = select.order_by_desc(entity::hr_application::Column::Training);
        }
        let select = select.order_by_asc(entity::hr_application::Column::Id);

        self.paginate(select, page, per_page).await
    }

    /// `page` is 1-based, page 0 is treated as the first page and pages past the end are empty
    async fn paginate(
        &self,
        select: Select<entity::hr_application::Entity>,
        page: u64,
        per_page: u64,
    ) -> Result<ApplicationPage, DbErr> {
        let paginator = select.paginate(self.db, per_page.max(1));
        let total_pages = paginator.num_pages().await?;
        let applications = paginator
            .fetch_page(page_index(page, total_pages))
            .await?;

        Ok(ApplicationPage {
            applications,
            total_pages,
        })
    }

    pub async fn update(
        &self,
        application: entity::hr_application::ActiveModel,
    ) -> Result<ApplicationModel, DbErr> {
        application.update(self.db).await
    }

    /// Deletes the application together with its character links and comments
    ///
    /// Run inside a transaction so a partial delete can't be observed.
    pub async fn delete_with_children(&self, application_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::HrApplicationComment::delete_many()
            .filter(entity::hr_application_comment::Column::ApplicationId.eq(application_id))
            .exec(self.db)
            .await?;

        entity::prelude::HrApplicationCharacter::delete_many()
            .filter(entity::hr_application_character::Column::ApplicationId.eq(application_id))
            .exec(self.db)
            .await?;

        entity::prelude::HrApplication::delete_by_id(application_id)
            .exec(self.db)
            .await
    }
}
