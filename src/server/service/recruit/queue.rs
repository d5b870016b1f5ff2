use sea_orm::{sea_query::IntoCondition, ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::recruit::{ApplicationPageDto, QueueParams},
    server::{
        data::{
            contains_ignore_case,
            eve::character::CharacterRepository,
            recruit::{application::ApplicationRepository, comment::CommentRepository},
        },
        error::{auth::AuthError, Error},
        model::{
            application::{ApplicationStatus, QueueFilter},
            role::RoleName,
            user::CurrentUser,
        },
        service::recruit::to_application_dto,
    },
};

pub struct QueueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The staff application queue
    ///
    /// A non-empty search replaces the filter and always returns the first page. Users with the
    /// training role see training applications first.
    ///
    /// # Returns
    /// - `Ok(ApplicationPageDto)` - One page of the queue
    /// - `Err(AuthError::AccessDenied)` - The user isn't staff
    /// - `Err(RecruitError::UnknownQueueFilter)` - Filter is not 0, 1 or 2
    pub async fn get_queue(
        &self,
        current: &CurrentUser,
        params: QueueParams,
        per_page: u64,
    ) -> Result<ApplicationPageDto, Error> {
        if !current.is_staff() {
            return Err(AuthError::denied(current.id(), "view the application queue").into());
        }

        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty());

        let (condition, page) = match search {
            Some(search) => (self.search_condition(search).await?, 1),
            None => {
                let filter = QueueFilter::try_from(params.filter.unwrap_or_default())?;

                (
                    self.filter_condition(current, filter).await?,
                    params.page.unwrap_or(1).max(1),
                )
            }
        };

        let training_first = current.has_role(RoleName::Training);
        let result = ApplicationRepository::new(self.db)
            .get_page_matching(condition, training_first, page, per_page)
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

    async fn filter_condition(
        &self,
        current: &CurrentUser,
        filter: QueueFilter,
    ) -> Result<Condition, Error> {
        let visible = Condition::all().add(entity::hr_application::Column::Hidden.eq(false));

        let condition = match filter {
            QueueFilter::Current => visible.add(
                entity::hr_application::Column::Status.is_not_in(
                    ApplicationStatus::FINISHED
                        .iter()
                        .map(|status| status.as_str()),
                ),
            ),
            QueueFilter::All => visible,
            QueueFilter::Mine => {
                let commented = CommentRepository::new(self.db)
                    .get_application_ids_commented_by(current.id())
                    .await?;

                let mut involved = Condition::any()
                    .add(entity::hr_application::Column::ReviewerUserId.eq(current.id()))
                    .add(entity::hr_application::Column::LastUserId.eq(current.id()));
                if !commented.is_empty() {
                    involved = involved.add(entity::hr_application::Column::Id.is_in(commented));
                }

                visible.add(involved)
            }
        };

        Ok(condition)
    }

    /// Matches the main character name, the applicant's characters and the linked characters
    async fn search_condition(&self, search: &str) -> Result<Condition, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let owner_ids = character_repo.find_owner_ids_by_name(search).await?;
        let character_ids = character_repo.find_ids_by_name(search).await?;
        let linked_ids = ApplicationRepository::new(self.db)
            .get_ids_linked_to_characters(character_ids)
            .await?;

        let mut condition = Condition::any().add(
            contains_ignore_case(entity::hr_application::Column::MainCharacterName, search)
                .into_condition(),
        );
        if !owner_ids.is_empty() {
            condition = condition.add(entity::hr_application::Column::UserId.is_in(owner_ids));
        }
        if !linked_ids.is_empty() {
            condition = condition.add(entity::hr_application::Column::Id.is_in(linked_ids));
        }

        Ok(condition)
    }
}
