use sea_orm::DatabaseConnection;

use crate::{
    model::blacklist::{BlacklistEntryDto, BlacklistPageDto, CreateBlacklistEntryDto},
    server::{
        data::blacklist::character::BlacklistRepository,
        error::{blacklist::BlacklistError, Error},
        model::db::BlacklistCharacterModel,
    },
};

pub struct BlacklistEntryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistEntryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_entries(&self, page: u64, per_page: u64) -> Result<BlacklistPageDto, Error> {
        let page = page.max(1);
        let (entries, total_pages) = BlacklistRepository::new(self.db)
            .get_page(page, per_page)
            .await?;

        Ok(BlacklistPageDto {
            page,
            total_pages,
            entries: entries.into_iter().map(to_entry_dto).collect(),
        })
    }

    /// Adds an entry created by `creator_id`, the character name is required
    pub async fn add_entry(
        &self,
        creator_id: i32,
        entry: CreateBlacklistEntryDto,
    ) -> Result<BlacklistEntryDto, Error> {
        if entry.name.trim().is_empty() {
            return Err(BlacklistError::MissingName.into());
        }

        let model = BlacklistRepository::new(self.db)
            .create(Some(creator_id), entry)
            .await?;

        Ok(to_entry_dto(model))
    }

    pub async fn remove_entry(&self, entry_id: i32) -> Result<(), Error> {
        let result = BlacklistRepository::new(self.db).delete(entry_id).await?;

        if result.rows_affected == 0 {
            return Err(BlacklistError::EntryNotFound(entry_id).into());
        }

        Ok(())
    }
}

fn to_entry_dto(model: BlacklistCharacterModel) -> BlacklistEntryDto {
    BlacklistEntryDto {
        id: model.id,
        name: model.name,
        main_name: model.main_name,
        corporation: model.corporation,
        alliance: model.alliance,
        notes: model.notes,
        ip_address: model.ip_address,
        creator_id: model.creator_id,
        created_at: model.created_at,
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use recruit_test_utils::prelude::*;

    use crate::{
        model::blacklist::CreateBlacklistEntryDto,
        server::service::blacklist::entry::BlacklistEntryService,
    };

    /// Expect 400 for an entry without a name
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_recruit_tables().build().await?;
        let (user, _) = test.user().insert_user_with_main(1, "Main").await?;

        let result = BlacklistEntryService::new(&test.db)
            .add_entry(
                user.id,
                CreateBlacklistEntryDto {
                    name: "  ".into(),
                    ..Default::default()
                },
            )
            .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect entries newest first with the creator recorded
    #[tokio::test]
    async fn lists_newest_entries_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_recruit_tables().build().await?;
        let (user, _) = test.user().insert_user_with_main(1, "Main").await?;
        let entry_service = BlacklistEntryService::new(&test.db);

        for name in ["First", "Second"] {
            entry_service
                .add_entry(
                    user.id,
                    CreateBlacklistEntryDto {
                        name: name.into(),
                        ..Default::default()
                    },
                )
                .await?;
        }

        let page = entry_service.list_entries(1, 20).await?;

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.entries[0].name, "Second");
        assert_eq!(page.entries[1].creator_id, Some(user.id));

        Ok(())
    }

    /// Expect 404 when removing an entry that doesn't exist
    #[tokio::test]
    async fn remove_missing_entry_is_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_recruit_tables().build().await?;

        let result = BlacklistEntryService::new(&test.db).remove_entry(1).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
