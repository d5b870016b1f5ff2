use sea_orm::DatabaseConnection;

use crate::{
    model::admin::{AllianceDto, CorporationDto},
    server::{
        data::eve::{alliance::AllianceRepository, corporation::CorporationRepository},
        error::{recruit::RecruitError, Error},
        model::user::CurrentUser,
    },
};

/// Maintains alliance and corporation records
pub struct EveEntityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EveEntityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn upsert_alliance(
        &self,
        current: &CurrentUser,
        alliance: AllianceDto,
    ) -> Result<AllianceDto, Error> {
        current.require_admin("manage alliances")?;

        let model = AllianceRepository::new(self.db)
            .upsert(
                alliance.alliance_id,
                alliance.name,
                alliance.ticker,
                alliance.executor_corporation_id,
                alliance.member_count,
                alliance.is_blue,
            )
            .await?;

        Ok(AllianceDto {
            alliance_id: model.alliance_id,
            name: model.name,
            ticker: model.ticker,
            executor_corporation_id: model.executor_corporation_id,
            member_count: model.member_count,
            is_blue: model.is_blue,
        })
    }

    /// Creates or updates a corporation, its alliance must already be recorded
    pub async fn upsert_corporation(
        &self,
        current: &CurrentUser,
        corporation: CorporationDto,
    ) -> Result<CorporationDto, Error> {
        current.require_admin("manage corporations")?;

        let alliance_pk = match corporation.alliance_id {
            Some(alliance_id) => match AllianceRepository::new(self.db)
                .get_by_alliance_id(alliance_id)
                .await?
            {
                Some(alliance) => Some(alliance.id),
                None => return Err(RecruitError::AllianceNotFound(alliance_id).into()),
            },
            None => None,
        };

        let model = CorporationRepository::new(self.db)
            .upsert(
                corporation.corporation_id,
                corporation.name,
                corporation.ticker,
                corporation.member_count,
                corporation.is_blue,
                alliance_pk,
            )
            .await?;

        Ok(CorporationDto {
            corporation_id: model.corporation_id,
            name: model.name,
            ticker: model.ticker,
            member_count: model.member_count,
            is_blue: model.is_blue,
            alliance_id: corporation.alliance_id,
        })
    }
}
