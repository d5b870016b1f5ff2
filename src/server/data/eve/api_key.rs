use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::EveApiKeyPairModel;

pub struct ApiKeyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApiKeyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers an API key pair for the user, unverified until validated
    pub async fn create(
        &self,
        user_id: i32,
        api_id: i64,
        api_key: String,
    ) -> Result<EveApiKeyPairModel, DbErr> {
        entity::eve_api_key_pair::ActiveModel {
            api_id: ActiveValue::Set(api_id),
            api_key: ActiveValue::Set(api_key),
            user_id: ActiveValue::Set(Some(user_id)),
            valid: ActiveValue::Set(false),
            last_update_time: ActiveValue::Set(None),
            last_scraped_time: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_api_id(&self, api_id: i64) -> Result<Option<EveApiKeyPairModel>, DbErr> {
        entity::prelude::EveApiKeyPair::find()
            .filter(entity::eve_api_key_pair::Column::ApiId.eq(api_id))
            .one(self.db)
            .await
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<EveApiKeyPairModel>, DbErr> {
        entity::prelude::EveApiKeyPair::find()
            .filter(entity::eve_api_key_pair::Column::UserId.eq(user_id))
            .order_by_asc(entity::eve_api_key_pair::Column::ApiId)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::EveApiKeyPair::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
