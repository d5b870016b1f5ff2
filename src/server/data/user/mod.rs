pub mod role;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};

use crate::server::model::db::{EveCharacterModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user, optionally with a main character
    pub async fn create(&self, main_character_id: Option<i32>) -> Result<UserModel, DbErr> {
        let user = entity::recruit_user::ActiveModel {
            email: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            login_count: ActiveValue::Set(0),
            main_character_id: ActiveValue::Set(main_character_id),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user along with their main character if one is set
    pub async fn get(
        &self,
        user_id: i32,
    ) -> Result<Option<(UserModel, Option<EveCharacterModel>)>, DbErr> {
        entity::prelude::RecruitUser::find_by_id(user_id)
            .find_also_related(entity::eve_character::Entity)
            .one(self.db)
            .await
    }

    pub async fn get_model(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::RecruitUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Sets the user's main character, returns `None` if the user doesn't exist
    pub async fn set_main_character(
        &self,
        user_id: i32,
        main_character_id: Option<i32>,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get_model(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.main_character_id = ActiveValue::Set(main_character_id);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Rotates login metadata: the current login becomes the last login and the provided IP
    /// becomes the current login IP.
    pub async fn record_login(
        &self,
        user_id: i32,
        ip_address: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get_model(user_id).await? else {
            return Ok(None);
        };

        let login_count = user.login_count + 1;
        let last_login_at = user.current_login_at;
        let last_login_ip = user.current_login_ip.clone();

        let mut user_am = user.into_active_model();
        user_am.last_login_at = ActiveValue::Set(last_login_at);
        user_am.last_login_ip = ActiveValue::Set(last_login_ip);
        user_am.current_login_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        user_am.current_login_ip = ActiveValue::Set(Some(ip_address.to_string()));
        user_am.login_count = ActiveValue::Set(login_count);

        Ok(Some(user_am.update(self.db).await?))
    }
}
