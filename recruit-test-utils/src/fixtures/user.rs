//! User fixtures: users, main characters, roles and login metadata.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{EveCharacterModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user without a main character
    pub async fn insert_user(&self) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::RecruitUser::insert(entity::recruit_user::ActiveModel {
                email: ActiveValue::Set(None),
                active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                login_count: ActiveValue::Set(0),
                main_character_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a user owning a character that is set as their main
    pub async fn insert_user_with_main(
        &self,
        character_id: i64,
        name: &str,
    ) -> Result<(UserModel, EveCharacterModel), TestError> {
        let user = self.insert_user().await?;
        let character = self
            .context
            .eve()
            .insert_character(character_id, name, Some(user.id))
            .await?;

        let mut user: entity::recruit_user::ActiveModel = user.into();
        user.main_character_id = ActiveValue::Set(Some(character.id));
        let user = user.update(&self.context.db).await?;

        Ok((user, character))
    }

    /// Insert a user with main character `Character {character_id}` holding the given roles
    pub async fn insert_user_with_roles(
        &self,
        character_id: i64,
        roles: &[&str],
    ) -> Result<(UserModel, EveCharacterModel), TestError> {
        let (user, character) = self
            .insert_user_with_main(character_id, &format!("Character {}", character_id))
            .await?;

        for role in roles {
            self.grant_role(user.id, role).await?;
        }

        Ok((user, character))
    }

    /// Grant a seeded role by name
    pub async fn grant_role(&self, user_id: i32, role_name: &str) -> Result<(), TestError> {
        let Some(role) = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(role_name))
            .one(&self.context.db)
            .await?
        else {
            return Err(TestError::DbErr(sea_orm::DbErr::RecordNotFound(format!(
                "role {}",
                role_name
            ))));
        };

        entity::prelude::RecruitUserRole::insert(entity::recruit_user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role.id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    /// Overwrite the user's recorded login IPs
    pub async fn set_login_ips(
        &self,
        user_id: i32,
        last_login_ip: Option<&str>,
        current_login_ip: Option<&str>,
    ) -> Result<UserModel, TestError> {
        let user = entity::recruit_user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            last_login_ip: ActiveValue::Set(last_login_ip.map(str::to_string)),
            current_login_ip: ActiveValue::Set(current_login_ip.map(str::to_string)),
            ..Default::default()
        };

        Ok(user.update(&self.context.db).await?)
    }
}
