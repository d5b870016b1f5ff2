use sea_orm::DatabaseConnection;

use crate::{
    model::admin::RoleDto,
    server::{
        data::user::{role::RoleRepository, UserRepository},
        error::{recruit::RecruitError, Error},
        model::{
            db::{RoleModel, UserModel},
            user::CurrentUser,
        },
    },
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_roles(&self, current: &CurrentUser) -> Result<Vec<RoleDto>, Error> {
        current.require_admin("list roles")?;

        Ok(RoleRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(to_role_dto)
            .collect())
    }

    /// Grants a role, returning the user's roles afterwards
    pub async fn assign_role(
        &self,
        current: &CurrentUser,
        user_id: i32,
        role_name: &str,
    ) -> Result<Vec<RoleDto>, Error> {
        current.require_admin("assign roles")?;
        let (user, role) = self.resolve(user_id, role_name).await?;

        let role_repo = RoleRepository::new(self.db);
        role_repo.assign(user.id, role.id).await?;

        self.user_roles(user.id).await
    }

    /// Revokes a role, returning the user's roles afterwards
    pub async fn remove_role(
        &self,
        current: &CurrentUser,
        user_id: i32,
        role_name: &str,
    ) -> Result<Vec<RoleDto>, Error> {
        current.require_admin("remove roles")?;
        let (user, role) = self.resolve(user_id, role_name).await?;

        RoleRepository::new(self.db).remove(user.id, role.id).await?;

        self.user_roles(user.id).await
    }

    async fn resolve(&self, user_id: i32, role_name: &str) -> Result<(UserModel, RoleModel), Error> {
        let Some(user) = UserRepository::new(self.db).get_model(user_id).await? else {
            return Err(RecruitError::UserNotFound(user_id).into());
        };

        let Some(role) = RoleRepository::new(self.db).get_by_name(role_name).await? else {
            return Err(RecruitError::RoleNotFound(role_name.to_string()).into());
        };

        Ok((user, role))
    }

    async fn user_roles(&self, user_id: i32) -> Result<Vec<RoleDto>, Error> {
        Ok(RoleRepository::new(self.db)
            .get_for_user(user_id)
            .await?
            .into_iter()
            .map(to_role_dto)
            .collect())
    }
}

fn to_role_dto(model: RoleModel) -> RoleDto {
    RoleDto {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}
