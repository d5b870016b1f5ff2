use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::RoleModel;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<RoleModel>, DbErr> {
        entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<RoleModel>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every role assigned to the user
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<RoleModel>, DbErr> {
        let role_ids: Vec<i32> = entity::prelude::RecruitUserRole::find()
            .filter(entity::recruit_user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user_role| user_role.role_id)
            .collect();

        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(role_ids))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    /// Assigns a role to a user
    ///
    /// Returns `false` without writing if the user already holds the role.
    pub async fn assign(&self, user_id: i32, role_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::RecruitUserRole::find_by_id((user_id, role_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::recruit_user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a role from a user
    ///
    /// Returns OK regardless of the assignment existing, check
    /// [`DeleteResult::rows_affected`] to confirm.
    pub async fn remove(&self, user_id: i32, role_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecruitUserRole::delete_by_id((user_id, role_id))
            .exec(self.db)
            .await
    }
}
