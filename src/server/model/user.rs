//! The authenticated user a request acts on behalf of.

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{
            db::{EveCharacterModel, UserModel},
            role::RoleName,
        },
    },
};

/// A user loaded from the session together with main character and roles.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user: UserModel,
    pub main_character: Option<EveCharacterModel>,
    pub roles: Vec<RoleName>,
}

impl CurrentUser {
    pub fn id(&self) -> i32 {
        self.user.id
    }

    pub fn has_role(&self, role: RoleName) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[RoleName]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(RoleName::Admin)
    }

    /// Admins, recruiters and reviewers.
    pub fn is_staff(&self) -> bool {
        self.roles.iter().any(RoleName::is_staff)
    }

    /// Rejects users who aren't admins, recruiters or reviewers
    pub fn require_staff(&self, action: &str) -> Result<(), Error> {
        if !self.is_staff() {
            return Err(AuthError::denied(self.id(), action).into());
        }

        Ok(())
    }

    /// Rejects users without the admin role
    pub fn require_admin(&self, action: &str) -> Result<(), Error> {
        if !self.is_admin() {
            return Err(AuthError::denied(self.id(), action).into());
        }

        Ok(())
    }
}

impl From<CurrentUser> for UserDto {
    fn from(current: CurrentUser) -> Self {
        UserDto {
            id: current.user.id,
            character_id: current.main_character.as_ref().map(|c| c.character_id),
            character_name: current.main_character.map(|c| c.name),
            roles: current
                .roles
                .iter()
                .map(|role| role.as_str().to_string())
                .collect(),
        }
    }
}
