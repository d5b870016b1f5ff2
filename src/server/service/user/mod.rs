//! User service layer.
//!
//! Loads the current user with main character and roles, and manages the characters and
//! API key pairs a user owns.

pub mod api_key;
pub mod character;

use std::str::FromStr;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{role::RoleRepository, UserRepository},
    error::Error,
    model::{role::RoleName, user::CurrentUser},
    service::retry::RetryContext,
};

/// Service for retrieving user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user with main character and roles.
    ///
    /// Role names unknown to the server are skipped with a warning.
    ///
    /// # Returns
    /// - `Ok(Some(CurrentUser))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<CurrentUser>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let Some((user, main_character)) = UserRepository::new(&db).get(user_id).await?
                else {
                    return Ok(None);
                };

                let roles = RoleRepository::new(&db)
                    .get_for_user(user_id)
                    .await?
                    .into_iter()
                    .filter_map(|role| match RoleName::from_str(&role.name) {
                        Ok(role) => Some(role),
                        Err(_) => {
                            tracing::warn!(
                                "Ignoring unknown role {:?} assigned to user ID {}",
                                role.name,
                                user_id
                            );
                            None
                        }
                    })
                    .collect();

                Ok(Some(CurrentUser {
                    user,
                    main_character,
                    roles,
                }))
            })
        })
        .await
    }
}
