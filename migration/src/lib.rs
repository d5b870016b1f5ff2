pub use sea_orm_migration::prelude::*;

mod m20251017_000001_recruit_user;
mod m20251017_000002_role;
mod m20251017_000003_recruit_user_role;
mod m20251017_000004_eve_alliance;
mod m20251017_000005_eve_corporation;
mod m20251017_000006_eve_api_key_pair;
mod m20251017_000007_eve_character;
mod m20251017_000008_eve_character_previous_user;
mod m20251017_000009_hr_application;
mod m20251017_000010_hr_application_character;
mod m20251017_000011_hr_application_comment;
mod m20251017_000012_blacklist_character;
mod m20251017_000013_blacklist_gsf;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_recruit_user::Migration),
            Box::new(m20251017_000002_role::Migration),
            Box::new(m20251017_000003_recruit_user_role::Migration),
            Box::new(m20251017_000004_eve_alliance::Migration),
            Box::new(m20251017_000005_eve_corporation::Migration),
            Box::new(m20251017_000006_eve_api_key_pair::Migration),
            Box::new(m20251017_000007_eve_character::Migration),
            Box::new(m20251017_000008_eve_character_previous_user::Migration),
            Box::new(m20251017_000009_hr_application::Migration),
            Box::new(m20251017_000010_hr_application_character::Migration),
            Box::new(m20251017_000011_hr_application_comment::Migration),
            Box::new(m20251017_000012_blacklist_character::Migration),
            Box::new(m20251017_000013_blacklist_gsf::Migration),
        ]
    }
}
