use sea_orm_migration::{prelude::*, schema::*};

/// Roles every deployment starts with, paired with their descriptions
static DEFAULT_ROLES: [(&str, &str); 4] = [
    ("admin", "Full access including hiding and deleting applications"),
    ("recruiter", "Approves, rejects and closes applications"),
    ("reviewer", "Reviews and comments on applications"),
    ("training", "Recruiter in training, sees training applications first"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(string_uniq(Role::Name))
                    .col(string_null(Role::Description))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(Role::Table)
            .columns([Role::Name, Role::Description]);
        for (name, description) in DEFAULT_ROLES {
            insert.values_panic([name.into(), description.into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    Name,
    Description,
}
