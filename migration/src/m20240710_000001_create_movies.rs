use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movie::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movie::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Movie::Director).string_len(50).not_null())
                    .col(ColumnDef::new(Movie::Year).integer().not_null())
                    .col(ColumnDef::new(Movie::Duration).integer().not_null())
                    .col(ColumnDef::new(Movie::Genre).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Movie::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Movie::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Movie::Table)
                    .name("idx_movies_title")
                    .col(Movie::Title)
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Movie::Table)
                    .name("idx_movies_genre")
                    .col(Movie::Genre)
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Movie::Table)
                    .name("idx_movies_year")
                    .col(Movie::Year)
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Movie::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movie {
    #[sea_orm(iden = "movies")]
    Table,
    Id,
    Title,
    Director,
    Year,
    Duration,
    Genre,
    CreatedAt,
    UpdatedAt,
}
