use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ISIN is the business key: unique across all rows
        manager
            .create_index(
                Index::create()
                    .name("uniq_company_isin_no")
                    .table(CompanyDetails::Table)
                    .col(CompanyDetails::IsinNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Listing is always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_company_created_at")
                    .table(CompanyDetails::Table)
                    .col(CompanyDetails::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_company_isin_no").table(CompanyDetails::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_company_created_at").table(CompanyDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyDetails { Table, IsinNo, CreatedAt }
