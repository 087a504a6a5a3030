//! Create `company_details` table.
//! One row per company, keyed by an auto-increment id and the 12-character ISIN.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(CompanyDetails::Id))
                    .col(string_len(CompanyDetails::CompanyName, 255).not_null())
                    .col(string_len_null(CompanyDetails::PaidUpCapital, 100))
                    .col(double_null(CompanyDetails::FaceValue))
                    .col(big_integer_null(CompanyDetails::NoOfShares))
                    .col(string_len_null(CompanyDetails::ShareholdersDemat, 100))
                    .col(string_len_null(CompanyDetails::ShareholdersPhysical, 100))
                    .col(string_len_null(CompanyDetails::ContactPerson, 100))
                    .col(string_len_null(CompanyDetails::Designation, 100))
                    .col(text_null(CompanyDetails::CompanyAddress))
                    .col(string_len_null(CompanyDetails::Cin, 100))
                    .col(string_len_null(CompanyDetails::ContactNo, 20))
                    .col(string_len_null(CompanyDetails::Email, 150))
                    .col(string_len_null(CompanyDetails::Gstin, 50))
                    .col(string_len_null(CompanyDetails::CompanyType, 100))
                    .col(string_len_null(CompanyDetails::ListingStatus, 100))
                    .col(string_len(CompanyDetails::IsinNo, 12).not_null())
                    .col(
                        timestamp_with_time_zone(CompanyDetails::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyDetails::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyDetails {
    Table,
    Id,
    CompanyName,
    PaidUpCapital,
    FaceValue,
    NoOfShares,
    ShareholdersDemat,
    ShareholdersPhysical,
    ContactPerson,
    Designation,
    CompanyAddress,
    Cin,
    ContactNo,
    Email,
    Gstin,
    CompanyType,
    ListingStatus,
    IsinNo,
    CreatedAt,
}
