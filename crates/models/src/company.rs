//! `company_details` entity: the one table of the record store.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
    pub paid_up_capital: Option<String>,
    pub face_value: Option<f64>,
    pub no_of_shares: Option<i64>,
    pub shareholders_demat: Option<String>,
    pub shareholders_physical: Option<String>,
    pub contact_person: Option<String>,
    pub designation: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub company_address: Option<String>,
    pub cin: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub gstin: Option<String>,
    pub company_type: Option<String>,
    pub listing_status: Option<String>,
    #[sea_orm(unique)]
    pub isin_no: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Spreadsheet column order. Business fields only, `id` is left out.
pub const EXPORT_COLUMNS: [Column; 17] = [
    Column::IsinNo,
    Column::CompanyName,
    Column::ContactPerson,
    Column::Email,
    Column::ListingStatus,
    Column::PaidUpCapital,
    Column::FaceValue,
    Column::NoOfShares,
    Column::ShareholdersDemat,
    Column::ShareholdersPhysical,
    Column::Designation,
    Column::CompanyAddress,
    Column::Cin,
    Column::ContactNo,
    Column::Gstin,
    Column::CompanyType,
    Column::CreatedAt,
];

/// Format used for `created_at` outside of JSON.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single exported value.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl From<Option<&String>> for CellValue {
    fn from(v: Option<&String>) -> Self {
        v.map_or(CellValue::Empty, |s| CellValue::Text(s.clone()))
    }
}

/// Integers beyond this lose precision as an f64 spreadsheet number.
pub const MAX_EXACT_NUMBER: i64 = 1 << 53;

/// Header text for a column, identical to the database column name.
pub fn column_name(column: Column) -> &'static str {
    match column {
        Column::Id => "id",
        Column::CompanyName => "company_name",
        Column::PaidUpCapital => "paid_up_capital",
        Column::FaceValue => "face_value",
        Column::NoOfShares => "no_of_shares",
        Column::ShareholdersDemat => "shareholders_demat",
        Column::ShareholdersPhysical => "shareholders_physical",
        Column::ContactPerson => "contact_person",
        Column::Designation => "designation",
        Column::CompanyAddress => "company_address",
        Column::Cin => "cin",
        Column::ContactNo => "contact_no",
        Column::Email => "email",
        Column::Gstin => "gstin",
        Column::CompanyType => "company_type",
        Column::ListingStatus => "listing_status",
        Column::IsinNo => "isin_no",
        Column::CreatedAt => "created_at",
    }
}

fn integer_cell(n: i64) -> CellValue {
    // 超出 2^53 的整数写成文本，避免精度丢失
    if (-MAX_EXACT_NUMBER..=MAX_EXACT_NUMBER).contains(&n) {
        CellValue::Number(n as f64)
    } else {
        CellValue::Text(n.to_string())
    }
}

impl Model {
    /// Value of one column, mapped by hand so export never depends on row layout.
    pub fn cell(&self, column: Column) -> CellValue {
        match column {
            Column::Id => CellValue::Number(f64::from(self.id)),
            Column::CompanyName => CellValue::Text(self.company_name.clone()),
            Column::PaidUpCapital => self.paid_up_capital.as_ref().into(),
            Column::FaceValue => self.face_value.map_or(CellValue::Empty, CellValue::Number),
            Column::NoOfShares => self.no_of_shares.map_or(CellValue::Empty, integer_cell),
            Column::ShareholdersDemat => self.shareholders_demat.as_ref().into(),
            Column::ShareholdersPhysical => self.shareholders_physical.as_ref().into(),
            Column::ContactPerson => self.contact_person.as_ref().into(),
            Column::Designation => self.designation.as_ref().into(),
            Column::CompanyAddress => self.company_address.as_ref().into(),
            Column::Cin => self.cin.as_ref().into(),
            Column::ContactNo => self.contact_no.as_ref().into(),
            Column::Email => self.email.as_ref().into(),
            Column::Gstin => self.gstin.as_ref().into(),
            Column::CompanyType => self.company_type.as_ref().into(),
            Column::ListingStatus => self.listing_status.as_ref().into(),
            Column::IsinNo => CellValue::Text(self.isin_no.clone()),
            Column::CreatedAt => CellValue::Text(self.created_at.format(CREATED_AT_FORMAT).to_string()),
        }
    }
}
