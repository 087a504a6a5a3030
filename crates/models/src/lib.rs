pub mod errors;
pub mod db;
pub mod company;
pub mod validation;

pub use validation::{CompanyDraft, CompanyPatch, FieldPatch};
