//! Validation of untyped JSON input into company drafts and patches.
//!
//! Every violated constraint is collected, so a single response can report all
//! bad fields at once. Unknown keys (including `id` and `created_at`) are ignored.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::ActiveValue;
use serde_json::{Map, Value};

use crate::company;
use crate::errors::{FieldError, ModelError};

pub const ISIN_LEN: usize = 12;

static CONTACT_NO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("contact_no pattern compiles"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

/// A single field in a partial update: left alone, or overwritten with a value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldPatch<T> {
    Unset,
    Set(T),
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        FieldPatch::Unset
    }
}

impl<T> FieldPatch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FieldPatch::Set(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldPatch::Set(v) => Some(v),
            FieldPatch::Unset => None,
        }
    }
}

impl<T: Into<sea_orm::Value>> FieldPatch<T> {
    fn write_to(self, slot: &mut ActiveValue<T>) {
        if let FieldPatch::Set(v) = self {
            *slot = ActiveValue::Set(v);
        }
    }
}

impl<T> FieldPatch<Option<T>> {
    fn flatten(self) -> Option<T> {
        match self {
            FieldPatch::Set(v) => v,
            FieldPatch::Unset => None,
        }
    }
}

/// Validated input for a new company row.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyDraft {
    pub company_name: String,
    pub isin_no: String,
    pub paid_up_capital: Option<String>,
    pub face_value: Option<f64>,
    pub no_of_shares: Option<i64>,
    pub shareholders_demat: Option<String>,
    pub shareholders_physical: Option<String>,
    pub contact_person: Option<String>,
    pub designation: Option<String>,
    pub company_address: Option<String>,
    pub cin: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub gstin: Option<String>,
    pub company_type: Option<String>,
    pub listing_status: Option<String>,
}

/// Validated partial update. Only `Set` fields are written.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CompanyPatch {
    pub company_name: FieldPatch<String>,
    pub isin_no: FieldPatch<String>,
    pub paid_up_capital: FieldPatch<Option<String>>,
    pub face_value: FieldPatch<Option<f64>>,
    pub no_of_shares: FieldPatch<Option<i64>>,
    pub shareholders_demat: FieldPatch<Option<String>>,
    pub shareholders_physical: FieldPatch<Option<String>>,
    pub contact_person: FieldPatch<Option<String>>,
    pub designation: FieldPatch<Option<String>>,
    pub company_address: FieldPatch<Option<String>>,
    pub cin: FieldPatch<Option<String>>,
    pub contact_no: FieldPatch<Option<String>>,
    pub email: FieldPatch<Option<String>>,
    pub gstin: FieldPatch<Option<String>>,
    pub company_type: FieldPatch<Option<String>>,
    pub listing_status: FieldPatch<Option<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Create,
    Patch,
}

struct Reader<'a> {
    input: &'a Map<String, Value>,
    mode: Mode,
    errors: Vec<FieldError>,
}

impl<'a> Reader<'a> {
    fn new(input: &'a Map<String, Value>, mode: Mode) -> Self {
        Self { input, mode, errors: Vec::new() }
    }

    fn fail(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    fn required_text(&mut self, field: &str) -> FieldPatch<String> {
        match self.input.get(field) {
            None if self.mode == Mode::Patch => FieldPatch::Unset,
            None => {
                self.fail(field, "field required");
                FieldPatch::Unset
            }
            Some(Value::Null) => {
                self.fail(field, "must not be null");
                FieldPatch::Unset
            }
            Some(Value::String(s)) => FieldPatch::Set(s.clone()),
            Some(_) => {
                self.fail(field, "must be a string");
                FieldPatch::Unset
            }
        }
    }

    fn optional_text(&mut self, field: &str) -> FieldPatch<Option<String>> {
        match self.input.get(field) {
            None => FieldPatch::Unset,
            Some(Value::Null) => FieldPatch::Set(None),
            Some(Value::String(s)) => FieldPatch::Set(Some(s.clone())),
            Some(_) => {
                self.fail(field, "must be a string");
                FieldPatch::Unset
            }
        }
    }

    fn optional_float(&mut self, field: &str) -> FieldPatch<Option<f64>> {
        match self.input.get(field) {
            None => FieldPatch::Unset,
            Some(Value::Null) => FieldPatch::Set(None),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) => FieldPatch::Set(Some(f)),
                None => {
                    self.fail(field, "must be a number");
                    FieldPatch::Unset
                }
            },
            Some(_) => {
                self.fail(field, "must be a number");
                FieldPatch::Unset
            }
        }
    }

    fn optional_integer(&mut self, field: &str) -> FieldPatch<Option<i64>> {
        match self.input.get(field) {
            None => FieldPatch::Unset,
            Some(Value::Null) => FieldPatch::Set(None),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => FieldPatch::Set(Some(i)),
                None => {
                    self.fail(field, "must be an integer");
                    FieldPatch::Unset
                }
            },
            Some(_) => {
                self.fail(field, "must be an integer");
                FieldPatch::Unset
            }
        }
    }

    fn check(&mut self, field: &str, value: Option<&str>, valid: impl Fn(&str) -> bool, message: &str) {
        if let Some(v) = value {
            if !valid(v) {
                self.fail(field, message);
            }
        }
    }
}

fn read_fields(input: &Map<String, Value>, mode: Mode) -> Result<CompanyPatch, ModelError> {
    let mut r = Reader::new(input, mode);
    let patch = CompanyPatch {
        company_name: r.required_text("company_name"),
        isin_no: r.required_text("isin_no"),
        paid_up_capital: r.optional_text("paid_up_capital"),
        face_value: r.optional_float("face_value"),
        no_of_shares: r.optional_integer("no_of_shares"),
        shareholders_demat: r.optional_text("shareholders_demat"),
        shareholders_physical: r.optional_text("shareholders_physical"),
        contact_person: r.optional_text("contact_person"),
        designation: r.optional_text("designation"),
        company_address: r.optional_text("company_address"),
        cin: r.optional_text("cin"),
        contact_no: r.optional_text("contact_no"),
        email: r.optional_text("email"),
        gstin: r.optional_text("gstin"),
        company_type: r.optional_text("company_type"),
        listing_status: r.optional_text("listing_status"),
    };

    r.check(
        "company_name",
        patch.company_name.as_set().map(String::as_str),
        |s| !s.trim().is_empty(),
        "must not be empty",
    );
    r.check(
        "isin_no",
        patch.isin_no.as_set().map(String::as_str),
        |s| s.chars().count() == ISIN_LEN,
        "must be exactly 12 characters",
    );
    r.check(
        "contact_no",
        patch.contact_no.as_set().and_then(|v| v.as_deref()),
        |s| CONTACT_NO.is_match(s),
        "must be exactly 10 digits",
    );
    r.check(
        "email",
        patch.email.as_set().and_then(|v| v.as_deref()),
        |s| EMAIL.is_match(s),
        "must be a valid email address",
    );

    if r.errors.is_empty() {
        Ok(patch)
    } else {
        Err(ModelError::Validation(r.errors))
    }
}

impl CompanyDraft {
    /// Validate a create payload. `company_name` and `isin_no` are required.
    pub fn from_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        let CompanyPatch {
            company_name,
            isin_no,
            paid_up_capital,
            face_value,
            no_of_shares,
            shareholders_demat,
            shareholders_physical,
            contact_person,
            designation,
            company_address,
            cin,
            contact_no,
            email,
            gstin,
            company_type,
            listing_status,
        } = read_fields(input, Mode::Create)?;

        // create mode reports missing required fields, so both are set here
        let (FieldPatch::Set(company_name), FieldPatch::Set(isin_no)) = (company_name, isin_no) else {
            return Err(ModelError::Validation(vec![FieldError::new("isin_no", "field required")]));
        };

        Ok(Self {
            company_name,
            isin_no,
            paid_up_capital: paid_up_capital.flatten(),
            face_value: face_value.flatten(),
            no_of_shares: no_of_shares.flatten(),
            shareholders_demat: shareholders_demat.flatten(),
            shareholders_physical: shareholders_physical.flatten(),
            contact_person: contact_person.flatten(),
            designation: designation.flatten(),
            company_address: company_address.flatten(),
            cin: cin.flatten(),
            contact_no: contact_no.flatten(),
            email: email.flatten(),
            gstin: gstin.flatten(),
            company_type: company_type.flatten(),
            listing_status: listing_status.flatten(),
        })
    }

    /// Row to insert. The id is left to the database; `created_at` is stamped now.
    pub fn into_active_model(self) -> company::ActiveModel {
        company::ActiveModel {
            id: ActiveValue::NotSet,
            company_name: ActiveValue::Set(self.company_name),
            paid_up_capital: ActiveValue::Set(self.paid_up_capital),
            face_value: ActiveValue::Set(self.face_value),
            no_of_shares: ActiveValue::Set(self.no_of_shares),
            shareholders_demat: ActiveValue::Set(self.shareholders_demat),
            shareholders_physical: ActiveValue::Set(self.shareholders_physical),
            contact_person: ActiveValue::Set(self.contact_person),
            designation: ActiveValue::Set(self.designation),
            company_address: ActiveValue::Set(self.company_address),
            cin: ActiveValue::Set(self.cin),
            contact_no: ActiveValue::Set(self.contact_no),
            email: ActiveValue::Set(self.email),
            gstin: ActiveValue::Set(self.gstin),
            company_type: ActiveValue::Set(self.company_type),
            listing_status: ActiveValue::Set(self.listing_status),
            isin_no: ActiveValue::Set(self.isin_no),
            created_at: ActiveValue::Set(Utc::now().into()),
        }
    }
}

impl CompanyPatch {
    /// Validate an update payload. Only fields present in `input` are checked.
    pub fn from_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        read_fields(input, Mode::Patch)
    }

    pub fn is_empty(&self) -> bool {
        !(self.company_name.is_set()
            || self.isin_no.is_set()
            || self.paid_up_capital.is_set()
            || self.face_value.is_set()
            || self.no_of_shares.is_set()
            || self.shareholders_demat.is_set()
            || self.shareholders_physical.is_set()
            || self.contact_person.is_set()
            || self.designation.is_set()
            || self.company_address.is_set()
            || self.cin.is_set()
            || self.contact_no.is_set()
            || self.email.is_set()
            || self.gstin.is_set()
            || self.company_type.is_set()
            || self.listing_status.is_set())
    }

    /// Write the set fields onto `am`. `id` and `created_at` are never touched.
    pub fn apply(self, am: &mut company::ActiveModel) {
        self.company_name.write_to(&mut am.company_name);
        self.isin_no.write_to(&mut am.isin_no);
        self.paid_up_capital.write_to(&mut am.paid_up_capital);
        self.face_value.write_to(&mut am.face_value);
        self.no_of_shares.write_to(&mut am.no_of_shares);
        self.shareholders_demat.write_to(&mut am.shareholders_demat);
        self.shareholders_physical.write_to(&mut am.shareholders_physical);
        self.contact_person.write_to(&mut am.contact_person);
        self.designation.write_to(&mut am.designation);
        self.company_address.write_to(&mut am.company_address);
        self.cin.write_to(&mut am.cin);
        self.contact_no.write_to(&mut am.contact_no);
        self.email.write_to(&mut am.email);
        self.gstin.write_to(&mut am.gstin);
        self.company_type.write_to(&mut am.company_type);
        self.listing_status.write_to(&mut am.listing_status);
    }
}
