use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by delete endpoints once the row is gone.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub ok: bool,
}

impl Confirmation {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
