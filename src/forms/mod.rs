// Form decoding and validation, pure and side-effect-free.

pub mod barangay;
pub mod item;

pub use barangay::{BarangayForm, NewBarangay};
pub use item::{ItemForm, NewItem};

use std::collections::BTreeMap;

use serde::Serialize;

/// Per-field validation errors, keyed by form field name. Each field gets
/// its own entry so the caller can redisplay the form with per-field
/// annotations rather than one aggregate failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Trim-normalizes a submitted value. A missing field and a field that is
/// empty after trimming are treated the same: both record a "required"
/// error against that field.
pub(crate) fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<&str>,
) -> String {
    let trimmed = value.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        errors.insert(field, "required");
    }
    trimmed.to_string()
}
