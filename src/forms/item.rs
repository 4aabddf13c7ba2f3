use serde::{Deserialize, Serialize};

use super::{required, FieldErrors};

/// The item form exactly as submitted. Every field is optional at this
/// stage; unknown fields are dropped by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub photo: Option<String>,
}

/// A validated, trim-normalized item payload. Ownership and creation time
/// are attached by the writer, never taken from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub location: String,
    pub photo: String,
}

impl ItemForm {
    pub fn validate(&self) -> Result<NewItem, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required(&mut errors, "name", self.name.as_deref());
        let description = required(&mut errors, "description", self.description.as_deref());
        let location = required(&mut errors, "location", self.location.as_deref());
        let photo = required(&mut errors, "photo", self.photo.as_deref());

        if errors.is_empty() {
            Ok(NewItem {
                name,
                description,
                location,
                photo,
            })
        } else {
            Err(errors)
        }
    }
}
