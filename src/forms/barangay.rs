use serde::{Deserialize, Serialize};

use super::{required, FieldErrors};

/// The barangay registration form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarangayForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub logo: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub url1: Option<String>,
    pub url2: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBarangay {
    pub name: String,
    pub city: String,
    pub description: String,
    pub address: String,
    pub logo: String,
    pub mobile: String,
    pub phone: String,
    pub region: String,
    pub url1: String,
    pub url2: String,
}

impl BarangayForm {
    pub fn validate(&self) -> Result<NewBarangay, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required(&mut errors, "name", self.name.as_deref());
        let city = required(&mut errors, "city", self.city.as_deref());
        let description = required(&mut errors, "description", self.description.as_deref());
        let address = required(&mut errors, "address", self.address.as_deref());
        let logo = required(&mut errors, "logo", self.logo.as_deref());
        let mobile = required(&mut errors, "mobile", self.mobile.as_deref());
        let phone = required(&mut errors, "phone", self.phone.as_deref());
        let region = required(&mut errors, "region", self.region.as_deref());
        let url1 = required(&mut errors, "url1", self.url1.as_deref());
        let url2 = required(&mut errors, "url2", self.url2.as_deref());

        if errors.is_empty() {
            Ok(NewBarangay {
                name,
                city,
                description,
                address,
                logo,
                mobile,
                phone,
                region,
                url1,
                url2,
            })
        } else {
            Err(errors)
        }
    }
}
