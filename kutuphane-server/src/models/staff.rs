//! Staff creation input

use serde::Deserialize;

use super::id::IdInput;
use super::validation::{required_id, required_text};
use super::ValidationError;

/// Body of `POST /calisan/ekle`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStaffRequest {
    pub ad: Option<String>,
    pub pozisyon: Option<String>,
    pub telefon: Option<String>,
    pub kutuphane_id: Option<IdInput>,
}

/// Validated staff member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub name: String,
    pub job_title: String,
    pub contact_number: String,
    pub library_id: i64,
}

impl TryFrom<CreateStaffRequest> for NewStaff {
    type Error = ValidationError;

    fn try_from(req: CreateStaffRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_text("ad", req.ad)?,
            job_title: required_text("pozisyon", req.pozisyon)?,
            contact_number: required_text("telefon", req.telefon)?,
            library_id: required_id("kutuphane_id", req.kutuphane_id)?.resolve("kutuphane_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload() {
        let req: CreateStaffRequest = serde_json::from_str(
            r#"{"ad": "Ayşe", "pozisyon": "Kütüphaneci", "telefon": "555", "kutuphane_id": 2}"#,
        )
        .unwrap();
        let staff = NewStaff::try_from(req).unwrap();
        assert_eq!(staff.job_title, "Kütüphaneci");
        assert_eq!(staff.library_id, 2);
    }

    #[test]
    fn missing_library_id_is_named() {
        let req: CreateStaffRequest =
            serde_json::from_str(r#"{"ad": "Ayşe", "pozisyon": "K", "telefon": "555"}"#).unwrap();
        assert_eq!(
            NewStaff::try_from(req).unwrap_err(),
            ValidationError::Missing { field: "kutuphane_id" }
        );
    }

    #[test]
    fn missing_phone_is_named() {
        let req: CreateStaffRequest =
            serde_json::from_str(r#"{"ad": "Ayşe", "pozisyon": "K", "kutuphane_id": "2"}"#)
                .unwrap();
        assert_eq!(
            NewStaff::try_from(req).unwrap_err(),
            ValidationError::Missing { field: "telefon" }
        );
    }
}
