//! Sponsor (funder) creation input

use serde::Deserialize;

use super::id::IdInput;
use super::validation::{required_id, required_text};
use super::ValidationError;

/// Body of `POST /sponsor/ekle`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSponsorRequest {
    pub ad: Option<String>,
    pub kutuphane_id: Option<IdInput>,
}

/// Validated sponsor plus the library it funds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSponsor {
    pub name: String,
    pub library_id: i64,
}

impl TryFrom<CreateSponsorRequest> for NewSponsor {
    type Error = ValidationError;

    fn try_from(req: CreateSponsorRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_text("ad", req.ad)?,
            library_id: required_id("kutuphane_id", req.kutuphane_id)?.resolve("kutuphane_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload() {
        let req: CreateSponsorRequest =
            serde_json::from_str(r#"{"ad": "Vakıf", "kutuphane_id": "4"}"#).unwrap();
        assert_eq!(
            NewSponsor::try_from(req).unwrap(),
            NewSponsor {
                name: "Vakıf".into(),
                library_id: 4
            }
        );
    }

    #[test]
    fn non_numeric_library_id() {
        let req: CreateSponsorRequest =
            serde_json::from_str(r#"{"ad": "Vakıf", "kutuphane_id": "dört"}"#).unwrap();
        assert_eq!(
            NewSponsor::try_from(req).unwrap_err(),
            ValidationError::InvalidId { field: "kutuphane_id" }
        );
    }
}
