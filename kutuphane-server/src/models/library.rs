//! Library creation input

use serde::Deserialize;

use super::validation::{optional_text, required_text};
use super::ValidationError;

/// Body of `POST /kutuphane/ekle`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLibraryRequest {
    pub ad: Option<String>,
    pub calisma_saatleri: Option<String>,
    pub ulke: Option<String>,
    pub sehir: Option<String>,
}

/// Validated library, created together with its location row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLibrary {
    pub name: String,
    pub opening_hours: Option<String>,
    pub country: String,
    pub city: String,
}

impl TryFrom<CreateLibraryRequest> for NewLibrary {
    type Error = ValidationError;

    fn try_from(req: CreateLibraryRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_text("ad", req.ad)?,
            opening_hours: optional_text(req.calisma_saatleri),
            country: required_text("ulke", req.ulke)?,
            city: required_text("sehir", req.sehir)?,
        })
    }
}
