//! Visitor creation and update inputs

use serde::Deserialize;

use super::id::IdInput;
use super::validation::{optional_text, required_id, required_text};
use super::ValidationError;

/// Body of `POST /ziyaretci/ekle` and `PUT /ziyaretci/duzenle/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitorRequest {
    pub ad: Option<String>,
    pub soyad: Option<String>,
    pub email: Option<String>,
    pub telefon: Option<String>,
    pub kutuphane_id: Option<IdInput>,
}

/// Validated new visitor with its first library membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitor {
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub library_id: i64,
}

/// Validated visitor edit.
///
/// Scalar fields are always overwritten; the membership moves only when
/// `library_id` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorUpdate {
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub library_id: Option<i64>,
}

impl TryFrom<VisitorRequest> for NewVisitor {
    type Error = ValidationError;

    fn try_from(req: VisitorRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_text("ad", req.ad)?,
            surname: required_text("soyad", req.soyad)?,
            email: optional_text(req.email),
            phone: optional_text(req.telefon),
            library_id: required_id("kutuphane_id", req.kutuphane_id)?.resolve("kutuphane_id")?,
        })
    }
}

impl TryFrom<VisitorRequest> for VisitorUpdate {
    type Error = ValidationError;

    fn try_from(req: VisitorRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_text("ad", req.ad)?,
            surname: required_text("soyad", req.soyad)?,
            email: optional_text(req.email),
            phone: optional_text(req.telefon),
            library_id: req
                .kutuphane_id
                .map(|id| id.resolve("kutuphane_id"))
                .transpose()?,
        })
    }
}
