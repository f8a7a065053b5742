//! Request models with validation at construction
//!
//! Write payloads deserialize into `*Request` types with every field optional,
//! then convert into validated inputs whose required fields are non-optional.
//! Invalid input returns ValidationError, not panic.

pub mod filter;
pub mod id;
pub mod library;
pub mod sponsor;
pub mod staff;
pub mod validation;
pub mod visitor;

pub use filter::{FilterColumns, ListFilter};
pub use id::IdInput;
pub use library::{CreateLibraryRequest, NewLibrary};
pub use sponsor::{CreateSponsorRequest, NewSponsor};
pub use staff::{CreateStaffRequest, NewStaff};
pub use validation::ValidationError;
pub use visitor::{NewVisitor, VisitorRequest, VisitorUpdate};
