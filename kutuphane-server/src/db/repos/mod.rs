//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - List operations JOIN down to `location` and take a `ListFilter`
//! - Reads hold one pooled session for the duration of the query
//! - Writes that touch more than one table use a transaction

pub mod libraries;
pub mod sponsors;
pub mod staff;
pub mod stats;
pub mod visitors;

pub use libraries::{LibraryRepo, LibraryRow};
pub use sponsors::{SponsorRepo, SponsorRow};
pub use staff::{StaffRepo, StaffRow};
pub use stats::{BookAvailability, MonthlyLoanCount, StatsRepo, MONTHLY_REPORT_COUNTRY};
pub use visitors::{VisitorRepo, VisitorRow};
