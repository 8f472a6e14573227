//! Shared data model for clearinghouse enrollment-verification exchanges.
//!
//! The outbound side works on [`IdentityTable`] rows and a resolved
//! [`RequestConfig`]; the inbound side works on [`RawEnrollmentRow`] values
//! and produces [`NormalizedEnrollmentRow`] values in canonical column order.

pub mod advisory;
pub mod columns;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod identity;
pub mod lookup;

pub use advisory::{Advisory, AdvisoryKind};
pub use config::{
    InquiryType, NscConfig, RequestConfig, RequestOptions, SchoolConfig, TrailerCountPolicy,
};
pub use enrollment::{GraduationFact, MajorCip, NormalizedEnrollmentRow, RawEnrollmentRow};
pub use error::{ModelError, Result};
pub use identity::{DateCell, IdentityColumn, IdentityRow, IdentityTable};
pub use lookup::CaseInsensitiveSet;
