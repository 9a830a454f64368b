#![forbid(unsafe_code)]
//! Portfolio model SSOT.
//!
//! Field constraints live here so that the API boundary and any future
//! writer enforce the same rules.

mod portfolio;
mod project;
mod validation;

pub use portfolio::{Portfolio, OWNER_BIO, OWNER_NAME, OWNER_TITLE};
pub use project::{
    Project, ProjectCreate, ProjectId, DESCRIPTION_MIN_LEN, TITLE_MIN_LEN, URL_MAX_LEN,
};
pub use validation::{Constraint, FieldViolation, ValidationError};

pub const CRATE_NAME: &str = "bijux-portfolio-model";
