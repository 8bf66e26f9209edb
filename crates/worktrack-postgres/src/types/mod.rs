//! Supporting types shared by models and queries.

mod constraints;

pub use constraints::{ConstraintCategory, ConstraintViolation};
