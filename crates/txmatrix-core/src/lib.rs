//! Version table model and build-matrix expansion for txmatrix.
//!
//! A [`VersionTable`] maps release identifiers to the stability tier they ship
//! under and the operating systems they are packaged for. [`expand`] flattens
//! it into a [`Matrix`] with one [`MatrixEntry`] per (version, OS) pair, in
//! table order.

pub mod error;
pub mod matrix;
pub mod stability;
pub mod table;
pub mod validate;

pub use error::{Result, TableError};
pub use matrix::{expand, Matrix, MatrixEntry};
pub use stability::{known_tiers, Stability};
pub use table::{VersionConfig, VersionTable, SHIPPED_TABLE};
pub use validate::{has_errors, validate_table, Severity, ValidationIssue};
