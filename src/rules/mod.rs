//! Chain rule validation.
//!
//! `ChainValidator` decides whether a submitted word may follow the
//! current word. It never mutates state; the controller applies the
//! verdict to the session.

pub mod validator;

pub use validator::{ChainValidator, ValidationResult};
