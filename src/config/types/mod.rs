//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Field paths used to anchor diagnostics       |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigError, ValidationError, print_warnings};
pub use field::FieldPath;
