//! Built-in transformers
//!
//! Best-effort conversions for common destination kinds. Each validates the
//! destination type when it is created and registers itself into
//! [`TRANSFORMER_FACTORIES`](bindery_application::registry::TRANSFORMER_FACTORIES).
//!
//! | Name | Destination | Input |
//! |------|-------------|-------|
//! | `string` | `String` | anything, via its display text |
//! | `int` | `i32`, `i64`, `isize` | integers, floats (truncated), numeric text |
//! | `bool` | `bool` | booleans, integers, `true/yes/1/on`, `false/no/0/off` |

pub mod boolean;
pub mod integer;
pub mod string;

pub use boolean::BoolTransformer;
pub use integer::IntTransformer;
pub use string::StringTransformer;

use bindery_domain::error::{Error, Result};
use bindery_domain::types::TypeDesc;

/// Reject destinations a transformer cannot produce
pub(crate) fn check_destination(
    name: &str,
    dest: &TypeDesc,
    accepts: impl Fn(&TypeDesc) -> bool,
) -> Result<()> {
    if accepts(dest) {
        return Ok(());
    }
    Err(Error::transformer(format!(
        "{name} transformer cannot produce {dest}"
    )))
}
