#![deny(missing_docs)]
#![doc = "Shared vocabulary of the group completion engine: representations, \
the generator alphabet with its canonical ordering, the human notation codec \
and the structured error surface."]

mod alphabet;
pub mod errors;
pub mod notation;
pub mod provenance;
mod rep;

pub use alphabet::Alphabet;
pub use errors::{ErrorInfo, GroupError};
pub use notation::{compress, expand, IDENTITY_SYMBOL, MAX_EXPANDED_LEN};
pub use provenance::SchemaVersion;
pub use rep::{invert_char, Rep};
