//! flags
//!
//! Typed flag values and the per-command flag namespace.
//!
//! # Responsibilities
//!
//! - Adapt non-string domain types (UUIDs, URLs, delimited lists) to the
//!   string-in, string-out contract of a flag parser
//! - Keep adapter storage shared so caller-owned cells observe parsed
//!   values (two-way binding)
//! - Isolate each command's registered flags in its own [`FlagSet`]
//!
//! Tokenization and flag matching belong to clap; this module owns only
//! the typed bindings layered on top of it.

pub mod errors;
pub mod set;
pub mod slice;
pub mod value;

pub use errors::{FlagParseError, ValueError};
pub use set::FlagSet;
pub use slice::{SliceFlag, SliceItem, SliceTarget, DEFAULT_DELIMITER};
pub use value::{FlagValue, UrlFlag, UuidFlag};
