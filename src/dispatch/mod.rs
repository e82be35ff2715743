//! dispatch
//!
//! The command trait, the command tree, and the invoker.
//!
//! # Responsibilities
//!
//! - Resolve a positional token path through a nested command tree
//! - Drive each dispatch step: flag parse, unpack, validity check, execute
//! - Bridge Ctrl-C onto a cancellation token commands can observe
//!
//! Each node parses only its own slice of the argument vector; parents
//! strip their own name before delegating, and a nested [`CommandSet`]
//! repeats the same dispatch step against its captured scope.

pub mod invoke;
pub mod noop;
pub mod subcommand;
pub mod tree;

pub use invoke::invoke;
pub use noop::NoopCommand;
pub use subcommand::{ArgumentConsumer, ArgumentUnpacker, Subcommand};
pub use tree::CommandSet;
