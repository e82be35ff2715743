//! Switchyard - typed command-line flags and recursive subcommand dispatch
//!
//! Switchyard layers two capabilities on top of a conventional flag parser:
//! typed flag values for domain types the parser does not natively support
//! (UUIDs, URLs, and delimited lists of either), and a subcommand dispatcher
//! that resolves a positional token path through an arbitrarily nested
//! command tree, letting every node parse its own flags before control
//! reaches a terminal command.
//!
//! # Architecture
//!
//! - [`flags`] - Flag value adapters and the per-command flag namespace
//! - [`dispatch`] - The command trait, the command tree, and the invoker
//!
//! Tokenization and flag matching are delegated to clap; switchyard owns
//! only the typed bindings and the tree-shaped control flow. Execution is
//! async and carries a [`tokio_util::sync::CancellationToken`] so that a
//! Ctrl-C observed by the invoker is visible to whatever command is
//! running. Cancellation is cooperative: the framework never interrupts or
//! times out a command on its own.
//!
//! # Invariants
//!
//! 1. Every command node owns an isolated flag namespace, created once by
//!    `setup()` before any dispatch step runs
//! 2. Adapter state is shared, not copied: clones of an adapter and any
//!    caller-held cell observe the same writes
//! 3. Dispatch failures are reported once and map to a non-zero exit
//!    status; nothing is retried and nothing is swallowed

pub mod dispatch;
pub mod flags;
