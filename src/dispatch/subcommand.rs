//! dispatch::subcommand
//!
//! The command trait and its opt-in capabilities.
//!
//! # Design
//!
//! [`Subcommand`] is the one trait every command implements. The behaviors
//! a command may or may not want (receiving its raw token scope, unpacking
//! parsed flags into richer state) are separate narrow traits surfaced
//! through capability queries with `None` defaults, so a command opts in
//! by overriding a single method instead of inheriting unused hooks. The
//! dispatcher checks the capabilities at each dispatch step.
//!
//! `execute` is async and receives a [`CancellationToken`]: a command that
//! blocks or loops is expected to watch `cancel.cancelled()` itself. The
//! framework never interrupts a running command.

use anyhow::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::flags::FlagSet;

/// A named command that owns a flag namespace and can execute.
///
/// A node becomes usable only after [`Subcommand::setup`] has run; the
/// invoker performs setup once, recursively, before the first dispatch
/// step.
#[async_trait]
pub trait Subcommand: Send {
    /// The name dispatch matches against.
    fn name(&self) -> &str;

    /// A one-line description for usage listings.
    fn description(&self) -> String;

    /// One-time creation of the flag namespace.
    ///
    /// Tree nodes set up their children recursively.
    fn setup(&mut self);

    /// The flag namespace created by `setup`.
    ///
    /// # Panics
    ///
    /// Panics if called before `setup`.
    fn flag_set(&mut self) -> &mut FlagSet;

    /// Whether parsed flag state is unusable.
    ///
    /// Checked after flag parsing and unpacking; a `true` stops dispatch
    /// with status 1 after the defaults listing is printed. The command is
    /// expected to have logged its own specifics. Validity checking is
    /// opt-in; the default declines by reporting `false`.
    fn has_invalid_flags(&self) -> bool {
        false
    }

    /// Capability query: does this command want its raw token scope?
    fn as_argument_consumer(&mut self) -> Option<&mut dyn ArgumentConsumer> {
        None
    }

    /// Capability query: does this command unpack parsed flags?
    fn as_argument_unpacker(&mut self) -> Option<&mut dyn ArgumentUnpacker> {
        None
    }

    /// Run the command. The returned status becomes the exit status.
    async fn execute(&mut self, cancel: &CancellationToken) -> i32;
}

/// Opt-in capability: receive the raw token scope for this dispatch step.
///
/// The scope starts with the command's own name; a command with children
/// re-derives its own view from it instead of trusting the already
/// flag-parsed remainder.
pub trait ArgumentConsumer {
    /// Capture the scope.
    fn set_args(&mut self, args: Vec<String>);
}

/// Opt-in capability: convert parsed flag state into richer state.
///
/// Runs after flag parsing and before the validity check. An error stops
/// dispatch with status 1; the command should log specifics before
/// returning it.
pub trait ArgumentUnpacker {
    /// Unpack and validate the parsed flags.
    fn unpack_args(&mut self) -> Result<()>;
}
