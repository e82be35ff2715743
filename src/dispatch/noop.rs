//! dispatch::noop
//!
//! A configurable do-nothing command for exercising the dispatch protocol.
//!
//! Shipped in the production tree so that embedders can script dispatch
//! scenarios (a child that fails to unpack, a child that reports invalid
//! flags, a child with a fixed exit status) without writing a command of
//! their own.
//!
//! # Example
//!
//! ```
//! use switchyard::dispatch::{invoke, CommandSet, NoopCommand, Subcommand};
//! use tokio_util::sync::CancellationToken;
//!
//! # tokio_test::block_on(async {
//! let children: Vec<Box<dyn Subcommand>> = vec![Box::new(NoopCommand::new("noop"))];
//! let mut root = CommandSet::new("tool", children);
//! let status = invoke(
//!     &CancellationToken::new(),
//!     &mut root,
//!     vec!["tool".to_string(), "noop".to_string()],
//! )
//! .await;
//! assert_eq!(status, 0);
//! # });
//! ```

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::flags::FlagSet;

use super::subcommand::{ArgumentUnpacker, Subcommand};

/// A leaf command that does nothing, configurably.
pub struct NoopCommand {
    name: String,
    flags: Option<FlagSet>,
    exit_status: i32,
    invalid_flags: bool,
    unpack_error: Option<String>,
}

impl NoopCommand {
    /// A no-op that succeeds.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: None,
            exit_status: 0,
            invalid_flags: false,
            unpack_error: None,
        }
    }

    /// Return this status from `execute`.
    pub fn with_exit_status(mut self, status: i32) -> Self {
        self.exit_status = status;
        self
    }

    /// Report invalid flags at the validity gate.
    pub fn with_invalid_flags(mut self) -> Self {
        self.invalid_flags = true;
        self
    }

    /// Fail the unpacking step with this message.
    pub fn with_unpack_error(mut self, message: impl Into<String>) -> Self {
        self.unpack_error = Some(message.into());
        self
    }
}

#[async_trait]
impl Subcommand for NoopCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        "not actually implemented".to_string()
    }

    fn setup(&mut self) {
        self.flags = Some(FlagSet::new(self.name.clone()));
    }

    fn flag_set(&mut self) -> &mut FlagSet {
        self.flags.as_mut().expect("setup() must run before flag_set()")
    }

    fn has_invalid_flags(&self) -> bool {
        self.invalid_flags
    }

    fn as_argument_unpacker(&mut self) -> Option<&mut dyn ArgumentUnpacker> {
        Some(self)
    }

    async fn execute(&mut self, _cancel: &CancellationToken) -> i32 {
        self.exit_status
    }
}

impl ArgumentUnpacker for NoopCommand {
    fn unpack_args(&mut self) -> Result<()> {
        match &self.unpack_error {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}
