//! dispatch::tree
//!
//! The command tree node and its dispatch step.
//!
//! # Design
//!
//! A [`CommandSet`] owns its children outright; dispatch only ever walks
//! downward, so no back-references exist. One call to `execute` performs
//! one dispatch step: strip our own name, match the next token against
//! child names, let the matched child parse its flags, run its opt-in
//! hooks, and delegate. A child that is itself a `CommandSet` captured the
//! scope through [`ArgumentConsumer`] and repeats the same step against
//! it, which is what makes nesting depth-unbounded.
//!
//! Dispatch failures (no token left, no child matched, a failed unpack, a
//! failed validity check) are reported through the logging sink and map to
//! status 1. A failed flag parse is not recoverable at all; the namespace
//! aborts the process, as command-line parses conventionally do.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::flags::FlagSet;

use super::subcommand::{ArgumentConsumer, Subcommand};

/// A named node holding child commands.
pub struct CommandSet {
    name: String,
    children: Vec<Box<dyn Subcommand>>,
    flags: Option<FlagSet>,
    args: Vec<String>,
}

impl CommandSet {
    /// Create a node with the given children.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Subcommand>>) -> Self {
        Self {
            name: name.into(),
            children,
            flags: None,
            args: Vec::new(),
        }
    }

    /// Emit one usage line per child.
    fn usage(&self) {
        for child in &self.children {
            info!("  {:<12} {}", child.name(), child.description());
        }
    }
}

#[async_trait]
impl Subcommand for CommandSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let names: Vec<&str> = self.children.iter().map(|c| c.name()).collect();
        format!("Subcommands: {}", names.join(", "))
    }

    fn setup(&mut self) {
        self.flags = Some(FlagSet::new(self.name.clone()));
        for child in &mut self.children {
            child.setup();
        }
    }

    fn flag_set(&mut self) -> &mut FlagSet {
        self.flags.as_mut().expect("setup() must run before flag_set()")
    }

    fn as_argument_consumer(&mut self) -> Option<&mut dyn ArgumentConsumer> {
        Some(self)
    }

    async fn execute(&mut self, cancel: &CancellationToken) -> i32 {
        // The captured scope starts with our own name; anything to
        // dispatch on comes after it.
        if self.args.len() < 2 {
            error!("missing subcommand");
            self.usage();
            return 1;
        }
        let scope: Vec<String> = self.args[1..].to_vec();

        let Some(index) = self.children.iter().position(|c| c.name() == scope[0]) else {
            error!("unknown subcommand: {}", scope[0]);
            self.usage();
            return 1;
        };
        let child = &mut self.children[index];

        child.flag_set().parse(&scope[1..]);

        if let Some(unpacker) = child.as_argument_unpacker() {
            if let Err(err) = unpacker.unpack_args() {
                error!("invalid arguments: {err}");
                child.flag_set().print_defaults();
                return 1;
            }
        }

        // Runs even for children that declined the unpacking step. The
        // child is expected to have logged its own specifics.
        if child.has_invalid_flags() {
            child.flag_set().print_defaults();
            return 1;
        }

        if let Some(consumer) = child.as_argument_consumer() {
            consumer.set_args(scope.clone());
        }

        child.execute(cancel).await
    }
}

impl ArgumentConsumer for CommandSet {
    fn set_args(&mut self, args: Vec<String>) {
        self.args = args;
    }
}
