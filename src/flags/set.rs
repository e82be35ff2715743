//! flags::set
//!
//! The per-command flag namespace.
//!
//! # Design
//!
//! A [`FlagSet`] is an isolated registry mapping long flag names to boxed
//! [`FlagValue`] adapters. It owns no grammar of its own: at parse time it
//! assembles a `clap::Command` from the registered bindings, hands clap the
//! flag tokens, and then feeds every matched occurrence to its adapter in
//! order of appearance.
//!
//! Flag parsing stops at the first token that is not a flag (or at a
//! literal `--`). The remaining tokens are kept verbatim and exposed via
//! [`FlagSet::args`]; for a command with children they are the scope the
//! next dispatch step interprets, for a terminal command they are ordinary
//! positional arguments.
//!
//! [`FlagSet::parse`] mirrors the conventional exit-on-error behavior of a
//! command-line parse: tokenizer errors report through clap's own channel
//! (exit 2, or 0 for a help request) and adapter errors log the failure,
//! dump the defaults listing, and exit 2. Embedders and tests use
//! [`FlagSet::try_parse`] instead.

use std::process;

use clap::{Arg, ArgAction, Command};
use tracing::{error, info};

use super::errors::FlagParseError;
use super::value::FlagValue;

/// One registered flag: its name, help text, captured default, and the
/// adapter occurrences are fed to.
struct FlagSpec {
    name: String,
    usage: String,
    default: String,
    value: Box<dyn FlagValue>,
}

/// An isolated flag namespace for one command node.
pub struct FlagSet {
    name: String,
    specs: Vec<FlagSpec>,
    rest: Vec<String>,
}

impl FlagSet {
    /// Create an empty namespace named after its command.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specs: Vec::new(),
            rest: Vec::new(),
        }
    }

    /// The namespace's (command's) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind an adapter under a long flag name.
    ///
    /// The adapter's rendered value at registration time becomes the
    /// flag's default string in [`FlagSet::print_defaults`]. Registering
    /// the same name twice is a programming error and will panic during
    /// the next parse.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        usage: impl Into<String>,
        value: impl FlagValue + 'static,
    ) {
        let value = Box::new(value);
        let default = value.render();
        self.specs.push(FlagSpec {
            name: name.into(),
            usage: usage.into(),
            default,
            value,
        });
    }

    /// Parse a token list, feeding matched values to their adapters.
    ///
    /// # Errors
    ///
    /// [`FlagParseError::Syntax`] when clap rejects the flag tokens
    /// (unknown flag, malformed token, help request);
    /// [`FlagParseError::Value`] when an adapter rejects a matched value.
    /// The pass stops at the first adapter failure; adapters for earlier
    /// occurrences keep what they parsed.
    pub fn try_parse(&mut self, args: &[String]) -> Result<(), FlagParseError> {
        let (flag_tokens, rest) = split_flag_tokens(args);
        let matches = self.build_command().try_get_matches_from(flag_tokens)?;
        for spec in &mut self.specs {
            if let Some(values) = matches.get_many::<String>(&spec.name) {
                for value in values {
                    spec.value
                        .set(value)
                        .map_err(|source| FlagParseError::Value {
                            flag: spec.name.clone(),
                            source,
                        })?;
                }
            }
        }
        self.rest = rest;
        Ok(())
    }

    /// Parse a token list, aborting the process on failure.
    ///
    /// This is the behavior command dispatch relies on: a malformed
    /// invocation is not a recoverable condition.
    pub fn parse(&mut self, args: &[String]) {
        match self.try_parse(args) {
            Ok(()) => {}
            Err(FlagParseError::Syntax(err)) => err.exit(),
            Err(err @ FlagParseError::Value { .. }) => {
                error!("{}: {}", self.name, err);
                self.print_defaults();
                process::exit(2);
            }
        }
    }

    /// Tokens left over after the most recent parse, in order.
    pub fn args(&self) -> &[String] {
        &self.rest
    }

    /// Emit one listing line per registered flag.
    pub fn print_defaults(&self) {
        for spec in &self.specs {
            if spec.default.is_empty() {
                info!("  --{:<16} {}", spec.name, spec.usage);
            } else {
                info!("  --{:<16} {} (default {})", spec.name, spec.usage, spec.default);
            }
        }
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.name.clone()).no_binary_name(true);
        for spec in &self.specs {
            command = command.arg(
                Arg::new(spec.name.clone())
                    .long(spec.name.clone())
                    .help(spec.usage.clone())
                    .value_name("VALUE")
                    .action(ArgAction::Append)
                    .num_args(1)
                    .allow_hyphen_values(true),
            );
        }
        command
    }
}

/// Split a token list into the leading flag tokens and the rest.
///
/// Every registered flag takes exactly one value, so the scan pairs each
/// `--name` with its following token unless the value was supplied inline
/// as `--name=value`. The scan stops at the first non-flag token, or at a
/// literal `--` (which is consumed without appearing in either half).
fn split_flag_tokens(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut flags = Vec::new();
    let mut index = 0;
    while index < args.len() {
        let token = &args[index];
        if token == "--" {
            index += 1;
            break;
        }
        if token.len() > 1 && token.starts_with('-') {
            flags.push(token.clone());
            if !token.contains('=') && index + 1 < args.len() {
                flags.push(args[index + 1].clone());
                index += 1;
            }
            index += 1;
        } else {
            break;
        }
    }
    (flags, args[index..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{FlagValue, SliceFlag, UuidFlag};
    use uuid::Uuid;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn parses_registered_flags() {
        let flag = UuidFlag::new();
        let mut set = FlagSet::new("demo");
        set.register("id", "an identifier", flag.clone());

        let expected = Uuid::new_v4();
        set.try_parse(&argv(&["--id", &expected.to_string()]))
            .unwrap();
        assert_eq!(flag.get(), expected);
    }

    #[test]
    fn inline_values_parse_too() {
        let flag = UuidFlag::new();
        let mut set = FlagSet::new("demo");
        set.register("id", "an identifier", flag.clone());

        let expected = Uuid::new_v4();
        set.try_parse(&argv(&[&format!("--id={expected}")])).unwrap();
        assert_eq!(flag.get(), expected);
    }

    #[test]
    fn repeated_occurrences_apply_in_order() {
        let flag = UuidFlag::new();
        let mut set = FlagSet::new("demo");
        set.register("id", "an identifier", flag.clone());

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        set.try_parse(&argv(&[
            "--id",
            &first.to_string(),
            "--id",
            &second.to_string(),
        ]))
        .unwrap();
        assert_eq!(flag.get(), second);
    }

    #[test]
    fn unknown_flag_is_a_syntax_error() {
        let mut set = FlagSet::new("demo");
        let err = set.try_parse(&argv(&["--nope", "value"])).unwrap_err();
        assert!(matches!(err, FlagParseError::Syntax(_)));
    }

    #[test]
    fn adapter_rejection_names_the_flag() {
        let mut set = FlagSet::new("demo");
        set.register("id", "an identifier", UuidFlag::new());

        let err = set.try_parse(&argv(&["--id", "not-a-uuid"])).unwrap_err();
        match err {
            FlagParseError::Value { flag, .. } => assert_eq!(flag, "id"),
            other => panic!("expected a value error, got {other:?}"),
        }
    }

    #[test]
    fn parsing_stops_at_the_first_positional() {
        let flag: SliceFlag<String> = SliceFlag::default();
        let mut set = FlagSet::new("demo");
        set.register("names", "a list", flag.clone());

        set.try_parse(&argv(&["--names", "a,b", "child", "--other", "x"]))
            .unwrap();
        assert_eq!(flag.get(), vec!["a", "b"]);
        assert_eq!(set.args(), argv(&["child", "--other", "x"]));
    }

    #[test]
    fn double_dash_ends_flag_parsing() {
        let mut set = FlagSet::new("demo");
        set.try_parse(&argv(&["--", "--id", "whatever"])).unwrap();
        assert_eq!(set.args(), argv(&["--id", "whatever"]));
    }

    #[test]
    fn empty_namespace_accepts_positional_scope() {
        let mut set = FlagSet::new("demo");
        set.try_parse(&argv(&["child", "--flag", "v"])).unwrap();
        assert_eq!(set.args(), argv(&["child", "--flag", "v"]));
    }

    #[test]
    fn defaults_capture_registration_state() {
        let mut populated = UuidFlag::new();
        let id = Uuid::new_v4();
        populated.set(&id.to_string()).unwrap();

        let mut set = FlagSet::new("demo");
        set.register("id", "an identifier", populated);

        assert_eq!(set.specs[0].default, id.to_string());
    }
}
