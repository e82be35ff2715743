//! flags::errors
//!
//! Error types for typed flag values and flag-set parsing.
//!
//! # Design
//!
//! Two layers of failure exist. [`ValueError`] is a single typed value
//! failing to parse; it is returned synchronously by an adapter's `set` and
//! always carries the offending input alongside the underlying parser
//! error. [`FlagParseError`] is a whole parse pass failing, either because
//! the tokenizer rejected the argument list or because a bound adapter
//! rejected a supplied value.

use thiserror::Error;

/// A typed flag value failed to parse.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The input is not a valid UUID.
    #[error("invalid identifier '{input}': {source}")]
    Identifier {
        /// The rejected input string.
        input: String,
        /// The underlying parse error.
        source: uuid::Error,
    },

    /// The input is not a valid absolute URL.
    #[error("invalid url '{input}': {source}")]
    Url {
        /// The rejected input string.
        input: String,
        /// The underlying parse error.
        source: url::ParseError,
    },
}

/// A flag-set parse pass failed.
///
/// `Syntax` errors come from the tokenizer itself (unknown flag, malformed
/// token, or a help request, which clap reports through its error channel).
/// `Value` errors come from a bound adapter rejecting a matched value; the
/// pass stops at the first such failure.
#[derive(Debug, Error)]
pub enum FlagParseError {
    /// The tokenizer rejected the argument list.
    #[error(transparent)]
    Syntax(#[from] clap::Error),

    /// A bound adapter rejected a supplied value.
    #[error("invalid value for --{flag}: {source}")]
    Value {
        /// The long name of the offending flag.
        flag: String,
        /// The adapter's parse error.
        source: ValueError,
    },
}
