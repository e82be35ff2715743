//! flags::value
//!
//! The adapter contract and the typed scalar adapters.
//!
//! # Design
//!
//! A [`FlagValue`] is the binding between a flag namespace and one storage
//! cell: the namespace feeds it matched strings during a parse pass and
//! renders it when listing defaults. Adapters wrap their cell in
//! `Arc<Mutex<_>>` so that clones of an adapter, and any caller that
//! constructed the adapter around its own cell, all observe the same
//! writes. That sharing is load-bearing: a command registers a clone with
//! its flag namespace and keeps the original to read the parsed value
//! later.
//!
//! # Example
//!
//! ```
//! use switchyard::flags::{FlagValue, UuidFlag};
//! use uuid::Uuid;
//!
//! let mut flag = UuidFlag::new();
//! assert_eq!(flag.get(), Uuid::nil());
//!
//! flag.set("b98718d2-d4ef-4e32-8c88-527bcd3ba21c").unwrap();
//! assert_eq!(flag.render(), "b98718d2-d4ef-4e32-8c88-527bcd3ba21c");
//! ```

use std::sync::{Arc, Mutex};

use url::Url;
use uuid::Uuid;

use super::errors::ValueError;

/// A typed value that can be bound to a flag.
///
/// `set` is called once per matched occurrence of the flag, in order of
/// appearance. `render` produces the value's canonical string form and is
/// captured at registration time as the flag's default listing.
pub trait FlagValue: Send {
    /// Parse `input` and store the result.
    ///
    /// On failure the stored value is left untouched.
    fn set(&mut self, input: &str) -> Result<(), ValueError>;

    /// Render the current value's canonical string form.
    fn render(&self) -> String;
}

/// A UUID-valued flag.
///
/// Reads before any write yield [`Uuid::nil`]. Clones share the underlying
/// cell.
#[derive(Debug, Clone)]
pub struct UuidFlag {
    cell: Arc<Mutex<Uuid>>,
}

impl UuidFlag {
    /// Create an adapter owning a fresh nil-valued cell.
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(Uuid::nil())),
        }
    }

    /// Create an adapter around a caller-owned cell.
    ///
    /// Writes through the adapter are visible through every other handle on
    /// the cell.
    pub fn bound(cell: Arc<Mutex<Uuid>>) -> Self {
        Self { cell }
    }

    /// The current value.
    pub fn get(&self) -> Uuid {
        *self.cell.lock().unwrap()
    }
}

impl Default for UuidFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagValue for UuidFlag {
    fn set(&mut self, input: &str) -> Result<(), ValueError> {
        let parsed = Uuid::parse_str(input).map_err(|source| ValueError::Identifier {
            input: input.to_string(),
            source,
        })?;
        *self.cell.lock().unwrap() = parsed;
        Ok(())
    }

    fn render(&self) -> String {
        self.cell.lock().unwrap().to_string()
    }
}

/// A URL-valued flag.
///
/// `url::Url` has no representable empty value, so the cell holds an
/// `Option` and an unset flag renders as the empty string. Clones share the
/// underlying cell.
#[derive(Debug, Clone)]
pub struct UrlFlag {
    cell: Arc<Mutex<Option<Url>>>,
}

impl UrlFlag {
    /// Create an adapter owning a fresh unset cell.
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(None)),
        }
    }

    /// Create an adapter around a caller-owned cell.
    pub fn bound(cell: Arc<Mutex<Option<Url>>>) -> Self {
        Self { cell }
    }

    /// The current value, if any has been set.
    pub fn get(&self) -> Option<Url> {
        self.cell.lock().unwrap().clone()
    }
}

impl Default for UrlFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagValue for UrlFlag {
    fn set(&mut self, input: &str) -> Result<(), ValueError> {
        let parsed = Url::parse(input).map_err(|source| ValueError::Url {
            input: input.to_string(),
            source,
        })?;
        *self.cell.lock().unwrap() = Some(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        match &*self.cell.lock().unwrap() {
            Some(url) => url.to_string(),
            None => String::new(),
        }
    }
}
