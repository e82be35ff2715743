//! flags::slice
//!
//! Delimited-list flags: a generic collection target plus the adapter that
//! splits and joins its textual form.
//!
//! # Design
//!
//! Per-element behavior lives in the [`SliceItem`] trait; everything else
//! (sharing, clearing, joining, delimiter handling) is written once.
//! [`SliceTarget`] is the shared collection cell and [`SliceFlag`] is the
//! [`FlagValue`] adapter over it. Like the scalar adapters, clones share
//! the cell, so a command can register one clone and keep another to read
//! the parsed list.
//!
//! A write clears the target before repopulating it, and a failed append
//! stops the write immediately. The target is then left holding exactly
//! the successfully appended prefix, not the pre-write contents. Callers
//! that receive an error and still inspect the target see that prefix;
//! this is stable, documented behavior.
//!
//! # Example
//!
//! ```
//! use switchyard::flags::{FlagValue, SliceFlag};
//! use uuid::Uuid;
//!
//! let mut ids: SliceFlag<Uuid> = SliceFlag::default();
//! ids.set("63a36905-a4ea-42f4-8133-91951057c10d,bc938938-be7e-4ecc-acb5-b111ef6275f7")
//!     .unwrap();
//! assert_eq!(ids.get().len(), 2);
//! ```

use std::sync::{Arc, Mutex};

use url::Url;
use uuid::Uuid;

use super::errors::ValueError;
use super::value::FlagValue;

/// The delimiter used when an adapter was configured without one.
pub const DEFAULT_DELIMITER: &str = ",";

/// An element type that can live in a delimited list.
pub trait SliceItem: Clone + Send {
    /// Parse one delimited piece.
    fn parse_item(input: &str) -> Result<Self, ValueError>;

    /// Render one element for joining.
    fn format_item(&self) -> String;
}

impl SliceItem for String {
    fn parse_item(input: &str) -> Result<Self, ValueError> {
        Ok(input.to_string())
    }

    fn format_item(&self) -> String {
        self.clone()
    }
}

impl SliceItem for Uuid {
    fn parse_item(input: &str) -> Result<Self, ValueError> {
        Uuid::parse_str(input).map_err(|source| ValueError::Identifier {
            input: input.to_string(),
            source,
        })
    }

    fn format_item(&self) -> String {
        self.to_string()
    }
}

impl SliceItem for Url {
    fn parse_item(input: &str) -> Result<Self, ValueError> {
        Url::parse(input).map_err(|source| ValueError::Url {
            input: input.to_string(),
            source,
        })
    }

    fn format_item(&self) -> String {
        self.to_string()
    }
}

/// A shared, growable collection of parsed elements.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones and
/// caller-held handles observe the same contents.
#[derive(Debug, Clone)]
pub struct SliceTarget<T: SliceItem> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T: SliceItem> SliceTarget<T> {
    /// Create an empty target.
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Remove all elements.
    pub fn clear(&self) {
        self.items.lock().unwrap().clear();
    }

    /// Parse one piece and push it.
    ///
    /// On failure nothing is pushed.
    pub fn append(&self, item: &str) -> Result<(), ValueError> {
        let parsed = T::parse_item(item)?;
        self.items.lock().unwrap().push(parsed);
        Ok(())
    }

    /// Join the rendered elements with `delimiter`.
    pub fn join(&self, delimiter: &str) -> String {
        self.items
            .lock()
            .unwrap()
            .iter()
            .map(SliceItem::format_item)
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// The current contents. Never written means empty, not absent.
    pub fn get(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }
}

impl<T: SliceItem> Default for SliceTarget<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A delimited-list flag over a [`SliceTarget`].
///
/// An empty delimiter means "use [`DEFAULT_DELIMITER`]", for both splitting
/// and joining.
#[derive(Debug, Clone)]
pub struct SliceFlag<T: SliceItem> {
    delimiter: String,
    target: SliceTarget<T>,
}

impl<T: SliceItem> SliceFlag<T> {
    /// Create an adapter over an existing target.
    pub fn new(target: SliceTarget<T>, delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            target,
        }
    }

    /// The current contents of the target.
    pub fn get(&self) -> Vec<T> {
        self.target.get()
    }

    fn effective_delimiter(&self) -> &str {
        if self.delimiter.is_empty() {
            DEFAULT_DELIMITER
        } else {
            &self.delimiter
        }
    }
}

impl<T: SliceItem> Default for SliceFlag<T> {
    /// A fresh target and the default delimiter.
    fn default() -> Self {
        Self::new(SliceTarget::new(), "")
    }
}

impl<T: SliceItem> FlagValue for SliceFlag<T> {
    /// Split `input` on the effective delimiter, clear the target, then
    /// append each piece in order.
    ///
    /// The first append failure aborts the write; the target keeps the
    /// successfully appended prefix.
    fn set(&mut self, input: &str) -> Result<(), ValueError> {
        let delimiter = self.effective_delimiter().to_string();
        self.target.clear();
        for piece in input.split(delimiter.as_str()) {
            self.target.append(piece)?;
        }
        Ok(())
    }

    fn render(&self) -> String {
        self.target.join(self.effective_delimiter())
    }
}
