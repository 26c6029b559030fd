//! # Settings
//!
//! A heterogeneous settings map. Values are a closed sum type, [`Setting`],
//! so every place that reads a setting has to handle each variant, and a
//! new variant is a compile error everywhere it is not yet handled.
//!
//! [`Settings`] is persistent: built on `im::HashMap`, every update returns a
//! new `Settings` that shares unchanged entries with the old one. Copying a
//! settings map is O(1), and editing the copy never touches the original.
//!
//! Settings can be layered. A layer created with [`Settings::overridden_by`]
//! keeps the previous map as its defaults and looks up through it.
//!
//! ## Example
//!
//! ```
//! use playground_common::settings::{Setting, Settings};
//!
//! let defaults = Settings::new()
//!     .define("Airplane Mode", Setting::Bool(true))
//!     .define("Name", Setting::Text("My iPhone".to_string()));
//!
//! let user = defaults.overridden_by([(
//!     "Name".to_string(),
//!     Setting::Text("Jane's iPhone".to_string()),
//! )]);
//!
//! assert_eq!(user.lookup("Name"), Some(&Setting::Text("Jane's iPhone".to_string())));
//! assert_eq!(user.lookup("Airplane Mode"), Some(&Setting::Bool(true)));
//!
//! // The defaults are untouched.
//! assert_eq!(defaults.lookup("Name"), Some(&Setting::Text("My iPhone".to_string())));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::mapping::map_values;

/// One setting value: text, integer or flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Setting {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl Setting {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Setting::Text(text) => Some(text),
            Setting::Int(_) | Setting::Bool(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Setting::Int(number) => Some(*number),
            Setting::Text(_) | Setting::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Setting::Bool(value) => Some(*value),
            Setting::Text(_) | Setting::Int(_) => None,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Text(text) => write!(f, "{text}"),
            Setting::Int(number) => write!(f, "{number}"),
            Setting::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// A persistent, optionally layered map from setting names to [`Setting`]s.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// This layer's entries
    values: ImHashMap<String, Setting>,
    /// The layer this one overrides (if any)
    defaults: Option<Box<Settings>>,
}

impl Settings {
    /// Creates an empty settings map with no defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in this layer (defaults not included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if this layer has no entries of its own.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks `name` up in this layer, then in the defaults.
    ///
    /// A miss is `None`: no key is guaranteed to be present.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Setting> {
        self.values
            .get(name)
            .or_else(|| self.defaults.as_ref().and_then(|d| d.lookup(name)))
    }

    /// Returns a copy with `name` set in this layer.
    ///
    /// # Example
    ///
    /// ```
    /// use playground_common::settings::{Setting, Settings};
    ///
    /// let before = Settings::new().define("Volume", Setting::Int(3));
    /// let after = before.define("Volume", Setting::Int(7));
    ///
    /// assert_eq!(before.lookup("Volume"), Some(&Setting::Int(3)));
    /// assert_eq!(after.lookup("Volume"), Some(&Setting::Int(7)));
    /// ```
    #[must_use]
    pub fn define(&self, name: impl Into<String>, value: Setting) -> Self {
        Self {
            values: self.values.update(name.into(), value),
            defaults: self.defaults.clone(),
        }
    }

    /// Returns a copy with every pair set in this layer. Later pairs win.
    #[must_use]
    pub fn define_all(&self, pairs: impl IntoIterator<Item = (String, Setting)>) -> Self {
        let mut values = self.values.clone();
        for (name, value) in pairs {
            values.insert(name, value);
        }
        Self {
            values,
            defaults: self.defaults.clone(),
        }
    }

    /// Sets `name` and reports what it resolved to before.
    ///
    /// The previous value is whatever [`lookup`](Self::lookup) returned, so a
    /// value inherited from the defaults counts.
    #[must_use]
    pub fn update_value(&self, name: impl Into<String>, value: Setting) -> (Self, Option<Setting>) {
        let name = name.into();
        let previous = self.lookup(&name).cloned();
        (self.define(name, value), previous)
    }

    /// Returns a copy without `name` in this layer.
    ///
    /// A value defined in the defaults shows through again afterwards.
    #[must_use]
    pub fn remove(&self, name: &str) -> Self {
        Self {
            values: self.values.without(name),
            defaults: self.defaults.clone(),
        }
    }

    /// Creates a new layer holding `overrides`, with `self` as its defaults.
    #[must_use]
    pub fn overridden_by(&self, overrides: impl IntoIterator<Item = (String, Setting)>) -> Self {
        Self {
            values: overrides.into_iter().collect(),
            defaults: Some(Box::new(self.clone())),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    #[must_use]
    pub fn contains_locally(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Flattens all layers into one map. Overrides win over defaults.
    #[must_use]
    pub fn resolved(&self) -> ImHashMap<String, Setting> {
        let mut result = self
            .defaults
            .as_ref()
            .map(|d| d.resolved())
            .unwrap_or_default();

        for (name, value) in &self.values {
            result.insert(name.clone(), value.clone());
        }
        result
    }

    /// Every resolved setting rendered with its `Display` form.
    #[must_use]
    pub fn as_strings(&self) -> HashMap<String, String> {
        let flat: HashMap<String, Setting> = self.resolved().into_iter().collect();
        map_values(&flat, Setting::to_string)
    }

    /// Resolved settings in name order, for stable output.
    #[must_use]
    pub fn to_sorted(&self) -> BTreeMap<String, Setting> {
        self.resolved().into_iter().collect()
    }

    /// Number of layers, counting this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.defaults.as_ref().map(|d| d.depth()).unwrap_or(0)
    }
}
