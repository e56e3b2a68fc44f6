//! Computed numeric fields.
//!
//! A [`ValueField`] holds a base, an ordered list of named contributions,
//! and an optional override. Its `value` is derived and always recomputed
//! from those parts, never edited directly.

use serde::{Deserialize, Serialize};

use crate::parts::PartsList;

/// A named numeric contribution to a [`ValueField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModPart {
    /// Name of the contributing source.
    pub name: String,
    /// Contribution, possibly fractional until rounded.
    pub value: f64,
}

impl ModPart {
    /// Create a named contribution.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Optional clamp range applied when totalling a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Lower bound.
    pub min: Option<i32>,
    /// Upper bound.
    pub max: Option<i32>,
}

impl Bounds {
    /// No clamping.
    pub const NONE: Self = Self {
        min: None,
        max: None,
    };

    /// Clamp from below only.
    pub const fn at_least(min: i32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Clamp to `min..=max`.
    pub const fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    fn apply(self, mut value: i32) -> i32 {
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        value
    }
}

/// A base value plus named modifiers, with an optional override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueField {
    /// Display label.
    pub label: String,
    /// Base value before modifiers.
    pub base: f64,
    /// Ordered named contributions.
    #[serde(rename = "mod")]
    pub mods: Vec<ModPart>,
    /// Replaces base and modifiers entirely when set.
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_part: Option<ModPart>,
    /// Derived total.
    pub value: i32,
}

impl ValueField {
    /// Create a field with a label and base value.
    pub fn new(label: impl Into<String>, base: f64) -> Self {
        let mut field = Self {
            label: label.into(),
            base,
            ..Self::default()
        };
        field.calc_total(Bounds::NONE);
        field
    }

    /// Edit the modifier list.
    pub fn parts(&mut self) -> PartsList<'_> {
        PartsList::new(&mut self.mods)
    }

    /// Sum of all modifier contributions.
    pub fn mod_total(&self) -> f64 {
        self.mods.iter().map(|part| part.value).sum()
    }

    /// Set an override that replaces base and modifiers.
    pub fn set_override(&mut self, name: impl Into<String>, value: f64) {
        self.override_part = Some(ModPart::new(name, value));
    }

    /// Remove the override.
    pub fn clear_override(&mut self) {
        self.override_part = None;
    }

    /// Returns true if an override is set.
    pub fn has_override(&self) -> bool {
        self.override_part.is_some()
    }

    /// Round base, every modifier, and the override up to whole numbers.
    ///
    /// Each component is rounded on its own; the total is never rounded.
    pub fn round(&mut self) {
        self.base = self.base.ceil();
        for part in &mut self.mods {
            part.value = part.value.ceil();
        }
        if let Some(part) = &mut self.override_part {
            part.value = part.value.ceil();
        }
    }

    /// Recompute `value` from the current components and clamp it.
    ///
    /// Components are expected to be rounded already; see [`ValueField::round`].
    pub fn calc_total(&mut self, bounds: Bounds) -> i32 {
        let raw = match &self.override_part {
            Some(part) => part.value,
            None => self.base + self.mod_total(),
        };
        self.value = bounds.apply(raw as i32);
        self.value
    }

    /// Round components, then recompute.
    pub fn recompute(&mut self, bounds: Bounds) -> i32 {
        self.round();
        self.calc_total(bounds)
    }

    /// Clear base, modifiers, override, and value, keeping the label.
    pub fn reset(&mut self) {
        self.base = 0.0;
        self.mods.clear();
        self.override_part = None;
        self.value = 0;
    }
}

impl std::fmt::Display for ValueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}
