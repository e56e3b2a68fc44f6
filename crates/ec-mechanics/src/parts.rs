//! Named contributions to a value field.

use crate::value::ModPart;

/// A view over a modifier list with name-aware editing.
///
/// Every modifier source goes through this type. [`PartsList::add_unique_part`]
/// keeps names unique; only [`PartsList::add_part`] may produce duplicates,
/// which is how running totals such as extended test hits accumulate.
#[derive(Debug)]
pub struct PartsList<'a> {
    parts: &'a mut Vec<ModPart>,
}

impl<'a> PartsList<'a> {
    /// Wrap an existing modifier list.
    pub fn new(parts: &'a mut Vec<ModPart>) -> Self {
        Self { parts }
    }

    /// Append a part, even if one with the same name exists.
    pub fn add_part(&mut self, name: impl Into<String>, value: f64) {
        self.parts.push(ModPart::new(name, value));
    }

    /// Replace the part with this name in place, or append it.
    ///
    /// A zero value is not kept unless `bypass_zero` is set; any existing part
    /// with that name is removed instead.
    pub fn add_unique_part(&mut self, name: impl Into<String>, value: f64, bypass_zero: bool) {
        let name = name.into();
        if value == 0.0 && !bypass_zero {
            self.remove_part(&name);
            return;
        }
        match self.parts.iter().position(|part| part.name == name) {
            Some(index) => {
                self.parts[index].value = value;
                let mut position = 0;
                self.parts.retain(|part| {
                    let keep = position <= index || part.name != name;
                    position += 1;
                    keep
                });
            }
            None => self.parts.push(ModPart::new(name, value)),
        }
    }

    /// Remove every part with this name. Returns true if any was removed.
    pub fn remove_part(&mut self, name: &str) -> bool {
        let before = self.parts.len();
        self.parts.retain(|part| part.name != name);
        self.parts.len() != before
    }

    /// Value of the first part with this name.
    pub fn get_part_value(&self, name: &str) -> Option<f64> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| part.value)
    }

    /// Sum of all parts.
    pub fn total(&self) -> f64 {
        self.parts.iter().map(|part| part.value).sum()
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if there are no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
