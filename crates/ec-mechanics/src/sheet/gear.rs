//! In-memory item documents.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::track::Track;
use super::{DocumentId, FireMode, TestItem};
use crate::action::ActionConfig;
use crate::modifier::ModifierContext;
use crate::value::ModPart;

/// Serializable item data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearSheet {
    /// Document id.
    pub id: DocumentId,
    /// Display name.
    pub name: String,
    /// The action the item performs.
    pub action: ActionConfig,
    /// Pool contributions the item adds.
    pub modifiers: Vec<ModPart>,
    /// Whether the item is an ammunition-fed weapon.
    pub ranged: bool,
    /// Loaded rounds; untracked when absent.
    pub ammo: Option<Track>,
    /// Selected fire mode.
    pub fire_mode: Option<FireMode>,
}

impl Default for GearSheet {
    fn default() -> Self {
        Self {
            id: DocumentId::new(),
            name: String::new(),
            action: ActionConfig::default(),
            modifiers: Vec::new(),
            ranged: false,
            ammo: None,
            fire_mode: None,
        }
    }
}

impl GearSheet {
    /// An empty sheet with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the action template.
    pub fn with_action(mut self, action: ActionConfig) -> Self {
        self.action = action;
        self
    }

    /// Make the item a ranged weapon with a magazine.
    pub fn with_magazine(mut self, loaded: i32, capacity: i32) -> Self {
        self.ranged = true;
        self.ammo = Some(Track::with_current("Ammo", loaded, capacity));
        self
    }

    /// Select a fire mode.
    pub fn with_fire_mode(mut self, label: impl Into<String>, rounds: i32) -> Self {
        self.fire_mode = Some(FireMode {
            label: label.into(),
            rounds,
        });
        self
    }

    /// Add a pool contribution.
    pub fn with_modifier(mut self, name: impl Into<String>, value: f64) -> Self {
        self.modifiers.push(ModPart::new(name, value));
        self
    }
}

/// An item shared between tests.
#[derive(Debug)]
pub struct Gear {
    sheet: Mutex<GearSheet>,
}

impl Gear {
    /// Wrap a sheet.
    pub fn new(sheet: GearSheet) -> Self {
        Self {
            sheet: Mutex::new(sheet),
        }
    }

    /// Wrap a sheet in a shared handle.
    pub fn shared(sheet: GearSheet) -> Arc<Self> {
        Arc::new(Self::new(sheet))
    }

    /// A copy of the current sheet.
    pub fn snapshot(&self) -> GearSheet {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, GearSheet> {
        self.sheet.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TestItem for Gear {
    fn id(&self) -> DocumentId {
        self.lock().id
    }

    fn name(&self) -> String {
        self.lock().name.clone()
    }

    fn action(&self) -> ActionConfig {
        self.lock().action.clone()
    }

    fn modifiers(&self, _context: &ModifierContext) -> Vec<ModPart> {
        self.lock().modifiers.clone()
    }

    fn is_ranged_weapon(&self) -> bool {
        self.lock().ranged
    }

    fn ammo_left(&self) -> Option<i32> {
        self.lock().ammo.as_ref().map(|ammo| ammo.current)
    }

    fn use_ammo(&self, rounds: i32) -> bool {
        match self.lock().ammo.as_mut() {
            Some(ammo) => ammo.try_spend(rounds),
            None => true,
        }
    }

    fn fire_mode(&self) -> Option<FireMode> {
        self.lock().fire_mode.clone()
    }
}
