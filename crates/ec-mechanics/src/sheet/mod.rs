//! Documents a test reads from and spends resources on.
//!
//! The engine never owns characters or items. It holds shared handles to
//! anything implementing [`TestActor`] or [`TestItem`] and refers to them
//! by [`DocumentId`] in serialized test data. [`Character`] and [`Gear`] are
//! in-memory implementations backed by serde sheets.

pub mod character;
pub mod gear;
pub mod track;

pub use character::{Character, CharacterSheet};
pub use gear::{Gear, GearSheet};
pub use track::Track;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::ActionConfig;
use crate::config::EdgeCaps;
use crate::modifier::{ModifierContext, ModifierType};
use crate::value::ModPart;

/// Identity of a document, used for weak references in test data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current Edge of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeState {
    /// Edge attribute; the number of dice push the limit adds.
    pub value: i32,
    /// Edge uses left.
    pub uses: i32,
    /// Maximum uses.
    pub max: i32,
}

/// Actions an actor has left this combat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionBudget {
    /// Major actions left.
    pub major: i32,
    /// Minor actions left.
    pub minor: i32,
}

/// Result of trying to gain a point of Edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeGainOutcome {
    /// One Edge use was gained.
    Gained,
    /// The actor already gained the maximum this round.
    RoundCapReached,
    /// The actor's Edge uses are at the cap.
    PoolFull,
}

/// A weapon fire mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireMode {
    /// Display name, e.g. "Burst Fire".
    pub label: String,
    /// Rounds fired per attack.
    pub rounds: i32,
}

impl Default for FireMode {
    fn default() -> Self {
        Self {
            label: "Single Shot".into(),
            rounds: 1,
        }
    }
}

/// An acting entity: the source of dice, modifiers, and Edge.
///
/// All mutation goes through `&self`; implementations guard their own state
/// so every spend is a single check-then-act step.
pub trait TestActor: Send + Sync + std::fmt::Debug {
    /// Document id.
    fn id(&self) -> DocumentId;

    /// Display name.
    fn name(&self) -> String;

    /// Attribute rating, if the actor has it.
    fn attribute(&self, name: &str) -> Option<i32>;

    /// Skill rating, if the actor has it.
    fn skill(&self, name: &str) -> Option<i32>;

    /// Current Edge.
    fn edge(&self) -> EdgeState;

    /// Spend one Edge use. Returns false if none is left.
    fn spend_edge(&self) -> bool;

    /// Total of one modifier type in the given context.
    fn modifier_total(&self, kind: ModifierType, context: &ModifierContext) -> i32;

    /// A single value replacing every individual modifier, if set.
    fn modifier_override(&self, _context: &ModifierContext) -> Option<i32> {
        None
    }

    /// Actions left this round, or `None` when actions are not tracked.
    fn actions_left(&self) -> Option<ActionBudget> {
        None
    }

    /// Spend a major action. Returns false if none is left.
    fn spend_major_action(&self) -> bool {
        true
    }

    /// Spend a minor action. Returns false if none is left.
    fn spend_minor_action(&self) -> bool {
        true
    }

    /// Names of the actor's qualities.
    fn qualities(&self) -> Vec<String> {
        Vec::new()
    }

    /// Try to gain one Edge use within the given caps.
    fn gain_edge(&self, caps: &EdgeCaps) -> EdgeGainOutcome;
}

/// An item providing an action template and consumables.
pub trait TestItem: Send + Sync + std::fmt::Debug {
    /// Document id.
    fn id(&self) -> DocumentId;

    /// Display name.
    fn name(&self) -> String;

    /// The action this item performs.
    fn action(&self) -> ActionConfig;

    /// Pool contributions the item adds (recoil compensation, smartlinks).
    fn modifiers(&self, _context: &ModifierContext) -> Vec<ModPart> {
        Vec::new()
    }

    /// Returns true for firearms and other ammunition-fed weapons.
    fn is_ranged_weapon(&self) -> bool {
        false
    }

    /// Rounds loaded, or `None` when ammunition is not tracked.
    fn ammo_left(&self) -> Option<i32> {
        None
    }

    /// Returns true if at least `rounds` are loaded.
    fn has_ammo(&self, rounds: i32) -> bool {
        self.ammo_left().is_none_or(|left| left >= rounds)
    }

    /// Fire `rounds`. Returns false and fires nothing if fewer are loaded.
    fn use_ammo(&self, _rounds: i32) -> bool {
        true
    }

    /// Selected fire mode.
    fn fire_mode(&self) -> Option<FireMode> {
        None
    }
}

/// Shared handle to an actor.
pub type ActorRef = Arc<dyn TestActor>;

/// Shared handle to an item.
pub type ItemRef = Arc<dyn TestItem>;

/// Resolves document ids to live documents.
pub trait DocumentResolver {
    /// Look up an actor.
    fn actor(&self, id: DocumentId) -> Option<ActorRef>;

    /// Look up an item.
    fn item(&self, id: DocumentId) -> Option<ItemRef>;
}

/// An in-memory document store.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    actors: HashMap<DocumentId, ActorRef>,
    items: HashMap<DocumentId, ItemRef>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor under its own id.
    pub fn insert_actor(&mut self, actor: ActorRef) {
        self.actors.insert(actor.id(), actor);
    }

    /// Register an item under its own id.
    pub fn insert_item(&mut self, item: ItemRef) {
        self.items.insert(item.id(), item);
    }
}

impl DocumentResolver for Registry {
    fn actor(&self, id: DocumentId) -> Option<ActorRef> {
        self.actors.get(&id).cloned()
    }

    fn item(&self, id: DocumentId) -> Option<ItemRef> {
        self.items.get(&id).cloned()
    }
}
