//! In-memory character documents.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::track::Track;
use super::{ActionBudget, DocumentId, EdgeGainOutcome, EdgeState, TestActor};
use crate::config::EdgeCaps;
use crate::modifier::{EnvironmentalFactor, ModifierContext, ModifierType};

/// Serializable character data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSheet {
    /// Document id.
    pub id: DocumentId,
    /// Display name.
    pub name: String,
    /// Attribute ratings by lowercase name. `edge` is the Edge attribute.
    pub attributes: BTreeMap<String, i32>,
    /// Skill ratings by lowercase name.
    pub skills: BTreeMap<String, i32>,
    /// Edge uses.
    pub edge: Track,
    /// Edge gained during the current combat round.
    pub edge_gained_this_round: i32,
    /// Current situational modifiers.
    pub modifiers: BTreeMap<ModifierType, i32>,
    /// Environmental modifiers by factor, summed into `environmental`.
    pub environmental: BTreeMap<EnvironmentalFactor, i32>,
    /// Replaces every modifier when set.
    pub modifier_override: Option<i32>,
    /// Actions left this round; untracked when absent.
    pub actions: Option<ActionBudget>,
    /// Qualities by name.
    pub qualities: Vec<String>,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            id: DocumentId::new(),
            name: String::new(),
            attributes: BTreeMap::new(),
            skills: BTreeMap::new(),
            edge: Track::new("Edge", 0),
            edge_gained_this_round: 0,
            modifiers: BTreeMap::new(),
            environmental: BTreeMap::new(),
            modifier_override: None,
            actions: None,
            qualities: Vec::new(),
        }
    }
}

impl CharacterSheet {
    /// An empty sheet with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set an attribute rating. Setting `edge` also fills the Edge track.
    pub fn with_attribute(mut self, name: &str, rating: i32) -> Self {
        let key = name.to_lowercase();
        if key == "edge" {
            self.edge = Track::new("Edge", rating);
        }
        self.attributes.insert(key, rating);
        self
    }

    /// Set a skill rating.
    pub fn with_skill(mut self, name: &str, rating: i32) -> Self {
        self.skills.insert(name.to_lowercase(), rating);
        self
    }

    /// Set a situational modifier.
    pub fn with_modifier(mut self, kind: ModifierType, value: i32) -> Self {
        self.modifiers.insert(kind, value);
        self
    }

    /// Set an environmental factor.
    pub fn with_environment(mut self, factor: EnvironmentalFactor, value: i32) -> Self {
        self.environmental.insert(factor, value);
        self
    }

    /// Track actions for a combat round.
    pub fn with_actions(mut self, major: i32, minor: i32) -> Self {
        self.actions = Some(ActionBudget { major, minor });
        self
    }

    /// Add a quality.
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.qualities.push(quality.into());
        self
    }
}

/// A character shared between tests.
#[derive(Debug)]
pub struct Character {
    sheet: Mutex<CharacterSheet>,
}

impl Character {
    /// Wrap a sheet.
    pub fn new(sheet: CharacterSheet) -> Self {
        Self {
            sheet: Mutex::new(sheet),
        }
    }

    /// Wrap a sheet in a shared handle.
    pub fn shared(sheet: CharacterSheet) -> Arc<Self> {
        Arc::new(Self::new(sheet))
    }

    /// A copy of the current sheet.
    pub fn snapshot(&self) -> CharacterSheet {
        self.lock().clone()
    }

    /// Start a new combat round: reset Edge gain and refill actions.
    pub fn start_round(&self, major: i32, minor: i32) {
        let mut sheet = self.lock();
        sheet.edge_gained_this_round = 0;
        if sheet.actions.is_some() {
            sheet.actions = Some(ActionBudget { major, minor });
        }
    }

    fn lock(&self) -> MutexGuard<'_, CharacterSheet> {
        self.sheet.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TestActor for Character {
    fn id(&self) -> DocumentId {
        self.lock().id
    }

    fn name(&self) -> String {
        self.lock().name.clone()
    }

    fn attribute(&self, name: &str) -> Option<i32> {
        self.lock().attributes.get(&name.to_lowercase()).copied()
    }

    fn skill(&self, name: &str) -> Option<i32> {
        self.lock().skills.get(&name.to_lowercase()).copied()
    }

    fn edge(&self) -> EdgeState {
        let sheet = self.lock();
        EdgeState {
            value: sheet.attributes.get("edge").copied().unwrap_or(0),
            uses: sheet.edge.current,
            max: sheet.edge.max,
        }
    }

    fn spend_edge(&self) -> bool {
        self.lock().edge.try_spend(1)
    }

    fn modifier_total(&self, kind: ModifierType, context: &ModifierContext) -> i32 {
        let sheet = self.lock();
        match kind {
            ModifierType::Environmental => sheet
                .environmental
                .iter()
                .filter(|(factor, _)| context.applies(**factor))
                .map(|(_, value)| *value)
                .sum(),
            other => sheet.modifiers.get(&other).copied().unwrap_or(0),
        }
    }

    fn modifier_override(&self, _context: &ModifierContext) -> Option<i32> {
        self.lock().modifier_override
    }

    fn actions_left(&self) -> Option<ActionBudget> {
        self.lock().actions
    }

    fn spend_major_action(&self) -> bool {
        let mut sheet = self.lock();
        match sheet.actions.as_mut() {
            None => true,
            Some(budget) if budget.major > 0 => {
                budget.major -= 1;
                true
            }
            Some(_) => false,
        }
    }

    fn spend_minor_action(&self) -> bool {
        let mut sheet = self.lock();
        match sheet.actions.as_mut() {
            None => true,
            Some(budget) if budget.minor > 0 => {
                budget.minor -= 1;
                true
            }
            Some(_) => false,
        }
    }

    fn qualities(&self) -> Vec<String> {
        self.lock().qualities.clone()
    }

    fn gain_edge(&self, caps: &EdgeCaps) -> EdgeGainOutcome {
        let mut sheet = self.lock();
        if sheet.edge_gained_this_round >= caps.gain_per_round {
            return EdgeGainOutcome::RoundCapReached;
        }
        if sheet.edge.current >= caps.pool_cap {
            return EdgeGainOutcome::PoolFull;
        }
        sheet.edge.current += 1;
        sheet.edge.max = sheet.edge.max.max(sheet.edge.current);
        sheet.edge_gained_this_round += 1;
        EdgeGainOutcome::Gained
    }
}
