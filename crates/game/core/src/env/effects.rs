//! Effect definitions known to the host.

use std::collections::HashMap;

use crate::state::EffectKind;

/// Colour used for untinted layers and unbound rings.
pub const WHITE: u32 = 0xFF_FF_FF;

/// Resolves effect identifiers against the host's effect registry.
///
/// A ring whose tag names an identifier the oracle does not know behaves as
/// an unbound ring.
pub trait EffectOracle: Send + Sync {
    fn definition(&self, kind: &EffectKind) -> Option<&EffectDefinition>;

    /// Effects that get a ready-made ring in the creative listing, in order.
    fn default_ring_effects(&self) -> Vec<&EffectDefinition>;

    fn is_known(&self, kind: &EffectKind) -> bool {
        self.definition(kind).is_some()
    }
}

/// Static description of one effect kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDefinition {
    pub kind: EffectKind,
    /// Translation key of the effect name.
    pub name_key: String,
    /// Potion liquid colour (0xRRGGBB), used to tint the ring gem.
    pub liquid_color: u32,
    /// Whether a ring for this effect is listed by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_ring: bool,
}

impl EffectDefinition {
    pub fn new(kind: EffectKind, name_key: impl Into<String>, liquid_color: u32) -> Self {
        Self {
            kind,
            name_key: name_key.into(),
            liquid_color,
            default_ring: false,
        }
    }

    #[must_use]
    pub fn with_default_ring(mut self) -> Self {
        self.default_ring = true;
        self
    }
}

/// In-memory effect registry preserving insertion order.
#[derive(Clone, Debug, Default)]
pub struct EffectCatalog {
    definitions: Vec<EffectDefinition>,
    index: HashMap<EffectKind, usize>,
}

impl EffectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a definition. Replacing keeps the original position.
    pub fn insert(&mut self, definition: EffectDefinition) {
        match self.index.get(&definition.kind) {
            Some(&position) => self.definitions[position] = definition,
            None => {
                self.index
                    .insert(definition.kind.clone(), self.definitions.len());
                self.definitions.push(definition);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectDefinition> {
        self.definitions.iter()
    }
}

impl FromIterator<EffectDefinition> for EffectCatalog {
    fn from_iter<T: IntoIterator<Item = EffectDefinition>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}

impl EffectOracle for EffectCatalog {
    fn definition(&self, kind: &EffectKind) -> Option<&EffectDefinition> {
        self.index.get(kind).map(|&i| &self.definitions[i])
    }

    fn default_ring_effects(&self) -> Vec<&EffectDefinition> {
        self.definitions.iter().filter(|d| d.default_ring).collect()
    }
}
