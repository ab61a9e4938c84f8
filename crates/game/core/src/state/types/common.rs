use std::fmt;

/// Namespace used when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Namespaced identifier (`namespace:path`) used for items, effects and recipes.
///
/// Both halves are stored lowercase. A bare `path` is placed in the
/// [`DEFAULT_NAMESPACE`], matching how the host resolves resource locations.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", from = "String"))]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    pub fn new(namespace: &str, path: &str) -> Self {
        Self {
            namespace: namespace.trim().to_ascii_lowercase(),
            path: path.trim().to_ascii_lowercase(),
        }
    }

    /// Parses `namespace:path` or a bare `path`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, raw),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a sibling identifier in the same namespace with a new path.
    pub fn with_path(&self, path: &str) -> Self {
        Self::new(&self.namespace, path)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl From<String> for ResourceId {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for ResourceId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.to_string()
    }
}

/// Identifier of a status-effect type (speed, regeneration, ...).
///
/// Equality is by identifier only; whether the host actually knows the
/// effect is answered by an [`EffectOracle`](crate::env::EffectOracle).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectKind(pub ResourceId);

impl EffectKind {
    pub fn parse(raw: &str) -> Self {
        Self(ResourceId::parse(raw))
    }

    pub fn id(&self) -> &ResourceId {
        &self.0
    }
}

impl From<&str> for EffectKind {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Index of one ring-category equip slot on a wearer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingSlot(pub usize);

impl fmt::Display for RingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring#{}", self.0)
    }
}

/// Host simulation time step. All durations are expressed in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
