use std::fmt;

/// Propulsion system discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemType {
    /// Battery-electric propulsion.
    Electric,
    /// Internal combustion engine.
    Ice,
}

static ALL_SYSTEM_TYPES: &[SystemType] = &[SystemType::Electric, SystemType::Ice];

impl SystemType {
    /// Returns the wire value (`"electric"` or `"ice"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electric => "electric",
            Self::Ice => "ice",
        }
    }

    /// Returns the label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Electric => "Електрична",
            Self::Ice => "ДВЗ",
        }
    }

    /// Matches a selector value exactly. Anything but the two wire values is `None`.
    pub fn from_selector(value: &str) -> Option<Self> {
        ALL_SYSTEM_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
    }

    /// Returns both system types in selector order.
    pub fn all() -> &'static [SystemType] {
        ALL_SYSTEM_TYPES
    }
}

#[mutants::skip]
impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
