use crate::model::SystemType;

/// Whether a group of fields is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    /// `Shown` if `shown`, else `Hidden`.
    pub fn from_bool(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

/// A group of fields whose visibility the form controller switches.
pub trait FieldGroupView {
    fn set_visibility(&mut self, visibility: Visibility);
}

/// Reacts to a change of the system-type selector.
///
/// Shows the electric group for `"electric"`, the ice group for `"ice"`, and
/// hides both for any other value. Calling it again with the same value
/// leaves the groups as they are.
pub fn on_system_type_change(
    value: &str,
    electric: &mut impl FieldGroupView,
    ice: &mut impl FieldGroupView,
) {
    let selected = SystemType::from_selector(value);
    tracing::debug!(value, ?selected, "system type changed");
    electric.set_visibility(Visibility::from_bool(selected == Some(SystemType::Electric)));
    ice.set_visibility(Visibility::from_bool(selected == Some(SystemType::Ice)));
}
