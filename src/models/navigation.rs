//! Fixed navigation menu: three entries, created once, never mutated.

use crate::core::command::Command;

/// Closed set of navigation actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionId {
    OpenHome,
    OpenConsole,
    OpenArchitectureView,
}

impl ActionId {
    pub fn command(&self) -> Command {
        match self {
            ActionId::OpenHome => Command::OpenHome,
            ActionId::OpenConsole => Command::OpenConsole,
            ActionId::OpenArchitectureView => Command::OpenArchitectureView,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub action: ActionId,
    pub icon: &'static str,
}

const ENTRIES: [NavigationEntry; 3] = [
    NavigationEntry {
        label: "Home",
        action: ActionId::OpenHome,
        icon: "home",
    },
    NavigationEntry {
        label: "Console",
        action: ActionId::OpenConsole,
        icon: "terminal",
    },
    NavigationEntry {
        label: "Architecture View",
        action: ActionId::OpenArchitectureView,
        icon: "type-hierarchy",
    },
];

pub struct NavigationRegistry;

impl NavigationRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Insertion order is display order.
    pub fn entries(&self) -> &'static [NavigationEntry; 3] {
        &ENTRIES
    }

    pub fn resolve_action(&self, entry: &NavigationEntry) -> ActionId {
        entry.action
    }
}

impl Default for NavigationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_fixed_order() {
        let registry = NavigationRegistry::new();
        let entries = registry.entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "Home");
        assert_eq!(entries[1].label, "Console");
        assert_eq!(entries[2].label, "Architecture View");
    }

    #[test]
    fn test_resolve_action_total() {
        let registry = NavigationRegistry::new();
        let actions: Vec<ActionId> = registry
            .entries()
            .iter()
            .map(|e| registry.resolve_action(e))
            .collect();

        assert_eq!(
            actions,
            vec![
                ActionId::OpenHome,
                ActionId::OpenConsole,
                ActionId::OpenArchitectureView,
            ]
        );
    }

    #[test]
    fn test_action_to_command_mapping() {
        assert_eq!(ActionId::OpenHome.command().name(), "open-home");
        assert_eq!(ActionId::OpenConsole.command().name(), "open-console");
        assert_eq!(
            ActionId::OpenArchitectureView.command().name(),
            "open-architecture-view"
        );
    }
}
