//! Command surface: the identifiers the host's command palette triggers.
//!
//! Every command is a zero-argument trigger into one shell operation. The
//! set is closed; unknown identifiers resolve to `None`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Activate,
    RefreshDirectory,
    OpenHome,
    OpenConsole,
    OpenArchitectureView,
    ShowWidget,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Activate,
        Command::RefreshDirectory,
        Command::OpenHome,
        Command::OpenConsole,
        Command::OpenArchitectureView,
        Command::ShowWidget,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Activate => "activate",
            Command::RefreshDirectory => "refresh-directory",
            Command::OpenHome => "open-home",
            Command::OpenConsole => "open-console",
            Command::OpenArchitectureView => "open-architecture-view",
            Command::ShowWidget => "show-widget",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Command::from_name("open-settings"), None);
        assert_eq!(Command::from_name(""), None);
    }

    #[test]
    fn test_names_are_palette_identifiers() {
        assert_eq!(Command::Activate.name(), "activate");
        assert_eq!(Command::RefreshDirectory.name(), "refresh-directory");
        assert_eq!(Command::ShowWidget.name(), "show-widget");
    }
}
