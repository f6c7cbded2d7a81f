//! Navigation and status-line state

/// The five mutually exclusive screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    List,
    Add,
    Search,
    Remove,
}

impl Screen {
    /// Navigation order
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::List,
        Screen::Add,
        Screen::Search,
        Screen::Remove,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Screen> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Screen {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::List => "View Library",
            Screen::Add => "Add Book",
            Screen::Search => "Search Books",
            Screen::Remove => "Remove Book",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Personal Library Manager",
            Screen::List => "My Library",
            Screen::Add => "Add a New Book",
            Screen::Search => "Search Books",
            Screen::Remove => "Remove Books",
        }
    }

    /// Whether plain character keys go into a text field on this screen
    pub fn takes_text(self) -> bool {
        matches!(self, Screen::Add | Screen::Search)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

/// One-line status message shown under the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps() {
        assert_eq!(Screen::Remove.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.previous(), Screen::Remove);
        assert_eq!(Screen::List.next(), Screen::Add);
    }

    #[test]
    fn index_roundtrips() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_index(screen.index()), Some(screen));
        }
        assert_eq!(Screen::from_index(5), None);
    }
}
