//! Page shell state: theme, mobile menu, and scroll targets.
//!
//! The header, hero, about, features and footer are presentational. The only
//! state the shell carries is the theme flag and whether the mobile menu is
//! open. Neither survives a reload.
//!
//! ## Scroll lookup
//!
//! Two paths bring a section into view, and both are kept:
//!
//! - [`ShellState::navigate`] is used by the header and mobile menu. The
//!   target is a typed [`NavigationTarget`], so it always resolves, and the
//!   mobile menu closes as a side effect.
//! - [`ShellState::scroll_to_id`] is used by the hero buttons. It resolves a
//!   raw anchor id and silently does nothing for an unknown id. It never
//!   touches the menu.

/// Colour scheme applied at the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// A section the page can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationTarget {
    Hero,
    Gallery,
    About,
}

impl NavigationTarget {
    /// Header order.
    pub const ALL: [NavigationTarget; 3] = [
        NavigationTarget::Hero,
        NavigationTarget::Gallery,
        NavigationTarget::About,
    ];

    /// The `id` attribute of the section element.
    pub fn anchor_id(self) -> &'static str {
        match self {
            NavigationTarget::Hero => "hero",
            NavigationTarget::Gallery => "gallery",
            NavigationTarget::About => "about",
        }
    }

    pub fn from_anchor_id(id: &str) -> Option<NavigationTarget> {
        Self::ALL.into_iter().find(|t| t.anchor_id() == id)
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            NavigationTarget::Hero => "Главная",
            NavigationTarget::Gallery => "Галерея",
            NavigationTarget::About => "О нас",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub theme: Theme,
    pub menu_open: bool,
}

impl ShellState {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Header navigation: closes the menu and returns the target to scroll to.
    pub fn navigate(&mut self, target: NavigationTarget) -> NavigationTarget {
        self.menu_open = false;
        target
    }

    /// Hero-button navigation by raw anchor id. Unknown ids are a no-op.
    pub fn scroll_to_id(&self, id: &str) -> Option<NavigationTarget> {
        NavigationTarget::from_anchor_id(id)
    }
}
