use serde::Deserialize;

pub const MENU_OPEN: &str = "aberto";

/// Visibility of the mobile navigation menu.
///
/// The state lives in the page URL (`/?menu=aberto`), every other URL renders
/// the menu closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn open() -> Self {
        Self { open: true }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub fn href(&self) -> &'static str {
        if self.open { "/?menu=aberto" } else { "/" }
    }

    /// Target of the menu button.
    pub fn toggle_href(&self) -> &'static str {
        self.toggled().href()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub menu: Option<String>,
}

impl From<MenuQuery> for MenuState {
    fn from(query: MenuQuery) -> Self {
        match query.menu.as_deref() {
            Some(MENU_OPEN) => MenuState::open(),
            _ => MenuState::closed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_toggles_restore_state() {
        for initial in [MenuState::open(), MenuState::closed()] {
            let mut menu = initial;
            menu.toggle();
            assert_ne!(menu, initial);
            menu.toggle();
            assert_eq!(menu, initial);
        }
    }

    #[test]
    fn button_opens_then_link_closes() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.toggle_href(), "/?menu=aberto");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.toggle_href(), "/");

        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn query_parsing() {
        let open = MenuQuery {
            menu: Some("aberto".to_owned()),
        };
        let other = MenuQuery {
            menu: Some("fechado".to_owned()),
        };

        assert!(MenuState::from(open).is_open());
        assert!(!MenuState::from(other).is_open());
        assert!(!MenuState::from(MenuQuery::default()).is_open());
    }
}
