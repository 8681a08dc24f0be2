//! Menu screens: main menu, hero choice and the about page.

use crate::screen::{GameCondition, Key, MenuView, MessageView, ScreenData};

/// Items of the main menu.
pub const MAIN_MENU_ITEMS: [&str; 3] = ["New Game", "About", "Exit"];

/// Items of the hero choice menu.
pub const HEROES_MENU_ITEMS: [&str; 2] = ["Chuck Norris", "New Hero"];

/// A list of items with a wrap-around cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    items: &'static [&'static str],
    selected: usize,
}

impl Menu {
    /// Create a menu with the first item selected.
    #[must_use]
    pub const fn new(items: &'static [&'static str]) -> Self {
        Self { items, selected: 0 }
    }

    /// Get the item labels.
    #[must_use]
    pub const fn items(&self) -> &'static [&'static str] {
        self.items
    }

    /// Index of the selected item.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Move the cursor with Up/Down, wrapping at both ends.
    ///
    /// Returns `false` for keys that are not navigation keys.
    pub fn navigate(&mut self, key: Key) -> bool {
        let count = self.items.len();
        if count == 0 {
            return false;
        }
        match key {
            Key::Down => self.selected = (self.selected + 1) % count,
            Key::Up => self.selected = (self.selected + count - 1) % count,
            _ => return false,
        }
        true
    }

    /// Screen data for this menu.
    #[must_use]
    pub const fn view(&self) -> MenuView<'static> {
        MenuView {
            items: self.items,
            selected: self.selected,
        }
    }
}

/// The top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainMenu {
    menu: Menu,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self {
            menu: Menu::new(&MAIN_MENU_ITEMS),
        }
    }
}

impl MainMenu {
    /// Get the underlying menu.
    #[must_use]
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Handle a key press.
    pub fn handle(&mut self, key: Key) -> GameCondition {
        if key == Key::Enter {
            return match self.menu.selected() {
                0 => GameCondition::HeroesMenu,
                1 => GameCondition::About,
                _ => GameCondition::Exit,
            };
        }
        self.menu.navigate(key);
        GameCondition::MainMenu
    }

    /// Screen data for this state.
    #[must_use]
    pub const fn render(&self) -> ScreenData<'static> {
        ScreenData::Menu(self.menu.view())
    }
}

/// Choice between the preset hero and a custom one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroesMenu {
    menu: Menu,
}

impl Default for HeroesMenu {
    fn default() -> Self {
        Self {
            menu: Menu::new(&HEROES_MENU_ITEMS),
        }
    }
}

impl HeroesMenu {
    /// Get the underlying menu.
    #[must_use]
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Handle a key press.
    pub fn handle(&mut self, key: Key) -> GameCondition {
        match key {
            Key::Enter if self.menu.selected() == 0 => GameCondition::PlayAsChuck,
            Key::Enter => GameCondition::CreateHero,
            Key::Escape => GameCondition::MainMenu,
            other => {
                self.menu.navigate(other);
                GameCondition::HeroesMenu
            }
        }
    }

    /// Screen data for this state.
    #[must_use]
    pub const fn render(&self) -> ScreenData<'static> {
        ScreenData::Menu(self.menu.view())
    }
}

/// The about page: a static text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutScreen {
    text: String,
}

impl AboutScreen {
    /// Create the page with the given text.
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self { text }
    }

    /// Handle a key press: Escape goes back, everything else is inert.
    #[must_use]
    pub const fn handle(key: Key) -> GameCondition {
        if matches!(key, Key::Escape) {
            GameCondition::MainMenu
        } else {
            GameCondition::About
        }
    }

    /// Screen data for this state.
    #[must_use]
    pub fn render(&self) -> ScreenData<'_> {
        ScreenData::Message(MessageView { text: &self.text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_wraps() {
        let mut menu = Menu::new(&MAIN_MENU_ITEMS);
        assert!(menu.navigate(Key::Up));
        assert_eq!(menu.selected(), 2);
        assert!(menu.navigate(Key::Down));
        assert_eq!(menu.selected(), 0);
        assert!(menu.navigate(Key::Down));
        assert_eq!(menu.selected(), 1);
        assert!(!menu.navigate(Key::Left));
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_main_menu_choices() {
        let mut main = MainMenu::default();
        assert_eq!(main.handle(Key::Enter), GameCondition::HeroesMenu);

        main.handle(Key::Down);
        assert_eq!(main.handle(Key::Enter), GameCondition::About);

        main.handle(Key::Down);
        assert_eq!(main.handle(Key::Enter), GameCondition::Exit);
    }

    #[test]
    fn test_main_menu_escape_stays() {
        let mut main = MainMenu::default();
        main.handle(Key::Down);
        assert_eq!(main.handle(Key::Escape), GameCondition::MainMenu);
        assert_eq!(main.menu().selected(), 1);
    }

    #[test]
    fn test_heroes_menu() {
        let mut heroes = HeroesMenu::default();
        assert_eq!(heroes.handle(Key::Enter), GameCondition::PlayAsChuck);
        assert_eq!(heroes.handle(Key::Down), GameCondition::HeroesMenu);
        assert_eq!(heroes.handle(Key::Enter), GameCondition::CreateHero);
        assert_eq!(heroes.handle(Key::Escape), GameCondition::MainMenu);
        assert_eq!(heroes.handle(Key::Char('x')), GameCondition::HeroesMenu);
    }

    #[test]
    fn test_about_screen() {
        let about = AboutScreen::new("made for fun\n".to_string());
        assert_eq!(AboutScreen::handle(Key::Enter), GameCondition::About);
        assert_eq!(AboutScreen::handle(Key::Down), GameCondition::About);
        assert_eq!(AboutScreen::handle(Key::Escape), GameCondition::MainMenu);

        let ScreenData::Message(view) = about.render() else {
            panic!("about should render a message");
        };
        assert_eq!(view.text, "made for fun\n");
    }

    #[test]
    fn test_menu_view() {
        let mut heroes = HeroesMenu::default();
        heroes.handle(Key::Up);
        let ScreenData::Menu(view) = heroes.render() else {
            panic!("heroes should render a menu");
        };
        assert_eq!(view.items, &HEROES_MENU_ITEMS);
        assert_eq!(view.selected, 1);
    }
}
