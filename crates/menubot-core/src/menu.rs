//! Static two-level inline menu.
//!
//! Callback data is routed by exact match only. Leaf buttons carry the menu
//! they were rendered in (`button1_menu2`) so every button on screen has a
//! distinct id, but both menus' leaves resolve to the same reply.

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    errors::Error,
    messaging::types::{InlineButton, InlineKeyboard},
    Result,
};

const CB_BUTTON1_MENU1: &str = "button1_menu1";
const CB_BUTTON2_MENU1: &str = "button2_menu1";
const CB_BUTTON1_MENU2: &str = "button1_menu2";
const CB_BUTTON2_MENU2: &str = "button2_menu2";
const CB_MENU1_NEXT: &str = "menu1_next";
const CB_MENU2_BACK: &str = "menu2_back";

/// User-visible texts of the menus.
///
/// Deserializable so deployments can relabel the bot from a JSON file; any
/// field left out keeps its built-in value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuLabels {
    pub start_command: String,
    pub menu1_title: String,
    pub menu2_title: String,
    pub button1: String,
    pub button2: String,
    pub next: String,
    pub back: String,
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self {
            start_command: "/start".to_string(),
            menu1_title: "Меню 1".to_string(),
            menu2_title: "Меню 2".to_string(),
            button1: "Кнопка 1".to_string(),
            button2: "Кнопка 2".to_string(),
            next: "Далі".to_string(),
            back: "Назад".to_string(),
        }
    }
}

impl MenuLabels {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuId {
    Menu1,
    Menu2,
}

impl MenuId {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuId::Menu1 => "menu1",
            MenuId::Menu2 => "menu2",
        }
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "menu1" => Ok(MenuId::Menu1),
            "menu2" => Ok(MenuId::Menu2),
            other => Err(Error::InvalidArgument(format!("unknown menu type: {other}"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafButton {
    Button1,
    Button2,
}

/// What a pressed button asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Fixed reply, no keyboard. `from` is the menu the button was rendered in.
    Leaf { button: LeafButton, from: MenuId },
    /// Re-render another menu.
    Navigate(MenuId),
}

impl CallbackAction {
    /// Exact-match parse. Anything outside the known ids is `None`.
    pub fn parse(data: &str) -> Option<Self> {
        let action = match data {
            CB_BUTTON1_MENU1 => Self::leaf(LeafButton::Button1, MenuId::Menu1),
            CB_BUTTON2_MENU1 => Self::leaf(LeafButton::Button2, MenuId::Menu1),
            CB_BUTTON1_MENU2 => Self::leaf(LeafButton::Button1, MenuId::Menu2),
            CB_BUTTON2_MENU2 => Self::leaf(LeafButton::Button2, MenuId::Menu2),
            CB_MENU1_NEXT => Self::Navigate(MenuId::Menu2),
            CB_MENU2_BACK => Self::Navigate(MenuId::Menu1),
            _ => return None,
        };
        Some(action)
    }

    pub fn callback_data(self) -> &'static str {
        match self {
            Self::Leaf {
                button: LeafButton::Button1,
                from: MenuId::Menu1,
            } => CB_BUTTON1_MENU1,
            Self::Leaf {
                button: LeafButton::Button2,
                from: MenuId::Menu1,
            } => CB_BUTTON2_MENU1,
            Self::Leaf {
                button: LeafButton::Button1,
                from: MenuId::Menu2,
            } => CB_BUTTON1_MENU2,
            Self::Leaf {
                button: LeafButton::Button2,
                from: MenuId::Menu2,
            } => CB_BUTTON2_MENU2,
            Self::Navigate(MenuId::Menu2) => CB_MENU1_NEXT,
            Self::Navigate(MenuId::Menu1) => CB_MENU2_BACK,
        }
    }

    fn leaf(button: LeafButton, from: MenuId) -> Self {
        Self::Leaf { button, from }
    }
}

/// Read-only menu table shared by every update handler.
#[derive(Clone, Debug, Default)]
pub struct MenuCatalog {
    labels: MenuLabels,
}

impl MenuCatalog {
    pub fn new(labels: MenuLabels) -> Self {
        Self { labels }
    }

    pub fn is_start_command(&self, text: &str) -> bool {
        text == self.labels.start_command
    }

    pub fn title(&self, menu: MenuId) -> &str {
        match menu {
            MenuId::Menu1 => &self.labels.menu1_title,
            MenuId::Menu2 => &self.labels.menu2_title,
        }
    }

    pub fn leaf_text(&self, button: LeafButton) -> &str {
        match button {
            LeafButton::Button1 => &self.labels.button1,
            LeafButton::Button2 => &self.labels.button2,
        }
    }

    /// Keyboard for `menu`: both leaf buttons on the first row, the navigation
    /// button alone on the second.
    pub fn build(&self, menu: MenuId) -> InlineKeyboard {
        let leaf = |button| {
            let action = CallbackAction::Leaf { button, from: menu };
            InlineButton::callback(self.leaf_text(button), action.callback_data())
        };

        let nav = match menu {
            MenuId::Menu1 => InlineButton::callback(
                &self.labels.next,
                CallbackAction::Navigate(MenuId::Menu2).callback_data(),
            ),
            MenuId::Menu2 => InlineButton::callback(
                &self.labels.back,
                CallbackAction::Navigate(MenuId::Menu1).callback_data(),
            ),
        };

        InlineKeyboard::new(vec![
            vec![leaf(LeafButton::Button1), leaf(LeafButton::Button2)],
            vec![nav],
        ])
    }

    /// Same as [`MenuCatalog::build`], keyed by menu name. Unknown names are a
    /// caller bug and fail with [`Error::InvalidArgument`].
    pub fn build_by_name(&self, name: &str) -> Result<InlineKeyboard> {
        let menu: MenuId = name.parse()?;
        Ok(self.build(menu))
    }
}
