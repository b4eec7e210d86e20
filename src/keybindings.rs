//! Commands and their default key bindings.

use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User-invokable commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleFullScreen,
    ToggleZen,
    // Settings
    CycleModeAtStart,
    ToggleHideStatusBar,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::ToggleFullScreen,
        Action::ToggleZen,
        Action::CycleModeAtStart,
        Action::ToggleHideStatusBar,
        Action::Quit,
    ];

    /// Stable command identifier, as listed in a command palette.
    pub fn command_id(self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::ToggleFullScreen => "editor-full-screen",
            Action::ToggleZen => "editor-zen-mode",
            Action::CycleModeAtStart => "cycle-mode-at-start",
            Action::ToggleHideStatusBar => "toggle-hide-status-bar",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::ToggleFullScreen => "Full screen mode",
            Action::ToggleZen => "Zen mode",
            Action::CycleModeAtStart => "Mode at start & after this change",
            Action::ToggleHideStatusBar => "Hide status bar in full screen",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(
            ToggleFullScreen,
            KeyCombo::new(KeyCode::F(11), KeyModifiers::NONE),
        );
        kb.add(
            ToggleFullScreen,
            KeyCombo::new(KeyCode::Char('f'), KeyModifiers::NONE),
        );
        kb.add(
            ToggleZen,
            KeyCombo::new(KeyCode::F(10), KeyModifiers::NONE),
        );
        kb.add(
            ToggleZen,
            KeyCombo::new(KeyCode::Char('z'), KeyModifiers::NONE),
        );
        kb.add(
            CycleModeAtStart,
            KeyCombo::new(KeyCode::F(2), KeyModifiers::NONE),
        );
        kb.add(
            ToggleHideStatusBar,
            KeyCombo::new(KeyCode::F(3), KeyModifiers::NONE),
        );
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        if let Some(list) = self.map.get(&action) {
            list.iter().any(|c| c.matches(key))
        } else {
            false
        }
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.matches(*action, key))
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }

    /// One line per action, in palette order.
    pub fn help_lines(&self) -> Vec<String> {
        Action::ALL
            .into_iter()
            .map(|action| format!("{:<10} {action}", self.combos_for(action).join(", ")))
            .collect()
    }
}
