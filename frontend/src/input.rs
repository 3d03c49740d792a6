use std::collections::HashMap;

use sdl2::keyboard::Scancode;

/// Frontend commands a key can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Coin,
    Start1,
    Start2,
    ToggleScoreboard,
    Screenshot,
    Quit,
}

/// Maps SDL scancodes to frontend actions.
pub struct KeyMap {
    map: HashMap<Scancode, Action>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode, replacing whatever it was bound to.
    pub fn bind(&mut self, scancode: Scancode, action: Action) {
        self.map.insert(scancode, action);
    }

    pub fn get(&self, scancode: Scancode) -> Option<Action> {
        self.map.get(&scancode).copied()
    }
}

/// Cabinet-style defaults: 5 inserts a coin, 1/2 start, F1 toggles the
/// scoreboard, F12 saves a screenshot, Escape quits.
pub fn default_key_map() -> KeyMap {
    let mut km = KeyMap::new();
    km.bind(Scancode::Num5, Action::Coin);
    km.bind(Scancode::Num1, Action::Start1);
    km.bind(Scancode::Num2, Action::Start2);
    km.bind(Scancode::F1, Action::ToggleScoreboard);
    km.bind(Scancode::Tab, Action::ToggleScoreboard);
    km.bind(Scancode::F12, Action::Screenshot);
    km.bind(Scancode::Escape, Action::Quit);
    km
}
