//! Input symbols and key bindings
//!
//! Device keys are translated to [`InputSymbol`]s through a lookup table so
//! the simulation never sees raw key codes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Discrete input understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSymbol {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Start a round, or restart after a miss
    Start,
}

/// A single key override from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: char,
    pub symbol: InputSymbol,
}

/// Default layout: the left-hand QWE/ASD/ZXC block mirrors the grid
pub const DEFAULT_BINDINGS: [KeyBinding; 10] = [
    KeyBinding { key: 'q', symbol: InputSymbol::TopLeft },
    KeyBinding { key: 'w', symbol: InputSymbol::TopCenter },
    KeyBinding { key: 'e', symbol: InputSymbol::TopRight },
    KeyBinding { key: 'a', symbol: InputSymbol::CenterLeft },
    KeyBinding { key: 's', symbol: InputSymbol::Center },
    KeyBinding { key: 'd', symbol: InputSymbol::CenterRight },
    KeyBinding { key: 'z', symbol: InputSymbol::BottomLeft },
    KeyBinding { key: 'x', symbol: InputSymbol::BottomCenter },
    KeyBinding { key: 'c', symbol: InputSymbol::BottomRight },
    KeyBinding { key: ' ', symbol: InputSymbol::Start },
];

/// Case-insensitive key -> symbol table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    table: HashMap<char, InputSymbol>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_bindings(&DEFAULT_BINDINGS)
    }
}

impl KeyBindings {
    pub fn from_bindings(bindings: &[KeyBinding]) -> Self {
        let mut keys = Self {
            table: HashMap::with_capacity(bindings.len()),
        };
        keys.apply(bindings);
        keys
    }

    /// Layer overrides on top of the current table. A key bound later wins.
    pub fn apply(&mut self, bindings: &[KeyBinding]) {
        for binding in bindings {
            self.table.insert(normalize(binding.key), binding.symbol);
        }
    }

    /// Symbol bound to `key`, if any
    pub fn lookup(&self, key: char) -> Option<InputSymbol> {
        self.table.get(&normalize(key)).copied()
    }

    /// First key bound to `symbol` (for help text)
    pub fn key_for(&self, symbol: InputSymbol) -> Option<char> {
        let mut keys: Vec<char> = self
            .table
            .iter()
            .filter(|(_, s)| **s == symbol)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_unstable();
        keys.first().copied()
    }
}

fn normalize(key: char) -> char {
    key.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let keys = KeyBindings::default();
        let expected = [
            ('q', InputSymbol::TopLeft),
            ('w', InputSymbol::TopCenter),
            ('e', InputSymbol::TopRight),
            ('a', InputSymbol::CenterLeft),
            ('s', InputSymbol::Center),
            ('d', InputSymbol::CenterRight),
            ('z', InputSymbol::BottomLeft),
            ('x', InputSymbol::BottomCenter),
            ('c', InputSymbol::BottomRight),
            (' ', InputSymbol::Start),
        ];
        for (key, symbol) in expected {
            assert_eq!(keys.lookup(key), Some(symbol), "key {key:?}");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup('Q'), Some(InputSymbol::TopLeft));
        assert_eq!(keys.lookup('C'), Some(InputSymbol::BottomRight));
    }

    #[test]
    fn test_unknown_keys_map_to_nothing() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup('p'), None);
        assert_eq!(keys.lookup('7'), None);
        assert_eq!(keys.lookup('\n'), None);
    }

    #[test]
    fn test_overrides() {
        let mut keys = KeyBindings::default();
        keys.apply(&[
            KeyBinding { key: '7', symbol: InputSymbol::TopLeft },
            KeyBinding { key: 'r', symbol: InputSymbol::Start },
        ]);
        assert_eq!(keys.lookup('7'), Some(InputSymbol::TopLeft));
        assert_eq!(keys.lookup('q'), Some(InputSymbol::TopLeft));
        assert_eq!(keys.lookup('R'), Some(InputSymbol::Start));
        assert_eq!(keys.key_for(InputSymbol::Start), Some(' '));
    }
}
