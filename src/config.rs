//! Configuration loader.
//!
//! * Looks for `sokopush.toml` in the cwd unless overridden by `--config`.
//! * Every field has a default, so the file is optional.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use bimap::BiMap;
use serde::Deserialize;

use crate::core::{Direction, Symbols};
use crate::error::SessionError;

pub const DEFAULT_CONFIG_PATH: &str = "sokopush.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub symbols: SymbolConfig,
    pub keys: KeyConfig,
}

/// Marker characters on the board.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SymbolConfig {
    pub player: char,
    pub player_on_goal: char,
    pub floor: char,
    pub goal: char,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        let symbols = Symbols::default();
        Self {
            player: symbols.player as char,
            player_on_goal: symbols.player_on_goal as char,
            floor: symbols.floor as char,
            goal: symbols.goal as char,
        }
    }
}

/// Command bytes. Directions follow a numeric keypad by default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    pub undo: char,
    pub quit: char,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            up: '8',
            down: '2',
            left: '4',
            right: '6',
            undo: '0',
            quit: '.',
        }
    }
}

/// Validated key bindings, shared by the stream reader and the terminal UI.
#[derive(Debug, Clone)]
pub struct Controls {
    directions: BiMap<Direction, u8>,
    pub undo: u8,
    pub quit: u8,
}

impl Controls {
    pub fn direction_for(&self, key: u8) -> Option<Direction> {
        self.directions.get_by_right(&key).copied()
    }

    pub fn key_for(&self, direction: Direction) -> u8 {
        // Every direction is inserted when the bindings are built.
        self.directions
            .get_by_left(&direction)
            .copied()
            .unwrap_or(b'?')
    }
}

impl Default for Controls {
    fn default() -> Self {
        let keys = KeyConfig::default();
        let directions = [
            (Direction::Up, keys.up),
            (Direction::Down, keys.down),
            (Direction::Left, keys.left),
            (Direction::Right, keys.right),
        ]
        .into_iter()
        .map(|(direction, key)| (direction, key as u8))
        .collect();
        Controls {
            directions,
            undo: keys.undo as u8,
            quit: keys.quit as u8,
        }
    }
}

impl TryFrom<&KeyConfig> for Controls {
    type Error = SessionError;

    fn try_from(keys: &KeyConfig) -> Result<Self, Self::Error> {
        let undo = symbol_byte("undo", keys.undo)?;
        let quit = symbol_byte("quit", keys.quit)?;
        if undo == quit {
            return Err(SessionError::InvalidConfig(
                "undo and quit share a key".to_string(),
            ));
        }

        let mut directions = BiMap::new();
        for (direction, key) in [
            (Direction::Up, keys.up),
            (Direction::Down, keys.down),
            (Direction::Left, keys.left),
            (Direction::Right, keys.right),
        ] {
            let byte = symbol_byte(&direction.to_string(), key)?;
            if byte == undo || byte == quit || directions.insert_no_overwrite(direction, byte).is_err() {
                return Err(SessionError::InvalidConfig(format!(
                    "key '{key}' for {direction} is already bound"
                )));
            }
        }

        Ok(Controls {
            directions,
            undo,
            quit,
        })
    }
}

impl TryFrom<&SymbolConfig> for Symbols {
    type Error = SessionError;

    fn try_from(config: &SymbolConfig) -> Result<Self, Self::Error> {
        let symbols = Symbols {
            player: symbol_byte("player", config.player)?,
            player_on_goal: symbol_byte("player_on_goal", config.player_on_goal)?,
            floor: symbol_byte("floor", config.floor)?,
            goal: symbol_byte("goal", config.goal)?,
        };
        let markers = symbols.markers();
        for (i, marker) in markers.iter().enumerate() {
            if markers[..i].contains(marker) {
                return Err(SessionError::InvalidConfig(format!(
                    "marker '{}' is used twice",
                    *marker as char
                )));
            }
        }
        Ok(symbols)
    }
}

impl Config {
    /// Loads `path`, or the default file if none is given. Only a missing default
    /// file falls back to defaults; any other failure is reported.
    pub fn load(path: Option<&Path>) -> Result<Self, SessionError> {
        let p = path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        match fs::read_to_string(p) {
            Ok(text) => Self::parse(&text).map_err(|source| SessionError::Config {
                path: p.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound && path.is_none() => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn symbols(&self) -> Result<Symbols, SessionError> {
        Symbols::try_from(&self.symbols)
    }

    pub fn controls(&self) -> Result<Controls, SessionError> {
        Controls::try_from(&self.keys)
    }
}

/// Letters name boxes, so they can be neither markers nor commands.
fn symbol_byte(name: &str, c: char) -> Result<u8, SessionError> {
    if !(c.is_ascii_graphic() || c == ' ') {
        return Err(SessionError::InvalidConfig(format!(
            "{name} must be a single printable ascii character, got {c:?}"
        )));
    }
    if c.is_ascii_alphabetic() {
        return Err(SessionError::InvalidConfig(format!(
            "{name} cannot be the box letter '{c}'"
        )));
    }
    Ok(c as u8)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").expect("parses");
        assert_eq!(config, Config::default());
        assert_eq!(config.symbols().expect("valid"), Symbols::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
[symbols]
floor = " "
goal = "."

[keys]
up = "w"
"#,
        )
        .expect("parses");
        assert_eq!(config.symbols.floor, ' ');
        assert_eq!(config.symbols.player, '@');
        assert_eq!(config.keys.up, 'w');
        assert_eq!(config.keys.down, '2');
    }

    #[test]
    fn letter_keys_are_rejected() {
        let config = Config::parse("[keys]\nup = \"w\"\n").expect("parses");
        assert!(matches!(config.controls(), Err(SessionError::InvalidConfig(_))));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let config = Config::parse("[keys]\nup = \"2\"\n").expect("parses");
        assert!(matches!(config.controls(), Err(SessionError::InvalidConfig(_))));

        let config = Config::parse("[keys]\nleft = \"0\"\n").expect("parses");
        assert!(matches!(config.controls(), Err(SessionError::InvalidConfig(_))));
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        let config = Config::parse("[symbols]\ngoal = \"-\"\n").expect("parses");
        assert!(matches!(config.symbols(), Err(SessionError::InvalidConfig(_))));
    }

    #[test]
    fn default_controls_map_the_keypad() {
        let controls = Controls::default();
        assert_eq!(controls.direction_for(b'8'), Some(Direction::Up));
        assert_eq!(controls.direction_for(b'2'), Some(Direction::Down));
        assert_eq!(controls.direction_for(b'4'), Some(Direction::Left));
        assert_eq!(controls.direction_for(b'6'), Some(Direction::Right));
        assert_eq!(controls.direction_for(b'5'), None);
        assert_eq!(controls.key_for(Direction::Left), b'4');
        assert_eq!(controls.undo, b'0');
        assert_eq!(controls.quit, b'.');
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/sokopush.toml")));
        assert!(matches!(result, Err(SessionError::Io(_))));
    }
}
