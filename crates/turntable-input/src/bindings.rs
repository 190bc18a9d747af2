//! Binding table: maps the logical viewer actions to physical keys.
//!
//! [`Bindings`] is serializable to RON with human-readable key names so the
//! table can live in a user-editable file. Loading falls back to the default
//! layout on error, and [`Bindings::detect_conflicts`] flags keys that ended
//! up bound to more than one action.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;
use winit::keyboard::KeyCode;

/// The logical viewer controls.
///
/// The orbit and zoom actions are continuous: the camera moves for as long
/// as they are held. [`Action::ToggleLight`] is edge-triggered and takes
/// effect once per press.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Action {
    /// Swing the camera to the left around the origin.
    OrbitLeft,
    /// Swing the camera to the right around the origin.
    OrbitRight,
    /// Raise the camera toward the top pole.
    OrbitUp,
    /// Lower the camera toward the bottom pole.
    OrbitDown,
    /// Move the camera toward the origin.
    ZoomIn,
    /// Move the camera away from the origin.
    ZoomOut,
    /// Flip the scene light on or off.
    ToggleLight,
}

impl Action {
    /// Number of distinct actions.
    pub const COUNT: usize = 7;

    /// Every action, in declaration order.
    pub const ALL: [Action; Action::COUNT] = [
        Action::OrbitLeft,
        Action::OrbitRight,
        Action::OrbitUp,
        Action::OrbitDown,
        Action::ZoomIn,
        Action::ZoomOut,
        Action::ToggleLight,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Errors from persisting a binding table.
#[derive(Debug, thiserror::Error)]
pub enum BindingsError {
    /// Failed to write the bindings file to disk.
    #[error("failed to write keybindings: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to serialize the binding table to RON.
    #[error("failed to serialize keybindings: {0}")]
    SerializeError(#[source] ron::Error),
}

/// A binding conflict: the same key drives more than one action.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// The shared key.
    pub key: KeyCode,
    /// Actions bound to it.
    pub actions: Vec<Action>,
}

/// Maps [`Action`]s to lists of keys.
///
/// Multiple keys per action are supported with OR logic: an action is active
/// while any of its keys is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
    bindings: HashMap<Action, Vec<KeyCode>>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self::default_orbit()
    }
}

impl Bindings {
    /// Create an empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// The standard layout: A/D orbit sideways, the vertical arrow keys
    /// orbit over the poles, W/S zoom, L toggles the light.
    #[must_use]
    pub fn default_orbit() -> Self {
        let mut bindings: HashMap<Action, Vec<KeyCode>> = HashMap::new();
        bindings.insert(Action::OrbitLeft, vec![KeyCode::KeyA]);
        bindings.insert(Action::OrbitRight, vec![KeyCode::KeyD]);
        bindings.insert(Action::OrbitUp, vec![KeyCode::ArrowUp]);
        bindings.insert(Action::OrbitDown, vec![KeyCode::ArrowDown]);
        bindings.insert(Action::ZoomIn, vec![KeyCode::KeyW]);
        bindings.insert(Action::ZoomOut, vec![KeyCode::KeyS]);
        bindings.insert(Action::ToggleLight, vec![KeyCode::KeyL]);
        Self { bindings }
    }

    /// Set the keys for an action, replacing any existing ones.
    pub fn set_keys(&mut self, action: Action, keys: Vec<KeyCode>) {
        self.bindings.insert(action, keys);
    }

    /// The keys bound to an action.
    #[must_use]
    pub fn bound_keys(&self, action: Action) -> &[KeyCode] {
        self.bindings.get(&action).map_or(&[], |v| v.as_slice())
    }

    /// Detect keys bound to more than one action.
    #[must_use]
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        let mut seen: HashMap<KeyCode, Vec<Action>> = HashMap::new();

        for (action, keys) in &self.bindings {
            for key in keys {
                seen.entry(*key).or_default().push(*action);
            }
        }

        seen.into_iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, actions)| Conflict { key, actions })
            .collect()
    }

    /// Serialize to RON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from RON string.
    ///
    /// # Errors
    /// Returns an error if the RON is malformed or names an unknown key.
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Save the binding table to a RON file at `path`.
    ///
    /// # Errors
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, path: &Path) -> Result<(), BindingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BindingsError::WriteError)?;
        }
        let ron_str = self.to_ron().map_err(BindingsError::SerializeError)?;
        std::fs::write(path, ron_str).map_err(BindingsError::WriteError)?;
        Ok(())
    }

    /// Load a binding table from a RON file at `path`.
    ///
    /// Falls back to [`Bindings::default`] if the file is missing or
    /// malformed, logging a warning in either case.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(bindings) => bindings,
                Err(e) => {
                    warn!(
                        "Malformed keybinding file {}: {e}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "Could not read keybinding file {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Returns the platform config path for `bindings.ron`.
    #[must_use]
    pub fn default_config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("turntable").join("bindings.ron"))
    }
}

// Keys serialize as their Debug names (e.g. "KeyW") so the RON file reads
// naturally; a BTreeMap keeps the output order stable across saves.
impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let named: BTreeMap<Action, Vec<String>> = self
            .bindings
            .iter()
            .map(|(action, keys)| (*action, keys.iter().map(|k| key_name(*k)).collect()))
            .collect();
        named.serialize(s)
    }
}

impl<'de> Deserialize<'de> for Bindings {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let named = BTreeMap::<Action, Vec<String>>::deserialize(d)?;
        let mut bindings = HashMap::new();
        for (action, names) in named {
            let keys = names
                .iter()
                .map(|name| {
                    parse_key(name).ok_or_else(|| D::Error::custom(format!("unknown key: {name}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            bindings.insert(action, keys);
        }
        Ok(Self { bindings })
    }
}

/// The serialized name of a key: its Debug string (e.g., `"ArrowUp"`).
fn key_name(code: KeyCode) -> String {
    format!("{code:?}")
}

/// Inverse of [`key_name`] for the keys a user can plausibly bind.
fn parse_key(s: &str) -> Option<KeyCode> {
    Some(match s {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "AltLeft" => KeyCode::AltLeft,
        "AltRight" => KeyCode::AltRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let bindings = Bindings::default();
        assert_eq!(bindings.bound_keys(Action::OrbitLeft), &[KeyCode::KeyA]);
        assert_eq!(bindings.bound_keys(Action::OrbitRight), &[KeyCode::KeyD]);
        assert_eq!(bindings.bound_keys(Action::OrbitUp), &[KeyCode::ArrowUp]);
        assert_eq!(bindings.bound_keys(Action::OrbitDown), &[KeyCode::ArrowDown]);
        assert_eq!(bindings.bound_keys(Action::ZoomIn), &[KeyCode::KeyW]);
        assert_eq!(bindings.bound_keys(Action::ZoomOut), &[KeyCode::KeyS]);
        assert_eq!(bindings.bound_keys(Action::ToggleLight), &[KeyCode::KeyL]);
    }

    #[test]
    fn test_every_action_is_bound_by_default() {
        let bindings = Bindings::default();
        for action in Action::ALL {
            assert!(
                !bindings.bound_keys(action).is_empty(),
                "{action:?} has no default key"
            );
        }
    }

    #[test]
    fn test_unbound_action_has_no_keys() {
        let bindings = Bindings::new();
        assert!(bindings.bound_keys(Action::ZoomIn).is_empty());
    }

    #[test]
    fn test_set_keys_replaces() {
        let mut bindings = Bindings::default();
        bindings.set_keys(Action::ZoomIn, vec![KeyCode::PageUp, KeyCode::KeyW]);
        assert_eq!(
            bindings.bound_keys(Action::ZoomIn),
            &[KeyCode::PageUp, KeyCode::KeyW]
        );
    }

    #[test]
    fn test_default_has_no_conflicts() {
        assert!(Bindings::default().detect_conflicts().is_empty());
    }

    #[test]
    fn test_conflict_detected_across_actions() {
        let mut bindings = Bindings::default();
        bindings.set_keys(Action::ZoomOut, vec![KeyCode::KeyA]);
        let conflicts = bindings.detect_conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].key, KeyCode::KeyA);
        assert_eq!(conflicts[0].actions.len(), 2);
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut bindings = Bindings::default();
        bindings.set_keys(Action::OrbitUp, vec![KeyCode::ArrowUp, KeyCode::KeyI]);

        let ron_str = bindings.to_ron().unwrap();
        let restored = Bindings::from_ron(&ron_str).unwrap();
        assert_eq!(bindings, restored);
    }

    #[test]
    fn test_ron_uses_key_names() {
        let ron_str = Bindings::default().to_ron().unwrap();
        assert!(ron_str.contains("OrbitLeft"));
        assert!(ron_str.contains("\"KeyA\""));
        assert!(ron_str.contains("\"ArrowDown\""));
    }

    #[test]
    fn test_ron_hand_written_table_parses() {
        let ron_str = r#"{
            OrbitLeft: ["ArrowLeft"],
            OrbitRight: ["ArrowRight"],
            ZoomIn: ["PageUp"],
        }"#;
        let bindings = Bindings::from_ron(ron_str).unwrap();
        assert_eq!(bindings.bound_keys(Action::OrbitLeft), &[KeyCode::ArrowLeft]);
        assert_eq!(bindings.bound_keys(Action::ZoomIn), &[KeyCode::PageUp]);
        assert!(bindings.bound_keys(Action::OrbitUp).is_empty());
    }

    #[test]
    fn test_unknown_key_name_errors() {
        let ron_str = r#"{ ZoomIn: ["FrobKey"] }"#;
        let err = Bindings::from_ron(ron_str).unwrap_err();
        assert!(err.to_string().contains("unknown key"));
    }

    #[test]
    fn test_rebinding_persists_across_save_load() {
        let dir = std::env::temp_dir().join("turntable_bindings_roundtrip");
        let path = dir.join("bindings.ron");

        let mut bindings = Bindings::default();
        bindings.set_keys(Action::OrbitLeft, vec![KeyCode::KeyQ]);
        bindings.save(&path).expect("save");

        let loaded = Bindings::load(&path);
        assert_eq!(loaded.bound_keys(Action::OrbitLeft), &[KeyCode::KeyQ]);
        assert_eq!(loaded, bindings);

        // Cleanup.
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let dir = std::env::temp_dir().join("turntable_bindings_nested");
        let path = dir.join("deeper").join("bindings.ron");

        Bindings::default().save(&path).expect("save");
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("turntable_bindings_malformed");
        let path = dir.join("bindings.ron");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid ron {{{").unwrap();

        // Should be the default table, not a panic.
        let loaded = Bindings::load(&path);
        assert_eq!(loaded, Bindings::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_default() {
        let loaded = Bindings::load(Path::new("/nonexistent/bindings.ron"));
        assert_eq!(loaded, Bindings::default());
    }

    #[test]
    fn test_default_config_path_ends_with_bindings_ron() {
        if let Some(path) = Bindings::default_config_path() {
            assert!(path.ends_with("turntable/bindings.ron"));
        }
    }
}
