//! Loads and holds the user configuration.
mod bindings;

pub use bindings::{Keybind, MotionBind, OperatorBind, Rule};

use crate::errors::Result;
use crate::layouts::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// How many workspaces exist; they are numbered from 1.
    pub workspaces: usize,
    pub default_workspace: usize,
    pub default_layout: Layout,
    pub border_px: u32,
    pub border_focus: String,
    pub border_unfocus: String,
    pub border_prev_focus: String,
    pub border_urgent: String,
    pub bar_height: u32,
    pub bar_bottom: bool,
    /// Baseline useless gap inherited by new clients.
    pub gap: u32,
    /// How many pixels the gap operators change a gap by.
    pub op_gap_size: u32,
    pub master_ratio: f32,
    /// Whether moving a client to another workspace also switches to it.
    pub follow_move: bool,
    pub focus_mouse: bool,
    pub focus_mouse_click: bool,
    pub center_floating: bool,
    pub zoom_gap: bool,
    pub float_spawn_width: u32,
    pub float_spawn_height: u32,
    pub scratchpad_width: u32,
    pub scratchpad_height: u32,
    pub delete_register_size: usize,
    /// The modifier that makes a digit a count rather than a keybind.
    pub count_modifier: Vec<String>,
    pub keybinds: Vec<Keybind>,
    pub operators: Vec<OperatorBind>,
    pub motions: Vec<MotionBind>,
    pub rules: Vec<Rule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspaces: 5,
            default_workspace: 1,
            default_layout: Layout::VStack,
            border_px: 2,
            border_focus: "#70898f".to_owned(),
            border_unfocus: "#555555".to_owned(),
            border_prev_focus: "#74718e".to_owned(),
            border_urgent: "#ff0000".to_owned(),
            bar_height: 20,
            bar_bottom: false,
            gap: 0,
            op_gap_size: 4,
            master_ratio: 0.6,
            follow_move: true,
            focus_mouse: true,
            focus_mouse_click: true,
            center_floating: true,
            zoom_gap: false,
            float_spawn_width: 500,
            float_spawn_height: 500,
            scratchpad_width: 500,
            scratchpad_height: 500,
            delete_register_size: 5,
            count_modifier: vec!["Mod1".to_owned()],
            keybinds: bindings::default_keybinds(),
            operators: bindings::default_operators(),
            motions: bindings::default_motions(),
            rules: Vec::new(),
        }
    }
}

impl Config {
    /// Loads `$XDG_CONFIG_HOME/howm/config.toml`, falling back to the
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_file()? {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                let raw = fs::read_to_string(path)?;
                let config: Config = toml::from_str(&raw)?;
                Ok(config.sanitised())
            }
            None => Ok(Self::default()),
        }
    }

    fn config_file() -> Result<Option<PathBuf>> {
        let base = xdg::BaseDirectories::with_prefix("howm")?;
        Ok(base.find_config_file("config.toml"))
    }

    /// Clamps values that would otherwise break invariants.
    fn sanitised(mut self) -> Self {
        if self.workspaces == 0 {
            log::warn!("workspaces must be at least 1, using 1");
            self.workspaces = 1;
        }
        if self.default_workspace == 0 || self.default_workspace > self.workspaces {
            log::warn!("default workspace out of range, using 1");
            self.default_workspace = 1;
        }
        if !(self.master_ratio > 0.1 && self.master_ratio < 1.0) {
            log::warn!("master ratio must lie in (0.1, 1.0), using 0.6");
            self.master_ratio = 0.6;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_five_workspaces() {
        let config = Config::default();
        assert_eq!(config.workspaces, 5);
        assert_eq!(config.default_workspace, 1);
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let config: Config = toml::from_str("workspaces = 9\ngap = 10").unwrap();
        assert_eq!(config.workspaces, 9);
        assert_eq!(config.gap, 10);
        assert_eq!(config.border_px, Config::default().border_px);
        assert!(!config.keybinds.is_empty(), "default keybinds were lost");
    }

    #[test]
    fn out_of_range_master_ratio_is_rejected() {
        let config: Config = toml::from_str("master_ratio = 1.5").unwrap();
        assert!((config.sanitised().master_ratio - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn keybind_rows_can_be_given_in_toml() {
        let raw = r#"
            [[keybinds]]
            modifier = ["Mod4"]
            key = "d"
            command = { Spawn = ["dmenu_run"] }
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.keybinds.len(), 1);
        assert_eq!(config.keybinds[0].key, "d");
    }
}
