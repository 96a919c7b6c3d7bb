//! Application settings

use serde::{Deserialize, Serialize};

/// Grid display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show the ground grid
    pub visible: bool,
    /// Grid cell size in world units
    pub size: f32,
    /// Number of grid lines in each direction from origin
    pub range: i32,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: false,
            size: 1.0,
            range: 5,
            opacity: 0.4,
        }
    }
}

/// Axis display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    /// Show world axes
    pub visible: bool,
    /// Axis line length
    pub length: f32,
    /// Axis line thickness
    pub thickness: f32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: false,
            length: 2.5,
            thickness: 2.0,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Degrees of camera orbit per dragged pixel
    pub orbit_sensitivity: f32,
    /// World units of camera pan per dragged pixel
    pub pan_sensitivity: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [13, 13, 13],
            orbit_sensitivity: 0.2,
            pan_sensitivity: 0.005,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSettings,
    /// Axis settings
    #[serde(default)]
    pub axes: AxisSettings,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "rubiks", "rubiks") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                match serde_json::from_str(&json) {
                    Ok(settings) => return settings,
                    Err(e) => tracing::warn!("Ignoring malformed settings file: {e}"),
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "rubiks", "rubiks") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_roundtrip_through_json() {
        let mut settings = AppSettings::default();
        settings.grid.visible = true;
        settings.viewport.background_color = [20, 25, 30];
        settings.ui.font_size = 16.0;

        let json = serde_json::to_string(&settings).expect("serialize");
        let back: AppSettings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(settings, back);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let back: AppSettings = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(back, AppSettings::default());
    }
}
