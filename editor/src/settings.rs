/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sketchpad_curves::spline::SplineSettings;
use sketchpad_events::CoordinateOrigin;
use sketchpad_raster::Rgb;

use log::{debug, warn};
use serde_derive::{Deserialize, Serialize};

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

///
/// Errors that can occur while loading the editor settings
///
#[derive(Clone, PartialEq, Debug)]
pub enum SettingsError {
    /// The settings file could not be read
    Io { kind: io::ErrorKind, message: String },

    /// The settings were not valid JSON, or had a field of the wrong type
    Parse(String),
}

impl From<io::Error> for SettingsError {
    fn from(error: io::Error) -> SettingsError {
        SettingsError::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(error: serde_json::Error) -> SettingsError {
        SettingsError::Parse(error.to_string())
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { message, .. } => write!(f, "could not read settings: {}", message),
            SettingsError::Parse(message) => write!(f, "invalid settings: {}", message),
        }
    }
}

impl Error for SettingsError {}

///
/// Settings shared by the editors
///
/// Every field has a default, so a settings file only needs to mention the values it changes:
///
/// ```
/// # use sketchpad_editor::*;
/// let settings = EditorSettings::from_json(r#"{ "selection_radius": 4.0 }"#).unwrap();
///
/// assert!(settings.selection_radius == 4.0);
/// assert!(settings.window_size == (1000, 1000));
/// ```
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Width and height of the window in pixels
    pub window_size: (u32, u32),

    /// Where the host puts the origin when it reports cursor positions
    pub host_origin: CoordinateOrigin,

    /// Nodes closer than this to the cursor can be selected
    pub selection_radius: f64,

    /// Colour used for shapes and curves
    pub draw_color: Rgb,

    /// Colour used for the edges of a polygon that cross each other, and for the selected node
    pub highlight_color: Rgb,

    /// Colour used to show the control points of a spline
    pub control_point_color: Rgb,

    /// Longest straight step used when rasterizing a curve on the host
    pub curve_step: f64,

    /// Where the spline editor saves and loads its spline
    pub save_path: PathBuf,
}

impl Default for EditorSettings {
    fn default() -> EditorSettings {
        EditorSettings {
            window_size: (1000, 1000),
            host_origin: CoordinateOrigin::BottomLeft,
            selection_radius: 10.0,
            draw_color: Rgb::WHITE,
            highlight_color: Rgb::RED,
            control_point_color: Rgb::GREEN,
            curve_step: 2.0,
            save_path: PathBuf::from("spline.txt"),
        }
    }
}

impl EditorSettings {
    ///
    /// Reads settings from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<EditorSettings, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    ///
    /// Reads settings from a JSON file
    ///
    pub fn load(path: impl AsRef<Path>) -> Result<EditorSettings, SettingsError> {
        let path = path.as_ref();
        let result = fs::read_to_string(path)
            .map_err(SettingsError::from)
            .and_then(|json| EditorSettings::from_json(&json));

        match &result {
            Ok(_) => debug!("Loaded editor settings from {}", path.display()),
            Err(err) => warn!("Could not load editor settings from {}: {}", path.display(), err),
        }

        result
    }

    ///
    /// Writes these settings as JSON
    ///
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// The settings that are passed on to the splines
    ///
    pub fn spline_settings(&self) -> SplineSettings {
        SplineSettings {
            selection_radius: self.selection_radius,
        }
    }

    ///
    /// The height of the window, used to flip positions from a host with a top-left origin
    ///
    #[inline]
    pub fn window_height(&self) -> f64 {
        self.window_size.1 as f64
    }
}
