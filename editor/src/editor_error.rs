/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::settings::*;

use sketchpad_curves::io::SplineIoError;

use std::error::Error;
use std::fmt;

///
/// Errors reported by the editors
///
#[derive(Clone, PartialEq, Debug)]
pub enum EditorError {
    /// A spline could not be saved or loaded
    Spline(SplineIoError),

    /// The settings could not be loaded
    Settings(SettingsError),
}

impl From<SplineIoError> for EditorError {
    fn from(error: SplineIoError) -> EditorError {
        EditorError::Spline(error)
    }
}

impl From<SettingsError> for EditorError {
    fn from(error: SettingsError) -> EditorError {
        EditorError::Settings(error)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Spline(err) => err.fmt(f),
            EditorError::Settings(err) => err.fmt(f),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EditorError::Spline(err) => Some(err),
            EditorError::Settings(err) => Some(err),
        }
    }
}
