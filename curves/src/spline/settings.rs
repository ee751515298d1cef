/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

use serde_derive::{Deserialize, Serialize};

///
/// Settings that affect how a spline responds to editing operations
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineSettings {
    /// A node is selected if the cursor is closer than this distance to it
    pub selection_radius: f64,
}

impl Default for SplineSettings {
    fn default() -> Self {
        SplineSettings {
            selection_radius: DEFAULT_SELECTION_RADIUS,
        }
    }
}
