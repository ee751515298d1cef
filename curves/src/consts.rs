/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Distance in pixels within which a cursor picks up a control point
pub const DEFAULT_SELECTION_RADIUS: f64 = 10.0;

/// Relative error allowed in the continuity relations before a join is considered broken
pub const CONTINUITY_TOLERANCE: f64 = 1e-9;
