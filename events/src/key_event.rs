/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde_derive::{Deserialize, Serialize};

///
/// The keys the editors respond to
///
/// Keys with no meaning to the editors are reported as `Other` with the host's key code.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    C,
    D,
    I,
    L,
    S,
    Delete,
    Shift,
    Escape,
    Other(u64),
}

impl Key {
    ///
    /// Maps a character typed by the user to a key
    ///
    pub fn from_char(c: char) -> Key {
        match c.to_ascii_lowercase() {
            '1' => Key::Num1,
            '2' => Key::Num2,
            '3' => Key::Num3,
            '4' => Key::Num4,
            'c' => Key::C,
            'd' => Key::D,
            'i' => Key::I,
            'l' => Key::L,
            's' => Key::S,
            other => Key::Other(other as u64),
        }
    }
}
