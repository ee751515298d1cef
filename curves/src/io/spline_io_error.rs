/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;
use std::io;

///
/// Errors that can occur while saving or loading a spline
///
#[derive(Clone, PartialEq, Debug)]
pub enum SplineIoError {
    /// The file could not be read or written
    Io { kind: io::ErrorKind, message: String },

    /// The file was empty
    MissingHeader,

    /// The first line was not `<dimensions> <continuity> <count>` (the text of the line is included)
    MalformedHeader(String),

    /// A point line did not contain exactly two numbers
    MalformedPoint { line: usize, text: String },

    /// The file ended before all of the points declared in the header were read
    Truncated { expected: usize, found: usize },

    /// A C2 spline must have `3k + 1` control points: `count` was found instead
    MalformedSpline { count: usize },

    /// A spline declared as C2 whose joins at the listed anchor indices do not meet the C2 relations
    BrokenJoins { anchors: Vec<usize> },
}

impl From<io::Error> for SplineIoError {
    fn from(error: io::Error) -> SplineIoError {
        SplineIoError::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for SplineIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplineIoError::Io { message, .. } => write!(f, "I/O error: {}", message),
            SplineIoError::MissingHeader => write!(f, "spline file is empty"),
            SplineIoError::MalformedHeader(text) => write!(f, "malformed spline header: {:?}", text),
            SplineIoError::MalformedPoint { line, text } => {
                write!(f, "malformed point on line {}: {:?}", line, text)
            }
            SplineIoError::Truncated { expected, found } => write!(
                f,
                "spline file ended early: expected {} points, found {}",
                expected, found
            ),
            SplineIoError::MalformedSpline { count } => write!(
                f,
                "a C2 spline needs 3k+1 control points, but there are {}",
                count
            ),
            SplineIoError::BrokenJoins { anchors } => {
                write!(f, "C2 spline has discontinuous joins at anchors {:?}", anchors)
            }
        }
    }
}

impl Error for SplineIoError {}
