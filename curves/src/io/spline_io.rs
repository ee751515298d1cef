/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::spline_io_error::*;
use crate::geo::*;
use crate::spline::*;

use log::{debug, warn};

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Value of the dimensions flag for a 2D spline
const DIMENSIONS_2D: usize = 2;

/// Value of the continuity flag for a C2 spline
const CONTINUITY_C2: usize = 2;

/// Value of the continuity flag for any other spline
const CONTINUITY_C1: usize = 1;

///
/// A spline read back from a file
///
#[derive(Clone, PartialEq, Debug)]
pub struct LoadedSpline {
    /// The control points, in order
    pub points: Vec<Coord2>,

    /// True if the file declared 2 dimensions
    pub is_2d: bool,

    /// True if the file declared a C2 spline
    pub is_c2: bool,
}

///
/// Writes a list of control points to a stream
///
/// The format is a header line `<dimensions> <continuity> <count>` followed by one `x y` line per point.
///
pub fn write_spline(target: &mut impl Write, points: &[Coord2], is_c2: bool) -> Result<(), SplineIoError> {
    if is_c2 && !is_complete_chain_length(points.len()) {
        return Err(SplineIoError::MalformedSpline { count: points.len() });
    }

    let continuity = if is_c2 { CONTINUITY_C2 } else { CONTINUITY_C1 };

    writeln!(target, "{} {} {}", DIMENSIONS_2D, continuity, points.len())?;
    for point in points.iter() {
        writeln!(target, "{:?} {:?}", point.0, point.1)?;
    }

    Ok(())
}

///
/// Reads a list of control points from a stream
///
/// Any lines after the last declared point are ignored.
///
pub fn read_spline(source: impl BufRead) -> Result<LoadedSpline, SplineIoError> {
    let mut lines = source.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(SplineIoError::MissingHeader),
    };

    let header_values = header
        .split_whitespace()
        .map(|token| token.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| SplineIoError::MalformedHeader(header.clone()))?;

    let (dimensions, continuity, count) = match header_values.as_slice() {
        &[dimensions, continuity, count] => (dimensions, continuity, count),
        _ => return Err(SplineIoError::MalformedHeader(header)),
    };

    if continuity != CONTINUITY_C1 && continuity != CONTINUITY_C2 {
        return Err(SplineIoError::MalformedHeader(header));
    }

    let is_c2 = continuity == CONTINUITY_C2;
    if is_c2 && !is_complete_chain_length(count) {
        return Err(SplineIoError::MalformedSpline { count });
    }

    // The count comes from the file, so it only bounds how many lines are read
    let mut points = vec![];
    for (index, line) in lines.take(count).enumerate() {
        let line = line?;
        let values = line
            .split_whitespace()
            .map(|token| token.parse::<f64>())
            .collect::<Result<Vec<_>, _>>();

        match values.as_deref() {
            Ok([x, y]) if x.is_finite() && y.is_finite() => points.push(Coord2(*x, *y)),
            _ => {
                return Err(SplineIoError::MalformedPoint {
                    line: index + 2,
                    text: line,
                })
            }
        }
    }

    if points.len() < count {
        return Err(SplineIoError::Truncated {
            expected: count,
            found: points.len(),
        });
    }

    Ok(LoadedSpline {
        points,
        is_2d: dimensions == DIMENSIONS_2D,
        is_c2,
    })
}

fn write_spline_file(path: &Path, points: &[Coord2], is_c2: bool) -> Result<(), SplineIoError> {
    // Leave any existing file alone if the spline can't be written
    if is_c2 && !is_complete_chain_length(points.len()) {
        return Err(SplineIoError::MalformedSpline { count: points.len() });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = BufWriter::new(fs::File::create(path)?);
    write_spline(&mut file, points, is_c2)?;
    file.flush()?;

    Ok(())
}

///
/// Saves a spline to a file, replacing anything that's already there and creating the directory if needed
///
pub fn save_spline(path: impl AsRef<Path>, points: &[Coord2], is_c2: bool) -> Result<(), SplineIoError> {
    let path = path.as_ref();

    let result = write_spline_file(path, points, is_c2);

    match &result {
        Ok(()) => debug!("Saved {} control points to {}", points.len(), path.display()),
        Err(err) => warn!("Could not save spline to {}: {}", path.display(), err),
    }

    result
}

///
/// Loads a spline from a file
///
pub fn load_spline(path: impl AsRef<Path>) -> Result<LoadedSpline, SplineIoError> {
    let path = path.as_ref();

    let result = fs::File::open(path)
        .map_err(SplineIoError::from)
        .and_then(|file| read_spline(BufReader::new(file)));

    match &result {
        Ok(spline) => debug!("Loaded {} control points from {}", spline.points.len(), path.display()),
        Err(err) => warn!("Could not load spline from {}: {}", path.display(), err),
    }

    result
}
