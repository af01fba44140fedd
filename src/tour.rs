//! TSPLIB tour reader.
//!
//! Only `TOUR_SECTION` is interpreted: headers before it are skipped and the
//! first line starting with `EOF` ends the scan, even if more sections follow.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::Deref,
    path::Path,
};

use log::{debug, trace};

use crate::{Error, Result};

const TOUR_SECTION_HEADER: &str = "TOUR_SECTION";
const EOF_MARKER: &str = "EOF";
const TOUR_END_SENTINEL: i64 = -1;
const TSPLIB_NODE_ID_OFFSET: i64 = 1;

/// Node ids in visiting order, exactly as the solver wrote them (1-based for
/// TSPLIB), minus the trailing `-1`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tour(Vec<i64>);

impl Tour {
    /// Reads a tour file. The handle is closed before returning.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parses in-memory text; `origin` only labels errors.
    pub fn from_text(text: &str, origin: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(text.as_bytes(), origin)
    }

    pub fn from_reader<R: BufRead>(reader: R, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let mut in_tour_section = false;
        let mut nodes = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;

            if line.starts_with(TOUR_SECTION_HEADER) {
                trace!("{}:{}: entering {TOUR_SECTION_HEADER}", origin.display(), idx + 1);
                in_tour_section = true;
                continue;
            }
            if line.starts_with(EOF_MARKER) {
                break;
            }
            if !in_tour_section {
                continue;
            }

            for token in line.split_whitespace() {
                let id: i64 = token.parse().map_err(|e| {
                    Error::invalid_data(format!(
                        "{}:{}: bad tour token '{token}': {e}",
                        origin.display(),
                        idx + 1
                    ))
                })?;
                nodes.push(id);
            }
        }

        if nodes.is_empty() {
            return Err(Error::missing_tour(origin));
        }

        let terminated = nodes.last() == Some(&TOUR_END_SENTINEL);
        if terminated {
            nodes.pop();
        }

        debug!(
            "read tour from {}: nodes={} terminated={terminated}",
            origin.display(),
            nodes.len()
        );

        Ok(Self(nodes))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }

    /// Converts TSPLIB's 1-based ids to 0-based indices.
    ///
    /// Fails on ids below 1; the reader itself never checks them.
    pub fn zero_based(&self) -> Result<Vec<usize>> {
        self.0
            .iter()
            .map(|&id| {
                if id < TSPLIB_NODE_ID_OFFSET {
                    return Err(Error::invalid_data(format!(
                        "bad node id {id}; TSPLIB ids must be >= {TSPLIB_NODE_ID_OFFSET}"
                    )));
                }
                usize::try_from(id - TSPLIB_NODE_ID_OFFSET)
                    .map_err(|e| Error::invalid_data(format!("node id {id} out of range: {e}")))
            })
            .collect()
    }
}

impl Deref for Tour {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Tour> for Vec<i64> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

/// Reads the `TOUR_SECTION` of a solver output file.
pub fn read_tsp_tour(path: impl AsRef<Path>) -> Result<Tour> {
    Tour::from_file(path)
}
