use std::{
    fmt::{Display, Formatter},
    fs,
    io::Write,
    path::Path,
};

use log::{debug, trace};
use tsplib_derive::TsplibToken;

use crate::{
    Error, Result,
    matrix::DistanceMatrix,
    metric::{EdgeWeightFormat, EdgeWeightType},
    spec_writer::SpecWriter,
};

const TSPLIB_NODE_ID_BASE: usize = 1;
const EOF_MARKER: &str = "EOF";

/// TSPLIB `TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, TsplibToken)]
pub enum TsplibProblemType {
    Tsp,
}

/// Entry in `NODE_COORD_SECTION`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeCoord {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Display for NodeCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.id, self.x, self.y)
    }
}

/// Entry in `EDGE_WEIGHT_SECTION`, written as `row col weight`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeWeightEntry {
    pub row: usize,
    pub col: usize,
    pub weight: i64,
}

impl Display for EdgeWeightEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.row, self.col, self.weight)
    }
}

/// A validated TSPLIB problem, ready to be written.
///
/// Construction performs every check, so writing can only fail on I/O.
#[derive(Clone, Debug, PartialEq)]
pub struct TsplibProblem {
    name: String,
    problem_type: TsplibProblemType,
    edge_weight_type: EdgeWeightType,
    edge_weight_format: Option<EdgeWeightFormat>,
    node_coord_section: Vec<NodeCoord>,
    edge_weight_section: Vec<EdgeWeightEntry>,
}

impl TsplibProblem {
    /// Validates coordinates, the `norm` token and the optional matrix.
    ///
    /// Checks run in order: coordinate lengths, metric token, matrix shape,
    /// matrix minimum. A matrix forces `EDGE_WEIGHT_TYPE: EXPLICIT` whatever
    /// `norm` says, but `norm` must still be a known token.
    pub fn new(
        name: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
        norm: &str,
        matrix: Option<&DistanceMatrix>,
    ) -> Result<Self> {
        check_coordinate_lengths(xs, ys)?;
        let edge_weight_type: EdgeWeightType = norm.parse()?;
        Self::build(name.into(), xs, ys, edge_weight_type, matrix)
    }

    /// Same as [`Self::new`] with an already parsed metric.
    pub fn with_metric(
        name: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
        edge_weight_type: EdgeWeightType,
        matrix: Option<&DistanceMatrix>,
    ) -> Result<Self> {
        check_coordinate_lengths(xs, ys)?;
        Self::build(name.into(), xs, ys, edge_weight_type, matrix)
    }

    fn build(
        name: String,
        xs: &[f64],
        ys: &[f64],
        requested: EdgeWeightType,
        matrix: Option<&DistanceMatrix>,
    ) -> Result<Self> {
        let node_coord_section = xs
            .iter()
            .zip(ys)
            .enumerate()
            .map(|(idx, (&x, &y))| NodeCoord {
                id: idx + TSPLIB_NODE_ID_BASE,
                x,
                y,
            })
            .collect();

        let mut problem = Self {
            name,
            problem_type: TsplibProblemType::Tsp,
            edge_weight_type: requested,
            edge_weight_format: None,
            node_coord_section,
            edge_weight_section: Vec::new(),
        };

        if let Some(matrix) = matrix {
            if matrix.dimension() != xs.len() {
                return Err(Error::shape_mismatch(format!(
                    "distance matrix is {0}x{0} but there are {1} nodes",
                    matrix.dimension(),
                    xs.len()
                )));
            }

            let weights = matrix.normalized_weights()?;
            let dimension = matrix.dimension();
            problem.edge_weight_section = weights
                .into_iter()
                .enumerate()
                .map(|(idx, weight)| EdgeWeightEntry {
                    row: idx / dimension + TSPLIB_NODE_ID_BASE,
                    col: idx % dimension + TSPLIB_NODE_ID_BASE,
                    weight,
                })
                .collect();
            problem.edge_weight_type = EdgeWeightType::Explicit;
            problem.edge_weight_format = Some(EdgeWeightFormat::FullMatrix);

            if requested != EdgeWeightType::Explicit {
                trace!("explicit matrix overrides EDGE_WEIGHT_TYPE {requested}");
            }
        }

        Ok(problem)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn problem_type(&self) -> TsplibProblemType {
        self.problem_type
    }

    pub fn dimension(&self) -> usize {
        self.node_coord_section.len()
    }

    /// The metric actually written, `EXPLICIT` whenever a matrix was given.
    pub fn edge_weight_type(&self) -> EdgeWeightType {
        self.edge_weight_type
    }

    pub fn edge_weight_format(&self) -> Option<EdgeWeightFormat> {
        self.edge_weight_format
    }

    pub fn node_coords(&self) -> &[NodeCoord] {
        &self.node_coord_section
    }

    pub fn edge_weights(&self) -> &[EdgeWeightEntry] {
        &self.edge_weight_section
    }

    /// Renders the whole file, then hands it to `sink` in one `write_all`.
    /// The sink is neither flushed nor closed.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let text = self.to_string();
        sink.write_all(text.as_bytes())?;
        debug!(
            "wrote TSPLIB problem {}: dimension={} edge_weight_type={} bytes={}",
            self.name,
            self.dimension(),
            self.edge_weight_type,
            text.len()
        );
        Ok(())
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        debug!(
            "wrote TSPLIB problem {} to {}: dimension={}",
            self.name,
            path.display(),
            self.dimension()
        );
        Ok(())
    }
}

impl Display for TsplibProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut writer = SpecWriter::new(f);

        writer.kv_colon("NAME", &self.name)?;
        writer.kv_colon("TYPE", self.problem_type)?;
        writer.kv_colon("DIMENSION", self.dimension())?;
        writer.kv_colon("EDGE_WEIGHT_TYPE", self.edge_weight_type)?;
        writer.opt_kv_colon("EDGE_WEIGHT_FORMAT", self.edge_weight_format)?;
        writer.section("NODE_COORD_SECTION", &self.node_coord_section)?;

        if self.edge_weight_type.is_explicit() && !self.edge_weight_section.is_empty() {
            writer.terminated_section("EDGE_WEIGHT_SECTION", &self.edge_weight_section)?;
        }

        writer.line(EOF_MARKER)
    }
}

/// Validates the inputs and writes a TSPLIB problem to `sink`.
///
/// Nothing reaches `sink` unless every check passes.
pub fn write_tsp_file<W: Write + ?Sized>(
    sink: &mut W,
    xs: &[f64],
    ys: &[f64],
    norm: &str,
    name: &str,
    matrix: Option<&DistanceMatrix>,
) -> Result<()> {
    TsplibProblem::new(name, xs, ys, norm, matrix)?.write_to(sink)
}

fn check_coordinate_lengths(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(Error::shape_mismatch(format!(
            "x and y coordinate vectors must have the same length ({} != {})",
            xs.len(),
            ys.len()
        )));
    }
    Ok(())
}
