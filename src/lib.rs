//! `concorde_tsplib` writes TSPLIB problem files for external TSP solvers such
//! as Concorde or LKH, and reads back the tours they produce.
//!
//! Only the subset of TSPLIB these solvers need is supported:
//! `NODE_COORD_SECTION`, a `FULL_MATRIX` `EDGE_WEIGHT_SECTION`, and
//! `TOUR_SECTION`.
//!
//! # Quickstart
//!
//! ```no_run
//! use std::fs::File;
//!
//! use concorde_tsplib::{read_tsp_tour, write_tsp_file};
//!
//! fn main() -> concorde_tsplib::Result<()> {
//!     let mut file = File::create("work/problem.tsp")?;
//!     write_tsp_file(&mut file, &[0.0, 0.0, 1.0], &[0.0, 1.0, 0.0], "EUC_2D", "t", None)?;
//!
//!     // ... run the solver ...
//!
//!     let tour = read_tsp_tour("work/problem.sol")?;
//!     println!("{:?}", tour.zero_based()?);
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod matrix;
pub mod metric;
pub mod options;
pub mod problem;
pub mod tour;

mod error;
mod spec_writer;

pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
pub use metric::EdgeWeightType;
pub use problem::{TsplibProblem, write_tsp_file};
pub use tour::{Tour, read_tsp_tour};
