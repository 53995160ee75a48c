//! # percolation-sim
//!
//! Site percolation on an n×n grid and Monte Carlo estimation of its
//! percolation threshold.
//!
//! Sites start blocked and are opened one at a time. After every open the grid
//! answers "does the system percolate" and "is this site full" in amortised
//! near-constant time through weighted quick-union with path compression,
//! never by rescanning the grid.
//!
//! ## Model
//!
//! - **Open** site: fluid may pass through it.
//! - **Full** site: open, and reachable from the top row through open sites.
//! - **Percolates**: some open path joins the top row to the bottom row.
//! - **Threshold**: the open fraction at which a random grid first percolates,
//!   ≈ 0.5927 for large n.

pub mod error;
pub mod union_find;
pub mod percolation;
pub mod stats;
pub mod simulation;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::union_find::*;
    pub use crate::percolation::*;
    pub use crate::stats::*;
    pub use crate::simulation::*;
}
