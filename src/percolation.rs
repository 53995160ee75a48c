//! Site percolation state on an n×n grid.
//!
//! Sites are addressed by 1-indexed `(row, col)` in `[1, n] × [1, n]` and map
//! row-major onto union-find elements `1..=n²`. Two independent union-find
//! structures are kept in lock-step for every open site:
//!
//! - `connectivity`: `n² + 2` elements. Element 0 is a virtual top terminal
//!   wired to row 1, element `n² + 1` a virtual bottom terminal wired to row n.
//!   The system percolates iff the two terminals share a set.
//! - `fullness`: `n² + 1` elements, top terminal only. A site is full iff it is
//!   open and shares a set with the top terminal here.
//!
//! Answering fullness from `connectivity` would be wrong once the system
//! percolates: every open site touching the bottom row joins the bottom
//! terminal, which is joined to the top, so isolated bottom clusters would read
//! as full (backwash). `fullness` has no bottom terminal to route through.

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

const TOP: usize = 0;

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    /// Open flag per site, indexed by `element - 1`.
    open: Vec<bool>,
    open_count: usize,
    connectivity: UnionFind,
    fullness: UnionFind,
}

impl Percolation {
    /// Create an n×n grid with every site blocked.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::invalid("grid size", n));
        }
        // n² + 2 parent and size slots must be addressable.
        let sites = n
            .checked_mul(n)
            .filter(|&s| {
                s.checked_add(2)
                    .and_then(|e| e.checked_mul(std::mem::size_of::<usize>()))
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| PercolationError::invalid("grid size", n))?;
        let bottom = sites + 1;

        let mut connectivity = UnionFind::new(sites + 2)?;
        let mut fullness = UnionFind::new(sites + 1)?;

        for col in 1..=n {
            let top_site = col;
            let bottom_site = (n - 1) * n + col;
            connectivity.union(TOP, top_site)?;
            connectivity.union(bottom, bottom_site)?;
            fullness.union(TOP, top_site)?;
        }

        Ok(Self {
            n,
            open: vec![false; sites],
            open_count: 0,
            connectivity,
            fullness,
        })
    }

    /// Grid dimension n.
    pub fn size(&self) -> usize {
        self.n
    }

    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(PercolationError::OutOfRange { row, col, n: self.n });
        }
        Ok(())
    }

    /// Union-find element of an already validated site.
    fn element(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1) + 1
    }

    /// Open flag of an already validated site.
    fn site_open(&self, row: usize, col: usize) -> bool {
        self.open[self.element(row, col) - 1]
    }

    /// Open site `(row, col)` if it is not open already.
    ///
    /// The coordinate is range-checked before anything else, so an invalid
    /// site never mutates state. Neighbours are joined in the order up, left,
    /// down, right, identically in both structures.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;
        if self.site_open(row, col) {
            return Ok(());
        }

        let site = self.element(row, col);
        self.open[site - 1] = true;
        self.open_count += 1;

        let n = self.n;
        let neighbours = [
            (row > 1).then(|| (row - 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (row < n).then(|| (row + 1, col)),
            (col < n).then(|| (row, col + 1)),
        ];
        for (r, c) in neighbours.into_iter().flatten() {
            if self.site_open(r, c) {
                let other = self.element(r, c);
                self.connectivity.union(site, other)?;
                self.fullness.union(site, other)?;
            }
        }
        Ok(())
    }

    /// Is site `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.site_open(row, col))
    }

    /// Is site `(row, col)` open and connected to the top row through open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        if !self.site_open(row, col) {
            return Ok(false);
        }
        let site = self.element(row, col);
        self.fullness.connected(TOP, site)
    }

    /// Whether two open-or-blocked sites share a component in the
    /// percolation structure. Both terminals count as paths here.
    pub fn sites_connected(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) -> Result<bool> {
        self.validate(r1, c1)?;
        self.validate(r2, c2)?;
        let a = self.element(r1, c1);
        let b = self.element(r2, c2);
        self.connectivity.connected(a, b)
    }

    /// Number of sites opened so far.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Fraction of the grid that is open.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / (self.n * self.n) as f64
    }

    /// Does the system have an open path from the top row to the bottom row?
    pub fn percolates(&mut self) -> Result<bool> {
        // With one site both terminals are wired to it from the start.
        if self.n == 1 {
            return Ok(self.open[0]);
        }
        let bottom = self.bottom();
        self.connectivity.connected(TOP, bottom)
    }
}
