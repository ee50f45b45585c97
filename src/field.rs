use crate::error::{FluidError, Result};

/// Convert storage coordinates (ghost border included) to a flat index.
/// Storage is x-major so the solver's `i` then `j` sweep walks memory in order.
#[inline(always)]
pub const fn idx(i: usize, j: usize, w: usize) -> usize {
    i * w + j
}

/// Square scalar field over an `n x n` interior with a one-cell ghost border.
///
/// Logical coordinates `0..n` map to storage `1..=n`; storage index `0` and
/// `n + 1` on each axis hold ghost cells that only the boundary code writes.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    n: usize,
    data: Vec<f64>,
}

impl Field {
    pub fn new(n: usize) -> Self {
        let w = n + 2;
        Self { n, data: vec![0.0; w * w] }
    }

    /// Interior edge length.
    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Storage edge length including both ghost cells.
    pub fn width(&self) -> usize {
        self.n + 2
    }

    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        self.check(x, y)?;
        Ok(self.data[idx(x + 1, y + 1, self.width())])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        self.check(x, y)?;
        let w = self.width();
        self.data[idx(x + 1, y + 1, w)] = value;
        Ok(())
    }

    fn check(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.n || y >= self.n {
            return Err(FluidError::InvalidCoordinate { x, y, n: self.n });
        }
        Ok(())
    }

    /// Raw read in storage coordinates. Panics outside `0..=n+1`.
    #[inline(always)]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.data[idx(i, j, self.width())]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, i: usize, j: usize, value: f64) {
        let w = self.width();
        self.data[idx(i, j, w)] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    pub fn copy_from(&mut self, other: &Field) {
        debug_assert_eq!(self.n, other.n, "field sizes differ");
        self.data.copy_from_slice(&other.data);
    }

    /// Interior values in the solver's sweep order.
    pub fn interior(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.n;
        (1..=n).flat_map(move |i| (1..=n).map(move |j| self.at(i, j)))
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
