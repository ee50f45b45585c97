use serde::Serialize;

use crate::field::Field;
use crate::state::SimState;

/// Snapshot of scalar health indicators for one simulation state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostics {
    pub grid_size: usize,
    pub total_density: f64,
    pub min_density: f64,
    pub max_density: f64,
    pub kinetic_energy: f64,
    pub max_speed: f64,
    pub max_divergence: f64,
}

/// Sum of interior values.
pub fn total_density(density: &Field) -> f64 {
    density.interior().sum()
}

/// Interior (min, max). An empty grid cannot be constructed, so both are finite.
pub fn field_range(field: &Field) -> (f64, f64) {
    field
        .interior()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Compute volume-averaged kinetic energy: KE = 0.5 * <vx² + vy²>.
pub fn kinetic_energy(vx: &Field, vy: &Field) -> f64 {
    let count = vx.grid_size() * vx.grid_size();
    let sum: f64 = vx.interior().zip(vy.interior()).map(|(u, v)| u * u + v * v).sum();
    0.5 * sum / count as f64
}

pub fn max_speed(vx: &Field, vy: &Field) -> f64 {
    vx.interior()
        .zip(vy.interior())
        .map(|(u, v)| (u * u + v * v).sqrt())
        .fold(0.0, f64::max)
}

/// Largest |∇·v| over interior cells, central differences in grid units
/// (h = 1/N), ghost cells included in the stencil.
pub fn max_divergence(vx: &Field, vy: &Field) -> f64 {
    let n = vx.grid_size();
    let half_inv_h = 0.5 * n as f64;
    let mut max = 0.0_f64;
    for i in 1..=n {
        for j in 1..=n {
            let d = half_inv_h
                * (vx.at(i + 1, j) - vx.at(i - 1, j) + vy.at(i, j + 1) - vy.at(i, j - 1));
            max = max.max(d.abs());
        }
    }
    max
}

pub fn summarize(state: &SimState) -> Diagnostics {
    let (vx, vy) = state.velocity_fields();
    let density = state.density_field();
    let (min_density, max_density) = field_range(density);
    Diagnostics {
        grid_size: state.grid_size(),
        total_density: total_density(density),
        min_density,
        max_density,
        kinetic_energy: kinetic_energy(vx, vy),
        max_speed: max_speed(vx, vy),
        max_divergence: max_divergence(vx, vy),
    }
}
