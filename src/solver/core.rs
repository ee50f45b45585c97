use crate::field::Field;
use super::boundary::{set_bnd, FieldType};

/// Accumulate a pending source into a live field: x += dt * s.
pub fn add_source(x: &mut Field, s: &Field, dt: f64) {
    for (xv, sv) in x.as_mut_slice().iter_mut().zip(s.as_slice()) {
        *xv += dt * sv;
    }
}

/// Gauss-Seidel iterative linear solver.
/// Solves: x[i,j] = (x0[i,j] + a * (neighbors)) / c
/// Sweeps ascend in `i` then `j` and read neighbors already updated in the same sweep.
pub fn lin_solve(field_type: FieldType, x: &mut Field, x0: &Field, a: f64, c: f64, iter: usize) {
    let n = x.grid_size();
    for _ in 0..iter {
        for i in 1..=n {
            for j in 1..=n {
                let neighbors = x.at(i - 1, j) + x.at(i + 1, j) + x.at(i, j - 1) + x.at(i, j + 1);
                x.put(i, j, (x0.at(i, j) + a * neighbors) / c);
            }
        }
        set_bnd(field_type, x);
    }
}

/// Diffusion step: spreads the field over time.
/// a = dt * diff * N, c = 1 + 4a
pub fn diffuse(field_type: FieldType, x: &mut Field, x0: &Field, diff: f64, dt: f64, iter: usize) {
    let a = dt * x.grid_size() as f64 * diff;
    let c = 1.0 + 4.0 * a;
    // Initialize x from x0
    x.copy_from(x0);
    lin_solve(field_type, x, x0, a, c, iter);
}

/// Semi-Lagrangian advection: traces particles backwards through velocity field.
/// Stable for any velocity magnitude since every sample is a convex blend of `d0`.
pub fn advect(field_type: FieldType, d: &mut Field, d0: &Field, vx: &Field, vy: &Field, dt: f64) {
    let n = d.grid_size();
    let hi = n as f64 + 0.5;

    for i in 1..=n {
        for j in 1..=n {
            // Trace backwards, clamped so the bilinear stencil stays inside storage
            let x = (i as f64 - dt * vx.at(i, j)).clamp(0.5, hi);
            let y = (j as f64 - dt * vy.at(i, j)).clamp(0.5, hi);

            let i0 = x.floor() as usize;
            let i1 = i0 + 1;
            let j0 = y.floor() as usize;
            let j1 = j0 + 1;
            let s1 = x - i0 as f64;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f64;
            let t0 = 1.0 - t1;

            d.put(
                i,
                j,
                s0 * (t0 * d0.at(i0, j0) + t1 * d0.at(i0, j1))
                    + s1 * (t0 * d0.at(i1, j0) + t1 * d0.at(i1, j1)),
            );
        }
    }
    set_bnd(field_type, d);
}

/// Pressure projection: enforces incompressibility (divergence-free velocity field).
pub fn project(vx: &mut Field, vy: &mut Field, p: &mut Field, div: &mut Field, iter: usize) {
    let n = vx.grid_size();
    let h = 1.0 / n as f64;

    // Calculate divergence
    for i in 1..=n {
        for j in 1..=n {
            div.put(
                i,
                j,
                -0.5 * h * (vx.at(i + 1, j) - vx.at(i - 1, j) + vy.at(i, j + 1) - vy.at(i, j - 1)),
            );
            p.put(i, j, 0.0);
        }
    }
    set_bnd(FieldType::Density, div);
    set_bnd(FieldType::Density, p);

    // Solve for pressure
    lin_solve(FieldType::Density, p, div, 1.0, 4.0, iter);

    // Subtract pressure gradient from velocity
    for i in 1..=n {
        for j in 1..=n {
            let gx = 0.5 * (p.at(i + 1, j) - p.at(i - 1, j)) / h;
            let gy = 0.5 * (p.at(i, j + 1) - p.at(i, j - 1)) / h;
            vx.put(i, j, vx.at(i, j) - gx);
            vy.put(i, j, vy.at(i, j) - gy);
        }
    }
    set_bnd(FieldType::VelocityX, vx);
    set_bnd(FieldType::VelocityY, vy);
}
