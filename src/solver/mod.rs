mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use self::core::{add_source, advect, diffuse, lin_solve, project};
pub use boundary::{set_bnd, FieldType};
pub use params::{SolverParams, RELAX_ITER};

use crate::error::{FluidError, Result};
use crate::state::SimState;

/// Full fluid simulation step: velocity first, then density carried by the
/// final velocity of the same tick. Pending sources are zeroed on completion.
///
/// `dt` is validated before any field is touched.
pub fn fluid_step(state: &mut SimState, dt: f64) -> Result<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(FluidError::InvalidTimeStep(dt));
    }
    velocity_step(state, dt);
    density_step(state, dt);
    state.clear_sources();

    debug_assert!(
        state.density.is_finite() && state.vx.is_finite() && state.vy.is_finite(),
        "non-finite value entered a live field"
    );
    Ok(())
}

fn velocity_step(state: &mut SimState, dt: f64) {
    let params = &state.params;

    // Inject pending impulses
    add_source(&mut state.vx, &state.vx_src, dt);
    add_source(&mut state.vy, &state.vy_src, dt);

    // Diffuse velocity
    diffuse(FieldType::VelocityX, &mut state.vx0, &state.vx, params.visc, dt, params.diffuse_iter);
    diffuse(FieldType::VelocityY, &mut state.vy0, &state.vy, params.visc, dt, params.diffuse_iter);

    // Project to make diffused velocity divergence-free
    project(
        &mut state.vx0,
        &mut state.vy0,
        &mut state.scratch_a,
        &mut state.scratch_b,
        params.project_iter,
    );

    // Advect velocity along the projected field
    advect(FieldType::VelocityX, &mut state.vx, &state.vx0, &state.vx0, &state.vy0, dt);
    advect(FieldType::VelocityY, &mut state.vy, &state.vy0, &state.vx0, &state.vy0, dt);

    // Project again
    project(
        &mut state.vx,
        &mut state.vy,
        &mut state.scratch_a,
        &mut state.scratch_b,
        params.project_iter,
    );
}

fn density_step(state: &mut SimState, dt: f64) {
    let params = &state.params;

    add_source(&mut state.density, &state.density_src, dt);
    diffuse(FieldType::Density, &mut state.scratch_a, &state.density, params.diff, dt, params.diffuse_iter);
    advect(FieldType::Density, &mut state.density, &state.scratch_a, &state.vx, &state.vy, dt);
}
