use crate::error::{FluidError, Result};
use crate::field::Field;
use crate::solver::{self, SolverParams};

/// Complete simulation state for one fluid box.
///
/// Live fields are advanced by [`solver::fluid_step`]; the `*_src` fields queue
/// injected sources until the next step consumes and zeroes them.
#[derive(Clone, Debug)]
pub struct SimState {
    pub(crate) n: usize,
    pub(crate) params: SolverParams,
    pub(crate) density: Field,
    pub(crate) density_src: Field,
    pub(crate) vx: Field,
    pub(crate) vx_src: Field,
    pub(crate) vy: Field,
    pub(crate) vy_src: Field,
    /// Diffusion targets for the velocity components.
    pub(crate) vx0: Field,
    pub(crate) vy0: Field,
    /// General-purpose scratch buffer (used for pressure solve / diffused density).
    pub(crate) scratch_a: Field,
    /// General-purpose scratch buffer (used for divergence field).
    pub(crate) scratch_b: Field,
}

impl SimState {
    pub fn new(n: usize, params: &SolverParams) -> Result<Self> {
        if n == 0 {
            return Err(FluidError::InvalidConfiguration("grid size must be positive".into()));
        }
        params.validate()?;
        let field = Field::new(n);
        Ok(Self {
            n,
            params: params.clone(),
            density: field.clone(),
            density_src: field.clone(),
            vx: field.clone(),
            vx_src: field.clone(),
            vy: field.clone(),
            vy_src: field.clone(),
            vx0: field.clone(),
            vy0: field.clone(),
            scratch_a: field.clone(),
            scratch_b: field,
        })
    }

    /// Shorthand for [`SimState::new`] with the fixed relaxation counts.
    pub fn with_rates(n: usize, visc: f64, diff: f64) -> Result<Self> {
        Self::new(n, &SolverParams::with_rates(visc, diff))
    }

    pub fn grid_size(&self) -> usize {
        self.n
    }

    pub fn viscosity(&self) -> f64 {
        self.params.visc
    }

    pub fn diffusion(&self) -> f64 {
        self.params.diff
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Advance one tick. See [`solver::fluid_step`].
    pub fn step(&mut self, dt: f64) -> Result<()> {
        solver::fluid_step(self, dt)
    }

    /// Queue density at a cell; the amount is clamped to [0, 1] and replaces
    /// anything already pending there.
    /// Non-finite amounts are rejected.
    pub fn add_density_source(&mut self, x: usize, y: usize, amount: f64) -> Result<()> {
        self.density_src.get(x, y)?;
        check_source(amount)?;
        self.density_src.set(x, y, amount.clamp(0.0, 1.0))
    }

    /// Queue a velocity impulse; each component is clamped to [-1, 1].
    pub fn add_velocity_source(&mut self, x: usize, y: usize, dx: f64, dy: f64) -> Result<()> {
        // Validate everything first so a bad call leaves both components untouched
        self.vx_src.get(x, y)?;
        check_source(dx)?;
        check_source(dy)?;
        self.vx_src.set(x, y, dx.clamp(-1.0, 1.0))?;
        self.vy_src.set(x, y, dy.clamp(-1.0, 1.0))
    }

    pub fn density(&self, x: usize, y: usize) -> Result<f64> {
        self.density.get(x, y)
    }

    pub fn velocity_x(&self, x: usize, y: usize) -> Result<f64> {
        self.vx.get(x, y)
    }

    pub fn velocity_y(&self, x: usize, y: usize) -> Result<f64> {
        self.vy.get(x, y)
    }

    pub fn density_field(&self) -> &Field {
        &self.density
    }

    /// Current `(vx, vy)` fields.
    pub fn velocity_fields(&self) -> (&Field, &Field) {
        (&self.vx, &self.vy)
    }

    /// Zero every live, pending and scratch field.
    pub fn clear(&mut self) {
        for f in [
            &mut self.density,
            &mut self.density_src,
            &mut self.vx,
            &mut self.vx_src,
            &mut self.vy,
            &mut self.vy_src,
            &mut self.vx0,
            &mut self.vy0,
            &mut self.scratch_a,
            &mut self.scratch_b,
        ] {
            f.fill(0.0);
        }
    }

    pub(crate) fn clear_sources(&mut self) {
        self.density_src.fill(0.0);
        self.vx_src.fill(0.0);
        self.vy_src.fill(0.0);
    }
}

/// `clamp` passes NaN through, so non-finite sources never reach a pending buffer.
fn check_source(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FluidError::InvalidSource(value));
    }
    Ok(())
}
