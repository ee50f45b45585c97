use crate::error::{FluidError, Result};

/// Fixed Gauss-Seidel sweep count used by diffusion and projection.
pub const RELAX_ITER: usize = 20;

/// Solver parameters for the fluid simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverParams {
    pub visc: f64,
    pub diff: f64,
    pub diffuse_iter: usize,
    pub project_iter: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            visc: 0.1,
            diff: 0.01,
            diffuse_iter: RELAX_ITER,
            project_iter: RELAX_ITER,
        }
    }
}

impl SolverParams {
    /// Default iteration counts with the given viscosity and diffusion rate.
    pub fn with_rates(visc: f64, diff: f64) -> Self {
        Self { visc, diff, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("viscosity", self.visc), ("diffusion rate", self.diff)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FluidError::InvalidConfiguration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.diffuse_iter == 0 || self.project_iter == 0 {
            return Err(FluidError::InvalidConfiguration(
                "relaxation iteration counts must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SolverParams::default();
        assert_eq!(params.visc, 0.1);
        assert_eq!(params.diff, 0.01);
        assert_eq!(params.diffuse_iter, 20);
        assert_eq!(params.project_iter, 20);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_with_rates_keeps_iterations() {
        let params = SolverParams::with_rates(0.0, 0.5);
        assert_eq!(params.visc, 0.0);
        assert_eq!(params.diff, 0.5);
        assert_eq!(params.diffuse_iter, RELAX_ITER);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SolverParams::with_rates(-0.1, 0.0).validate().is_err());
        assert!(SolverParams::with_rates(0.0, f64::NAN).validate().is_err());
        let params = SolverParams { project_iter: 0, ..SolverParams::default() };
        assert!(matches!(params.validate(), Err(FluidError::InvalidConfiguration(_))));
    }
}
