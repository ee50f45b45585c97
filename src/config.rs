use std::path::Path;

use serde::Deserialize;

use crate::solver::{SolverParams, RELAX_ITER};

pub const DEFAULT_PATH: &str = "dyebox.yaml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub run: RunConfig,
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub grid_size: usize,
    pub visc: f64,
    pub diff: f64,
    pub dt: f64,
    pub diffuse_iter: usize,
    pub project_iter: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub steps: usize,
    pub log_interval: usize,
}

/// A scripted injection re-applied every `every` steps, starting at step 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub x: usize,
    pub y: usize,
    pub density: f64,
    pub vx: f64,
    pub vy: f64,
    pub every: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            run: RunConfig::default(),
            sources: vec![SourceConfig {
                x: 20,
                y: 20,
                density: 1.0,
                vx: 1.0,
                vy: 1.0,
                every: 1,
            }],
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            visc: 0.1,
            diff: 0.01,
            dt: 1.0 / 60.0,
            diffuse_iter: RELAX_ITER,
            project_iter: RELAX_ITER,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 600,
            log_interval: 60,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            density: 0.0,
            vx: 0.0,
            vy: 0.0,
            every: 1,
        }
    }
}

impl Config {
    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            visc: self.physics.visc,
            diff: self.physics.diff,
            diffuse_iter: self.physics.diffuse_iter,
            project_iter: self.physics.project_iter,
        }
    }
}

impl SourceConfig {
    /// Whether this source fires on the given step. `every = 0` fires once.
    pub fn fires_at(&self, step: usize) -> bool {
        match self.every {
            0 => step == 0,
            k => step % k == 0,
        }
    }
}

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(cfg) => {
                    log::info!("Loaded configuration from {}", path.display());
                    cfg
                }
                Err(e) => {
                    log::warn!("failed to parse {}: {e}; using defaults", path.display());
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}; using defaults", path.display());
                Config::default()
            }
        }
    } else {
        log::debug!("{} not found; using defaults", path.display());
        Config::default()
    }
}
