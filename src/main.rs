use std::error::Error;

use dyebox::config::{self, Config};
use dyebox::{diagnostics, SimState};

/// Parse `<flag> <value>` from CLI args.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Apply the scripted sources due at `step`, then advance one tick.
fn run_step(sim: &mut SimState, cfg: &Config, step: usize) -> dyebox::Result<()> {
    for src in cfg.sources.iter().filter(|s| s.fires_at(step)) {
        if src.density != 0.0 {
            sim.add_density_source(src.x, src.y, src.density)?;
        }
        if src.vx != 0.0 || src.vy != 0.0 {
            sim.add_velocity_source(src.x, src.y, src.vx, src.vy)?;
        }
    }
    sim.step(cfg.physics.dt)
}

fn run(sim: &mut SimState, cfg: &Config, steps: usize) -> dyebox::Result<()> {
    let interval = cfg.run.log_interval;
    for step in 0..steps {
        run_step(sim, cfg, step)?;
        log::debug!("step={} done", step + 1);

        if interval > 0 && (step + 1) % interval == 0 {
            let d = diagnostics::summarize(sim);
            let time = (step + 1) as f64 * cfg.physics.dt;
            log::info!(
                "step={} t={:.4} mass={:.6} max_d={:.4} KE={:.6e} max_div={:.3e}",
                step + 1,
                time,
                d.total_density,
                d.max_density,
                d.kinetic_energy,
                d.max_divergence
            );
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let path = arg_value(&args, "--config").unwrap_or_else(|| config::DEFAULT_PATH.to_string());
    let cfg = config::load(&path);
    let steps = match arg_value(&args, "--steps") {
        Some(s) => s.parse::<usize>()?,
        None => cfg.run.steps,
    };

    let mut sim = SimState::new(cfg.physics.grid_size, &cfg.solver_params())?;
    log::info!(
        "grid={}x{} visc={} diff={} dt={:.4} steps={} sources={}",
        sim.grid_size(),
        sim.grid_size(),
        sim.viscosity(),
        sim.diffusion(),
        cfg.physics.dt,
        steps,
        cfg.sources.len()
    );

    run(&mut sim, &cfg, steps)?;

    let summary = diagnostics::summarize(&sim);
    if has_flag(&args, "--json") {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        log::info!("final: {:?}", summary);
    }
    Ok(())
}
