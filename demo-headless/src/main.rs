use clap::Parser;
use particle_sim_core::{Particle, SimulationSettings, SphereMesh, Vector3, VectorError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Headless particle kinematics demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "particle-demo")]
#[command(about = "Fixed-step particle kinematics demo", long_about = None)]
struct Args {
    /// Scenario file (JSON) to load instead of generating particles
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of particles to generate when no scenario is given
    #[arg(short = 'n', long, default_value_t = 16)]
    count: usize,

    /// Time step in seconds (overrides the scenario)
    #[arg(short, long)]
    time_step: Option<f64>,

    /// Simulation duration in seconds (overrides the scenario)
    #[arg(short, long)]
    duration: Option<f64>,

    /// Report interval in seconds (overrides the scenario)
    #[arg(short, long)]
    report_interval: Option<f64>,

    /// Downward acceleration given to generated particles
    #[arg(short, long, default_value_t = 9.81)]
    gravity: f64,

    /// Seed for generated launch velocities
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final scenario (with advanced particles) to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Latitude and longitude bands of the sphere mesh reported per particle
    #[arg(long, default_value_t = 50)]
    mesh_detail: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Particle Kinematics Demo ===\n");

    let mut settings = match &args.scenario {
        Some(path) => SimulationSettings::load(path)?,
        None => SimulationSettings {
            particles: launch_particles(args.count, args.gravity, args.seed),
            ..SimulationSettings::default()
        },
    };

    // CLI overrides apply on top of the loaded or default settings
    if let Some(dt) = args.time_step {
        settings.time_step = dt;
    }
    if let Some(duration) = args.duration {
        settings.duration = duration;
    }
    if let Some(interval) = args.report_interval {
        settings.report_interval = interval;
    }
    settings.validate()?;

    if settings.particles.is_empty() {
        warn!("scenario has no particles, nothing to simulate");
        return Ok(());
    }

    println!(
        "Particles: {}, dt: {}s, duration: {}s ({} steps)\n",
        settings.particles.len(),
        settings.time_step,
        settings.duration,
        settings.step_count()
    );

    simulate(&mut settings)?;

    println!("\n=== Simulation Complete ===");
    for particle in settings.particles.iter().take(8) {
        println!(
            "{:>12}  pos {}  vel {}",
            particle.name(),
            particle.position(),
            particle.velocity()
        );
    }
    if settings.particles.len() > 8 {
        println!("{:>12}", format!("(+{} more)", settings.particles.len() - 8));
    }

    let largest = settings
        .particles
        .iter()
        .max_by(|a, b| a.radius().total_cmp(&b.radius()));
    if let Some(particle) = largest {
        let mesh = SphereMesh::for_particle(particle, args.mesh_detail, args.mesh_detail)?;
        println!(
            "\nSphere mesh for '{}' (r = {}): {} vertices, {} triangles",
            particle.name(),
            particle.radius(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    if let Some(path) = &args.output {
        settings.save(path)?;
        println!("Final state written to {}", path.display());
    }

    Ok(())
}

/// Step every particle through the configured duration, printing progress
fn simulate(settings: &mut SimulationSettings) -> Result<(), VectorError> {
    let dt = settings.time_step;
    let steps = settings.step_count();

    println!("Time(s) | Centroid                         | Mean speed | Heading");
    println!("--------|----------------------------------|------------|--------");
    report(0.0, &settings.particles)?;

    let mut next_report = settings.report_interval;
    for step in 1..=steps {
        // Particles are independent, so each one is advanced by exactly one worker
        settings.particles.par_iter_mut().for_each(|p| p.update(dt));

        let time = step as f64 * dt;
        if time >= next_report || step == steps {
            report(time, &settings.particles)?;
            while next_report <= time {
                next_report += settings.report_interval;
            }
        }
    }

    info!(steps, "simulation finished");
    Ok(())
}

fn report(time: f64, particles: &[Particle]) -> Result<(), VectorError> {
    let count = particles.len() as f64;

    let centroid = particles
        .par_iter()
        .map(Particle::position)
        .reduce(Vector3::zeros, |a, b| a + b)
        .div_scalar(count)?;
    let mean_velocity = particles
        .par_iter()
        .map(Particle::velocity)
        .reduce(Vector3::zeros, |a, b| a + b)
        .div_scalar(count)?;
    let mean_speed = particles
        .par_iter()
        .map(|p| p.velocity().magnitude())
        .sum::<f64>()
        / count;

    // A swarm at rest has no heading
    let heading = mean_velocity
        .normalize()
        .map_or_else(|_| "-".to_string(), |h| format!("{h:.2}"));

    println!(
        "{:7.2} | {:32} | {:10.3} | {}",
        time,
        format!("{centroid:.3}"),
        mean_speed,
        heading
    );
    Ok(())
}

/// Launch particles from the origin with a random upward velocity
fn launch_particles(count: usize, gravity: f64, seed: Option<u64>) -> Vec<Particle> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let horizontal_spread = 3.0;
    (0..count)
        .map(|i| {
            let velocity = Vector3::new(
                rng.random_range(-horizontal_spread..horizontal_spread),
                rng.random_range(5.0..15.0),
                rng.random_range(-horizontal_spread..horizontal_spread),
            );
            Particle::new(
                Vector3::zeros(),
                velocity,
                Vector3::new(0.0, -gravity, 0.0),
                Vector3::new(1.0, 0.066, 0.0),
                rng.random_range(0.5..2.0),
                rng.random_range(0.05..0.2),
                0.0,
                format!("particle-{i}"),
            )
        })
        .collect()
}
