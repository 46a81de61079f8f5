//! Newton-polynomial free-energy estimates from the command line.
//!
//! ```sh
//! newton_fe dvdl.dat                 # coefficients + free energy
//! newton_fe dvdl.dat fit.dat         # ... and resample onto fit.dat
//! newton_fe dvdl.dat fit.dat 100     # ... with 100 steps (101 lines)
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use newton_fe::interpolation::config::{NewtonCfg, DEFAULT_MAX_SAMPLES, DEFAULT_X_TOL};
use newton_fe::interpolation::newton::Newton;
use newton_fe::io::reader::read_samples;

#[derive(Parser)]
#[command(name = "newton_fe")]
#[command(about = "Free energy differences from Newton interpolating polynomials")]
#[command(version)]
struct Cli {
    /// Two-column `lambda, <dV/dlambda>` sample file.
    input_file: PathBuf,

    /// Write the resampled polynomial to this file.
    plot_file: Option<PathBuf>,

    /// Resampling steps (defaults to the number of samples).
    data_points: Option<usize>,

    /// Minimum allowed spacing between sample x-values.
    #[arg(long, default_value_t = DEFAULT_X_TOL)]
    x_tol: f64,

    /// Reject inputs with more samples than this.
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLES)]
    max_samples: usize,

    /// Resampling interval (defaults to 0 1).
    #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
    domain: Option<Vec<f64>>,

    /// Skip the coefficient table.
    #[arg(short, long)]
    quiet: bool,
}

fn build_cfg(cli: &Cli) -> Result<NewtonCfg> {
    let mut cfg = NewtonCfg::new()
        .set_x_tol(cli.x_tol)?
        .set_max_samples(cli.max_samples)?;
    if let Some(domain) = &cli.domain {
        cfg = cfg.set_domain(domain[0], domain[1])?;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = build_cfg(&cli)?;
    let samples = read_samples(&cli.input_file)
        .with_context(|| format!("reading samples from {}", cli.input_file.display()))?;
    info!("read {} samples from {}", samples.len(), cli.input_file.display());

    let newton = Newton::from_samples(&samples, cfg)
        .with_context(|| format!("fitting {}", cli.input_file.display()))?;

    if !cli.quiet {
        print!("{}", newton.polynomial()?);
        println!();
    }

    let report = newton.report()?;
    if report.trapezoid.is_none() {
        warn!("single sample: trapezoidal estimate unavailable");
    }
    print!("{}", report);

    if let Some(plot_file) = &cli.plot_file {
        let steps = cli.data_points.unwrap_or(samples.len());
        newton.estimate(plot_file, steps)?;
    }

    Ok(())
}
