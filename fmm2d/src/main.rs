//! Evaluate the reference scene at a given expansion order and report relative errors
use std::process::ExitCode;

use clap::Parser;
use log::error;

use fmm2d::{
    fmm::constants::{DEFAULT_BUFFER_WIDTH, DEFAULT_DOMAIN_RADIUS},
    Domain, FmmError, Laplace2dBuilder, ReferenceScene,
};

/// Struct for parsing command-line arguments
#[derive(Parser)]
struct Args {
    /// Number of retained expansion terms
    expansion_order: usize,

    /// Width of the smoothing buffer
    #[arg(long, default_value_t = DEFAULT_BUFFER_WIDTH)]
    buffer_width: f64,

    /// Half width of the root domain, centered at the origin
    #[arg(long, default_value_t = DEFAULT_DOMAIN_RADIUS)]
    domain_radius: f64,
}

fn run(args: &Args) -> Result<(), FmmError> {
    let fmm = Laplace2dBuilder::new()
        .parameters(args.expansion_order, args.buffer_width)?
        .domain(Domain::new([0.0, 0.0], args.domain_radius))?
        .build()?;

    let error = ReferenceScene::new(fmm).run()?;

    println!("{:<20} : {:8.5e}", "Rel. L2 Error (p)", error.potential);
    println!("{:<20} : {:8.5e}", "Rel. L2 Error (F)", error.force);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
