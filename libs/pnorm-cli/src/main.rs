use anyhow::Result;
use clap::{Parser, Subcommand};
use config::constants::{
    ControlRanges, DEFAULT_EXPONENT, DEFAULT_RADIUS, DEFAULT_SEGMENTS, MAX_EXPONENT, MIN_EXPONENT,
};
use pnorm_mesh::SurfaceParams;

mod report;

use report::SurfaceReport;

#[derive(Parser)]
#[command(name = "pnorm")]
#[command(about = "Inspect p-norm ball surface meshes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one surface and print its statistics
    Info {
        #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
        radius: f64,

        #[arg(short, long, default_value_t = DEFAULT_EXPONENT)]
        p: f64,

        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: u32,

        /// Clamp values into the slider ranges instead of rejecting them
        #[arg(long)]
        clamp: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate surfaces across the exponent range and report stability
    Sweep {
        #[arg(long, default_value_t = MIN_EXPONENT)]
        from: f64,

        #[arg(long, default_value_t = MAX_EXPONENT)]
        to: f64,

        #[arg(long, default_value_t = 40)]
        steps: u32,

        #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
        radius: f64,

        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info {
            radius,
            p,
            segments,
            clamp,
            json,
        } => {
            let (radius, p, segments) = if clamp {
                let ranges = ControlRanges::default();
                (
                    ranges.clamp_radius(radius),
                    ranges.clamp_exponent(p),
                    ranges.clamp_segments(segments),
                )
            } else {
                (radius, p, segments)
            };

            let params = SurfaceParams::new(radius, p, segments)?;
            let report = SurfaceReport::measure(params);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }

        Commands::Sweep {
            from,
            to,
            steps,
            radius,
            segments,
        } => {
            if steps == 0 {
                anyhow::bail!("--steps must be at least 1");
            }

            println!("{:>8} {:>10} {:>10} {:>12} {:>7}", "p", "vertices", "triangles", "deviation", "finite");
            let mut unstable = 0;
            for k in 0..=steps {
                let p = from + (to - from) * k as f64 / steps as f64;
                let params = SurfaceParams::new(radius, p, segments)?;
                let report = SurfaceReport::measure(params);
                if !report.all_finite {
                    tracing::warn!(p, "non-finite coordinates generated");
                    unstable += 1;
                }
                println!(
                    "{:>8.4} {:>10} {:>10} {:>12.3e} {:>7}",
                    p, report.vertices, report.triangles, report.norm_deviation, report.all_finite
                );
            }

            if unstable > 0 {
                anyhow::bail!("{unstable} exponents produced non-finite meshes");
            }
        }
    }

    Ok(())
}
