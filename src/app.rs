//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and initializes logging
//! - turns arguments into configs
//! - runs sweeps / orbital profiles via `pipeline`
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::{Command, EvalArgs, OrbitalArgs, PlotArgs, SweepArgs};
use crate::domain::{CurveKind, OrbitalConfig, SweepConfig};
use crate::error::AppError;
use crate::models::SmoothGrowthModel;

pub mod pipeline;

/// Entry point for the `cpg` binary.
pub fn run() -> Result<(), AppError> {
    // Running `cpg` with no subcommand reproduces the memory figure, like
    // running the original script did.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Sweep(args) => handle_sweep(args),
        Command::Eval(args) => handle_eval(args),
        Command::Plot(args) => handle_plot(args),
        Command::Orbitals(args) => handle_orbitals(args),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins at default verbosity.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // `try_init` so a second call (tests, embedding) is a no-op.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = sweep_config_from_args(&args);
    let run = pipeline::run_sweep(&config)?;

    println!("{}", crate::report::format_sweep_summary(&run, &config));

    if config.plot {
        let plot = crate::plot::render_sweep_plot(
            &run.rows,
            &config.curves,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::write_sweep_csv(path, &run.rows, &config.curves)?;
    }
    if let Some(path) = &config.export_json {
        let file = crate::io::to_sweep_file(&run, &config.curves);
        crate::io::write_sweep_json(path, &file)?;
    }
    if let Some(path) = &config.svg {
        crate::plot::write_sweep_svg(path, &run.rows, &config.curves)?;
    }

    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let model = SmoothGrowthModel::new(args.settings.to_settings())?;
    let stages: Vec<_> = args.natoms.iter().map(|&n| model.stages(n)).collect();

    println!("{}", crate::report::format_settings(model.settings()));
    println!("{}", crate::report::format_stages(&stages));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let sweep = crate::io::read_sweep_json(&args.sweep)?;
    debug!(
        tool = %sweep.tool,
        generated_at = %sweep.generated_at,
        rows = sweep.rows.len(),
        "loaded sweep"
    );

    println!("{}", crate::report::format_settings(&sweep.settings));
    let plot = crate::plot::render_sweep_plot(&sweep.rows, &sweep.curves, args.width, args.height);
    println!("{plot}");

    if let Some(path) = &args.svg {
        crate::plot::write_sweep_svg(path, &sweep.rows, &sweep.curves)?;
    }
    Ok(())
}

fn handle_orbitals(args: OrbitalArgs) -> Result<(), AppError> {
    let config = orbital_config_from_args(&args);
    let run = pipeline::run_orbitals(&config)?;

    println!("{}", crate::report::format_orbital_summary(&run, config.quantity));

    if config.plot {
        let plot = crate::plot::render_orbital_plot(
            &run.r,
            &run.profiles,
            config.quantity,
            config.r_view,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export_csv {
        crate::io::write_orbital_csv(path, &run.r, &run.profiles)?;
    }
    if let Some(path) = &config.svg {
        crate::plot::write_orbital_svg(path, &run.r, &run.profiles, config.quantity, config.r_view)?;
    }
    Ok(())
}

pub fn sweep_config_from_args(args: &SweepArgs) -> SweepConfig {
    let curves = if args.curves.is_empty() {
        CurveKind::ALL.to_vec()
    } else {
        args.curves.clone()
    };

    SweepConfig {
        start: args.start,
        end: args.end,
        points: args.points,
        curves,
        settings: args.settings.to_settings(),
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
        svg: args.svg.clone(),
    }
}

pub fn orbital_config_from_args(args: &OrbitalArgs) -> OrbitalConfig {
    let defaults = OrbitalConfig::default();
    let basis = if args.basis.is_empty() {
        defaults.basis
    } else {
        args.basis.clone()
    };

    OrbitalConfig {
        r_max: args.r_max,
        points: args.points,
        basis,
        quantity: args.quantity,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        // The radial distribution has a longer tail worth showing.
        r_view: args.r_view.unwrap_or(match args.quantity {
            crate::domain::RadialQuantity::Wavefunction => 4.0,
            crate::domain::RadialQuantity::Distribution => 6.0,
        }),
        export_csv: args.export.clone(),
        svg: args.svg.clone(),
    }
}

/// Rewrite argv so `cpg` defaults to `cpg sweep`.
///
/// Rules:
/// - `cpg`                      -> `cpg sweep`
/// - `cpg --svg out.svg ...`    -> `cpg sweep --svg out.svg ...`
/// - `cpg --help/--version/-h`  -> unchanged (show top-level help/version)
/// - `cpg -v ...`               -> global flag; rewritten only if no subcommand follows
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let is_top_level_help_or_version = |a: &str| matches!(a, "-h" | "--help" | "-V" | "--version" | "help");
    let is_subcommand = |a: &str| matches!(a, "sweep" | "eval" | "plot" | "orbitals");

    let rest = argv.get(1..).unwrap_or_default();
    if rest
        .iter()
        .any(|a| is_top_level_help_or_version(a.as_str()) || is_subcommand(a.as_str())) {
        return argv;
    }

    // Insert after any leading verbosity flags so they stay global.
    let insert_at = 1 + rest.iter().take_while(|a| is_verbosity_flag(a.as_str())).count();
    argv.insert(insert_at, "sweep".to_string());
    argv
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose" || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_sweep() {
        assert_eq!(rewrite_args(args(&["cpg"])), args(&["cpg", "sweep"]));
        assert_eq!(
            rewrite_args(args(&["cpg", "--svg", "m.svg"])),
            args(&["cpg", "sweep", "--svg", "m.svg"])
        );
        assert_eq!(
            rewrite_args(args(&["cpg", "-vv", "--no-plot"])),
            args(&["cpg", "-vv", "sweep", "--no-plot"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_are_untouched() {
        for v in [
            &["cpg", "eval", "59"][..],
            &["cpg", "--help"][..],
            &["cpg", "-v", "orbitals"][..],
            &["cpg", "plot", "--sweep", "s.json"][..],
        ] {
            assert_eq!(rewrite_args(args(v)), args(v));
        }
    }

    #[test]
    fn sweep_args_map_to_config() {
        let cli = Cli::try_parse_from(rewrite_args(args(&["cpg", "--no-plot", "--d3", "20"]))).unwrap();
        let Command::Sweep(sweep) = cli.command else {
            panic!("expected sweep");
        };
        let config = sweep_config_from_args(&sweep);
        assert!(!config.plot);
        assert_eq!(config.settings.d3, 20.0);
        assert_eq!(config.curves, CurveKind::ALL.to_vec());
        assert_eq!(config.points, 600);
    }

    #[test]
    fn orbital_view_depends_on_quantity() {
        let cli = Cli::try_parse_from(["cpg", "orbitals", "--quantity", "distribution"]).unwrap();
        let Command::Orbitals(orb) = cli.command else {
            panic!("expected orbitals");
        };
        let config = orbital_config_from_args(&orb);
        assert_eq!(config.r_view, 6.0);
        assert_eq!(config.basis.len(), 5);
    }
}
