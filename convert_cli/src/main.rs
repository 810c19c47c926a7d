//! # convert_cli
//!
//! Command-line front end for `convert_core`. Every subcommand prints a
//! human-readable report by default, or JSON with `--json`.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use convert_core::format::format_quantity;
use convert_core::presentation::{comparison_table, convert_many, quick_conversions};
use convert_core::record::ConversionRecord;
use convert_core::{
    are_units_compatible, conversion_formula, format_value, relative_scale, suggest_unit, unit_dimension,
    ConversionRequest, ConvertError, ConvertResult, Dimension, Settings, REGISTRY,
};

#[derive(Parser)]
#[command(name = "convert_cli")]
#[command(about = "Length, area and volume unit converter", long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (JSON)
    #[arg(long, global = true, env = "CONVERT_CONFIG")]
    config: Option<PathBuf>,

    /// Decimal places for results (0 to 10), overrides the settings file
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Quantity to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit id (e.g. meter)
        from: String,
        /// Target unit id, defaults to the configured pair for the dimension
        to: Option<String>,
        /// Swap source and target, converting `value` from `to` into `from`
        #[arg(long)]
        swap: bool,
    },
    /// List units, optionally for one dimension
    Units {
        /// length, area or volume
        dimension: Option<String>,
        /// Group units by measurement system
        #[arg(long)]
        grouped: bool,
    },
    /// Show which dimension a unit belongs to
    Dimension {
        /// Unit id
        unit: String,
    },
    /// Check whether two units can be converted
    Compatible { a: String, b: String },
    /// Describe a conversion as a formula
    Formula { from: String, to: String },
    /// Ratio of one source unit to the target unit
    Scale { from: String, to: String },
    /// Express a value in every unit of its dimension
    Compare {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
    },
    /// Convert a value into several targets at once
    Multi {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        #[arg(required = true)]
        to: Vec<String>,
    },
    /// Suggest a readable length unit for a magnitude in meters
    Suggest {
        #[arg(allow_negative_numbers = true)]
        meters: f64,
    },
    /// Evaluate the common quick conversions
    Quick,
    /// Print the effective settings
    Config {
        /// Write the effective settings to this path
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                if let Ok(out) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", out);
                }
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Settings file (if any) with the command-line precision applied
fn effective_settings(config: Option<&Path>, precision: Option<usize>) -> ConvertResult<Settings> {
    let settings = match config {
        Some(path) => {
            debug!(path = %path.display(), "loading settings");
            Settings::load_or_default(path)?
        }
        None => Settings::default(),
    };

    match precision {
        Some(p) => settings.with_precision(p),
        None => Ok(settings),
    }
}

fn run(cli: Cli) -> ConvertResult<()> {
    let settings = effective_settings(cli.config.as_deref(), cli.precision)?;
    let json = cli.json;

    match cli.command {
        Commands::Convert { value, from, to, swap } => {
            cmd_convert(&settings, json, value, &from, to.as_deref(), swap)
        }
        Commands::Units { dimension, grouped } => cmd_units(json, dimension.as_deref(), grouped),
        Commands::Dimension { unit } => cmd_dimension(json, &unit),
        Commands::Compatible { a, b } => cmd_compatible(json, &a, &b),
        Commands::Formula { from, to } => cmd_formula(json, &from, &to),
        Commands::Scale { from, to } => cmd_scale(&settings, json, &from, &to),
        Commands::Compare { value, from } => cmd_compare(&settings, json, value, &from),
        Commands::Multi { value, from, to } => cmd_multi(&settings, json, value, &from, &to),
        Commands::Suggest { meters } => cmd_suggest(&settings, json, meters),
        Commands::Quick => cmd_quick(&settings, json),
        Commands::Config { write } => cmd_config(&settings, json, write.as_deref()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> ConvertResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| ConvertError::SerializationError {
        reason: e.to_string(),
    })?;
    println!("{}", out);
    Ok(())
}

/// Target for `convert` when none is given: the other side of the
/// configured pair for the source's dimension.
fn default_target(settings: &Settings, from: &str) -> ConvertResult<String> {
    let dimension = unit_dimension(from).ok_or_else(|| ConvertError::unknown_unit(from))?;
    let pair = settings.pair(dimension);
    if pair.to == from {
        Ok(pair.reversed().to)
    } else {
        Ok(pair.to.clone())
    }
}

fn cmd_convert(
    settings: &Settings,
    json: bool,
    value: f64,
    from: &str,
    to: Option<&str>,
    swap: bool,
) -> ConvertResult<()> {
    let to = match to {
        Some(to) => to.to_string(),
        None => default_target(settings, from)?,
    };

    let mut request = ConversionRequest::new(value, from, to);
    if swap {
        request = request.swapped();
    }

    let record = ConversionRecord::from_request(&request)?;
    let formula = conversion_formula(&request.from_unit_id, &request.to_unit_id);
    info!(from = %request.from_unit_id, to = %request.to_unit_id, "converted");

    if json {
        return print_json(&json!({
            "record": record,
            "formatted": format_value(record.to_value, settings.precision),
            "formula": formula,
        }));
    }

    println!("{}", record.summary(settings.precision));
    println!("  {}", formula);
    Ok(())
}

fn cmd_units(json: bool, dimension: Option<&str>, grouped: bool) -> ConvertResult<()> {
    let dimensions = match dimension {
        Some(name) => vec![name.parse::<Dimension>()?],
        None => Dimension::ALL.to_vec(),
    };

    if json {
        let mut out = serde_json::Map::new();
        for dimension in &dimensions {
            let value = if grouped {
                json!(REGISTRY.grouped_units_for_dimension(*dimension))
            } else {
                json!(REGISTRY.units_for_dimension(*dimension))
            };
            out.insert(dimension.name().to_string(), value);
        }
        return print_json(&out);
    }

    for dimension in dimensions {
        println!("{}:", dimension.display_name());
        if grouped {
            for (group, units) in REGISTRY.grouped_units_for_dimension(dimension) {
                if units.is_empty() {
                    continue;
                }
                println!("  {}:", group.display_name());
                for unit in units {
                    println!("    {:<22} {}", unit.id, unit.label());
                }
            }
        } else {
            for unit in REGISTRY.units_for_dimension(dimension) {
                println!("  {:<22} {}", unit.id, unit.label());
            }
        }
    }
    Ok(())
}

fn cmd_dimension(json: bool, unit: &str) -> ConvertResult<()> {
    let dimension = unit_dimension(unit);

    if json {
        return print_json(&json!({ "unit": unit, "dimension": dimension }));
    }

    match dimension {
        Some(d) => println!("{}", d),
        None => println!("Unknown unit: {}", unit),
    }
    Ok(())
}

fn cmd_compatible(json: bool, a: &str, b: &str) -> ConvertResult<()> {
    let compatible = are_units_compatible(a, b);

    if json {
        return print_json(&json!({ "from": a, "to": b, "compatible": compatible }));
    }

    println!("{}", if compatible { "compatible" } else { "incompatible" });
    Ok(())
}

fn cmd_formula(json: bool, from: &str, to: &str) -> ConvertResult<()> {
    let formula = conversion_formula(from, to);

    if json {
        return print_json(&json!({ "from": from, "to": to, "formula": formula }));
    }

    println!("{}", formula);
    Ok(())
}

fn cmd_scale(settings: &Settings, json: bool, from: &str, to: &str) -> ConvertResult<()> {
    let scale = relative_scale(from, to);

    if json {
        return print_json(&json!({ "from": from, "to": to, "scale": scale }));
    }

    println!(
        "1 {} = {} {}",
        REGISTRY.unit_name(from),
        format_value(scale, settings.precision),
        REGISTRY.unit_name(to)
    );
    Ok(())
}

fn cmd_compare(settings: &Settings, json: bool, value: f64, from: &str) -> ConvertResult<()> {
    let rows = comparison_table(value, from, settings.precision)?;

    if json {
        return print_json(&rows);
    }

    println!("{} {} is:", format_value(value, settings.precision), REGISTRY.unit_name(from));
    for row in rows {
        println!("  {:>24} {}", row.formatted, row.name);
    }
    Ok(())
}

fn cmd_multi(settings: &Settings, json: bool, value: f64, from: &str, to: &[String]) -> ConvertResult<()> {
    if REGISTRY.get(from).is_none() {
        return Err(ConvertError::unknown_unit(from));
    }
    let results = convert_many(value, from, to);

    if json {
        return print_json(&results);
    }

    for result in results {
        match (result.value, REGISTRY.get(&result.unit_id)) {
            (Some(v), Some(unit)) => println!("  {}", format_quantity(v, unit, settings.precision)),
            _ => println!("  {:<22} n/a", result.unit_id),
        }
    }
    Ok(())
}

fn cmd_suggest(settings: &Settings, json: bool, meters: f64) -> ConvertResult<()> {
    let unit = suggest_unit(meters);
    let value = convert_core::convert(meters, "meter", unit)?;

    if json {
        return print_json(&json!({ "meters": meters, "unit": unit, "value": value }));
    }

    match REGISTRY.get(unit) {
        Some(u) => println!("{}", format_quantity(value, u, settings.precision)),
        None => println!("{}", unit),
    }
    Ok(())
}

fn cmd_quick(settings: &Settings, json: bool) -> ConvertResult<()> {
    let results = quick_conversions(settings.precision)?;

    if json {
        return print_json(&results);
    }

    for r in results {
        println!(
            "  {} {} = {} {}",
            format_value(r.pair.value, 0),
            r.pair.from_label,
            r.formatted,
            r.pair.to_label
        );
    }
    Ok(())
}

fn cmd_config(settings: &Settings, json: bool, write: Option<&Path>) -> ConvertResult<()> {
    if let Some(path) = write {
        settings.save(path)?;
        info!(path = %path.display(), "settings written");
        if !json {
            println!("Settings written to {}", path.display());
            return Ok(());
        }
    }

    if json {
        return print_json(settings);
    }

    println!("precision: {}", settings.precision);
    for dimension in Dimension::ALL {
        let pair = settings.pair(dimension);
        println!("{:<10} {} -> {}", format!("{}:", dimension.name()), pair.from, pair.to);
    }
    Ok(())
}
