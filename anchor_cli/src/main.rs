//! # Anchorage CLI Application
//!
//! Terminal front end for the anchor capacity check. Parameters come from
//! flags (defaults reproduce the reference design), from interactive
//! prompts, or from a JSON file holding an `AnchorConfiguration`.
//!
//! ```text
//! anchor_cli --anchor-diameter 30 --hole-diameter 32 --length-m 4 --design-load 100
//! anchor_cli --input anchor.json --json
//! RUST_LOG=debug anchor_cli --interactive
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};

use anchor_core::calculations::{calculate, AnchorConfiguration, CapacityResult};
use anchor_core::materials::{GroutMethod, SoilType};
use anchor_core::report::render_summary;
use anchor_core::units::{Meters, Millimeters};
use anchor_core::{CalcError, CalcResult};

#[derive(Parser, Debug)]
#[command(name = "anchor_cli", version, about = "Grouted ground anchor capacity check (Bustamante & Doix)")]
struct Cli {
    /// Steel bar diameter (mm)
    #[arg(long, default_value_t = 20.0)]
    anchor_diameter: f64,

    /// Drilled hole diameter (mm)
    #[arg(long, default_value_t = 22.0)]
    hole_diameter: f64,

    /// Bonded length (m)
    #[arg(long, default_value_t = 3.0)]
    length_m: f64,

    /// Steel yield strength (MPa)
    #[arg(long, default_value_t = 275.0)]
    steel_yield: f64,

    /// Grout compressive strength (MPa)
    #[arg(long, default_value_t = 55.0)]
    grout_strength: f64,

    /// Grout injection pressure (MPa)
    #[arg(long, default_value_t = 55.0)]
    pressure: f64,

    /// Injection method: 0 / multiple-high-pressure, 1 / single-low-pressure
    #[arg(long, default_value = "1")]
    grout_method: String,

    /// Soil code 0-12 or name (gravel ... fractured-rock)
    #[arg(long, default_value = "8")]
    soil: String,

    /// Design load (kN); 0 checks capacity only
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    design_load: f64,

    /// Read the anchor configuration from a JSON file instead of flags
    #[arg(short, long, conflicts_with = "interactive")]
    input: Option<PathBuf>,

    /// Prompt for each parameter, flags supply the defaults
    #[arg(long)]
    interactive: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log intermediate values (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_text(prompt: &str, default: &str) -> String {
    prompt_line(&format!("{} [{}]: ", prompt, default)).unwrap_or_else(|| default.to_string())
}

/// Ask for every parameter on stdin, using the flag values as defaults.
fn prompt_for_parameters(cli: &Cli) -> Cli {
    println!("Soil codes:");
    for soil in SoilType::ALL {
        println!("  {:>2} - {}", soil.code(), soil);
    }
    println!("Grout methods:");
    for method in GroutMethod::ALL {
        println!("  {:>2} - {}", method.code(), method);
    }
    println!();

    Cli {
        anchor_diameter: prompt_f64("Anchor diameter (mm)", cli.anchor_diameter),
        hole_diameter: prompt_f64("Hole diameter (mm)", cli.hole_diameter),
        length_m: prompt_f64("Bonded length (m)", cli.length_m),
        steel_yield: prompt_f64("Steel yield strength (MPa)", cli.steel_yield),
        grout_strength: prompt_f64("Grout strength (MPa)", cli.grout_strength),
        pressure: prompt_f64("Injection pressure (MPa)", cli.pressure),
        grout_method: prompt_text("Grout method", &cli.grout_method),
        soil: prompt_text("Soil", &cli.soil),
        design_load: prompt_f64("Design load (kN)", cli.design_load),
        input: None,
        interactive: false,
        json: cli.json,
        verbose: cli.verbose,
    }
}

fn load_configuration(path: &Path) -> CalcResult<AnchorConfiguration> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| CalcError::file_error("read", &display, e.to_string()))?;
    let config: AnchorConfiguration = serde_json::from_str(&text)?;
    config.validate()?;
    info!("loaded anchor configuration from {}", display);
    Ok(config)
}

fn configuration_from_flags(cli: &Cli) -> CalcResult<AnchorConfiguration> {
    let length: Millimeters = Meters(cli.length_m).into();
    let mut config = AnchorConfiguration::new(
        cli.anchor_diameter,
        cli.hole_diameter,
        length.value(),
        cli.steel_yield,
    )?;
    config.set_soil(SoilType::from_str_flexible(&cli.soil)?);
    config.set_grout(
        Some(cli.grout_strength),
        Some(cli.pressure),
        Some(GroutMethod::from_str_flexible(&cli.grout_method)?),
    )?;
    config.set_design_load(cli.design_load)?;
    Ok(config)
}

fn build_configuration(cli: &Cli) -> CalcResult<AnchorConfiguration> {
    if let Some(path) = &cli.input {
        return load_configuration(path);
    }
    if cli.interactive {
        return configuration_from_flags(&prompt_for_parameters(cli));
    }
    configuration_from_flags(cli)
}

fn run(cli: &Cli) -> CalcResult<(AnchorConfiguration, CapacityResult)> {
    let config = build_configuration(cli)?;
    debug!("configuration: {:?}", config);
    let result = calculate(&config)?;
    Ok((config, result))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok((config, result)) => {
            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", render_summary(&config, &result));
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_core::Verdict;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["anchor_cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_build_reference_design() {
        let cli = parse(&[]);
        let config = build_configuration(&cli).unwrap();
        assert_eq!(config.anchor_diameter_mm, 20.0);
        assert_eq!(config.hole_diameter_mm, 22.0);
        assert_eq!(config.length_mm, 3000.0);
        assert_eq!(config.soil_type, Some(SoilType::Clay));
        assert_eq!(config.grout_method, Some(GroutMethod::SingleLowPressure));
        assert_eq!(config.grout_strength_mpa, Some(55.0));
        assert_eq!(config.injection_pressure_mpa, Some(55.0));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--anchor-diameter", "30",
            "--hole-diameter", "45",
            "--length-m", "3",
            "--grout-strength", "40",
            "--pressure", "0.5",
            "--soil", "silt",
            "--design-load", "20",
        ]);
        let (_, result) = run(&cli).unwrap();
        assert_eq!(result.verdict, Verdict::Verified);
    }

    #[test]
    fn test_invalid_soil_reported() {
        let cli = parse(&["--soil", "13"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SOIL_TYPE");
    }

    #[test]
    fn test_invalid_method_reported() {
        let cli = parse(&["--grout-method", "2"]);
        assert_eq!(run(&cli).unwrap_err().error_code(), "INVALID_GROUT_METHOD");
    }

    #[test]
    fn test_negative_load_reaches_validation() {
        let cli = parse(&["--design-load", "-5"]);
        assert_eq!(run(&cli).unwrap_err().error_code(), "INVALID_LOAD");
    }

    #[test]
    fn test_json_input_file() {
        let config = AnchorConfiguration::new(30.0, 45.0, 3000.0, 275.0)
            .unwrap()
            .with_soil(SoilType::Silt)
            .with_grout(Some(40.0), Some(0.5), Some(GroutMethod::SingleLowPressure))
            .unwrap();
        let path = std::env::temp_dir().join(format!("anchor_cli_test_{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let cli = parse(&["--input", path.to_str().unwrap()]);
        let loaded = build_configuration(&cli).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_input_file() {
        let cli = parse(&["--input", "/nonexistent/anchor.json"]);
        assert_eq!(build_configuration(&cli).unwrap_err().error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_input_conflicts_with_interactive() {
        assert!(Cli::try_parse_from(["anchor_cli", "--input", "a.json", "--interactive"]).is_err());
    }
}
