//! Irradiance / photon flux calculator.
//!
//! ```sh
//! photonflux convert --direction irr2flux --values "100, 200" --wavelengths 550 --return-units uE
//! photonflux run job.json
//! photonflux units
//! photonflux explain
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use photonflux::config::{Config, ConfigError, ValueSource};
use photonflux::convert::{ConvertError, Direction, Request};
use photonflux::input::parse_list;
use photonflux::report::{self, OutputFormat};
use photonflux::units::{IrradianceUnit, PhotonFluxUnit, WavelengthUnit};

#[derive(Parser)]
#[command(name = "photonflux")]
#[command(about = "Convert between irradiance and photon flux")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert values given on the command line.
    Convert {
        /// irr2flux or flux2irr.
        #[arg(short, long, default_value = "irr2flux")]
        direction: Direction,
        /// Comma-separated values to convert.
        #[arg(short, long, required_unless_present = "values_file")]
        values: Option<String>,
        /// Read values from a .tif, .csv or .txt file instead.
        #[arg(long, conflicts_with = "values")]
        values_file: Option<PathBuf>,
        /// Comma-separated wavelengths, or a single one for all values.
        #[arg(short, long)]
        wavelengths: String,
        /// Units of the input values (default: W/m^2 or E).
        #[arg(long)]
        value_units: Option<String>,
        #[arg(long, default_value = "nm")]
        wavelength_units: String,
        /// Units of the results (default: E or W/m^2).
        #[arg(short, long)]
        return_units: Option<String>,
        /// Values per wavelength unit, results per nm (default: on for flux2irr).
        #[arg(long)]
        spectral: Option<bool>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Run a JSON job file.
    Run {
        config: PathBuf,
        /// Output format (overrides the job file setting).
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the accepted units.
    Units,
    /// Show the definitions and conversion equations.
    Explain,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    print!("{}", run(Cli::parse())?);

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Commands::Convert {
            direction,
            values,
            values_file,
            wavelengths,
            value_units,
            wavelength_units,
            return_units,
            spectral,
            format,
        } => {
            let values = match (values, values_file) {
                (_, Some(path)) => {
                    let context = format!("Failed to read {}", path.display());
                    ValueSource::File(path)
                        .load()
                        .map_err(|e| config_error(e, context))?
                }
                (Some(text), None) => parse_list(&text).map_err(|e| with_hint(e.into()))?,
                (None, None) => Vec::new(),
            };
            let wavelengths = parse_list(&wavelengths).map_err(|e| with_hint(e.into()))?;

            let value_units =
                value_units.unwrap_or_else(|| direction.default_source_unit().to_string());
            let return_units =
                return_units.unwrap_or_else(|| direction.default_target_unit().to_string());

            let request = Request::new(direction, values, wavelengths)
                .with_units(&value_units, &wavelength_units, &return_units)
                .with_spectral(spectral.unwrap_or_else(|| direction.spectral_by_default()));
            render_conversion(&request, format)
        }
        Commands::Run { config, format } => {
            let context = format!("Failed to load {}", config.display());
            let job = Config::from_file(&config).map_err(|e| config_error(e, context.clone()))?;
            info!(config = %config.display(), "running job");

            let format = format.unwrap_or(job.output());
            let request = job.into_request().map_err(|e| config_error(e, context))?;
            render_conversion(&request, format)
        }
        Commands::Units => Ok(format!(
            "irradiance:  {}\n             any of n, u, m, k before W; m^2, cm^2 or mm^2 area\n\
             photon flux: {}\n             1 E = 1 mol/m^2/s; <prefix>mol/<area>/s also accepted\n\
             wavelength:  {}, m\n",
            IrradianceUnit::CHOICES.join(", "),
            PhotonFluxUnit::CHOICES.join(", "),
            WavelengthUnit::CHOICES.join(", "),
        )),
        Commands::Explain => Ok(report::explanation().to_string()),
    }
}

/// Puts the user-facing hint on top of the error chain.
fn with_hint(err: ConvertError) -> anyhow::Error {
    let hint = err.hint();
    anyhow::Error::new(err).context(hint)
}

fn config_error(err: ConfigError, context: String) -> anyhow::Error {
    let hint = err.hint();
    let err = anyhow::Error::new(err).context(context);
    match hint {
        Some(hint) => err.context(hint),
        None => err,
    }
}

fn render_conversion(request: &Request, format: OutputFormat) -> anyhow::Result<String> {
    let conversion = request.convert().map_err(with_hint)?;

    let mut out = String::new();
    if format == OutputFormat::Table {
        out.push_str(&format!(
            "Converted {} values:\n",
            conversion.direction.target()
        ));
    }
    out.push_str(&report::render(&conversion, format)?);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use photonflux::convert::{NUMERIC_HINT, UNIT_HINT};
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use tempfile::tempdir;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("photonflux").chain(args.iter().copied()))
            .unwrap();
        run(cli)
    }

    fn write(dir: &Path, name: &str, contents: &str) -> String {
        let file_path = dir.join(name);
        let mut file = File::create(&file_path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file_path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_convert_table() {
        let out = run_args(&["convert", "-v", "100, 200", "-w", "550", "-r", "uE"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Converted photon flux values:");
        assert!(lines[1].ends_with("photon flux (uE)"));
        assert!(lines[2].ends_with("4.5976e2"), "{}", lines[2]);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_unit_errors_get_unit_hint() {
        let err = run_args(&["convert", "-v", "1", "-w", "550", "--value-units", "furlong"])
            .unwrap_err();
        assert_eq!(err.to_string(), UNIT_HINT);
        assert!(format!("{err:#}").contains("furlong"));
    }

    #[test]
    fn test_number_errors_get_numeric_hint() {
        let err = run_args(&["convert", "-v", "1, x", "-w", "550"]).unwrap_err();
        assert_eq!(err.to_string(), NUMERIC_HINT);

        let err = run_args(&["convert", "-v", "1, 2, 3", "-w", "400, 500"]).unwrap_err();
        assert_eq!(err.to_string(), NUMERIC_HINT);
    }

    #[test]
    fn test_job_file_unit_error_gets_unit_hint() {
        let dir = tempdir().unwrap();
        let job = write(
            dir.path(),
            "job.json",
            r#"{ "values": [1.0], "wavelengths": [500], "value_units": "furlong" }"#,
        );

        let err = run_args(&["run", &job]).unwrap_err();
        assert_eq!(err.to_string(), UNIT_HINT);
        assert!(format!("{err:#}").contains("Failed to load"));
    }

    #[test]
    fn test_format_flag_overrides_job_file() {
        let dir = tempdir().unwrap();
        let job = write(
            dir.path(),
            "job.json",
            r#"{ "values": "10, 20", "wavelengths": "550", "return_units": "uE", "output": "csv" }"#,
        );

        let csv = run_args(&["run", &job]).unwrap();
        assert!(csv.starts_with("irradiance (W/m^2),wavelength (nm),photon flux (uE)\n"));

        let json = run_args(&["run", &job, "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_values_file() {
        let dir = tempdir().unwrap();
        let values = write(dir.path(), "values.csv", "irradiance\n10\n20\n30\n");

        let out = run_args(&[
            "convert",
            "--values-file",
            &values,
            "-w",
            "550",
            "-r",
            "uE",
            "-f",
            "csv",
        ])
        .unwrap();
        assert_eq!(out.lines().count(), 4);

        let bad = write(dir.path(), "bad.csv", "1\nnope\n");
        let err = run_args(&["convert", "--values-file", &bad, "-w", "550"]).unwrap_err();
        assert_eq!(err.to_string(), NUMERIC_HINT);
    }

    #[test]
    fn test_spectral_flag() {
        let per_nm = run_args(&[
            "convert", "-d", "flux2irr", "-v", "1", "-w", "0.4", "--wavelength-units", "um",
            "-f", "csv",
        ])
        .unwrap();
        assert!(per_nm.starts_with("photon flux (E/um),wavelength (um),irradiance (W/m^2/nm)"));

        let band = run_args(&[
            "convert", "-d", "flux2irr", "-v", "1", "-w", "0.4", "--wavelength-units", "um",
            "--spectral", "false", "-f", "csv",
        ])
        .unwrap();
        assert!(band.starts_with("photon flux (E),wavelength (um),irradiance (W/m^2)"));
    }
}
