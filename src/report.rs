//! Rendering of conversion results

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

use crate::convert::Conversion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub fn render(conversion: &Conversion, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(Table(conversion).to_string()),
        OutputFormat::Json => to_json(conversion),
        OutputFormat::Csv => Ok(to_csv(conversion)),
    }
}

pub fn to_json(conversion: &Conversion) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(conversion)
}

fn headers(conversion: &Conversion) -> [String; 3] {
    [
        format!(
            "{} ({})",
            conversion.direction.source(),
            conversion.value_label()
        ),
        format!("wavelength ({})", conversion.wavelength_unit),
        format!(
            "{} ({})",
            conversion.direction.target(),
            conversion.return_label()
        ),
    ]
}

pub fn to_csv(conversion: &Conversion) -> String {
    let mut out = headers(conversion).join(",");
    out.push('\n');
    for row in &conversion.rows {
        out.push_str(&format!(
            "{},{},{:e}\n",
            row.value, row.wavelength, row.result
        ));
    }
    out
}

/// Aligned plain-text table, results in `%.4e` notation
pub struct Table<'a>(pub &'a Conversion);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [from, wavelength, to] = headers(self.0);

        let cells: Vec<[String; 4]> = self
            .0
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                [
                    i.to_string(),
                    format!("{:.4e}", row.value),
                    row.wavelength.to_string(),
                    format!("{:.4e}", row.result),
                ]
            })
            .collect();

        let header = ["#".to_string(), from, wavelength, to];
        let mut widths = header.clone().map(|h| h.chars().count());
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for line in std::iter::once(&header).chain(&cells) {
            let rendered: Vec<String> = line
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = width))
                .collect();
            writeln!(f, "{}", rendered.join("  ").trim_end())?;
        }

        Ok(())
    }
}

pub fn explanation() -> &'static str {
    r#"Definitions
  irradiance (I)   power per unit area received by a surface, typically W/m^2
  photon flux (E)  photons hitting a surface per unit area per time, typically
                   moles of photons per square metre per second (mol/m^2/s)

Conversion equations
  photon flux -> irradiance   I = E * h * c * N_A / lambda
  irradiance -> photon flux   E = I * lambda / (h * c * N_A)

where
  lambda  wavelength
  h       Planck constant, 6.62607015e-34 J s
  c       speed of light, 299792458 m/s
  N_A     Avogadro constant, 6.02214076e23 1/mol

Spectral values (e.g. uE/um) give results per nm (e.g. W/m^2/nm).
Photon flux -> irradiance is spectral unless --spectral false is given.
"#
}
