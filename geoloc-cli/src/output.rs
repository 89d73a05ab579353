use anyhow::{Context, Result};
use geoloc_core::Outcome;
use std::io::Write;

const SEPARATOR: &str = "****************";

pub fn write_human<W: Write>(out: &mut W, outcomes: &[Outcome]) -> Result<()> {
    for outcome in outcomes {
        match outcome {
            Outcome::Resolved(loc) => {
                let weather = serde_json::to_string(&loc.weather)
                    .context("Failed to serialize weather snapshot")?;
                writeln!(out, "Place: {}, {}", loc.place, loc.country)?;
                writeln!(out, "Latitude: {}, Longitude: {}", loc.latitude, loc.longitude)?;
                writeln!(out, "Weather: {weather}")?;
            }
            Outcome::Rejected(err) => writeln!(out, "{err}")?,
            Outcome::Failed(err) => writeln!(out, "Unexpected error: {err:#}")?,
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, outcomes: &[Outcome]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcomes).context("Failed to serialize outcomes")?;
    writeln!(out)?;
    Ok(())
}
