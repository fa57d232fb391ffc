//! CSV export of measured spots

use std::io::Write;

use tracing::debug;
use crate::tlc_engine::common::error::Result;
use crate::tlc_engine::geometry::{Geometry, Spot};

#[cfg(test)]
mod tests;

fn format_rf(rf: Option<f64>, decimals: usize) -> String {
    rf.map(|v| format!("{:.*}", decimals, v)).unwrap_or_default()
}

fn spot_fields(number: usize, spot: &Spot, decimals: usize) -> [String; 4] {
    [
        number.to_string(),
        format_rf(spot.rf, decimals),
        spot.x.to_string(),
        spot.y.to_string(),
    ]
}

/// Writes one row per spot. Flat geometry uses `Spot,Rf,X,Y`; partitioned geometry
/// prepends a 1-based `Plate` column and numbers spots per plate.
pub fn write_csv<W: Write>(geometry: &Geometry, decimals: usize, output: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(output);

    match geometry {
        Geometry::Flat(state) => {
            wtr.write_record(["Spot", "Rf", "X", "Y"])?;
            for (i, spot) in state.spots.iter().enumerate() {
                wtr.write_record(spot_fields(i + 1, spot, decimals))?;
            }
        }
        Geometry::Partitioned(set) => {
            wtr.write_record(["Plate", "Spot", "Rf", "X", "Y"])?;
            for (p, plate) in set.plates().iter().enumerate() {
                for (i, spot) in plate.state.spots.iter().enumerate() {
                    let [number, rf, x, y] = spot_fields(i + 1, spot, decimals);
                    wtr.write_record([(p + 1).to_string(), number, rf, x, y])?;
                }
            }
        }
    }

    wtr.flush()?;
    debug!(spots = geometry.spot_count(), "CSV written");
    Ok(())
}
