//! Indicator volume assembly from soil index rasters

// crate modules
use crate::error::{Error, Result};

// htools modules
use htools_pfb::{GridHeader, Pfb};
use htools_raster::Raster;

/// Stack a soil index raster into a 3D subsurface indicator volume
///
/// Simulators take the subsurface as a full 3D indicator field even when only
/// the top of the column is surveyed. The top `soil_layers` layers repeat the
/// soil raster unchanged and everything beneath is zero (the undefined
/// geology indicator).
///
/// The returned volume carries a unit-spacing zero-origin header, since a
/// soil survey has no vertical geometry of its own. Write it out with
/// [write_sa](htools_pfb::write_sa) or [write_pfb](htools_pfb::write_pfb).
///
/// ```rust
/// # use htools_clm::stack_indicator;
/// # use htools_raster::Raster;
/// let soil = Raster::from_values(2, 2, vec![3.0, 3.0, 4.0, 4.0]).unwrap();
/// let volume = stack_indicator(&soil, 5, 2).unwrap();
///
/// assert_eq!(volume.value_at(0, 0, 0), Some(0.0)); // below the survey
/// assert_eq!(volume.value_at(0, 0, 4), Some(3.0)); // surface soil
/// ```
pub fn stack_indicator(soil: &Raster, layers: usize, soil_layers: usize) -> Result<Pfb> {
    if layers == 0 {
        return Err(Error::EmptyColumn);
    }
    if soil_layers > layers {
        return Err(Error::TooManySoilLayers {
            layers,
            soil_layers,
        });
    }
    if soil.is_empty() {
        return Err(htools_raster::Error::EmptyRaster.into());
    }

    let header = GridHeader {
        nx: soil.cols as i32,
        ny: soil.rows as i32,
        nz: layers as i32,
        dx: 1.0,
        dy: 1.0,
        dz: 1.0,
        n_subgrids: 1,
        ..Default::default()
    };

    let mut values = vec![0.0; header.number_of_values()];
    for layer in (layers - soil_layers)..layers {
        let start = layer * soil.len();
        values[start..start + soil.len()].copy_from_slice(&soil.values);
    }

    Ok(Pfb { header, values })
}
