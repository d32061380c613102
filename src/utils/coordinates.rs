use crate::error::{ProcessingError, Result};

/// Convert DMS (Degrees:Minutes:Seconds) to decimal degrees
///
/// # Examples
/// ```
/// use water_chemistry_etl::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("-111:53:30").unwrap();
/// assert!((decimal - -111.891667).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: &str) -> Result<f64> {
    let parts: Vec<&str> = dms.trim().split(':').map(str::trim).collect();

    let [degrees, minutes, seconds] = *parts.as_slice() else {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Invalid DMS format: '{}'. Expected format: 'DD:MM:SS'",
            dms
        )));
    };

    let component = |text: &str, label: &str| {
        text.parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!("Invalid {} value: '{}'", label, text))
        })
    };

    let degrees = component(degrees, "degrees")?;
    let minutes = component(minutes, "minutes")?;
    let seconds = component(seconds, "seconds")?;

    for (value, label) in [(minutes, "Minutes"), (seconds, "Seconds")] {
        if !(0.0..60.0).contains(&value) {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "{} must be between 0 and 60, got: {}",
                label, value
            )));
        }
    }

    let decimal = degrees.abs() + minutes / 60.0 + seconds / 3600.0;

    // "-0:07:39" has a negative sign but zero degrees
    if dms.trim().starts_with('-') {
        Ok(-decimal)
    } else {
        Ok(decimal)
    }
}

/// Parse a coordinate in DMS or decimal form
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    if trimmed.contains(':') {
        dms_to_decimal(trimmed)
    } else {
        trimmed.parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
        })
    }
}

/// Check WGS84 bounds
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Latitude {} is outside [-90, 90]",
            latitude
        )));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Longitude {} is outside [-180, 180]",
            longitude
        )));
    }

    Ok(())
}

/// Geometry constructor for the `Shape` column, or `None` for missing or
/// out-of-range coordinates.
pub fn shape_expression(
    longitude: Option<f64>,
    latitude: Option<f64>,
    spatial_reference: u32,
) -> Option<String> {
    let (longitude, latitude) = (longitude?, latitude?);
    validate_coordinates(latitude, longitude).ok()?;

    Some(format!(
        "geometry::STGeomFromText('POINT ({} {})', {})",
        longitude, latitude, spatial_reference
    ))
}
