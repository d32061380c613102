use crate::lookups::{calculate_paramgroup, sample_media, station_type};
use crate::models::{CanonicalRow, Schema, Value};
use crate::processors::caster::strip_wqx_suffix;
use crate::processors::unit_normalizer::normalize_unit;
use crate::utils::constants::{
    FIELD_DATA_SOURCE, FIELD_PARAM, FIELD_PARAM_GROUP, FIELD_RESULT_VALUE, FIELD_SAMPLE_MEDIA,
    FIELD_STATION_ID, FIELD_STATION_TYPE, FIELD_UNIT,
};

/// Canonical identifier and station type for a station row.
pub fn normalize_station(mut row: CanonicalRow) -> CanonicalRow {
    strip_station_id(&mut row);

    let mapped = row
        .text(FIELD_STATION_TYPE)
        .and_then(station_type)
        .map(|t| t.as_str());
    if let Some(mapped) = mapped {
        row.set(FIELD_STATION_TYPE, mapped);
    }

    row
}

/// Canonical sample media, identifier, chemical name, unit, amount and
/// parameter group for a result row.
///
/// `datasource` fills `DataSource` when the row does not carry one.
pub fn normalize_sample(mut row: CanonicalRow, datasource: Option<&str>) -> CanonicalRow {
    let media = row.text(FIELD_SAMPLE_MEDIA).and_then(sample_media);
    if let Some(media) = media {
        row.set(FIELD_SAMPLE_MEDIA, media);
    }

    strip_station_id(&mut row);

    if let Some(datasource) = datasource {
        if row.get(FIELD_DATA_SOURCE).map_or(true, Value::is_null) {
            row.set(FIELD_DATA_SOURCE, datasource);
        }
    }

    if row.text(FIELD_PARAM).is_none() {
        return row;
    }

    let normalized = normalize_unit(
        row.text(FIELD_PARAM),
        row.text(FIELD_UNIT),
        row.number(FIELD_RESULT_VALUE),
    );

    if let Some(group) = normalized.chemical.as_deref().and_then(calculate_paramgroup) {
        row.set(FIELD_PARAM_GROUP, group.as_str());
    }

    row.set(FIELD_PARAM, normalized.chemical);
    row.set(FIELD_UNIT, normalized.unit);
    row.set(FIELD_RESULT_VALUE, normalized.amount);

    row
}

/// Exactly the fields of `schema`, in schema order; absent fields are null.
pub fn reorder_filter(row: &CanonicalRow, schema: &Schema) -> CanonicalRow {
    schema.names().fold(CanonicalRow::new(), |shaped, name| {
        let value = row.get(name).cloned().unwrap_or_default();
        shaped.with(name, value)
    })
}

fn strip_station_id(row: &mut CanonicalRow) {
    let stripped = row.text(FIELD_STATION_ID).map(strip_wqx_suffix);
    if let Some(stripped) = stripped {
        row.set(FIELD_STATION_ID, stripped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::{RESULT_SCHEMA, STATION_SCHEMA};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_station() {
        let row = CanonicalRow::empty(&STATION_SCHEMA)
            .with(FIELD_STATION_ID, "UTAHDWQ_WQX-4990000")
            .with(FIELD_STATION_TYPE, "River/Stream");

        let row = normalize_station(row);

        assert_eq!(row.text(FIELD_STATION_ID), Some("UTAHDWQ-4990000"));
        assert_eq!(row.text(FIELD_STATION_TYPE), Some("Stream"));
    }

    #[test]
    fn test_unmapped_station_type_passes_through() {
        let row = CanonicalRow::empty(&STATION_SCHEMA).with(FIELD_STATION_TYPE, "Moon Base");
        let row = normalize_station(row);
        assert_eq!(row.text(FIELD_STATION_TYPE), Some("Moon Base"));
    }

    #[test]
    fn test_normalize_sample() {
        let row = CanonicalRow::empty(&RESULT_SCHEMA)
            .with(FIELD_STATION_ID, "ABC_WQX-abc")
            .with(FIELD_SAMPLE_MEDIA, "WL")
            .with(FIELD_PARAM, "Bicarbonate as CaCO3")
            .with(FIELD_UNIT, "mg/l as CaCO3")
            .with(FIELD_RESULT_VALUE, 100.0);

        let row = normalize_sample(row, Some("WQP"));

        assert_eq!(row.text(FIELD_STATION_ID), Some("ABC-abc"));
        assert_eq!(row.text(FIELD_SAMPLE_MEDIA), Some("Groundwater"));
        assert_eq!(row.text(FIELD_PARAM), Some("bicarbonate"));
        assert_eq!(row.text(FIELD_UNIT), Some("mg/l"));
        assert!((row.number(FIELD_RESULT_VALUE).unwrap() - 122.0).abs() < 1e-9);
        assert_eq!(
            row.text(FIELD_PARAM_GROUP),
            Some("inorganics, major, non-metals")
        );
        assert_eq!(row.text(FIELD_DATA_SOURCE), Some("WQP"));
    }

    #[test]
    fn test_existing_datasource_is_kept() {
        let row = CanonicalRow::empty(&RESULT_SCHEMA).with(FIELD_DATA_SOURCE, "UGS");
        let row = normalize_sample(row, Some("WQP"));
        assert_eq!(row.text(FIELD_DATA_SOURCE), Some("UGS"));
    }

    #[test]
    fn test_null_chemical_is_a_no_op() {
        let row = CanonicalRow::empty(&RESULT_SCHEMA)
            .with(FIELD_UNIT, "ug/l")
            .with(FIELD_RESULT_VALUE, 5.0);

        let normalized = normalize_sample(row.clone(), None);
        assert_eq!(normalized, row);
    }

    #[test]
    fn test_reorder_filter() {
        let row = CanonicalRow::new()
            .with("Extra", "dropped")
            .with(FIELD_STATION_ID, "S1")
            .with("OrgId", "ORG");

        let shaped = reorder_filter(&row, &STATION_SCHEMA);

        let names: Vec<_> = shaped.names().collect();
        let expected: Vec<_> = STATION_SCHEMA.names().collect();
        assert_eq!(names, expected);
        assert_eq!(shaped.text(FIELD_STATION_ID), Some("S1"));
        assert_eq!(shaped.text("OrgId"), Some("ORG"));
        assert_eq!(shaped.get("StationName"), Some(&Value::Null));
    }
}
