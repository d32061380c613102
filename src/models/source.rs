use crate::error::{ProcessingError, Result};
use crate::models::schema::{RecordKind, RESULT_SCHEMA, STATION_SCHEMA};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Column-header to canonical-field mapping for one data source.
///
/// Flat-file exports name their columns differently; a mapping renames the
/// headers a source uses to the canonical field names before casting.
/// Headers without an entry are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMapping {
    /// Short name used in output file names.
    pub name: String,
    /// Label written into the `DataSource` field.
    pub data_source: String,
    #[serde(default)]
    pub stations: HashMap<String, String>,
    #[serde(default)]
    pub results: HashMap<String, String>,
}

const WQP_STATIONS: &[(&str, &str)] = &[
    ("OrganizationIdentifier", "OrgId"),
    ("OrganizationFormalName", "OrgName"),
    ("MonitoringLocationIdentifier", "StationId"),
    ("MonitoringLocationName", "StationName"),
    ("MonitoringLocationTypeName", "StationType"),
    ("MonitoringLocationDescriptionText", "StationComment"),
    ("LatitudeMeasure", "Lat_Y"),
    ("LongitudeMeasure", "Lon_X"),
    ("HorizontalAccuracyMeasure/MeasureValue", "HorAcc"),
    ("HorizontalAccuracyMeasure/MeasureUnitCode", "HorAccUnit"),
    ("HorizontalCollectionMethodName", "HorCollMeth"),
    ("HorizontalCoordinateReferenceSystemDatumName", "HorRef"),
    ("VerticalMeasure/MeasureValue", "Elev"),
    ("VerticalMeasure/MeasureUnitCode", "ElevUnit"),
    ("VerticalAccuracyMeasure/MeasureValue", "ElevAcc"),
    ("VerticalAccuracyMeasure/MeasureUnitCode", "ElevAccUnit"),
    ("VerticalCollectionMethodName", "ElevMeth"),
    ("VerticalCoordinateReferenceSystemDatumName", "ElevRef"),
    ("StateCode", "StateCode"),
    ("CountyCode", "CountyCode"),
    ("AquiferName", "Aquifer"),
    ("FormationTypeText", "FmType"),
    ("AquiferTypeName", "AquiferType"),
    ("ConstructionDateText", "ConstDate"),
    ("WellDepthMeasure/MeasureValue", "Depth"),
    ("WellDepthMeasure/MeasureUnitCode", "DepthUnit"),
    ("WellHoleDepthMeasure/MeasureValue", "HoleDepth"),
    ("WellHoleDepthMeasure/MeasureUnitCode", "HoleDUnit"),
];

const WQP_RESULTS: &[(&str, &str)] = &[
    ("OrganizationIdentifier", "OrgId"),
    ("OrganizationFormalName", "OrgName"),
    ("ActivityIdentifier", "SampleId"),
    ("ActivityTypeCode", "SampType"),
    ("ActivityMediaSubdivisionName", "SampMedia"),
    ("ActivityStartDate", "SampleDate"),
    ("ActivityStartTime/Time", "SampleTime"),
    ("ActivityDepthHeightMeasure/MeasureValue", "SampDepth"),
    ("ActivityDepthHeightMeasure/MeasureUnitCode", "SampDepthU"),
    ("ActivityDepthAltitudeReferencePointText", "SampDepthRef"),
    ("ProjectIdentifier", "ProjectId"),
    ("MonitoringLocationIdentifier", "StationId"),
    ("ActivityCommentText", "SampComment"),
    ("SampleCollectionMethod/MethodIdentifier", "SampMeth"),
    ("SampleCollectionMethod/MethodName", "SampMethName"),
    ("SampleCollectionEquipmentName", "SampEquip"),
    ("ResultDetectionConditionText", "DetectCond"),
    ("CharacteristicName", "Param"),
    ("ResultSampleFractionText", "SampFrac"),
    ("ResultMeasureValue", "ResultValue"),
    ("ResultMeasure/MeasureUnitCode", "Unit"),
    ("MeasureQualifierCode", "QualCode"),
    ("ResultStatusIdentifier", "ResultStatus"),
    ("ResultValueTypeName", "AutoQual"),
    ("USGSPCode", "USGSPCode"),
    ("ResultCommentText", "ResultComment"),
    ("ResultAnalyticalMethod/MethodIdentifier", "AnalytMethId"),
    ("ResultAnalyticalMethod/MethodName", "AnalytMeth"),
    ("MethodDescriptionText", "MethodDescript"),
    ("LaboratoryName", "LabName"),
    ("AnalysisStartDate", "AnalysisDate"),
    ("ResultLaboratoryCommentText", "LabComments"),
    ("DetectionQuantitationLimitTypeName", "LimitType"),
    ("DetectionQuantitationLimitMeasure/MeasureValue", "MDL"),
    ("DetectionQuantitationLimitMeasure/MeasureUnitCode", "MDLUnit"),
];

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

impl SourceMapping {
    /// Built-in mapping by name.
    pub fn builtin(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "wqp" => Ok(Self {
                name: "wqp".to_string(),
                data_source: "WQP".to_string(),
                stations: to_map(WQP_STATIONS),
                results: to_map(WQP_RESULTS),
            }),
            other => Err(ProcessingError::UnknownSource(other.to_string())),
        }
    }

    /// Load a mapping from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mapping: Self = serde_json::from_reader(reader)?;

        if mapping.name.trim().is_empty() {
            return Err(ProcessingError::Config(format!(
                "Mapping {} has an empty name",
                path.display()
            )));
        }

        mapping.warn_unknown_targets();
        debug!(
            "Loaded mapping '{}' ({} station, {} result columns)",
            mapping.name,
            mapping.stations.len(),
            mapping.results.len()
        );

        Ok(mapping)
    }

    /// A built-in name, or a path to a JSON mapping file.
    pub fn resolve(source: &str) -> Result<Self> {
        let path = Path::new(source);
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_file(path)
        } else {
            Self::builtin(source)
        }
    }

    pub fn columns(&self, kind: RecordKind) -> &HashMap<String, String> {
        match kind {
            RecordKind::Station => &self.stations,
            RecordKind::Result => &self.results,
        }
    }

    /// Canonical field for a source header, if mapped.
    pub fn canonical_name(&self, kind: RecordKind, header: &str) -> Option<&str> {
        self.columns(kind).get(header.trim()).map(String::as_str)
    }

    fn warn_unknown_targets(&self) {
        for (kind, schema) in [
            (RecordKind::Station, &STATION_SCHEMA),
            (RecordKind::Result, &RESULT_SCHEMA),
        ] {
            for target in self.columns(kind).values() {
                if !schema.contains(target) {
                    warn!("Mapping '{}' targets unknown {} field {}", self.name, kind, target);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_targets_exist() {
        let mapping = SourceMapping::builtin("WQP").unwrap();

        assert_eq!(mapping.data_source, "WQP");
        for target in mapping.stations.values() {
            assert!(STATION_SCHEMA.contains(target), "{}", target);
        }
        for target in mapping.results.values() {
            assert!(RESULT_SCHEMA.contains(target), "{}", target);
        }
        assert_eq!(
            mapping.canonical_name(RecordKind::Result, "CharacteristicName"),
            Some("Param")
        );
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(matches!(
            SourceMapping::builtin("nope"),
            Err(ProcessingError::UnknownSource(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(
            file,
            r#"{{"name": "ugs", "data_source": "UGS", "results": {{"Analyte": "Param", "Result": "ResultValue"}}}}"#
        )
        .unwrap();

        let mapping = SourceMapping::resolve(file.path().to_str().unwrap()).unwrap();

        assert_eq!(mapping.name, "ugs");
        assert!(mapping.stations.is_empty());
        assert_eq!(
            mapping.canonical_name(RecordKind::Result, "Analyte"),
            Some("Param")
        );
    }

    #[test]
    fn test_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        assert!(matches!(
            SourceMapping::from_json_file(file.path()),
            Err(ProcessingError::Json(_))
        ));
    }
}
