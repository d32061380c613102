/// Canonical field names touched by the normalizers
pub const FIELD_STATION_ID: &str = "StationId";
pub const FIELD_STATION_TYPE: &str = "StationType";
pub const FIELD_SAMPLE_ID: &str = "SampleId";
pub const FIELD_SAMPLE_MEDIA: &str = "SampMedia";
pub const FIELD_PARAM: &str = "Param";
pub const FIELD_PARAM_GROUP: &str = "ParamGroup";
pub const FIELD_RESULT_VALUE: &str = "ResultValue";
pub const FIELD_UNIT: &str = "Unit";
pub const FIELD_DETECT_COND: &str = "DetectCond";
pub const FIELD_DATA_SOURCE: &str = "DataSource";
pub const FIELD_LATITUDE: &str = "Lat_Y";
pub const FIELD_LONGITUDE: &str = "Lon_X";
pub const FIELD_SHAPE: &str = "Shape";

/// Organization suffix appended to station identifiers by WQX submitters
pub const WQX_SUFFIX_MARKER: &str = "_WQX-";

/// Date sanity bound for casting
pub const MIN_VALID_YEAR: i32 = 1800;

/// Charge balance parameter names and units
pub const CHARGE_BALANCE_PARAM: &str = "Charge Balance";
pub const CATION_TOTAL_PARAM: &str = "Cation Total";
pub const ANION_TOTAL_PARAM: &str = "Anions Total";
pub const PERCENT_UNIT: &str = "%";
pub const MEQ_UNIT: &str = "meq/l";

/// Processing defaults
pub const DEFAULT_BATCH_SIZE: usize = 500;
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DEFAULT_BALANCE_THRESHOLD: f64 = 10.0;
pub const DEFAULT_SPATIAL_REFERENCE: u32 = 4326;
pub const DEFAULT_STATIONS_TABLE: &str = "Stations";
pub const DEFAULT_RESULTS_TABLE: &str = "Results";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "WQCHEM";
