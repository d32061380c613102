use crate::models::schema::{FieldDescriptor, FieldType, PostCastAction, Schema};
use crate::models::{CanonicalRow, RawRow, Value};
use crate::utils::constants::{FIELD_SHAPE, MIN_VALID_YEAR, WQX_SUFFIX_MARKER};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%Y%m%d",
];

// Only tried when the year is exactly two digits; `%Y` would read "15" as 0015
const SHORT_YEAR_DATE_FORMATS: &[&str] = &["%m/%d/%y", "%d-%b-%y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f"];

/// Best-effort, schema-driven type coercion.
///
/// A value that cannot be coerced becomes null; casting never fails.
pub struct Caster {
    today: NaiveDate,
}

impl Caster {
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Evaluate the "no future dates" bound against a fixed day.
    pub fn with_reference_date(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Cast a raw row to the canonical shape described by `schema`.
    pub fn cast(&self, row: &RawRow, schema: &Schema) -> CanonicalRow {
        let mut canonical = CanonicalRow::empty(schema);

        for field in schema.fields {
            let Some(raw) = row.get(field.name) else {
                continue;
            };

            let value = self.cast_field(field, raw.clone());
            canonical.set(field.name, value);
        }

        canonical
    }

    fn cast_field(&self, field: &FieldDescriptor, raw: Value) -> Value {
        let raw = match raw {
            Value::Text(s) => Value::Text(s.trim().to_string()),
            other => other,
        };

        let mut value = match self.coerce(field.field_type, raw) {
            Some(value) => value,
            None => {
                trace!(field = field.name, "value could not be coerced, using null");
                Value::Null
            }
        };

        if matches!(&value, Value::Text(s) if s.is_empty()) {
            value = Value::Null;
        }

        if let (Some(max_length), Value::Text(s)) = (field.max_length, &mut value) {
            if s.chars().count() > max_length {
                *s = s.chars().take(max_length).collect();
            }
        }

        field
            .actions
            .iter()
            .fold(value, |value, action| apply_action(*action, value))
    }

    /// Coerce one value to `field_type`; `None` means null.
    pub fn coerce(&self, field_type: FieldType, value: Value) -> Option<Value> {
        if value.is_null() {
            return None;
        }

        match field_type {
            FieldType::String => Some(match value {
                Value::Text(s) => Value::Text(s),
                other => Value::Text(other.to_string()),
            }),
            FieldType::ShortInteger | FieldType::LongInteger => match value {
                Value::Integer(v) => Some(Value::Integer(v)),
                Value::Double(v) if v.is_finite() => Some(Value::Integer(v.trunc() as i64)),
                Value::Text(s) => s.parse::<i64>().ok().map(Value::Integer),
                _ => None,
            },
            FieldType::Double => match value {
                Value::Double(v) if v.is_finite() => Some(Value::Double(v)),
                Value::Integer(v) => Some(Value::Double(v as f64)),
                Value::Text(s) => s
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(Value::Double),
                _ => None,
            },
            FieldType::Date => {
                let value = match value {
                    Value::Date(_) | Value::DateTime(_) => value,
                    Value::Text(s) if s.is_empty() => return None,
                    Value::Text(s) => parse_date(&s)?,
                    _ => return None,
                };
                self.within_date_bounds(&value).then_some(value)
            }
            FieldType::Time => match value {
                Value::Time(t) => Some(Value::Time(t)),
                Value::DateTime(dt) => Some(Value::Time(dt.time())),
                Value::Text(s) if s.is_empty() => None,
                Value::Text(s) => parse_time(&s).map(Value::Time),
                _ => None,
            },
            FieldType::Geometry => Some(value),
        }
    }

    fn within_date_bounds(&self, value: &Value) -> bool {
        let date = match value {
            Value::Date(d) => *d,
            Value::DateTime(dt) => dt.date(),
            _ => return false,
        };

        date.year() >= MIN_VALID_YEAR && date <= self.today
    }
}

impl Default for Caster {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_action(action: PostCastAction, value: Value) -> Value {
    match (action, value) {
        (PostCastAction::StripWqxSuffix, Value::Text(s)) => Value::Text(strip_wqx_suffix(&s)),
        (_, other) => other,
    }
}

/// `ABC_WQX-abc` -> `ABC-abc`
pub fn strip_wqx_suffix(id: &str) -> String {
    id.replace(WQX_SUFFIX_MARKER, "-")
}

fn has_short_year(text: &str) -> bool {
    let trailing = text.chars().rev().take_while(char::is_ascii_digit).count();
    trailing == 2 && text.len() > 2
}

fn parse_date(text: &str) -> Option<Value> {
    let short: &[&str] = if has_short_year(text) {
        SHORT_YEAR_DATE_FORMATS
    } else {
        &[]
    };

    if let Some(date) = short
        .iter()
        .chain(DATE_FORMATS)
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(Value::Date(date));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(Value::Date(dt.date_naive()));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| Value::Date(dt.date()))
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

/// Field name -> SQL literal text, in row order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SqlRow(Vec<(String, String)>);

impl SqlRow {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Render every value of `row` as a literal for a textual insert statement.
pub fn cast_for_sql(row: &CanonicalRow) -> SqlRow {
    SqlRow(
        row.iter()
            .map(|(name, value)| (name.to_string(), sql_literal(name, value)))
            .collect(),
    )
}

fn sql_literal(name: &str, value: &Value) -> String {
    match value {
        Value::Null => "Null".to_string(),
        Value::Text(s) if name == FIELD_SHAPE => s.clone(),
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        Value::Date(d) => format!("Cast('{}' as date)", d.format("%Y-%m-%d")),
        Value::DateTime(dt) => format!("Cast('{}' as date)", dt.date().format("%Y-%m-%d")),
        Value::Time(t) => format!("'{}'", t.format("%H:%M:%S")),
        Value::Integer(v) => v.to_string(),
        Value::Double(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::{RESULT_SCHEMA, STATION_SCHEMA};
    use pretty_assertions::assert_eq;

    fn caster() -> Caster {
        Caster::with_reference_date(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
    }

    #[test]
    fn test_every_schema_field_is_present() {
        let raw = RawRow::new().with("Param", "Calcium").with("Unknown", "x");
        let row = caster().cast(&raw, &RESULT_SCHEMA);

        let names: Vec<_> = row.names().collect();
        let expected: Vec<_> = RESULT_SCHEMA.names().collect();
        assert_eq!(names, expected);
        assert_eq!(row.text("Param"), Some("Calcium"));
        assert!(!row.contains("Unknown"));
    }

    #[test]
    fn test_numeric_coercion() {
        let raw = RawRow::new()
            .with("ResultValue", " 66.5 ")
            .with("IdNum", "12")
            .with("MDL", "<0.1")
            .with("Chrg", 2_i64);
        let row = caster().cast(&raw, &RESULT_SCHEMA);

        assert_eq!(row.get("ResultValue"), Some(&Value::Double(66.5)));
        assert_eq!(row.get("IdNum"), Some(&Value::Integer(12)));
        assert_eq!(row.get("MDL"), Some(&Value::Null));
        assert_eq!(row.get("Chrg"), Some(&Value::Double(2.0)));
    }

    #[test]
    fn test_native_values_pass_through() {
        let date = NaiveDate::from_ymd_opt(2001, 9, 14).unwrap();
        let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
        let raw = RawRow::new()
            .with("SampleDate", date)
            .with("SampleTime", time)
            .with("ResultValue", 1.5);
        let row = caster().cast(&raw, &RESULT_SCHEMA);

        assert_eq!(row.get("SampleDate"), Some(&Value::Date(date)));
        assert_eq!(row.get("SampleTime"), Some(&Value::Time(time)));
        assert_eq!(row.get("ResultValue"), Some(&Value::Double(1.5)));
    }

    #[test]
    fn test_date_parsing_and_bounds() {
        let caster = caster();
        let cases = [
            ("2015-04-02", Some(NaiveDate::from_ymd_opt(2015, 4, 2).unwrap())),
            ("4/2/2015", Some(NaiveDate::from_ymd_opt(2015, 4, 2).unwrap())),
            ("4/2/15", Some(NaiveDate::from_ymd_opt(2015, 4, 2).unwrap())),
            ("02-Apr-15", Some(NaiveDate::from_ymd_opt(2015, 4, 2).unwrap())),
            ("02-Apr-2015", Some(NaiveDate::from_ymd_opt(2015, 4, 2).unwrap())),
            ("2015-04-02 13:15:00", Some(NaiveDate::from_ymd_opt(2015, 4, 2).unwrap())),
            ("1799-12-31", None),
            ("2020-06-02", None),
            ("", None),
            ("not a date", None),
        ];

        for (text, expected) in cases {
            let row = caster.cast(&RawRow::new().with("SampleDate", text), &RESULT_SCHEMA);
            assert_eq!(
                row.get("SampleDate"),
                Some(&Value::from(expected)),
                "input {:?}",
                text
            );
        }
    }

    #[test]
    fn test_native_dates_are_bounded_too() {
        let old = NaiveDate::from_ymd_opt(1750, 1, 1).unwrap();
        let row = caster().cast(&RawRow::new().with("SampleDate", old), &RESULT_SCHEMA);
        assert_eq!(row.get("SampleDate"), Some(&Value::Null));
    }

    #[test]
    fn test_time_parsing() {
        let row = caster().cast(&RawRow::new().with("SampleTime", "08:05:09"), &RESULT_SCHEMA);
        assert_eq!(
            row.get("SampleTime"),
            Some(&Value::Time(NaiveTime::from_hms_opt(8, 5, 9).unwrap()))
        );

        let row = caster().cast(&RawRow::new().with("SampleTime", "noon"), &RESULT_SCHEMA);
        assert_eq!(row.get("SampleTime"), Some(&Value::Null));
    }

    #[test]
    fn test_truncation_and_blank_strings() {
        let long = "x".repeat(80);
        let raw = RawRow::new().with("OrgId", long).with("OrgName", "   ");
        let row = caster().cast(&raw, &STATION_SCHEMA);

        assert_eq!(row.text("OrgId").map(|s| s.chars().count()), Some(50));
        assert_eq!(row.get("OrgName"), Some(&Value::Null));
    }

    #[test]
    fn test_station_id_suffix_is_stripped() {
        let row = caster().cast(&RawRow::new().with("StationId", "ABC_WQX-abc"), &STATION_SCHEMA);
        assert_eq!(row.text("StationId"), Some("ABC-abc"));
    }

    #[test]
    fn test_cast_for_sql() {
        let row = CanonicalRow::new()
            .with("StationName", "O'Brien Spring")
            .with("SampleDate", NaiveDate::from_ymd_opt(1850, 1, 2).unwrap())
            .with("SampleTime", NaiveTime::from_hms_opt(9, 0, 0).unwrap())
            .with("ResultValue", 10.45)
            .with("StateCode", 49_i64)
            .with("Unit", Value::Null)
            .with("Shape", "geometry::STGeomFromText('POINT (-111.9 40.7)', 4326)");

        let sql = cast_for_sql(&row);
        assert_eq!(sql.get("StationName"), Some("'O''Brien Spring'"));
        assert_eq!(sql.get("SampleDate"), Some("Cast('1850-01-02' as date)"));
        assert_eq!(sql.get("SampleTime"), Some("'09:00:00'"));
        assert_eq!(sql.get("ResultValue"), Some("10.45"));
        assert_eq!(sql.get("StateCode"), Some("49"));
        assert_eq!(sql.get("Unit"), Some("Null"));
        assert_eq!(
            sql.get("Shape"),
            Some("geometry::STGeomFromText('POINT (-111.9 40.7)', 4326)")
        );
        assert_eq!(sql.columns().count(), 7);
    }
}
