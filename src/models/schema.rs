//! Schema Registry.
//!
//! Declarative, immutable descriptions of the two canonical record shapes.
//! Field order is output column order: both the caster and the final
//! reorder/filter step walk `Schema::fields` front to back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type a canonical field is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    String,
    ShortInteger,
    LongInteger,
    Double,
    Date,
    Time,
    /// Pre-formatted geometry constructor text; never coerced.
    Geometry,
}

/// Named transformation applied after a field has been coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostCastAction {
    /// `ABC_WQX-123` -> `ABC-123`
    StripWqxSuffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Station,
    Result,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Station => write!(f, "station"),
            RecordKind::Result => write!(f, "result"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
    pub max_length: Option<usize>,
    pub actions: &'static [PostCastAction],
}

impl FieldDescriptor {
    const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            max_length: None,
            actions: &[],
        }
    }

    const fn text(name: &'static str, max_length: usize) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            max_length: Some(max_length),
            actions: &[],
        }
    }

    const fn with_actions(mut self, actions: &'static [PostCastAction]) -> Self {
        self.actions = actions;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub kind: RecordKind,
    pub fields: &'static [FieldDescriptor],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

const STRIP_WQX: &[PostCastAction] = &[PostCastAction::StripWqxSuffix];

use FieldType::{Date, Double, Geometry, LongInteger, ShortInteger, Time};

pub static STATION_SCHEMA: Schema = Schema {
    kind: RecordKind::Station,
    fields: &[
        FieldDescriptor::text("OrgId", 50),
        FieldDescriptor::text("OrgName", 100),
        FieldDescriptor::text("StationId", 100).with_actions(STRIP_WQX),
        FieldDescriptor::text("StationName", 100),
        FieldDescriptor::text("StationType", 100),
        FieldDescriptor::text("StationComment", 1500),
        FieldDescriptor::new("Lat_Y", Double),
        FieldDescriptor::new("Lon_X", Double),
        FieldDescriptor::new("HorAcc", Double),
        FieldDescriptor::text("HorAccUnit", 100),
        FieldDescriptor::text("HorCollMeth", 100),
        FieldDescriptor::text("HorRef", 100),
        FieldDescriptor::new("Elev", Double),
        FieldDescriptor::text("ElevUnit", 15),
        FieldDescriptor::new("ElevAcc", Double),
        FieldDescriptor::text("ElevAccUnit", 15),
        FieldDescriptor::text("ElevMeth", 100),
        FieldDescriptor::text("ElevRef", 100),
        FieldDescriptor::new("StateCode", ShortInteger),
        FieldDescriptor::new("CountyCode", ShortInteger),
        FieldDescriptor::text("Aquifer", 100),
        FieldDescriptor::text("FmType", 100),
        FieldDescriptor::text("AquiferType", 100),
        FieldDescriptor::new("ConstDate", Date),
        FieldDescriptor::new("Depth", Double),
        FieldDescriptor::text("DepthUnit", 15),
        FieldDescriptor::new("HoleDepth", Double),
        FieldDescriptor::text("HoleDUnit", 15),
        FieldDescriptor::new("demELEVm", Double),
        FieldDescriptor::text("DataSource", 20),
        FieldDescriptor::new("WIN", LongInteger),
        FieldDescriptor::new("Shape", Geometry),
    ],
};

pub static RESULT_SCHEMA: Schema = Schema {
    kind: RecordKind::Result,
    fields: &[
        FieldDescriptor::new("AnalysisDate", Date),
        FieldDescriptor::text("AnalytMeth", 150),
        FieldDescriptor::text("AnalytMethId", 50),
        FieldDescriptor::text("AutoQual", 100),
        FieldDescriptor::text("CAS_Reg", 50),
        FieldDescriptor::new("Chrg", Double),
        FieldDescriptor::text("DataSource", 20),
        FieldDescriptor::text("DetectCond", 50),
        FieldDescriptor::new("IdNum", LongInteger),
        FieldDescriptor::text("LabComments", 500),
        FieldDescriptor::text("LabName", 100),
        FieldDescriptor::new("Lat_Y", Double),
        FieldDescriptor::text("LimitType", 250),
        FieldDescriptor::new("Lon_X", Double),
        FieldDescriptor::new("MDL", Double),
        FieldDescriptor::text("MDLUnit", 50),
        FieldDescriptor::text("MethodDescript", 100),
        FieldDescriptor::text("OrgId", 50),
        FieldDescriptor::text("OrgName", 150),
        FieldDescriptor::text("Param", 500),
        FieldDescriptor::text("ParamGroup", 60),
        FieldDescriptor::text("ProjectId", 50),
        FieldDescriptor::text("QualCode", 50),
        FieldDescriptor::text("ResultComment", 1500),
        FieldDescriptor::text("ResultStatus", 50),
        FieldDescriptor::new("ResultValue", Double),
        FieldDescriptor::text("SampComment", 500),
        FieldDescriptor::new("SampDepth", Double),
        FieldDescriptor::text("SampDepthRef", 50),
        FieldDescriptor::text("SampDepthU", 50),
        FieldDescriptor::text("SampEquip", 75),
        FieldDescriptor::text("SampFrac", 50),
        FieldDescriptor::new("SampleDate", Date),
        FieldDescriptor::new("SampleTime", Time),
        FieldDescriptor::text("SampleId", 150),
        FieldDescriptor::text("SampMedia", 50),
        FieldDescriptor::text("SampMeth", 50),
        FieldDescriptor::text("SampMethName", 75),
        FieldDescriptor::text("SampType", 75),
        FieldDescriptor::text("StationId", 100).with_actions(STRIP_WQX),
        FieldDescriptor::text("Unit", 50),
        FieldDescriptor::text("USGSPCode", 50),
    ],
};

pub fn schema_for(kind: RecordKind) -> &'static Schema {
    match kind {
        RecordKind::Station => &STATION_SCHEMA,
        RecordKind::Result => &RESULT_SCHEMA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique() {
        for schema in [&STATION_SCHEMA, &RESULT_SCHEMA] {
            let names: HashSet<_> = schema.names().collect();
            assert_eq!(names.len(), schema.len(), "{} schema", schema.kind);
        }
    }

    #[test]
    fn test_station_id_strips_suffix() {
        for schema in [&STATION_SCHEMA, &RESULT_SCHEMA] {
            let field = schema.field("StationId").unwrap();
            assert_eq!(field.actions, &[PostCastAction::StripWqxSuffix]);
        }
    }

    #[test]
    fn test_lookup() {
        let field = RESULT_SCHEMA.field("SampleTime").unwrap();
        assert_eq!(field.field_type, FieldType::Time);
        assert!(RESULT_SCHEMA.field("Shape").is_none());
        assert_eq!(STATION_SCHEMA.fields.last().unwrap().name, "Shape");
        assert_eq!(schema_for(RecordKind::Result).kind, RecordKind::Result);
    }
}
