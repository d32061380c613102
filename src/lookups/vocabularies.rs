//! Small controlled vocabularies: station types, sample media and the
//! chemical-name aliases that feed the charge balance.

use crate::models::concentration::Ion;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationType {
    Atmosphere,
    SurfaceWater,
    LakeReservoirImpoundment,
    Stream,
    Spring,
    Well,
    Wetland,
    Land,
    Facility,
    Other,
    OtherGroundwater,
}

impl StationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Atmosphere => "Atmosphere",
            StationType::SurfaceWater => "Surface Water",
            StationType::LakeReservoirImpoundment => "Lake/Reservoir/Impoundment",
            StationType::Stream => "Stream",
            StationType::Spring => "Spring",
            StationType::Well => "Well",
            StationType::Wetland => "Wetland",
            StationType::Land => "Land",
            StationType::Facility => "Facility",
            StationType::Other => "Other",
            StationType::OtherGroundwater => "Other Groundwater",
        }
    }
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const STATION_TYPES: &[(&str, StationType)] = {
    use StationType::*;
    &[
        // Water Quality Portal monitoring location types
        ("atmosphere", Atmosphere),
        ("local air monitoring station", Atmosphere),
        ("aggregate groundwater use", OtherGroundwater),
        ("aggregate surface-water-use", SurfaceWater),
        ("aggregate water-use establishment", Facility),
        ("beach program site-channelized stream", Stream),
        ("beach program site-lake", LakeReservoirImpoundment),
        ("beach program site-land runoff", Land),
        ("beach program site-river/stream", Stream),
        ("borehole", OtherGroundwater),
        ("canal drainage", Stream),
        ("canal irrigation", Stream),
        ("canal transport", Stream),
        ("cave", OtherGroundwater),
        ("channelized stream", Stream),
        ("combined sewer", Facility),
        ("constructed diversion dam", Facility),
        ("constructed tunnel", Facility),
        ("constructed water transport structure", Facility),
        ("constructed wetland", Wetland),
        ("estuary", SurfaceWater),
        ("facility industrial", Facility),
        ("facility municipal sewage (potw)", Facility),
        ("facility other", Facility),
        ("facility privately owned non-industrial", Facility),
        ("facility public water supply (pws)", Facility),
        ("facility: cistern", Facility),
        ("facility: diversion", Facility),
        ("facility: field, pasture, orchard, or nursery", Facility),
        ("facility: golf course", Facility),
        ("facility: hydroelectric plant", Facility),
        ("facility: laboratory or sample-preparation area", Facility),
        ("facility: landfill", Facility),
        ("facility: outfall", Facility),
        ("facility: pavement", Facility),
        ("facility: septic system", Facility),
        ("facility: storm sewer", Facility),
        ("facility: thermoelectric plant", Facility),
        ("facility: wastewater land application", Facility),
        ("facility: wastewater sewer", Facility),
        ("facility: wastewater-treatment plant", Facility),
        ("facility: water-distribution system", Facility),
        ("facility: water-supply treatment plant", Facility),
        ("facility: water-use establishment", Facility),
        ("floodwater non-urban", SurfaceWater),
        ("floodwater urban", SurfaceWater),
        ("gallery", OtherGroundwater),
        ("glacier", SurfaceWater),
        ("great lake", LakeReservoirImpoundment),
        ("lake", LakeReservoirImpoundment),
        ("lake, reservoir, impoundment", LakeReservoirImpoundment),
        ("land", Land),
        ("land flood plain", Land),
        ("land runoff", Land),
        ("land: excavation", Land),
        ("land: outcrop", Land),
        ("land: playa", Land),
        ("land: shore", Land),
        ("land: sinkhole", Land),
        ("land: volcanic vent", Land),
        ("leachate-lysimeter", OtherGroundwater),
        ("leachate-sampleport", OtherGroundwater),
        ("mine/mine discharge", Other),
        ("mine/mine discharge adit (mine entrance)", Other),
        ("mine/mine discharge tailings pile", Other),
        ("ocean", SurfaceWater),
        ("ocean: coastal", SurfaceWater),
        ("other-ground water", OtherGroundwater),
        ("other-surface water", SurfaceWater),
        ("playa", Land),
        ("pond-anchialine", LakeReservoirImpoundment),
        ("pond-sediment", LakeReservoirImpoundment),
        ("pond-stock", LakeReservoirImpoundment),
        ("pond-stormwater", LakeReservoirImpoundment),
        ("pond-wastewater", LakeReservoirImpoundment),
        ("reservoir", LakeReservoirImpoundment),
        ("riverine impoundment", LakeReservoirImpoundment),
        ("river/stream", Stream),
        ("river/stream ephemeral", Stream),
        ("river/stream intermittent", Stream),
        ("river/stream perennial", Stream),
        ("river/stream unknown flow", Stream),
        ("seep", Spring),
        ("spring", Spring),
        ("storm sewer", Facility),
        ("stream", Stream),
        ("stream: canal", Stream),
        ("stream: ditch", Stream),
        ("stream: tidal stream", Stream),
        ("subsurface", OtherGroundwater),
        ("subsurface: groundwater drain", OtherGroundwater),
        ("subsurface: unsaturated zone", OtherGroundwater),
        ("survey monument", Other),
        ("waste pit", Facility),
        ("waste sewer", Facility),
        ("well", Well),
        ("well: collector or ranney type well", Well),
        ("well: extensometer well", Well),
        ("well: hyporheic-zone well", Well),
        ("well: multiple wells", Well),
        ("well: test hole not completed as a well", Well),
        ("wetland estuarine-emergent", Wetland),
        ("wetland estuarine-forested", Wetland),
        ("wetland estuarine-pool", Wetland),
        ("wetland estuarine-scrub-shrub", Wetland),
        ("wetland lacustrine-emergent", Wetland),
        ("wetland palustrine-emergent", Wetland),
        ("wetland palustrine-forested", Wetland),
        ("wetland palustrine-moss-lichen", Wetland),
        ("wetland palustrine-shrub-scrub", Wetland),
        ("wetland palustrine pond", Wetland),
        ("wetland riverine-emergent", Wetland),
        ("wetland undifferentiated", Wetland),
        // Drinking-water system source codes
        ("wl", Well),
        ("sp", Spring),
        ("ig", OtherGroundwater),
        ("ss", SurfaceWater),
        ("sw", SurfaceWater),
        ("rs", LakeReservoirImpoundment),
        ("rc", SurfaceWater),
        ("st", Stream),
        ("ws", Facility),
        ("tp", Facility),
        ("ds", Facility),
        ("cc", Facility),
        // Agency spreadsheet vocabulary
        ("groundwater", OtherGroundwater),
        ("ground water", OtherGroundwater),
        ("surface water", SurfaceWater),
        ("surface", SurfaceWater),
        ("creek", Stream),
        ("river", Stream),
        ("pond", LakeReservoirImpoundment),
        ("oil well", Well),
        ("gas well", Well),
        ("water well", Well),
        ("monitoring well", Well),
        ("piezometer", Well),
        ("drain", OtherGroundwater),
        ("mine", Other),
        ("other", Other),
        ("precipitation", Atmosphere),
        ("snow", Atmosphere),
    ]
};

const SAMPLE_MEDIA: &[(&str, &str)] = &[
    ("wl", "Groundwater"),
    ("sp", "Groundwater"),
    ("ig", "Groundwater"),
    ("well", "Groundwater"),
    ("spring", "Groundwater"),
    ("gw", "Groundwater"),
    ("groundwater", "Groundwater"),
    ("ground water", "Groundwater"),
    ("water-ground", "Groundwater"),
    ("sw", "Surface Water"),
    ("ss", "Surface Water"),
    ("st", "Surface Water"),
    ("rs", "Surface Water"),
    ("stream", "Surface Water"),
    ("surface water", "Surface Water"),
    ("surfacewater", "Surface Water"),
    ("water-surface", "Surface Water"),
];

const ION_ALIASES: &[(&str, Ion)] = {
    use Ion::*;
    &[
        ("ca", Calcium),
        ("calcium", Calcium),
        ("dissolved calcium", Calcium),
        ("total calcium", Calcium),
        ("calcium, dissolved", Calcium),
        ("calcium, total", Calcium),
        ("mg", Magnesium),
        ("magnesium", Magnesium),
        ("dissolved magnesium", Magnesium),
        ("total magnesium", Magnesium),
        ("magnesium, dissolved", Magnesium),
        ("magnesium, total", Magnesium),
        ("na", Sodium),
        ("sodium", Sodium),
        ("dissolved sodium", Sodium),
        ("total sodium", Sodium),
        ("sodium, dissolved", Sodium),
        ("sodium, total", Sodium),
        ("k", Potassium),
        ("potassium", Potassium),
        ("dissolved potassium", Potassium),
        ("total potassium", Potassium),
        ("potassium, dissolved", Potassium),
        ("potassium, total", Potassium),
        ("cl", Chloride),
        ("chloride", Chloride),
        ("dissolved chloride", Chloride),
        ("total chloride", Chloride),
        ("chloride, dissolved", Chloride),
        ("chloride, total", Chloride),
        ("hco3", Bicarbonate),
        ("bicarbonate", Bicarbonate),
        ("bicarbonate as hco3", Bicarbonate),
        ("dissolved bicarbonate", Bicarbonate),
        ("total bicarbonate", Bicarbonate),
        ("co3", Carbonate),
        ("carbonate", Carbonate),
        ("carbonate as co3", Carbonate),
        ("dissolved carbonate", Carbonate),
        ("total carbonate", Carbonate),
        ("so4", Sulfate),
        ("sulfate", Sulfate),
        ("sulphate", Sulfate),
        ("dissolved sulfate", Sulfate),
        ("total sulfate", Sulfate),
        ("sulfate, dissolved", Sulfate),
        ("sulfate, total", Sulfate),
        ("no2", Nitrite),
        ("nitrite", Nitrite),
        ("dissolved nitrite", Nitrite),
        ("total nitrite", Nitrite),
        ("no3", Nitrate),
        ("nitrate", Nitrate),
        ("dissolved nitrate", Nitrate),
        ("total nitrate", Nitrate),
        ("na+k", SodiumPlusPotassium),
        ("sodium+potassium", SodiumPlusPotassium),
        ("sodium + potassium", SodiumPlusPotassium),
        ("sodium plus potassium", SodiumPlusPotassium),
        ("sodium and potassium", SodiumPlusPotassium),
        ("sodium and potassium, dissolved", SodiumPlusPotassium),
    ]
};

static STATION_TYPE_INDEX: Lazy<HashMap<&'static str, StationType>> =
    Lazy::new(|| STATION_TYPES.iter().copied().collect());

static SAMPLE_MEDIA_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SAMPLE_MEDIA.iter().copied().collect());

static ION_ALIAS_INDEX: Lazy<HashMap<&'static str, Ion>> =
    Lazy::new(|| ION_ALIASES.iter().copied().collect());

/// Canonical station type for a source-specific type string.
pub fn station_type(source_type: &str) -> Option<StationType> {
    STATION_TYPE_INDEX
        .get(source_type.trim().to_lowercase().as_str())
        .copied()
}

/// Canonical sample medium for a source-specific media code.
pub fn sample_media(code: &str) -> Option<&'static str> {
    SAMPLE_MEDIA_INDEX
        .get(code.trim().to_lowercase().as_str())
        .copied()
}

/// Tracked ion for a chemical name, if it is one of the charge-balance ions.
pub fn ion_for_chemical(chemical: &str) -> Option<Ion> {
    ION_ALIAS_INDEX
        .get(chemical.trim().to_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_type_lookup_ignores_case() {
        assert_eq!(station_type("Well"), Some(StationType::Well));
        assert_eq!(
            station_type("Lake, Reservoir, Impoundment"),
            Some(StationType::LakeReservoirImpoundment)
        );
        assert_eq!(station_type("River/Stream"), Some(StationType::Stream));
        assert_eq!(station_type("WL"), Some(StationType::Well));
        assert_eq!(station_type("Unicorn Pasture"), None);
    }

    #[test]
    fn test_sample_media() {
        assert_eq!(sample_media("WL"), Some("Groundwater"));
        assert_eq!(sample_media("sw"), Some("Surface Water"));
        assert_eq!(sample_media("Biological"), None);
    }

    #[test]
    fn test_ion_aliases() {
        assert_eq!(ion_for_chemical("Dissolved Calcium"), Some(Ion::Calcium));
        assert_eq!(
            ion_for_chemical("Sodium plus potassium"),
            Some(Ion::SodiumPlusPotassium)
        );
        assert_eq!(ion_for_chemical("Arsenic"), None);
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        assert_eq!(STATION_TYPE_INDEX.len(), STATION_TYPES.len());
        assert_eq!(SAMPLE_MEDIA_INDEX.len(), SAMPLE_MEDIA.len());
        assert_eq!(ION_ALIAS_INDEX.len(), ION_ALIASES.len());
    }
}
