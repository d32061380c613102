//! Parameter group classification.
//!
//! Maps lowercased, full-text parameter descriptions (as they appear across
//! the source exports, including common "dissolved"/"total" spellings) to a
//! coarse reporting group.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamGroup {
    Information,
    InorganicsMajorMetals,
    InorganicsMajorNonMetals,
    InorganicsMinorMetals,
    InorganicsMinorNonMetals,
    Nutrient,
    OrganicsPesticide,
    OrganicsPcbs,
    OrganicsVolatile,
    OrganicsOther,
    Physical,
    Radiochemical,
    StableIsotopes,
    Biological,
    Microbiological,
    Toxicity,
}

impl ParamGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamGroup::Information => "information",
            ParamGroup::InorganicsMajorMetals => "inorganics, major, metals",
            ParamGroup::InorganicsMajorNonMetals => "inorganics, major, non-metals",
            ParamGroup::InorganicsMinorMetals => "inorganics, minor, metals",
            ParamGroup::InorganicsMinorNonMetals => "inorganics, minor, non-metals",
            ParamGroup::Nutrient => "nutrient",
            ParamGroup::OrganicsPesticide => "organics, pesticide",
            ParamGroup::OrganicsPcbs => "organics, pcbs",
            ParamGroup::OrganicsVolatile => "organics, volatile",
            ParamGroup::OrganicsOther => "organics, other",
            ParamGroup::Physical => "physical",
            ParamGroup::Radiochemical => "radiochemical",
            ParamGroup::StableIsotopes => "stable isotopes",
            ParamGroup::Biological => "biological",
            ParamGroup::Microbiological => "microbiological",
            ParamGroup::Toxicity => "toxicity",
        }
    }
}

impl fmt::Display for ParamGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Group of a parameter description, or `None` when it is not catalogued.
pub fn calculate_paramgroup(chemical: &str) -> Option<ParamGroup> {
    PARAM_GROUP_INDEX
        .get(chemical.trim().to_lowercase().as_str())
        .copied()
}

static PARAM_GROUP_INDEX: Lazy<HashMap<&'static str, ParamGroup>> =
    Lazy::new(|| PARAM_GROUPS.iter().copied().collect());

const PARAM_GROUPS: &[(&str, ParamGroup)] = {
    use ParamGroup::*;
    &[
        // inorganics, major, metals
        ("calcium", InorganicsMajorMetals),
        ("dissolved calcium", InorganicsMajorMetals),
        ("total calcium", InorganicsMajorMetals),
        ("calcium, dissolved", InorganicsMajorMetals),
        ("calcium, total", InorganicsMajorMetals),
        ("calcium, total recoverable", InorganicsMajorMetals),
        ("total recoverable calcium", InorganicsMajorMetals),
        ("calcium, suspended", InorganicsMajorMetals),
        ("magnesium", InorganicsMajorMetals),
        ("dissolved magnesium", InorganicsMajorMetals),
        ("total magnesium", InorganicsMajorMetals),
        ("magnesium, dissolved", InorganicsMajorMetals),
        ("magnesium, total", InorganicsMajorMetals),
        ("magnesium, total recoverable", InorganicsMajorMetals),
        ("total recoverable magnesium", InorganicsMajorMetals),
        ("magnesium, suspended", InorganicsMajorMetals),
        ("potassium", InorganicsMajorMetals),
        ("dissolved potassium", InorganicsMajorMetals),
        ("total potassium", InorganicsMajorMetals),
        ("potassium, dissolved", InorganicsMajorMetals),
        ("potassium, total", InorganicsMajorMetals),
        ("potassium, total recoverable", InorganicsMajorMetals),
        ("total recoverable potassium", InorganicsMajorMetals),
        ("potassium, suspended", InorganicsMajorMetals),
        ("sodium", InorganicsMajorMetals),
        ("dissolved sodium", InorganicsMajorMetals),
        ("total sodium", InorganicsMajorMetals),
        ("sodium, dissolved", InorganicsMajorMetals),
        ("sodium, total", InorganicsMajorMetals),
        ("sodium, total recoverable", InorganicsMajorMetals),
        ("total recoverable sodium", InorganicsMajorMetals),
        ("sodium, suspended", InorganicsMajorMetals),
        ("sodium plus potassium", InorganicsMajorMetals),
        ("dissolved sodium plus potassium", InorganicsMajorMetals),
        ("total sodium plus potassium", InorganicsMajorMetals),
        ("sodium plus potassium, dissolved", InorganicsMajorMetals),
        ("sodium plus potassium, total", InorganicsMajorMetals),
        ("sodium plus potassium, total recoverable", InorganicsMajorMetals),
        ("total recoverable sodium plus potassium", InorganicsMajorMetals),
        ("sodium plus potassium, suspended", InorganicsMajorMetals),
        ("sodium+potassium", InorganicsMajorMetals),
        ("dissolved sodium+potassium", InorganicsMajorMetals),
        ("total sodium+potassium", InorganicsMajorMetals),
        ("sodium+potassium, dissolved", InorganicsMajorMetals),
        ("sodium+potassium, total", InorganicsMajorMetals),
        ("sodium+potassium, total recoverable", InorganicsMajorMetals),
        ("total recoverable sodium+potassium", InorganicsMajorMetals),
        ("sodium+potassium, suspended", InorganicsMajorMetals),
        ("sodium and potassium", InorganicsMajorMetals),
        ("dissolved sodium and potassium", InorganicsMajorMetals),
        ("total sodium and potassium", InorganicsMajorMetals),
        ("sodium and potassium, dissolved", InorganicsMajorMetals),
        ("sodium and potassium, total", InorganicsMajorMetals),
        ("sodium and potassium, total recoverable", InorganicsMajorMetals),
        ("total recoverable sodium and potassium", InorganicsMajorMetals),
        ("sodium and potassium, suspended", InorganicsMajorMetals),
        ("sodium adsorption ratio", InorganicsMajorMetals),
        ("sodium adsorption ratio [(na)/(sq root of 1/2 ca + mg)]", InorganicsMajorMetals),
        ("sodium, percent total cations", InorganicsMajorMetals),
        ("percent sodium", InorganicsMajorMetals),
        ("ca", InorganicsMajorMetals),
        ("mg", InorganicsMajorMetals),
        ("na", InorganicsMajorMetals),
        ("k", InorganicsMajorMetals),
        ("na+k", InorganicsMajorMetals),
        ("hardness", InorganicsMajorMetals),
        ("total hardness", InorganicsMajorMetals),
        ("hardness, ca, mg", InorganicsMajorMetals),
        ("hardness, ca mg", InorganicsMajorMetals),
        ("hardness, non-carbonate", InorganicsMajorMetals),
        ("hardness, carbonate", InorganicsMajorMetals),
        ("hardness as caco3", InorganicsMajorMetals),
        ("hardness, total", InorganicsMajorMetals),
        ("calcium hardness", InorganicsMajorMetals),
        ("magnesium hardness", InorganicsMajorMetals),
        // inorganics, major, non-metals
        ("bicarbonate", InorganicsMajorNonMetals),
        ("dissolved bicarbonate", InorganicsMajorNonMetals),
        ("total bicarbonate", InorganicsMajorNonMetals),
        ("bicarbonate, dissolved", InorganicsMajorNonMetals),
        ("bicarbonate, total", InorganicsMajorNonMetals),
        ("bicarbonate, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable bicarbonate", InorganicsMajorNonMetals),
        ("bicarbonate, suspended", InorganicsMajorNonMetals),
        ("carbonate", InorganicsMajorNonMetals),
        ("dissolved carbonate", InorganicsMajorNonMetals),
        ("total carbonate", InorganicsMajorNonMetals),
        ("carbonate, dissolved", InorganicsMajorNonMetals),
        ("carbonate, total", InorganicsMajorNonMetals),
        ("carbonate, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable carbonate", InorganicsMajorNonMetals),
        ("carbonate, suspended", InorganicsMajorNonMetals),
        ("chloride", InorganicsMajorNonMetals),
        ("dissolved chloride", InorganicsMajorNonMetals),
        ("total chloride", InorganicsMajorNonMetals),
        ("chloride, dissolved", InorganicsMajorNonMetals),
        ("chloride, total", InorganicsMajorNonMetals),
        ("chloride, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable chloride", InorganicsMajorNonMetals),
        ("chloride, suspended", InorganicsMajorNonMetals),
        ("fluoride", InorganicsMajorNonMetals),
        ("dissolved fluoride", InorganicsMajorNonMetals),
        ("total fluoride", InorganicsMajorNonMetals),
        ("fluoride, dissolved", InorganicsMajorNonMetals),
        ("fluoride, total", InorganicsMajorNonMetals),
        ("fluoride, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable fluoride", InorganicsMajorNonMetals),
        ("fluoride, suspended", InorganicsMajorNonMetals),
        ("silica", InorganicsMajorNonMetals),
        ("dissolved silica", InorganicsMajorNonMetals),
        ("total silica", InorganicsMajorNonMetals),
        ("silica, dissolved", InorganicsMajorNonMetals),
        ("silica, total", InorganicsMajorNonMetals),
        ("silica, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable silica", InorganicsMajorNonMetals),
        ("silica, suspended", InorganicsMajorNonMetals),
        ("sulfate", InorganicsMajorNonMetals),
        ("dissolved sulfate", InorganicsMajorNonMetals),
        ("total sulfate", InorganicsMajorNonMetals),
        ("sulfate, dissolved", InorganicsMajorNonMetals),
        ("sulfate, total", InorganicsMajorNonMetals),
        ("sulfate, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable sulfate", InorganicsMajorNonMetals),
        ("sulfate, suspended", InorganicsMajorNonMetals),
        ("sulphate", InorganicsMajorNonMetals),
        ("dissolved sulphate", InorganicsMajorNonMetals),
        ("total sulphate", InorganicsMajorNonMetals),
        ("sulphate, dissolved", InorganicsMajorNonMetals),
        ("sulphate, total", InorganicsMajorNonMetals),
        ("sulphate, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable sulphate", InorganicsMajorNonMetals),
        ("sulphate, suspended", InorganicsMajorNonMetals),
        ("hydroxide", InorganicsMajorNonMetals),
        ("dissolved hydroxide", InorganicsMajorNonMetals),
        ("total hydroxide", InorganicsMajorNonMetals),
        ("hydroxide, dissolved", InorganicsMajorNonMetals),
        ("hydroxide, total", InorganicsMajorNonMetals),
        ("hydroxide, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable hydroxide", InorganicsMajorNonMetals),
        ("hydroxide, suspended", InorganicsMajorNonMetals),
        ("alkalinity", InorganicsMajorNonMetals),
        ("dissolved alkalinity", InorganicsMajorNonMetals),
        ("total alkalinity", InorganicsMajorNonMetals),
        ("alkalinity, dissolved", InorganicsMajorNonMetals),
        ("alkalinity, total", InorganicsMajorNonMetals),
        ("alkalinity, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable alkalinity", InorganicsMajorNonMetals),
        ("alkalinity, suspended", InorganicsMajorNonMetals),
        ("silicon", InorganicsMajorNonMetals),
        ("dissolved silicon", InorganicsMajorNonMetals),
        ("total silicon", InorganicsMajorNonMetals),
        ("silicon, dissolved", InorganicsMajorNonMetals),
        ("silicon, total", InorganicsMajorNonMetals),
        ("silicon, total recoverable", InorganicsMajorNonMetals),
        ("total recoverable silicon", InorganicsMajorNonMetals),
        ("silicon, suspended", InorganicsMajorNonMetals),
        ("hco3", InorganicsMajorNonMetals),
        ("co3", InorganicsMajorNonMetals),
        ("cl", InorganicsMajorNonMetals),
        ("f", InorganicsMajorNonMetals),
        ("so4", InorganicsMajorNonMetals),
        ("sio2", InorganicsMajorNonMetals),
        ("bicarbonate as caco3", InorganicsMajorNonMetals),
        ("carbonate as caco3", InorganicsMajorNonMetals),
        ("bicarbonate as hco3", InorganicsMajorNonMetals),
        ("carbonate as co3", InorganicsMajorNonMetals),
        ("alkalinity as caco3", InorganicsMajorNonMetals),
        ("alkalinity, total as caco3", InorganicsMajorNonMetals),
        ("alkalinity, bicarbonate", InorganicsMajorNonMetals),
        ("alkalinity, carbonate", InorganicsMajorNonMetals),
        ("alkalinity, bicarbonate as caco3", InorganicsMajorNonMetals),
        ("alkalinity, carbonate as caco3", InorganicsMajorNonMetals),
        ("alkalinity, phenolphthalein (total hydroxide+1/2 carbonate)", InorganicsMajorNonMetals),
        ("acidity", InorganicsMajorNonMetals),
        ("acidity, (h+)", InorganicsMajorNonMetals),
        ("sulfate as s", InorganicsMajorNonMetals),
        ("sulfur, sulfate", InorganicsMajorNonMetals),
        ("carbon dioxide", InorganicsMajorNonMetals),
        ("free carbon dioxide", InorganicsMajorNonMetals),
        // inorganics, minor, metals
        ("aluminum", InorganicsMinorMetals),
        ("dissolved aluminum", InorganicsMinorMetals),
        ("total aluminum", InorganicsMinorMetals),
        ("aluminum, dissolved", InorganicsMinorMetals),
        ("aluminum, total", InorganicsMinorMetals),
        ("aluminum, total recoverable", InorganicsMinorMetals),
        ("total recoverable aluminum", InorganicsMinorMetals),
        ("aluminum, suspended", InorganicsMinorMetals),
        ("antimony", InorganicsMinorMetals),
        ("dissolved antimony", InorganicsMinorMetals),
        ("total antimony", InorganicsMinorMetals),
        ("antimony, dissolved", InorganicsMinorMetals),
        ("antimony, total", InorganicsMinorMetals),
        ("antimony, total recoverable", InorganicsMinorMetals),
        ("total recoverable antimony", InorganicsMinorMetals),
        ("antimony, suspended", InorganicsMinorMetals),
        ("arsenic", InorganicsMinorMetals),
        ("dissolved arsenic", InorganicsMinorMetals),
        ("total arsenic", InorganicsMinorMetals),
        ("arsenic, dissolved", InorganicsMinorMetals),
        ("arsenic, total", InorganicsMinorMetals),
        ("arsenic, total recoverable", InorganicsMinorMetals),
        ("total recoverable arsenic", InorganicsMinorMetals),
        ("arsenic, suspended", InorganicsMinorMetals),
        ("barium", InorganicsMinorMetals),
        ("dissolved barium", InorganicsMinorMetals),
        ("total barium", InorganicsMinorMetals),
        ("barium, dissolved", InorganicsMinorMetals),
        ("barium, total", InorganicsMinorMetals),
        ("barium, total recoverable", InorganicsMinorMetals),
        ("total recoverable barium", InorganicsMinorMetals),
        ("barium, suspended", InorganicsMinorMetals),
        ("beryllium", InorganicsMinorMetals),
        ("dissolved beryllium", InorganicsMinorMetals),
        ("total beryllium", InorganicsMinorMetals),
        ("beryllium, dissolved", InorganicsMinorMetals),
        ("beryllium, total", InorganicsMinorMetals),
        ("beryllium, total recoverable", InorganicsMinorMetals),
        ("total recoverable beryllium", InorganicsMinorMetals),
        ("beryllium, suspended", InorganicsMinorMetals),
        ("bismuth", InorganicsMinorMetals),
        ("dissolved bismuth", InorganicsMinorMetals),
        ("total bismuth", InorganicsMinorMetals),
        ("bismuth, dissolved", InorganicsMinorMetals),
        ("bismuth, total", InorganicsMinorMetals),
        ("bismuth, total recoverable", InorganicsMinorMetals),
        ("total recoverable bismuth", InorganicsMinorMetals),
        ("bismuth, suspended", InorganicsMinorMetals),
        ("cadmium", InorganicsMinorMetals),
        ("dissolved cadmium", InorganicsMinorMetals),
        ("total cadmium", InorganicsMinorMetals),
        ("cadmium, dissolved", InorganicsMinorMetals),
        ("cadmium, total", InorganicsMinorMetals),
        ("cadmium, total recoverable", InorganicsMinorMetals),
        ("total recoverable cadmium", InorganicsMinorMetals),
        ("cadmium, suspended", InorganicsMinorMetals),
        ("cerium", InorganicsMinorMetals),
        ("dissolved cerium", InorganicsMinorMetals),
        ("total cerium", InorganicsMinorMetals),
        ("cerium, dissolved", InorganicsMinorMetals),
        ("cerium, total", InorganicsMinorMetals),
        ("cerium, total recoverable", InorganicsMinorMetals),
        ("total recoverable cerium", InorganicsMinorMetals),
        ("cerium, suspended", InorganicsMinorMetals),
        ("cesium", InorganicsMinorMetals),
        ("dissolved cesium", InorganicsMinorMetals),
        ("total cesium", InorganicsMinorMetals),
        ("cesium, dissolved", InorganicsMinorMetals),
        ("cesium, total", InorganicsMinorMetals),
        ("cesium, total recoverable", InorganicsMinorMetals),
        ("total recoverable cesium", InorganicsMinorMetals),
        ("cesium, suspended", InorganicsMinorMetals),
        ("chromium", InorganicsMinorMetals),
        ("dissolved chromium", InorganicsMinorMetals),
        ("total chromium", InorganicsMinorMetals),
        ("chromium, dissolved", InorganicsMinorMetals),
        ("chromium, total", InorganicsMinorMetals),
        ("chromium, total recoverable", InorganicsMinorMetals),
        ("total recoverable chromium", InorganicsMinorMetals),
        ("chromium, suspended", InorganicsMinorMetals),
        ("hexavalent chromium", InorganicsMinorMetals),
        ("dissolved hexavalent chromium", InorganicsMinorMetals),
        ("total hexavalent chromium", InorganicsMinorMetals),
        ("hexavalent chromium, dissolved", InorganicsMinorMetals),
        ("hexavalent chromium, total", InorganicsMinorMetals),
        ("hexavalent chromium, total recoverable", InorganicsMinorMetals),
        ("total recoverable hexavalent chromium", InorganicsMinorMetals),
        ("hexavalent chromium, suspended", InorganicsMinorMetals),
        ("chromium(vi)", InorganicsMinorMetals),
        ("dissolved chromium(vi)", InorganicsMinorMetals),
        ("total chromium(vi)", InorganicsMinorMetals),
        ("chromium(vi), dissolved", InorganicsMinorMetals),
        ("chromium(vi), total", InorganicsMinorMetals),
        ("chromium(vi), total recoverable", InorganicsMinorMetals),
        ("total recoverable chromium(vi)", InorganicsMinorMetals),
        ("chromium(vi), suspended", InorganicsMinorMetals),
        ("trivalent chromium", InorganicsMinorMetals),
        ("dissolved trivalent chromium", InorganicsMinorMetals),
        ("total trivalent chromium", InorganicsMinorMetals),
        ("trivalent chromium, dissolved", InorganicsMinorMetals),
        ("trivalent chromium, total", InorganicsMinorMetals),
        ("trivalent chromium, total recoverable", InorganicsMinorMetals),
        ("total recoverable trivalent chromium", InorganicsMinorMetals),
        ("trivalent chromium, suspended", InorganicsMinorMetals),
        ("cobalt", InorganicsMinorMetals),
        ("dissolved cobalt", InorganicsMinorMetals),
        ("total cobalt", InorganicsMinorMetals),
        ("cobalt, dissolved", InorganicsMinorMetals),
        ("cobalt, total", InorganicsMinorMetals),
        ("cobalt, total recoverable", InorganicsMinorMetals),
        ("total recoverable cobalt", InorganicsMinorMetals),
        ("cobalt, suspended", InorganicsMinorMetals),
        ("copper", InorganicsMinorMetals),
        ("dissolved copper", InorganicsMinorMetals),
        ("total copper", InorganicsMinorMetals),
        ("copper, dissolved", InorganicsMinorMetals),
        ("copper, total", InorganicsMinorMetals),
        ("copper, total recoverable", InorganicsMinorMetals),
        ("total recoverable copper", InorganicsMinorMetals),
        ("copper, suspended", InorganicsMinorMetals),
        ("gallium", InorganicsMinorMetals),
        ("dissolved gallium", InorganicsMinorMetals),
        ("total gallium", InorganicsMinorMetals),
        ("gallium, dissolved", InorganicsMinorMetals),
        ("gallium, total", InorganicsMinorMetals),
        ("gallium, total recoverable", InorganicsMinorMetals),
        ("total recoverable gallium", InorganicsMinorMetals),
        ("gallium, suspended", InorganicsMinorMetals),
        ("germanium", InorganicsMinorMetals),
        ("dissolved germanium", InorganicsMinorMetals),
        ("total germanium", InorganicsMinorMetals),
        ("germanium, dissolved", InorganicsMinorMetals),
        ("germanium, total", InorganicsMinorMetals),
        ("germanium, total recoverable", InorganicsMinorMetals),
        ("total recoverable germanium", InorganicsMinorMetals),
        ("germanium, suspended", InorganicsMinorMetals),
        ("gold", InorganicsMinorMetals),
        ("dissolved gold", InorganicsMinorMetals),
        ("total gold", InorganicsMinorMetals),
        ("gold, dissolved", InorganicsMinorMetals),
        ("gold, total", InorganicsMinorMetals),
        ("gold, total recoverable", InorganicsMinorMetals),
        ("total recoverable gold", InorganicsMinorMetals),
        ("gold, suspended", InorganicsMinorMetals),
        ("iron", InorganicsMinorMetals),
        ("dissolved iron", InorganicsMinorMetals),
        ("total iron", InorganicsMinorMetals),
        ("iron, dissolved", InorganicsMinorMetals),
        ("iron, total", InorganicsMinorMetals),
        ("iron, total recoverable", InorganicsMinorMetals),
        ("total recoverable iron", InorganicsMinorMetals),
        ("iron, suspended", InorganicsMinorMetals),
        ("ferrous iron", InorganicsMinorMetals),
        ("dissolved ferrous iron", InorganicsMinorMetals),
        ("total ferrous iron", InorganicsMinorMetals),
        ("ferrous iron, dissolved", InorganicsMinorMetals),
        ("ferrous iron, total", InorganicsMinorMetals),
        ("ferrous iron, total recoverable", InorganicsMinorMetals),
        ("total recoverable ferrous iron", InorganicsMinorMetals),
        ("ferrous iron, suspended", InorganicsMinorMetals),
        ("iron, ferrous", InorganicsMinorMetals),
        ("dissolved iron, ferrous", InorganicsMinorMetals),
        ("total iron, ferrous", InorganicsMinorMetals),
        ("iron, ferrous, dissolved", InorganicsMinorMetals),
        ("iron, ferrous, total", InorganicsMinorMetals),
        ("iron, ferrous, total recoverable", InorganicsMinorMetals),
        ("total recoverable iron, ferrous", InorganicsMinorMetals),
        ("iron, ferrous, suspended", InorganicsMinorMetals),
        ("lanthanum", InorganicsMinorMetals),
        ("dissolved lanthanum", InorganicsMinorMetals),
        ("total lanthanum", InorganicsMinorMetals),
        ("lanthanum, dissolved", InorganicsMinorMetals),
        ("lanthanum, total", InorganicsMinorMetals),
        ("lanthanum, total recoverable", InorganicsMinorMetals),
        ("total recoverable lanthanum", InorganicsMinorMetals),
        ("lanthanum, suspended", InorganicsMinorMetals),
        ("lead", InorganicsMinorMetals),
        ("dissolved lead", InorganicsMinorMetals),
        ("total lead", InorganicsMinorMetals),
        ("lead, dissolved", InorganicsMinorMetals),
        ("lead, total", InorganicsMinorMetals),
        ("lead, total recoverable", InorganicsMinorMetals),
        ("total recoverable lead", InorganicsMinorMetals),
        ("lead, suspended", InorganicsMinorMetals),
        ("lithium", InorganicsMinorMetals),
        ("dissolved lithium", InorganicsMinorMetals),
        ("total lithium", InorganicsMinorMetals),
        ("lithium, dissolved", InorganicsMinorMetals),
        ("lithium, total", InorganicsMinorMetals),
        ("lithium, total recoverable", InorganicsMinorMetals),
        ("total recoverable lithium", InorganicsMinorMetals),
        ("lithium, suspended", InorganicsMinorMetals),
        ("manganese", InorganicsMinorMetals),
        ("dissolved manganese", InorganicsMinorMetals),
        ("total manganese", InorganicsMinorMetals),
        ("manganese, dissolved", InorganicsMinorMetals),
        ("manganese, total", InorganicsMinorMetals),
        ("manganese, total recoverable", InorganicsMinorMetals),
        ("total recoverable manganese", InorganicsMinorMetals),
        ("manganese, suspended", InorganicsMinorMetals),
        ("mercury", InorganicsMinorMetals),
        ("dissolved mercury", InorganicsMinorMetals),
        ("total mercury", InorganicsMinorMetals),
        ("mercury, dissolved", InorganicsMinorMetals),
        ("mercury, total", InorganicsMinorMetals),
        ("mercury, total recoverable", InorganicsMinorMetals),
        ("total recoverable mercury", InorganicsMinorMetals),
        ("mercury, suspended", InorganicsMinorMetals),
        ("methylmercury", InorganicsMinorMetals),
        ("dissolved methylmercury", InorganicsMinorMetals),
        ("total methylmercury", InorganicsMinorMetals),
        ("methylmercury, dissolved", InorganicsMinorMetals),
        ("methylmercury, total", InorganicsMinorMetals),
        ("methylmercury, total recoverable", InorganicsMinorMetals),
        ("total recoverable methylmercury", InorganicsMinorMetals),
        ("methylmercury, suspended", InorganicsMinorMetals),
        ("molybdenum", InorganicsMinorMetals),
        ("dissolved molybdenum", InorganicsMinorMetals),
        ("total molybdenum", InorganicsMinorMetals),
        ("molybdenum, dissolved", InorganicsMinorMetals),
        ("molybdenum, total", InorganicsMinorMetals),
        ("molybdenum, total recoverable", InorganicsMinorMetals),
        ("total recoverable molybdenum", InorganicsMinorMetals),
        ("molybdenum, suspended", InorganicsMinorMetals),
        ("nickel", InorganicsMinorMetals),
        ("dissolved nickel", InorganicsMinorMetals),
        ("total nickel", InorganicsMinorMetals),
        ("nickel, dissolved", InorganicsMinorMetals),
        ("nickel, total", InorganicsMinorMetals),
        ("nickel, total recoverable", InorganicsMinorMetals),
        ("total recoverable nickel", InorganicsMinorMetals),
        ("nickel, suspended", InorganicsMinorMetals),
        ("niobium", InorganicsMinorMetals),
        ("dissolved niobium", InorganicsMinorMetals),
        ("total niobium", InorganicsMinorMetals),
        ("niobium, dissolved", InorganicsMinorMetals),
        ("niobium, total", InorganicsMinorMetals),
        ("niobium, total recoverable", InorganicsMinorMetals),
        ("total recoverable niobium", InorganicsMinorMetals),
        ("niobium, suspended", InorganicsMinorMetals),
        ("palladium", InorganicsMinorMetals),
        ("dissolved palladium", InorganicsMinorMetals),
        ("total palladium", InorganicsMinorMetals),
        ("palladium, dissolved", InorganicsMinorMetals),
        ("palladium, total", InorganicsMinorMetals),
        ("palladium, total recoverable", InorganicsMinorMetals),
        ("total recoverable palladium", InorganicsMinorMetals),
        ("palladium, suspended", InorganicsMinorMetals),
        ("platinum", InorganicsMinorMetals),
        ("dissolved platinum", InorganicsMinorMetals),
        ("total platinum", InorganicsMinorMetals),
        ("platinum, dissolved", InorganicsMinorMetals),
        ("platinum, total", InorganicsMinorMetals),
        ("platinum, total recoverable", InorganicsMinorMetals),
        ("total recoverable platinum", InorganicsMinorMetals),
        ("platinum, suspended", InorganicsMinorMetals),
        ("rubidium", InorganicsMinorMetals),
        ("dissolved rubidium", InorganicsMinorMetals),
        ("total rubidium", InorganicsMinorMetals),
        ("rubidium, dissolved", InorganicsMinorMetals),
        ("rubidium, total", InorganicsMinorMetals),
        ("rubidium, total recoverable", InorganicsMinorMetals),
        ("total recoverable rubidium", InorganicsMinorMetals),
        ("rubidium, suspended", InorganicsMinorMetals),
        ("scandium", InorganicsMinorMetals),
        ("dissolved scandium", InorganicsMinorMetals),
        ("total scandium", InorganicsMinorMetals),
        ("scandium, dissolved", InorganicsMinorMetals),
        ("scandium, total", InorganicsMinorMetals),
        ("scandium, total recoverable", InorganicsMinorMetals),
        ("total recoverable scandium", InorganicsMinorMetals),
        ("scandium, suspended", InorganicsMinorMetals),
        ("silver", InorganicsMinorMetals),
        ("dissolved silver", InorganicsMinorMetals),
        ("total silver", InorganicsMinorMetals),
        ("silver, dissolved", InorganicsMinorMetals),
        ("silver, total", InorganicsMinorMetals),
        ("silver, total recoverable", InorganicsMinorMetals),
        ("total recoverable silver", InorganicsMinorMetals),
        ("silver, suspended", InorganicsMinorMetals),
        ("strontium", InorganicsMinorMetals),
        ("dissolved strontium", InorganicsMinorMetals),
        ("total strontium", InorganicsMinorMetals),
        ("strontium, dissolved", InorganicsMinorMetals),
        ("strontium, total", InorganicsMinorMetals),
        ("strontium, total recoverable", InorganicsMinorMetals),
        ("total recoverable strontium", InorganicsMinorMetals),
        ("strontium, suspended", InorganicsMinorMetals),
        ("tantalum", InorganicsMinorMetals),
        ("dissolved tantalum", InorganicsMinorMetals),
        ("total tantalum", InorganicsMinorMetals),
        ("tantalum, dissolved", InorganicsMinorMetals),
        ("tantalum, total", InorganicsMinorMetals),
        ("tantalum, total recoverable", InorganicsMinorMetals),
        ("total recoverable tantalum", InorganicsMinorMetals),
        ("tantalum, suspended", InorganicsMinorMetals),
        ("tellurium", InorganicsMinorMetals),
        ("dissolved tellurium", InorganicsMinorMetals),
        ("total tellurium", InorganicsMinorMetals),
        ("tellurium, dissolved", InorganicsMinorMetals),
        ("tellurium, total", InorganicsMinorMetals),
        ("tellurium, total recoverable", InorganicsMinorMetals),
        ("total recoverable tellurium", InorganicsMinorMetals),
        ("tellurium, suspended", InorganicsMinorMetals),
        ("thallium", InorganicsMinorMetals),
        ("dissolved thallium", InorganicsMinorMetals),
        ("total thallium", InorganicsMinorMetals),
        ("thallium, dissolved", InorganicsMinorMetals),
        ("thallium, total", InorganicsMinorMetals),
        ("thallium, total recoverable", InorganicsMinorMetals),
        ("total recoverable thallium", InorganicsMinorMetals),
        ("thallium, suspended", InorganicsMinorMetals),
        ("thorium", InorganicsMinorMetals),
        ("dissolved thorium", InorganicsMinorMetals),
        ("total thorium", InorganicsMinorMetals),
        ("thorium, dissolved", InorganicsMinorMetals),
        ("thorium, total", InorganicsMinorMetals),
        ("thorium, total recoverable", InorganicsMinorMetals),
        ("total recoverable thorium", InorganicsMinorMetals),
        ("thorium, suspended", InorganicsMinorMetals),
        ("tin", InorganicsMinorMetals),
        ("dissolved tin", InorganicsMinorMetals),
        ("total tin", InorganicsMinorMetals),
        ("tin, dissolved", InorganicsMinorMetals),
        ("tin, total", InorganicsMinorMetals),
        ("tin, total recoverable", InorganicsMinorMetals),
        ("total recoverable tin", InorganicsMinorMetals),
        ("tin, suspended", InorganicsMinorMetals),
        ("titanium", InorganicsMinorMetals),
        ("dissolved titanium", InorganicsMinorMetals),
        ("total titanium", InorganicsMinorMetals),
        ("titanium, dissolved", InorganicsMinorMetals),
        ("titanium, total", InorganicsMinorMetals),
        ("titanium, total recoverable", InorganicsMinorMetals),
        ("total recoverable titanium", InorganicsMinorMetals),
        ("titanium, suspended", InorganicsMinorMetals),
        ("tungsten", InorganicsMinorMetals),
        ("dissolved tungsten", InorganicsMinorMetals),
        ("total tungsten", InorganicsMinorMetals),
        ("tungsten, dissolved", InorganicsMinorMetals),
        ("tungsten, total", InorganicsMinorMetals),
        ("tungsten, total recoverable", InorganicsMinorMetals),
        ("total recoverable tungsten", InorganicsMinorMetals),
        ("tungsten, suspended", InorganicsMinorMetals),
        ("uranium", InorganicsMinorMetals),
        ("dissolved uranium", InorganicsMinorMetals),
        ("total uranium", InorganicsMinorMetals),
        ("uranium, dissolved", InorganicsMinorMetals),
        ("uranium, total", InorganicsMinorMetals),
        ("uranium, total recoverable", InorganicsMinorMetals),
        ("total recoverable uranium", InorganicsMinorMetals),
        ("uranium, suspended", InorganicsMinorMetals),
        ("uranium, natural", InorganicsMinorMetals),
        ("dissolved uranium, natural", InorganicsMinorMetals),
        ("total uranium, natural", InorganicsMinorMetals),
        ("uranium, natural, dissolved", InorganicsMinorMetals),
        ("uranium, natural, total", InorganicsMinorMetals),
        ("uranium, natural, total recoverable", InorganicsMinorMetals),
        ("total recoverable uranium, natural", InorganicsMinorMetals),
        ("uranium, natural, suspended", InorganicsMinorMetals),
        ("vanadium", InorganicsMinorMetals),
        ("dissolved vanadium", InorganicsMinorMetals),
        ("total vanadium", InorganicsMinorMetals),
        ("vanadium, dissolved", InorganicsMinorMetals),
        ("vanadium, total", InorganicsMinorMetals),
        ("vanadium, total recoverable", InorganicsMinorMetals),
        ("total recoverable vanadium", InorganicsMinorMetals),
        ("vanadium, suspended", InorganicsMinorMetals),
        ("yttrium", InorganicsMinorMetals),
        ("dissolved yttrium", InorganicsMinorMetals),
        ("total yttrium", InorganicsMinorMetals),
        ("yttrium, dissolved", InorganicsMinorMetals),
        ("yttrium, total", InorganicsMinorMetals),
        ("yttrium, total recoverable", InorganicsMinorMetals),
        ("total recoverable yttrium", InorganicsMinorMetals),
        ("yttrium, suspended", InorganicsMinorMetals),
        ("zinc", InorganicsMinorMetals),
        ("dissolved zinc", InorganicsMinorMetals),
        ("total zinc", InorganicsMinorMetals),
        ("zinc, dissolved", InorganicsMinorMetals),
        ("zinc, total", InorganicsMinorMetals),
        ("zinc, total recoverable", InorganicsMinorMetals),
        ("total recoverable zinc", InorganicsMinorMetals),
        ("zinc, suspended", InorganicsMinorMetals),
        ("zirconium", InorganicsMinorMetals),
        ("dissolved zirconium", InorganicsMinorMetals),
        ("total zirconium", InorganicsMinorMetals),
        ("zirconium, dissolved", InorganicsMinorMetals),
        ("zirconium, total", InorganicsMinorMetals),
        ("zirconium, total recoverable", InorganicsMinorMetals),
        ("total recoverable zirconium", InorganicsMinorMetals),
        ("zirconium, suspended", InorganicsMinorMetals),
        ("rare earth elements", InorganicsMinorMetals),
        ("dissolved rare earth elements", InorganicsMinorMetals),
        ("total rare earth elements", InorganicsMinorMetals),
        ("rare earth elements, dissolved", InorganicsMinorMetals),
        ("rare earth elements, total", InorganicsMinorMetals),
        ("rare earth elements, total recoverable", InorganicsMinorMetals),
        ("total recoverable rare earth elements", InorganicsMinorMetals),
        ("rare earth elements, suspended", InorganicsMinorMetals),
        ("neodymium", InorganicsMinorMetals),
        ("dissolved neodymium", InorganicsMinorMetals),
        ("total neodymium", InorganicsMinorMetals),
        ("neodymium, dissolved", InorganicsMinorMetals),
        ("neodymium, total", InorganicsMinorMetals),
        ("neodymium, total recoverable", InorganicsMinorMetals),
        ("total recoverable neodymium", InorganicsMinorMetals),
        ("neodymium, suspended", InorganicsMinorMetals),
        ("europium", InorganicsMinorMetals),
        ("dissolved europium", InorganicsMinorMetals),
        ("total europium", InorganicsMinorMetals),
        ("europium, dissolved", InorganicsMinorMetals),
        ("europium, total", InorganicsMinorMetals),
        ("europium, total recoverable", InorganicsMinorMetals),
        ("total recoverable europium", InorganicsMinorMetals),
        ("europium, suspended", InorganicsMinorMetals),
        ("samarium", InorganicsMinorMetals),
        ("dissolved samarium", InorganicsMinorMetals),
        ("total samarium", InorganicsMinorMetals),
        ("samarium, dissolved", InorganicsMinorMetals),
        ("samarium, total", InorganicsMinorMetals),
        ("samarium, total recoverable", InorganicsMinorMetals),
        ("total recoverable samarium", InorganicsMinorMetals),
        ("samarium, suspended", InorganicsMinorMetals),
        ("dysprosium", InorganicsMinorMetals),
        ("dissolved dysprosium", InorganicsMinorMetals),
        ("total dysprosium", InorganicsMinorMetals),
        ("dysprosium, dissolved", InorganicsMinorMetals),
        ("dysprosium, total", InorganicsMinorMetals),
        ("dysprosium, total recoverable", InorganicsMinorMetals),
        ("total recoverable dysprosium", InorganicsMinorMetals),
        ("dysprosium, suspended", InorganicsMinorMetals),
        ("gadolinium", InorganicsMinorMetals),
        ("dissolved gadolinium", InorganicsMinorMetals),
        ("total gadolinium", InorganicsMinorMetals),
        ("gadolinium, dissolved", InorganicsMinorMetals),
        ("gadolinium, total", InorganicsMinorMetals),
        ("gadolinium, total recoverable", InorganicsMinorMetals),
        ("total recoverable gadolinium", InorganicsMinorMetals),
        ("gadolinium, suspended", InorganicsMinorMetals),
        ("praseodymium", InorganicsMinorMetals),
        ("dissolved praseodymium", InorganicsMinorMetals),
        ("total praseodymium", InorganicsMinorMetals),
        ("praseodymium, dissolved", InorganicsMinorMetals),
        ("praseodymium, total", InorganicsMinorMetals),
        ("praseodymium, total recoverable", InorganicsMinorMetals),
        ("total recoverable praseodymium", InorganicsMinorMetals),
        ("praseodymium, suspended", InorganicsMinorMetals),
        ("ytterbium", InorganicsMinorMetals),
        ("dissolved ytterbium", InorganicsMinorMetals),
        ("total ytterbium", InorganicsMinorMetals),
        ("ytterbium, dissolved", InorganicsMinorMetals),
        ("ytterbium, total", InorganicsMinorMetals),
        ("ytterbium, total recoverable", InorganicsMinorMetals),
        ("total recoverable ytterbium", InorganicsMinorMetals),
        ("ytterbium, suspended", InorganicsMinorMetals),
        ("erbium", InorganicsMinorMetals),
        ("dissolved erbium", InorganicsMinorMetals),
        ("total erbium", InorganicsMinorMetals),
        ("erbium, dissolved", InorganicsMinorMetals),
        ("erbium, total", InorganicsMinorMetals),
        ("erbium, total recoverable", InorganicsMinorMetals),
        ("total recoverable erbium", InorganicsMinorMetals),
        ("erbium, suspended", InorganicsMinorMetals),
        ("holmium", InorganicsMinorMetals),
        ("dissolved holmium", InorganicsMinorMetals),
        ("total holmium", InorganicsMinorMetals),
        ("holmium, dissolved", InorganicsMinorMetals),
        ("holmium, total", InorganicsMinorMetals),
        ("holmium, total recoverable", InorganicsMinorMetals),
        ("total recoverable holmium", InorganicsMinorMetals),
        ("holmium, suspended", InorganicsMinorMetals),
        ("lutetium", InorganicsMinorMetals),
        ("dissolved lutetium", InorganicsMinorMetals),
        ("total lutetium", InorganicsMinorMetals),
        ("lutetium, dissolved", InorganicsMinorMetals),
        ("lutetium, total", InorganicsMinorMetals),
        ("lutetium, total recoverable", InorganicsMinorMetals),
        ("total recoverable lutetium", InorganicsMinorMetals),
        ("lutetium, suspended", InorganicsMinorMetals),
        ("terbium", InorganicsMinorMetals),
        ("dissolved terbium", InorganicsMinorMetals),
        ("total terbium", InorganicsMinorMetals),
        ("terbium, dissolved", InorganicsMinorMetals),
        ("terbium, total", InorganicsMinorMetals),
        ("terbium, total recoverable", InorganicsMinorMetals),
        ("total recoverable terbium", InorganicsMinorMetals),
        ("terbium, suspended", InorganicsMinorMetals),
        ("thulium", InorganicsMinorMetals),
        ("dissolved thulium", InorganicsMinorMetals),
        ("total thulium", InorganicsMinorMetals),
        ("thulium, dissolved", InorganicsMinorMetals),
        ("thulium, total", InorganicsMinorMetals),
        ("thulium, total recoverable", InorganicsMinorMetals),
        ("total recoverable thulium", InorganicsMinorMetals),
        ("thulium, suspended", InorganicsMinorMetals),
        ("hafnium", InorganicsMinorMetals),
        ("dissolved hafnium", InorganicsMinorMetals),
        ("total hafnium", InorganicsMinorMetals),
        ("hafnium, dissolved", InorganicsMinorMetals),
        ("hafnium, total", InorganicsMinorMetals),
        ("hafnium, total recoverable", InorganicsMinorMetals),
        ("total recoverable hafnium", InorganicsMinorMetals),
        ("hafnium, suspended", InorganicsMinorMetals),
        ("rhenium", InorganicsMinorMetals),
        ("dissolved rhenium", InorganicsMinorMetals),
        ("total rhenium", InorganicsMinorMetals),
        ("rhenium, dissolved", InorganicsMinorMetals),
        ("rhenium, total", InorganicsMinorMetals),
        ("rhenium, total recoverable", InorganicsMinorMetals),
        ("total recoverable rhenium", InorganicsMinorMetals),
        ("rhenium, suspended", InorganicsMinorMetals),
        ("iridium", InorganicsMinorMetals),
        ("dissolved iridium", InorganicsMinorMetals),
        ("total iridium", InorganicsMinorMetals),
        ("iridium, dissolved", InorganicsMinorMetals),
        ("iridium, total", InorganicsMinorMetals),
        ("iridium, total recoverable", InorganicsMinorMetals),
        ("total recoverable iridium", InorganicsMinorMetals),
        ("iridium, suspended", InorganicsMinorMetals),
        ("osmium", InorganicsMinorMetals),
        ("dissolved osmium", InorganicsMinorMetals),
        ("total osmium", InorganicsMinorMetals),
        ("osmium, dissolved", InorganicsMinorMetals),
        ("osmium, total", InorganicsMinorMetals),
        ("osmium, total recoverable", InorganicsMinorMetals),
        ("total recoverable osmium", InorganicsMinorMetals),
        ("osmium, suspended", InorganicsMinorMetals),
        ("ruthenium", InorganicsMinorMetals),
        ("dissolved ruthenium", InorganicsMinorMetals),
        ("total ruthenium", InorganicsMinorMetals),
        ("ruthenium, dissolved", InorganicsMinorMetals),
        ("ruthenium, total", InorganicsMinorMetals),
        ("ruthenium, total recoverable", InorganicsMinorMetals),
        ("total recoverable ruthenium", InorganicsMinorMetals),
        ("ruthenium, suspended", InorganicsMinorMetals),
        ("rhodium", InorganicsMinorMetals),
        ("dissolved rhodium", InorganicsMinorMetals),
        ("total rhodium", InorganicsMinorMetals),
        ("rhodium, dissolved", InorganicsMinorMetals),
        ("rhodium, total", InorganicsMinorMetals),
        ("rhodium, total recoverable", InorganicsMinorMetals),
        ("total recoverable rhodium", InorganicsMinorMetals),
        ("rhodium, suspended", InorganicsMinorMetals),
        ("indium", InorganicsMinorMetals),
        ("dissolved indium", InorganicsMinorMetals),
        ("total indium", InorganicsMinorMetals),
        ("indium, dissolved", InorganicsMinorMetals),
        ("indium, total", InorganicsMinorMetals),
        ("indium, total recoverable", InorganicsMinorMetals),
        ("total recoverable indium", InorganicsMinorMetals),
        ("indium, suspended", InorganicsMinorMetals),
        // inorganics, minor, non-metals
        ("boron", InorganicsMinorNonMetals),
        ("dissolved boron", InorganicsMinorNonMetals),
        ("total boron", InorganicsMinorNonMetals),
        ("boron, dissolved", InorganicsMinorNonMetals),
        ("boron, total", InorganicsMinorNonMetals),
        ("boron, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable boron", InorganicsMinorNonMetals),
        ("boron, suspended", InorganicsMinorNonMetals),
        ("bromide", InorganicsMinorNonMetals),
        ("dissolved bromide", InorganicsMinorNonMetals),
        ("total bromide", InorganicsMinorNonMetals),
        ("bromide, dissolved", InorganicsMinorNonMetals),
        ("bromide, total", InorganicsMinorNonMetals),
        ("bromide, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable bromide", InorganicsMinorNonMetals),
        ("bromide, suspended", InorganicsMinorNonMetals),
        ("bromine", InorganicsMinorNonMetals),
        ("dissolved bromine", InorganicsMinorNonMetals),
        ("total bromine", InorganicsMinorNonMetals),
        ("bromine, dissolved", InorganicsMinorNonMetals),
        ("bromine, total", InorganicsMinorNonMetals),
        ("bromine, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable bromine", InorganicsMinorNonMetals),
        ("bromine, suspended", InorganicsMinorNonMetals),
        ("cyanide", InorganicsMinorNonMetals),
        ("dissolved cyanide", InorganicsMinorNonMetals),
        ("total cyanide", InorganicsMinorNonMetals),
        ("cyanide, dissolved", InorganicsMinorNonMetals),
        ("cyanide, total", InorganicsMinorNonMetals),
        ("cyanide, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable cyanide", InorganicsMinorNonMetals),
        ("cyanide, suspended", InorganicsMinorNonMetals),
        ("iodide", InorganicsMinorNonMetals),
        ("dissolved iodide", InorganicsMinorNonMetals),
        ("total iodide", InorganicsMinorNonMetals),
        ("iodide, dissolved", InorganicsMinorNonMetals),
        ("iodide, total", InorganicsMinorNonMetals),
        ("iodide, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable iodide", InorganicsMinorNonMetals),
        ("iodide, suspended", InorganicsMinorNonMetals),
        ("iodine", InorganicsMinorNonMetals),
        ("dissolved iodine", InorganicsMinorNonMetals),
        ("total iodine", InorganicsMinorNonMetals),
        ("iodine, dissolved", InorganicsMinorNonMetals),
        ("iodine, total", InorganicsMinorNonMetals),
        ("iodine, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable iodine", InorganicsMinorNonMetals),
        ("iodine, suspended", InorganicsMinorNonMetals),
        ("selenium", InorganicsMinorNonMetals),
        ("dissolved selenium", InorganicsMinorNonMetals),
        ("total selenium", InorganicsMinorNonMetals),
        ("selenium, dissolved", InorganicsMinorNonMetals),
        ("selenium, total", InorganicsMinorNonMetals),
        ("selenium, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable selenium", InorganicsMinorNonMetals),
        ("selenium, suspended", InorganicsMinorNonMetals),
        ("sulfide", InorganicsMinorNonMetals),
        ("dissolved sulfide", InorganicsMinorNonMetals),
        ("total sulfide", InorganicsMinorNonMetals),
        ("sulfide, dissolved", InorganicsMinorNonMetals),
        ("sulfide, total", InorganicsMinorNonMetals),
        ("sulfide, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable sulfide", InorganicsMinorNonMetals),
        ("sulfide, suspended", InorganicsMinorNonMetals),
        ("hydrogen sulfide", InorganicsMinorNonMetals),
        ("dissolved hydrogen sulfide", InorganicsMinorNonMetals),
        ("total hydrogen sulfide", InorganicsMinorNonMetals),
        ("hydrogen sulfide, dissolved", InorganicsMinorNonMetals),
        ("hydrogen sulfide, total", InorganicsMinorNonMetals),
        ("hydrogen sulfide, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable hydrogen sulfide", InorganicsMinorNonMetals),
        ("hydrogen sulfide, suspended", InorganicsMinorNonMetals),
        ("chlorine", InorganicsMinorNonMetals),
        ("dissolved chlorine", InorganicsMinorNonMetals),
        ("total chlorine", InorganicsMinorNonMetals),
        ("chlorine, dissolved", InorganicsMinorNonMetals),
        ("chlorine, total", InorganicsMinorNonMetals),
        ("chlorine, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable chlorine", InorganicsMinorNonMetals),
        ("chlorine, suspended", InorganicsMinorNonMetals),
        ("total residual chlorine", InorganicsMinorNonMetals),
        ("dissolved total residual chlorine", InorganicsMinorNonMetals),
        ("total total residual chlorine", InorganicsMinorNonMetals),
        ("total residual chlorine, dissolved", InorganicsMinorNonMetals),
        ("total residual chlorine, total", InorganicsMinorNonMetals),
        ("total residual chlorine, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable total residual chlorine", InorganicsMinorNonMetals),
        ("total residual chlorine, suspended", InorganicsMinorNonMetals),
        ("chlorite", InorganicsMinorNonMetals),
        ("dissolved chlorite", InorganicsMinorNonMetals),
        ("total chlorite", InorganicsMinorNonMetals),
        ("chlorite, dissolved", InorganicsMinorNonMetals),
        ("chlorite, total", InorganicsMinorNonMetals),
        ("chlorite, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable chlorite", InorganicsMinorNonMetals),
        ("chlorite, suspended", InorganicsMinorNonMetals),
        ("chlorate", InorganicsMinorNonMetals),
        ("dissolved chlorate", InorganicsMinorNonMetals),
        ("total chlorate", InorganicsMinorNonMetals),
        ("chlorate, dissolved", InorganicsMinorNonMetals),
        ("chlorate, total", InorganicsMinorNonMetals),
        ("chlorate, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable chlorate", InorganicsMinorNonMetals),
        ("chlorate, suspended", InorganicsMinorNonMetals),
        ("bromate", InorganicsMinorNonMetals),
        ("dissolved bromate", InorganicsMinorNonMetals),
        ("total bromate", InorganicsMinorNonMetals),
        ("bromate, dissolved", InorganicsMinorNonMetals),
        ("bromate, total", InorganicsMinorNonMetals),
        ("bromate, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable bromate", InorganicsMinorNonMetals),
        ("bromate, suspended", InorganicsMinorNonMetals),
        ("perchlorate", InorganicsMinorNonMetals),
        ("dissolved perchlorate", InorganicsMinorNonMetals),
        ("total perchlorate", InorganicsMinorNonMetals),
        ("perchlorate, dissolved", InorganicsMinorNonMetals),
        ("perchlorate, total", InorganicsMinorNonMetals),
        ("perchlorate, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable perchlorate", InorganicsMinorNonMetals),
        ("perchlorate, suspended", InorganicsMinorNonMetals),
        ("thiocyanate", InorganicsMinorNonMetals),
        ("dissolved thiocyanate", InorganicsMinorNonMetals),
        ("total thiocyanate", InorganicsMinorNonMetals),
        ("thiocyanate, dissolved", InorganicsMinorNonMetals),
        ("thiocyanate, total", InorganicsMinorNonMetals),
        ("thiocyanate, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable thiocyanate", InorganicsMinorNonMetals),
        ("thiocyanate, suspended", InorganicsMinorNonMetals),
        ("sulfite", InorganicsMinorNonMetals),
        ("dissolved sulfite", InorganicsMinorNonMetals),
        ("total sulfite", InorganicsMinorNonMetals),
        ("sulfite, dissolved", InorganicsMinorNonMetals),
        ("sulfite, total", InorganicsMinorNonMetals),
        ("sulfite, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable sulfite", InorganicsMinorNonMetals),
        ("sulfite, suspended", InorganicsMinorNonMetals),
        ("arsenate", InorganicsMinorNonMetals),
        ("dissolved arsenate", InorganicsMinorNonMetals),
        ("total arsenate", InorganicsMinorNonMetals),
        ("arsenate, dissolved", InorganicsMinorNonMetals),
        ("arsenate, total", InorganicsMinorNonMetals),
        ("arsenate, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable arsenate", InorganicsMinorNonMetals),
        ("arsenate, suspended", InorganicsMinorNonMetals),
        ("arsenite", InorganicsMinorNonMetals),
        ("dissolved arsenite", InorganicsMinorNonMetals),
        ("total arsenite", InorganicsMinorNonMetals),
        ("arsenite, dissolved", InorganicsMinorNonMetals),
        ("arsenite, total", InorganicsMinorNonMetals),
        ("arsenite, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable arsenite", InorganicsMinorNonMetals),
        ("arsenite, suspended", InorganicsMinorNonMetals),
        ("selenate", InorganicsMinorNonMetals),
        ("dissolved selenate", InorganicsMinorNonMetals),
        ("total selenate", InorganicsMinorNonMetals),
        ("selenate, dissolved", InorganicsMinorNonMetals),
        ("selenate, total", InorganicsMinorNonMetals),
        ("selenate, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable selenate", InorganicsMinorNonMetals),
        ("selenate, suspended", InorganicsMinorNonMetals),
        ("selenite", InorganicsMinorNonMetals),
        ("dissolved selenite", InorganicsMinorNonMetals),
        ("total selenite", InorganicsMinorNonMetals),
        ("selenite, dissolved", InorganicsMinorNonMetals),
        ("selenite, total", InorganicsMinorNonMetals),
        ("selenite, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable selenite", InorganicsMinorNonMetals),
        ("selenite, suspended", InorganicsMinorNonMetals),
        ("asbestos", InorganicsMinorNonMetals),
        ("dissolved asbestos", InorganicsMinorNonMetals),
        ("total asbestos", InorganicsMinorNonMetals),
        ("asbestos, dissolved", InorganicsMinorNonMetals),
        ("asbestos, total", InorganicsMinorNonMetals),
        ("asbestos, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable asbestos", InorganicsMinorNonMetals),
        ("asbestos, suspended", InorganicsMinorNonMetals),
        ("fluorine", InorganicsMinorNonMetals),
        ("dissolved fluorine", InorganicsMinorNonMetals),
        ("total fluorine", InorganicsMinorNonMetals),
        ("fluorine, dissolved", InorganicsMinorNonMetals),
        ("fluorine, total", InorganicsMinorNonMetals),
        ("fluorine, total recoverable", InorganicsMinorNonMetals),
        ("total recoverable fluorine", InorganicsMinorNonMetals),
        ("fluorine, suspended", InorganicsMinorNonMetals),
        ("free cyanide", InorganicsMinorNonMetals),
        ("cyanides amenable to chlorination (hcn & cn)", InorganicsMinorNonMetals),
        ("chlorine, total residual", InorganicsMinorNonMetals),
        ("free chlorine", InorganicsMinorNonMetals),
        ("combined chlorine", InorganicsMinorNonMetals),
        // nutrient
        ("nitrate", Nutrient),
        ("dissolved nitrate", Nutrient),
        ("total nitrate", Nutrient),
        ("nitrate, dissolved", Nutrient),
        ("nitrate, total", Nutrient),
        ("nitrate, total recoverable", Nutrient),
        ("total recoverable nitrate", Nutrient),
        ("nitrate, suspended", Nutrient),
        ("nitrite", Nutrient),
        ("dissolved nitrite", Nutrient),
        ("total nitrite", Nutrient),
        ("nitrite, dissolved", Nutrient),
        ("nitrite, total", Nutrient),
        ("nitrite, total recoverable", Nutrient),
        ("total recoverable nitrite", Nutrient),
        ("nitrite, suspended", Nutrient),
        ("ammonia", Nutrient),
        ("dissolved ammonia", Nutrient),
        ("total ammonia", Nutrient),
        ("ammonia, dissolved", Nutrient),
        ("ammonia, total", Nutrient),
        ("ammonia, total recoverable", Nutrient),
        ("total recoverable ammonia", Nutrient),
        ("ammonia, suspended", Nutrient),
        ("ammonium", Nutrient),
        ("dissolved ammonium", Nutrient),
        ("total ammonium", Nutrient),
        ("ammonium, dissolved", Nutrient),
        ("ammonium, total", Nutrient),
        ("ammonium, total recoverable", Nutrient),
        ("total recoverable ammonium", Nutrient),
        ("ammonium, suspended", Nutrient),
        ("phosphate", Nutrient),
        ("dissolved phosphate", Nutrient),
        ("total phosphate", Nutrient),
        ("phosphate, dissolved", Nutrient),
        ("phosphate, total", Nutrient),
        ("phosphate, total recoverable", Nutrient),
        ("total recoverable phosphate", Nutrient),
        ("phosphate, suspended", Nutrient),
        ("phosphorus", Nutrient),
        ("dissolved phosphorus", Nutrient),
        ("total phosphorus", Nutrient),
        ("phosphorus, dissolved", Nutrient),
        ("phosphorus, total", Nutrient),
        ("phosphorus, total recoverable", Nutrient),
        ("total recoverable phosphorus", Nutrient),
        ("phosphorus, suspended", Nutrient),
        ("orthophosphate", Nutrient),
        ("dissolved orthophosphate", Nutrient),
        ("total orthophosphate", Nutrient),
        ("orthophosphate, dissolved", Nutrient),
        ("orthophosphate, total", Nutrient),
        ("orthophosphate, total recoverable", Nutrient),
        ("total recoverable orthophosphate", Nutrient),
        ("orthophosphate, suspended", Nutrient),
        ("kjeldahl nitrogen", Nutrient),
        ("dissolved kjeldahl nitrogen", Nutrient),
        ("total kjeldahl nitrogen", Nutrient),
        ("kjeldahl nitrogen, dissolved", Nutrient),
        ("kjeldahl nitrogen, total", Nutrient),
        ("kjeldahl nitrogen, total recoverable", Nutrient),
        ("total recoverable kjeldahl nitrogen", Nutrient),
        ("kjeldahl nitrogen, suspended", Nutrient),
        ("organic nitrogen", Nutrient),
        ("dissolved organic nitrogen", Nutrient),
        ("total organic nitrogen", Nutrient),
        ("organic nitrogen, dissolved", Nutrient),
        ("organic nitrogen, total", Nutrient),
        ("organic nitrogen, total recoverable", Nutrient),
        ("total recoverable organic nitrogen", Nutrient),
        ("organic nitrogen, suspended", Nutrient),
        ("nitrogen", Nutrient),
        ("dissolved nitrogen", Nutrient),
        ("total nitrogen", Nutrient),
        ("nitrogen, dissolved", Nutrient),
        ("nitrogen, total", Nutrient),
        ("nitrogen, total recoverable", Nutrient),
        ("total recoverable nitrogen", Nutrient),
        ("nitrogen, suspended", Nutrient),
        ("inorganic nitrogen (nitrate and nitrite)", Nutrient),
        ("dissolved inorganic nitrogen (nitrate and nitrite)", Nutrient),
        ("total inorganic nitrogen (nitrate and nitrite)", Nutrient),
        ("inorganic nitrogen (nitrate and nitrite), dissolved", Nutrient),
        ("inorganic nitrogen (nitrate and nitrite), total", Nutrient),
        ("inorganic nitrogen (nitrate and nitrite), total recoverable", Nutrient),
        ("total recoverable inorganic nitrogen (nitrate and nitrite)", Nutrient),
        ("inorganic nitrogen (nitrate and nitrite), suspended", Nutrient),
        ("nitrate + nitrite", Nutrient),
        ("dissolved nitrate + nitrite", Nutrient),
        ("total nitrate + nitrite", Nutrient),
        ("nitrate + nitrite, dissolved", Nutrient),
        ("nitrate + nitrite, total", Nutrient),
        ("nitrate + nitrite, total recoverable", Nutrient),
        ("total recoverable nitrate + nitrite", Nutrient),
        ("nitrate + nitrite, suspended", Nutrient),
        ("organic phosphorus", Nutrient),
        ("dissolved organic phosphorus", Nutrient),
        ("total organic phosphorus", Nutrient),
        ("organic phosphorus, dissolved", Nutrient),
        ("organic phosphorus, total", Nutrient),
        ("organic phosphorus, total recoverable", Nutrient),
        ("total recoverable organic phosphorus", Nutrient),
        ("organic phosphorus, suspended", Nutrient),
        ("hydrolyzable phosphorus", Nutrient),
        ("dissolved hydrolyzable phosphorus", Nutrient),
        ("total hydrolyzable phosphorus", Nutrient),
        ("hydrolyzable phosphorus, dissolved", Nutrient),
        ("hydrolyzable phosphorus, total", Nutrient),
        ("hydrolyzable phosphorus, total recoverable", Nutrient),
        ("total recoverable hydrolyzable phosphorus", Nutrient),
        ("hydrolyzable phosphorus, suspended", Nutrient),
        ("polyphosphate", Nutrient),
        ("dissolved polyphosphate", Nutrient),
        ("total polyphosphate", Nutrient),
        ("polyphosphate, dissolved", Nutrient),
        ("polyphosphate, total", Nutrient),
        ("polyphosphate, total recoverable", Nutrient),
        ("total recoverable polyphosphate", Nutrient),
        ("polyphosphate, suspended", Nutrient),
        ("no3", Nutrient),
        ("no2", Nutrient),
        ("nh3", Nutrient),
        ("nh4", Nutrient),
        ("po4", Nutrient),
        ("tkn", Nutrient),
        ("nitrate as n", Nutrient),
        ("nitrate-nitrogen", Nutrient),
        ("nitrate nitrogen", Nutrient),
        ("nitrate-n", Nutrient),
        ("nitrogen, nitrate", Nutrient),
        ("nitrite as n", Nutrient),
        ("nitrite-nitrogen", Nutrient),
        ("nitrite nitrogen", Nutrient),
        ("nitrogen, nitrite", Nutrient),
        ("ammonia as n", Nutrient),
        ("ammonia-nitrogen", Nutrient),
        ("ammonia nitrogen", Nutrient),
        ("nitrogen, ammonia", Nutrient),
        ("ammonia and ammonium", Nutrient),
        ("ammonium as n", Nutrient),
        ("unionized ammonia", Nutrient),
        ("ammonia, un-ionized", Nutrient),
        ("nitrate + nitrite as n", Nutrient),
        ("nitrate and nitrite", Nutrient),
        ("nitrate and nitrite as n", Nutrient),
        ("nitrite + nitrate", Nutrient),
        ("nitrate-nitrite", Nutrient),
        ("inorganic nitrogen (nitrate and nitrite) as n", Nutrient),
        ("nitrogen, mixed forms (nh3), (nh4), organic, (no2) and (no3)", Nutrient),
        ("kjeldahl nitrogen (organic n + nh3)", Nutrient),
        ("nitrogen, kjeldahl", Nutrient),
        ("orthophosphate as p", Nutrient),
        ("phosphate as p", Nutrient),
        ("phosphate-phosphorus", Nutrient),
        ("orthophosphate-phosphorus", Nutrient),
        ("ortho-phosphate", Nutrient),
        ("phosphorus, orthophosphate as p", Nutrient),
        ("phosphate, ortho", Nutrient),
        ("soluble reactive phosphorus (srp)", Nutrient),
        ("total particulate phosphorus", Nutrient),
        ("particulate nitrogen", Nutrient),
        ("total particulate nitrogen", Nutrient),
        ("organic carbon", Nutrient),
        ("total organic carbon", Nutrient),
        ("dissolved organic carbon", Nutrient),
        ("inorganic carbon", Nutrient),
        ("total inorganic carbon", Nutrient),
        ("particulate organic carbon", Nutrient),
        ("carbon", Nutrient),
        ("total carbon", Nutrient),
        // organics, pesticide
        ("2,4-d", OrganicsPesticide),
        ("2,4-db", OrganicsPesticide),
        ("2,4,5-t", OrganicsPesticide),
        ("2,4,5-tp (silvex)", OrganicsPesticide),
        ("silvex", OrganicsPesticide),
        ("acetochlor", OrganicsPesticide),
        ("acifluorfen", OrganicsPesticide),
        ("alachlor", OrganicsPesticide),
        ("aldicarb", OrganicsPesticide),
        ("aldicarb sulfone", OrganicsPesticide),
        ("aldicarb sulfoxide", OrganicsPesticide),
        ("aldrin", OrganicsPesticide),
        ("ametryn", OrganicsPesticide),
        ("aminomethylphosphonic acid", OrganicsPesticide),
        ("atrazine", OrganicsPesticide),
        ("azinphos-methyl", OrganicsPesticide),
        ("benfluralin", OrganicsPesticide),
        ("bensulfuron-methyl", OrganicsPesticide),
        ("bentazon", OrganicsPesticide),
        ("bromacil", OrganicsPesticide),
        ("bromoxynil", OrganicsPesticide),
        ("butachlor", OrganicsPesticide),
        ("butylate", OrganicsPesticide),
        ("captan", OrganicsPesticide),
        ("carbaryl", OrganicsPesticide),
        ("carbofuran", OrganicsPesticide),
        ("3-hydroxycarbofuran", OrganicsPesticide),
        ("carboxin", OrganicsPesticide),
        ("chloramben", OrganicsPesticide),
        ("chlordane", OrganicsPesticide),
        ("technical chlordane", OrganicsPesticide),
        ("cis-chlordane", OrganicsPesticide),
        ("trans-chlordane", OrganicsPesticide),
        ("alpha-chlordane", OrganicsPesticide),
        ("gamma-chlordane", OrganicsPesticide),
        ("chlorothalonil", OrganicsPesticide),
        ("chlorpyrifos", OrganicsPesticide),
        ("chlorsulfuron", OrganicsPesticide),
        ("cyanazine", OrganicsPesticide),
        ("cycloate", OrganicsPesticide),
        ("dacthal (dcpa)", OrganicsPesticide),
        ("dcpa", OrganicsPesticide),
        ("dalapon", OrganicsPesticide),
        ("p,p'-ddd", OrganicsPesticide),
        ("p,p'-dde", OrganicsPesticide),
        ("p,p'-ddt", OrganicsPesticide),
        ("o,p'-ddd", OrganicsPesticide),
        ("o,p'-dde", OrganicsPesticide),
        ("o,p'-ddt", OrganicsPesticide),
        ("ddd", OrganicsPesticide),
        ("dde", OrganicsPesticide),
        ("ddt", OrganicsPesticide),
        ("deethylatrazine", OrganicsPesticide),
        ("deisopropylatrazine", OrganicsPesticide),
        ("diazinon", OrganicsPesticide),
        ("dicamba", OrganicsPesticide),
        ("dichlobenil", OrganicsPesticide),
        ("dichlorprop", OrganicsPesticide),
        ("dichlorvos", OrganicsPesticide),
        ("dicofol", OrganicsPesticide),
        ("dieldrin", OrganicsPesticide),
        ("dimethoate", OrganicsPesticide),
        ("dinoseb", OrganicsPesticide),
        ("diphenamid", OrganicsPesticide),
        ("diquat", OrganicsPesticide),
        ("disulfoton", OrganicsPesticide),
        ("diuron", OrganicsPesticide),
        ("endosulfan", OrganicsPesticide),
        ("endosulfan i", OrganicsPesticide),
        ("endosulfan ii", OrganicsPesticide),
        ("endosulfan sulfate", OrganicsPesticide),
        ("endothall", OrganicsPesticide),
        ("endrin", OrganicsPesticide),
        ("endrin aldehyde", OrganicsPesticide),
        ("endrin ketone", OrganicsPesticide),
        ("eptc", OrganicsPesticide),
        ("esfenvalerate", OrganicsPesticide),
        ("ethalfluralin", OrganicsPesticide),
        ("ethoprop", OrganicsPesticide),
        ("fenamiphos", OrganicsPesticide),
        ("fenuron", OrganicsPesticide),
        ("fipronil", OrganicsPesticide),
        ("fluometuron", OrganicsPesticide),
        ("fonofos", OrganicsPesticide),
        ("glyphosate", OrganicsPesticide),
        ("heptachlor", OrganicsPesticide),
        ("heptachlor epoxide", OrganicsPesticide),
        ("hexachlorobenzene", OrganicsPesticide),
        ("hexazinone", OrganicsPesticide),
        ("imazaquin", OrganicsPesticide),
        ("imazethapyr", OrganicsPesticide),
        ("imidacloprid", OrganicsPesticide),
        ("isophorone", OrganicsPesticide),
        ("lindane", OrganicsPesticide),
        ("gamma-bhc", OrganicsPesticide),
        ("alpha-bhc", OrganicsPesticide),
        ("beta-bhc", OrganicsPesticide),
        ("delta-bhc", OrganicsPesticide),
        ("linuron", OrganicsPesticide),
        ("malathion", OrganicsPesticide),
        ("mcpa", OrganicsPesticide),
        ("mcpb", OrganicsPesticide),
        ("metalaxyl", OrganicsPesticide),
        ("methiocarb", OrganicsPesticide),
        ("methomyl", OrganicsPesticide),
        ("methoxychlor", OrganicsPesticide),
        ("methyl parathion", OrganicsPesticide),
        ("metolachlor", OrganicsPesticide),
        ("metribuzin", OrganicsPesticide),
        ("metsulfuron methyl", OrganicsPesticide),
        ("mirex", OrganicsPesticide),
        ("molinate", OrganicsPesticide),
        ("napropamide", OrganicsPesticide),
        ("neburon", OrganicsPesticide),
        ("nicosulfuron", OrganicsPesticide),
        ("norflurazon", OrganicsPesticide),
        ("oryzalin", OrganicsPesticide),
        ("oxamyl", OrganicsPesticide),
        ("oxyfluorfen", OrganicsPesticide),
        ("paraquat", OrganicsPesticide),
        ("parathion", OrganicsPesticide),
        ("pebulate", OrganicsPesticide),
        ("pendimethalin", OrganicsPesticide),
        ("permethrin", OrganicsPesticide),
        ("cis-permethrin", OrganicsPesticide),
        ("phorate", OrganicsPesticide),
        ("picloram", OrganicsPesticide),
        ("prometon", OrganicsPesticide),
        ("prometryn", OrganicsPesticide),
        ("propachlor", OrganicsPesticide),
        ("propanil", OrganicsPesticide),
        ("propargite", OrganicsPesticide),
        ("propazine", OrganicsPesticide),
        ("propham", OrganicsPesticide),
        ("propiconazole", OrganicsPesticide),
        ("propoxur", OrganicsPesticide),
        ("siduron", OrganicsPesticide),
        ("simazine", OrganicsPesticide),
        ("sulfometuron methyl", OrganicsPesticide),
        ("tebuthiuron", OrganicsPesticide),
        ("terbacil", OrganicsPesticide),
        ("terbufos", OrganicsPesticide),
        ("terbuthylazine", OrganicsPesticide),
        ("thiobencarb", OrganicsPesticide),
        ("toxaphene", OrganicsPesticide),
        ("triallate", OrganicsPesticide),
        ("tribenuron-methyl", OrganicsPesticide),
        ("triclopyr", OrganicsPesticide),
        ("trifluralin", OrganicsPesticide),
        ("vernolate", OrganicsPesticide),
        ("pentachlorophenol", OrganicsPesticide),
        ("pcp", OrganicsPesticide),
        ("dinoterb", OrganicsPesticide),
        ("ethion", OrganicsPesticide),
        ("famphur", OrganicsPesticide),
        ("kepone", OrganicsPesticide),
        ("chlordecone", OrganicsPesticide),
        ("oxychlordane", OrganicsPesticide),
        ("nonachlor", OrganicsPesticide),
        ("cis-nonachlor", OrganicsPesticide),
        ("trans-nonachlor", OrganicsPesticide),
        ("2,4-d methyl ester", OrganicsPesticide),
        ("acetochlor esa", OrganicsPesticide),
        ("acetochlor oxa", OrganicsPesticide),
        ("alachlor esa", OrganicsPesticide),
        ("alachlor oxa", OrganicsPesticide),
        ("metolachlor esa", OrganicsPesticide),
        ("metolachlor oxa", OrganicsPesticide),
        ("hydroxyatrazine", OrganicsPesticide),
        ("desulfinylfipronil", OrganicsPesticide),
        ("fipronil sulfide", OrganicsPesticide),
        ("fipronil sulfone", OrganicsPesticide),
        ("azoxystrobin", OrganicsPesticide),
        ("bifenthrin", OrganicsPesticide),
        ("cyfluthrin", OrganicsPesticide),
        ("cypermethrin", OrganicsPesticide),
        ("lambda-cyhalothrin", OrganicsPesticide),
        ("deltamethrin", OrganicsPesticide),
        ("tebuconazole", OrganicsPesticide),
        ("myclobutanil", OrganicsPesticide),
        ("clothianidin", OrganicsPesticide),
        ("thiamethoxam", OrganicsPesticide),
        ("dinotefuran", OrganicsPesticide),
        ("acetamiprid", OrganicsPesticide),
        ("chlorantraniliprole", OrganicsPesticide),
        ("dithiopyr", OrganicsPesticide),
        ("flumetsulam", OrganicsPesticide),
        ("halosulfuron-methyl", OrganicsPesticide),
        ("sulfentrazone", OrganicsPesticide),
        ("fluridone", OrganicsPesticide),
        ("clopyralid", OrganicsPesticide),
        ("aminopyralid", OrganicsPesticide),
        ("2,4-d, dimethylamine salt", OrganicsPesticide),
        ("demeton", OrganicsPesticide),
        ("mevinphos", OrganicsPesticide),
        ("phosmet", OrganicsPesticide),
        ("profenofos", OrganicsPesticide),
        ("tribufos", OrganicsPesticide),
        ("sulprofos", OrganicsPesticide),
        ("coumaphos", OrganicsPesticide),
        ("dimethenamid", OrganicsPesticide),
        ("flufenacet", OrganicsPesticide),
        ("isoxaflutole", OrganicsPesticide),
        ("mesotrione", OrganicsPesticide),
        ("s-ethyl dipropylthiocarbamate", OrganicsPesticide),
        ("carbophenothion", OrganicsPesticide),
        ("pesticides, total", OrganicsPesticide),
        ("organochlorine pesticides", OrganicsPesticide),
        ("organophosphate pesticides", OrganicsPesticide),
        // organics, pcbs
        ("aroclor 1016", OrganicsPcbs),
        ("aroclor 1221", OrganicsPcbs),
        ("aroclor 1232", OrganicsPcbs),
        ("aroclor 1242", OrganicsPcbs),
        ("aroclor 1248", OrganicsPcbs),
        ("aroclor 1254", OrganicsPcbs),
        ("aroclor 1260", OrganicsPcbs),
        ("aroclor 1262", OrganicsPcbs),
        ("aroclor 1268", OrganicsPcbs),
        ("pcbs", OrganicsPcbs),
        ("polychlorinated biphenyls", OrganicsPcbs),
        ("total pcbs", OrganicsPcbs),
        ("pcb-1016", OrganicsPcbs),
        ("pcb-1221", OrganicsPcbs),
        ("pcb-1232", OrganicsPcbs),
        ("pcb-1242", OrganicsPcbs),
        ("pcb-1248", OrganicsPcbs),
        ("pcb-1254", OrganicsPcbs),
        ("pcb-1260", OrganicsPcbs),
        ("pcb, total", OrganicsPcbs),
        ("polychlorinated naphthalenes", OrganicsPcbs),
        ("polybrominated biphenyls", OrganicsPcbs),
        ("polybrominated diphenyl ethers", OrganicsPcbs),
        // organics, volatile
        ("benzene", OrganicsVolatile),
        ("toluene", OrganicsVolatile),
        ("ethylbenzene", OrganicsVolatile),
        ("xylene", OrganicsVolatile),
        ("m-xylene", OrganicsVolatile),
        ("o-xylene", OrganicsVolatile),
        ("p-xylene", OrganicsVolatile),
        ("m,p-xylene", OrganicsVolatile),
        ("xylenes, total", OrganicsVolatile),
        ("btex", OrganicsVolatile),
        ("styrene", OrganicsVolatile),
        ("chlorobenzene", OrganicsVolatile),
        ("1,2-dichlorobenzene", OrganicsVolatile),
        ("1,3-dichlorobenzene", OrganicsVolatile),
        ("1,4-dichlorobenzene", OrganicsVolatile),
        ("1,2,3-trichlorobenzene", OrganicsVolatile),
        ("1,2,4-trichlorobenzene", OrganicsVolatile),
        ("1,2,4-trimethylbenzene", OrganicsVolatile),
        ("1,3,5-trimethylbenzene", OrganicsVolatile),
        ("isopropylbenzene", OrganicsVolatile),
        ("n-propylbenzene", OrganicsVolatile),
        ("n-butylbenzene", OrganicsVolatile),
        ("sec-butylbenzene", OrganicsVolatile),
        ("tert-butylbenzene", OrganicsVolatile),
        ("p-isopropyltoluene", OrganicsVolatile),
        ("2-chlorotoluene", OrganicsVolatile),
        ("4-chlorotoluene", OrganicsVolatile),
        ("bromobenzene", OrganicsVolatile),
        ("chloroform", OrganicsVolatile),
        ("bromoform", OrganicsVolatile),
        ("bromodichloromethane", OrganicsVolatile),
        ("dibromochloromethane", OrganicsVolatile),
        ("chlorodibromomethane", OrganicsVolatile),
        ("trihalomethanes", OrganicsVolatile),
        ("total trihalomethanes", OrganicsVolatile),
        ("dichloromethane", OrganicsVolatile),
        ("methylene chloride", OrganicsVolatile),
        ("carbon tetrachloride", OrganicsVolatile),
        ("chloromethane", OrganicsVolatile),
        ("bromomethane", OrganicsVolatile),
        ("methyl bromide", OrganicsVolatile),
        ("dibromomethane", OrganicsVolatile),
        ("bromochloromethane", OrganicsVolatile),
        ("chloroethane", OrganicsVolatile),
        ("vinyl chloride", OrganicsVolatile),
        ("1,1-dichloroethane", OrganicsVolatile),
        ("1,2-dichloroethane", OrganicsVolatile),
        ("1,1-dichloroethylene", OrganicsVolatile),
        ("1,1-dichloroethene", OrganicsVolatile),
        ("cis-1,2-dichloroethylene", OrganicsVolatile),
        ("cis-1,2-dichloroethene", OrganicsVolatile),
        ("trans-1,2-dichloroethylene", OrganicsVolatile),
        ("trans-1,2-dichloroethene", OrganicsVolatile),
        ("1,1,1-trichloroethane", OrganicsVolatile),
        ("1,1,2-trichloroethane", OrganicsVolatile),
        ("1,1,1,2-tetrachloroethane", OrganicsVolatile),
        ("1,1,2,2-tetrachloroethane", OrganicsVolatile),
        ("trichloroethylene", OrganicsVolatile),
        ("trichloroethene", OrganicsVolatile),
        ("tetrachloroethylene", OrganicsVolatile),
        ("tetrachloroethene", OrganicsVolatile),
        ("1,2-dichloropropane", OrganicsVolatile),
        ("1,3-dichloropropane", OrganicsVolatile),
        ("2,2-dichloropropane", OrganicsVolatile),
        ("1,1-dichloropropene", OrganicsVolatile),
        ("cis-1,3-dichloropropene", OrganicsVolatile),
        ("trans-1,3-dichloropropene", OrganicsVolatile),
        ("1,2,3-trichloropropane", OrganicsVolatile),
        ("1,2-dibromoethane", OrganicsVolatile),
        ("ethylene dibromide", OrganicsVolatile),
        ("1,2-dibromo-3-chloropropane", OrganicsVolatile),
        ("dbcp", OrganicsVolatile),
        ("dichlorodifluoromethane", OrganicsVolatile),
        ("trichlorofluoromethane", OrganicsVolatile),
        ("1,1,2-trichloro-1,2,2-trifluoroethane", OrganicsVolatile),
        ("hexachlorobutadiene", OrganicsVolatile),
        ("methyl tert-butyl ether", OrganicsVolatile),
        ("mtbe", OrganicsVolatile),
        ("tert-amyl methyl ether", OrganicsVolatile),
        ("ethyl tert-butyl ether", OrganicsVolatile),
        ("diisopropyl ether", OrganicsVolatile),
        ("tert-butyl alcohol", OrganicsVolatile),
        ("acetone", OrganicsVolatile),
        ("methyl ethyl ketone", OrganicsVolatile),
        ("2-butanone", OrganicsVolatile),
        ("methyl isobutyl ketone", OrganicsVolatile),
        ("4-methyl-2-pentanone", OrganicsVolatile),
        ("2-hexanone", OrganicsVolatile),
        ("carbon disulfide", OrganicsVolatile),
        ("acrylonitrile", OrganicsVolatile),
        ("acrolein", OrganicsVolatile),
        ("vinyl acetate", OrganicsVolatile),
        ("tetrahydrofuran", OrganicsVolatile),
        ("1,4-dioxane", OrganicsVolatile),
        ("naphthalene", OrganicsVolatile),
        ("iodomethane", OrganicsVolatile),
        ("allyl chloride", OrganicsVolatile),
        ("ethyl methacrylate", OrganicsVolatile),
        ("methyl methacrylate", OrganicsVolatile),
        ("methyl acrylate", OrganicsVolatile),
        ("hexachloroethane", OrganicsVolatile),
        ("volatile organic compounds", OrganicsVolatile),
        ("total volatile organic compounds", OrganicsVolatile),
        ("gasoline range organics", OrganicsVolatile),
        ("total petroleum hydrocarbons", OrganicsVolatile),
        ("total petroleum hydrocarbons (tph)", OrganicsVolatile),
        ("diesel range organics", OrganicsVolatile),
        // organics, other
        ("acenaphthene", OrganicsOther),
        ("acenaphthylene", OrganicsOther),
        ("anthracene", OrganicsOther),
        ("benz[a]anthracene", OrganicsOther),
        ("benzo[a]anthracene", OrganicsOther),
        ("benzo[a]pyrene", OrganicsOther),
        ("benzo(a)pyrene", OrganicsOther),
        ("benzo[b]fluoranthene", OrganicsOther),
        ("benzo[k]fluoranthene", OrganicsOther),
        ("benzo[g,h,i]perylene", OrganicsOther),
        ("chrysene", OrganicsOther),
        ("dibenz[a,h]anthracene", OrganicsOther),
        ("fluoranthene", OrganicsOther),
        ("fluorene", OrganicsOther),
        ("indeno[1,2,3-cd]pyrene", OrganicsOther),
        ("phenanthrene", OrganicsOther),
        ("pyrene", OrganicsOther),
        ("1-methylnaphthalene", OrganicsOther),
        ("2-methylnaphthalene", OrganicsOther),
        ("polycyclic aromatic hydrocarbons", OrganicsOther),
        ("phenol", OrganicsOther),
        ("phenols", OrganicsOther),
        ("total phenols", OrganicsOther),
        ("2-chlorophenol", OrganicsOther),
        ("2,4-dichlorophenol", OrganicsOther),
        ("2,4,5-trichlorophenol", OrganicsOther),
        ("2,4,6-trichlorophenol", OrganicsOther),
        ("2,4-dimethylphenol", OrganicsOther),
        ("2,4-dinitrophenol", OrganicsOther),
        ("2-nitrophenol", OrganicsOther),
        ("4-nitrophenol", OrganicsOther),
        ("4-chloro-3-methylphenol", OrganicsOther),
        ("2-methyl-4,6-dinitrophenol", OrganicsOther),
        ("cresol", OrganicsOther),
        ("m-cresol", OrganicsOther),
        ("o-cresol", OrganicsOther),
        ("p-cresol", OrganicsOther),
        ("bis(2-ethylhexyl) phthalate", OrganicsOther),
        ("di(2-ethylhexyl) phthalate", OrganicsOther),
        ("butyl benzyl phthalate", OrganicsOther),
        ("di-n-butyl phthalate", OrganicsOther),
        ("di-n-octyl phthalate", OrganicsOther),
        ("diethyl phthalate", OrganicsOther),
        ("dimethyl phthalate", OrganicsOther),
        ("di(2-ethylhexyl) adipate", OrganicsOther),
        ("bis(2-chloroethyl) ether", OrganicsOther),
        ("bis(2-chloroisopropyl) ether", OrganicsOther),
        ("bis(2-chloroethoxy)methane", OrganicsOther),
        ("4-bromophenyl phenyl ether", OrganicsOther),
        ("4-chlorophenyl phenyl ether", OrganicsOther),
        ("hexachlorocyclopentadiene", OrganicsOther),
        ("nitrobenzene", OrganicsOther),
        ("2,4-dinitrotoluene", OrganicsOther),
        ("2,6-dinitrotoluene", OrganicsOther),
        ("n-nitrosodimethylamine", OrganicsOther),
        ("n-nitrosodiphenylamine", OrganicsOther),
        ("n-nitrosodi-n-propylamine", OrganicsOther),
        ("aniline", OrganicsOther),
        ("benzidine", OrganicsOther),
        ("3,3'-dichlorobenzidine", OrganicsOther),
        ("carbazole", OrganicsOther),
        ("dibenzofuran", OrganicsOther),
        ("azobenzene", OrganicsOther),
        ("benzyl alcohol", OrganicsOther),
        ("benzoic acid", OrganicsOther),
        ("2-chloronaphthalene", OrganicsOther),
        ("4-chloroaniline", OrganicsOther),
        ("2-nitroaniline", OrganicsOther),
        ("3-nitroaniline", OrganicsOther),
        ("4-nitroaniline", OrganicsOther),
        ("pyridine", OrganicsOther),
        ("2,3,7,8-tetrachlorodibenzo-p-dioxin", OrganicsOther),
        ("dioxin", OrganicsOther),
        ("bisphenol a", OrganicsOther),
        ("caffeine", OrganicsOther),
        ("triclosan", OrganicsOther),
        ("n,n-diethyl-m-toluamide (deet)", OrganicsOther),
        ("deet", OrganicsOther),
        ("cholesterol", OrganicsOther),
        ("coprostanol", OrganicsOther),
        ("4-nonylphenol", OrganicsOther),
        ("4-tert-octylphenol", OrganicsOther),
        ("tributyl phosphate", OrganicsOther),
        ("tris(2-chloroethyl) phosphate", OrganicsOther),
        ("perfluorooctanoic acid", OrganicsOther),
        ("perfluorooctanesulfonic acid", OrganicsOther),
        ("pfoa", OrganicsOther),
        ("pfos", OrganicsOther),
        ("perfluorononanoic acid", OrganicsOther),
        ("perfluorohexanesulfonic acid", OrganicsOther),
        ("perfluorobutanesulfonic acid", OrganicsOther),
        ("hexafluoropropylene oxide dimer acid", OrganicsOther),
        ("oil and grease", OrganicsOther),
        ("hexane extractable material (hem)", OrganicsOther),
        ("surfactants", OrganicsOther),
        ("methylene blue active substances", OrganicsOther),
        ("mbas", OrganicsOther),
        ("tannin and lignin", OrganicsOther),
        ("haloacetic acids", OrganicsOther),
        ("haloacetic acids (haa5)", OrganicsOther),
        ("dichloroacetic acid", OrganicsOther),
        ("trichloroacetic acid", OrganicsOther),
        ("monochloroacetic acid", OrganicsOther),
        ("bromoacetic acid", OrganicsOther),
        ("dibromoacetic acid", OrganicsOther),
        ("formaldehyde", OrganicsOther),
        ("acetaldehyde", OrganicsOther),
        ("chemical oxygen demand", OrganicsOther),
        ("chemical oxygen demand (cod)", OrganicsOther),
        ("biochemical oxygen demand", OrganicsOther),
        ("biochemical oxygen demand, standard conditions", OrganicsOther),
        ("carbonaceous biochemical oxygen demand", OrganicsOther),
        ("ultraviolet absorbance at 254 nm", OrganicsOther),
        ("uv 254", OrganicsOther),
        ("organic matter", OrganicsOther),
        ("humic acid", OrganicsOther),
        ("fulvic acid", OrganicsOther),
        ("chlorophyll a", OrganicsOther),
        ("chlorophyll b", OrganicsOther),
        ("chlorophyll c", OrganicsOther),
        ("pheophytin a", OrganicsOther),
        ("chlorophyll a, corrected for pheophytin", OrganicsOther),
        ("chlorophyll a, uncorrected for pheophytin", OrganicsOther),
        ("methane", OrganicsOther),
        ("ethane", OrganicsOther),
        ("ethene", OrganicsOther),
        ("propane", OrganicsOther),
        ("butane", OrganicsOther),
        // radiochemical
        ("radon-222", Radiochemical),
        ("radon", Radiochemical),
        ("radium-226", Radiochemical),
        ("radium-228", Radiochemical),
        ("radium-226 + radium-228", Radiochemical),
        ("combined radium (ra-226 + ra-228)", Radiochemical),
        ("gross alpha", Radiochemical),
        ("gross beta", Radiochemical),
        ("gross alpha radioactivity", Radiochemical),
        ("gross beta radioactivity", Radiochemical),
        ("gross alpha radioactivity, (thorium-230 ref std)", Radiochemical),
        ("gross alpha radioactivity, (uranium-natural ref std)", Radiochemical),
        ("gross beta radioactivity, (cesium-137 ref std)", Radiochemical),
        ("gross beta radioactivity, (strontium/yttrium-90 ref std)", Radiochemical),
        ("tritium", Radiochemical),
        ("tritium units", Radiochemical),
        ("uranium-234", Radiochemical),
        ("uranium-235", Radiochemical),
        ("uranium-238", Radiochemical),
        ("uranium-234/uranium-238 activity ratio", Radiochemical),
        ("thorium-228", Radiochemical),
        ("thorium-230", Radiochemical),
        ("thorium-232", Radiochemical),
        ("strontium-90", Radiochemical),
        ("cesium-137", Radiochemical),
        ("cesium-134", Radiochemical),
        ("iodine-131", Radiochemical),
        ("cobalt-60", Radiochemical),
        ("potassium-40", Radiochemical),
        ("lead-210", Radiochemical),
        ("polonium-210", Radiochemical),
        ("plutonium-238", Radiochemical),
        ("plutonium-239/240", Radiochemical),
        ("americium-241", Radiochemical),
        ("carbon-14", Radiochemical),
        ("carbon-14, percent modern", Radiochemical),
        ("percent modern carbon", Radiochemical),
        ("carbon-14 age", Radiochemical),
        ("beryllium-7", Radiochemical),
        ("krypton-85", Radiochemical),
        ("helium-3", Radiochemical),
        ("chlorine-36", Radiochemical),
        ("radioactivity", Radiochemical),
        ("photon emitters", Radiochemical),
        ("beta particle and photon activity", Radiochemical),
        // stable isotopes
        ("delta deuterium", StableIsotopes),
        ("deuterium", StableIsotopes),
        ("deuterium/hydrogen ratio", StableIsotopes),
        ("delta 2h", StableIsotopes),
        ("delta oxygen-18", StableIsotopes),
        ("oxygen-18", StableIsotopes),
        ("oxygen-18/oxygen-16 ratio", StableIsotopes),
        ("delta 18o", StableIsotopes),
        ("delta carbon-13", StableIsotopes),
        ("carbon-13/carbon-12 ratio", StableIsotopes),
        ("carbon-13", StableIsotopes),
        ("delta 13c", StableIsotopes),
        ("delta nitrogen-15", StableIsotopes),
        ("nitrogen-15/nitrogen-14 ratio", StableIsotopes),
        ("nitrogen-15", StableIsotopes),
        ("delta 15n of nitrate", StableIsotopes),
        ("delta 18o of nitrate", StableIsotopes),
        ("delta sulfur-34", StableIsotopes),
        ("sulfur-34/sulfur-32 ratio", StableIsotopes),
        ("sulfur-34", StableIsotopes),
        ("delta 34s of sulfate", StableIsotopes),
        ("delta 18o of sulfate", StableIsotopes),
        ("strontium-87/strontium-86 ratio", StableIsotopes),
        ("strontium-87/strontium-86", StableIsotopes),
        ("boron-11/boron-10 ratio", StableIsotopes),
        ("delta boron-11", StableIsotopes),
        ("lithium-7/lithium-6 ratio", StableIsotopes),
        ("deuterium excess", StableIsotopes),
        ("helium-4", StableIsotopes),
        ("neon", StableIsotopes),
        ("argon", StableIsotopes),
        ("nitrogen gas", StableIsotopes),
        ("noble gases", StableIsotopes),
        // physical
        ("temperature, water", Physical),
        ("temperature", Physical),
        ("water temperature", Physical),
        ("temperature, air", Physical),
        ("air temperature", Physical),
        ("temperature, sample", Physical),
        ("ph", Physical),
        ("ph, field", Physical),
        ("ph, lab", Physical),
        ("ph, laboratory", Physical),
        ("specific conductance", Physical),
        ("specific conductivity", Physical),
        ("conductivity", Physical),
        ("specific conductance, field", Physical),
        ("specific conductance, lab", Physical),
        ("specific conductance, laboratory", Physical),
        ("electrical conductivity", Physical),
        ("resistivity", Physical),
        ("salinity", Physical),
        ("total dissolved solids", Physical),
        ("tds", Physical),
        ("dissolved solids", Physical),
        ("solids, dissolved", Physical),
        ("residue on evaporation", Physical),
        ("total dissolved solids (tds)", Physical),
        ("total dissolved solids, calculated", Physical),
        ("dissolved solids, sum of constituents", Physical),
        ("total suspended solids", Physical),
        ("suspended solids", Physical),
        ("solids, suspended", Physical),
        ("total solids", Physical),
        ("solids, total", Physical),
        ("volatile suspended solids", Physical),
        ("fixed suspended solids", Physical),
        ("settleable solids", Physical),
        ("total volatile solids", Physical),
        ("turbidity", Physical),
        ("turbidity, field", Physical),
        ("transparency, secchi disc", Physical),
        ("secchi disc depth", Physical),
        ("depth, secchi disk depth", Physical),
        ("color", Physical),
        ("apparent color", Physical),
        ("true color", Physical),
        ("odor", Physical),
        ("threshold odor number", Physical),
        ("taste", Physical),
        ("dissolved oxygen", Physical),
        ("dissolved oxygen (do)", Physical),
        ("dissolved oxygen saturation", Physical),
        ("oxygen", Physical),
        ("oxidation reduction potential (orp)", Physical),
        ("oxidation reduction potential", Physical),
        ("eh", Physical),
        ("redox potential", Physical),
        ("density", Physical),
        ("specific gravity", Physical),
        ("hardness, non-carbonate as caco3", Physical),
        ("stream flow", Physical),
        ("flow", Physical),
        ("discharge", Physical),
        ("stream flow, instantaneous", Physical),
        ("flow rate, well", Physical),
        ("gage height", Physical),
        ("water level", Physical),
        ("depth to water", Physical),
        ("depth to water level below land surface", Physical),
        ("water level reference point elevation", Physical),
        ("depth", Physical),
        ("depth, bottom", Physical),
        ("depth, data-logger (ported)", Physical),
        ("sample depth", Physical),
        ("barometric pressure", Physical),
        ("atmospheric pressure", Physical),
        ("relative humidity", Physical),
        ("precipitation", Physical),
        ("wind velocity", Physical),
        ("wind direction", Physical),
        ("cloud cover", Physical),
        ("light, photosynthetic active radiation", Physical),
        ("light attenuation", Physical),
        ("sediment", Physical),
        ("suspended sediment concentration", Physical),
        ("suspended sediment concentration (ssc)", Physical),
        ("suspended sediment discharge", Physical),
        ("bedload sediment discharge", Physical),
        ("sediment particle size", Physical),
        ("particle size", Physical),
        ("percent finer than 0.0625 mm", Physical),
        ("charge balance", Physical),
        ("cation total", Physical),
        ("anions total", Physical),
        ("cation-anion balance", Physical),
        ("ion balance", Physical),
        ("sum of anions", Physical),
        ("sum of cations", Physical),
        ("langelier index", Physical),
        ("aggressiveness index", Physical),
        ("calcite saturation index", Physical),
        ("saturation index, calcite", Physical),
        ("saturation index, dolomite", Physical),
        ("saturation index, gypsum", Physical),
        // biological
        ("fish", Biological),
        ("macroinvertebrates", Biological),
        ("benthic macroinvertebrates", Biological),
        ("periphyton", Biological),
        ("phytoplankton", Biological),
        ("zooplankton", Biological),
        ("algae", Biological),
        ("algae, blue-green", Biological),
        ("algae, green", Biological),
        ("diatoms", Biological),
        ("cyanobacteria", Biological),
        ("microcystin", Biological),
        ("microcystins", Biological),
        ("microcystin-lr", Biological),
        ("cylindrospermopsin", Biological),
        ("anatoxin-a", Biological),
        ("saxitoxin", Biological),
        ("biomass", Biological),
        ("biomass, ash free dry mass", Biological),
        ("ash free dry mass", Biological),
        ("dry weight", Biological),
        ("wet weight", Biological),
        ("count", Biological),
        ("taxonomic richness", Biological),
        ("species richness", Biological),
        ("abundance", Biological),
        ("biovolume", Biological),
        ("cell count", Biological),
        ("cell density", Biological),
        // microbiological
        ("escherichia coli", Microbiological),
        ("e. coli", Microbiological),
        ("total coliform", Microbiological),
        ("coliform", Microbiological),
        ("fecal coliform", Microbiological),
        ("fecal streptococcus group bacteria", Microbiological),
        ("enterococcus", Microbiological),
        ("enterococci", Microbiological),
        ("heterotrophic plate count", Microbiological),
        ("iron bacteria", Microbiological),
        ("sulfate reducing bacteria", Microbiological),
        ("sulfur bacteria", Microbiological),
        ("giardia", Microbiological),
        ("cryptosporidium", Microbiological),
        ("giardia lamblia", Microbiological),
        ("cryptosporidium parvum", Microbiological),
        ("legionella", Microbiological),
        ("pseudomonas aeruginosa", Microbiological),
        ("clostridium perfringens", Microbiological),
        ("coliphage", Microbiological),
        ("somatic coliphage", Microbiological),
        ("male-specific coliphage", Microbiological),
        ("enteric viruses", Microbiological),
        ("salmonella", Microbiological),
        ("shigella", Microbiological),
        ("staphylococcus", Microbiological),
        // toxicity
        ("toxicity", Toxicity),
        ("acute toxicity", Toxicity),
        ("chronic toxicity", Toxicity),
        ("ceriodaphnia dubia survival", Toxicity),
        ("ceriodaphnia dubia reproduction", Toxicity),
        ("pimephales promelas survival", Toxicity),
        ("pimephales promelas growth", Toxicity),
        ("daphnia magna survival", Toxicity),
        ("hyalella azteca survival", Toxicity),
        ("selenastrum capricornutum growth", Toxicity),
        ("whole effluent toxicity", Toxicity),
        ("lc50", Toxicity),
        ("ec50", Toxicity),
        ("noec", Toxicity),
        ("loec", Toxicity),
        ("microtox", Toxicity),
        // information
        ("sample location", Information),
        ("sampling location", Information),
        ("sample time", Information),
        ("sample date", Information),
        ("sample collection method", Information),
        ("sample media", Information),
        ("sample fraction", Information),
        ("sample type", Information),
        ("sample purpose", Information),
        ("sample comment", Information),
        ("lab comment", Information),
        ("laboratory comment", Information),
        ("analysis comment", Information),
        ("field comment", Information),
        ("weather", Information),
        ("weather condition", Information),
        ("weather conditions", Information),
        ("stream condition", Information),
        ("flow severity", Information),
        ("flow condition", Information),
        ("observed flow", Information),
        ("hydrologic condition", Information),
        ("hydrologic event", Information),
        ("sampling procedure", Information),
        ("sampling method", Information),
        ("sampling equipment", Information),
        ("purge volume", Information),
        ("purge time", Information),
        ("well purged", Information),
        ("well purge time", Information),
        ("well purge volume", Information),
        ("time since last rain", Information),
        ("days since last significant precipitation", Information),
        ("number of samples", Information),
        ("quality control", Information),
        ("field blank", Information),
        ("trip blank", Information),
        ("equipment blank", Information),
        ("duplicate", Information),
        ("replicate", Information),
        ("spike", Information),
        ("spike recovery", Information),
        ("surrogate recovery", Information),
        ("percent recovery", Information),
        ("reporting level", Information),
        ("detection limit", Information),
        ("method detection limit", Information),
        ("project", Information),
        ("station description", Information),
        ("elevation", Information),
        ("latitude", Information),
        ("longitude", Information),
        ("county", Information),
        ("state", Information),
        ("aquifer", Information),
        ("well depth", Information),
        ("hole depth", Information),
        ("well diameter", Information),
        ("casing diameter", Information),
        ("screen interval", Information),
        ("top of screen", Information),
        ("bottom of screen", Information),
        ("land use", Information),
        ("land surface elevation", Information),
        ("site visit", Information),
        ("site condition", Information),
        ("collector", Information),
        ("agency", Information),
        ("water use", Information),
        ("water source", Information),
        ("field notes", Information),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            calculate_paramgroup("Atrazine"),
            Some(ParamGroup::OrganicsPesticide)
        );
        assert_eq!(
            calculate_paramgroup("  Dissolved Calcium "),
            Some(ParamGroup::InorganicsMajorMetals)
        );
        assert_eq!(calculate_paramgroup("Nitrate"), Some(ParamGroup::Nutrient));
        assert_eq!(
            calculate_paramgroup("Radium-226"),
            Some(ParamGroup::Radiochemical)
        );
    }

    #[test]
    fn test_unmatched_name_is_none() {
        assert_eq!(calculate_paramgroup("unobtainium"), None);
        assert_eq!(calculate_paramgroup(""), None);
    }

    #[test]
    fn test_group_strings() {
        assert_eq!(
            ParamGroup::InorganicsMinorMetals.to_string(),
            "inorganics, minor, metals"
        );
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        assert_eq!(PARAM_GROUP_INDEX.len(), PARAM_GROUPS.len());
        assert!(PARAM_GROUPS
            .iter()
            .all(|(name, _)| *name == name.to_lowercase().trim()));
    }
}
