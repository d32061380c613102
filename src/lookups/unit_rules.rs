//! Chemical-specific unit conversion cascade.
//!
//! Rules are tried in order against the lowercased chemical name and unit;
//! the first match wins. Chemical-specific rules (including the ones that
//! rename an analyte such as "nitrate as n" -> "nitrate") come before the
//! group-gated mg/l <-> ug/l rules.
//!
//! Stoichiometric factors use IUPAC standard atomic weights
//! (N 14.0067, O 15.9994, H 1.00794, P 30.973762, S 32.065, Si 28.0855).
//! Equivalent-weight factors convert ueq/l or meq/l to mg/l for the ion.

use crate::lookups::chemical_groups::{classify, ChemicalGroup};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChemicalPattern {
    Names(&'static [&'static str]),
    Group(ChemicalGroup),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRule {
    pub chemical: ChemicalPattern,
    pub units: &'static [&'static str],
    pub factor: f64,
    pub unit: &'static str,
    pub rename: Option<&'static str>,
}

impl UnitRule {
    pub fn matches(&self, chemical: &str, unit: &str) -> bool {
        if !self.units.contains(&unit) {
            return false;
        }

        match self.chemical {
            ChemicalPattern::Names(names) => names.contains(&chemical),
            ChemicalPattern::Group(group) => classify(chemical) == Some(group),
        }
    }
}

const fn convert(
    names: &'static [&'static str],
    units: &'static [&'static str],
    factor: f64,
    unit: &'static str,
) -> UnitRule {
    UnitRule {
        chemical: ChemicalPattern::Names(names),
        units,
        factor,
        unit,
        rename: None,
    }
}

const fn rename(
    names: &'static [&'static str],
    units: &'static [&'static str],
    factor: f64,
    unit: &'static str,
    to: &'static str,
) -> UnitRule {
    UnitRule {
        chemical: ChemicalPattern::Names(names),
        units,
        factor,
        unit,
        rename: Some(to),
    }
}

const fn group(
    group: ChemicalGroup,
    units: &'static [&'static str],
    factor: f64,
    unit: &'static str,
) -> UnitRule {
    UnitRule {
        chemical: ChemicalPattern::Group(group),
        units,
        factor,
        unit,
        rename: None,
    }
}

// unit spellings
const MG: &[&str] = &["mg/l", "ppm", "mg/kg"];
const UG: &[&str] = &["ug/l", "ppb", "ug/kg", "µg/l"];
const NG: &[&str] = &["ng/l", "ppt"];
const MG_AS_N: &[&str] = &["mg/l as n", "mg/l n", "mg/l asn", "mg/l as nitrogen"];
const UG_AS_N: &[&str] = &["ug/l as n", "ug/l n", "ug/l asn"];
const MG_OR_MG_AS_N: &[&str] = &["mg/l", "ppm", "mg/l as n", "mg/l n", "mg/l asn"];
const UG_OR_UG_AS_N: &[&str] = &["ug/l", "ppb", "ug/l as n", "ug/l n", "ug/l asn"];
const MG_AS_P: &[&str] = &["mg/l as p", "mg/l p", "mg/l asp", "mg/l as phosphorus"];
const UG_AS_P: &[&str] = &["ug/l as p", "ug/l p", "ug/l asp"];
const MG_OR_MG_AS_P: &[&str] = &["mg/l", "ppm", "mg/l as p", "mg/l p", "mg/l asp"];
const UG_OR_UG_AS_P: &[&str] = &["ug/l", "ppb", "ug/l as p", "ug/l p", "ug/l asp"];
const MG_AS_PO4: &[&str] = &["mg/l as po4", "mg/l po4", "mg/l aspo4"];
const MG_AS_NO3: &[&str] = &["mg/l as no3", "mg/l no3", "mg/l asno3"];
const MG_AS_NO2: &[&str] = &["mg/l as no2", "mg/l no2", "mg/l asno2"];
const MG_AS_NH3: &[&str] = &["mg/l as nh3", "mg/l nh3", "mg/l asnh3"];
const MG_AS_NH4: &[&str] = &["mg/l as nh4", "mg/l nh4", "mg/l asnh4"];
const MG_AS_S: &[&str] = &["mg/l as s", "mg/l s", "mg/l ass"];
const MG_OR_MG_AS_S: &[&str] = &["mg/l", "ppm", "mg/l as s", "mg/l s"];
const MG_AS_SO4: &[&str] = &["mg/l as so4", "mg/l so4", "mg/l asso4"];
const MG_AS_CACO3: &[&str] = &["mg/l as caco3", "mg/l caco3", "mg/l ascaco3"];
const MG_OR_MG_AS_CACO3: &[&str] = &["mg/l", "ppm", "mg/l as caco3", "mg/l caco3", "mg/l ascaco3"];
const MG_AS_HCO3: &[&str] = &["mg/l as hco3", "mg/l hco3", "mg/l ashco3"];
const MG_AS_CO3: &[&str] = &["mg/l as co3", "mg/l co3", "mg/l asco3"];
const MG_AS_SI: &[&str] = &["mg/l as si", "mg/l si", "mg/l assi"];
const MG_AS_SIO2: &[&str] = &["mg/l as sio2", "mg/l sio2", "mg/l assio2"];
const UEQ: &[&str] = &["ueq/l", "µeq/l", "microequivalents per liter"];
const MEQ: &[&str] = &["meq/l", "milliequivalents per liter"];
const MICROSIEMENS: &[&str] = &[
    "umho/cm",
    "umhos/cm",
    "us/cm",
    "µs/cm",
    "µmho/cm",
    "us/cm @25c",
    "us/cm at 25c",
    "umho/cm @25c",
    "umhos/cm @25c",
    "micromhos/cm",
    "micromho/cm",
    "microsiemens/cm",
    "umho",
];
const MILLISIEMENS: &[&str] = &["ms/cm", "mmho/cm", "mmhos/cm", "ms/cm @25c"];
const PH_UNITS: &[&str] = &["std units", "su", "s.u.", "ph units", "ph", "none", "standard units"];
const CELSIUS: &[&str] = &["deg c", "degc", "c", "celsius", "°c", "deg. c"];
const PCI: &[&str] = &["pci/l", "pc/l", "picocuries per liter"];
const BQ: &[&str] = &["bq/l"];
const NTU: &[&str] = &["ntu", "ntru", "fnu", "nephelometric turbidity units"];

// analyte spellings
const NITRATE: &[&str] = &["nitrate"];
const NITRATE_AS_N: &[&str] = &[
    "nitrate as n",
    "nitrate-nitrogen",
    "nitrate nitrogen",
    "nitrate-n",
    "nitrate (as n)",
    "nitrogen, nitrate",
    "nitrogen, nitrate (no3) as n",
];
const NITRITE: &[&str] = &["nitrite"];
const NITRITE_AS_N: &[&str] = &[
    "nitrite as n",
    "nitrite-nitrogen",
    "nitrite nitrogen",
    "nitrite-n",
    "nitrite (as n)",
    "nitrogen, nitrite",
    "nitrogen, nitrite (no2) as n",
];
const NITRATE_NITRITE: &[&str] = &[
    "nitrate + nitrite",
    "nitrate + nitrite as n",
    "nitrate and nitrite",
    "nitrate and nitrite as n",
    "nitrate-nitrite",
    "nitrite + nitrate",
    "nitrite + nitrate as n",
    "inorganic nitrogen (nitrate and nitrite)",
    "inorganic nitrogen (nitrate and nitrite) as n",
    "nitrogen, nitrite (no2) + nitrate (no3) as n",
];
const AMMONIA: &[&str] = &["ammonia"];
const AMMONIA_AS_N: &[&str] = &[
    "ammonia as n",
    "ammonia-nitrogen",
    "ammonia nitrogen",
    "ammonia-n",
    "ammonia (as n)",
    "nitrogen, ammonia",
    "nitrogen, ammonia as n",
    "ammonia and ammonium",
];
const AMMONIUM: &[&str] = &["ammonium"];
const AMMONIUM_AS_N: &[&str] = &["ammonium as n", "ammonium-nitrogen", "ammonium-n"];
const KJELDAHL: &[&str] = &[
    "kjeldahl nitrogen",
    "total kjeldahl nitrogen",
    "kjeldahl nitrogen (organic n + nh3)",
    "nitrogen, kjeldahl",
    "tkn",
];
const ORGANIC_NITROGEN: &[&str] = &["organic nitrogen", "nitrogen, organic"];
const TOTAL_NITROGEN: &[&str] = &[
    "nitrogen",
    "total nitrogen",
    "nitrogen, total",
    "nitrogen, mixed forms (nh3), (nh4), organic, (no2) and (no3)",
];
const PHOSPHATE: &[&str] = &["phosphate"];
const ORTHOPHOSPHATE: &[&str] = &[
    "orthophosphate",
    "orthophosphate as p",
    "orthophosphate-phosphorus",
    "ortho-phosphate",
    "phosphate as p",
    "phosphate-phosphorus",
    "phosphorus, orthophosphate as p",
    "phosphate, ortho",
];
const PHOSPHORUS: &[&str] = &["phosphorus", "total phosphorus", "phosphorus, total"];
const SULFATE: &[&str] = &["sulfate"];
const SULFATE_AS_S: &[&str] = &["sulfate as s", "sulfate-sulfur", "sulfur, sulfate"];
const SULPHATE: &[&str] = &["sulphate", "sulfate as so4"];
const BICARBONATE: &[&str] = &["bicarbonate"];
const BICARBONATE_AS_CACO3: &[&str] = &["bicarbonate as caco3", "alkalinity, bicarbonate as caco3"];
const CARBONATE: &[&str] = &["carbonate"];
const CARBONATE_AS_CACO3: &[&str] = &["carbonate as caco3", "alkalinity, carbonate as caco3"];
const ALKALINITY: &[&str] = &[
    "alkalinity",
    "alkalinity, total",
    "total alkalinity",
    "alkalinity, total as caco3",
    "alkalinity as caco3",
];
const HARDNESS: &[&str] = &[
    "hardness",
    "total hardness",
    "hardness, ca, mg",
    "hardness, ca mg",
    "hardness, total",
    "hardness as caco3",
];
const SILICA: &[&str] = &["silica"];
const SILICON: &[&str] = &["silicon"];
const CONDUCTANCE: &[&str] = &[
    "specific conductance",
    "specific conductivity",
    "conductivity",
    "specific conductance, field",
    "specific conductance, lab",
    "specific conductance, laboratory",
];
const PH: &[&str] = &["ph", "ph, field", "ph, lab", "ph, laboratory"];
const TEMPERATURE: &[&str] = &["temperature, water", "temperature", "water temperature"];
const TDS: &[&str] = &[
    "total dissolved solids",
    "tds",
    "dissolved solids",
    "solids, dissolved",
    "residue on evaporation",
    "total dissolved solids (tds)",
];
const TURBIDITY: &[&str] = &["turbidity"];
const RADON: &[&str] = &["radon-222", "radon"];
const GROSS_ALPHA: &[&str] = &["gross alpha", "gross alpha radioactivity"];
const GROSS_BETA: &[&str] = &["gross beta", "gross beta radioactivity"];
const DISSOLVED_OXYGEN: &[&str] = &["dissolved oxygen", "dissolved oxygen (do)", "oxygen"];

pub static UNIT_RULES: &[UnitRule] = &[
    // nitrate
    convert(NITRATE, MG_AS_N, 4.426802887, "mg/l"),
    convert(NITRATE, UG_AS_N, 0.004426802887, "mg/l"),
    convert(NITRATE, MG_AS_NO3, 1.0, "mg/l"),
    rename(NITRATE_AS_N, MG_OR_MG_AS_N, 4.426802887, "mg/l", "nitrate"),
    rename(NITRATE_AS_N, UG_OR_UG_AS_N, 0.004426802887, "mg/l", "nitrate"),
    rename(NITRATE_AS_N, MG_AS_NO3, 1.0, "mg/l", "nitrate"),
    // nitrite
    convert(NITRITE, MG_AS_N, 3.284535258, "mg/l"),
    convert(NITRITE, UG_AS_N, 0.003284535258, "mg/l"),
    convert(NITRITE, MG_AS_NO2, 1.0, "mg/l"),
    rename(NITRITE_AS_N, MG_OR_MG_AS_N, 3.284535258, "mg/l", "nitrite"),
    rename(NITRITE_AS_N, UG_OR_UG_AS_N, 0.003284535258, "mg/l", "nitrite"),
    rename(NITRITE_AS_N, MG_AS_NO2, 1.0, "mg/l", "nitrite"),
    // nitrate plus nitrite stays expressed as nitrogen
    rename(NITRATE_NITRITE, MG_OR_MG_AS_N, 1.0, "mg/l as n", "nitrate + nitrite as n"),
    rename(NITRATE_NITRITE, UG_OR_UG_AS_N, 0.001, "mg/l as n", "nitrate + nitrite as n"),
    // ammonia
    convert(AMMONIA, MG_AS_N, 1.215883827, "mg/l"),
    convert(AMMONIA, UG_AS_N, 0.001215883827, "mg/l"),
    convert(AMMONIA, MG_AS_NH3, 1.0, "mg/l"),
    rename(AMMONIA_AS_N, MG_OR_MG_AS_N, 1.215883827, "mg/l", "ammonia"),
    rename(AMMONIA_AS_N, UG_OR_UG_AS_N, 0.001215883827, "mg/l", "ammonia"),
    rename(AMMONIA_AS_N, MG_AS_NH3, 1.0, "mg/l", "ammonia"),
    // ammonium
    convert(AMMONIUM, MG_AS_N, 1.287845103, "mg/l"),
    convert(AMMONIUM, UG_AS_N, 0.001287845103, "mg/l"),
    convert(AMMONIUM, MG_AS_NH4, 1.0, "mg/l"),
    rename(AMMONIUM_AS_N, MG_OR_MG_AS_N, 1.287845103, "mg/l", "ammonium"),
    rename(AMMONIUM_AS_N, UG_OR_UG_AS_N, 0.001287845103, "mg/l", "ammonium"),
    // nitrogen sums stay expressed as nitrogen
    rename(KJELDAHL, MG_OR_MG_AS_N, 1.0, "mg/l as n", "kjeldahl nitrogen"),
    rename(KJELDAHL, UG_OR_UG_AS_N, 0.001, "mg/l as n", "kjeldahl nitrogen"),
    rename(ORGANIC_NITROGEN, MG_OR_MG_AS_N, 1.0, "mg/l as n", "organic nitrogen"),
    rename(ORGANIC_NITROGEN, UG_OR_UG_AS_N, 0.001, "mg/l as n", "organic nitrogen"),
    rename(TOTAL_NITROGEN, MG_OR_MG_AS_N, 1.0, "mg/l as n", "nitrogen"),
    rename(TOTAL_NITROGEN, UG_OR_UG_AS_N, 0.001, "mg/l as n", "nitrogen"),
    // phosphate
    convert(PHOSPHATE, MG_AS_P, 3.066187504, "mg/l"),
    convert(PHOSPHATE, UG_AS_P, 0.003066187504, "mg/l"),
    convert(PHOSPHATE, MG_AS_PO4, 1.0, "mg/l"),
    rename(ORTHOPHOSPHATE, MG_OR_MG_AS_P, 3.066187504, "mg/l", "phosphate"),
    rename(ORTHOPHOSPHATE, UG_OR_UG_AS_P, 0.003066187504, "mg/l", "phosphate"),
    rename(ORTHOPHOSPHATE, MG_AS_PO4, 1.0, "mg/l", "phosphate"),
    // phosphorus
    rename(PHOSPHORUS, MG_OR_MG_AS_P, 1.0, "mg/l", "phosphorus"),
    rename(PHOSPHORUS, UG_OR_UG_AS_P, 0.001, "mg/l", "phosphorus"),
    rename(PHOSPHORUS, MG_AS_PO4, 0.326138040, "mg/l", "phosphorus"),
    // sulfate
    convert(SULFATE, MG_AS_S, 2.995870887, "mg/l"),
    convert(SULFATE, MG_AS_SO4, 1.0, "mg/l"),
    rename(SULFATE_AS_S, MG_OR_MG_AS_S, 2.995870887, "mg/l", "sulfate"),
    rename(SULPHATE, MG, 1.0, "mg/l", "sulfate"),
    rename(SULPHATE, MG_AS_SO4, 1.0, "mg/l", "sulfate"),
    rename(SULPHATE, UG, 0.001, "mg/l", "sulfate"),
    // carbonate system
    rename(BICARBONATE_AS_CACO3, MG_OR_MG_AS_CACO3, 1.22, "mg/l", "bicarbonate"),
    convert(BICARBONATE, MG_AS_CACO3, 1.22, "mg/l"),
    convert(BICARBONATE, MG_AS_HCO3, 1.0, "mg/l"),
    rename(CARBONATE_AS_CACO3, MG_OR_MG_AS_CACO3, 0.6, "mg/l", "carbonate"),
    convert(CARBONATE, MG_AS_CACO3, 0.6, "mg/l"),
    convert(CARBONATE, MG_AS_CO3, 1.0, "mg/l"),
    rename(ALKALINITY, MG_OR_MG_AS_CACO3, 1.0, "mg/l as caco3", "alkalinity"),
    rename(HARDNESS, MG_OR_MG_AS_CACO3, 1.0, "mg/l as caco3", "hardness"),
    // silica
    convert(SILICA, MG_AS_SI, 2.139335244, "mg/l"),
    convert(SILICA, MG_AS_SIO2, 1.0, "mg/l"),
    rename(SILICON, MG_AS_SI, 2.139335244, "mg/l", "silica"),
    rename(SILICON, MG, 2.139335244, "mg/l", "silica"),
    rename(SILICON, UG, 0.002139335244, "mg/l", "silica"),
    // microequivalents per liter
    convert(&["calcium"], UEQ, 0.020039, "mg/l"),
    convert(&["magnesium"], UEQ, 0.0121525, "mg/l"),
    convert(&["sodium"], UEQ, 0.02298977, "mg/l"),
    convert(&["potassium"], UEQ, 0.0390983, "mg/l"),
    convert(&["chloride"], UEQ, 0.035453, "mg/l"),
    convert(&["sulfate"], UEQ, 0.0480313, "mg/l"),
    convert(&["bicarbonate"], UEQ, 0.06101684, "mg/l"),
    convert(&["carbonate"], UEQ, 0.03000445, "mg/l"),
    convert(&["fluoride"], UEQ, 0.0189984, "mg/l"),
    convert(&["nitrate"], UEQ, 0.0620049, "mg/l"),
    convert(&["nitrite"], UEQ, 0.0460055, "mg/l"),
    convert(&["bromide"], UEQ, 79.904, "ug/l"),
    // milliequivalents per liter
    convert(&["calcium"], MEQ, 20.039, "mg/l"),
    convert(&["magnesium"], MEQ, 12.1525, "mg/l"),
    convert(&["sodium"], MEQ, 22.98977, "mg/l"),
    convert(&["potassium"], MEQ, 39.0983, "mg/l"),
    convert(&["chloride"], MEQ, 35.453, "mg/l"),
    convert(&["sulfate"], MEQ, 48.0313, "mg/l"),
    convert(&["bicarbonate"], MEQ, 61.01684, "mg/l"),
    convert(&["carbonate"], MEQ, 30.00445, "mg/l"),
    convert(&["fluoride"], MEQ, 18.9984, "mg/l"),
    convert(&["nitrate"], MEQ, 62.0049, "mg/l"),
    // specific conductance
    convert(CONDUCTANCE, MICROSIEMENS, 1.0, "umhos/cm"),
    convert(CONDUCTANCE, MILLISIEMENS, 1000.0, "umhos/cm"),
    convert(CONDUCTANCE, &["ms/m"], 10.0, "umhos/cm"),
    convert(CONDUCTANCE, &["s/m"], 10000.0, "umhos/cm"),
    // field parameters
    convert(PH, PH_UNITS, 1.0, "s.u."),
    convert(TEMPERATURE, CELSIUS, 1.0, "deg c"),
    convert(TURBIDITY, NTU, 1.0, "ntu"),
    convert(DISSOLVED_OXYGEN, MG, 1.0, "mg/l"),
    convert(DISSOLVED_OXYGEN, &["% saturation", "% sat", "%"], 1.0, "%"),
    // dissolved solids
    rename(TDS, MG, 1.0, "mg/l", "total dissolved solids"),
    rename(TDS, &["g/l"], 1000.0, "mg/l", "total dissolved solids"),
    rename(TDS, &["tons/ac ft", "tons/acre-ft"], 735.47, "mg/l", "total dissolved solids"),
    // radiochemistry
    convert(RADON, PCI, 1.0, "pci/l"),
    convert(RADON, BQ, 27.027027, "pci/l"),
    convert(GROSS_ALPHA, PCI, 1.0, "pci/l"),
    convert(GROSS_ALPHA, BQ, 27.027027, "pci/l"),
    convert(GROSS_BETA, PCI, 1.0, "pci/l"),
    convert(GROSS_BETA, BQ, 27.027027, "pci/l"),
    // group-gated mass units
    group(ChemicalGroup::MajorMetal, UG, 0.001, "mg/l"),
    group(ChemicalGroup::MajorMetal, MG, 1.0, "mg/l"),
    group(ChemicalGroup::MajorNonMetal, UG, 0.001, "mg/l"),
    group(ChemicalGroup::MajorNonMetal, MG, 1.0, "mg/l"),
    group(ChemicalGroup::MinorMetal, MG, 1000.0, "ug/l"),
    group(ChemicalGroup::MinorMetal, UG, 1.0, "ug/l"),
    group(ChemicalGroup::MinorMetal, NG, 0.001, "ug/l"),
    group(ChemicalGroup::MinorNonMetal, MG, 1000.0, "ug/l"),
    group(ChemicalGroup::MinorNonMetal, UG, 1.0, "ug/l"),
    group(ChemicalGroup::MinorNonMetal, NG, 0.001, "ug/l"),
    group(ChemicalGroup::Nutrient, UG, 0.001, "mg/l"),
    group(ChemicalGroup::Nutrient, MG, 1.0, "mg/l"),
];

/// First rule matching an already-lowercased chemical name and unit.
pub fn find_rule(chemical: &str, unit: &str) -> Option<&'static UnitRule> {
    UNIT_RULES.iter().find(|rule| rule.matches(chemical, unit))
}
