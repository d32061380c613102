use std::fmt;

/// Coarse grouping that decides the canonical mass unit of an analyte.
///
/// Major constituents are reported in mg/l, minor ones in ug/l, nutrients
/// in mg/l.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChemicalGroup {
    MajorMetal,
    MajorNonMetal,
    MinorMetal,
    MinorNonMetal,
    Nutrient,
}

impl ChemicalGroup {
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            ChemicalGroup::MajorMetal | ChemicalGroup::MajorNonMetal | ChemicalGroup::Nutrient => {
                "mg/l"
            }
            ChemicalGroup::MinorMetal | ChemicalGroup::MinorNonMetal => "ug/l",
        }
    }
}

impl fmt::Display for ChemicalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChemicalGroup::MajorMetal => "major metal",
            ChemicalGroup::MajorNonMetal => "major non-metal",
            ChemicalGroup::MinorMetal => "minor metal",
            ChemicalGroup::MinorNonMetal => "minor non-metal",
            ChemicalGroup::Nutrient => "nutrient",
        };
        write!(f, "{}", name)
    }
}

/// Group of a lowercased chemical name.
pub fn classify(chemical: &str) -> Option<ChemicalGroup> {
    let group = match chemical {
        "calcium" | "magnesium" | "potassium" | "sodium" | "sodium plus potassium"
        | "sodium+potassium" => ChemicalGroup::MajorMetal,

        "bicarbonate" | "carbonate" | "chloride" | "fluoride" | "silica" | "sulfate"
        | "hydroxide" => ChemicalGroup::MajorNonMetal,

        "aluminum" | "antimony" | "arsenic" | "barium" | "beryllium" | "bismuth" | "cadmium"
        | "cerium" | "cesium" | "chromium" | "cobalt" | "copper" | "gallium" | "germanium"
        | "gold" | "iron" | "lanthanum" | "lead" | "lithium" | "manganese" | "mercury"
        | "molybdenum" | "nickel" | "niobium" | "palladium" | "platinum" | "rubidium"
        | "scandium" | "silver" | "strontium" | "tantalum" | "tellurium" | "thallium"
        | "thorium" | "tin" | "titanium" | "tungsten" | "uranium" | "vanadium" | "yttrium"
        | "zinc" | "zirconium" => ChemicalGroup::MinorMetal,

        "boron" | "bromide" | "bromine" | "cyanide" | "iodide" | "iodine" | "selenium"
        | "sulfide" => ChemicalGroup::MinorNonMetal,

        "ammonia" | "ammonium" | "kjeldahl nitrogen" | "nitrate" | "nitrite" | "nitrogen"
        | "organic nitrogen" | "orthophosphate" | "phosphate" | "phosphorus" => {
            ChemicalGroup::Nutrient
        }

        _ => return None,
    };

    Some(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("calcium"), Some(ChemicalGroup::MajorMetal));
        assert_eq!(classify("sulfate"), Some(ChemicalGroup::MajorNonMetal));
        assert_eq!(classify("arsenic"), Some(ChemicalGroup::MinorMetal));
        assert_eq!(classify("selenium"), Some(ChemicalGroup::MinorNonMetal));
        assert_eq!(classify("nitrate"), Some(ChemicalGroup::Nutrient));
        assert_eq!(classify("atrazine"), None);
    }

    #[test]
    fn test_canonical_units() {
        assert_eq!(ChemicalGroup::MajorMetal.canonical_unit(), "mg/l");
        assert_eq!(ChemicalGroup::MinorMetal.canonical_unit(), "ug/l");
    }
}
