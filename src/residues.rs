//src/residues.rs

use ahash::AHashMap;

/// Physicochemical class of an amino acid side chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueProperty {
    Hydrophobic,
    Polar,
    Charged,
    Special,
}

impl ResidueProperty {
    pub const ALL: [ResidueProperty; 4] = [
        ResidueProperty::Hydrophobic,
        ResidueProperty::Polar,
        ResidueProperty::Charged,
        ResidueProperty::Special,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResidueProperty::Hydrophobic => "Hydrophobic",
            ResidueProperty::Polar => "Polar",
            ResidueProperty::Charged => "Charged",
            ResidueProperty::Special => "Special",
        }
    }
}

/// Static attributes of one standard amino acid.
#[derive(Debug, Clone, Copy)]
pub struct ResidueInfo {
    pub one_letter: char,
    pub three_letter: &'static str,
    pub name: &'static str,
    /// Free-residue molecular weight in Daltons.
    pub weight: f64,
    pub property: ResidueProperty,
}

/// Mass of one water molecule, lost per peptide bond.
pub const WATER_MASS: f64 = 18.0;

/// The 20 standard amino acids in one-letter alphabetical order. Report
/// tie-breaking relies on this order, so it must stay sorted.
pub const RESIDUES: [ResidueInfo; 20] = [
    ResidueInfo { one_letter: 'A', three_letter: "Ala", name: "Alanine", weight: 89.1, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'C', three_letter: "Cys", name: "Cysteine", weight: 121.2, property: ResidueProperty::Special },
    ResidueInfo { one_letter: 'D', three_letter: "Asp", name: "Aspartate", weight: 133.1, property: ResidueProperty::Charged },
    ResidueInfo { one_letter: 'E', three_letter: "Glu", name: "Glutamate", weight: 147.1, property: ResidueProperty::Charged },
    ResidueInfo { one_letter: 'F', three_letter: "Phe", name: "Phenylalanine", weight: 165.2, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'G', three_letter: "Gly", name: "Glycine", weight: 75.1, property: ResidueProperty::Special },
    ResidueInfo { one_letter: 'H', three_letter: "His", name: "Histidine", weight: 155.2, property: ResidueProperty::Charged },
    ResidueInfo { one_letter: 'I', three_letter: "Ile", name: "Isoleucine", weight: 131.2, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'K', three_letter: "Lys", name: "Lysine", weight: 146.2, property: ResidueProperty::Charged },
    ResidueInfo { one_letter: 'L', three_letter: "Leu", name: "Leucine", weight: 131.2, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'M', three_letter: "Met", name: "Methionine", weight: 149.2, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'N', three_letter: "Asn", name: "Asparagine", weight: 132.1, property: ResidueProperty::Polar },
    ResidueInfo { one_letter: 'P', three_letter: "Pro", name: "Proline", weight: 115.1, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'Q', three_letter: "Gln", name: "Glutamine", weight: 146.2, property: ResidueProperty::Polar },
    ResidueInfo { one_letter: 'R', three_letter: "Arg", name: "Arginine", weight: 174.2, property: ResidueProperty::Charged },
    ResidueInfo { one_letter: 'S', three_letter: "Ser", name: "Serine", weight: 105.1, property: ResidueProperty::Polar },
    ResidueInfo { one_letter: 'T', three_letter: "Thr", name: "Threonine", weight: 119.1, property: ResidueProperty::Polar },
    ResidueInfo { one_letter: 'V', three_letter: "Val", name: "Valine", weight: 117.1, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'W', three_letter: "Trp", name: "Tryptophan", weight: 204.2, property: ResidueProperty::Hydrophobic },
    ResidueInfo { one_letter: 'Y', three_letter: "Tyr", name: "Tyrosine", weight: 181.2, property: ResidueProperty::Special },
];

/// Lookup index over [`RESIDUES`], built once per run and immutable after.
pub struct ResidueTable {
    index: AHashMap<char, usize>,
}

impl ResidueTable {
    pub fn new() -> Self {
        let mut index = AHashMap::with_capacity(RESIDUES.len());
        for (i, info) in RESIDUES.iter().enumerate() {
            index.insert(info.one_letter, i);
        }
        Self { index }
    }

    /// Table position of the residue with this one-letter code, if standard.
    pub fn lookup(&self, one_letter: char) -> Option<usize> {
        self.index.get(&one_letter).copied()
    }

    /// One-letter codes of all residues in `property`, in table order,
    /// comma-separated. Used for the report legends.
    pub fn members_of(&self, property: ResidueProperty) -> String {
        let mut members = String::new();
        for info in RESIDUES.iter().filter(|r| r.property == property) {
            if !members.is_empty() {
                members.push(',');
            }
            members.push(info.one_letter);
        }
        members
    }
}

impl Default for ResidueTable {
    fn default() -> Self {
        Self::new()
    }
}
