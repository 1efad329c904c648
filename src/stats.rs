// src/stats.rs

use crate::residues::{ResidueProperty, ResidueTable, RESIDUES, WATER_MASS};
use crate::types::{NucleotideCounts, ResidueCounts};

/// Percentage of `count` within `total`. Callers guarantee `total > 0`.
fn pct(count: u64, total: u64) -> f64 {
    count as f64 / total as f64 * 100.0
}

/// Interpretation band for GC content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcBand {
    High,
    Low,
    Moderate,
}

impl GcBand {
    /// High above 60%, Low below 40%, Moderate in between (inclusive).
    pub fn classify(gc_content: f64) -> Self {
        if gc_content > 60.0 {
            GcBand::High
        } else if gc_content < 40.0 {
            GcBand::Low
        } else {
            GcBand::Moderate
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GcBand::High => "High GC content - Thermophilic organism or stable region",
            GcBand::Low => "Low GC content - AT-rich region, possibly regulatory",
            GcBand::Moderate => "Moderate GC content - Typical for many organisms",
        }
    }
}

/// Derived statistics for a nucleotide sequence. Built only for non-empty
/// sequences; an empty sequence has no defined percentages or ratios.
#[derive(Debug, Clone)]
pub struct NucleotideStats {
    pub pct_a: f64,
    pub pct_t: f64,
    pub pct_g: f64,
    pub pct_c: f64,
    pub pct_unknown: f64,

    pub gc_count: u64,
    pub at_count: u64,
    pub gc_content: f64,
    pub at_content: f64,

    /// Undefined when the sequence has no G or C.
    pub at_gc_ratio: Option<f64>,
    /// (A+G)/(T+C); undefined when the sequence has no T or C.
    pub purine_pyrimidine_ratio: Option<f64>,

    pub band: GcBand,
}

impl NucleotideStats {
    /// Returns `None` for an empty sequence instead of dividing by zero.
    pub fn from_counts(counts: &NucleotideCounts) -> Option<Self> {
        let total = counts.total();
        if total == 0 {
            return None;
        }

        let gc_count = counts.g + counts.c;
        let at_count = counts.a + counts.t;
        let gc_content = pct(gc_count, total);

        let at_gc_ratio = if gc_count > 0 {
            Some(at_count as f64 / gc_count as f64)
        } else {
            None
        };

        let purines = counts.a + counts.g;
        let pyrimidines = counts.t + counts.c;
        let purine_pyrimidine_ratio = if pyrimidines > 0 {
            Some(purines as f64 / pyrimidines as f64)
        } else {
            None
        };

        Some(Self {
            pct_a: pct(counts.a, total),
            pct_t: pct(counts.t, total),
            pct_g: pct(counts.g, total),
            pct_c: pct(counts.c, total),
            pct_unknown: pct(counts.unknown, total),
            gc_count,
            at_count,
            gc_content,
            at_content: pct(at_count, total),
            at_gc_ratio,
            purine_pyrimidine_ratio,
            band: GcBand::classify(gc_content),
        })
    }
}

/// One line of the per-residue composition table.
#[derive(Debug, Clone)]
pub struct CompositionRow {
    pub one_letter: char,
    pub three_letter: &'static str,
    pub name: &'static str,
    pub count: u64,
    pub pct: f64,
}

/// Counts and share of one physicochemical class.
#[derive(Debug, Clone)]
pub struct PropertyGroup {
    pub property: ResidueProperty,
    /// One-letter codes of the member residues, for the report legend.
    pub members: String,
    pub count: u64,
    pub pct: f64,
}

/// A residue singled out by the abundance scan.
#[derive(Debug, Clone)]
pub struct Abundance {
    pub one_letter: char,
    pub name: &'static str,
    pub count: u64,
    pub pct: f64,
}

/// Derived statistics for a protein sequence. Built only for non-empty
/// sequences.
#[derive(Debug, Clone)]
pub struct ProteinStats {
    /// Residues with a non-zero count, in table order.
    pub rows: Vec<CompositionRow>,
    pub unknown_count: u64,
    pub pct_unknown: f64,

    /// The four property classes in report order.
    pub groups: Vec<PropertyGroup>,

    /// Ties resolve to the earliest table entry; with an all-unknown
    /// sequence this degenerates to the first entry with count 0.
    pub most_abundant: Abundance,
    /// Lowest strictly-positive count; `None` when every residue count is 0.
    pub least_abundant: Option<Abundance>,

    /// Estimated mass in Daltons, residue weights minus one water per
    /// peptide bond.
    pub molecular_weight: f64,
}

impl ProteinStats {
    /// Returns `None` for an empty sequence instead of dividing by zero.
    pub fn from_counts(counts: &ResidueCounts, table: &ResidueTable) -> Option<Self> {
        let total = counts.total();
        if total == 0 {
            return None;
        }

        let mut rows = Vec::new();
        for (i, info) in RESIDUES.iter().enumerate() {
            if counts.counts[i] > 0 {
                rows.push(CompositionRow {
                    one_letter: info.one_letter,
                    three_letter: info.three_letter,
                    name: info.name,
                    count: counts.counts[i],
                    pct: pct(counts.counts[i], total),
                });
            }
        }

        let mut groups = Vec::with_capacity(ResidueProperty::ALL.len());
        for property in ResidueProperty::ALL {
            let count: u64 = RESIDUES
                .iter()
                .enumerate()
                .filter(|(_, info)| info.property == property)
                .map(|(i, _)| counts.counts[i])
                .sum();
            groups.push(PropertyGroup {
                property,
                members: table.members_of(property),
                count,
                pct: pct(count, total),
            });
        }

        // Abundance scan: strictly-greater for the max keeps the earliest
        // table entry on ties; zero counts are excluded from the min.
        let mut max_idx = 0;
        let mut max_count = 0;
        let mut min_idx: Option<usize> = None;
        let mut min_count = u64::MAX;
        for (i, &count) in counts.counts.iter().enumerate() {
            if count > max_count {
                max_count = count;
                max_idx = i;
            }
            if count > 0 && count < min_count {
                min_count = count;
                min_idx = Some(i);
            }
        }

        let most_abundant = Abundance {
            one_letter: RESIDUES[max_idx].one_letter,
            name: RESIDUES[max_idx].name,
            count: max_count,
            pct: pct(max_count, total),
        };
        let least_abundant = min_idx.map(|i| Abundance {
            one_letter: RESIDUES[i].one_letter,
            name: RESIDUES[i].name,
            count: min_count,
            pct: pct(min_count, total),
        });

        let residue_mass: f64 = RESIDUES
            .iter()
            .enumerate()
            .map(|(i, info)| counts.counts[i] as f64 * info.weight)
            .sum();
        let molecular_weight = residue_mass - (total - 1) as f64 * WATER_MASS;

        Some(Self {
            rows,
            unknown_count: counts.unknown,
            pct_unknown: pct(counts.unknown, total),
            groups,
            most_abundant,
            least_abundant,
            molecular_weight,
        })
    }
}
