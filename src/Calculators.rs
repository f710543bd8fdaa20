//! # Calculators
//!
//! Concrete formula configurations, one constant [`FormulaSpec`] per calculator,
//! grouped by category. Every calculator is driven by the same generic
//! [`crate::Evaluator::widget::FormulaWidget`]; nothing here holds state.
//!
//! | Category | Calculators |
//! |----------|-------------|
//! | Acid-base | pKa, pH, Henderson-Hasselbalch |
//! | Concentration | molarity, normality, dilution, molality, ppm, percent yield, ppb, mole fraction, mass percent |
//! | Gases | gas density, ideal gas law, combined gas law, Graham's law |
//! | Electrochemistry | electrolysis, Nernst equation, cell potential |
//! | Kinetics | Arrhenius, collision theory, half-life |
//! | Nuclear | radioactive decay, radiocarbon dating |
//! | Thermodynamics | Gibbs free energy, Clausius-Clapeyron, specific heat, boiling-point elevation, freezing-point depression |
//! | Quantum | wavelength-energy (with visible color), de Broglie wavelength, Heisenberg uncertainty |
//! | Physical chemistry | Beer's law, osmotic pressure, Raoult's law |
//! | Biochemistry | Michaelis-Menten |
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::FormulaSpec;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

/// Acid dissociation constants, pH and buffers
pub mod acid_base;
/// Enzyme kinetics
pub mod biochemistry;
/// Solution concentration, composition and reaction yield
pub mod concentration;
/// Electrolysis (Faraday's laws), the Nernst equation and cell potentials
pub mod electrochemistry;
/// Gas density and the ideal, combined and Graham gas laws
pub mod gases;
/// Arrhenius equation, collision theory, half-lives, radioactive decay and radiocarbon dating
pub mod kinetics;
/// Spectrophotometry and colligative pressures
pub mod physical;
/// Photon energy, matter waves and the uncertainty principle
pub mod quantum;
/// Gibbs free energy, vapor pressure, heat capacity and colligative temperatures
pub mod thermodynamics;

mod calculators_tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    AcidBase,
    Concentration,
    Gases,
    Electrochemistry,
    Kinetics,
    Nuclear,
    Thermodynamics,
    Quantum,
    PhysicalChemistry,
    Biochemistry,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::AcidBase,
        Category::Concentration,
        Category::Gases,
        Category::Electrochemistry,
        Category::Kinetics,
        Category::Nuclear,
        Category::Thermodynamics,
        Category::Quantum,
        Category::PhysicalChemistry,
        Category::Biochemistry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AcidBase => "Acid-Base Calculators",
            Category::Concentration => "Concentration and Solution Calculators",
            Category::Gases => "Gas Calculators",
            Category::Electrochemistry => "Electrochemistry Calculators",
            Category::Kinetics => "Kinetics Calculators",
            Category::Nuclear => "Nuclear Calculators",
            Category::Thermodynamics => "Thermodynamics Calculators",
            Category::Quantum => "Quantum Calculators",
            Category::PhysicalChemistry => "Physical Chemistry Calculators",
            Category::Biochemistry => "Biochemistry Calculators",
        }
    }
}

static CATALOGUE: [FormulaSpec; 36] = [
    acid_base::PKA_CALCULATOR,
    acid_base::PH_CALCULATOR,
    acid_base::HENDERSON_HASSELBALCH_CALCULATOR,
    concentration::MOLARITY_CALCULATOR,
    concentration::NORMALITY_CALCULATOR,
    concentration::DILUTION_CALCULATOR,
    concentration::MOLALITY_CALCULATOR,
    concentration::PPM_CALCULATOR,
    concentration::PERCENT_YIELD_CALCULATOR,
    concentration::PPB_CALCULATOR,
    concentration::MOLE_FRACTION_CALCULATOR,
    concentration::MASS_PERCENT_CALCULATOR,
    gases::GAS_DENSITY_CALCULATOR,
    gases::IDEAL_GAS_LAW_CALCULATOR,
    gases::COMBINED_GAS_LAW_CALCULATOR,
    gases::GRAHAMS_LAW_CALCULATOR,
    electrochemistry::ELECTROLYSIS_CALCULATOR,
    electrochemistry::NERNST_EQUATION_CALCULATOR,
    electrochemistry::CELL_POTENTIAL_CALCULATOR,
    kinetics::ARRHENIUS_CALCULATOR,
    kinetics::COLLISION_THEORY_CALCULATOR,
    kinetics::HALF_LIFE_CALCULATOR,
    kinetics::RADIOACTIVE_DECAY_CALCULATOR,
    kinetics::RADIOCARBON_DATING_CALCULATOR,
    thermodynamics::GIBBS_FREE_ENERGY_CALCULATOR,
    thermodynamics::CLAUSIUS_CLAPEYRON_CALCULATOR,
    thermodynamics::SPECIFIC_HEAT_CALCULATOR,
    thermodynamics::BOILING_POINT_ELEVATION_CALCULATOR,
    thermodynamics::FREEZING_POINT_DEPRESSION_CALCULATOR,
    quantum::WAVELENGTH_ENERGY_CALCULATOR,
    quantum::DE_BROGLIE_CALCULATOR,
    quantum::HEISENBERG_UNCERTAINTY_CALCULATOR,
    physical::BEERS_LAW_CALCULATOR,
    physical::OSMOTIC_PRESSURE_CALCULATOR,
    physical::RAOULTS_LAW_CALCULATOR,
    biochemistry::MICHAELIS_MENTEN_CALCULATOR,
];

pub fn all_calculators() -> &'static [FormulaSpec] {
    &CATALOGUE
}

pub fn calculators_in(category: Category) -> Vec<&'static FormulaSpec> {
    CATALOGUE
        .iter()
        .filter(|spec| spec.category == category)
        .collect()
}

/// Looks a calculator up by slug ("pka-calculator") or by slug without the
/// "-calculator" suffix ("pka").
pub fn find_calculator(slug: &str) -> Result<&'static FormulaSpec, EvaluatorError> {
    let wanted = slug.trim().to_lowercase();
    CATALOGUE
        .iter()
        .find(|spec| spec.slug == wanted || spec.slug.trim_end_matches("-calculator") == wanted)
        .ok_or_else(|| EvaluatorError::UnknownCalculator(slug.to_string()))
}

/// Table of every calculator: category, slug, name and formula.
pub fn catalogue_table() -> Table {
    let mut table = Table::new();
    table.add_row(row!["Category", "Slug", "Name", "Formula"]);
    for spec in CATALOGUE.iter() {
        table.add_row(row![
            spec.category.as_str(),
            spec.slug,
            spec.name,
            spec.formula_text
        ]);
    }
    table
}
