use super::Category;
use crate::Evaluator::classify::{Threshold, ThresholdTable};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

////////////////////////////////////////////////////////////////////////////////
// pKa
////////////////////////////////////////////////////////////////////////////////

/// Acid strength by pKa. Strict `<` everywhere: pKa exactly 2.00 is a "Weak Acid".
pub const PKA_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(0.0, "Very Strong Acid"),
        Threshold::below(2.0, "Strong Acid"),
        Threshold::below(7.0, "Weak Acid"),
        Threshold::below(12.0, "Very Weak Acid"),
    ],
    "Extremely Weak Acid",
);

const KA: FieldSpec = FieldSpec::new(
    "ka",
    "Ka",
    "",
    InputKind::Scientific,
    Constraint::Positive,
)
.with_message("Please enter a valid Ka value (must be positive)");

const PKA: FieldSpec = FieldSpec::new("pka", "pKa", "", InputKind::Numeric, Constraint::Any)
    .with_message("Please enter a valid pKa value");

/// pKa = -log10(Ka)
fn pka_from_ka(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let ka = x[0];
    let pka = -ka.log10();
    Ok(Evaluation::new(pka).with_secondary(ka).classified_on(pka))
}

/// Ka = 10^(-pKa)
fn ka_from_pka(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let pka = x[0];
    let ka = 10f64.powf(-pka);
    Ok(Evaluation::new(ka).with_secondary(pka).classified_on(pka))
}

pub const PKA_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "pka-calculator",
    name: "pKa Calculator",
    category: Category::AcidBase,
    formula_text: "pKa = -log10(Ka), Ka = 10^(-pKa)",
    fields: &[KA, PKA],
    directions: &[
        Direction {
            name: "pKa from Ka",
            inputs: &["ka"],
            output: "pKa",
            unit: "",
            formula: pka_from_ka,
        },
        Direction {
            name: "Ka from pKa",
            inputs: &["pka"],
            output: "Ka",
            unit: "",
            formula: ka_from_pka,
        },
    ],
    table: Some(PKA_TABLE),
};

////////////////////////////////////////////////////////////////////////////////
// pH
////////////////////////////////////////////////////////////////////////////////

/// Acidity by pH. Exactly 7 is "Neutral": the `<=` entry sits right after the
/// `< 7` one, so only the bound itself reaches it.
pub const PH_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(3.0, "Strongly Acidic"),
        Threshold::below(7.0, "Acidic"),
        Threshold::at_most(7.0, "Neutral"),
        Threshold::below(11.0, "Basic"),
    ],
    "Strongly Basic",
);

const H_CONCENTRATION: FieldSpec = FieldSpec::new(
    "h_concentration",
    "[H⁺]",
    "mol/L",
    InputKind::Scientific,
    Constraint::Positive,
)
.with_message("H⁺ concentration must be positive");

const PH: FieldSpec = FieldSpec::new("ph", "pH", "", InputKind::Numeric, Constraint::Any);

fn ph_from_concentration(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let h = x[0];
    let ph = -h.log10();
    Ok(Evaluation::new(ph)
        .with_secondary(h)
        .with_extra("pOH", c.ph_poh_sum - ph, "")
        .classified_on(ph))
}

fn concentration_from_ph(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let ph = x[0];
    let h = 10f64.powf(-ph);
    let poh = c.ph_poh_sum - ph;
    Ok(Evaluation::new(h)
        .with_secondary(ph)
        .with_extra("pOH", poh, "")
        .with_extra("[OH⁻]", 10f64.powf(-poh), "mol/L")
        .classified_on(ph))
}

pub const PH_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "ph-calculator",
    name: "pH Calculator",
    category: Category::AcidBase,
    formula_text: "pH = -log10[H⁺], pOH = 14 - pH",
    fields: &[H_CONCENTRATION, PH],
    directions: &[
        Direction {
            name: "pH from [H⁺]",
            inputs: &["h_concentration"],
            output: "pH",
            unit: "",
            formula: ph_from_concentration,
        },
        Direction {
            name: "[H⁺] from pH",
            inputs: &["ph"],
            output: "[H⁺]",
            unit: "mol/L",
            formula: concentration_from_ph,
        },
    ],
    table: Some(PH_TABLE),
};

////////////////////////////////////////////////////////////////////////////////
// Henderson-Hasselbalch
////////////////////////////////////////////////////////////////////////////////

/// Buffer quality by |pH - pKa|, both bounds inclusive.
pub const BUFFER_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::at_most(1.0, "Effective buffer region (pH within ±1 of pKa)"),
        Threshold::at_most(2.0, "Acceptable buffer range (pH within ±2 of pKa)"),
    ],
    "Outside optimal buffer range (pH differs from pKa by more than 2 units)",
);

const HH_PH: FieldSpec = FieldSpec::new("ph", "pH", "", InputKind::Numeric, Constraint::Any);
const HH_PKA: FieldSpec = FieldSpec::new("pka", "pKa", "", InputKind::Numeric, Constraint::Any);
const BASE: FieldSpec = FieldSpec::new(
    "base",
    "[A⁻]",
    "mol/L",
    InputKind::Scientific,
    Constraint::Positive,
)
.with_message("Base concentration must be positive");
const ACID: FieldSpec = FieldSpec::new(
    "acid",
    "[HA]",
    "mol/L",
    InputKind::Scientific,
    Constraint::Positive,
)
.with_message("Acid concentration must be positive");

/// pH = pKa + log10([A⁻]/[HA])
fn hh_ph(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (pka, base, acid) = (x[0], x[1], x[2]);
    let ph = pka + (base / acid).log10();
    Ok(Evaluation::new(ph)
        .with_secondary(pka)
        .with_extra("[A⁻]/[HA]", base / acid, "")
        .classified_on((ph - pka).abs()))
}

fn hh_pka(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (ph, base, acid) = (x[0], x[1], x[2]);
    let pka = ph - (base / acid).log10();
    Ok(Evaluation::new(pka)
        .with_secondary(ph)
        .with_extra("[A⁻]/[HA]", base / acid, "")
        .classified_on((ph - pka).abs()))
}

fn hh_base(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (ph, pka, acid) = (x[0], x[1], x[2]);
    let base = acid * 10f64.powf(ph - pka);
    Ok(Evaluation::new(base)
        .with_secondary(acid)
        .classified_on((ph - pka).abs()))
}

fn hh_acid(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (ph, pka, base) = (x[0], x[1], x[2]);
    let acid = base / 10f64.powf(ph - pka);
    Ok(Evaluation::new(acid)
        .with_secondary(base)
        .classified_on((ph - pka).abs()))
}

pub const HENDERSON_HASSELBALCH_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "henderson-hasselbalch-calculator",
    name: "Henderson-Hasselbalch Calculator",
    category: Category::AcidBase,
    formula_text: "pH = pKa + log10([A⁻]/[HA])",
    fields: &[HH_PH, HH_PKA, BASE, ACID],
    directions: &[
        Direction {
            name: "pH from pKa, [A⁻], [HA]",
            inputs: &["pka", "base", "acid"],
            output: "pH",
            unit: "",
            formula: hh_ph,
        },
        Direction {
            name: "pKa from pH, [A⁻], [HA]",
            inputs: &["ph", "base", "acid"],
            output: "pKa",
            unit: "",
            formula: hh_pka,
        },
        Direction {
            name: "[A⁻] from pH, pKa, [HA]",
            inputs: &["ph", "pka", "acid"],
            output: "[A⁻]",
            unit: "mol/L",
            formula: hh_base,
        },
        Direction {
            name: "[HA] from pH, pKa, [A⁻]",
            inputs: &["ph", "pka", "base"],
            output: "[HA]",
            unit: "mol/L",
            formula: hh_acid,
        },
    ],
    table: Some(BUFFER_TABLE),
};
