//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Calculators::acid_base::*;
    use crate::Calculators::biochemistry::*;
    use crate::Calculators::concentration::*;
    use crate::Calculators::electrochemistry::*;
    use crate::Calculators::gases::*;
    use crate::Calculators::kinetics::*;
    use crate::Calculators::physical::*;
    use crate::Calculators::quantum::*;
    use crate::Calculators::thermodynamics::*;
    use crate::Calculators::{
        Category, all_calculators, calculators_in, catalogue_table, find_calculator,
    };
    use crate::Evaluator::errors::EvaluatorError;
    use crate::Evaluator::formula::FormulaSpec;
    use crate::Evaluator::report::{ReportFormat, Reporter, create_reporter};
    use crate::Evaluator::widget::{ComputationResult, FormulaWidget, evaluate};
    use crate::constants::{
        AVOGADRO, BOLTZMANN, ELECTRON_VOLT, FARADAY, GAS_CONSTANT, GAS_CONSTANT_LATM,
        KELVIN_OFFSET, PLANCK, PhysicalConstants, SPEED_OF_LIGHT,
    };
    use approx::assert_relative_eq;
    use std::collections::HashSet;
    use std::f64::consts::{LN_2, PI, SQRT_2};

    fn run(spec: &FormulaSpec, direction: usize, inputs: &[&str]) -> ComputationResult {
        evaluate(spec, direction, inputs, &PhysicalConstants::default()).unwrap()
    }

    fn fail(spec: &FormulaSpec, direction: usize, inputs: &[&str]) -> EvaluatorError {
        evaluate(spec, direction, inputs, &PhysicalConstants::default()).unwrap_err()
    }

    fn extra(result: &ComputationResult, name: &str) -> f64 {
        result
            .extras
            .iter()
            .find(|extra| extra.name == name)
            .map(|extra| extra.value)
            .unwrap()
    }

    ////////////////////////////////////////////////////////////////////////////
    // catalogue
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_catalogue_is_consistent() {
        let all = all_calculators();
        assert_eq!(all.len(), 36);
        let slugs: HashSet<&str> = all.iter().map(|spec| spec.slug).collect();
        assert_eq!(slugs.len(), all.len());
        for spec in all {
            assert!(spec.is_consistent(), "{} is inconsistent", spec.slug);
            assert!(spec.slug.ends_with("-calculator"));
            // every field belongs to at least one direction
            for field in spec.fields {
                assert!(
                    spec.directions
                        .iter()
                        .any(|direction| direction.inputs.contains(&field.name)),
                    "{}: unused field {}",
                    spec.slug,
                    field.name
                );
            }
        }
        for category in Category::ALL {
            assert!(!calculators_in(category).is_empty(), "{}", category.as_str());
        }
        assert_eq!(calculators_in(Category::Nuclear).len(), 2);
        assert_eq!(calculators_in(Category::Gases).len(), 4);
        assert_eq!(calculators_in(Category::Biochemistry).len(), 1);
        assert_eq!(catalogue_table().len(), 37);
    }

    #[test]
    fn test_find_calculator() {
        assert_eq!(find_calculator("pka-calculator").unwrap().name, "pKa Calculator");
        assert_eq!(find_calculator("pka").unwrap().slug, "pka-calculator");
        assert_eq!(find_calculator(" Molarity ").unwrap().slug, "molarity-calculator");
        assert!(matches!(
            find_calculator("alchemy"),
            Err(EvaluatorError::UnknownCalculator(name)) if name == "alchemy"
        ));
    }

    ////////////////////////////////////////////////////////////////////////////
    // acid-base
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_pka_scenarios() {
        let pka = run(&PKA_CALCULATOR, 0, &["1.8e-5"]);
        assert_relative_eq!(pka.primary_value, 4.7447, epsilon = 1e-4);
        assert_eq!(pka.classification_label.as_deref(), Some("Weak Acid"));

        let ka = run(&PKA_CALCULATOR, 1, &["4.76"]);
        assert_relative_eq!(ka.primary_value, 1.7378e-5, max_relative = 1e-4);

        let ka = run(&PKA_CALCULATOR, 1, &["-1"]);
        assert_relative_eq!(ka.primary_value, 10.0, max_relative = 1e-12);
        assert_eq!(ka.classification_label.as_deref(), Some("Very Strong Acid"));

        assert_eq!(
            fail(&PKA_CALCULATOR, 0, &["0"]),
            EvaluatorError::domain("ka", "Please enter a valid Ka value (must be positive)")
        );
    }

    #[test]
    fn test_ph() {
        let ph = run(&PH_CALCULATOR, 0, &["2.5e-4"]);
        assert_relative_eq!(ph.primary_value, 3.60206, epsilon = 1e-5);
        assert_relative_eq!(extra(&ph, "pOH"), 14.0 - 3.60206, epsilon = 1e-5);
        assert_eq!(ph.classification_label.as_deref(), Some("Acidic"));

        let h = run(&PH_CALCULATOR, 1, &["12"]);
        assert_relative_eq!(h.primary_value, 1e-12, max_relative = 1e-9);
        assert_relative_eq!(extra(&h, "[OH⁻]"), 1e-2, max_relative = 1e-9);
        assert_eq!(h.classification_label.as_deref(), Some("Strongly Basic"));

        assert_eq!(
            fail(&PH_CALCULATOR, 0, &["0"]).to_string(),
            "H⁺ concentration must be positive"
        );
    }

    #[test]
    fn test_henderson_hasselbalch() {
        let hh = &HENDERSON_HASSELBALCH_CALCULATOR;
        let ph = run(hh, 0, &["4.76", "0.1", "0.1"]);
        assert_relative_eq!(ph.primary_value, 4.76, epsilon = 1e-12);
        assert_eq!(
            ph.classification_label.as_deref(),
            Some("Effective buffer region (pH within ±1 of pKa)")
        );

        let pka = run(hh, 1, &["5.76", "0.5", "0.1"]);
        assert_relative_eq!(pka.primary_value, 5.76 - 5f64.log10(), epsilon = 1e-12);

        let base = run(hh, 2, &["7.76", "4.76", "0.01"]);
        assert_relative_eq!(base.primary_value, 10.0, max_relative = 1e-9);
        assert_eq!(
            base.classification_label.as_deref(),
            Some("Outside optimal buffer range (pH differs from pKa by more than 2 units)")
        );

        let acid = run(hh, 3, &["5.26", "4.76", "0.2"]);
        assert_relative_eq!(acid.primary_value, 0.2 / 10f64.sqrt(), max_relative = 1e-9);

        assert_eq!(
            fail(hh, 0, &["4.76", "0", "0.1"]).to_string(),
            "Base concentration must be positive"
        );
    }

    ////////////////////////////////////////////////////////////////////////////
    // concentration
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_molarity() {
        let m = run(&MOLARITY_CALCULATOR, 0, &["2.5", "0.5"]);
        assert_relative_eq!(m.primary_value, 5.0);
        assert_eq!(m.unit, "mol/L");
        assert_relative_eq!(run(&MOLARITY_CALCULATOR, 1, &["2", "0.25"]).primary_value, 0.5);
        let v = run(&MOLARITY_CALCULATOR, 2, &["0.5", "2"]);
        assert_relative_eq!(v.primary_value, 0.25);
        assert_relative_eq!(extra(&v, "Volume"), 250.0);
        assert!(fail(&MOLARITY_CALCULATOR, 0, &["1", "0"]).is_validation());
    }

    #[test]
    fn test_normality_and_molality() {
        assert_relative_eq!(run(&NORMALITY_CALCULATOR, 0, &["0.5", "2"]).primary_value, 1.0);
        assert_relative_eq!(run(&NORMALITY_CALCULATOR, 1, &["3", "3"]).primary_value, 1.0);
        assert_relative_eq!(run(&MOLALITY_CALCULATOR, 0, &["0.5", "0.25"]).primary_value, 2.0);
        assert_eq!(
            fail(&MOLALITY_CALCULATOR, 0, &["-1", "1"]).to_string(),
            "Moles must be non-negative and solvent mass must be positive"
        );
    }

    #[test]
    fn test_dilution() {
        let v2 = run(&DILUTION_CALCULATOR, 0, &["2", "0.1", "0.5"]);
        assert_relative_eq!(v2.primary_value, 0.4, epsilon = 1e-12);
        assert_relative_eq!(extra(&v2, "Solvent to add"), 0.3, epsilon = 1e-12);
        assert_eq!(
            fail(&DILUTION_CALCULATOR, 0, &["1", "0.1", "2"]).to_string(),
            "Final concentration (M₂) cannot be greater than initial concentration (M₁)"
        );

        let m2 = run(&DILUTION_CALCULATOR, 1, &["2", "0.1", "0.4"]);
        assert_relative_eq!(m2.primary_value, 0.5, epsilon = 1e-12);
        assert_relative_eq!(extra(&m2, "Dilution factor"), 4.0, epsilon = 1e-12);
        assert_eq!(
            fail(&DILUTION_CALCULATOR, 1, &["2", "0.5", "0.1"]).to_string(),
            "Final volume (V₂) must be greater than initial volume (V₁)"
        );
    }

    #[test]
    fn test_ppm() {
        let ppm = run(&PPM_CALCULATOR, 0, &["0.005", "1000"]);
        assert_relative_eq!(ppm.primary_value, 5.0, epsilon = 1e-9);
        assert_relative_eq!(run(&PPM_CALCULATOR, 1, &["5", "1000"]).primary_value, 0.005, max_relative = 1e-12);
        assert_relative_eq!(run(&PPM_CALCULATOR, 2, &["0.005", "5"]).primary_value, 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_percent_yield() {
        let good = run(&PERCENT_YIELD_CALCULATOR, 0, &["8.5", "10"]);
        assert_relative_eq!(good.primary_value, 85.0, epsilon = 1e-12);
        assert_eq!(good.classification_label.as_deref(), Some("Good yield"));
        let excellent = run(&PERCENT_YIELD_CALCULATOR, 0, &["9.5", "10"]);
        assert_eq!(excellent.classification_label.as_deref(), Some("Excellent yield!"));
        let poor = run(&PERCENT_YIELD_CALCULATOR, 0, &["5", "10"]);
        assert_eq!(
            poor.classification_label.as_deref(),
            Some("Consider optimizing reaction conditions")
        );
        assert_eq!(
            fail(&PERCENT_YIELD_CALCULATOR, 0, &["11", "10"]).to_string(),
            "Actual yield cannot exceed theoretical yield"
        );
        assert_eq!(
            fail(&PERCENT_YIELD_CALCULATOR, 0, &["abc", "10"]).to_string(),
            "Please enter valid numbers for both fields"
        );
        assert_eq!(
            fail(&PERCENT_YIELD_CALCULATOR, 0, &["-1", "10"]).to_string(),
            "Yields must be non-negative and theoretical yield must be positive"
        );
        assert_eq!(
            fail(&MOLALITY_CALCULATOR, 0, &["1", "x"]).to_string(),
            "Please enter valid numbers for both fields"
        );
        assert_eq!(
            fail(&DILUTION_CALCULATOR, 0, &["1", "2", "?"]).to_string(),
            "Please enter valid numbers for M₁, V₁, and M₂"
        );
        assert_eq!(
            fail(&NORMALITY_CALCULATOR, 1, &["", "2"]).to_string(),
            "Please enter valid numbers for normality and equivalents"
        );
    }

    #[test]
    fn test_ppb() {
        let ppb = run(&PPB_CALCULATOR, 0, &["0.002", "1000"]);
        assert_relative_eq!(ppb.primary_value, 2000.0, max_relative = 1e-12);
        assert_relative_eq!(extra(&ppb, "Concentration"), 2.0, max_relative = 1e-12);
        assert_relative_eq!(run(&PPB_CALCULATOR, 1, &["2000", "1000"]).primary_value, 0.002, max_relative = 1e-12);
        assert_relative_eq!(run(&PPB_CALCULATOR, 2, &["0.002", "2000"]).primary_value, 1000.0, max_relative = 1e-12);
        assert!(fail(&PPB_CALCULATOR, 0, &["1", "0"]).is_validation());
    }

    #[test]
    fn test_mole_fraction() {
        let binary = run(&MOLE_FRACTION_CALCULATOR, 0, &["2", "3"]);
        assert_relative_eq!(binary.primary_value, 0.4, epsilon = 1e-12);
        assert_relative_eq!(extra(&binary, "χB"), 0.6, epsilon = 1e-12);
        assert_relative_eq!(extra(&binary, "Component A"), 40.0, epsilon = 1e-12);
        assert_relative_eq!(extra(&binary, "Total moles"), 5.0);

        let ternary = run(&MOLE_FRACTION_CALCULATOR, 1, &["1", "2", "1"]);
        assert_relative_eq!(ternary.primary_value, 0.25);
        assert_relative_eq!(extra(&ternary, "χB"), 0.5);
        assert_relative_eq!(extra(&ternary, "χC"), 0.25);

        assert_eq!(
            fail(&MOLE_FRACTION_CALCULATOR, 0, &["0", "0"]).to_string(),
            "Total moles must be greater than zero"
        );
        assert_eq!(
            fail(&MOLE_FRACTION_CALCULATOR, 0, &["-1", "2"]).to_string(),
            "Moles must be non-negative numbers"
        );
    }

    #[test]
    fn test_mass_percent() {
        let percent = run(&MASS_PERCENT_CALCULATOR, 0, &["10", "40"]);
        assert_relative_eq!(percent.primary_value, 20.0, epsilon = 1e-12);
        assert_relative_eq!(extra(&percent, "Mass of solution"), 50.0);

        let solute = run(&MASS_PERCENT_CALCULATOR, 1, &["20", "50"]);
        assert_relative_eq!(solute.primary_value, 10.0, epsilon = 1e-12);
        assert_relative_eq!(extra(&solute, "Mass of solvent"), 40.0, epsilon = 1e-12);

        let solution = run(&MASS_PERCENT_CALCULATOR, 2, &["10", "20"]);
        assert_relative_eq!(solution.primary_value, 50.0, epsilon = 1e-12);

        assert_eq!(
            fail(&MASS_PERCENT_CALCULATOR, 0, &["0", "0"]).to_string(),
            "Total mass must be greater than zero"
        );
        assert_eq!(
            fail(&MASS_PERCENT_CALCULATOR, 1, &["150", "50"]).to_string(),
            "Mass percent must be 0-100% and solution mass must be positive"
        );
        assert_eq!(
            fail(&MASS_PERCENT_CALCULATOR, 2, &["10", "0"]).to_string(),
            "Mass percent must be greater than zero"
        );
    }

    ////////////////////////////////////////////////////////////////////////////
    // gases
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_gas_density() {
        let expected = 32.0 / (GAS_CONSTANT_LATM * 273.15);
        let d = run(&GAS_DENSITY_CALCULATOR, 0, &["32", "1", "273.15"]);
        assert_relative_eq!(d.primary_value, expected, max_relative = 1e-12);
        let d = expected.to_string();
        let m = run(&GAS_DENSITY_CALCULATOR, 1, &[d.as_str(), "1", "273.15"]);
        assert_relative_eq!(m.primary_value, 32.0, max_relative = 1e-9);
        let p = run(&GAS_DENSITY_CALCULATOR, 2, &[d.as_str(), "32", "273.15"]);
        assert_relative_eq!(p.primary_value, 1.0, max_relative = 1e-9);
        let t = run(&GAS_DENSITY_CALCULATOR, 3, &[d.as_str(), "32", "1"]);
        assert_relative_eq!(t.primary_value, 273.15, max_relative = 1e-9);
        assert_relative_eq!(extra(&t, "Temperature"), 0.0, epsilon = 1e-6);
        assert_eq!(
            fail(&GAS_DENSITY_CALCULATOR, 0, &["32", "-1", "273.15"]).to_string(),
            "All values must be positive"
        );
    }

    #[test]
    fn test_ideal_gas_law() {
        let p = run(&IDEAL_GAS_LAW_CALCULATOR, 0, &["22.4", "1", "273.15"]);
        assert_relative_eq!(p.primary_value, GAS_CONSTANT_LATM * 273.15 / 22.4, max_relative = 1e-12);
        let v = run(&IDEAL_GAS_LAW_CALCULATOR, 1, &["1", "1", "273.15"]);
        assert_relative_eq!(v.primary_value, 22.425615, max_relative = 1e-9);
        let n = run(&IDEAL_GAS_LAW_CALCULATOR, 2, &["1", "22.425615", "273.15"]);
        assert_relative_eq!(n.primary_value, 1.0, max_relative = 1e-9);
        let t = run(&IDEAL_GAS_LAW_CALCULATOR, 3, &["1", "22.425615", "1"]);
        assert_relative_eq!(t.primary_value, 273.15, max_relative = 1e-9);
    }

    #[test]
    fn test_combined_gas_law() {
        // P₁ = 1 atm, V₁ = 2 L, T₁ = 300 K, P₂ = 4 atm, V₂ = 1 L, T₂ = 600 K
        let p2 = run(&COMBINED_GAS_LAW_CALCULATOR, 0, &["1", "2", "300", "1", "600"]);
        assert_relative_eq!(p2.primary_value, 4.0, epsilon = 1e-12);
        let v2 = run(&COMBINED_GAS_LAW_CALCULATOR, 1, &["1", "2", "300", "4", "600"]);
        assert_relative_eq!(v2.primary_value, 1.0, epsilon = 1e-12);
        let t2 = run(&COMBINED_GAS_LAW_CALCULATOR, 2, &["1", "2", "300", "4", "1"]);
        assert_relative_eq!(t2.primary_value, 600.0, epsilon = 1e-9);
        assert_relative_eq!(extra(&t2, "Temperature"), 600.0 - KELVIN_OFFSET, epsilon = 1e-9);
        let p1 = run(&COMBINED_GAS_LAW_CALCULATOR, 3, &["2", "300", "4", "1", "600"]);
        assert_relative_eq!(p1.primary_value, 1.0, epsilon = 1e-12);
        let v1 = run(&COMBINED_GAS_LAW_CALCULATOR, 4, &["1", "300", "4", "1", "600"]);
        assert_relative_eq!(v1.primary_value, 2.0, epsilon = 1e-12);
        let t1 = run(&COMBINED_GAS_LAW_CALCULATOR, 5, &["1", "2", "4", "1", "600"]);
        assert_relative_eq!(t1.primary_value, 300.0, epsilon = 1e-9);

        assert_eq!(
            fail(&COMBINED_GAS_LAW_CALCULATOR, 0, &["1", "2", "0", "1", "600"]).to_string(),
            "Temperature, pressure, and volume must be positive."
        );
    }

    #[test]
    fn test_grahams_law() {
        // gas 1 has M = 4 g/mol, gas 2 has M = 16 g/mol: gas 1 effuses twice as fast
        let r1 = run(&GRAHAMS_LAW_CALCULATOR, 0, &["1", "4", "16"]);
        assert_relative_eq!(r1.primary_value, 2.0, epsilon = 1e-12);
        assert_relative_eq!(extra(&r1, "Rate ratio r₁/r₂"), 2.0, epsilon = 1e-12);
        assert_relative_eq!(run(&GRAHAMS_LAW_CALCULATOR, 1, &["2", "4", "16"]).primary_value, 1.0, epsilon = 1e-12);
        assert_relative_eq!(run(&GRAHAMS_LAW_CALCULATOR, 2, &["2", "1", "16"]).primary_value, 4.0, epsilon = 1e-12);
        assert_relative_eq!(run(&GRAHAMS_LAW_CALCULATOR, 3, &["2", "1", "4"]).primary_value, 16.0, epsilon = 1e-12);
        assert_eq!(
            fail(&GRAHAMS_LAW_CALCULATOR, 0, &["1", "-4", "16"]).to_string(),
            "All values must be positive"
        );
    }

    ////////////////////////////////////////////////////////////////////////////
    // electrochemistry
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_electrolysis() {
        let m = run(&ELECTROLYSIS_CALCULATOR, 0, &["2", "3600", "63.55", "2"]);
        let expected = 7200.0 * 63.55 / (2.0 * FARADAY);
        assert_relative_eq!(m.primary_value, expected, max_relative = 1e-12);
        assert_relative_eq!(extra(&m, "Charge (Q)"), 7200.0);

        let mass = expected.to_string();
        let q = run(&ELECTROLYSIS_CALCULATOR, 1, &[mass.as_str(), "63.55", "2"]);
        assert_relative_eq!(q.primary_value, 7200.0, max_relative = 1e-9);
        let t = run(&ELECTROLYSIS_CALCULATOR, 2, &["2", mass.as_str(), "63.55", "2"]);
        assert_relative_eq!(t.primary_value, 3600.0, max_relative = 1e-9);
        assert_relative_eq!(extra(&t, "Time"), 1.0, max_relative = 1e-9);
        let i = run(&ELECTROLYSIS_CALCULATOR, 3, &["3600", mass.as_str(), "63.55", "2"]);
        assert_relative_eq!(i.primary_value, 2.0, max_relative = 1e-9);

        assert_eq!(
            fail(&ELECTROLYSIS_CALCULATOR, 0, &["0", "3600", "63.55", "2"]).to_string(),
            "Current must be positive"
        );
        assert_eq!(
            fail(&ELECTROLYSIS_CALCULATOR, 0, &["2", "3600", "63.55", "0"]).to_string(),
            "Number of electrons must be positive"
        );
    }

    #[test]
    fn test_electrolysis_with_custom_faraday() {
        let constants = PhysicalConstants {
            faraday: 100000.0,
            ..PhysicalConstants::default()
        };
        let mut widget = FormulaWidget::with_constants(ELECTROLYSIS_CALCULATOR, constants);
        let m = widget.compute_from_primary(&["1", "200000", "50", "1"]).unwrap();
        assert_relative_eq!(m.primary_value, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_nernst() {
        let e = run(&NERNST_EQUATION_CALCULATOR, 0, &["1.10", "2", "1", "298.15"]);
        assert_relative_eq!(e.primary_value, 1.10, epsilon = 1e-12);

        let e = run(&NERNST_EQUATION_CALCULATOR, 0, &["1.10", "2", "10", "298.15"]);
        let slope = GAS_CONSTANT * 298.15 / (2.0 * FARADAY);
        assert_relative_eq!(e.primary_value, 1.10 - slope * 10f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(e.primary_value, 1.0704, epsilon = 1e-4);

        assert_eq!(
            fail(&NERNST_EQUATION_CALCULATOR, 0, &["1.10", "2", "0", "298.15"]).to_string(),
            "Reaction quotient must be positive."
        );
        assert!(
            fail(&NERNST_EQUATION_CALCULATOR, 0, &["1.10", "0", "1", "298.15"])
                .to_string()
                .contains("must be non-zero")
        );
    }

    #[test]
    fn test_cell_potential() {
        // Daniell cell: Cu²⁺/Cu cathode, Zn²⁺/Zn anode
        let daniell = run(&CELL_POTENTIAL_CALCULATOR, 0, &["0.34", "-0.76"]);
        assert_relative_eq!(daniell.primary_value, 1.10, epsilon = 1e-12);
        assert_eq!(
            daniell.classification_label.as_deref(),
            Some("Spontaneous reaction (galvanic/voltaic cell)")
        );
        let reversed = run(&CELL_POTENTIAL_CALCULATOR, 0, &["-0.76", "0.34"]);
        assert_eq!(
            reversed.classification_label.as_deref(),
            Some("Non-spontaneous (requires external voltage - electrolytic cell)")
        );
        let balanced = run(&CELL_POTENTIAL_CALCULATOR, 0, &["0.34", "0.34"]);
        assert_eq!(
            balanced.classification_label.as_deref(),
            Some("Non-spontaneous (requires external voltage - electrolytic cell)")
        );

        let e = run(&CELL_POTENTIAL_CALCULATOR, 1, &["0.34", "-0.76", "2", "298.15", "10"]);
        let slope = GAS_CONSTANT * 298.15 / (2.0 * FARADAY);
        assert_relative_eq!(e.primary_value, 1.10 - slope * 10f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(extra(&e, "E°cell"), 1.10, epsilon = 1e-12);
        assert_relative_eq!(extra(&e, "RT/nF"), slope, epsilon = 1e-15);

        assert_eq!(
            fail(&CELL_POTENTIAL_CALCULATOR, 1, &["0.34", "-0.76", "2", "298.15", "0"]).to_string(),
            "Reaction quotient must be positive"
        );
    }

    ////////////////////////////////////////////////////////////////////////////
    // kinetics
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_arrhenius() {
        let k = run(&ARRHENIUS_CALCULATOR, 0, &["1e13", "50", "300"]);
        let expected = 1e13 * (-50000.0 / (GAS_CONSTANT * 300.0)).exp();
        assert_relative_eq!(k.primary_value, expected, max_relative = 1e-12);

        let k_str = expected.to_string();
        let ea = run(&ARRHENIUS_CALCULATOR, 1, &[k_str.as_str(), "1e13", "300"]);
        assert_relative_eq!(ea.primary_value, 50.0, max_relative = 1e-9);
        let t = run(&ARRHENIUS_CALCULATOR, 2, &[k_str.as_str(), "1e13", "50"]);
        assert_relative_eq!(t.primary_value, 300.0, max_relative = 1e-9);
        let a = run(&ARRHENIUS_CALCULATOR, 3, &[k_str.as_str(), "50", "300"]);
        assert_relative_eq!(a.primary_value, 1e13, max_relative = 1e-9);

        assert_eq!(
            fail(&ARRHENIUS_CALCULATOR, 1, &["2", "1", "300"]).to_string(),
            "Rate constant k cannot exceed frequency factor A"
        );

        // k == A: no barrier, and no minus sign in the report
        let flat = run(&ARRHENIUS_CALCULATOR, 1, &["5", "5", "300"]);
        assert_eq!(flat.primary_value, 0.0);
        assert!(flat.primary_value.is_sign_positive());
        let shown = create_reporter(ReportFormat::Plain, 4).render(&ARRHENIUS_CALCULATOR, &flat);
        assert!(shown.contains("Ea = 0.0000 kJ/mol"), "{shown}");
    }

    #[test]
    fn test_collision_theory() {
        let z = run(&COLLISION_THEORY_CALCULATOR, 0, &["3.7e-10", "0.04", "298", "28"]);
        let n = 0.04 * 1000.0 * AVOGADRO;
        let mass = 28.0 / 1000.0 / AVOGADRO;
        let speed = (8.0 * BOLTZMANN * 298.0 / (PI * mass)).sqrt();
        let sigma = PI * 3.7e-10 * 3.7e-10;
        assert_relative_eq!(z.primary_value, sigma * speed * n * n / SQRT_2, max_relative = 1e-12);
        assert_relative_eq!(extra(&z, "Mean molecular speed"), 474.6, max_relative = 1e-3);

        let k = run(&COLLISION_THEORY_CALCULATOR, 1, &["0", "1e10", "0.5", "300"]);
        assert_relative_eq!(k.primary_value, 5e9);
        assert_relative_eq!(extra(&k, "Molecules with E ≥ Ea"), 100.0);

        let k2 = run(&COLLISION_THEORY_CALCULATOR, 2, &["300", "310", "1e-3", "50000"]);
        let ratio = (50000.0 / GAS_CONSTANT * (1.0 / 300.0 - 1.0 / 310.0)).exp();
        assert_relative_eq!(k2.primary_value, 1e-3 * ratio, max_relative = 1e-12);
        assert!(ratio > 1.9 && ratio < 1.92);
    }

    #[test]
    fn test_half_life() {
        let t = run(&HALF_LIFE_CALCULATOR, 0, &["0.0693"]);
        assert_relative_eq!(t.primary_value, LN_2 / 0.0693, max_relative = 1e-12);
        let k = run(&HALF_LIFE_CALCULATOR, 1, &["10"]);
        assert_relative_eq!(k.primary_value, LN_2 / 10.0, max_relative = 1e-12);
        assert_relative_eq!(run(&HALF_LIFE_CALCULATOR, 2, &["0.5", "2"]).primary_value, 2.0);
        assert_relative_eq!(run(&HALF_LIFE_CALCULATOR, 3, &["0.5", "2"]).primary_value, 1.0);
        assert_eq!(
            fail(&HALF_LIFE_CALCULATOR, 0, &["0"]).to_string(),
            "Rate constant must be positive"
        );
    }

    #[test]
    fn test_radioactive_decay() {
        assert_eq!(RADIOACTIVE_DECAY_CALCULATOR.category, Category::Nuclear);
        let n = run(&RADIOACTIVE_DECAY_CALCULATOR, 0, &["100", "5", "10"]);
        assert_relative_eq!(n.primary_value, 25.0, max_relative = 1e-12);
        assert_relative_eq!(extra(&n, "Remaining"), 25.0, max_relative = 1e-12);
        assert_relative_eq!(extra(&n, "Decayed"), 75.0, max_relative = 1e-12);
        assert_relative_eq!(extra(&n, "Half-lives elapsed"), 2.0);

        let t_half = run(&RADIOACTIVE_DECAY_CALCULATOR, 1, &["100", "25", "10"]);
        assert_relative_eq!(t_half.primary_value, 5.0, max_relative = 1e-12);
        let t = run(&RADIOACTIVE_DECAY_CALCULATOR, 2, &["100", "25", "5"]);
        assert_relative_eq!(t.primary_value, 10.0, max_relative = 1e-12);

        assert_eq!(
            fail(&RADIOACTIVE_DECAY_CALCULATOR, 1, &["100", "100", "10"]).to_string(),
            "Final amount must be positive and less than initial amount"
        );
        assert_eq!(
            fail(&RADIOACTIVE_DECAY_CALCULATOR, 1, &["100", "50", "0"]).to_string(),
            "Please enter valid time"
        );
    }

    #[test]
    fn test_radiocarbon_dating() {
        // half the living activity left: one half-life
        let one = run(&RADIOCARBON_DATING_CALCULATOR, 0, &["7.65", "15.3"]);
        assert_relative_eq!(one.primary_value, CARBON14_HALF_LIFE, max_relative = 1e-12);
        assert_relative_eq!(extra(&one, "Uncertainty (±)"), 57.3, max_relative = 1e-12);
        assert_relative_eq!(extra(&one, "¹⁴C remaining"), 50.0, max_relative = 1e-12);
        assert_eq!(
            one.classification_label.as_deref(),
            Some("Neolithic Period (5000-10000 years)")
        );

        let fresh = run(&RADIOCARBON_DATING_CALCULATOR, 0, &["15.3", "15.3"]);
        assert_eq!(fresh.primary_value, 0.0);
        assert!(fresh.primary_value.is_sign_positive());
        assert_relative_eq!(extra(&fresh, "Uncertainty (±)"), 40.0);
        assert_eq!(fresh.classification_label.as_deref(), Some("Modern Period (0-500 years)"));

        let old = run(&RADIOCARBON_DATING_CALCULATOR, 0, &["0.01", "15.3"]);
        assert!(old.primary_value > 50000.0);
        assert_eq!(
            old.classification_label.as_deref(),
            Some("Near Detection Limit (>50000 years)")
        );

        let activity = run(&RADIOCARBON_DATING_CALCULATOR, 1, &["11460", "15.3"]);
        assert_relative_eq!(activity.primary_value, 15.3 / 4.0, max_relative = 1e-12);
        assert_eq!(
            activity.classification_label.as_deref(),
            Some("Upper Paleolithic (10000-20000 years)")
        );

        assert_eq!(
            fail(&RADIOCARBON_DATING_CALCULATOR, 0, &["16", "15.3"]).to_string(),
            "Current activity cannot exceed initial activity"
        );
        assert_eq!(
            fail(&RADIOCARBON_DATING_CALCULATOR, 0, &["0", "15.3"]).to_string(),
            "Activity values must be positive"
        );
    }

    ////////////////////////////////////////////////////////////////////////////
    // thermodynamics
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_gibbs() {
        let g = run(&GIBBS_FREE_ENERGY_CALCULATOR, 0, &["-100", "-200", "298"]);
        assert_relative_eq!(g.primary_value, -40.4, epsilon = 1e-9);
        assert_eq!(
            g.classification_label.as_deref(),
            Some("Spontaneous (thermodynamically favorable)")
        );
        assert_relative_eq!(extra(&g, "Crossover temperature"), 500.0);

        let g = run(&GIBBS_FREE_ENERGY_CALCULATOR, 0, &["100", "100", "1000"]);
        assert_eq!(g.primary_value, 0.0);
        assert_eq!(g.classification_label.as_deref(), Some("At equilibrium"));

        let g = run(&GIBBS_FREE_ENERGY_CALCULATOR, 0, &["50", "0", "300"]);
        assert_eq!(
            g.classification_label.as_deref(),
            Some("Non-spontaneous (thermodynamically unfavorable)")
        );
        assert!(g.extras.iter().all(|extra| extra.name != "Crossover temperature"));

        assert_eq!(
            fail(&GIBBS_FREE_ENERGY_CALCULATOR, 0, &["50", "10", "0"]).to_string(),
            "Temperature must be positive."
        );
    }

    #[test]
    fn test_clausius_clapeyron() {
        // water boils at 100 °C under 1 atm, ΔHvap = 40.7 kJ/mol
        let p2 = run(&CLAUSIUS_CLAPEYRON_CALCULATOR, 0, &["1", "100", "50", "40.7"]);
        let (t1, t2) = (100.0 + KELVIN_OFFSET, 50.0 + KELVIN_OFFSET);
        let expected = (-(40700.0 / GAS_CONSTANT) * (1.0 / t2 - 1.0 / t1)).exp();
        assert_relative_eq!(p2.primary_value, expected, max_relative = 1e-12);
        assert!(p2.primary_value < 1.0);

        let p2_text = p2.primary_value.to_string();
        let heat = run(&CLAUSIUS_CLAPEYRON_CALCULATOR, 1, &["1", p2_text.as_str(), "100", "50"]);
        assert_relative_eq!(heat.primary_value, 40.7, max_relative = 1e-9);

        // the boiling point drops with the pressure
        let boiling = run(&CLAUSIUS_CLAPEYRON_CALCULATOR, 2, &["1", p2_text.as_str(), "100", "40.7"]);
        assert_relative_eq!(boiling.primary_value, 50.0, epsilon = 1e-9);
        assert_relative_eq!(extra(&boiling, "Boiling point"), t2, epsilon = 1e-9);

        assert_eq!(
            fail(&CLAUSIUS_CLAPEYRON_CALCULATOR, 1, &["1", "0.5", "100", "100"]).to_string(),
            "The two temperatures must differ"
        );
        assert_eq!(
            fail(&CLAUSIUS_CLAPEYRON_CALCULATOR, 0, &["1", "-300", "50", "40.7"]).to_string(),
            "Temperature must be above absolute zero"
        );
        assert_eq!(
            fail(&CLAUSIUS_CLAPEYRON_CALCULATOR, 2, &["1", "1e6", "100", "40.7"]).to_string(),
            "No finite boiling point at this pressure"
        );
    }

    #[test]
    fn test_specific_heat() {
        // 100 g of water warmed from 20 °C to 30 °C
        let q = run(&SPECIFIC_HEAT_CALCULATOR, 0, &["100", "4.184", "20", "30"]);
        assert_relative_eq!(q.primary_value, 4184.0, max_relative = 1e-12);
        assert_relative_eq!(extra(&q, "Heat"), 4.184, max_relative = 1e-12);
        assert_relative_eq!(extra(&q, "ΔT"), 10.0);
        let cooling = run(&SPECIFIC_HEAT_CALCULATOR, 0, &["100", "4.184", "30", "20"]);
        assert!(cooling.primary_value < 0.0);

        assert_relative_eq!(run(&SPECIFIC_HEAT_CALCULATOR, 1, &["4184", "4.184", "20", "30"]).primary_value, 100.0, max_relative = 1e-12);
        assert_relative_eq!(run(&SPECIFIC_HEAT_CALCULATOR, 2, &["4184", "100", "20", "30"]).primary_value, 4.184, max_relative = 1e-12);
        assert_relative_eq!(run(&SPECIFIC_HEAT_CALCULATOR, 3, &["4184", "100", "4.184"]).primary_value, 10.0, max_relative = 1e-12);

        assert_eq!(
            fail(&SPECIFIC_HEAT_CALCULATOR, 1, &["4184", "4.184", "20", "20"]).to_string(),
            "Temperature change cannot be zero"
        );
        assert_eq!(
            fail(&SPECIFIC_HEAT_CALCULATOR, 0, &["0", "4.184", "20", "30"]).to_string(),
            "Mass must be positive"
        );
    }

    #[test]
    fn test_colligative_temperatures() {
        // 1 mol/kg NaCl (i = 2) in water
        let elevation = run(&BOILING_POINT_ELEVATION_CALCULATOR, 0, &["1", "0.512", "2"]);
        assert_relative_eq!(elevation.primary_value, 1.024, epsilon = 1e-12);
        assert_relative_eq!(extra(&elevation, "New boiling point of water"), 101.024, epsilon = 1e-12);
        assert_relative_eq!(run(&BOILING_POINT_ELEVATION_CALCULATOR, 1, &["1.024", "0.512", "2"]).primary_value, 1.0, epsilon = 1e-12);
        assert_relative_eq!(run(&BOILING_POINT_ELEVATION_CALCULATOR, 2, &["1.024", "1", "2"]).primary_value, 0.512, epsilon = 1e-12);

        let depression = run(&FREEZING_POINT_DEPRESSION_CALCULATOR, 0, &["0.5", "1.86", "1"]);
        assert_relative_eq!(depression.primary_value, 0.93, epsilon = 1e-12);
        assert_relative_eq!(extra(&depression, "New freezing point of water"), -0.93, epsilon = 1e-12);
        assert_relative_eq!(run(&FREEZING_POINT_DEPRESSION_CALCULATOR, 1, &["0.93", "1.86", "1"]).primary_value, 0.5, epsilon = 1e-12);

        assert_eq!(
            fail(&BOILING_POINT_ELEVATION_CALCULATOR, 1, &["1", "0", "2"]).to_string(),
            "Please check your values"
        );
        assert_eq!(
            fail(&FREEZING_POINT_DEPRESSION_CALCULATOR, 2, &["0", "1", "1"]).to_string(),
            "Please check your values"
        );
        assert_eq!(
            fail(&FREEZING_POINT_DEPRESSION_CALCULATOR, 0, &["-1", "1.86", "1"]).to_string(),
            "Values cannot be negative"
        );
        assert_eq!(
            fail(&BOILING_POINT_ELEVATION_CALCULATOR, 0, &["one", "0.512", "1"]).to_string(),
            "Please enter valid numbers"
        );
    }

    ////////////////////////////////////////////////////////////////////////////
    // quantum
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_wavelength_energy() {
        let e = run(&WAVELENGTH_ENERGY_CALCULATOR, 0, &["500"]);
        let expected = PLANCK * SPEED_OF_LIGHT / 500e-9;
        assert_relative_eq!(e.primary_value, expected, max_relative = 1e-12);
        assert_relative_eq!(extra(&e, "Energy"), 2.4797, max_relative = 1e-4);
        assert_eq!(e.classification_label.as_deref(), Some("Visible light"));

        let lambda = run(&WAVELENGTH_ENERGY_CALCULATOR, 1, &[expected.to_string().as_str()]);
        assert_relative_eq!(lambda.primary_value, 500.0, max_relative = 1e-9);
        assert_eq!(lambda.classification_label.as_deref(), Some("Visible light"));

        let gamma = run(&WAVELENGTH_ENERGY_CALCULATOR, 0, &["1"]);
        assert_eq!(gamma.classification_label.as_deref(), Some("Gamma rays"));
        let microwave = run(&WAVELENGTH_ENERGY_CALCULATOR, 2, &["1×10^9"]);
        assert_eq!(microwave.classification_label.as_deref(), Some("Microwave"));

        assert_eq!(
            fail(&WAVELENGTH_ENERGY_CALCULATOR, 0, &["-5"]).to_string(),
            "Please enter a valid positive wavelength"
        );
    }

    #[test]
    fn test_visible_color() {
        let color = |nm: &str| {
            run(&WAVELENGTH_ENERGY_CALCULATOR, 0, &[nm])
                .notes
                .iter()
                .find(|note| note.name == "Color")
                .map(|note| note.text)
        };
        assert_eq!(color("400"), Some("Violet"));
        assert_eq!(color("450"), Some("Blue"));
        assert_eq!(color("500"), Some("Green"));
        assert_eq!(color("580"), Some("Yellow"));
        assert_eq!(color("600"), Some("Orange"));
        assert_eq!(color("650"), Some("Red"));
        // red reaches past the "Visible light" bucket
        assert_eq!(color("720"), Some("Red"));
        assert_eq!(color("379"), None);
        assert_eq!(color("750"), None);

        let green = run(&WAVELENGTH_ENERGY_CALCULATOR, 1, &["4e-19"]);
        assert_eq!(green.notes.len(), 1);
        let shown = create_reporter(ReportFormat::Plain, 2).render(&WAVELENGTH_ENERGY_CALCULATOR, &green);
        assert!(shown.ends_with("  Color: Green"), "{shown}");

        assert_eq!(
            fail(&WAVELENGTH_ENERGY_CALCULATOR, 1, &["1e300"]).to_string(),
            "Energy is too large: the wavelength underflows to zero"
        );
    }

    #[test]
    fn test_de_broglie() {
        let lambda = run(&DE_BROGLIE_CALCULATOR, 0, &["9.109e-31", "1e6"]);
        assert_relative_eq!(lambda.primary_value, PLANCK / 9.109e-25, max_relative = 1e-12);
        assert_relative_eq!(extra(&lambda, "Kinetic energy"), 0.5 * 9.109e-31 * 1e12, max_relative = 1e-12);

        let v = run(
            &DE_BROGLIE_CALCULATOR,
            1,
            &[lambda.primary_value.to_string().as_str(), "9.109e-31"],
        );
        assert_relative_eq!(v.primary_value, 1e6, max_relative = 1e-9);

        assert_eq!(
            fail(&DE_BROGLIE_CALCULATOR, 0, &["1", "3e8"]).to_string(),
            "Velocity must be below the speed of light"
        );
    }

    #[test]
    fn test_heisenberg_uncertainty() {
        let hbar = PLANCK / (2.0 * PI);
        let dp = run(&HEISENBERG_UNCERTAINTY_CALCULATOR, 0, &["1e-10"]);
        assert_relative_eq!(dp.primary_value, hbar / 2e-10, max_relative = 1e-12);
        let dx = run(&HEISENBERG_UNCERTAINTY_CALCULATOR, 1, &["1×10^-24"]);
        assert_relative_eq!(dx.primary_value, hbar / 2e-24, max_relative = 1e-12);
        // Δx·Δp at the bound is ħ/2
        assert_relative_eq!(dx.primary_value * 1e-24, hbar / 2.0, max_relative = 1e-12);

        let de = run(&HEISENBERG_UNCERTAINTY_CALCULATOR, 2, &["1e-15"]);
        assert_relative_eq!(de.primary_value, hbar / 2e-15, max_relative = 1e-12);
        assert_relative_eq!(extra(&de, "ΔE"), hbar / 2e-15 / ELECTRON_VOLT, max_relative = 1e-12);
        let dt = run(&HEISENBERG_UNCERTAINTY_CALCULATOR, 3, &["1e-20"]);
        assert_relative_eq!(dt.primary_value, hbar / 2e-20, max_relative = 1e-12);

        // electron confined to an atom
        let dv = run(&HEISENBERG_UNCERTAINTY_CALCULATOR, 4, &["1e-10", "9.109e-31"]);
        assert_relative_eq!(dv.primary_value, hbar / 2e-10 / 9.109e-31, max_relative = 1e-12);
        assert_relative_eq!(extra(&dv, "Δp"), hbar / 2e-10, max_relative = 1e-12);

        let photon = run(&HEISENBERG_UNCERTAINTY_CALCULATOR, 5, &["500"]);
        assert_relative_eq!(photon.primary_value, 500e-9 / (4.0 * PI), max_relative = 1e-12);
        assert_relative_eq!(extra(&photon, "Photon momentum (p)"), PLANCK / 500e-9, max_relative = 1e-12);
        assert_relative_eq!(
            extra(&photon, "Photon energy (E)"),
            PLANCK * SPEED_OF_LIGHT / 500e-9,
            max_relative = 1e-12
        );

        assert!(fail(&HEISENBERG_UNCERTAINTY_CALCULATOR, 0, &["0"]).is_validation());
    }

    ////////////////////////////////////////////////////////////////////////////
    // physical chemistry
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_beers_law() {
        let a = run(&BEERS_LAW_CALCULATOR, 1, &["100", "1", "0.005"]);
        assert_relative_eq!(a.primary_value, 0.5, epsilon = 1e-12);
        assert_relative_eq!(extra(&a, "Transmittance"), 31.622776601683793, epsilon = 1e-9);
        assert_eq!(
            a.classification_label.as_deref(),
            Some("Optimal range for accurate measurements")
        );

        let c = run(&BEERS_LAW_CALCULATOR, 0, &["0.5", "100", "1"]);
        assert_relative_eq!(c.primary_value, 0.005, epsilon = 1e-15);
        assert_relative_eq!(run(&BEERS_LAW_CALCULATOR, 2, &["0.5", "1", "0.005"]).primary_value, 100.0, max_relative = 1e-12);
        assert_relative_eq!(run(&BEERS_LAW_CALCULATOR, 3, &["0.5", "100", "0.005"]).primary_value, 1.0, max_relative = 1e-12);

        let label = |absorbance: &str| {
            run(&BEERS_LAW_CALCULATOR, 0, &[absorbance, "1", "1"]).classification_label
        };
        assert_eq!(label("0.05").as_deref(), Some("Very low absorbance - sample may be too dilute"));
        assert_eq!(label("0.1").as_deref(), Some("Optimal range for accurate measurements"));
        assert_eq!(label("1.0").as_deref(), Some("Optimal range for accurate measurements"));
        assert_eq!(label("1.5").as_deref(), Some("High absorbance - acceptable but less accurate"));
        assert_eq!(label("2.5").as_deref(), Some("Very high absorbance - sample may need dilution"));

        assert_eq!(
            fail(&BEERS_LAW_CALCULATOR, 2, &["0.5", "1", "0"]).to_string(),
            "Path length and concentration must be positive"
        );
        assert_eq!(
            fail(&BEERS_LAW_CALCULATOR, 3, &["0.5", "100", "0"]).to_string(),
            "Molar absorptivity and concentration must be positive"
        );
        assert_eq!(
            fail(&BEERS_LAW_CALCULATOR, 0, &["-0.5", "100", "1"]).to_string(),
            "Absorbance cannot be negative"
        );
    }

    #[test]
    fn test_osmotic_pressure() {
        // 0.1 M NaCl (i = 2) at 298 K
        let pi = run(&OSMOTIC_PRESSURE_CALCULATOR, 0, &["0.1", "298", "2"]);
        let atm = 2.0 * 0.1 * GAS_CONSTANT_LATM * 298.0;
        assert_relative_eq!(pi.primary_value, atm, max_relative = 1e-12);
        let units: Vec<(&str, f64)> = pi.extras.iter().map(|e| (e.unit, e.value)).collect();
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].0, "kPa");
        assert_relative_eq!(units[0].1, atm * KPA_PER_ATM, max_relative = 1e-12);
        assert_eq!(units[1].0, "mmHg");
        assert_relative_eq!(units[1].1, atm * MMHG_PER_ATM, max_relative = 1e-12);
        assert_eq!(units[2].0, "bar");
        assert_relative_eq!(units[2].1, atm * BAR_PER_ATM, max_relative = 1e-12);

        let atm_text = atm.to_string();
        let m = run(&OSMOTIC_PRESSURE_CALCULATOR, 1, &[atm_text.as_str(), "298", "2"]);
        assert_relative_eq!(m.primary_value, 0.1, max_relative = 1e-12);

        assert_eq!(
            fail(&OSMOTIC_PRESSURE_CALCULATOR, 0, &["0.1", "0", "2"]).to_string(),
            "Molarity must be non-negative, temperature and van't Hoff factor must be positive."
        );
    }

    #[test]
    fn test_raoults_law() {
        // water at 25 °C, P° = 23.8 mmHg
        let p = run(&RAOULTS_LAW_CALCULATOR, 0, &["23.8", "0.9"]);
        assert_relative_eq!(p.primary_value, 21.42, epsilon = 1e-12);
        assert_relative_eq!(extra(&p, "Vapor pressure lowering"), 2.38, epsilon = 1e-12);
        let from_solute = run(&RAOULTS_LAW_CALCULATOR, 1, &["23.8", "0.1"]);
        assert_relative_eq!(from_solute.primary_value, 21.42, epsilon = 1e-12);

        assert_eq!(
            fail(&RAOULTS_LAW_CALCULATOR, 0, &["23.8", "1.5"]).to_string(),
            "Mole fraction must be between 0 and 1"
        );
        assert_eq!(
            fail(&RAOULTS_LAW_CALCULATOR, 1, &["23.8", "-0.1"]).to_string(),
            "Mole fraction must be between 0 and 1"
        );
        assert_eq!(
            fail(&RAOULTS_LAW_CALCULATOR, 0, &["0", "0.5"]).to_string(),
            "Vapor pressure must be positive"
        );
    }

    ////////////////////////////////////////////////////////////////////////////
    // biochemistry
    ////////////////////////////////////////////////////////////////////////////
    #[test]
    fn test_michaelis_menten() {
        // [S] = Km gives half of Vmax
        let half = run(&MICHAELIS_MENTEN_CALCULATOR, 0, &["2", "10", "2"]);
        assert_relative_eq!(half.primary_value, 5.0, epsilon = 1e-12);
        assert_relative_eq!(extra(&half, "Fraction of Vmax"), 50.0, epsilon = 1e-12);
        let saturated = run(&MICHAELIS_MENTEN_CALCULATOR, 0, &["198", "10", "2"]);
        assert_relative_eq!(saturated.primary_value, 9.9, epsilon = 1e-12);
        assert_eq!(run(&MICHAELIS_MENTEN_CALCULATOR, 0, &["0", "10", "2"]).primary_value, 0.0);

        let s = run(&MICHAELIS_MENTEN_CALCULATOR, 1, &["5", "10", "2"]);
        assert_relative_eq!(s.primary_value, 2.0, epsilon = 1e-12);

        assert_eq!(
            fail(&MICHAELIS_MENTEN_CALCULATOR, 1, &["10", "10", "2"]).to_string(),
            "Velocity must be lower than Vmax"
        );
        assert_eq!(
            fail(&MICHAELIS_MENTEN_CALCULATOR, 0, &["-1", "10", "2"]).to_string(),
            "Substrate concentration must be non-negative, Vmax and Km must be positive."
        );
        assert_eq!(
            fail(&MICHAELIS_MENTEN_CALCULATOR, 0, &["2", "ten", "2"]).to_string(),
            "Please enter valid numbers for all fields."
        );
    }
}
