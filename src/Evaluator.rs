/// Error taxonomy of the evaluator: unparseable input, violated domain
/// constraints and misuse of the widget API.
pub mod errors;
/// Input field descriptors, their constraints and the number parser.
/// Plain decimal and `e` notation are always accepted; scientific fields also
/// take the display form `1.8×10^-5`.
pub mod input;
/// Classification threshold tables.
///
/// A table is an ascending list of bounds, each with an explicit comparison
/// (`<` or `<=`), plus a fallback label. The first bound that admits a value
/// names its bucket.
///  # Examples
/// ```
/// use ChemCalc::Evaluator::classify::{Threshold, ThresholdTable, classify};
/// const TABLE: ThresholdTable = ThresholdTable::new(
///     &[Threshold::below(0.0, "negative"), Threshold::at_most(0.0, "zero")],
///     "positive",
/// );
/// assert_eq!(classify(0.0, &TABLE), "zero");
/// assert_eq!(classify(-1.0, &TABLE), "negative");
/// ```
pub mod classify;
/// Formula configuration objects: the fields a calculator exposes, the
/// directions (rearrangements) it can be solved in and its classification table.
pub mod formula;
/// The Formula-Evaluator Widget: a small state holder that reads one input set,
/// evaluates a direction of a [`formula::FormulaSpec`] and keeps the last result.
///
///  # Examples
/// ```
/// use ChemCalc::Calculators::acid_base::PKA_CALCULATOR;
/// use ChemCalc::Evaluator::widget::FormulaWidget;
/// let mut widget = FormulaWidget::new(PKA_CALCULATOR);
/// let result = widget.compute_from_primary(&["1.8e-5"]).unwrap();
/// println!("pKa = {:.4} ({:?})", result.primary_value, result.classification_label);
/// widget.reset();
/// ```
pub mod widget;
/// Rendering of computation results as plain text, tables or JSON.
pub mod report;
