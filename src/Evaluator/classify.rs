use serde::Serialize;

/// How a value is compared against a threshold bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Boundary {
    /// `value < bound`: the bound itself falls into the next bucket
    Below,
    /// `value <= bound`: the bound itself belongs to this bucket
    AtMost,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    pub bound: f64,
    pub boundary: Boundary,
    pub label: &'static str,
}

impl Threshold {
    pub const fn below(bound: f64, label: &'static str) -> Self {
        Threshold {
            bound,
            boundary: Boundary::Below,
            label,
        }
    }

    pub const fn at_most(bound: f64, label: &'static str) -> Self {
        Threshold {
            bound,
            boundary: Boundary::AtMost,
            label,
        }
    }

    pub fn admits(&self, value: f64) -> bool {
        match self.boundary {
            Boundary::Below => value < self.bound,
            Boundary::AtMost => value <= self.bound,
        }
    }
}

/// Static, ascending list of thresholds plus the label of everything above them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTable {
    pub thresholds: &'static [Threshold],
    pub fallback: &'static str,
}

impl ThresholdTable {
    pub const fn new(thresholds: &'static [Threshold], fallback: &'static str) -> Self {
        ThresholdTable {
            thresholds,
            fallback,
        }
    }

    pub fn label_for(&self, value: f64) -> &'static str {
        self.thresholds
            .iter()
            .find(|threshold| threshold.admits(value))
            .map(|threshold| threshold.label)
            .unwrap_or(self.fallback)
    }

    /// Bounds never decrease, and a `Below` entry never follows an `AtMost`
    /// entry with the same bound (it could never match).
    pub fn is_ascending(&self) -> bool {
        self.thresholds.windows(2).all(|pair| {
            let (lower, upper) = (&pair[0], &pair[1]);
            lower.bound < upper.bound
                || (lower.bound == upper.bound
                    && lower.boundary == Boundary::Below
                    && upper.boundary == Boundary::AtMost)
        })
    }

    /// All labels in bucket order, fallback last.
    pub fn labels(&self) -> Vec<&'static str> {
        self.thresholds
            .iter()
            .map(|threshold| threshold.label)
            .chain(std::iter::once(self.fallback))
            .collect()
    }
}

/// Label of the first threshold admitting `value`, or the table fallback.
pub fn classify(value: f64, table: &ThresholdTable) -> String {
    table.label_for(value).to_string()
}
