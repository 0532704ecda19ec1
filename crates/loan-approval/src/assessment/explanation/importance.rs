use super::super::domain::Attribute;

/// Static display weights per attribute. Used only to rank explanation factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportanceTable {
    entries: [(Attribute, f64); 13],
}

/// Weights the heuristic's bands were hand-tuned against.
pub static FEATURE_IMPORTANCE: ImportanceTable = ImportanceTable {
    entries: [
        (Attribute::LoanToIncomeRatio, 0.25),
        (Attribute::AnnualIncome, 0.15),
        (Attribute::CreditScore, 0.12),
        (Attribute::LoanInterestRate, 0.10),
        (Attribute::LoanAmount, 0.09),
        (Attribute::Age, 0.07),
        (Attribute::CreditHistoryLength, 0.06),
        (Attribute::EmploymentExperience, 0.05),
        (Attribute::PriorDefault, 0.04),
        (Attribute::HomeOwnership, 0.03),
        (Attribute::LoanIntent, 0.02),
        (Attribute::Education, 0.01),
        (Attribute::Gender, 0.01),
    ],
};

impl ImportanceTable {
    pub const fn new(entries: [(Attribute, f64); 13]) -> Self {
        Self { entries }
    }

    pub fn standard() -> &'static Self {
        &FEATURE_IMPORTANCE
    }

    pub fn weight(&self, attribute: Attribute) -> f64 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == attribute)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }

    pub fn entries(&self) -> &[(Attribute, f64)] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_attribute_once() {
        let table = ImportanceTable::standard();
        for attribute in Attribute::ordered() {
            let count = table
                .entries()
                .iter()
                .filter(|(candidate, _)| *candidate == attribute)
                .count();
            assert_eq!(count, 1, "{attribute} listed {count} times");
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total = ImportanceTable::standard().total();
        assert!((total - 1.0).abs() < 1e-9, "weights sum to {total}");
    }
}
