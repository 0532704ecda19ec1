/// Condition a value must satisfy for a band to apply. All bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Bound {
    AtMost(f64),
    AtLeast(f64),
    Below(f64),
    Within { min: f64, max: f64 },
}

impl Bound {
    fn contains(self, value: f64) -> bool {
        match self {
            Bound::AtMost(ceiling) => value <= ceiling,
            Bound::AtLeast(floor) => value >= floor,
            Bound::Below(limit) => value < limit,
            Bound::Within { min, max } => value >= min && value <= max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Band {
    pub bound: Bound,
    pub delta: f64,
}

const fn band(bound: Bound, delta: f64) -> Band {
    Band { bound, delta }
}

/// Ordered bands evaluated top-down; the first band containing the value wins, otherwise the
/// fallback delta applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BandLadder {
    bands: &'static [Band],
    fallback: f64,
}

impl BandLadder {
    pub(crate) fn delta(&self, value: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| band.bound.contains(value))
            .map(|band| band.delta)
            .unwrap_or(self.fallback)
    }
}

pub(crate) static LOAN_PERCENT_INCOME: BandLadder = BandLadder {
    bands: &[
        band(Bound::AtMost(0.10), 0.20),
        band(Bound::AtMost(0.20), 0.10),
        band(Bound::AtMost(0.30), 0.0),
        band(Bound::AtMost(0.40), -0.15),
    ],
    fallback: -0.30,
};

pub(crate) static ANNUAL_INCOME: BandLadder = BandLadder {
    bands: &[
        band(Bound::AtLeast(100_000.0), 0.12),
        band(Bound::AtLeast(70_000.0), 0.08),
        band(Bound::AtLeast(50_000.0), 0.04),
        band(Bound::AtLeast(30_000.0), -0.02),
    ],
    fallback: -0.08,
};

pub(crate) static CREDIT_SCORE: BandLadder = BandLadder {
    bands: &[
        band(Bound::AtLeast(750.0), 0.15),
        band(Bound::AtLeast(700.0), 0.10),
        band(Bound::AtLeast(650.0), 0.03),
        band(Bound::AtLeast(600.0), -0.05),
    ],
    fallback: -0.20,
};

pub(crate) static INTEREST_RATE: BandLadder = BandLadder {
    bands: &[
        band(Bound::AtMost(8.0), 0.06),
        band(Bound::AtMost(12.0), 0.02),
        band(Bound::AtMost(16.0), -0.04),
    ],
    fallback: -0.10,
};

pub(crate) static LOAN_AMOUNT_TO_INCOME: BandLadder = BandLadder {
    bands: &[
        band(Bound::AtMost(0.30), 0.06),
        band(Bound::AtMost(0.50), 0.02),
        band(Bound::AtMost(0.80), -0.03),
    ],
    fallback: -0.08,
};

pub(crate) static AGE: BandLadder = BandLadder {
    bands: &[
        band(Bound::Within { min: 30.0, max: 55.0 }, 0.04),
        band(Bound::Within { min: 25.0, max: 29.0 }, 0.02),
        band(Bound::Below(25.0), -0.03),
    ],
    fallback: -0.01,
};

pub(crate) static CREDIT_HISTORY: BandLadder = BandLadder {
    bands: &[
        band(Bound::AtLeast(10.0), 0.06),
        band(Bound::AtLeast(5.0), 0.03),
        band(Bound::AtLeast(2.0), 0.01),
    ],
    fallback: -0.05,
};

pub(crate) static EMPLOYMENT_EXPERIENCE: BandLadder = BandLadder {
    bands: &[
        band(Bound::AtLeast(10.0), 0.04),
        band(Bound::AtLeast(5.0), 0.02),
        band(Bound::AtLeast(2.0), 0.01),
    ],
    fallback: -0.03,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_band_wins() {
        assert_eq!(CREDIT_SCORE.delta(800.0), 0.15);
        assert_eq!(CREDIT_SCORE.delta(720.0), 0.10);
        assert_eq!(CREDIT_SCORE.delta(599.0), -0.20);
    }

    #[test]
    fn non_finite_values_fall_through_ceiling_ladders() {
        assert_eq!(LOAN_AMOUNT_TO_INCOME.delta(f64::INFINITY), -0.08);
        assert_eq!(LOAN_AMOUNT_TO_INCOME.delta(f64::NAN), -0.08);
    }

    #[test]
    fn age_bands_cover_boundaries() {
        assert_eq!(AGE.delta(24.0), -0.03);
        assert_eq!(AGE.delta(25.0), 0.02);
        assert_eq!(AGE.delta(29.0), 0.02);
        assert_eq!(AGE.delta(30.0), 0.04);
        assert_eq!(AGE.delta(55.0), 0.04);
        assert_eq!(AGE.delta(56.0), -0.01);
    }
}
