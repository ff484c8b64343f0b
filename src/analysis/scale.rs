//! Min-max scaling onto `[0, 1]`

/// Linear map of an observed range onto the unit interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pub min: f64,
    pub max: f64,
}

impl UnitScale {
    /// Fit to the finite values; `None` when there are none
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| {
                Some(match acc {
                    Some(s) => Self {
                        min: s.min.min(v),
                        max: s.max.max(v),
                    },
                    None => Self { min: v, max: v },
                })
            })
    }

    /// Scale one value; a constant series maps to 0.5
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            0.5
        } else {
            (v - self.min) / span
        }
    }
}

/// Scale a series with gaps, keeping the gaps
pub fn normalize_unit(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let Some(scale) = UnitScale::fit(values.iter().flatten().copied()) else {
        return vec![None; values.len()];
    };
    values.iter().map(|v| v.map(|v| scale.apply(v))).collect()
}
