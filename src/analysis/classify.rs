//! Bucketed color classification
//!
//! A [`ClassificationScheme`] maps a scalar onto one of a fixed set of ordered
//! buckets delimited by `boundaries` (`n + 1` boundaries for `n` colors).
//! Every bucket is lower-inclusive and upper-exclusive, except the last one,
//! which also contains its upper boundary:
//!
//! ```text
//! TFR snapshot:  [0, 1.4) [1.4, 1.8) [1.8, 2.4) [2.4, 5) [5, 8]
//! TFR change:    [-5, -3) [-3, -1) [-1, 0]
//! ```
//!
//! Values outside `[first, last]` are either reported as
//! [`Class::OutOfRange`] or clamped into the edge buckets, depending on the
//! scheme's [`EdgePolicy`]. Missing values are [`Class::Missing`].

use egui::Color32;

use super::palette;

/// What happens to values outside the outer boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Report them as [`Class::OutOfRange`]
    OutOfRange,
    /// Put them in the first or last bucket
    Clamp,
}

/// Result of classifying one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Bucket(usize),
    OutOfRange,
    Missing,
}

/// One legend row
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub class: Class,
    pub label: String,
    pub color: Color32,
}

/// Ordered buckets with one color each
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationScheme {
    boundaries: Vec<f64>,
    colors: Vec<Color32>,
    edges: EdgePolicy,
    out_of_range_color: Color32,
}

impl ClassificationScheme {
    /// Create a scheme from `n + 1` strictly increasing boundaries and `n` colors
    ///
    /// # Panics
    ///
    /// Panics if the boundary and color counts disagree or the boundaries are
    /// not strictly increasing. Schemes are compile-time constants, so this is
    /// a programming error rather than an input error.
    pub fn new(boundaries: Vec<f64>, colors: Vec<Color32>, edges: EdgePolicy) -> Self {
        assert!(!colors.is_empty(), "a scheme needs at least one bucket");
        assert_eq!(
            boundaries.len(),
            colors.len() + 1,
            "{} colors need {} boundaries",
            colors.len(),
            colors.len() + 1
        );
        assert!(
            boundaries.windows(2).all(|w| w[0] < w[1]),
            "boundaries must be strictly increasing"
        );

        Self {
            boundaries,
            colors,
            edges,
            out_of_range_color: palette::OUT_OF_RANGE,
        }
    }

    /// Five-bucket scheme for TFR snapshots
    pub fn tfr_snapshot() -> Self {
        Self::new(
            vec![0.0, 1.4, 1.8, 2.4, 5.0, 8.0],
            vec![
                palette::DARK_BLUE,
                palette::LIGHT_BLUE,
                palette::SALMON,
                palette::DARK_RED,
                palette::DARK_MAGENTA,
            ],
            EdgePolicy::OutOfRange,
        )
    }

    /// Three-bucket scheme for the 1970 to 2020 TFR change
    ///
    /// Only declines are bucketed; an increase is out of range.
    pub fn tfr_difference() -> Self {
        Self::new(
            vec![-5.0, -3.0, -1.0, 0.0],
            vec![palette::DARK_BLUE, palette::LIGHT_BLUE, palette::SALMON],
            EdgePolicy::OutOfRange,
        )
    }

    /// Quantized TFR color scale of the linked scatter (stops 1, 2, 4, 6)
    pub fn tfr_quantized() -> Self {
        Self::new(
            vec![1.0, 2.0, 4.0, 6.0, f64::INFINITY],
            vec![
                palette::DARK_BLUE,
                palette::GREEN,
                palette::RED,
                palette::PURPLE,
            ],
            EdgePolicy::Clamp,
        )
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn bucket_count(&self) -> usize {
        self.colors.len()
    }

    pub fn edges(&self) -> EdgePolicy {
        self.edges
    }

    /// Classify one value
    pub fn classify(&self, value: Option<f64>) -> Class {
        let Some(v) = value.filter(|v| !v.is_nan()) else {
            return Class::Missing;
        };

        let first = self.boundaries[0];
        let last = self.boundaries[self.boundaries.len() - 1];
        let last_bucket = self.colors.len() - 1;

        if v < first {
            return match self.edges {
                EdgePolicy::Clamp => Class::Bucket(0),
                EdgePolicy::OutOfRange => Class::OutOfRange,
            };
        }
        if v > last {
            return match self.edges {
                EdgePolicy::Clamp => Class::Bucket(last_bucket),
                EdgePolicy::OutOfRange => Class::OutOfRange,
            };
        }
        if v == last {
            return Class::Bucket(last_bucket);
        }

        // first <= v < last, so at least one boundary is <= v
        let at_or_below = self.boundaries.partition_point(|b| *b <= v);
        Class::Bucket(at_or_below - 1)
    }

    /// Fill color of a class; `None` for missing values
    pub fn color(&self, class: Class) -> Option<Color32> {
        match class {
            Class::Bucket(i) => self.colors.get(i).copied(),
            Class::OutOfRange => Some(self.out_of_range_color),
            Class::Missing => None,
        }
    }

    /// Color of a value, or `None` when it is missing
    pub fn color_of(&self, value: Option<f64>) -> Option<Color32> {
        self.color(self.classify(value))
    }

    /// Legend label of a class
    pub fn label(&self, class: Class) -> String {
        match class {
            Class::Bucket(i) => self.bucket_label(i),
            Class::OutOfRange => "Out of range".to_string(),
            Class::Missing => "No data".to_string(),
        }
    }

    fn bucket_label(&self, i: usize) -> String {
        let lo = self.boundaries[i];
        let hi = self.boundaries[i + 1];
        let last = i + 1 == self.colors.len();

        if self.edges == EdgePolicy::Clamp && i == 0 {
            return format!("< {}", fmt_bound(hi));
        }
        if hi.is_infinite() || (self.edges == EdgePolicy::Clamp && last) {
            return format!("≥ {}", fmt_bound(lo));
        }
        let close = if last { ']' } else { ')' };
        format!("[{}, {}{close}", fmt_bound(lo), fmt_bound(hi))
    }

    /// Legend entries for every bucket, plus "Out of range" when requested
    pub fn legend(&self, include_out_of_range: bool) -> Vec<LegendEntry> {
        let mut entries: Vec<LegendEntry> = (0..self.colors.len())
            .map(|i| LegendEntry {
                class: Class::Bucket(i),
                label: self.bucket_label(i),
                color: self.colors[i],
            })
            .collect();

        if include_out_of_range && self.edges == EdgePolicy::OutOfRange {
            entries.push(LegendEntry {
                class: Class::OutOfRange,
                label: self.label(Class::OutOfRange),
                color: self.out_of_range_color,
            });
        }
        entries
    }
}

fn fmt_bound(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
