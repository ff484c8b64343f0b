//! Rectangular brush over the scatter plot
//!
//! The brush is an axis-aligned rectangle in data coordinates. All four
//! edges are inclusive. When no brush is active every row is selected;
//! when one is active, rows missing either coordinate are never selected.

/// Axis-aligned selection rectangle in data space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Brush {
    /// Rectangle spanned by two corners, given in any order
    pub fn from_corners(a: [f64; 2], b: [f64; 2]) -> Self {
        Self {
            min_x: a[0].min(b[0]),
            max_x: a[0].max(b[0]),
            min_y: a[1].min(b[1]),
            max_y: a[1].max(b[1]),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Whether a row with possibly missing coordinates is inside
    pub fn contains_opt(&self, x: Option<f64>, y: Option<f64>) -> bool {
        matches!((x, y), (Some(x), Some(y)) if self.contains(x, y))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Corners in plot order, for drawing
    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.min_x, self.min_y],
            [self.max_x, self.min_y],
            [self.max_x, self.max_y],
            [self.min_x, self.max_y],
        ]
    }
}

/// Whether one row is selected under an optional brush
pub fn is_selected(brush: Option<&Brush>, x: Option<f64>, y: Option<f64>) -> bool {
    brush.map_or(true, |b| b.contains_opt(x, y))
}

/// Rows selected under an optional brush, in input order
pub fn select<'a, T>(
    rows: &'a [T],
    brush: Option<&Brush>,
    coords: impl Fn(&T) -> (Option<f64>, Option<f64>),
) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| {
            let (x, y) = coords(row);
            is_selected(brush, x, y)
        })
        .collect()
}
