use ndarray::Array1;

/// Ordinary least-squares line `value = intercept + slope * position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fits the line through `(positions[i], values[i])`.
    ///
    /// Returns `None` with fewer than two points or when every position is
    /// identical.
    pub fn fit(positions: &Array1<f64>, values: &Array1<f64>) -> Option<Self> {
        if positions.len() < 2 || positions.len() != values.len() {
            return None;
        }
        let mean_x = positions.mean()?;
        let mean_y = values.mean()?;

        let dx = positions - mean_x;
        let dy = values - mean_y;
        let denom = dx.dot(&dx);
        if denom == 0.0 {
            return None;
        }

        let slope = dx.dot(&dy) / denom;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, positions: &Array1<f64>) -> Array1<f64> {
        positions.mapv(|x| self.intercept + self.slope * x)
    }

    /// `values - predicted` for every point.
    pub fn residuals(&self, positions: &Array1<f64>, values: &Array1<f64>) -> Array1<f64> {
        values - &self.predict(positions)
    }
}
