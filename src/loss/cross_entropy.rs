use ndarray::{Array2, ArrayView2, Zip};

use super::LossFn;

// Keeps log() away from exact zeros produced by one-hot targets.
const EPS: f32 = 1e-12;

/// Cross-entropy loss over batches of probability distributions.
#[derive(Default, Clone, Copy)]
pub struct CrossEntropy;

impl CrossEntropy {
    /// Returns a new `CrossEntropy`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for CrossEntropy {
    fn loss(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> f32 {
        let total = Zip::from(&y_pred)
            .and(&y)
            .fold(0., |acc, &p, &t| acc - t * (p + EPS).ln());

        total / y_pred.nrows() as f32
    }

    fn loss_prime(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> Array2<f32> {
        let batch = y_pred.nrows() as f32;
        let mut d = y_pred.to_owned();
        d.zip_mut_with(&y, |p, &t| *p = -t / ((*p + EPS) * batch));

        d
    }
}
