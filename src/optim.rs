use crate::{
    error::{NetErr, Result},
    Ffnn, Gradients,
};

/// Gradient descent optimization algorithm.
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `step`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    /// Updates the network's parameters according to the algorithm's learning
    /// rule, that is, making a step in the opposite direction of the gradient,
    /// with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `net` - The network whose parameters are going to be modified.
    /// * `grads` - The gradients used for taking the step.
    pub fn step(&self, net: &mut Ffnn, grads: &Gradients) -> Result<()> {
        let (weights, biases) = net.params_mut();

        if grads.weights.len() != weights.len() || grads.biases.len() != biases.len() {
            return Err(NetErr::SizeMismatch {
                a: "gradient lists",
                b: "parameter lists",
                got: grads.weights.len() + grads.biases.len(),
                expected: weights.len() + biases.len(),
            });
        }

        let lr = self.learning_rate;

        for (w, gw) in weights.iter_mut().zip(&grads.weights) {
            w.scaled_add(-lr, gw);
        }

        for (b, gb) in biases.iter_mut().zip(&grads.biases) {
            b.scaled_add(-lr, gb);
        }

        Ok(())
    }
}
