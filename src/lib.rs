pub mod activations;
pub mod error;
pub mod feedforward;
pub mod loss;
pub mod optim;

pub use error::{NetErr, Result};
pub use feedforward::{Ffnn, Gradients};
