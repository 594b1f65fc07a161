use super::{LeakyRelu, Relu, Sigmoid};

/// An activation function applied elementwise after a linear transition.
///
/// Each variant carries its own scalar parameter (if any), so every call site
/// dispatches uniformly through [`ActFn::f`] and [`ActFn::df`].
#[derive(Clone, Copy, Debug)]
pub enum ActFn {
    Relu(Relu),
    LeakyRelu(LeakyRelu),
    Sigmoid(Sigmoid),
}

impl ActFn {
    pub fn relu() -> Self {
        Self::Relu(Relu::new())
    }

    pub fn leaky_relu(slope: f32) -> Self {
        Self::LeakyRelu(LeakyRelu::new(slope))
    }

    pub fn sigmoid(temperature: f32) -> Self {
        Self::Sigmoid(Sigmoid::new(temperature))
    }

    pub fn f(&self, z: f32) -> f32 {
        match self {
            Self::Relu(a) => a.f(z),
            Self::LeakyRelu(a) => a.f(z),
            Self::Sigmoid(a) => a.f(z),
        }
    }

    pub fn df(&self, z: f32) -> f32 {
        match self {
            Self::Relu(a) => a.df(z),
            Self::LeakyRelu(a) => a.df(z),
            Self::Sigmoid(a) => a.df(z),
        }
    }

    /// Returns the function's name for summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relu(_) => "relu",
            Self::LeakyRelu(_) => "leaky_relu",
            Self::Sigmoid(_) => "sigmoid",
        }
    }
}
