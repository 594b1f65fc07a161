use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NetErr>;

/// The network's error type.
#[derive(Debug, PartialEq, Eq)]
pub enum NetErr {
    /// An argument is invalid for semantic or domain reasons.
    InvalidInput(&'static str),

    /// The output layer is too narrow to hold a probability distribution.
    OutputTooNarrow {
        got: usize,
    },

    /// Two lists (or a list and a dimension) that must agree in length do not.
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },

    /// A replacement weight matrix does not match the layer's dimensions.
    WeightShape {
        layer: usize,
        got: (usize, usize),
        expected: (usize, usize),
    },

    /// A replacement bias vector does not match the layer's width.
    BiasShape {
        layer: usize,
        got: usize,
        expected: usize,
    },
}

impl Display for NetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NetErr::InvalidInput(msg) => format!("invalid input: {msg}"),
            NetErr::OutputTooNarrow { got } => format!(
                "the output layer must have at least 2 neurons to form a distribution, got {got}"
            ),
            NetErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => {
                format!(
                    "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
                )
            }
            NetErr::WeightShape {
                layer,
                got,
                expected,
            } => format!(
                "the weight matrix for layer {layer} has shape {got:?}, expected {expected:?}"
            ),
            NetErr::BiasShape {
                layer,
                got,
                expected,
            } => format!("the bias vector for layer {layer} has length {got}, expected {expected}"),
        };

        write!(f, "{s}")
    }
}

impl Error for NetErr {}
