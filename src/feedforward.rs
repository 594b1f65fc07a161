use std::fmt::{self, Display};

use log::debug;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use ndarray_rand::RandomExt;
use rand::distr::StandardUniform;

use crate::{
    activations::{softmax, ActFn},
    error::{NetErr, Result},
};

/// A feed-forward neural network.
///
/// The network owns one weight matrix and one bias vector per layer
/// transition, plus one activation function per hidden transition. The output
/// transition always goes through a softmax, so every forward pass ends in
/// rows that form probability distributions.
#[derive(Clone)]
pub struct Ffnn {
    sizes: Vec<usize>,
    weights: Vec<Array2<f32>>,
    biases: Vec<Array1<f32>>,
    act_fns: Vec<ActFn>,
}

/// Per-parameter gradients produced by [`Ffnn::backward`].
///
/// The lists mirror the network's weight and bias lists in length and shape.
pub struct Gradients {
    pub weights: Vec<Array2<f32>>,
    pub biases: Vec<Array1<f32>>,
}

impl Ffnn {
    /// Creates a new `Ffnn`.
    ///
    /// Weights start uniform in `[0, 1)` and biases start at zero.
    ///
    /// # Arguments
    /// * `size_in` - The number of neurons in the input layer.
    /// * `hidden_sizes` - The sizes of the hidden layers.
    /// * `act_fns` - One activation function per hidden layer.
    /// * `size_out` - The number of neurons in the output layer.
    ///
    /// # Returns
    /// A new `Ffnn` instance, or an error if the architecture is invalid.
    pub fn new(
        size_in: usize,
        hidden_sizes: &[usize],
        act_fns: Vec<ActFn>,
        size_out: usize,
    ) -> Result<Self> {
        if size_in == 0 {
            return Err(NetErr::InvalidInput("the input layer cannot be empty"));
        }

        if size_out < 2 {
            return Err(NetErr::OutputTooNarrow { got: size_out });
        }

        if act_fns.len() != hidden_sizes.len() {
            return Err(NetErr::SizeMismatch {
                a: "activation functions",
                b: "hidden layers",
                got: act_fns.len(),
                expected: hidden_sizes.len(),
            });
        }

        let mut sizes = vec![size_in];
        sizes.extend_from_slice(hidden_sizes);
        sizes.push(size_out);

        let weights = sizes
            .windows(2)
            .map(|dim| Array2::random((dim[0], dim[1]), StandardUniform))
            .collect();

        let biases = sizes[1..].iter().map(|&size| Array1::zeros(size)).collect();

        debug!("initialized feed-forward network with layer sizes {sizes:?}");

        Ok(Self {
            sizes,
            weights,
            biases,
            act_fns,
        })
    }

    /// Computes the network's prediction for a batch of inputs.
    ///
    /// # Arguments
    /// * `input` - A `(batch, size_in)` array, one sample per row.
    ///
    /// # Returns
    /// A `(batch, size_out)` array whose rows are probability distributions.
    pub fn forward(&self, input: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.check_input(input)?;

        let last = self.weights.len() - 1;
        let mut out = input.to_owned();

        for ((w, b), act) in self.weights[..last]
            .iter()
            .zip(&self.biases[..last])
            .zip(&self.act_fns)
        {
            out = out.dot(w) + b;
            out.mapv_inplace(|z| act.f(z));
        }

        let logits = out.dot(&self.weights[last]) + &self.biases[last];

        Ok(softmax(logits.view(), Axis(1)))
    }

    /// Computes the gradient of the cross-entropy loss with respect to every
    /// parameter of the network.
    ///
    /// The output delta is `(y_pred - y) / batch`, the cross-entropy
    /// derivative taken through the softmax transition; hidden deltas flow
    /// back through each activation function's derivative.
    ///
    /// # Arguments
    /// * `x` - A `(batch, size_in)` input batch.
    /// * `y` - A `(batch, size_out)` batch of one-hot (or soft) targets.
    ///
    /// # Returns
    /// The gradients, shaped exactly like the parameters.
    pub fn backward(&self, x: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<Gradients> {
        if y.ncols() != self.size_out() {
            return Err(NetErr::SizeMismatch {
                a: "target columns",
                b: "the output layer",
                got: y.ncols(),
                expected: self.size_out(),
            });
        }

        if y.nrows() != x.nrows() {
            return Err(NetErr::SizeMismatch {
                a: "target rows",
                b: "input rows",
                got: y.nrows(),
                expected: x.nrows(),
            });
        }

        let (pre_acts, acts, y_pred) = self.trace(x)?;

        let mut grad_w: Vec<_> = self
            .weights
            .iter()
            .map(|w| Array2::zeros(w.dim()))
            .collect();

        let mut grad_b: Vec<_> = self
            .biases
            .iter()
            .map(|b| Array1::zeros(b.dim()))
            .collect();

        let mut delta = (&y_pred - &y) / x.nrows() as f32;

        for idx in (0..self.weights.len()).rev() {
            grad_w[idx] = acts[idx].t().dot(&delta);
            grad_b[idx] = delta.sum_axis(Axis(0));

            if idx > 0 {
                let act = &self.act_fns[idx - 1];
                delta = delta.dot(&self.weights[idx].t());
                delta.zip_mut_with(&pre_acts[idx - 1], |d, &z| *d *= act.df(z));
            }
        }

        Ok(Gradients {
            weights: grad_w,
            biases: grad_b,
        })
    }

    /// Replaces every weight matrix at once.
    ///
    /// The replacement must carry one matrix per layer transition, each with
    /// that transition's exact shape; otherwise nothing is modified.
    pub fn set_weights(&mut self, weights: Vec<Array2<f32>>) -> Result<()> {
        if weights.len() != self.weights.len() {
            return Err(NetErr::SizeMismatch {
                a: "replacement weights",
                b: "layer transitions",
                got: weights.len(),
                expected: self.weights.len(),
            });
        }

        for (layer, (w, dim)) in weights.iter().zip(self.sizes.windows(2)).enumerate() {
            let expected = (dim[0], dim[1]);
            if w.dim() != expected {
                return Err(NetErr::WeightShape {
                    layer,
                    got: w.dim(),
                    expected,
                });
            }
        }

        self.weights = weights;

        Ok(())
    }

    /// Replaces every bias vector at once.
    ///
    /// Same contract as [`Ffnn::set_weights`]: one vector per layer
    /// transition, each with the transition's output width.
    pub fn set_biases(&mut self, biases: Vec<Array1<f32>>) -> Result<()> {
        if biases.len() != self.biases.len() {
            return Err(NetErr::SizeMismatch {
                a: "replacement biases",
                b: "layer transitions",
                got: biases.len(),
                expected: self.biases.len(),
            });
        }

        for (layer, (b, &expected)) in biases.iter().zip(&self.sizes[1..]).enumerate() {
            if b.dim() != expected {
                return Err(NetErr::BiasShape {
                    layer,
                    got: b.dim(),
                    expected,
                });
            }
        }

        self.biases = biases;

        Ok(())
    }

    /// Replaces the activation functions, one per hidden layer.
    pub fn set_act_fns(&mut self, act_fns: Vec<ActFn>) -> Result<()> {
        let hidden = self.sizes.len() - 2;
        if act_fns.len() != hidden {
            return Err(NetErr::SizeMismatch {
                a: "replacement activation functions",
                b: "hidden layers",
                got: act_fns.len(),
                expected: hidden,
            });
        }

        self.act_fns = act_fns;

        Ok(())
    }

    pub fn weights(&self) -> &[Array2<f32>] {
        &self.weights
    }

    pub fn biases(&self) -> &[Array1<f32>] {
        &self.biases
    }

    pub fn act_fns(&self) -> &[ActFn] {
        &self.act_fns
    }

    /// The full layer size sequence, input and output included.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn size_in(&self) -> usize {
        self.sizes[0]
    }

    pub fn size_out(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    pub(crate) fn params_mut(&mut self) -> (&mut [Array2<f32>], &mut [Array1<f32>]) {
        (&mut self.weights, &mut self.biases)
    }

    // Forward pass that keeps the per-layer pre-activations and activations
    // around for the backward sweep.
    fn trace(
        &self,
        x: ArrayView2<f32>,
    ) -> Result<(Vec<Array2<f32>>, Vec<Array2<f32>>, Array2<f32>)> {
        self.check_input(x)?;

        let last = self.weights.len() - 1;
        let mut pre_acts = Vec::with_capacity(last);
        let mut acts = Vec::with_capacity(self.weights.len());
        acts.push(x.to_owned());

        for (idx, act) in self.act_fns.iter().enumerate() {
            let z = acts[idx].dot(&self.weights[idx]) + &self.biases[idx];
            acts.push(z.mapv(|v| act.f(v)));
            pre_acts.push(z);
        }

        let logits = acts[last].dot(&self.weights[last]) + &self.biases[last];
        let y_pred = softmax(logits.view(), Axis(1));

        Ok((pre_acts, acts, y_pred))
    }

    fn check_input(&self, input: ArrayView2<f32>) -> Result<()> {
        if input.ncols() != self.size_in() {
            return Err(NetErr::SizeMismatch {
                a: "input columns",
                b: "the input layer",
                got: input.ncols(),
                expected: self.size_in(),
            });
        }

        Ok(())
    }
}

impl Display for Ffnn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ffnn {:?}", self.sizes)?;

        for (layer, (w, b)) in self.weights.iter().zip(&self.biases).enumerate() {
            let act = match self.act_fns.get(layer) {
                Some(act) => act.name(),
                None => "softmax",
            };

            write!(
                f,
                "\n\tlayer {layer}: weights {:?}, biases ({},), {act}",
                w.dim(),
                b.dim()
            )?;
        }

        Ok(())
    }
}
