mod act_fn;
mod leaky_relu;
mod relu;
mod sigmoid;
mod softmax;

pub use act_fn::ActFn;
pub use leaky_relu::LeakyRelu;
pub use relu::Relu;
pub use sigmoid::Sigmoid;
pub use softmax::softmax;
