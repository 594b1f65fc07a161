use ndarray::{Array2, ArrayView2, Axis};

/// Softmax normalization along `axis`.
///
/// Every lane of the result is non-negative and sums to 1. The input is
/// shifted by its per-lane maximum before exponentiating so large logits do
/// not overflow.
pub fn softmax(x: ArrayView2<f32>, axis: Axis) -> Array2<f32> {
    let max = x.fold_axis(axis, f32::NEG_INFINITY, |acc, &v| acc.max(v));
    let mut out = &x - &max.insert_axis(axis);
    out.mapv_inplace(f32::exp);
    let sums = out.sum_axis(axis).insert_axis(axis);
    out /= &sums;

    out
}
