use candle_core::{Result, Tensor};

/// Pixel-wise reconstruction loss for the autoencoding path.
pub struct ReconstructionLoss;

impl ReconstructionLoss {
    /// Scalar MSE: mean((x − f)²) over every element.
    ///
    /// `x` — real image, `Tensor([C, H, W])` (any rank works)
    /// `f` — decoded image, same shape as `x`
    ///
    /// Returns a rank-0 tensor so the value stays on the autodiff graph.
    /// Mismatched shapes fail with candle's native shape error.
    pub fn loss(x: &Tensor, f: &Tensor) -> Result<Tensor> {
        (x - f)?.sqr()?.mean_all()
    }
}
