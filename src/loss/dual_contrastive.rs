use candle_core::{DType, Device, Result, Tensor};
use candle_nn::loss;

/// Contrastive discriminator loss without explicit margins.
pub struct DualContrastiveLoss;

impl DualContrastiveLoss {
    /// Frames real-vs-fake discrimination as an N-way classification:
    /// every real logit must outrank every fake logit, and symmetrically
    /// every negated fake logit must outrank every negated real logit.
    ///
    /// Both inputs are flattened to 1-D; they may have any shape as long as
    /// a flattening exists. `device` hosts the `u32` class-index tensor the
    /// cross-entropy needs and must match the inputs' device.
    pub fn loss(real_logits: &Tensor, fake_logits: &Tensor, device: &Device) -> Result<Tensor> {
        let real = real_logits.flatten_all()?;
        let fake = fake_logits.flatten_all()?;
        let real_over_fake = Self::loss_half(&real, &fake, device)?;
        let fake_under_real = Self::loss_half(&fake.neg()?, &real.neg()?, device)?;
        real_over_fake + fake_under_real
    }

    /// One direction of the objective. Builds an (N1, 1 + N2) logit matrix —
    /// column 0 holds each `t1` entry, the remaining columns repeat `t2` —
    /// and takes categorical cross-entropy with the target class fixed to 0,
    /// so each `t1` entry is pushed to dominate all of `t2`.
    fn loss_half(t1: &Tensor, t2: &Tensor, device: &Device) -> Result<Tensor> {
        let n1 = t1.dim(0)?;
        let n2 = t2.dim(0)?;
        let own = t1.reshape((n1, 1))?;
        let rest = t2.reshape((1, n2))?.repeat((n1, 1))?;
        let logits = Tensor::cat(&[&own, &rest], 1)?;
        let target = Tensor::zeros(n1, DType::U32, device)?;
        loss::cross_entropy(&logits, &target)
    }
}
