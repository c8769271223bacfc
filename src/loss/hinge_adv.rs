use candle_core::{Device, Result, Tensor};

/// Hinge version of the adversarial discriminator loss.
pub struct HingeAdvLoss;

impl HingeAdvLoss {
    /// Scalar hinge GAN loss:
    ///   −mean(min(0, −1 + real)) + −mean(min(0, −1 − fake))
    ///
    /// `real_logits` — discriminator output on real samples, e.g. `Tensor([1, 5, 5])`
    /// `fake_logits` — discriminator output on generated samples, same shape
    /// `device`      — where the zero threshold is materialised; it must match
    ///                 the inputs' device and has no effect on the value.
    ///
    /// The minimum clamps each margin term at zero once it is satisfied
    /// (real ≥ 1, fake ≤ −1), so only violating samples carry gradient.
    pub fn loss(real_logits: &Tensor, fake_logits: &Tensor, device: &Device) -> Result<Tensor> {
        let threshold = Tensor::zeros(1, real_logits.dtype(), device)?;
        let real_loss = threshold
            .broadcast_minimum(&real_logits.affine(1.0, -1.0)?)?
            .mean_all()?
            .neg()?;
        let fake_loss = threshold
            .broadcast_minimum(&fake_logits.affine(-1.0, -1.0)?)?
            .mean_all()?
            .neg()?;
        real_loss + fake_loss
    }
}
