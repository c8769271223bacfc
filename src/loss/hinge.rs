use candle_core::{Result, Tensor};

/// Margin loss over discriminator logit maps.
pub struct HingeLoss;

impl HingeLoss {
    /// Scalar hinge: mean(relu(1 + real) + relu(1 − fake))
    ///
    /// `real` and `fake` — logit maps of identical shape, e.g. `Tensor([1, 5, 5])`.
    ///
    /// Sign convention: this pushes `real` below −1 and `fake` above 1, the
    /// inverse of the usual discriminator framing. Which argument carries
    /// which logits is decided at the call site, so the formula is kept
    /// exactly as callers expect it.
    pub fn loss(real: &Tensor, fake: &Tensor) -> Result<Tensor> {
        let real_term = real.affine(1.0, 1.0)?.relu()?;
        let fake_term = fake.affine(-1.0, 1.0)?.relu()?;
        (real_term + fake_term)?.mean_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::Device;

    #[test]
    fn literal_example() -> Result<()> {
        let dev = Device::Cpu;
        let real = Tensor::new(&[[0f32]], &dev)?;
        let fake = Tensor::new(&[[0f32]], &dev)?;
        // relu(1 + 0) + relu(1 - 0) = 2, mean over one element
        let loss = HingeLoss::loss(&real, &fake)?.to_scalar::<f32>()?;
        assert!((loss - 2.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn never_negative() -> Result<()> {
        let dev = Device::Cpu;
        for _ in 0..4 {
            let real = Tensor::randn(0f32, 3f32, (1, 5, 5), &dev)?;
            let fake = Tensor::randn(0f32, 3f32, (1, 5, 5), &dev)?;
            let loss = HingeLoss::loss(&real, &fake)?.to_scalar::<f32>()?;
            assert!(loss >= 0.0);
        }
        Ok(())
    }

    #[test]
    fn zero_once_both_margins_are_met() -> Result<()> {
        let dev = Device::Cpu;
        // real ≤ -1 and fake ≥ 1 zero out both relu terms
        let real = Tensor::full(-2f32, (1, 5, 5), &dev)?;
        let fake = Tensor::full(3f32, (1, 5, 5), &dev)?;
        let loss = HingeLoss::loss(&real, &fake)?.to_scalar::<f32>()?;
        assert_eq!(loss, 0.0);
        Ok(())
    }

    #[test]
    fn sign_convention_is_not_reversed() -> Result<()> {
        let dev = Device::Cpu;
        // With the arguments swapped relative to the margin-satisfying case,
        // both terms violate and the loss is strictly positive.
        let real = Tensor::full(3f32, (1, 5, 5), &dev)?;
        let fake = Tensor::full(-2f32, (1, 5, 5), &dev)?;
        let loss = HingeLoss::loss(&real, &fake)?.to_scalar::<f32>()?;
        assert!((loss - 7.0).abs() < 1e-6);
        Ok(())
    }
}
