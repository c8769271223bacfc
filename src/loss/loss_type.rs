use candle_core::{Device, Result, Tensor};
use serde::{Serialize, Deserialize};

use super::{DualContrastiveLoss, HingeAdvLoss};

/// Selects which adversarial objective the training loop uses.
///
/// - `Hinge`           — Margin-based hinge GAN loss; logits past the ±1
///   margin stop contributing. See `HingeAdvLoss`.
/// - `DualContrastive` — Softmax contrastive loss; every real logit must
///   outrank every fake logit, no explicit margin. See `DualContrastiveLoss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Hinge,
    DualContrastive,
}

impl LossType {
    /// Discriminator loss on real/fake logit batches under the selected
    /// objective. `device` hosts the constant tensors the objectives need.
    pub fn discriminator_loss(
        &self,
        real_logits: &Tensor,
        fake_logits: &Tensor,
        device: &Device,
    ) -> Result<Tensor> {
        match self {
            LossType::Hinge => HingeAdvLoss::loss(real_logits, fake_logits, device),
            LossType::DualContrastive => {
                DualContrastiveLoss::loss(real_logits, fake_logits, device)
            }
        }
    }
}
