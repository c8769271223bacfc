pub mod reconstruction;
pub mod hinge;
pub mod hinge_adv;
pub mod dual_contrastive;
pub mod loss_type;

pub use reconstruction::ReconstructionLoss;
pub use hinge::HingeLoss;
pub use hinge_adv::HingeAdvLoss;
pub use dual_contrastive::DualContrastiveLoss;
pub use loss_type::LossType;
