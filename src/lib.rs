pub mod loss;

// Convenience re-exports
pub use loss::reconstruction::ReconstructionLoss;
pub use loss::hinge::HingeLoss;
pub use loss::hinge_adv::HingeAdvLoss;
pub use loss::dual_contrastive::DualContrastiveLoss;
pub use loss::loss_type::LossType;
