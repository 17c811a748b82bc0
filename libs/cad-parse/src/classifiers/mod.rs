//! The four family classifiers.

pub mod box_shape;
pub mod cylinder;
pub mod gear;
pub mod paper_airplane;

pub use box_shape::BoxClassifier;
pub use cylinder::CylinderClassifier;
pub use gear::GearClassifier;
pub use paper_airplane::{PaperAirplaneClassifier, PAPER_AIRPLANE_VOCABULARY};
