//! One builder per shape family.

pub mod box_shape;
pub mod cylinder;
pub mod gear;
pub mod paper_airplane;

pub use box_shape::BoxBuilder;
pub use cylinder::CylinderBuilder;
pub use gear::GearBuilder;
pub use paper_airplane::PaperAirplaneBuilder;
