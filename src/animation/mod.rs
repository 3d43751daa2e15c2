pub mod bounce;

pub use bounce::{BounceAnimator, BounceOptions, FloatOffset};
