mod classifier;
mod error;
mod fingers;
pub mod landmarks;
mod pipeline;
mod smoother;

pub use classifier::{FingerPattern, FingerRuleClassifier, PoseClassifier, PoseRule};
pub use error::Error;
pub use fingers::{Finger, FingerState};
pub use landmarks::{HandLandmarks, LANDMARK_COUNT, Landmark};
pub use pipeline::{PoseConfig, PosePipeline, SmoothingConfig};
pub use smoother::LabelSmoother;
