mod boarding;
mod classifier;
mod detector;
mod engine;
mod throttle;

pub use boarding::{BoardingEvent, BoardingTracker};
pub use classifier::{classify, AdvisoryKind, DELTA_LIMIT, DELTA_REQUEST};
pub use detector::{AircraftDetector, AircraftSpec, SUPPORTED_AIRCRAFT};
pub use engine::{AdvisoryEngine, EngineState, UiSnapshot};
pub use throttle::{AdvisoryThrottle, DEFAULT_WINDOW_MINUTES};
