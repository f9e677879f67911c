mod confidence_interval;
mod confidence_level;
mod summary;
mod variance_kind;

pub use confidence_interval::ConfidenceInterval;
pub use confidence_level::ConfidenceLevel;
pub use summary::Summary;
pub use variance_kind::VarianceKind;
