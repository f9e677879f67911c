// Single source of truth for all default values.

// --- Descriptive ---
pub const DEFAULT_SAMPLE_VARIANCE: bool = true;

// --- Inference ---
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
