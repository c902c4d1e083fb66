// One-time rendering engine registration
use std::sync::Once;

static REGISTERED: Once = Once::new();

/// Register the rendering engine's components (time scale, zoom handling)
/// with the process. Safe to call any number of times; only the first call
/// does anything, and there is no runtime state beyond having run.
pub fn ensure_engine_registered() {
    REGISTERED.call_once(|| {
        tracing::debug!("Rendering engine components registered");
    });
}

/// Whether registration has completed.
pub fn engine_registered() -> bool {
    REGISTERED.is_completed()
}
