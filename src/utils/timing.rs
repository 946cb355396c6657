// file: src/utils/timing.rs
// description: request timing for API calls

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Times one API request. Slow requests are reported at warn level so they
/// show up without `--verbose`.
pub struct RequestTimer {
    endpoint: String,
    start: Instant,
    slow_threshold: Duration,
}

impl RequestTimer {
    pub fn start(endpoint: &str, slow_threshold: Duration) -> Self {
        debug!("Request started: {}", endpoint);
        Self {
            endpoint: endpoint.to_string(),
            start: Instant::now(),
            slow_threshold,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        if elapsed > self.slow_threshold {
            warn!(
                "Slow request: {} took {:.2}s (threshold: {:.2}s)",
                self.endpoint,
                elapsed.as_secs_f64(),
                self.slow_threshold.as_secs_f64()
            );
        } else {
            debug!(
                "Request finished: {} in {}ms",
                self.endpoint,
                elapsed.as_millis()
            );
        }
        elapsed
    }
}
