//! Timer plumbing for the sidebar collapse animation.
//!
//! The sidebar keeps a `transitioning` flag raised for the duration of the
//! CSS width animation so that heavy content (charts, wide tables) can defer
//! rendering until the layout has settled. Re-toggling mid-animation must
//! restart the window rather than let the earlier timer clear the flag
//! early, so each toggle arms a new generation and stale timers are ignored.

/// Duration of the sidebar width animation, in milliseconds. Must match the
/// `transition` duration in the sidebar stylesheet.
pub const TRANSITION_MS: u64 = 300;

/// Generation counter that invalidates in-flight transition timers.
///
/// Every toggle calls [`TransitionGate::arm`] and tags its timer with the
/// returned generation. When the timer fires it checks
/// [`TransitionGate::is_current`]; a timer armed before the latest toggle
/// sees a newer generation and does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionGate {
    generation: u64,
}

impl TransitionGate {
    /// Start a new transition window, invalidating all earlier ones.
    /// Returns the generation the new timer should carry.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether `generation` still identifies the latest transition window.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

pub(crate) async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
