use crate::storage::{PlaybackSnapshot, PlaybackStore};
use crate::ui::AppContext;
use chrono::Utc;
use dioxus::prelude::*;
use tracing::info;

/// Featured video shown before the user picks anything.
pub const DEFAULT_VIDEO_ID: &str = "ziX_YN1-1Yo";

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Estimated playback position as a pure function of a state snapshot
/// and the current wall clock. While paused the stored position is
/// authoritative; while playing the elapsed time since the last direct
/// update is added. Never cached, never written back.
pub fn estimate_position(
    current_time: f64,
    is_playing: bool,
    last_updated_ms: i64,
    now_ms: i64,
) -> f64 {
    if !is_playing {
        return current_time;
    }
    let elapsed_ms = (now_ms - last_updated_ms).max(0);
    current_time + elapsed_ms as f64 / 1000.0
}

/// Single source of truth for "what video is selected and where is it in
/// playback", shared across every page and persisted through the
/// [`PlaybackStore`]. All mutation goes through the setters below; the
/// raw signals are not exposed.
#[derive(Clone)]
pub struct VideoContext {
    video_id: Signal<String>,
    current_time: Signal<f64>,
    is_playing: Signal<bool>,
    has_user_interacted: Signal<bool>,
    /// Epoch millis of the last direct `set_current_time` call.
    last_updated: Signal<i64>,
    is_minimized: Signal<bool>,
    is_home_page: Signal<bool>,
    store: PlaybackStore,
}

impl VideoContext {
    pub fn video_id(&self) -> String {
        self.video_id.read().clone()
    }

    pub fn current_time(&self) -> f64 {
        *self.current_time.read()
    }

    pub fn is_playing(&self) -> bool {
        *self.is_playing.read()
    }

    pub fn has_user_interacted(&self) -> bool {
        *self.has_user_interacted.read()
    }

    pub fn is_minimized(&self) -> bool {
        *self.is_minimized.read()
    }

    pub fn is_home_page(&self) -> bool {
        *self.is_home_page.read()
    }

    /// The floating widget renders only away from the home page (a video
    /// id is always selected once defaulted).
    pub fn is_floating(&self) -> bool {
        !self.is_home_page() && !self.video_id.read().is_empty()
    }

    /// Select a new video. The only path that changes the selection, and
    /// it always means the user chose it: autoplay downstream is gated
    /// on the interaction flag this sets.
    pub fn set_video_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        info!("Selecting video: {}", id);
        self.video_id.set(id);
        self.has_user_interacted.set(true);
        self.is_playing.set(true);
        self.persist();
    }

    /// Record a directly-observed playback position (inbound telemetry,
    /// not UI). Refreshes the estimation anchor.
    pub fn set_current_time(&mut self, time: f64) {
        self.current_time.set(time);
        self.last_updated.set(now_ms());
        self.persist();
    }

    /// Flip play/pause. Leaves `current_time`/`last_updated` alone: the
    /// estimation only accrues elapsed time while playing, so the
    /// derivation stays correct.
    pub fn set_is_playing(&mut self, playing: bool) {
        self.is_playing.set(playing);
    }

    pub fn toggle_minimized(&mut self) {
        let minimized = self.is_minimized();
        self.is_minimized.set(!minimized);
    }

    /// Back to the featured video, stopped at zero. Used when the user
    /// dismisses the floating widget.
    pub fn reset_video(&mut self) {
        self.video_id.set(DEFAULT_VIDEO_ID.to_string());
        self.current_time.set(0.0);
        self.last_updated.set(now_ms());
        self.is_playing.set(false);
        self.is_minimized.set(false);
        self.persist();
    }

    /// Current estimated position. Pure read-time derivation; mutates
    /// nothing.
    pub fn estimated_current_time(&self, now_ms: i64) -> f64 {
        estimate_position(
            self.current_time(),
            self.is_playing(),
            *self.last_updated.read(),
            now_ms,
        )
    }

    /// Same derivation without subscribing the caller to per-second
    /// position updates. Used where a re-render per tick would reload
    /// the embed.
    pub fn estimated_start_secs(&self) -> u64 {
        estimate_position(
            *self.current_time.peek(),
            *self.is_playing.peek(),
            *self.last_updated.peek(),
            now_ms(),
        )
        .max(0.0) as u64
    }

    /// Route observer, written by the router layout only.
    pub fn sync_route(&mut self, is_home: bool) {
        if *self.is_home_page.peek() != is_home {
            self.is_home_page.set(is_home);
        }
    }

    fn persist(&self) {
        self.store.save(&PlaybackSnapshot {
            video_id: self.video_id.peek().clone(),
            current_time: *self.current_time.peek(),
            has_user_interacted: *self.has_user_interacted.peek(),
            last_updated: now_ms(),
        });
    }
}

/// Provider component that seeds playback state from the saved snapshot
/// and makes the context available to the whole page tree.
#[component]
pub fn VideoContextProvider(children: Element) -> Element {
    let app = use_context::<AppContext>();
    let store = use_hook(|| PlaybackStore::new(app.config.data_dir.clone()));
    let saved = use_hook(|| store.load());

    let ctx = VideoContext {
        video_id: use_signal(|| {
            saved
                .as_ref()
                .map(|s| s.video_id.clone())
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_VIDEO_ID.to_string())
        }),
        current_time: use_signal(|| saved.as_ref().map(|s| s.current_time).unwrap_or(0.0)),
        is_playing: use_signal(|| true),
        has_user_interacted: use_signal(|| {
            saved.as_ref().map(|s| s.has_user_interacted).unwrap_or(false)
        }),
        // Anchor estimation at startup, not at the stale saved timestamp.
        last_updated: use_signal(now_ms),
        is_minimized: use_signal(|| false),
        is_home_page: use_signal(|| true),
        store,
    };

    use_context_provider(move || ctx);

    rsx! {
        {children}
    }
}

/// Hook to access the playback context.
pub fn use_video() -> VideoContext {
    use_context::<VideoContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_estimate_ignores_elapsed_time() {
        for elapsed in [0i64, 1_000, 60_000, 86_400_000] {
            assert_eq!(estimate_position(42.0, false, 1_000, 1_000 + elapsed), 42.0);
        }
    }

    #[test]
    fn playing_estimate_accrues_elapsed_seconds() {
        assert_eq!(estimate_position(10.0, true, 5_000, 7_500), 12.5);
        assert_eq!(estimate_position(0.0, true, 0, 1_000), 1.0);
    }

    #[test]
    fn playing_estimate_is_monotonic_without_direct_updates() {
        let mut last = f64::MIN;
        for now in (0..10_000).step_by(250) {
            let estimate = estimate_position(30.0, true, 0, now);
            assert!(estimate >= last);
            last = estimate;
        }
    }

    #[test]
    fn clock_skew_never_rewinds_the_estimate() {
        // now before the anchor: elapsed clamps to zero
        assert_eq!(estimate_position(30.0, true, 10_000, 9_000), 30.0);
    }
}
