use crate::player::surface::{self, PlayerSurface};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Last-known playback state for one player slot, updated
/// opportunistically from inbound telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTelemetry {
    pub playing: bool,
    pub time: f64,
}

struct RegistryInner {
    players: HashMap<String, Arc<dyn PlayerSurface>>,
    active_id: Option<String>,
    telemetry: HashMap<String, PlayerTelemetry>,
}

/// Arbitrates which of the mounted embed players is allowed to play.
///
/// Two player surfaces ("main" and "floating") can be mounted at once
/// during route transitions; the registry is the single authority that
/// pauses the previous one when a new one takes over, and it outlives
/// any one page's mount/unmount cycle. Construct exactly one per
/// application and hand out clones of the handle.
#[derive(Clone)]
pub struct PlayerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl PartialEq for PlayerRegistry {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRegistry {
    pub fn new() -> Self {
        PlayerRegistry {
            inner: Arc::new(Mutex::new(RegistryInner {
                players: HashMap::new(),
                active_id: None,
                telemetry: HashMap::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record (or replace) the surface for `id` and make it the active
    /// player. A different currently-active player gets exactly one
    /// pause command and its telemetry marked not-playing first.
    pub fn register_player(&self, id: &str, surface: Arc<dyn PlayerSurface>) {
        let mut inner = self.lock();
        info!("Registering player: {}", id);

        if let Some(active_id) = inner.active_id.clone() {
            if active_id != id {
                Self::send_pause(&inner, &active_id);
                if let Some(telemetry) = inner.telemetry.get_mut(&active_id) {
                    telemetry.playing = false;
                }
            }
        }

        inner.players.insert(id.to_string(), surface);
        inner.active_id = Some(id.to_string());
        info!("Active player is now: {}", id);
    }

    /// Send a pause command to `id` and request its current time so the
    /// telemetry stays fresh. No-op when `id` isn't registered; delivery
    /// failures are logged, never raised.
    pub fn pause_player(&self, id: &str) {
        let inner = self.lock();
        Self::send_pause(&inner, id);
        if let Some(surface) = inner.players.get(id) {
            if let Err(e) = surface.post_message(&surface::current_time_query()) {
                warn!("Failed to query time for player {}: {}", id, e);
            }
        }
    }

    /// Upsert the telemetry time for `id`. Time updates can arrive after
    /// a teardown has already removed the entry, so a missing row is
    /// created as not-playing rather than dropped.
    pub fn update_player_time(&self, id: &str, time: f64) {
        let mut inner = self.lock();
        inner
            .telemetry
            .entry(id.to_string())
            .and_modify(|t| t.time = time)
            .or_insert(PlayerTelemetry {
                playing: false,
                time,
            });
    }

    /// Record whether `id` is currently playing, from inbound state events.
    pub fn update_player_state(&self, id: &str, playing: bool) {
        let mut inner = self.lock();
        inner
            .telemetry
            .entry(id.to_string())
            .and_modify(|t| t.playing = playing)
            .or_insert(PlayerTelemetry { playing, time: 0.0 });
    }

    /// Stop `id`, detach its surface, and forget it. Clears the active
    /// designation when `id` held it. Idempotent.
    pub fn remove_player(&self, id: &str) {
        let mut inner = self.lock();
        let Some(surface) = inner.players.remove(id) else {
            return;
        };

        info!("Removing player: {}", id);
        if let Err(e) = surface.post_message(&surface::stop_command()) {
            warn!("Failed to stop player {}: {}", id, e);
        }
        surface.detach();

        if inner.active_id.as_deref() == Some(id) {
            inner.active_id = None;
        }
    }

    /// Best-effort stop and detach every registered player, then clear
    /// the entry set and active designation. Telemetry is deliberately
    /// retained: this stops all players, it does not forget history.
    pub fn cleanup_all_players(&self) {
        let mut inner = self.lock();
        info!("Cleaning up all players ({})", inner.players.len());

        for (id, surface) in inner.players.iter() {
            if let Err(e) = surface.post_message(&surface::stop_command()) {
                warn!("Failed to stop player {}: {}", id, e);
            }
            surface.detach();
            debug!("Cleaned up player: {}", id);
        }

        inner.players.clear();
        inner.active_id = None;
    }

    /// Number of registered entries (diagnostic only).
    pub fn player_count(&self) -> usize {
        self.lock().players.len()
    }

    pub fn active_player(&self) -> Option<String> {
        self.lock().active_id.clone()
    }

    pub fn telemetry(&self, id: &str) -> Option<PlayerTelemetry> {
        self.lock().telemetry.get(id).copied()
    }

    fn send_pause(inner: &RegistryInner, id: &str) {
        if let Some(surface) = inner.players.get(id) {
            match surface.post_message(&surface::pause_command()) {
                Ok(()) => debug!("Paused player: {}", id),
                Err(e) => warn!("Failed to pause player {}: {}", id, e),
            }
        }
    }
}
