use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Message delivery failed: {0}")]
    Delivery(String),
}

/// Non-owning handle to a rendered embed surface. The presentation layer
/// owns the element's lifecycle; this handle only passes messages to it.
///
/// Delivery is asynchronous, unordered, at-most-once. The remote player
/// is autonomous and may ignore or race any command.
pub trait PlayerSurface: Send + Sync {
    fn post_message(&self, payload: &str) -> Result<(), SurfaceError>;

    /// Clear the embed's content source so background media and network
    /// activity stops. Idempotent.
    fn detach(&self);
}

/// `{ "event": "command", "func": "pauseVideo" }`
pub fn pause_command() -> String {
    json!({ "event": "command", "func": "pauseVideo" }).to_string()
}

/// `{ "event": "command", "func": "stopVideo" }`
pub fn stop_command() -> String {
    json!({ "event": "command", "func": "stopVideo" }).to_string()
}

/// `{ "event": "getCurrentTime" }`
pub fn current_time_query() -> String {
    json!({ "event": "getCurrentTime" }).to_string()
}

/// Inbound telemetry from the embed surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// `onStateChange`; state code 1 means playing, everything else is
    /// treated as not-playing.
    StateChange { playing: bool },
    /// `onCurrentTime` position report, seconds.
    CurrentTime { time: f64 },
}

#[derive(Debug, Deserialize)]
struct InboundEnvelope {
    event: String,
    info: Option<i64>,
    time: Option<f64>,
}

impl PlayerEvent {
    /// Parse an inbound payload. Malformed or unrecognized payloads
    /// yield `None` and are dropped by the caller.
    pub fn parse(payload: &str) -> Option<PlayerEvent> {
        let envelope: InboundEnvelope = serde_json::from_str(payload).ok()?;
        match envelope.event.as_str() {
            "onStateChange" => Some(PlayerEvent::StateChange {
                playing: envelope.info? == 1,
            }),
            "onCurrentTime" => Some(PlayerEvent::CurrentTime {
                time: envelope.time?,
            }),
            _ => None,
        }
    }
}

/// Production surface: messages go into the webview iframe hosting the
/// YouTube embed, addressed by DOM element id.
#[derive(Clone)]
pub struct IframeSurface {
    element_id: String,
}

impl IframeSurface {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl PlayerSurface for IframeSurface {
    fn post_message(&self, payload: &str) -> Result<(), SurfaceError> {
        let id = serde_json::to_string(&self.element_id)
            .map_err(|e| SurfaceError::Delivery(e.to_string()))?;
        let message = serde_json::to_string(payload)
            .map_err(|e| SurfaceError::Delivery(e.to_string()))?;
        let js = format!(
            "const frame = document.getElementById({id});\n\
             if (frame && frame.contentWindow) {{ frame.contentWindow.postMessage({message}, \"*\"); }}"
        );
        debug!("IframeSurface[{}]: posting {}", self.element_id, payload);
        dioxus::document::eval(&js);
        Ok(())
    }

    fn detach(&self) {
        let id = match serde_json::to_string(&self.element_id) {
            Ok(id) => id,
            Err(_) => return,
        };
        let js = format!(
            "const frame = document.getElementById({id});\n\
             if (frame) {{ frame.src = \"\"; }}"
        );
        debug!("IframeSurface[{}]: detaching", self.element_id);
        dioxus::document::eval(&js);
    }
}
