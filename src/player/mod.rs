pub mod registry;
pub mod surface;

pub use registry::{PlayerRegistry, PlayerTelemetry};
pub use surface::{IframeSurface, PlayerEvent, PlayerSurface, SurfaceError};
