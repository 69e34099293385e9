pub mod api;
pub mod app;
pub mod app_context;
pub mod components;
pub mod video_context;

pub use app::{make_config, App, Route};
pub use app_context::AppContext;
pub use video_context::{use_video, VideoContext, VideoContextProvider, DEFAULT_VIDEO_ID};
