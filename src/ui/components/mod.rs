pub mod artists;
pub mod calendar;
pub mod floating_player;
pub mod home;
pub mod library;
pub mod main_player;
pub mod navbar;
pub mod search_modal;
pub mod static_pages;
pub mod video_card;
pub mod video_tabs;
pub mod youtube_player;

pub use artists::Artists;
pub use calendar::CalendarPage;
pub use floating_player::FloatingPlayer;
pub use home::Home;
pub use library::{Library, LibraryPage};
pub use main_player::MainVideoPlayer;
pub use navbar::Navbar;
pub use search_modal::SearchModal;
pub use static_pages::{About, Contact, Social};
pub use video_card::VideoCard;
pub use video_tabs::VideoTabs;
pub use youtube_player::YouTubePlayer;
