pub mod config;
pub mod menu_icon;
pub mod organizations;
pub mod roles;
pub mod session;

pub use config::{app_config, load_app_config};
pub use session::Session;
