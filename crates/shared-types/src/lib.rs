pub mod config;
pub mod error;
pub mod menu;
pub mod roles;
pub mod subscription;

// Form-input validation (request types + rule functions)
pub mod requests;
#[cfg(feature = "validation")]
pub mod rules;

pub use config::*;
pub use error::*;
pub use menu::*;
pub use requests::*;
pub use roles::*;
pub use subscription::*;
