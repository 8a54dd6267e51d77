#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod guild;

#[cfg(feature = "web")]
pub mod status;

#[cfg(feature = "web")]
pub use guild::{get_guild_config, get_guilds, update_guild_config};

#[cfg(feature = "web")]
pub use status::get_status;
