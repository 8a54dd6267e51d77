pub mod guild;
pub mod guilds;
pub mod not_found;

pub use guild::Guild;
pub use guilds::Guilds;
pub use not_found::NotFound;
