pub mod guild_card;
pub mod header;
pub mod layout;
pub mod notice;
pub mod page;
pub mod status_badge;

pub use guild_card::GuildCard;
pub use header::Header;
pub use layout::Layout;
pub use notice::Notice;
pub use page::{ErrorPage, Page};
pub use status_badge::StatusBadge;
