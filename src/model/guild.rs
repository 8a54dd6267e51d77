use serde::{Deserialize, Serialize};

/// Owner of a guild as reported by the bot.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct GuildOwnerDto {
    pub id: u64,
    /// `name#discriminator` form of the owner's username.
    pub tag: String,
}

/// A guild the current user is allowed to configure.
///
/// Only `id` is guaranteed; the display fields fall back to defaults so a
/// sparse payload still renders.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GuildDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: u64,
    #[serde(default)]
    pub owner: GuildOwnerDto,
    #[serde(default)]
    pub icon_url: String,
}

impl GuildDto {
    /// Icon URL, if the guild has one. The bot sends an empty string for
    /// guilds without an icon.
    pub fn icon(&self) -> Option<&str> {
        Some(self.icon_url.as_str()).filter(|url| !url.is_empty())
    }

    /// Placeholder shown instead of a missing icon.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Member count with the right plural.
    pub fn member_label(&self) -> String {
        match self.members {
            1 => "1 member".to_string(),
            n => format!("{} members", n),
        }
    }
}
