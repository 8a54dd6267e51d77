use serde::{Deserialize, Serialize};

/// A guild's configuration as stored by the bot.
///
/// `config` holds the raw YAML document, or `None` when the guild has never
/// been configured.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GuildConfigDto {
    pub guild_id: u64,
    #[serde(default)]
    pub config: Option<String>,
}

impl GuildConfigDto {
    /// YAML text to seed an editor with.
    pub fn text(&self) -> &str {
        self.config.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unconfigured_guild() {
        let dto: GuildConfigDto =
            serde_json::from_str(r#"{"guild_id": 228317351672545290, "config": null}"#).unwrap();

        assert_eq!(dto.guild_id, 228317351672545290);
        assert_eq!(dto.text(), "");
    }

    #[test]
    fn exposes_yaml_text() {
        let dto: GuildConfigDto = serde_json::from_str(
            r#"{"guild_id": 1, "config": "editors:\n  - 97104885337575424\n"}"#,
        )
        .unwrap();

        assert_eq!(dto.text(), "editors:\n  - 97104885337575424\n");
    }
}
