use crate::client::model::error::ApiError;

/// Progress of a configuration save.
///
/// Every save carries an increasing id so a delayed dismissal only clears the
/// notice of the save that scheduled it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved {
        save_id: u64,
    },
    Failed(ApiError),
}

impl SaveState {
    pub fn settle(result: Result<(), ApiError>, save_id: u64) -> Self {
        match result {
            Ok(()) => SaveState::Saved { save_id },
            Err(err) => SaveState::Failed(err),
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, SaveState::Saving)
    }

    /// Whether the "saved" notice currently shown belongs to `save_id`.
    pub fn is_saved_by(&self, save_id: u64) -> bool {
        matches!(self, SaveState::Saved { save_id: current } if *current == save_id)
    }
}
