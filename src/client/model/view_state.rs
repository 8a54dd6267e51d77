use crate::client::model::error::ApiError;

/// Lifecycle of a view backed by a single fetch.
///
/// Starts as `Loading` and settles once into `Loaded` or `Failed`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> ViewState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// A resource that has not resolved yet is still loading.
impl<T> From<Option<Result<T, ApiError>>> for ViewState<T> {
    fn from(result: Option<Result<T, ApiError>>) -> Self {
        match result {
            None => ViewState::Loading,
            Some(Ok(data)) => ViewState::Loaded(data),
            Some(Err(err)) => ViewState::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_resource_is_loading() {
        let state: ViewState<Vec<u8>> = None.into();

        assert_eq!(state, ViewState::Loading);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn resolved_resource_is_loaded() {
        let state: ViewState<Vec<u8>> = Some(Ok(vec![1, 2])).into();

        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn rejected_resource_is_failed() {
        let state: ViewState<Vec<u8>> = Some(Err(ApiError::internal("offline"))).into();

        assert_eq!(state.data(), None);
        assert_eq!(state, ViewState::Failed(ApiError::internal("offline")));
    }
}
