use devguide_core::GuideService;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: GuideService,
}

impl AppState {
    pub fn new(service: GuideService) -> Self {
        Self { service }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_session_table() {
        let state = AppState::new(GuideService::builtin());
        let id = state.service.initiate_session("build it").session_id;

        let clone = state.clone();
        assert!(clone.service.session_status(&id).is_ok());
    }
}
