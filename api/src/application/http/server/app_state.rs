use std::sync::Arc;

use medtrack_core::application::MedtrackService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MedtrackService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MedtrackService) -> Self {
        Self { args, service }
    }
}
