use messenger_core::Messenger;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Messenger,
}

impl AppState {
    pub fn new(service: Messenger) -> Self {
        Self { service }
    }
}
