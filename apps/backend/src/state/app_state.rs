use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::services::users::UserDirectory;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// User directory collaborator (lookup + credential check)
    pub users: Arc<dyn UserDirectory>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    /// Create a new AppState with the given user directory and security config
    pub fn new(users: Arc<dyn UserDirectory>, security: SecurityConfig) -> Self {
        Self { users, security }
    }

    /// Create a test AppState backed by an empty in-memory directory
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::services::users::MemoryUsers;

        Self::new(Arc::new(MemoryUsers::new()), SecurityConfig::default())
    }
}
