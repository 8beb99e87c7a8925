//! Shared application state.

use accounts::{AuthService, UserDirectory};
use integrations::OpenAiService;

/// Shared application state accessible from all handlers.
pub struct AppState<D: UserDirectory> {
    pub auth: AuthService<D>,
    pub openai: OpenAiService,
}
