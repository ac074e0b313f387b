//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases::{ManagementUseCases, PlayerCrud};

/// Main application state.
///
/// Holds the use cases built on the repository ports.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: ManagementUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(player_repo: Arc<dyn PlayerRepo>) -> Self {
        let management = ManagementUseCases::new(PlayerCrud::new(player_repo));

        Self {
            use_cases: UseCases { management },
        }
    }
}
