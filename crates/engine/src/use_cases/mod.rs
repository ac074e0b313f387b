//! Use cases - user story orchestration over the repository ports.

pub mod management;

pub use management::{ManagementError, ManagementUseCases, PlayerCrud};
