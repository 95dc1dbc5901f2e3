// Repository traits (ports)
// Infrastructure provides the adapters

pub mod admin_grant_repository;
pub mod errors;
pub mod event_repository;
pub mod participant_repository;

pub use admin_grant_repository::AdminGrantRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use event_repository::EventRepository;
pub use participant_repository::ParticipantRepository;
