// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_admin_grant_repository;
pub mod sqlite_event_repository;
pub mod sqlite_participant_repository;

pub use sqlite_admin_grant_repository::SqliteAdminGrantRepository;
pub use sqlite_event_repository::SqliteEventRepository;
pub use sqlite_participant_repository::SqliteParticipantRepository;
