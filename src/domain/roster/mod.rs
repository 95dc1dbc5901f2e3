// Roster domain module
// Contains the event aggregate, participants, team formation and domain events

pub mod event;
pub mod events;
pub mod formation;
pub mod participant;
pub mod value_objects;
pub mod view;

// Re-export main types for convenience
pub use event::Event;
pub use formation::{form_teams, TeamAssignment};
pub use participant::Participant;
pub use value_objects::{DisplayName, EventId, ParticipantId, ParticipantStatus, TeamId};
pub use view::RosterView;
