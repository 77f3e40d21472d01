pub mod events;
pub mod follows;
pub mod organizers;
pub mod padel_clubs;
pub mod profiles;
pub mod ticket_types;

pub use events::{EventFilter, EventRepo};
pub use follows::FollowRepo;
pub use organizers::OrganizerRepo;
pub use padel_clubs::{PadelClubRepo, PadelConfigRepo};
pub use profiles::ProfileRepo;
pub use ticket_types::TicketTypeRepo;
