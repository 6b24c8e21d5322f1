//! Meeting participant resources
//!
//! Typed records for the `/meetingParticipants` collection and the service
//! that lists, fetches, and admits participants. Listing rides on the
//! [`crate::pagination`] walker; everything here is the thin wire layer
//! around it.

mod service;
mod types;

pub use service::{ListParticipantsQuery, ParticipantsService};
pub use types::{BreakoutSessionAttended, Participant, ParticipantDevice};
