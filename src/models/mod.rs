mod entry;
mod policy;

pub use entry::ParticipantEntry;
pub use policy::{ParticipantListName, PolicyName};
