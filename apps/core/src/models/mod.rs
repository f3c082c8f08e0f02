// Profile data model: the persisted record, its nested entries, and the
// typed partial used by updates. Serialized shape is the slot/wire shape.

pub mod profile;
pub mod update;

pub use profile::{EducationEntry, ExperienceEntry, SocialLinks, UserProfile};
pub use update::{parse_skills, ProfileUpdate};
