use serde::{Deserialize, Serialize};

use crate::models::profile::{EducationEntry, ExperienceEntry, SocialLinks, UserProfile};

/// A partial profile edit: one slot per mutable top-level field.
///
/// `None` leaves the field untouched; `Some` overwrites it wholesale — arrays
/// and nested objects are replaced, never merged entry by entry. `id`,
/// `email` and `created_at` have no slot here: identity and creation time
/// never change through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
}

impl ProfileUpdate {
    /// Shallow-merges this edit onto `current`: set fields win, unset fields
    /// carry over unchanged.
    pub fn apply_to(self, current: &UserProfile) -> UserProfile {
        UserProfile {
            id: current.id.clone(),
            email: current.email.clone(),
            created_at: current.created_at,
            full_name: self.full_name.unwrap_or_else(|| current.full_name.clone()),
            profile_picture: self.profile_picture.or_else(|| current.profile_picture.clone()),
            bio: self.bio.or_else(|| current.bio.clone()),
            location: self.location.or_else(|| current.location.clone()),
            profession: self.profession.or_else(|| current.profession.clone()),
            phone: self.phone.or_else(|| current.phone.clone()),
            skills: self.skills.or_else(|| current.skills.clone()),
            social_links: self.social_links.or_else(|| current.social_links.clone()),
            education: self.education.or_else(|| current.education.clone()),
            experience: self.experience.or_else(|| current.experience.clone()),
        }
    }
}

/// Parses the comma-separated skills edit field: entries are trimmed and
/// empty segments dropped.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
