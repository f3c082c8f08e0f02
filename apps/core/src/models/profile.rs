use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The one persisted entity: everything the profile editor can show or edit.
///
/// Serialized as camelCase JSON — the exact shape the durable slot (and the
/// future profile API this crate stands in for) carries. Absent optionals are
/// omitted on write and tolerated on read; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Opaque stable identifier. Never changes after creation.
    pub id: String,
    pub email: String,
    pub full_name: String,
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
    /// Ordered; duplicates allowed (free text from the skills edit field).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
    /// Creation timestamp. Immutable once set.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// A fresh record with every optional field absent, exactly as `register`
    /// creates one.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            full_name: full_name.into(),
            profile_picture: None,
            bio: None,
            location: None,
            profession: None,
            phone: None,
            skills: None,
            social_links: None,
            education: None,
            experience: None,
            created_at: Utc::now(),
        }
    }
}

/// External profile links. Only the keys that are set serialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One education row.
///
/// Dates hold raw month-input values (`"2018-09"`); rendering pretty-prints
/// them and falls back to the raw string when they do not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    /// Locally generated, unique within the owning profile.
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// When true the end date is not authoritative: renderers show "Present"
    /// and editors disable the end-date input.
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EducationEntry {
    pub fn new(
        institution: impl Into<String>,
        degree: impl Into<String>,
        field: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: institution.into(),
            degree: degree.into(),
            field: field.into(),
            start_date: start_date.into(),
            end_date: None,
            current: false,
            description: None,
        }
    }
}

/// One experience row. Same shape as [`EducationEntry`] with
/// company/position/location in place of institution/degree/field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Locally generated, unique within the owning profile.
    pub id: Uuid,
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExperienceEntry {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company: company.into(),
            position: position.into(),
            location: None,
            start_date: start_date.into(),
            end_date: None,
            current: false,
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> UserProfile {
        let mut experience = ExperienceEntry::new("Acme Corp", "Senior Engineer", "2021-03");
        experience.location = Some("Remote".to_string());
        experience.current = true;
        experience.description = Some("Owns the billing platform".to_string());

        let mut education = EducationEntry::new(
            "State University",
            "B.Sc.",
            "Computer Science",
            "2014-09",
        );
        education.end_date = Some("2018-06".to_string());
        education.description = Some("Graduated with honors".to_string());

        UserProfile {
            id: "42".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            profile_picture: Some("https://example.com/ada.png".to_string()),
            bio: Some("Analyst and programmer".to_string()),
            location: Some("London".to_string()),
            profession: Some("Engineer".to_string()),
            phone: Some("+44 20 0000 0000".to_string()),
            skills: Some(vec!["Rust".to_string(), "Mathematics".to_string()]),
            social_links: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/ada".to_string()),
                github: Some("https://github.com/ada".to_string()),
                twitter: None,
                website: Some("https://ada.dev".to_string()),
            }),
            education: Some(vec![education]),
            experience: Some(vec![experience]),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_round_trip_fully_populated() {
        let profile = full_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let recovered: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, profile);
    }

    #[test]
    fn test_round_trip_all_optionals_absent() {
        let profile = UserProfile::new("7", "fresh@example.com", "Fresh User");
        let json = serde_json::to_string(&profile).unwrap();
        let recovered: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, profile);
        // Absent optionals are omitted, not serialized as null.
        assert!(!json.contains("bio"));
        assert!(!json.contains("socialLinks"));
        assert!(!json.contains("education"));
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let json = serde_json::to_string(&full_profile()).unwrap();
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"socialLinks\""));
        assert!(json.contains("\"startDate\""));
        assert!(!json.contains("full_name"));
    }

    #[test]
    fn test_reads_legacy_slot_record() {
        // A record from an earlier build: camelCase keys, no `current` on
        // the education entry, and a key we never modeled.
        let json = r#"{
            "id": "1",
            "email": "john@example.com",
            "fullName": "John Doe",
            "bio": "Software developer",
            "skills": ["React", "TypeScript"],
            "education": [{
                "id": "b5c5a9c0-9f6c-4a9f-8a4e-2f4f6f1f0a11",
                "institution": "State University",
                "degree": "B.Sc.",
                "field": "CS",
                "startDate": "2014-09"
            }],
            "themePreference": "dark",
            "createdAt": "2023-05-01T12:00:00.000Z"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name, "John Doe");
        assert_eq!(profile.skills.as_deref(), Some(&["React".to_string(), "TypeScript".to_string()][..]));
        let education = profile.education.unwrap();
        assert!(!education[0].current, "missing `current` must default to false");
        assert!(education[0].end_date.is_none());
    }

    #[test]
    fn test_new_profile_has_no_optional_fields() {
        let profile = UserProfile::new("2", "new@example.com", "New User");
        assert!(profile.skills.is_none());
        assert!(profile.education.is_none());
        assert!(profile.experience.is_none());
        assert!(profile.social_links.is_none());
        assert!(profile.bio.is_none());
    }

    #[test]
    fn test_entry_constructors_generate_distinct_ids() {
        let a = ExperienceEntry::new("Acme", "Engineer", "2020-01");
        let b = ExperienceEntry::new("Acme", "Engineer", "2020-01");
        assert_ne!(a.id, b.id);
    }
}
