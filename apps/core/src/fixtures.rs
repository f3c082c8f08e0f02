//! The in-memory fixture directory standing in for real account storage.
//!
//! Login accepts any password for these accounts; register refuses their
//! emails. Nothing is ever added to this list at runtime — registered users
//! exist only in their own session and slot.

use crate::models::{EducationEntry, ExperienceEntry, SocialLinks, UserProfile};

/// Builds the fixture accounts. `created_at` is the call time, so each
/// process start gets a fresh timestamp.
pub fn demo_users() -> Vec<UserProfile> {
    let mut john = UserProfile::new("1", "john@example.com", "John Doe");
    john.bio = Some("Software developer with 5 years of experience".to_string());
    john.location = Some("San Francisco, CA".to_string());
    john.profession = Some("Frontend Developer".to_string());
    john.skills = Some(
        ["React", "TypeScript", "CSS", "Node.js", "MongoDB"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    john.social_links = Some(SocialLinks {
        linkedin: Some("https://linkedin.com/in/johndoe".to_string()),
        github: Some("https://github.com/johndoe".to_string()),
        twitter: None,
        website: Some("https://johndoe.dev".to_string()),
    });

    let mut degree = EducationEntry::new(
        "San Francisco State University",
        "B.Sc.",
        "Computer Science",
        "2015-09",
    );
    degree.end_date = Some("2019-05".to_string());
    john.education = Some(vec![degree]);

    let mut current_role = ExperienceEntry::new("Techlight Labs", "Frontend Developer", "2022-03");
    current_role.location = Some("San Francisco, CA".to_string());
    current_role.current = true;
    current_role.description =
        Some("Builds the customer-facing dashboard in React and TypeScript".to_string());

    let mut first_role = ExperienceEntry::new("Pixel & Co", "Web Developer", "2019-06");
    first_role.end_date = Some("2022-02".to_string());
    first_role.description = Some("Shipped marketing sites and internal tooling".to_string());

    john.experience = Some(vec![current_role, first_role]);

    vec![john]
}
