//! Plain-text résumé rendering.
//!
//! Renders a profile into the printable document shape: name and profession
//! header, contact lines, then Summary, Skills, Experience, and Education.
//! A section is omitted entirely when its data is absent; an empty string
//! counts as absent.

use chrono::NaiveDate;

use crate::models::UserProfile;

/// Renders the whole résumé as plain text.
pub fn resume_text(profile: &UserProfile) -> String {
    let mut out = format!("{}\n", profile.full_name);
    if let Some(profession) = non_empty(&profile.profession) {
        out.push_str(&format!("{profession}\n"));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", profile.email));
    if let Some(phone) = non_empty(&profile.phone) {
        out.push_str(&format!("{phone}\n"));
    }
    if let Some(location) = non_empty(&profile.location) {
        out.push_str(&format!("{location}\n"));
    }
    if let Some(links) = &profile.social_links {
        if let Some(website) = non_empty(&links.website) {
            out.push_str(&format!("{website}\n"));
        }
        if let Some(linkedin) = non_empty(&links.linkedin) {
            out.push_str(&format!("{linkedin}\n"));
        }
    }

    if let Some(bio) = non_empty(&profile.bio) {
        out.push_str("\nSummary\n");
        out.push_str(&format!("{bio}\n"));
    }

    if let Some(skills) = profile.skills.as_deref().filter(|s| !s.is_empty()) {
        out.push_str("\nSkills\n");
        out.push_str(&format!("{}\n", skills.join(", ")));
    }

    if let Some(entries) = profile.experience.as_deref().filter(|e| !e.is_empty()) {
        out.push_str("\nExperience\n");
        for (i, exp) in entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", exp.position));
            match &exp.location {
                Some(location) => out.push_str(&format!("{}, {location}\n", exp.company)),
                None => out.push_str(&format!("{}\n", exp.company)),
            }
            out.push_str(&format!(
                "{}\n",
                date_range(&exp.start_date, exp.end_date.as_deref(), exp.current)
            ));
            if let Some(description) = non_empty(&exp.description) {
                out.push_str(&format!("{description}\n"));
            }
        }
    }

    if let Some(entries) = profile.education.as_deref().filter(|e| !e.is_empty()) {
        out.push_str("\nEducation\n");
        for (i, edu) in entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{} in {}\n", edu.degree, edu.field));
            out.push_str(&format!("{}\n", edu.institution));
            out.push_str(&format!(
                "{}\n",
                date_range(&edu.start_date, edu.end_date.as_deref(), edu.current)
            ));
            if let Some(description) = non_empty(&edu.description) {
                out.push_str(&format!("{description}\n"));
            }
        }
    }

    out
}

/// Formats the span of an entry, with "Present" standing in for the end date
/// of an ongoing one.
pub fn date_range(start: &str, end: Option<&str>, current: bool) -> String {
    let finish = if current {
        "Present".to_string()
    } else {
        end.map(format_month).unwrap_or_default()
    };
    format!("{} - {}", format_month(start), finish)
}

/// Formats `"2020-09"` (or a full date) as `"Sep 2020"`. Anything that does
/// not parse is returned verbatim.
pub fn format_month(input: &str) -> String {
    let parsed = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => input.to_string(),
    }
}

/// Uppercase first letters of the name parts, the avatar fallback.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Optional text fields come from form inputs, where clearing a field
/// leaves an empty string rather than removing it. Both shapes mean
/// "no content".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
