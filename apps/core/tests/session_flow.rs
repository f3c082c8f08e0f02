//! End-to-end session lifecycle against a real temporary slot directory.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use folio_core::backend::FixtureBackend;
use folio_core::models::ProfileUpdate;
use folio_core::session::{SessionPhase, SessionStore};
use folio_core::slot::ProfileSlot;

const FIXTURE_SKILLS: [&str; 5] = ["React", "TypeScript", "CSS", "Node.js", "MongoDB"];

fn open_store(dir: &TempDir, latency: Duration) -> SessionStore {
    SessionStore::open(
        ProfileSlot::new(dir.path()),
        Arc::new(FixtureBackend::with_latency(latency)),
    )
}

fn skill_names(store: &SessionStore) -> Vec<String> {
    store
        .current_user()
        .and_then(|user| user.skills)
        .unwrap_or_default()
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir, Duration::from_millis(25));

    assert_eq!(store.phase(), SessionPhase::Anonymous);

    store.login("john@example.com", "password123").await;
    let user = store.current_user().expect("sign-in publishes a profile");
    assert_eq!(user.full_name, "John Doe");
    assert_eq!(skill_names(&store), FIXTURE_SKILLS);

    store
        .update_profile(ProfileUpdate {
            location: Some("NYC".to_string()),
            ..ProfileUpdate::default()
        })
        .await;
    let user = store.current_user().expect("update keeps the session");
    assert_eq!(user.location.as_deref(), Some("NYC"));
    assert_eq!(skill_names(&store), FIXTURE_SKILLS);

    store.logout();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert!(store.current_user().is_none());
    assert!(ProfileSlot::new(dir.path()).load().is_none());
}

#[tokio::test]
async fn test_edited_session_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    let store = open_store(&dir, Duration::ZERO);
    store.login("john@example.com", "password123").await;
    store
        .update_profile(ProfileUpdate {
            location: Some("Austin, TX".to_string()),
            ..ProfileUpdate::default()
        })
        .await;
    drop(store);

    let reopened = open_store(&dir, Duration::ZERO);
    assert_eq!(reopened.phase(), SessionPhase::Authenticated);
    let user = reopened.current_user().unwrap();
    assert_eq!(user.email, "john@example.com");
    assert_eq!(user.location.as_deref(), Some("Austin, TX"));
}
