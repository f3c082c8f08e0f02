//! Demo binary: drives one scripted session end to end the way an embedding
//! application would — restore, sign in, edit, render, sign out.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::backend::FixtureBackend;
use folio_core::config::Config;
use folio_core::models::ProfileUpdate;
use folio_core::render::resume_text;
use folio_core::session::{SessionPhase, SessionStore};
use folio_core::slot::ProfileSlot;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Slot directory: {}", config.data_dir.display());

    // Open the store; a slot left behind by an earlier run is restored here.
    let slot = ProfileSlot::new(&config.data_dir);
    let backend = Arc::new(FixtureBackend::with_latency(config.latency()));
    let store = SessionStore::open(slot, backend);

    match store.phase() {
        SessionPhase::Authenticated => info!("Found a stored session"),
        SessionPhase::Anonymous => info!("No stored session"),
    }

    // A wrong address first, to show the published error surface.
    store.login("jane@example.com", "password123").await;
    if let Some(message) = store.error() {
        info!("Sign-in rejected: {message}");
        store.clear_error();
    }

    store.login("john@example.com", "password123").await;
    let user = store
        .current_user()
        .ok_or_else(|| anyhow::anyhow!("fixture sign-in failed: {:?}", store.error()))?;
    info!("Signed in as {} <{}>", user.full_name, user.email);

    // Edit one field; everything else carries over.
    store
        .update_profile(ProfileUpdate {
            location: Some("New York, NY".to_string()),
            ..ProfileUpdate::default()
        })
        .await;
    let user = store
        .current_user()
        .ok_or_else(|| anyhow::anyhow!("profile update failed: {:?}", store.error()))?;

    println!("{}", resume_text(&user));

    store.logout();
    info!("Session closed; slot cleared");

    Ok(())
}

/// Default `RUST_LOG`-style directives. The library and this binary are
/// separate crate targets, so the filter needs one directive for each or
/// events from one of them are dropped.
fn default_log_filter(level: &str) -> String {
    format!(
        "{lib}={level},{bin}={level}",
        lib = env!("CARGO_PKG_NAME").replace('-', "_"),
        bin = module_path!(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing::{info, Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::EnvFilter;

    use super::default_log_filter;

    /// Records the target of every event the filter lets through.
    struct RecordTargets(Arc<Mutex<Vec<String>>>);

    impl<S: Subscriber> Layer<S> for RecordTargets {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0
                .lock()
                .unwrap()
                .push(event.metadata().target().to_string());
        }
    }

    #[test]
    fn test_default_filter_keeps_bin_and_lib_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(default_log_filter("info")))
            .with(RecordTargets(seen.clone()));

        tracing::subscriber::with_default(subscriber, || {
            info!(target: "folio_demo", "a demo breadcrumb");
            info!(target: "folio_core::session", "a library breadcrumb");
            info!(target: "some_dependency", "an unrelated breadcrumb");
        });

        let seen = seen.lock().unwrap();
        assert!(
            seen.iter().any(|t| t == "folio_demo"),
            "the default filter must keep this binary's own events; saw {seen:?}"
        );
        assert!(seen.iter().any(|t| t == "folio_core::session"));
        assert!(!seen.iter().any(|t| t == "some_dependency"));
    }
}
