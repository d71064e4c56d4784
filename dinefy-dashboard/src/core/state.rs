use parking_lot::Mutex;
use std::sync::Arc;

use crate::client::{AccountClient, CredentialVerifier, SimulatedClient};
use crate::core::{Config, Result, ServerError};
use crate::forms::FormContext;
use crate::session::{FileStore, KeyValueStore, SessionContext, spawn_storage_sync};
use crate::views::{MountContext, ViewState};

/// Shared state handed to every handler
///
/// Cloning is cheap; all fields are handles.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub session: SessionContext,
    /// Never held across an `.await`
    pub views: Arc<Mutex<ViewState>>,
    pub client: Arc<dyn AccountClient>,
    pub credentials: CredentialVerifier,
}

impl ServerState {
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        client: Arc<dyn AccountClient>,
    ) -> Self {
        let views = ViewState::new(MountContext {
            save_confirmation: config.save_confirmation(),
        });
        Self {
            credentials: CredentialVerifier::new(config.test_mode_login),
            session: SessionContext::new(store),
            views: Arc::new(Mutex::new(views)),
            client,
            config,
        }
    }

    /// Production wiring: file-backed session store, simulated client
    pub fn initialize(config: &Config) -> Result<Self> {
        let storage_dir = config.storage_dir();
        std::fs::create_dir_all(&storage_dir).map_err(|source| ServerError::Storage {
            path: storage_dir.clone(),
            source,
        })?;

        let store = FileStore::new(&storage_dir);
        tracing::info!(path = %store.path().display(), "Session store ready");

        let client = if config.simulate_delays {
            SimulatedClient::new()
        } else {
            SimulatedClient::instant()
        };

        if config.test_mode_login {
            tracing::warn!("Test-mode login is enabled");
        }

        Ok(Self::new(config.clone(), Arc::new(store), Arc::new(client)))
    }

    /// Storage polling, and a full view reset whenever the flag drops
    pub fn start_background_tasks(&self) {
        spawn_storage_sync(self.session.clone(), self.config.session_poll_interval());

        let mut rx = self.session.subscribe();
        let views = self.views.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let authenticated = *rx.borrow_and_update();
                if !authenticated {
                    views.lock().reset();
                    tracing::debug!("Session ended, view state discarded");
                }
            }
        });
    }

    pub fn reset_views(&self) {
        self.views.lock().reset();
    }

    pub fn form_context(&self) -> FormContext<'_> {
        FormContext {
            account_email: &self.config.account_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use crate::views::OverviewScreen;
    use std::time::Duration;

    fn state() -> ServerState {
        ServerState::new(
            Config::default(),
            Arc::new(MemoryStore::new()),
            Arc::new(SimulatedClient::instant()),
        )
    }

    #[test]
    fn test_initialize_creates_storage_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config).unwrap();

        assert!(config.storage_dir().is_dir());
        assert!(!state.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_external_logout_resets_views() {
        let state = state();
        state.session.login().unwrap();
        state.start_background_tasks();
        state.views.lock().navigate::<OverviewScreen>().unwrap();

        state.session.logout().unwrap();

        for _ in 0..50 {
            if state.views.lock().current_route().is_none() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("views were not reset after logout");
    }

    #[test]
    fn test_form_context_uses_account_email() {
        let mut state = state();
        state.config.account_email = "owner@dinefy.com".into();
        assert_eq!(state.form_context().account_email, "owner@dinefy.com");
    }
}
