//! Account operations behind a mockable interface
//!
//! No backend exists yet; [`SimulatedClient`] stands in with fixed delays.

mod credentials;
mod simulated;

use async_trait::async_trait;
use shared::AppResult;
use shared::forms::{CardForm, SignUpForm};
use shared::models::RestaurantSettings;

pub use credentials::{CredentialVerifier, TEST_EMAIL, TEST_PASSWORD};
pub use simulated::{Delays, SimulatedClient};

#[async_trait]
pub trait AccountClient: Send + Sync + 'static {
    async fn sign_in(&self, email: &str) -> AppResult<()>;
    async fn sign_up(&self, form: &SignUpForm) -> AppResult<()>;
    async fn change_email(&self, new_email: &str) -> AppResult<()>;
    async fn change_password(&self) -> AppResult<()>;
    async fn delete_account(&self, email: &str) -> AppResult<()>;
    async fn save_settings(&self, settings: &RestaurantSettings) -> AppResult<()>;
    async fn add_card(&self, card: &CardForm) -> AppResult<()>;
    async fn purchase_minutes(&self, amount: &str, minutes: u64) -> AppResult<()>;
}
