use async_trait::async_trait;
use std::time::Duration;

use super::AccountClient;
use crate::views::billing::mask_card_number;
use shared::AppResult;
use shared::forms::{CardForm, SignUpForm};
use shared::models::RestaurantSettings;

/// Fixed per-operation delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub sign_in: Duration,
    pub sign_up: Duration,
    pub profile: Duration,
    pub settings: Duration,
    pub card: Duration,
    pub purchase: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            sign_in: Duration::from_millis(1000),
            sign_up: Duration::from_millis(1500),
            profile: Duration::from_millis(1500),
            settings: Duration::ZERO,
            card: Duration::ZERO,
            purchase: Duration::ZERO,
        }
    }
}

impl Delays {
    pub const NONE: Delays = Delays {
        sign_in: Duration::ZERO,
        sign_up: Duration::ZERO,
        profile: Duration::ZERO,
        settings: Duration::ZERO,
        card: Duration::ZERO,
        purchase: Duration::ZERO,
    };
}

/// Sleeps, logs, succeeds
#[derive(Debug, Clone, Default)]
pub struct SimulatedClient {
    delays: Delays,
}

impl SimulatedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// No delays, for tests
    pub fn instant() -> Self {
        Self::with_delays(Delays::NONE)
    }

    pub fn with_delays(delays: Delays) -> Self {
        Self { delays }
    }

    pub fn delays(&self) -> &Delays {
        &self.delays
    }

    async fn wait(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AccountClient for SimulatedClient {
    async fn sign_in(&self, email: &str) -> AppResult<()> {
        self.wait(self.delays.sign_in).await;
        tracing::info!(email = %email, "Simulated sign-in completed");
        Ok(())
    }

    async fn sign_up(&self, form: &SignUpForm) -> AppResult<()> {
        self.wait(self.delays.sign_up).await;
        tracing::info!(
            email = %form.email,
            full_name = %form.full_name,
            "Simulated sign-up completed"
        );
        Ok(())
    }

    async fn change_email(&self, new_email: &str) -> AppResult<()> {
        self.wait(self.delays.profile).await;
        tracing::info!(new_email = %new_email, "Simulated email change completed");
        Ok(())
    }

    async fn change_password(&self) -> AppResult<()> {
        self.wait(self.delays.profile).await;
        tracing::info!("Simulated password change completed");
        Ok(())
    }

    async fn delete_account(&self, email: &str) -> AppResult<()> {
        self.wait(self.delays.profile).await;
        tracing::info!(email = %email, "Simulated account deletion completed");
        Ok(())
    }

    async fn save_settings(&self, settings: &RestaurantSettings) -> AppResult<()> {
        self.wait(self.delays.settings).await;
        let snapshot = serde_json::to_string(settings).unwrap_or_default();
        tracing::info!(settings = %snapshot, "Saving settings");
        Ok(())
    }

    async fn add_card(&self, card: &CardForm) -> AppResult<()> {
        self.wait(self.delays.card).await;
        tracing::info!(
            cardholder = %card.cardholder_name,
            card = %mask_card_number(&card.card_number),
            "Adding card"
        );
        Ok(())
    }

    async fn purchase_minutes(&self, amount: &str, minutes: u64) -> AppResult<()> {
        self.wait(self.delays.purchase).await;
        tracing::info!(amount = %amount, minutes, "Buying minutes");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let delays = SimulatedClient::new().delays().to_owned();
        assert_eq!(delays.sign_in, Duration::from_millis(1000));
        assert_eq!(delays.sign_up, Duration::from_millis(1500));
        assert_eq!(delays.profile, Duration::from_millis(1500));
        assert!(delays.settings.is_zero());
        assert!(delays.card.is_zero());
        assert!(delays.purchase.is_zero());
    }

    #[tokio::test]
    async fn test_sign_in_waits_full_delay() {
        let client = SimulatedClient::with_delays(Delays {
            sign_in: Duration::from_millis(30),
            ..Delays::NONE
        });
        let started = std::time::Instant::now();
        client.sign_in("root@gmail.com").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_instant_client() {
        let client = SimulatedClient::instant();
        let started = std::time::Instant::now();
        client.sign_up(&SignUpForm::default()).await.unwrap();
        client.purchase_minutes("50", 1000).await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
