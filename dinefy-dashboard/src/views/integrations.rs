use chrono::NaiveDateTime;
use serde::Serialize;

use super::screen::MountContext;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{IntegrationStatus, LastSync, Platform};

/// One platform card: its status and the API key being typed
#[derive(Debug, Clone, Default)]
pub struct IntegrationPanel {
    pub status: IntegrationStatus,
    pub api_key: String,
}

impl IntegrationPanel {
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    /// No real platform call is made; any non-empty key connects
    pub fn connect(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if self.api_key.is_empty() {
            let err = AppError::new(ErrorCode::IntegrationApiKeyMissing);
            self.status.error = Some(err.message.clone());
            return Err(err);
        }
        self.status = IntegrationStatus {
            connected: true,
            last_sync: LastSync::At(now),
            error: None,
        };
        Ok(())
    }

    pub fn disconnect(&mut self) {
        self.status = IntegrationStatus::disconnected();
        self.api_key.clear();
    }

    pub fn sync(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if !self.status.connected {
            return Err(AppError::new(ErrorCode::IntegrationNotConnected));
        }
        self.status.last_sync = LastSync::At(now);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntegrationsScreen {
    pub clover: IntegrationPanel,
    pub shopify: IntegrationPanel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPanelView {
    pub platform: Platform,
    #[serde(flatten)]
    pub status: IntegrationStatus,
    /// The key itself is a password field and is never echoed
    pub has_api_key: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrationsView {
    pub integrations: Vec<IntegrationPanelView>,
}

impl IntegrationsScreen {
    pub fn new(_ctx: &MountContext) -> Self {
        Self::default()
    }

    pub fn panel_mut(&mut self, platform: Platform) -> &mut IntegrationPanel {
        match platform {
            Platform::Clover => &mut self.clover,
            Platform::Shopify => &mut self.shopify,
        }
    }

    pub fn panel(&self, platform: Platform) -> &IntegrationPanel {
        match platform {
            Platform::Clover => &self.clover,
            Platform::Shopify => &self.shopify,
        }
    }

    pub fn panel_view(&self, platform: Platform) -> IntegrationPanelView {
        let panel = self.panel(platform);
        IntegrationPanelView {
            platform,
            status: panel.status.clone(),
            has_api_key: !panel.api_key.is_empty(),
        }
    }

    pub fn view(&self) -> IntegrationsView {
        IntegrationsView {
            integrations: Platform::ALL
                .into_iter()
                .map(|p| self.panel_view(p))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_connect_requires_key() {
        let mut panel = IntegrationPanel::default();
        let err = panel.connect(at(9, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::IntegrationApiKeyMissing);
        assert_eq!(panel.status.error.as_deref(), Some("Please enter an API key"));
        assert!(!panel.status.connected);
        assert_eq!(panel.status.last_sync, LastSync::Never);
    }

    #[test]
    fn test_connect_sync_disconnect() {
        let mut panel = IntegrationPanel::default();
        let _ = panel.connect(at(9, 0));

        panel.set_api_key("sk_live_123");
        panel.connect(at(9, 5)).unwrap();
        assert!(panel.status.connected);
        assert_eq!(panel.status.error, None);
        assert_eq!(panel.status.last_sync, LastSync::At(at(9, 5)));

        panel.sync(at(10, 0)).unwrap();
        assert_eq!(panel.status.last_sync, LastSync::At(at(10, 0)));

        panel.disconnect();
        assert_eq!(panel.status, IntegrationStatus::disconnected());
        assert!(panel.api_key.is_empty());
    }

    #[test]
    fn test_sync_requires_connection() {
        let mut panel = IntegrationPanel::default();
        let err = panel.sync(at(9, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::IntegrationNotConnected);
        assert_eq!(panel.status.last_sync, LastSync::Never);
    }

    #[test]
    fn test_panels_are_independent() {
        let mut screen = IntegrationsScreen::default();
        screen.panel_mut(Platform::Shopify).set_api_key("key");
        screen.panel_mut(Platform::Shopify).connect(at(8, 0)).unwrap();

        let view = serde_json::to_value(screen.view()).unwrap();
        assert_eq!(view["integrations"][0]["platform"], "clover");
        assert_eq!(view["integrations"][0]["connected"], false);
        assert_eq!(view["integrations"][0]["lastSync"], "Never");
        assert_eq!(view["integrations"][1]["connected"], true);
        assert_eq!(view["integrations"][1]["lastSync"], "2024-03-15 08:00:00");
        assert_eq!(view["integrations"][1]["hasApiKey"], true);
    }
}
