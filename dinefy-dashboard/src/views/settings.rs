use serde::Serialize;
use std::time::Instant;

use super::screen::MountContext;
use super::submission::TransientFlag;
use crate::fixtures;
use shared::models::{RestaurantSettings, SettingsEdit};

/// Settings editor; every edit replaces the whole record
#[derive(Debug, Clone)]
pub struct SettingsScreen {
    pub settings: RestaurantSettings,
    pub saved: TransientFlag,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub settings: RestaurantSettings,
    pub show_success: bool,
}

impl SettingsScreen {
    pub fn new(ctx: &MountContext) -> Self {
        Self {
            settings: fixtures::default_settings(),
            saved: TransientFlag::new(ctx.save_confirmation),
        }
    }

    pub fn edit(&mut self, edit: SettingsEdit) -> &RestaurantSettings {
        self.settings = self.settings.clone().apply(edit);
        &self.settings
    }

    pub fn mark_saved(&mut self, now: Instant) {
        self.saved.raise(now);
    }

    pub fn dismiss(&mut self) {
        self.saved.clear();
    }

    pub fn view(&self, now: Instant) -> SettingsView {
        SettingsView {
            settings: self.settings.clone(),
            show_success: self.saved.is_raised(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Feature, Weekday};
    use std::time::Duration;

    #[test]
    fn test_edits_replace_record() {
        let mut screen = SettingsScreen::new(&MountContext::default());
        screen.edit(SettingsEdit::RestaurantName {
            value: "Blue Door".into(),
        });
        screen.edit(SettingsEdit::OpeningHours {
            day: Weekday::Sunday,
            value: "Closed".into(),
        });
        let settings = screen.edit(SettingsEdit::Feature {
            feature: Feature::TakeOrders,
            enabled: false,
        });

        assert_eq!(settings.restaurant_name, "Blue Door");
        assert_eq!(settings.opening_hours.get(Weekday::Sunday), "Closed");
        assert!(!settings.features.take_orders);
        assert_eq!(settings.phone, fixtures::default_settings().phone);
    }

    #[test]
    fn test_saved_banner_expires() {
        let mut screen = SettingsScreen::new(&MountContext {
            save_confirmation: Duration::from_secs(3),
        });
        let t0 = Instant::now();
        assert!(!screen.view(t0).show_success);

        screen.mark_saved(t0);
        assert!(screen.view(t0 + Duration::from_secs(1)).show_success);
        assert!(!screen.view(t0 + Duration::from_secs(3)).show_success);

        screen.mark_saved(t0);
        screen.dismiss();
        assert!(!screen.view(t0).show_success);
    }
}
