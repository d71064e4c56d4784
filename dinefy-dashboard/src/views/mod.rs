//! Local mutable view state
//!
//! One screen is mounted at a time ([`ScreenSlot`]); the [`ShellState`]
//! around protected screens lives until the session ends. Both carry ids so
//! a submission that finishes late only touches the state it started from.
//!
//! - [`submission`] - [`FormState`], [`SubmitStatus`], [`TransientFlag`]
//! - [`screen`] - the slot and the [`ScreenKind`] trait
//! - one module per screen

pub mod auth;
pub mod billing;
pub mod integrations;
pub mod overview;
pub mod recordings;
pub mod screen;
pub mod settings;
pub mod shell;
pub mod submission;

use shared::error::{AppError, AppResult};

pub use auth::{LoginScreen, SignUpScreen, SignUpView};
pub use billing::{BillingScreen, BillingView, PurchaseView, UsageSummary, mask_card_number};
pub use integrations::{IntegrationPanel, IntegrationPanelView, IntegrationsScreen, IntegrationsView};
pub use overview::{OverviewScreen, OverviewView};
pub use recordings::{CallRecordView, RecordingFilter, RecordingsQuery, RecordingsScreen, RecordingsView};
pub use screen::{MountContext, Screen, ScreenKind, ScreenSlot};
pub use settings::{SettingsScreen, SettingsView};
pub use shell::{NotificationsView, ProfileView, ShellState};
pub use submission::{FormState, SubmitStatus, TransientFlag, run_detached};

#[derive(Debug)]
pub struct ViewState {
    ctx: MountContext,
    slot: ScreenSlot,
    shell: ShellState,
    shell_generation: u64,
}

impl ViewState {
    pub fn new(ctx: MountContext) -> Self {
        Self {
            ctx,
            slot: ScreenSlot::new(),
            shell: ShellState::default(),
            shell_generation: 1,
        }
    }

    pub fn current_route(&self) -> Option<crate::session::Route> {
        self.slot.current_route()
    }

    /// Navigation: always a fresh mount, discarding the previous screen
    pub fn navigate<S: ScreenKind>(&mut self) -> AppResult<(u64, &mut S)> {
        self.slot.mount(S::mount(&self.ctx));
        self.mounted()
    }

    /// An action on `S`: reuse the mounted one, or mount it first
    pub fn screen_or_mount<S: ScreenKind>(&mut self) -> AppResult<(u64, &mut S)> {
        if self.slot.current_route() != Some(S::ROUTE) {
            self.slot.mount(S::mount(&self.ctx));
        }
        self.mounted()
    }

    /// The screen of mount `mount_id`, if it has not been replaced since
    pub fn screen_if_current<S: ScreenKind>(&mut self, mount_id: u64) -> Option<&mut S> {
        self.slot.get_if_current(mount_id)
    }

    pub fn shell(&mut self) -> (u64, &mut ShellState) {
        (self.shell_generation, &mut self.shell)
    }

    pub fn shell_if_current(&mut self, generation: u64) -> Option<&mut ShellState> {
        (generation == self.shell_generation).then_some(&mut self.shell)
    }

    /// Full reload: every screen and the shell start over
    pub fn reset(&mut self) {
        self.slot.clear();
        self.shell = ShellState::default();
        self.shell_generation += 1;
    }

    fn mounted<S: ScreenKind>(&mut self) -> AppResult<(u64, &mut S)> {
        self.slot.get_mut::<S>().ok_or_else(|| {
            AppError::internal(format!("Screen {} is not mounted", S::ROUTE.path()))
        })
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(MountContext::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Route;
    use shared::models::TimeRange;

    #[test]
    fn test_navigate_discards_state() {
        let mut views = ViewState::default();
        let (_, overview) = views.navigate::<OverviewScreen>().unwrap();
        overview.range = TimeRange::SevenDays;

        let (_, overview) = views.navigate::<OverviewScreen>().unwrap();
        assert_eq!(overview.range, TimeRange::SixMonths);
    }

    #[test]
    fn test_screen_or_mount_keeps_state() {
        let mut views = ViewState::default();
        let (first, overview) = views.navigate::<OverviewScreen>().unwrap();
        overview.range = TimeRange::OneMonth;

        let (again, overview) = views.screen_or_mount::<OverviewScreen>().unwrap();
        assert_eq!(first, again);
        assert_eq!(overview.range, TimeRange::OneMonth);

        let (other, _) = views.screen_or_mount::<BillingScreen>().unwrap();
        assert_ne!(other, first);
        assert_eq!(views.current_route(), Some(Route::Billing));
        assert!(views.screen_if_current::<OverviewScreen>(first).is_none());
    }

    #[test]
    fn test_reset_drops_shell_and_screen() {
        let mut views = ViewState::default();
        let (mount_id, _) = views.navigate::<SettingsScreen>().unwrap();
        let (generation, shell) = views.shell();
        shell.set_dark_mode(Some(true));
        shell.mark_read(1).unwrap();

        views.reset();

        assert_eq!(views.current_route(), None);
        assert!(views.screen_if_current::<SettingsScreen>(mount_id).is_none());
        assert!(views.shell_if_current(generation).is_none());
        let (_, shell) = views.shell();
        assert!(!shell.dark_mode);
        assert_eq!(shell.unread_count(), 2);
    }
}
