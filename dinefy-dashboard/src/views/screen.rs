//! Single-slot screen holder
//!
//! At most one screen is mounted at a time. Mounting replaces whatever was
//! there, and every mount gets a fresh id so late completions can tell
//! whether the screen they belong to still exists.

use std::time::Duration;

use super::auth::{LoginScreen, SignUpScreen};
use super::billing::BillingScreen;
use super::integrations::IntegrationsScreen;
use super::overview::OverviewScreen;
use super::recordings::RecordingsScreen;
use super::settings::SettingsScreen;
use crate::session::Route;

/// Values screens read when they are mounted
#[derive(Debug, Clone, Copy)]
pub struct MountContext {
    /// How long the settings "saved" banner stays up
    pub save_confirmation: Duration,
}

impl Default for MountContext {
    fn default() -> Self {
        Self {
            save_confirmation: Duration::from_secs(3),
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    Overview(OverviewScreen),
    Settings(SettingsScreen),
    Recordings(RecordingsScreen),
    Integrations(IntegrationsScreen),
    Billing(BillingScreen),
    Login(LoginScreen),
    SignUp(SignUpScreen),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Overview(_) => Route::Overview,
            Screen::Settings(_) => Route::Settings,
            Screen::Recordings(_) => Route::Recordings,
            Screen::Integrations(_) => Route::Integrations,
            Screen::Billing(_) => Route::Billing,
            Screen::Login(_) => Route::Login,
            Screen::SignUp(_) => Route::SignUp,
        }
    }
}

/// A screen state that can live in the slot
pub trait ScreenKind: Sized + Send + 'static {
    const ROUTE: Route;

    /// Fresh state, as on first render
    fn mount(ctx: &MountContext) -> Self;

    fn into_screen(self) -> Screen;

    fn from_screen_mut(screen: &mut Screen) -> Option<&mut Self>;
}

macro_rules! impl_screen_kind {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl ScreenKind for $ty {
                const ROUTE: Route = Route::$variant;

                fn mount(ctx: &MountContext) -> Self {
                    <$ty>::new(ctx)
                }

                fn into_screen(self) -> Screen {
                    Screen::$variant(self)
                }

                fn from_screen_mut(screen: &mut Screen) -> Option<&mut Self> {
                    match screen {
                        Screen::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_screen_kind! {
    OverviewScreen => Overview,
    SettingsScreen => Settings,
    RecordingsScreen => Recordings,
    IntegrationsScreen => Integrations,
    BillingScreen => Billing,
    LoginScreen => Login,
    SignUpScreen => SignUp,
}

#[derive(Debug)]
struct Mounted {
    mount_id: u64,
    screen: Screen,
}

#[derive(Debug, Default)]
pub struct ScreenSlot {
    /// Last issued mount id; never reused, even across [`ScreenSlot::clear`]
    generation: u64,
    current: Option<Mounted>,
}

impl ScreenSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current.as_ref().map(|m| m.screen.route())
    }

    pub fn current_mount_id(&self) -> Option<u64> {
        self.current.as_ref().map(|m| m.mount_id)
    }

    /// Replace the slot's content; returns the new mount id
    pub fn mount<S: ScreenKind>(&mut self, screen: S) -> u64 {
        self.generation += 1;
        let previous = self.current.replace(Mounted {
            mount_id: self.generation,
            screen: screen.into_screen(),
        });
        if let Some(previous) = previous {
            tracing::debug!(
                from = previous.screen.route().path(),
                to = S::ROUTE.path(),
                "Screen state discarded"
            );
        }
        self.generation
    }

    /// The mounted screen, if it is an `S`
    pub fn get_mut<S: ScreenKind>(&mut self) -> Option<(u64, &mut S)> {
        let mounted = self.current.as_mut()?;
        let mount_id = mounted.mount_id;
        S::from_screen_mut(&mut mounted.screen).map(|screen| (mount_id, screen))
    }

    /// The mounted screen, only if it is still the mount `mount_id`
    pub fn get_if_current<S: ScreenKind>(&mut self, mount_id: u64) -> Option<&mut S> {
        match self.get_mut::<S>() {
            Some((id, screen)) if id == mount_id => Some(screen),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_replaces_previous() {
        let ctx = MountContext::default();
        let mut slot = ScreenSlot::new();
        assert_eq!(slot.current_route(), None);

        let first = slot.mount(LoginScreen::mount(&ctx));
        assert_eq!(slot.current_route(), Some(Route::Login));

        let second = slot.mount(SignUpScreen::mount(&ctx));
        assert_ne!(first, second);
        assert_eq!(slot.current_route(), Some(Route::SignUp));
        assert!(slot.get_mut::<LoginScreen>().is_none());
        assert!(slot.get_mut::<SignUpScreen>().is_some());
    }

    #[test]
    fn test_stale_mount_id_is_ignored() {
        let ctx = MountContext::default();
        let mut slot = ScreenSlot::new();

        let old = slot.mount(LoginScreen::mount(&ctx));
        let new = slot.mount(LoginScreen::mount(&ctx));

        assert!(slot.get_if_current::<LoginScreen>(old).is_none());
        assert!(slot.get_if_current::<LoginScreen>(new).is_some());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let ctx = MountContext::default();
        let mut slot = ScreenSlot::new();

        let before = slot.mount(OverviewScreen::mount(&ctx));
        slot.clear();
        assert_eq!(slot.current_mount_id(), None);

        let after = slot.mount(OverviewScreen::mount(&ctx));
        assert!(after > before);
        assert!(slot.get_if_current::<OverviewScreen>(before).is_none());
    }
}
