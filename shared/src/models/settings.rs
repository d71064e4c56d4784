//! Restaurant Settings Model

use serde::{Deserialize, Serialize};

/// Day of the week, as used for opening hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Free-text opening hours per weekday (e.g. "9:00 AM - 10:00 PM")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl OpeningHours {
    pub fn get(&self, day: Weekday) -> &str {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    fn slot_mut(&mut self, day: Weekday) -> &mut String {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }
}

/// What the call assistant is allowed to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    TakeReservations,
    TakeOrders,
    ProvideMenuInfo,
    HandleComplaints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub take_reservations: bool,
    pub take_orders: bool,
    pub provide_menu_info: bool,
    pub handle_complaints: bool,
}

impl Features {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::TakeReservations => self.take_reservations,
            Feature::TakeOrders => self.take_orders,
            Feature::ProvideMenuInfo => self.provide_menu_info,
            Feature::HandleComplaints => self.handle_complaints,
        }
    }

    fn set(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::TakeReservations => self.take_reservations = enabled,
            Feature::TakeOrders => self.take_orders = enabled,
            Feature::ProvideMenuInfo => self.provide_menu_info = enabled,
            Feature::HandleComplaints => self.handle_complaints = enabled,
        }
    }
}

/// Editable business profile shown on the settings screen
///
/// Setters consume the record and return the updated copy; nothing edits a
/// shared instance in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSettings {
    pub restaurant_name: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub email: String,
    pub opening_hours: OpeningHours,
    pub features: Features,
    pub greeting_message: String,
    pub ending_message: String,
}

impl RestaurantSettings {
    pub fn with_name(self, restaurant_name: impl Into<String>) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            ..self
        }
    }

    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..self
        }
    }

    pub fn with_address(self, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..self
        }
    }

    pub fn with_website(self, website: impl Into<String>) -> Self {
        Self {
            website: website.into(),
            ..self
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    pub fn with_opening_hours(mut self, day: Weekday, hours: impl Into<String>) -> Self {
        *self.opening_hours.slot_mut(day) = hours.into();
        self
    }

    pub fn with_feature(mut self, feature: Feature, enabled: bool) -> Self {
        self.features.set(feature, enabled);
        self
    }

    pub fn with_greeting(self, greeting_message: impl Into<String>) -> Self {
        Self {
            greeting_message: greeting_message.into(),
            ..self
        }
    }

    pub fn with_ending(self, ending_message: impl Into<String>) -> Self {
        Self {
            ending_message: ending_message.into(),
            ..self
        }
    }

    /// Apply one edit command, returning the replacement record
    pub fn apply(self, edit: SettingsEdit) -> Self {
        match edit {
            SettingsEdit::RestaurantName { value } => self.with_name(value),
            SettingsEdit::Phone { value } => self.with_phone(value),
            SettingsEdit::Address { value } => self.with_address(value),
            SettingsEdit::Website { value } => self.with_website(value),
            SettingsEdit::Email { value } => self.with_email(value),
            SettingsEdit::OpeningHours { day, value } => self.with_opening_hours(day, value),
            SettingsEdit::Feature { feature, enabled } => self.with_feature(feature, enabled),
            SettingsEdit::GreetingMessage { value } => self.with_greeting(value),
            SettingsEdit::EndingMessage { value } => self.with_ending(value),
        }
    }
}

/// A single field edit on the settings screen
///
/// ```json
/// {"field": "openingHours", "day": "friday", "value": "9:00 AM - 11:00 PM"}
/// {"field": "feature", "feature": "takeOrders", "enabled": false}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum SettingsEdit {
    RestaurantName { value: String },
    Phone { value: String },
    Address { value: String },
    Website { value: String },
    Email { value: String },
    OpeningHours { day: Weekday, value: String },
    Feature { feature: Feature, enabled: bool },
    GreetingMessage { value: String },
    EndingMessage { value: String },
}
