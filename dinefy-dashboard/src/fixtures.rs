//! Static mock datasets
//!
//! Everything the dashboard displays comes from here. Screens copy what they
//! need at mount; nothing writes back.

use shared::models::{
    CallDataPoint, CallRecord, CallStatus, Features, Notification, OpeningHours, PaymentRecord,
    RestaurantSettings, UsageRow,
};

/// Seven days of call volume
pub fn call_series() -> Vec<CallDataPoint> {
    [
        ("2024-01-01", 65, 120, 12, 4.5),
        ("2024-01-02", 59, 110, 8, 4.2),
        ("2024-01-03", 80, 150, 15, 4.8),
        ("2024-01-04", 81, 140, 14, 4.6),
        ("2024-01-05", 56, 100, 10, 4.3),
        ("2024-01-06", 55, 95, 9, 4.4),
        ("2024-01-07", 40, 80, 7, 4.1),
    ]
    .into_iter()
    .map(|(date, calls, minutes, orders, satisfaction)| CallDataPoint {
        date: date.to_string(),
        calls,
        minutes,
        orders,
        satisfaction,
    })
    .collect()
}

pub fn call_records() -> Vec<CallRecord> {
    vec![
        CallRecord {
            id: 1,
            status: CallStatus::Completed,
            from: "+1 (555) 123-4567".into(),
            duration: "3:45".into(),
            date: "2024-03-15 14:30".into(),
            transcript: "Customer inquired about menu items and placed an order for delivery."
                .into(),
            audio: "call_1.mp3".into(),
            satisfaction: 4.5,
        },
        CallRecord {
            id: 2,
            status: CallStatus::Failed,
            from: "+1 (555) 234-5678".into(),
            duration: "1:15".into(),
            date: "2024-03-15 15:45".into(),
            transcript: "Call dropped due to poor connection.".into(),
            audio: "call_2.mp3".into(),
            satisfaction: 2.0,
        },
        CallRecord {
            id: 3,
            status: CallStatus::Completed,
            from: "+1 (555) 345-6789".into(),
            duration: "5:20".into(),
            date: "2024-03-15 16:15".into(),
            transcript: "Customer made a reservation for 4 people on Friday at 7 PM.".into(),
            audio: "call_3.mp3".into(),
            satisfaction: 5.0,
        },
        CallRecord {
            id: 4,
            status: CallStatus::Warning,
            from: "+1 (555) 456-7890".into(),
            duration: "2:30".into(),
            date: "2024-03-15 17:00".into(),
            transcript: "Customer had difficulty understanding the bot.".into(),
            audio: "call_4.mp3".into(),
            satisfaction: 3.0,
        },
    ]
}

/// Monthly minutes, Jan–Jun 2024 (1025 in total)
pub fn usage_rows() -> Vec<UsageRow> {
    [
        ("2024-01", 120),
        ("2024-02", 145),
        ("2024-03", 180),
        ("2024-04", 160),
        ("2024-05", 200),
        ("2024-06", 220),
    ]
    .into_iter()
    .map(|(date, minutes)| UsageRow {
        date: date.to_string(),
        minutes,
    })
    .collect()
}

pub fn payment_history() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord {
            id: 1,
            date: "2024-06-15".into(),
            purchase_id: "PUR-001".into(),
            amount: 50.0,
            minutes: 1000,
        },
        PaymentRecord {
            id: 2,
            date: "2024-05-15".into(),
            purchase_id: "PUR-002".into(),
            amount: 25.0,
            minutes: 500,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    [
        (1, "New Call Received", "Customer called to place an order", "5 minutes ago", false),
        (2, "Order Confirmed", "Order #1234 has been confirmed", "1 hour ago", false),
        (3, "System Update", "System maintenance completed successfully", "2 hours ago", true),
    ]
    .into_iter()
    .map(|(id, title, message, time, read)| Notification {
        id,
        title: title.into(),
        message: message.into(),
        time: time.into(),
        read,
    })
    .collect()
}

pub fn default_settings() -> RestaurantSettings {
    let weekday = "9:00 AM - 10:00 PM";
    RestaurantSettings {
        restaurant_name: "Dinefy Restaurant".into(),
        phone: "+1 (555) 123-4567".into(),
        address: "123 Main Street, City, State 12345".into(),
        website: "https://example.com".into(),
        email: "info@dinefy.com".into(),
        opening_hours: OpeningHours {
            monday: weekday.into(),
            tuesday: weekday.into(),
            wednesday: weekday.into(),
            thursday: weekday.into(),
            friday: "9:00 AM - 11:00 PM".into(),
            saturday: "10:00 AM - 11:00 PM".into(),
            sunday: "10:00 AM - 9:00 PM".into(),
        },
        features: Features {
            take_reservations: true,
            take_orders: true,
            provide_menu_info: true,
            handle_complaints: true,
        },
        greeting_message: "Welcome to Dinefy Restaurant! How can I assist you today?".into(),
        ending_message: "Thank you for calling Dinefy Restaurant! Have a great day!".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(call_series().len(), 7);
        assert_eq!(call_records().len(), 4);
        assert_eq!(usage_rows().len(), 6);
        assert_eq!(payment_history().len(), 2);
        assert_eq!(notifications().len(), 3);
    }

    #[test]
    fn test_usage_total() {
        let total: u32 = usage_rows().iter().map(|r| r.minutes).sum();
        assert_eq!(total, 1025);
    }

    #[test]
    fn test_two_unread_notifications() {
        assert_eq!(notifications().iter().filter(|n| !n.read).count(), 2);
    }
}
