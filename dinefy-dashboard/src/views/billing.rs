use serde::Serialize;

use super::screen::MountContext;
use super::submission::FormState;
use crate::fixtures;
use crate::metrics::{
    FREE_MINUTES, RATE_PER_MINUTE, purchased_minutes, remaining_minutes, total_minutes,
    usage_percentage, usage_progress,
};
use rust_decimal::Decimal;
use shared::forms::{CardForm, PurchaseForm};
use shared::models::{PaymentMethod, PaymentRecord, UsageRow};

/// `•••• 4242`; only the last four digits survive
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("•••• {tail}")
}

#[derive(Debug, Clone, Default)]
pub struct BillingScreen {
    pub purchase: FormState<PurchaseForm>,
    pub card: FormState<CardForm>,
    pub payment_methods: Vec<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub rows: Vec<UsageRow>,
    pub total_minutes: u32,
    pub free_minutes: u32,
    pub remaining_minutes: i64,
    /// Not clamped; may exceed 100
    pub percentage: f64,
    /// Clamped to `0..=100` for the progress bar
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseView {
    #[serde(flatten)]
    pub form: FormState<PurchaseForm>,
    pub rate_per_minute: Decimal,
    pub calculated_minutes: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingView {
    pub usage: UsageSummary,
    pub purchase: PurchaseView,
    pub card: FormState<CardForm>,
    pub payment_methods: Vec<PaymentMethod>,
    pub payment_history: Vec<PaymentRecord>,
}

impl BillingScreen {
    pub fn new(_ctx: &MountContext) -> Self {
        Self::default()
    }

    pub fn calculated_minutes(&self) -> u64 {
        purchased_minutes(&self.purchase.values.amount, RATE_PER_MINUTE)
    }

    pub fn add_card(&mut self, card: &CardForm) -> &PaymentMethod {
        let id = self.payment_methods.len() as i64 + 1;
        self.payment_methods.push(PaymentMethod {
            id,
            cardholder_name: card.cardholder_name.clone(),
            masked_number: mask_card_number(&card.card_number),
            expiry_date: card.expiry_date.clone(),
        });
        &self.payment_methods[self.payment_methods.len() - 1]
    }

    pub fn usage() -> UsageSummary {
        let rows = fixtures::usage_rows();
        let percentage = usage_percentage(&rows, FREE_MINUTES);
        UsageSummary {
            total_minutes: total_minutes(&rows),
            free_minutes: FREE_MINUTES,
            remaining_minutes: remaining_minutes(&rows, FREE_MINUTES),
            percentage,
            progress: usage_progress(percentage),
            rows,
        }
    }

    pub fn purchase_view(&self) -> PurchaseView {
        PurchaseView {
            form: self.purchase.clone(),
            rate_per_minute: RATE_PER_MINUTE,
            calculated_minutes: self.calculated_minutes(),
        }
    }

    pub fn view(&self) -> BillingView {
        BillingView {
            usage: Self::usage(),
            purchase: self.purchase_view(),
            card: self.card.redacted(),
            payment_methods: self.payment_methods.clone(),
            payment_history: fixtures::payment_history(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4242 4242 4242 4242"), "•••• 4242");
        assert_eq!(mask_card_number("5555-4444-3333-1111"), "•••• 1111");
        assert_eq!(mask_card_number("12"), "•••• 12");
    }

    #[test]
    fn test_usage_summary() {
        let usage = BillingScreen::usage();
        assert_eq!(usage.total_minutes, 1025);
        assert_eq!(usage.remaining_minutes, -25);
        assert!((usage.percentage - 102.5).abs() < 1e-9);
        assert_eq!(usage.progress, 100.0);
    }

    #[test]
    fn test_calculated_minutes_follow_amount() {
        let mut screen = BillingScreen::default();
        assert_eq!(screen.calculated_minutes(), 0);

        screen.purchase.edit("amount", "50").unwrap();
        assert_eq!(screen.calculated_minutes(), 1000);

        screen.purchase.edit("amount", "abc").unwrap();
        assert_eq!(screen.calculated_minutes(), 0);
    }

    #[test]
    fn test_add_card_appends_masked() {
        let mut screen = BillingScreen::default();
        let card = CardForm {
            cardholder_name: "Ann Lee".into(),
            card_number: "4242424242424242".into(),
            expiry_date: "12/27".into(),
            cvv: "123".into(),
        };
        screen.add_card(&card);
        let second = screen.add_card(&card).clone();

        assert_eq!(screen.payment_methods.len(), 2);
        assert_eq!(second.id, 2);
        assert_eq!(second.masked_number, "•••• 4242");

        screen.card.values = card;
        let json = serde_json::to_string(&screen.view()).unwrap();
        assert!(!json.contains("4242424242424242"));
        assert!(!json.contains("\"cvv\":\"123\""));
    }
}
