use shared::FieldErrors;
use shared::forms::{CardForm, PurchaseForm};

use super::rules::{Rule, check};
use super::{Form, FormContext};
use crate::metrics::{RATE_PER_MINUTE, purchased_minutes};

pub const MSG_CARD_NUMBER_DIGITS: &str = "Card number must contain digits";

impl Form for CardForm {
    const FIELDS: &'static [&'static str] = &["cardholderName", "cardNumber", "expiryDate", "cvv"];
    const SECRET_FIELDS: &'static [&'static str] = &["cardNumber", "cvv"];

    fn validate(&self, _ctx: &FormContext<'_>) -> FieldErrors {
        let mut errors = Self::clean_errors();
        errors.set(
            "cardholderName",
            check(
                &self.cardholder_name,
                &[Rule::Required("Cardholder name is required")],
            ),
        );
        let mut card_number = check(
            &self.card_number,
            &[Rule::Required("Card number is required")],
        );
        if card_number.is_empty() && !self.card_number.chars().any(|c| c.is_ascii_digit()) {
            card_number = MSG_CARD_NUMBER_DIGITS.to_string();
        }
        errors.set("cardNumber", card_number);
        errors.set(
            "expiryDate",
            check(&self.expiry_date, &[Rule::Required("Expiry date is required")]),
        );
        errors.set("cvv", check(&self.cvv, &[Rule::Required("CVV is required")]));
        errors
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "cardholderName" => Some(&mut self.cardholder_name),
            "cardNumber" => Some(&mut self.card_number),
            "expiryDate" => Some(&mut self.expiry_date),
            "cvv" => Some(&mut self.cvv),
            _ => None,
        }
    }
}

impl Form for PurchaseForm {
    const FIELDS: &'static [&'static str] = &["amount"];

    fn validate(&self, _ctx: &FormContext<'_>) -> FieldErrors {
        let mut errors = Self::clean_errors();
        let mut message = check(&self.amount, &[Rule::Required("Amount is required")]);
        if message.is_empty() && purchased_minutes(&self.amount, RATE_PER_MINUTE) == 0 {
            message = "Amount must purchase at least one minute".to_string();
        }
        errors.set("amount", message);
        errors
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "amount" => Some(&mut self.amount),
            _ => None,
        }
    }
}
