//! Payment method domain entity

use super::user::UserId;

/// Data needed to store a new payment method
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub user_id: UserId,
    pub card_number: String,
    pub expiry_month: i16,
    pub expiry_year: i16,
}

/// Masks a card number down to its last four digits, padded to 16 characters.
pub fn hidden_card_number(card_number: &str) -> String {
    let len = card_number.len();
    let last_four = &card_number[len.saturating_sub(4)..];
    format!("{:*>16}", last_four)
}
