//! Slip data models matching the transaction form contract.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound for a plausible transaction amount.
///
/// Slip text often contains long unrelated digit runs (phone numbers,
/// biller IDs) that would otherwise parse as absurd amounts.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// A slip parsed from recognized text, used to pre-fill the transaction
/// form.
///
/// Every field is independently optional; partial extraction is the
/// normal case. The caller merges this into editable form state and the
/// user confirms before anything is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSlip {
    /// Transaction amount in THB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Transaction date (Gregorian calendar).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Payee / recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,

    /// Transaction reference code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Always [`TransactionType::Expense`]: a payment slip documents an
    /// outgoing payment, and the form lets the user correct it.
    #[serde(rename = "type")]
    pub txn_type: TransactionType,

    /// Spending category inferred from the merchant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Human-readable summary assembled from merchant and reference.
    /// Present even when empty.
    pub note: String,
}

impl Default for ParsedSlip {
    fn default() -> Self {
        Self {
            amount: None,
            date: None,
            merchant: None,
            reference: None,
            txn_type: TransactionType::Expense,
            category: None,
            note: String::new(),
        }
    }
}

impl ParsedSlip {
    /// Check whether any field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.merchant.is_none()
            && self.reference.is_none()
    }

    /// Check the slip against its own invariants.
    ///
    /// Returns human-readable descriptions of any violations. A slip
    /// built by the parser is expected to produce none.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if let Some(amount) = self.amount {
            if amount <= Decimal::ZERO || amount >= MAX_AMOUNT {
                issues.push(format!("amount {} outside (0, {})", amount, MAX_AMOUNT));
            }
        }

        if self.category.is_some() && self.merchant.is_none() {
            issues.push("category set without a merchant".to_string());
        }

        issues
    }
}

/// Direction of a transaction on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Incoming funds. Never produced by the parser; exists because the
    /// surrounding form allows flipping a pre-filled expense.
    Income,
    /// Outgoing payment.
    Expense,
}

impl Default for TransactionType {
    fn default() -> Self {
        Self::Expense
    }
}

/// Coarse spending category inferred from merchant keywords.
///
/// Variants serialize to the exact labels the transaction form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Groceries")]
    Groceries,
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Utilities")]
    Utilities,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
}

impl Category {
    /// The form-facing label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::FoodAndDining => "Food & Dining",
            Category::Utilities => "Utilities",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
