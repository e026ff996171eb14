//! Typed records for the finance API responses the chat view consumes
//!
//! Every record is checked when it crosses into the crate: `decode` parses the
//! JSON and runs `Validate` in one step, so callers never hold a record that
//! breaks the rules the service promises.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for malformed or invalid records
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl RecordError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RecordError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Boundary checks for a decoded record
pub trait Validate {
    fn validate(&self) -> Result<(), RecordError>;
}

/// Parse a JSON record and validate it
pub fn decode<T: DeserializeOwned + Validate>(json: &str) -> Result<T, RecordError> {
    let record: T = serde_json::from_str(json)?;
    record.validate()?;
    Ok(record)
}

fn require_text(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::invalid(field, "must not be blank"));
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<(), RecordError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RecordError::invalid(
            field,
            format!("must be greater than 0, got {}", value),
        ));
    }
    Ok(())
}

fn require_max_len(field: &'static str, value: &str, max: usize) -> Result<(), RecordError> {
    let len = value.chars().count();
    if len > max {
        return Err(RecordError::invalid(
            field,
            format!("must be at most {} characters, got {}", max, len),
        ));
    }
    Ok(())
}

// ── Advice ────────────────────────────────────────────────────────

/// Request body for the advice endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceQuery {
    pub query: String,
}

impl AdviceQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Validate for AdviceQuery {
    fn validate(&self) -> Result<(), RecordError> {
        require_text("query", &self.query)
    }
}

/// Reply from the advice endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub response: String,
    pub query: String,
}

impl Validate for AdviceResponse {
    fn validate(&self) -> Result<(), RecordError> {
        require_text("response", &self.response)
    }
}

// ── Transactions ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    // Income
    Salary,
    Freelance,
    Investment,
    OtherIncome,

    // Expense
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    OtherExpense,
}

impl TransactionCategory {
    pub fn is_income(self) -> bool {
        matches!(
            self,
            TransactionCategory::Salary
                | TransactionCategory::Freelance
                | TransactionCategory::Investment
                | TransactionCategory::OtherIncome
        )
    }

    /// The transaction type this category belongs to
    pub fn kind(self) -> TransactionType {
        if self.is_income() {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: TransactionCategory,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Validate for Transaction {
    fn validate(&self) -> Result<(), RecordError> {
        require_positive("amount", self.amount)?;
        if self.category.kind() != self.kind {
            return Err(RecordError::invalid(
                "category",
                format!("{:?} does not belong to {:?} transactions", self.category, self.kind),
            ));
        }
        if let Some(description) = &self.description {
            require_max_len("description", description, 500)?;
        }
        Ok(())
    }
}

/// Totals shown beside the chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStats {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: u64,
}

impl Validate for TransactionStats {
    fn validate(&self) -> Result<(), RecordError> {
        for (field, value) in [
            ("total_income", self.total_income),
            ("total_expense", self.total_expense),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RecordError::invalid(
                    field,
                    format!("must be a non-negative amount, got {}", value),
                ));
            }
        }
        let expected = self.total_income - self.total_expense;
        if (self.balance - expected).abs() > 0.005 {
            return Err(RecordError::invalid(
                "balance",
                format!("expected {:.2} (income minus expenses), got {:.2}", expected, self.balance),
            ));
        }
        Ok(())
    }
}

// ── Budgets ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Validate for Budget {
    fn validate(&self) -> Result<(), RecordError> {
        require_text("category", &self.category)?;
        require_max_len("category", &self.category, 100)?;
        require_positive("amount", self.amount)?;
        if self.start_date > self.end_date {
            return Err(RecordError::invalid("end_date", "must not be before start_date"));
        }
        Ok(())
    }
}

/// Budget with its spending so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetWithSpending {
    #[serde(flatten)]
    pub budget: Budget,
    pub spent: f64,
    pub remaining: f64,
    pub percentage_used: f64,
}

impl Validate for BudgetWithSpending {
    fn validate(&self) -> Result<(), RecordError> {
        self.budget.validate()?;
        if !self.spent.is_finite() || self.spent < 0.0 {
            return Err(RecordError::invalid("spent", "must be a non-negative amount"));
        }
        Ok(())
    }
}

impl BudgetWithSpending {
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget.amount
    }
}
