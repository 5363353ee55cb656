//! Budget overview, expenses and categories.
//!
//! All budget arithmetic happens server-side; the only derived value here
//! is the spent percentage used for the progress bar.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::event::parse_form_date;
use crate::types::{lenient, Date, EntityId};
use crate::validation::{parse_positive_amount, require_non_empty};

/// Message shown when the budget field does not hold a positive number.
pub const INVALID_BUDGET_MESSAGE: &str = "Please enter a valid budget amount.";

/// Message shown when the expense amount does not hold a positive number.
pub const INVALID_EXPENSE_AMOUNT_MESSAGE: &str = "Please enter a valid amount.";

/// Response of `GET /api/events/{id}/budget`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining_budget: f64,
}

impl BudgetOverview {
    /// Share of the budget already spent, clamped to `0..=100`.
    pub fn spent_percentage(&self) -> f64 {
        if self.total_budget <= 0.0 {
            return 0.0;
        }
        (self.total_spent / self.total_budget * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget < 0.0
    }
}

/// An expense row from `GET /api/events/{id}/expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: EntityId,
    pub title: String,
    pub amount: f64,
    #[serde(deserialize_with = "lenient::date")]
    pub expense_date: Date,
    #[serde(default)]
    pub budget_category_id: Option<EntityId>,
    #[serde(default)]
    pub category_name: Option<String>,
}

/// A category offered by `GET /api/budget-categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: EntityId,
    pub name: String,
}

/// DTO for `POST /api/events/{id}/expenses`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub expense_date: Date,
    pub budget_category_id: EntityId,
}

impl NewExpense {
    pub fn from_form(
        title: &str,
        amount: &str,
        expense_date: &str,
        budget_category_id: &str,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            title: require_non_empty(title, "Expense title")?,
            amount: parse_positive_amount(amount, INVALID_EXPENSE_AMOUNT_MESSAGE)?,
            expense_date: parse_form_date(expense_date, "Expense date")?,
            budget_category_id: require_non_empty(budget_category_id, "Category")?,
        })
    }
}

/// DTO for `PUT /api/events/{id}/budget`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTotalBudget {
    pub total_budget: f64,
}

impl SetTotalBudget {
    pub fn from_form(raw: &str) -> Result<Self, CoreError> {
        Ok(Self {
            total_budget: parse_positive_amount(raw, INVALID_BUDGET_MESSAGE)?,
        })
    }
}
