//! Budget, expense and category endpoints.

use mywedding_core::budget::{BudgetCategory, BudgetOverview, Expense, NewExpense, SetTotalBudget};

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_budget_overview(
        &self,
        token: &str,
        event_id: &str,
    ) -> Result<BudgetOverview, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/events/{event_id}/budget"),
                "Failed to fetch budget overview.",
            )
            .bearer(token),
        )
        .await
    }

    pub async fn set_total_budget(
        &self,
        token: &str,
        event_id: &str,
        budget: &SetTotalBudget,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::put(
                format!("/api/events/{event_id}/budget"),
                "Failed to set budget.",
            )
            .bearer(token)
            .json(budget)?,
        )
        .await
    }

    pub async fn get_expenses(&self, token: &str, event_id: &str) -> Result<Vec<Expense>, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/events/{event_id}/expenses"),
                "Failed to fetch expenses.",
            )
            .bearer(token),
        )
        .await
    }

    pub async fn add_expense(
        &self,
        token: &str,
        event_id: &str,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        self.fetch(
            Call::post(
                format!("/api/events/{event_id}/expenses"),
                "Failed to add expense.",
            )
            .bearer(token)
            .json(expense)?,
        )
        .await
    }

    pub async fn get_budget_categories(&self, token: &str) -> Result<Vec<BudgetCategory>, ApiError> {
        self.fetch(
            Call::get("/api/budget-categories", "Failed to fetch budget categories.")
                .bearer(token),
        )
        .await
    }
}
