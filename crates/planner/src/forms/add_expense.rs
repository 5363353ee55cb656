use chrono::Utc;
use mywedding_core::budget::{BudgetCategory, Expense, NewExpense};

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::{Backdrop, FormState};
use crate::refresh::{RefreshSignal, Resource};
use crate::state::Loadable;

pub const CATEGORIES_UNAVAILABLE_MESSAGE: &str = "Could not load categories.";

/// "Add Expense" modal. Budget categories are fetched each time it opens.
#[derive(Debug, Clone)]
pub struct AddExpenseForm {
    pub title: String,
    pub amount: String,
    pub expense_date: String,
    pub category_id: String,
    categories: Loadable<Vec<BudgetCategory>>,
    state: FormState,
}

impl Default for AddExpenseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            expense_date: String::new(),
            category_id: String::new(),
            categories: Loadable::Loading,
            state: FormState::new(Backdrop::Dismissible),
        }
    }
}

impl AddExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn categories(&self) -> &Loadable<Vec<BudgetCategory>> {
        &self.categories
    }

    /// Open the modal, default the date to today and preselect the first
    /// category once the list arrives.
    pub async fn open(&mut self, scope: &Scope) {
        self.title.clear();
        self.amount.clear();
        self.category_id.clear();
        self.expense_date = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        self.state.open();

        self.categories
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_budget_categories(&token).await?)
            })
            .await;
        match &self.categories {
            Loadable::Ready(list) => {
                if let Some(first) = list.first() {
                    self.category_id = first.id.clone();
                }
            }
            Loadable::Failed(_) => self.state.set_error(CATEGORIES_UNAVAILABLE_MESSAGE),
            Loadable::Loading => {}
        }
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn dismiss_backdrop(&mut self) -> bool {
        self.state.dismiss_backdrop()
    }

    pub async fn submit(&mut self, scope: &Scope, event_id: &str) -> Result<Expense, PlannerError> {
        let (title, amount, date, category) = (
            &self.title,
            &self.amount,
            &self.expense_date,
            &self.category_id,
        );
        self.state
            .submit_with(async {
                let body = NewExpense::from_form(title, amount, date, category)?;
                let token = scope.token().await?;
                let expense = scope.api().add_expense(&token, event_id, &body).await?;
                tracing::info!(event_id, amount = body.amount, "Expense added");
                scope.notify(RefreshSignal::event(event_id, Resource::Activity));
                Ok(expense)
            })
            .await
    }
}
