use mywedding_core::budget::{BudgetOverview, Expense};
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::forms::AddExpenseForm;
use crate::state::Loadable;

/// Overview and expense list, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSnapshot {
    pub overview: BudgetOverview,
    pub expenses: Vec<Expense>,
}

/// Budget overview, expense list and the "Add Expense" modal.
#[derive(Debug)]
pub struct BudgetSection {
    scope: Scope,
    event_id: EntityId,
    budget: Loadable<BudgetSnapshot>,
    add_expense: AddExpenseForm,
}

impl BudgetSection {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        Self {
            scope: ctx.scope(),
            event_id: event_id.into(),
            budget: Loadable::Loading,
            add_expense: AddExpenseForm::new(),
        }
    }

    pub fn budget(&self) -> &Loadable<BudgetSnapshot> {
        &self.budget
    }

    pub fn expense_form(&self) -> &AddExpenseForm {
        &self.add_expense
    }

    pub fn expense_form_mut(&mut self) -> &mut AddExpenseForm {
        &mut self.add_expense
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    /// Fetch the overview and the expenses concurrently; either failing
    /// fails the section.
    pub async fn refresh(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.budget
            .load(async {
                let token = scope.token().await?;
                let (overview, expenses) = futures::try_join!(
                    scope.api().get_budget_overview(&token, event_id),
                    scope.api().get_expenses(&token, event_id),
                )?;
                Ok(BudgetSnapshot { overview, expenses })
            })
            .await;
    }

    pub async fn open_expense_form(&mut self) {
        self.add_expense.open(&self.scope).await;
    }

    /// Submit the expense modal and refetch on success.
    pub async fn add_expense(&mut self) -> Result<Expense, PlannerError> {
        let expense = self.add_expense.submit(&self.scope, &self.event_id).await?;
        self.refresh().await;
        Ok(expense)
    }
}
