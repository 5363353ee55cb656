use mywedding_core::types::EntityId;
use mywedding_core::vendor::{ServiceInput, VendorService, PRICING_TYPES};

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::{Backdrop, FormState};

/// Create/edit modal for a vendor-portal service.
#[derive(Debug, Clone)]
pub struct ServiceForm {
    editing: Option<EntityId>,
    pub service_name: String,
    pub description: String,
    pub base_price: String,
    pub pricing_type: String,
    pub category_id: String,
    pub is_active: bool,
    state: FormState,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            editing: None,
            service_name: String::new(),
            description: String::new(),
            base_price: String::new(),
            pricing_type: PRICING_TYPES[0].to_string(),
            category_id: String::new(),
            is_active: true,
            state: FormState::new(Backdrop::Dismissible),
        }
    }
}

impl ServiceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Id of the service being edited, `None` when creating.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn open_create(&mut self) {
        *self = Self::default();
        self.state.open();
    }

    pub fn open_edit(&mut self, service: &VendorService) {
        let input = ServiceInput::from(service);
        *self = Self {
            editing: Some(service.id.clone()),
            service_name: input.service_name,
            description: input.description,
            base_price: input.base_price.to_string(),
            pricing_type: input.pricing_type,
            category_id: input.category_id,
            is_active: input.is_active,
            state: FormState::new(Backdrop::Dismissible),
        };
        self.state.open();
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn dismiss_backdrop(&mut self) -> bool {
        self.state.dismiss_backdrop()
    }

    pub async fn submit(&mut self, scope: &Scope) -> Result<(), PlannerError> {
        let editing = self.editing.as_deref();
        let (name, desc, price, pricing, category, active) = (
            &self.service_name,
            &self.description,
            &self.base_price,
            &self.pricing_type,
            &self.category_id,
            self.is_active,
        );
        self.state
            .submit_with(async {
                let body = ServiceInput::from_form(name, desc, price, pricing, category, active)?;
                let token = scope.token().await?;
                match editing {
                    Some(id) => {
                        scope.api().update_vendor_service(&token, id, &body).await?;
                        tracing::info!(service_id = id, "Service updated");
                    }
                    None => {
                        scope.api().create_vendor_service(&token, &body).await?;
                        tracing::info!(service_name = %body.service_name, "Service created");
                    }
                }
                Ok(())
            })
            .await
    }
}
