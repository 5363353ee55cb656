//! Vendor discovery, booking and the vendor portal's service list.

use mywedding_core::types::EntityId;
use mywedding_core::vendor::{Vendor, VendorDetail, VendorFilters, VendorRegistration, VendorService};

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::forms::{BookingForm, ServiceForm};
use crate::state::Loadable;

pub const VENDOR_NOT_FOUND_MESSAGE: &str = "Vendor not found.";
pub const DELETE_SERVICE_FAILED_MESSAGE: &str =
    "Failed to delete service. It may have active bookings.";

// ---------------------------------------------------------------------------
// Public directory
// ---------------------------------------------------------------------------

/// Vendor search. Public: works without a signed-in user.
#[derive(Debug)]
pub struct VendorDirectory {
    scope: Scope,
    pub filters: VendorFilters,
    vendors: Loadable<Vec<Vendor>>,
}

impl VendorDirectory {
    pub fn new(ctx: &PlannerContext) -> Self {
        Self {
            scope: ctx.scope(),
            filters: VendorFilters::default(),
            vendors: Loadable::Loading,
        }
    }

    pub fn vendors(&self) -> &Loadable<Vec<Vendor>> {
        &self.vendors
    }

    /// Run the search with the current filters.
    pub async fn search(&mut self) {
        let (scope, filters) = (&self.scope, &self.filters);
        self.vendors
            .load(async { Ok(scope.api().get_vendors(filters).await?) })
            .await;
    }
}

/// One vendor's public profile with its services and reviews.
#[derive(Debug)]
pub struct VendorProfile {
    scope: Scope,
    vendor_id: EntityId,
    detail: Loadable<VendorDetail>,
}

impl VendorProfile {
    pub fn new(ctx: &PlannerContext, vendor_id: impl Into<EntityId>) -> Self {
        Self {
            scope: ctx.scope(),
            vendor_id: vendor_id.into(),
            detail: Loadable::Loading,
        }
    }

    pub fn detail(&self) -> &Loadable<VendorDetail> {
        &self.detail
    }

    pub async fn mount(&mut self) {
        let (scope, vendor_id) = (&self.scope, self.vendor_id.as_str());
        self.detail
            .load(async {
                scope
                    .api()
                    .get_vendor_by_id(vendor_id)
                    .await?
                    .ok_or_else(|| PlannerError::NotFound(VENDOR_NOT_FOUND_MESSAGE.into()))
            })
            .await;
    }

    /// Booking modal for one of this vendor's services. Requires sign-in.
    pub async fn book(&self, service_id: &str) -> Result<BookingForm, PlannerError> {
        if !self.scope.is_signed_in() {
            return Err(PlannerError::NotSignedIn);
        }
        let service = self
            .detail
            .data()
            .and_then(|d| d.service(service_id))
            .cloned()
            .ok_or_else(|| PlannerError::NotFound("This service is no longer offered.".into()))?;
        let mut form = BookingForm::new(service);
        form.open(&self.scope).await;
        Ok(form)
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Register the signed-in user as a vendor.
pub async fn register_vendor(
    scope: &Scope,
    registration: VendorRegistration,
) -> Result<(), PlannerError> {
    let body = registration.validated()?;
    let token = scope.token().await?;
    scope.api().register_vendor(&token, &body).await?;
    tracing::info!(business_name = %body.business_name, "Vendor registered");
    Ok(())
}

// ---------------------------------------------------------------------------
// Vendor portal
// ---------------------------------------------------------------------------

/// The vendor's own service list with create/edit/delete.
///
/// A failed list fetch shows an empty list rather than an error banner.
#[derive(Debug)]
pub struct VendorServicesPage {
    scope: Scope,
    services: Vec<VendorService>,
    loading: bool,
    form: ServiceForm,
    pending_delete: Option<EntityId>,
    delete_error: Option<String>,
}

impl VendorServicesPage {
    pub fn new(ctx: &PlannerContext) -> Self {
        Self {
            scope: ctx.scope(),
            services: Vec::new(),
            loading: true,
            form: ServiceForm::new(),
            pending_delete: None,
            delete_error: None,
        }
    }

    pub fn services(&self) -> &[VendorService] {
        &self.services
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &ServiceForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ServiceForm {
        &mut self.form
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        let result = async {
            let token = self.scope.token().await?;
            Ok::<_, PlannerError>(self.scope.api().get_vendor_services(&token).await?)
        }
        .await;
        self.services = result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load vendor services");
            Vec::new()
        });
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit(&mut self, service_id: &str) -> bool {
        match self.services.iter().find(|s| s.id == service_id) {
            Some(service) => {
                self.form.open_edit(service);
                true
            }
            None => false,
        }
    }

    /// Submit the service modal and refetch on success.
    pub async fn save(&mut self) -> Result<(), PlannerError> {
        self.form.submit(&self.scope).await?;
        self.refresh().await;
        Ok(())
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, service_id: &str) {
        self.pending_delete = Some(service_id.to_string());
        self.delete_error = None;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.delete_error = None;
    }

    /// Delete the service awaiting confirmation. On failure the dialog
    /// stays up with an inline error.
    pub async fn confirm_delete(&mut self) -> Result<(), PlannerError> {
        let Some(service_id) = self.pending_delete.clone() else {
            return Ok(());
        };
        self.delete_error = None;
        let result = async {
            let token = self.scope.token().await?;
            self.scope.api().delete_vendor_service(&token, &service_id).await?;
            Ok::<_, PlannerError>(())
        }
        .await;

        match result {
            Ok(()) => {
                tracing::info!(service_id = %service_id, "Service deleted");
                self.pending_delete = None;
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                let message = match &e {
                    PlannerError::Api(api) if api.status().is_some() => api.user_message(),
                    PlannerError::Api(_) => "An unexpected error occurred. Please try again.".into(),
                    other => other.user_message(),
                };
                self.delete_error = Some(message);
                Err(e)
            }
        }
    }
}
