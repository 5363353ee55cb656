//! Vendor directory, booking and vendor-portal endpoints.

use mywedding_core::vendor::{
    NewBooking, ServiceInput, Vendor, VendorDetail, VendorFilters, VendorRegistration,
    VendorService,
};

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    /// Public vendor search. No authentication.
    pub async fn get_vendors(&self, filters: &VendorFilters) -> Result<Vec<Vendor>, ApiError> {
        self.fetch(Call::get("/api/vendors", "Failed to fetch vendors.").query(filters.query_pairs()))
            .await
    }

    /// Public vendor profile. Returns `None` when the backend answers `404`.
    pub async fn get_vendor_by_id(&self, vendor_id: &str) -> Result<Option<VendorDetail>, ApiError> {
        self.fetch_optional(Call::get(
            format!("/api/vendors/{vendor_id}"),
            "Failed to fetch vendor details.",
        ))
        .await
    }

    pub async fn register_vendor(
        &self,
        token: &str,
        registration: &VendorRegistration,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::post("/api/vendors/register", "Failed to register vendor.")
                .bearer(token)
                .json(registration)?,
        )
        .await
    }

    pub async fn create_booking(
        &self,
        token: &str,
        booking: &NewBooking,
    ) -> Result<serde_json::Value, ApiError> {
        let result = self
            .fetch_value(
                Call::post("/api/bookings", "Failed to create booking.")
                    .bearer(token)
                    .json(booking)?,
            )
            .await?;
        tracing::info!(
            event_id = %booking.event_id,
            service_id = %booking.service_id,
            "Booking created",
        );
        Ok(result)
    }

    pub async fn get_vendor_services(&self, token: &str) -> Result<Vec<VendorService>, ApiError> {
        self.fetch(
            Call::get("/api/vendor/dashboard/services", "Failed to fetch services.").bearer(token),
        )
        .await
    }

    pub async fn create_vendor_service(
        &self,
        token: &str,
        service: &ServiceInput,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::post("/api/vendor/dashboard/services", "Failed to save service.")
                .bearer(token)
                .json(service)?,
        )
        .await
    }

    pub async fn update_vendor_service(
        &self,
        token: &str,
        service_id: &str,
        service: &ServiceInput,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::put(
                format!("/api/vendor/dashboard/services/{service_id}"),
                "Failed to save service.",
            )
            .bearer(token)
            .json(service)?,
        )
        .await
    }

    pub async fn delete_vendor_service(&self, token: &str, service_id: &str) -> Result<(), ApiError> {
        self.execute(
            Call::delete(
                format!("/api/vendor/dashboard/services/{service_id}"),
                "Failed to delete service. It may have active bookings.",
            )
            .bearer(token),
        )
        .await
    }
}
