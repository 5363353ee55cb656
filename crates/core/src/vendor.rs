//! Vendor directory, bookings and vendor-portal services.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{lenient, Date, EntityId, Timestamp};
use crate::validation::{parse_positive_amount, require_non_empty, require_positive, validate_email};

/// Placeholder category id the backend treats as "uncategorised".
pub const UNCATEGORISED_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Pricing models a vendor service can use.
pub const PRICING_TYPES: &[&str] = &["Fixed", "PerPerson", "PerHour", "Package"];

/// Vendor card from `GET /api/vendors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub user_id: EntityId,
    pub business_name: String,
    #[serde(default)]
    pub business_description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    pub city: String,
    pub verification_status: String,
    pub average_rating: f64,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: EntityId,
    pub service_name: String,
    #[serde(default)]
    pub description: String,
    pub base_price: f64,
    pub pricing_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: EntityId,
    pub reviewer_name: String,
    pub rating: u8,
    pub review_content: String,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Timestamp,
}

/// Full profile from `GET /api/vendors/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDetail {
    pub user_id: EntityId,
    pub business_name: String,
    #[serde(default)]
    pub business_description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    pub city: String,
    pub verification_status: String,
    pub average_rating: f64,
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl VendorDetail {
    pub fn is_verified(&self) -> bool {
        self.verification_status.eq_ignore_ascii_case("verified")
    }

    pub fn service(&self, service_id: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.id == service_id)
    }
}

/// Optional filters for the vendor search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorFilters {
    pub category: Option<String>,
    pub location: Option<String>,
}

impl VendorFilters {
    /// Query pairs for the non-blank filters, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [("category", &self.category), ("location", &self.location)]
            .into_iter()
            .filter_map(|(k, v)| {
                v.as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| (k, s))
            })
            .collect()
    }
}

/// DTO for `POST /api/bookings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub event_id: EntityId,
    pub service_id: EntityId,
    pub final_amount: f64,
    pub service_date: Date,
}

impl NewBooking {
    pub fn new(
        event_id: Option<&str>,
        service: &ServiceOffering,
        service_date: Date,
    ) -> Result<Self, CoreError> {
        let event_id = event_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::Validation("Please select an event.".to_string()))?;
        Ok(Self {
            event_id: event_id.to_string(),
            service_id: service.id.clone(),
            final_amount: require_positive(service.base_price, "This service has no valid price.")?,
            service_date,
        })
    }
}

/// A service row in the vendor portal (`/api/vendor/dashboard/services`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorService {
    pub id: EntityId,
    pub service_name: String,
    #[serde(default)]
    pub service_description: Option<String>,
    pub base_price: f64,
    pub pricing_type: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_id: String,
    pub is_active: bool,
    #[serde(default)]
    pub status: Option<String>,
}

/// Create/update body for vendor-portal services.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub service_name: String,
    pub description: String,
    pub base_price: f64,
    pub pricing_type: String,
    pub category_id: String,
    pub is_active: bool,
}

impl ServiceInput {
    /// Build a body from raw form fields.
    ///
    /// A blank category becomes [`UNCATEGORISED_ID`].
    pub fn from_form(
        name: &str,
        description: &str,
        base_price: &str,
        pricing_type: &str,
        category_id: &str,
        is_active: bool,
    ) -> Result<Self, CoreError> {
        let pricing_type = require_non_empty(pricing_type, "Pricing type")?;
        if !PRICING_TYPES.contains(&pricing_type.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown pricing type '{pricing_type}'."
            )));
        }
        let category_id = match category_id.trim() {
            "" => UNCATEGORISED_ID.to_string(),
            id => id.to_string(),
        };
        Ok(Self {
            service_name: require_non_empty(name, "Service name")?,
            description: description.trim().to_string(),
            base_price: parse_positive_amount(base_price, "Please enter a valid price.")?,
            pricing_type,
            category_id,
            is_active,
        })
    }
}

impl From<&VendorService> for ServiceInput {
    fn from(s: &VendorService) -> Self {
        Self {
            service_name: s.service_name.clone(),
            description: s.service_description.clone().unwrap_or_default(),
            base_price: s.base_price,
            pricing_type: s.pricing_type.clone(),
            category_id: s.category_id.clone(),
            is_active: s.is_active,
        }
    }
}

/// DTO for `POST /api/vendors/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRegistration {
    pub user_id: EntityId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub business_name: String,
    pub category: String,
    pub city: String,
}

impl VendorRegistration {
    /// Validate every required signup field.
    pub fn validated(self) -> Result<Self, CoreError> {
        Ok(Self {
            user_id: require_non_empty(&self.user_id, "User id")?,
            email: validate_email(&self.email)?,
            first_name: require_non_empty(&self.first_name, "First name")?,
            last_name: require_non_empty(&self.last_name, "Last name")?,
            business_name: require_non_empty(&self.business_name, "Business name")?,
            category: require_non_empty(&self.category, "Category")?,
            city: require_non_empty(&self.city, "City")?,
        })
    }
}
