//! Repository trait for restaurant data access.

use crate::domain::entities::Restaurant;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for restaurant reference data.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Finds a restaurant by its merchant number.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Restaurant))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_merchant_number(
        &self,
        merchant_number: &str,
    ) -> Result<Option<Restaurant>, AppError>;

    /// Persists a new restaurant, assigning its identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the merchant number is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError>;
}
