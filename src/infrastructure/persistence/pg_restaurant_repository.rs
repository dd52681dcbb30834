//! PostgreSQL implementation of [`RestaurantRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::Restaurant;
use crate::domain::money::Percentage;
use crate::domain::repositories::RestaurantRepository;
use crate::error::AppError;

pub struct PgRestaurantRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    merchant_number: String,
    name: String,
    benefit_percentage: Decimal,
}

impl RestaurantRow {
    fn into_restaurant(self) -> Result<Restaurant, AppError> {
        let benefit = Percentage::new(self.benefit_percentage)
            .map_err(|e| AppError::internal(format!("corrupt benefit percentage row: {e}")))?;
        let mut restaurant = Restaurant::new(self.merchant_number, self.name, benefit);
        restaurant.entity_id = Some(self.id);
        Ok(restaurant)
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn find_by_merchant_number(
        &self,
        merchant_number: &str,
    ) -> Result<Option<Restaurant>, AppError> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"
            SELECT id, merchant_number, name, benefit_percentage
            FROM restaurants
            WHERE merchant_number = $1
            "#,
        )
        .bind(merchant_number)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(RestaurantRow::into_restaurant).transpose()
    }

    async fn save(&self, restaurant: &Restaurant) -> Result<Restaurant, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO restaurants (merchant_number, name, benefit_percentage)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&restaurant.merchant_number)
        .bind(&restaurant.name)
        .bind(restaurant.benefit_percentage.as_decimal())
        .fetch_one(&*self.pool)
        .await?;

        let mut saved = restaurant.clone();
        saved.entity_id = Some(id);
        Ok(saved)
    }
}
