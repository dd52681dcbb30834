//! PostgreSQL implementation of [`AccountRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::{Account, Beneficiary};
use crate::domain::money::Percentage;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

pub struct PgAccountRepository {
    pool: Arc<PgPool>,
}

impl PgAccountRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_beneficiaries(&self, account_id: i64) -> Result<Vec<BeneficiaryRow>, AppError> {
        let rows = sqlx::query_as::<_, BeneficiaryRow>(
            r#"
            SELECT account_id, name, allocation
            FROM account_beneficiaries
            WHERE account_id = $1
            ORDER BY position
            "#,
        )
        .bind(account_id)
        .fetch_all(&*self.pool)
        .await?;
        Ok(rows)
    }

    async fn hydrate(&self, row: AccountRow) -> Result<Account, AppError> {
        let beneficiaries = self.load_beneficiaries(row.id).await?;
        build_account(row, beneficiaries)
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    number: String,
    name: String,
    credit_card_number: Option<String>,
}

#[derive(sqlx::FromRow)]
struct BeneficiaryRow {
    account_id: i64,
    name: String,
    allocation: Decimal,
}

fn build_account(row: AccountRow, beneficiaries: Vec<BeneficiaryRow>) -> Result<Account, AppError> {
    let mut account = Account::new(row.number, row.name);
    account.entity_id = Some(row.id);
    account.credit_card_number = row.credit_card_number;
    for beneficiary in beneficiaries {
        let allocation = Percentage::new(beneficiary.allocation)
            .map_err(|e| AppError::internal(format!("corrupt allocation row: {e}")))?;
        account.add_beneficiary(beneficiary.name, Some(allocation))?;
    }
    Ok(account)
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, number, name, credit_card_number FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Account>, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, number, name, credit_card_number FROM accounts WHERE number = $1",
        )
        .bind(number)
        .fetch_optional(&*self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_credit_card(
        &self,
        credit_card_number: &str,
    ) -> Result<Option<Account>, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, number, name, credit_card_number FROM accounts WHERE credit_card_number = $1",
        )
        .bind(credit_card_number)
        .fetch_optional(&*self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let account_rows = sqlx::query_as::<_, AccountRow>(
            "SELECT id, number, name, credit_card_number FROM accounts ORDER BY number",
        )
        .fetch_all(&*self.pool)
        .await?;

        let beneficiary_rows = sqlx::query_as::<_, BeneficiaryRow>(
            r#"
            SELECT account_id, name, allocation
            FROM account_beneficiaries
            ORDER BY account_id, position
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        let mut by_account: HashMap<i64, Vec<BeneficiaryRow>> = HashMap::new();
        for row in beneficiary_rows {
            by_account.entry(row.account_id).or_default().push(row);
        }

        let mut accounts = Vec::with_capacity(account_rows.len());
        for row in account_rows {
            let beneficiaries = by_account.remove(&row.id).unwrap_or_default();
            accounts.push(build_account(row, beneficiaries)?);
        }
        Ok(accounts)
    }

    async fn save(&self, account: &Account) -> Result<Account, AppError> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO accounts (number, name, credit_card_number)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&account.number)
        .bind(&account.name)
        .bind(&account.credit_card_number)
        .fetch_one(&mut *tx)
        .await?;

        for (position, beneficiary) in account.beneficiaries().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO account_beneficiaries (account_id, name, allocation, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(&beneficiary.name)
            .bind(beneficiary.allocation_percentage.as_decimal())
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let mut saved = account.clone();
        saved.entity_id = Some(id);
        Ok(saved)
    }

    async fn update_beneficiaries(
        &self,
        account_id: i64,
        beneficiaries: &[Beneficiary],
    ) -> Result<(), AppError> {
        // Delete and reinsert inside one transaction so the stored set always
        // matches a state the aggregate itself produced.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM account_beneficiaries WHERE account_id = $1")
            .bind(account_id)
            .execute(&mut *tx)
            .await?;

        for (position, beneficiary) in beneficiaries.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO account_beneficiaries (account_id, name, allocation, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(account_id)
            .bind(&beneficiary.name)
            .bind(beneficiary.allocation_percentage.as_decimal())
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
