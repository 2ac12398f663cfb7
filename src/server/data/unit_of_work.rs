//! Transaction boundary for writes that must commit or fail together.

use std::{future::Future, pin::Pin};

use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::server::error::AppError;

/// Future returned by a unit of work body, borrowing the open transaction.
pub type WorkFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>;

/// Runs a group of writes inside a single database transaction.
///
/// The body receives the open transaction and must route every write through it.
/// Its captures should be owned values; only the transaction is borrowed.
pub struct UnitOfWork<'a, C: TransactionTrait<Transaction = DatabaseTransaction>> {
    db: &'a C,
}

impl<'a, C: TransactionTrait<Transaction = DatabaseTransaction>> UnitOfWork<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Begins a transaction, runs `work`, then commits on `Ok` or rolls back on `Err`.
    ///
    /// # Arguments
    /// - `work` - Closure building the future that performs the writes
    ///
    /// # Returns
    /// - `Ok(T)` - The body succeeded and the transaction committed
    /// - `Err(AppError)` - The body's error after rollback, or a begin/commit failure
    pub async fn run<T, F>(&self, work: F) -> Result<T, AppError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> WorkFuture<'c, T> + Send,
    {
        let txn = self.db.begin().await?;

        match work(&txn).await {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!("Failed to roll back transaction: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}
