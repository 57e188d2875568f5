use std::sync::Arc;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use typed_builder::TypedBuilder;

use super::Database;

/// Request-scoped repository over one lazily begun transaction.
///
/// The first write begins the transaction and every later write joins
/// it; `save_changed` commits. If the repo is dropped with the
/// transaction still open, sea-orm rolls it back, so partial writes
/// never become durable.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    #[builder(default)]
    active_txn: Mutex<Option<DatabaseTransaction>>,
}

impl OrmRepo {
    /// The open transaction, begun on first use.
    pub(crate) async fn txn(&self) -> anyhow::Result<MappedMutexGuard<'_, DatabaseTransaction>> {
        let mut guard = self.active_txn.lock().await;
        if guard.is_none() {
            *guard = Some(self.db.get_connection().begin().await?);
        }
        MutexGuard::try_map(guard, Option::as_mut)
            .map_err(|_| anyhow::anyhow!("transaction closed while the lock was held"))
    }

    pub async fn save_changed(&self) -> anyhow::Result<bool> {
        match self.active_txn.lock().await.take() {
            Some(txn) => {
                txn.commit().await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
