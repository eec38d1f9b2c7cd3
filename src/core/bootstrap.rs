//! Startup routine: ensure the schema exists and the service catalog is seeded.
//!
//! Safe to run on every start. Tables are created only when missing, and the
//! catalog is inserted only while the services table is still empty, so a restart
//! never duplicates rows.

use crate::{
    config::database::create_tables,
    entities::{Service, service},
    errors::Result,
};
use sea_orm::{PaginatorTrait, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

/// The fixed catalog, in id order.
pub const SERVICE_CATALOG: [&str; 3] = ["Preventive Maintenance", "Repair", "Cleaning"];

/// Creates missing tables, then seeds the catalog if needed.
///
/// # Errors
/// Any storage error is returned as-is; the binary treats it as fatal.
#[instrument(skip(db))]
pub async fn bootstrap(db: &DatabaseConnection) -> Result<()> {
    create_tables(db).await?;
    let inserted = seed_services(db).await?;
    info!("Bootstrap complete ({inserted} services seeded).");
    Ok(())
}

/// Inserts [`SERVICE_CATALOG`] when the services table has no rows.
///
/// The count and the inserts run in one transaction. Returns how many rows were
/// inserted: 3 on first run, 0 afterwards.
pub async fn seed_services(db: &DatabaseConnection) -> Result<u64> {
    let txn = db.begin().await?;

    let existing = Service::find().count(&txn).await?;
    if existing > 0 {
        debug!("Service catalog already holds {existing} rows, skipping seed.");
        txn.commit().await?;
        return Ok(0);
    }

    let rows = SERVICE_CATALOG.iter().map(|name| service::ActiveModel {
        name: Set((*name).to_string()),
        ..Default::default()
    });
    Service::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    info!("Seeded service catalog: {:?}", SERVICE_CATALOG);
    Ok(SERVICE_CATALOG.len() as u64)
}
