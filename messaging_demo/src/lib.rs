use messaging_persistence_contracts::{
    contact::ContactMessageRepository, recipient::RecipientRepository,
};

pub mod contact;
pub mod recipient;

/// Seeds an empty database with the demo data. Ids are assigned by the
/// database, so the fixtures only match on a fresh schema.
pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    contact: impl ContactMessageRepository<Txn>,
    recipient: impl RecipientRepository<Txn>,
) -> anyhow::Result<()> {
    contact::create(txn, contact).await?;
    recipient::create(txn, recipient).await?;
    Ok(())
}
