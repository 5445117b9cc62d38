use clap::Subcommand;
use messaging_config::Config;
use messaging_core_contact_contracts::{ContactFeatureService, ContactUpdateStatusError};
use messaging_di::Provide;
use messaging_models::contact::{ContactMessageId, ContactMessageStatus};

use crate::{
    database,
    environment::{types::ContactFeature, ConfigProvider, Provider},
    queue,
};

#[derive(Debug, Subcommand)]
pub enum MessageCommand {
    /// Record the delivery result of a contact message
    #[command(aliases(["status", "s"]))]
    SetStatus {
        /// The id of the contact message
        id: ContactMessageId,
        /// The new status (pending, sent or failed)
        status: ContactMessageStatus,
        /// The error that caused the delivery to fail
        #[arg(long)]
        error: Option<String>,
    },
}

impl MessageCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::SetStatus { id, status, error } => set_status(config, id, status, error).await,
        }
    }
}

async fn set_status(
    config: Config,
    id: ContactMessageId,
    status: ContactMessageStatus,
    error: Option<String>,
) -> anyhow::Result<()> {
    let database = database::connect(&config.database).await?;
    let queue = queue::connect(&config.queue).await?;

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, database, queue);
    let contact: ContactFeature = provider.provide();

    match contact.update_status(id, status, error).await {
        Ok(()) => println!("Contact message {id} is now {status}"),
        Err(ContactUpdateStatusError::NotFound) => {
            anyhow::bail!("Contact message {id} does not exist")
        }
        Err(ContactUpdateStatusError::Other(err)) => return Err(err),
    }

    Ok(())
}
