use aws_sdk_s3::Client;

use shepherd_core::models::provider::Provider;
use shepherd_core::s3_keys;

use crate::error::StorageError;
use crate::{objects, records};

/// Load the full provider directory.
///
/// The directory is small (hundreds of records), so a straight
/// list-and-fetch is fine; filtered lookups go through the search index
/// instead.
pub async fn load_providers(client: &Client, bucket: &str) -> Result<Vec<Provider>, StorageError> {
    let keys = objects::list_objects(client, bucket, s3_keys::PROVIDERS_PREFIX).await?;

    let mut providers = Vec::new();
    for key in &keys {
        let (provider, _etag): (Provider, String) =
            records::load_record(client, bucket, key).await?;
        providers.push(provider);
    }
    Ok(providers)
}
