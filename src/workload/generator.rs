use rand::Rng;
use tracing::{debug, error};

use crate::dispatch::{OperationDescriptor, OperationExecutor};

use super::zone::ZoneTemplate;

/// Length of the random part of a generated zone name.
pub const SUFFIX_LEN: usize = 8;
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ZONE_TLD: &str = ".com";

#[must_use]
pub fn random_suffix<R>(rng: &mut R, len: usize) -> String
where
    R: Rng,
{
    (0..len)
        .filter_map(|_| {
            SUFFIX_ALPHABET
                .get(rng.gen_range(0..SUFFIX_ALPHABET.len()))
                .copied()
                .map(char::from)
        })
        .collect()
}

/// `count` create descriptors named `<prefix><suffix>.com`.
///
/// Names are not checked against the server; with 36^8 suffixes a
/// collision within one batch is negligible.
#[must_use]
pub fn create_batch<R>(
    prefix: &str,
    count: usize,
    template: &ZoneTemplate,
    rng: &mut R,
) -> Vec<OperationDescriptor>
where
    R: Rng,
{
    (0..count)
        .map(|_| {
            let name = format!("{}{}{}", prefix, random_suffix(rng, SUFFIX_LEN), ZONE_TLD);
            let payload = template.payload(&name);
            OperationDescriptor::create(name, payload)
        })
        .collect()
}

/// Names of every zone on the server starting with `prefix`.
///
/// A failed listing is logged and treated as an empty result.
pub async fn matching_zones<E>(executor: &E, prefix: &str) -> Vec<String>
where
    E: OperationExecutor + ?Sized,
{
    match executor.list_targets().await {
        Ok(zones) => {
            let total = zones.len();
            let matching: Vec<String> = zones
                .into_iter()
                .filter(|name| name.starts_with(prefix))
                .collect();
            debug!(
                "{} of {} zones match prefix '{}'",
                matching.len(),
                total,
                prefix
            );
            matching
        }
        Err(err) => {
            error!("Failed to list zones. {}", err);
            Vec::new()
        }
    }
}

/// Delete descriptors for every zone matching `prefix`.
pub async fn delete_batch<E>(executor: &E, prefix: &str) -> Vec<OperationDescriptor>
where
    E: OperationExecutor + ?Sized,
{
    matching_zones(executor, prefix)
        .await
        .into_iter()
        .map(OperationDescriptor::delete)
        .collect()
}
