//! Builds the descriptor list for create and delete batches.
mod generator;
mod zone;


pub use generator::{SUFFIX_LEN, create_batch, delete_batch, matching_zones, random_suffix};
pub use zone::{ZoneTemplate, normalize_zone_name};
