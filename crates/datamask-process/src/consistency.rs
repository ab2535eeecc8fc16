use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use datamask_core::ColumnSource;
use rand::RngCore;
use tracing::trace;
use uuid::Uuid;

use crate::errors::ProcessError;
use crate::scramble::scramble_string;

const ALPHANUMERIC_TABLE: &str = "alphanumeric";
const UUID_TABLE: &str = "uuid";

/// Mapping tables that give repeated originals the same replacement.
///
/// The alphanumeric table is scoped by the composite key of the value's
/// logical source; the UUID table is global. Entries are never evicted while
/// the store lives. Each read-modify-write holds the table lock, so a store
/// can be shared between threads.
#[derive(Debug, Default)]
pub struct ConsistencyStore {
    alphanumeric: Mutex<HashMap<String, HashMap<String, String>>>,
    uuids: Mutex<HashMap<Uuid, Uuid>>,
}

impl ConsistencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scramble `input`, memoized per composite key of `source`.
    ///
    /// Unkeyed sources bypass the table and are scrambled fresh on every call.
    pub fn scramble_keyed(
        &self,
        source: &dyn ColumnSource,
        input: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        let Some(key) = source.composite_key() else {
            return Ok(scramble_string(input, rng));
        };

        let mut tables = lock(&self.alphanumeric, ALPHANUMERIC_TABLE)?;
        let table = tables.entry(key).or_default();
        if let Some(existing) = table.get(input) {
            trace!(event = "consistency_hit", table = ALPHANUMERIC_TABLE);
            return Ok(existing.clone());
        }

        trace!(event = "consistency_miss", table = ALPHANUMERIC_TABLE);
        let scrambled = scramble_string(input, rng);
        table.insert(input.to_string(), scrambled.clone());
        Ok(scrambled)
    }

    /// Replacement for `original`, generating and storing a random v4 UUID on first sight.
    pub fn remap_uuid(&self, original: Uuid, rng: &mut dyn RngCore) -> Result<Uuid, ProcessError> {
        let mut uuids = lock(&self.uuids, UUID_TABLE)?;
        if let Some(existing) = uuids.get(&original) {
            trace!(event = "consistency_hit", table = UUID_TABLE);
            return Ok(*existing);
        }

        trace!(event = "consistency_miss", table = UUID_TABLE);
        let replacement = random_uuid(rng)?;
        uuids.insert(original, replacement);
        Ok(replacement)
    }

    /// Number of memoized alphanumeric values across all composite keys.
    pub fn alphanumeric_len(&self) -> Result<usize, ProcessError> {
        let tables = lock(&self.alphanumeric, ALPHANUMERIC_TABLE)?;
        Ok(tables.values().map(HashMap::len).sum())
    }

    pub fn uuid_len(&self) -> Result<usize, ProcessError> {
        Ok(lock(&self.uuids, UUID_TABLE)?.len())
    }

    /// Forget every mapping, starting a new consistency scope.
    pub fn reset(&self) -> Result<(), ProcessError> {
        lock(&self.alphanumeric, ALPHANUMERIC_TABLE)?.clear();
        lock(&self.uuids, UUID_TABLE)?.clear();
        Ok(())
    }
}

/// Random (version 4) UUID drawn from `rng`.
pub fn random_uuid(rng: &mut dyn RngCore) -> Result<Uuid, ProcessError> {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    if bytes.iter().all(|byte| *byte == 0) {
        return Err(ProcessError::UuidGeneration(
            "random source returned no entropy".to_string(),
        ));
    }
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}

fn lock<'a, T>(
    mutex: &'a Mutex<T>,
    table: &'static str,
) -> Result<MutexGuard<'a, T>, ProcessError> {
    mutex.lock().map_err(|_| ProcessError::StorePoisoned(table))
}
