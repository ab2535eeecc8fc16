use std::collections::BTreeMap;
use std::sync::Arc;

use datamask_core::ColumnSource;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consistency::ConsistencyStore;
use crate::errors::ProcessError;
use crate::processors::{ProcessorContext, ProcessorRegistry};
use crate::settings::ProcessSettings;

/// Counters collected over one anonymization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub values_processed: u64,
    pub values_failed: u64,
    pub processor_usage: BTreeMap<String, u64>,
    pub errors_by_code: BTreeMap<String, u64>,
}

/// One anonymization run: a catalog, its consistency scope and its random source.
///
/// Consistency holds for every value dispatched through the same run; a new
/// run starts with empty tables.
pub struct AnonymizationRun {
    registry: Arc<ProcessorRegistry>,
    store: ConsistencyStore,
    settings: ProcessSettings,
    rng: Box<dyn RngCore + Send>,
    report: RunReport,
}

impl AnonymizationRun {
    /// Random source is seeded from `settings.seed`, or from OS entropy.
    pub fn new(
        registry: Arc<ProcessorRegistry>,
        settings: ProcessSettings,
    ) -> Result<Self, ProcessError> {
        let rng = match settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(registry, settings, Box::new(rng))
    }

    pub fn with_rng(
        registry: Arc<ProcessorRegistry>,
        settings: ProcessSettings,
        rng: Box<dyn RngCore + Send>,
    ) -> Result<Self, ProcessError> {
        settings.validate()?;
        info!(
            event = "run_started",
            seeded = settings.seed.is_some(),
            locale = %settings.locale,
            processors = registry.names().len()
        );
        Ok(Self {
            registry,
            store: ConsistencyStore::new(),
            settings,
            rng,
            report: RunReport::default(),
        })
    }

    /// Apply the processor registered as `name` to `value`.
    pub fn dispatch(
        &mut self,
        name: &str,
        source: &dyn ColumnSource,
        value: &str,
    ) -> Result<String, ProcessError> {
        let ctx = ProcessorContext {
            source,
            store: &self.store,
            settings: &self.settings,
        };
        let result = self
            .registry
            .dispatch(name, &ctx, value, self.rng.as_mut());

        match &result {
            Ok(_) => {
                self.report.values_processed += 1;
                *self
                    .report
                    .processor_usage
                    .entry(name.to_string())
                    .or_insert(0) += 1;
            }
            Err(err) => {
                self.report.values_failed += 1;
                *self
                    .report
                    .errors_by_code
                    .entry(err.code().to_string())
                    .or_insert(0) += 1;
                warn!(event = "process_failed", processor = name, code = err.code());
            }
        }
        result
    }

    pub fn store(&self) -> &ConsistencyStore {
        &self.store
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// End the run, dropping its consistency tables.
    pub fn finish(self) -> RunReport {
        info!(
            event = "run_finished",
            values_processed = self.report.values_processed,
            values_failed = self.report.values_failed
        );
        self.report
    }
}

impl std::fmt::Debug for AnonymizationRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnonymizationRun")
            .field("registry", &self.registry)
            .field("settings", &self.settings)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}
