//! Named processors and the registry that dispatches to them.

mod format;
mod synthetic;

use std::collections::BTreeMap;

use datamask_core::ColumnSource;
use rand::RngCore;
use tracing::warn;

use crate::consistency::ConsistencyStore;
use crate::errors::ProcessError;
use crate::settings::ProcessSettings;

pub use format::{
    AlphaNumericScrambler, IdentityProcessor, RandomDateProcessor, RandomUuidProcessor,
    ScrubStringProcessor,
};
pub use synthetic::SyntheticProcessor;

/// Name of the pass-through processor used when nothing else is configured.
pub const DEFAULT_PROCESSOR: &str = "Identity";

/// Everything a processor may consult besides the raw value.
#[derive(Clone, Copy)]
pub struct ProcessorContext<'a> {
    pub source: &'a dyn ColumnSource,
    pub store: &'a ConsistencyStore,
    pub settings: &'a ProcessSettings,
}

/// A named value transformation.
pub trait Processor: Send + Sync {
    fn id(&self) -> &'static str;

    fn apply(
        &self,
        ctx: &ProcessorContext<'_>,
        input: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError>;
}

/// Immutable name-to-processor catalog.
pub struct ProcessorRegistry {
    processors: BTreeMap<&'static str, Box<dyn Processor>>,
}

impl ProcessorRegistry {
    /// The standard catalog.
    pub fn new() -> Self {
        let mut builder = Self::builder();
        synthetic::register(&mut builder);
        format::register(&mut builder);
        builder.build()
    }

    pub fn builder() -> ProcessorRegistryBuilder {
        ProcessorRegistryBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Result<&dyn Processor, ProcessError> {
        self.processors
            .get(name)
            .map(|processor| processor.as_ref())
            .ok_or_else(|| ProcessError::UnknownProcessor(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.processors.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.processors.keys().copied().collect()
    }

    /// Resolve `name` and apply it to `input`.
    pub fn dispatch(
        &self,
        name: &str,
        ctx: &ProcessorContext<'_>,
        input: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        let processor = self.lookup(name).inspect_err(|_| {
            warn!(event = "unknown_processor", processor = name);
        })?;
        processor.apply(ctx, input, rng)
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("processors", &self.names())
            .finish()
    }
}

/// Collects processors before freezing them into a [`ProcessorRegistry`].
#[derive(Default)]
pub struct ProcessorRegistryBuilder {
    processors: BTreeMap<&'static str, Box<dyn Processor>>,
}

impl ProcessorRegistryBuilder {
    /// Add a processor; a later registration under the same name replaces the earlier one.
    pub fn register(&mut self, processor: Box<dyn Processor>) -> &mut Self {
        self.processors.insert(processor.id(), processor);
        self
    }

    pub fn build(self) -> ProcessorRegistry {
        ProcessorRegistry {
            processors: self.processors,
        }
    }
}
