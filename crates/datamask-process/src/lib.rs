//! Value processors for Datamask.
//!
//! A processor takes one raw column value plus the identity of its source
//! column and returns a replacement: a similarity-gated look-alike, a
//! format-preserving scramble, a perturbed date, a mask, or the value itself.
//! Repeated originals are kept consistent through a [`ConsistencyStore`].

pub mod consistency;
pub mod date;
pub mod errors;
pub mod faker_rs;
pub mod processors;
pub mod random;
pub mod run;
pub mod scramble;
pub mod scrub;
pub mod settings;
pub mod similarity;

pub use consistency::ConsistencyStore;
pub use errors::ProcessError;
pub use faker_rs::{LocaleKey, SyntheticKind};
pub use processors::{
    DEFAULT_PROCESSOR, Processor, ProcessorContext, ProcessorRegistry, ProcessorRegistryBuilder,
};
pub use run::{AnonymizationRun, RunReport};
pub use settings::{InvalidUuidPolicy, ProcessSettings};
