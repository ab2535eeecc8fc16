use rand::RngCore;
use tracing::debug;
use uuid::Uuid;

use crate::date::randomize_date;
use crate::errors::ProcessError;
use crate::processors::{Processor, ProcessorContext, ProcessorRegistryBuilder};
use crate::scrub::scrub_string;
use crate::settings::InvalidUuidPolicy;

pub fn register(builder: &mut ProcessorRegistryBuilder) {
    builder
        .register(Box::new(AlphaNumericScrambler))
        .register(Box::new(IdentityProcessor))
        .register(Box::new(RandomDateProcessor))
        .register(Box::new(RandomUuidProcessor))
        .register(Box::new(ScrubStringProcessor));
}

/// Format-preserving scramble, consistent per composite key of the source column.
pub struct AlphaNumericScrambler;

impl Processor for AlphaNumericScrambler {
    fn id(&self) -> &'static str {
        "AlphaNumericScrambler"
    }

    fn apply(
        &self,
        ctx: &ProcessorContext<'_>,
        input: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        ctx.store.scramble_keyed(ctx.source, input, rng)
    }
}

pub struct IdentityProcessor;

impl Processor for IdentityProcessor {
    fn id(&self) -> &'static str {
        "Identity"
    }

    fn apply(
        &self,
        _ctx: &ProcessorContext<'_>,
        input: &str,
        _rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        Ok(input.to_string())
    }
}

/// New month and day within the original year.
pub struct RandomDateProcessor;

impl Processor for RandomDateProcessor {
    fn id(&self) -> &'static str {
        "RandomDate"
    }

    fn apply(
        &self,
        _ctx: &ProcessorContext<'_>,
        input: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        randomize_date(input, rng)
    }
}

/// Random UUID, reused for every later occurrence of the same original.
pub struct RandomUuidProcessor;

impl Processor for RandomUuidProcessor {
    fn id(&self) -> &'static str {
        "RandomUUID"
    }

    fn apply(
        &self,
        ctx: &ProcessorContext<'_>,
        input: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        let original = match Uuid::parse_str(input) {
            Ok(original) => original,
            Err(_) => {
                debug!(event = "invalid_uuid", processor = self.id());
                return match ctx.settings.invalid_uuid {
                    InvalidUuidPolicy::Empty => Ok(String::new()),
                    InvalidUuidPolicy::Error => Err(ProcessError::InvalidUuid(input.to_string())),
                };
            }
        };
        let replacement = ctx.store.remap_uuid(original, rng)?;
        Ok(replacement.to_string())
    }
}

pub struct ScrubStringProcessor;

impl Processor for ScrubStringProcessor {
    fn id(&self) -> &'static str {
        "ScrubString"
    }

    fn apply(
        &self,
        ctx: &ProcessorContext<'_>,
        input: &str,
        _rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        Ok(scrub_string(input, ctx.settings.mask_char))
    }
}
