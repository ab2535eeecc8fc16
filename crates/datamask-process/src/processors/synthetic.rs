use rand::RngCore;

use crate::errors::ProcessError;
use crate::faker_rs::{FakeRsAdapter, SyntheticKind};
use crate::processors::{Processor, ProcessorContext, ProcessorRegistryBuilder};
use crate::similarity::generate_similar;

pub fn register(builder: &mut ProcessorRegistryBuilder) {
    for &kind in SyntheticKind::ALL {
        builder.register(Box::new(SyntheticProcessor { kind }));
    }
}

/// Look-alike value from the `fake` catalog, gated by similarity to the original.
pub struct SyntheticProcessor {
    kind: SyntheticKind,
}

impl Processor for SyntheticProcessor {
    fn id(&self) -> &'static str {
        self.kind.processor_id()
    }

    fn apply(
        &self,
        ctx: &ProcessorContext<'_>,
        input: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ProcessError> {
        let locale = ctx.settings.locale;
        generate_similar(
            input,
            self.kind.threshold(),
            ctx.settings.similarity_attempts,
            || FakeRsAdapter::generate(self.kind, locale, rng),
        )
    }
}
