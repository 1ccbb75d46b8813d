pub mod variant_ctx;
pub mod variant_flow;

pub use variant_ctx::VariantCtx;
pub use variant_flow::{VariantFlow, VariantOutcome};
