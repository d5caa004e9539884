//! Seam traits the upstream prompt builder programs against.

mod evaluator;
mod masker;

pub use evaluator::IRuleEvaluator;
pub use masker::{IMasker, MaskedText};
