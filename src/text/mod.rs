// Text processing — token normalization and per-document word counting.

pub mod frequency;
pub mod normalize;
pub mod traits;
