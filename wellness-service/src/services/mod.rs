pub mod companion;
pub mod crisis;
pub mod normalizer;
pub mod prompts;
pub mod providers;
pub mod shaper;

pub use companion::{ChatOutcome, Companion};
pub use crisis::{CrisisAssessment, CrisisPolicy, SubstringCrisisPolicy};
pub use providers::{ProviderError, TextProvider};
