pub mod classifier;
pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod lexicon;
pub mod normalize;

pub use classifier::{check_profanity, Analysis, Classification, Level, ProfanityGuard, RawInput};
pub use config::{GuardConfig, LexiconConfig};
pub use detection::{has_bare_jamo_run, is_bare_jamo};
pub use error::GuardError;
pub use normalize::{normalize, NormalizedText};
