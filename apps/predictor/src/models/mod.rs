pub mod options;
pub mod prediction;
pub mod profile;

pub use options::OptionSet;
pub use prediction::{ModelDetails, PredictionResult, Recommendation};
pub use profile::{ProfileDraft, ProfileField, SliderField};
