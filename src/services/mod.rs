pub mod debounce;
pub mod extractor;
pub mod gradient_cache;
pub mod position_adjuster;
pub mod synthesizer;

pub use debounce::Debouncer;
pub use extractor::{Extraction, PaletteExtractor, RequestToken};
pub use gradient_cache::{CacheStats, GradientCache, SharedGradientCache};
pub use position_adjuster::{Adjustment, DragState, PositionAdjuster, MIN_GAP};
pub use synthesizer::{synthesize, ColorStop};
