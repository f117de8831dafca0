//! # Backbeat Core
//!
//! Pure computational engine behind the backbeat drum-practice tools: bar
//! arithmetic, token sequences, cycle fitting, rudiment matching, accent
//! placement, and preset repair. Every operation is a synchronous
//! transformation from plain data to plain data; persistence, audio, and UI
//! live elsewhere and talk to this crate through strings and numbers.
//!
//! ## Example
//!
//! ```
//! use backbeat_core::{generate, Rng};
//!
//! let mut rng = Rng::with_seed(7);
//! let pattern = generate("4/4", 16, &mut rng).unwrap();
//! assert!(pattern.is_well_formed());
//! ```

pub mod error;
pub mod generate;
pub mod normalize;
pub mod preset;
pub mod rng;
pub mod types;

// Re-export commonly used types
pub use error::EngineError;
pub use generate::generate;
pub use normalize::{normalize, normalize_collection, normalize_preset, RepairFailure, RepairReport};
pub use preset::{Preset, PresetCollection, PresetMetadata};
pub use rng::Rng;
pub use types::{AccentStyle, Pattern, PolyrhythmCycle, Rudiment, TimeSignature};
