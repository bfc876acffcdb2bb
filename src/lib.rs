//! Readability scoring and reading-settings recommendation.
//!
//! Text goes through [`analyze`] (Flesch Reading Ease plus sentence density),
//! the score goes through [`recommend`] (difficulty tier and UI settings
//! bundle), and [`process`] chains the two. [`handle`] adds the request
//! boundary: validation and resolving text from a stored file.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod level;
pub mod logging;
pub mod pipeline;
pub mod profile;
pub mod recommender;
pub mod request;

pub use analyzer::{analyze, count_syllables, AnalysisResult, Density};
pub use config::Config;
pub use error::{Error, Result};
pub use level::Level;
pub use pipeline::{process, OptimizationReport};
pub use profile::{smart_settings, ReadingNeed, SmartSettings};
pub use recommender::{merge_settings, recommend, DifficultyLevel, Recommendation, Settings};
pub use request::{handle, resolve_text, FileSource, FileType, Library, OptimizeRequest, StoredFile};
