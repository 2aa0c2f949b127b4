pub mod catalog;
pub mod domain;
mod engine;
mod import;
pub mod profile;

pub use catalog::QuestionCatalog;
pub use engine::{DimensionTally, ScoringEngine, TypeProfile};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use profile::TypeDescription;
