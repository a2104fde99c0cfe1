pub mod source_file;
pub mod translation;

pub use source_file::{ContentKind, SourceFile};
pub use translation::{TokenUsage, TranslationResult, WrittenArtifacts};
