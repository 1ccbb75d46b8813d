pub mod loaders;
pub mod metadata;
pub mod question;

pub use loaders::{load_config_file, load_questions_from_directory};
pub use metadata::ExamMetadata;
pub use question::{ExamVariant, Question, QuestionPool};
