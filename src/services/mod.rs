pub mod compiler;
pub mod latex;
pub mod selection;

pub use compiler::{DocumentCompiler, LatexCompiler};
pub use latex::LatexDocument;
pub use selection::{
    ensure_pool_sufficient, random_question_count, resolve_fixed_questions, select_questions,
};
