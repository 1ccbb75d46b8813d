use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 一道题目：题库目录中的一张图片文件名
///
/// 不关心图片内容，只作为标识使用
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question(String);

impl Question {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self(file_name.into())
    }

    pub fn file_name(&self) -> &str {
        &self.0
    }

    /// 题目图片在题库目录中的完整路径
    pub fn path_in(&self, directory: &Path) -> PathBuf {
        directory.join(&self.0)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Question {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// 题库：可供随机抽取的题目（已排除固定题目）
///
/// 每次运行只构建一次，之后只读
#[derive(Debug, Clone, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn contains(&self, question: &Question) -> bool {
        self.questions.contains(question)
    }
}

/// 一套试卷：固定题目 + 随机题目，整体打乱后的顺序
#[derive(Debug, Clone)]
pub struct ExamVariant {
    /// 试卷编号（从1开始）
    pub index: usize,
    pub questions: Vec<Question>,
}

impl ExamVariant {
    pub fn new(index: usize, questions: Vec<Question>) -> Self {
        Self { index, questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 输出文件名（不含扩展名），如 `exam_variant_3`
    pub fn file_stem(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.index)
    }
}
