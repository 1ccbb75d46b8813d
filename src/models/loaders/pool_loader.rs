use crate::error::{AppError, AppResult, FileError};
use crate::models::question::{Question, QuestionPool};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

/// 扫描题库目录，返回所有可用题目
///
/// # 参数
/// - `directory`: 题库目录
/// - `extension`: 题目图片扩展名（不含点）
/// - `exclude`: 需要排除的文件名（固定题目）
///
/// # 返回
/// 按文件名排序的题库；目录不存在或无法读取时返回错误
pub async fn load_questions_from_directory(
    directory: &Path,
    extension: &str,
    exclude: &[String],
) -> AppResult<QuestionPool> {
    if !fs::try_exists(directory).await.unwrap_or(false) {
        return Err(FileError::DirectoryNotFound {
            path: directory.to_path_buf(),
        }
        .into());
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let excluded: HashSet<&str> = exclude.iter().map(String::as_str).collect();

    let mut entries = fs::read_dir(directory)
        .await
        .map_err(|e| AppError::file_read_failed(directory, e))?;

    let mut questions = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(directory, e))?
    {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::warn!("跳过非 UTF-8 文件名: {:?}", file_name);
            continue;
        };

        if !name.ends_with(&suffix) || excluded.contains(name) {
            continue;
        }

        let is_file = fs::metadata(entry.path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        tracing::debug!("发现题目: {}", name);
        questions.push(Question::new(name));
    }

    // read_dir 顺序不固定，排序后固定种子才能复现
    questions.sort();

    Ok(QuestionPool::new(questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"img").unwrap();
    }

    #[tokio::test]
    async fn test_load_filters_extension_and_exclusions() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in ["q2.png", "q1.png", "dice1.png", "notes.txt", "q3.PNG", "q4.png.bak"] {
            touch(dir, name);
        }
        std::fs::create_dir(dir.join("folder.png")).unwrap();

        let pool = load_questions_from_directory(dir, "png", &["dice1.png".to_string()])
            .await
            .unwrap();

        let names: Vec<&str> = pool.questions().iter().map(|q| q.file_name()).collect();
        assert_eq!(names, vec!["q1.png", "q2.png"]);
    }

    #[tokio::test]
    async fn test_load_accepts_dotted_extension() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.png");

        let pool = load_questions_from_directory(temp_dir.path(), ".png", &[])
            .await
            .unwrap();
        assert_eq!(pool.len(), 1);
    }

    #[tokio::test]
    async fn test_load_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let pool = load_questions_from_directory(temp_dir.path(), "png", &[])
            .await
            .unwrap();
        assert!(pool.is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = load_questions_from_directory(&missing, "png", &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::File(FileError::DirectoryNotFound { .. })
        ));
    }
}
