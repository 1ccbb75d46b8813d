use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use std::path::Path;

/// 从 TOML 文件加载配置
///
/// 文件中未出现的字段使用默认值
pub fn load_config_file(toml_file_path: &Path) -> AppResult<Config> {
    let content = std::fs::read_to_string(toml_file_path)
        .map_err(|e| AppError::file_read_failed(toml_file_path, e))?;

    let config: Config = toml::from_str(&content).map_err(|e| FileError::TomlParseFailed {
        path: toml_file_path.to_path_buf(),
        source: e,
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exam.toml");
        std::fs::write(
            &path,
            r#"
questions_directory = "/srv/pool"
fixed_questions = []
total_questions = 10
seed = 7

[metadata]
title = "Statistical Mechanics"
exam_date = "01.02.2025"
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.questions_directory, Path::new("/srv/pool"));
        assert!(config.fixed_questions.is_empty());
        assert_eq!(config.total_questions, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.num_variants, 5);
        assert_eq!(config.metadata.title, "Statistical Mechanics");
        assert_eq!(config.metadata.location, "Innsbruck");
        assert_eq!(config.metadata.guidelines.len(), 4);
        assert_eq!(config.compiler.program, "pdflatex");
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "total_questions = \"three\"").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(
            err,
            AppError::File(FileError::TomlParseFailed { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
    }
}
