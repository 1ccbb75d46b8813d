//! 错误类型
//!
//! 按来源分为文件、配置、业务、渲染四类，统一包装进 `AppError`

use std::path::PathBuf;

/// 应用程序错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 文件操作错误
    #[error(transparent)]
    File(#[from] FileError),
    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 业务逻辑错误
    #[error(transparent)]
    Business(#[from] BusinessError),
    /// 文档渲染/编译错误
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// 文件操作错误
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// 目录不存在
    #[error("目录不存在: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
    /// 读取失败
    #[error("读取失败: {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入失败
    #[error("写入失败: {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败: {}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
    /// 字段取值非法
    #[error("配置项 {field} 非法: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// 业务逻辑错误
#[derive(Debug, thiserror::Error)]
pub enum BusinessError {
    /// 题库题目不足
    #[error("题库中题目不足，无法抽取 {required} 道随机题目 (可用: {available})")]
    InsufficientQuestions { required: usize, available: usize },
}

/// 文档渲染/编译错误
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// 找不到编译器
    #[error("无法启动编译器: {program}")]
    CompilerNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// 编译器返回失败
    #[error("编译 {} 失败 (退出码: {code:?}):\n{log_tail}", .tex_path.display())]
    CompilationFailed {
        tex_path: PathBuf,
        code: Option<i32>,
        log_tail: String,
    },
    /// 编译结束但没有产出 PDF
    #[error("编译结束但未生成 PDF: {}", .path.display())]
    MissingOutput { path: PathBuf },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建配置项非法错误
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::Config(ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        })
    }

    /// 是否为题库不足（整批终止但不视为进程失败）
    pub fn is_insufficient_questions(&self) -> bool {
        matches!(
            self,
            AppError::Business(BusinessError::InsufficientQuestions { .. })
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_questions_message() {
        let err: AppError = BusinessError::InsufficientQuestions {
            required: 2,
            available: 1,
        }
        .into();

        assert!(err.is_insufficient_questions());
        assert!(err.to_string().contains("无法抽取 2 道随机题目"));
        assert!(err.to_string().contains("可用: 1"));
    }

    #[test]
    fn test_other_errors_are_not_insufficient() {
        let err = AppError::invalid_config("total_questions", "必须大于 0");
        assert!(!err.is_insufficient_questions());
        assert!(err.to_string().contains("total_questions"));
    }

    #[test]
    fn test_error_chain_has_no_repeated_messages() {
        let err = anyhow::Error::from(AppError::invalid_config("num_variants", "必须大于 0"));
        let chain = format!("{:#}", err);
        assert_eq!(chain.matches("配置项 num_variants 非法").count(), 1);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = anyhow::Error::from(AppError::file_read_failed("pool.toml", io));
        let chain = format!("{:#}", err);
        assert_eq!(chain.matches("no such file").count(), 1);
        assert!(chain.contains("读取失败: pool.toml"));
    }
}
