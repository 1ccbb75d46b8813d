use crate::error::{AppError, AppResult, ConfigError};
use crate::models::ExamMetadata;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 外部 LaTeX 编译器配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompilerConfig {
    /// 可执行程序
    pub program: String,
    /// 额外参数（位于 tex 文件名之前）
    pub args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_string(),
            args: vec![
                "-interaction=nonstopmode".to_string(),
                "-halt-on-error".to_string(),
            ],
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库目录
    pub questions_directory: PathBuf,
    /// 题目图片扩展名（不含点，区分大小写）
    pub image_extension: String,
    /// 每套试卷都必须包含的固定题目文件名
    pub fixed_questions: Vec<String>,
    /// 每套试卷的题目总数
    pub total_questions: usize,
    /// 生成的试卷套数
    pub num_variants: usize,
    /// 输出目录
    pub output_directory: PathBuf,
    /// 输出文件名前缀，生成 `<prefix>_<n>.pdf`
    pub file_prefix: String,
    /// 每页题目数，满了就换页
    pub questions_per_page: usize,
    /// 随机种子，设置后结果可复现
    pub seed: Option<u64>,
    /// 是否保留中间 .tex 文件
    pub keep_tex: bool,
    pub compiler: CompilerConfig,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件
    pub output_log_file: PathBuf,
    pub metadata: ExamMetadata,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_directory: PathBuf::from("question_pool"),
            image_extension: "png".to_string(),
            fixed_questions: vec!["dice1.png".to_string()],
            total_questions: 3,
            num_variants: 5,
            output_directory: PathBuf::from("produced_exams"),
            file_prefix: "exam_variant".to_string(),
            questions_per_page: 2,
            seed: None,
            keep_tex: false,
            compiler: CompilerConfig::default(),
            verbose_logging: false,
            output_log_file: PathBuf::from("exam_log.txt"),
            metadata: ExamMetadata::default(),
        }
    }
}

impl Config {
    /// 按 默认值 → TOML 文件 → 环境变量 的顺序构建配置
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let config = match config_file {
            Some(path) => crate::models::loaders::load_config_file(path)?,
            None => Self::default(),
        };
        config.apply_env()
    }

    /// 用环境变量覆盖已有配置，未设置的保持不变
    pub fn apply_env(self) -> AppResult<Self> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        if let Some(v) = var("QUESTIONS_DIRECTORY") {
            self.questions_directory = PathBuf::from(v);
        }
        if let Some(v) = var("IMAGE_EXTENSION") {
            self.image_extension = v;
        }
        if let Some(v) = var("FIXED_QUESTIONS") {
            self.fixed_questions = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(v) = var("TOTAL_QUESTIONS") {
            self.total_questions = parse_var("TOTAL_QUESTIONS", &v, "usize")?;
        }
        if let Some(v) = var("NUM_VARIANTS") {
            self.num_variants = parse_var("NUM_VARIANTS", &v, "usize")?;
        }
        if let Some(v) = var("OUTPUT_DIRECTORY") {
            self.output_directory = PathBuf::from(v);
        }
        if let Some(v) = var("EXAM_SEED") {
            self.seed = Some(parse_var("EXAM_SEED", &v, "u64")?);
        }
        if let Some(v) = var("KEEP_TEX") {
            self.keep_tex = parse_var("KEEP_TEX", &v, "bool")?;
        }
        if let Some(v) = var("LATEX_COMPILER") {
            self.compiler.program = v;
        }
        if let Some(v) = var("VERBOSE_LOGGING") {
            self.verbose_logging = parse_var("VERBOSE_LOGGING", &v, "bool")?;
        }
        if let Some(v) = var("OUTPUT_LOG_FILE") {
            self.output_log_file = PathBuf::from(v);
        }
        Ok(self)
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> AppResult<()> {
        if self.total_questions == 0 {
            return Err(AppError::invalid_config("total_questions", "必须大于 0"));
        }
        if self.num_variants == 0 {
            return Err(AppError::invalid_config("num_variants", "必须大于 0"));
        }
        if self.questions_per_page == 0 {
            return Err(AppError::invalid_config("questions_per_page", "必须大于 0"));
        }
        if self.image_extension.trim_start_matches('.').is_empty() {
            return Err(AppError::invalid_config("image_extension", "不能为空"));
        }
        if self.file_prefix.is_empty() {
            return Err(AppError::invalid_config("file_prefix", "不能为空"));
        }
        if self.compiler.program.trim().is_empty() {
            return Err(AppError::invalid_config("compiler.program", "不能为空"));
        }
        Ok(())
    }

    /// 去掉前导点后的扩展名
    pub fn extension(&self) -> &str {
        self.image_extension.trim_start_matches('.')
    }
}

fn parse_var<T: std::str::FromStr>(
    var_name: &str,
    value: &str,
    expected_type: &'static str,
) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type,
        }
        .into()
    })
}
