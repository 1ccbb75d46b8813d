//! PDF 编译服务 - 业务能力层
//!
//! 只负责"把 LaTeX 源码变成 PDF"，调用外部编译器

use crate::config::CompilerConfig;
use crate::error::{AppError, AppResult, RenderError};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;
use tracing::debug;

/// 编译失败时保留的输出行数
const LOG_TAIL_LINES: usize = 20;

/// 编译器产生的中间文件扩展名
const INTERMEDIATE_EXTENSIONS: &[&str] = &["aux", "log", "out", "fls", "fdb_latexmk"];

/// 文档编译能力
#[allow(async_fn_in_trait)]
pub trait DocumentCompiler {
    /// 把 LaTeX 源码编译为 `output_directory/<file_stem>.pdf`，返回 PDF 路径
    async fn compile(
        &self,
        source: &str,
        output_directory: &Path,
        file_stem: &str,
    ) -> AppResult<PathBuf>;
}

/// 调用外部 LaTeX 程序（默认 pdflatex）的编译器
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    config: CompilerConfig,
    keep_tex: bool,
}

impl LatexCompiler {
    pub fn new(config: CompilerConfig, keep_tex: bool) -> Self {
        Self { config, keep_tex }
    }

    /// 删除中间文件，不存在的直接跳过
    async fn clean_intermediate(&self, output_directory: &Path, file_stem: &str) -> AppResult<()> {
        let mut extensions: Vec<&str> = INTERMEDIATE_EXTENSIONS.to_vec();
        if !self.keep_tex {
            extensions.push("tex");
        }

        for ext in extensions {
            let path = output_directory.join(format!("{}.{}", file_stem, ext));
            match fs::remove_file(&path).await {
                Ok(()) => debug!("已删除中间文件: {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(AppError::file_write_failed(path, e)),
            }
        }
        Ok(())
    }
}

impl DocumentCompiler for LatexCompiler {
    async fn compile(
        &self,
        source: &str,
        output_directory: &Path,
        file_stem: &str,
    ) -> AppResult<PathBuf> {
        let tex_file = format!("{}.tex", file_stem);
        let tex_path = output_directory.join(&tex_file);
        fs::write(&tex_path, source)
            .await
            .map_err(|e| AppError::file_write_failed(&tex_path, e))?;

        debug!(
            "执行: {} {} {}",
            self.config.program,
            self.config.args.join(" "),
            tex_file
        );

        let output = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(&tex_file)
            .current_dir(output_directory)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| RenderError::CompilerNotFound {
                program: self.config.program.clone(),
                source: e,
            })?;

        // 失败时保留 .tex 和 .log 便于排查
        if !output.status.success() {
            return Err(RenderError::CompilationFailed {
                tex_path,
                code: output.status.code(),
                log_tail: tail_lines(&String::from_utf8_lossy(&output.stdout), LOG_TAIL_LINES),
            }
            .into());
        }

        let pdf_path = output_directory.join(format!("{}.pdf", file_stem));
        if !fs::try_exists(&pdf_path).await.unwrap_or(false) {
            return Err(RenderError::MissingOutput { path: pdf_path }.into());
        }

        self.clean_intermediate(output_directory, file_stem).await?;

        Ok(pdf_path)
    }
}

/// 取文本最后 `n` 行
fn tail_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
