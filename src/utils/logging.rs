//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::workflow::{VariantCtx, VariantOutcome};

/// 初始化全局 tracing 日志
///
/// 设置了 `RUST_LOG` 时以其为准，否则按 `verbose` 选择 debug / info；
/// 给出 `log_file` 时同时写入该文件
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let subscriber = build_subscriber(verbose, log_file)?;

    // 重复初始化（测试中常见）时忽略错误
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// 构建输出到终端和日志文件的 subscriber
///
/// 日志文件会先被重写为只有文件头，之后追加本次运行的日志
pub fn build_subscriber(
    verbose: bool,
    log_file: Option<&Path>,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = match log_file {
        Some(path) => {
            init_log_file(path)?;
            Some(
                fmt::layer()
                    .with_writer(file_appender(path)?)
                    .with_ansi(false)
                    .with_target(false),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer))
}

/// 追加写入单个日志文件，不滚动
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .with_context(|| format!("日志文件路径无效: {}", path.display()))?;
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .with_context(|| format!("无法打开日志文件: {}", path.display()))
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &Path) -> Result<()> {
    let log_header = format!(
        "{}\n试卷生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .with_context(|| format!("无法写入日志文件: {}", log_file_path.display()))?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 随机试卷生成");
    info!(
        "📊 每套 {} 题, 共 {} 套",
        config.total_questions, config.num_variants
    );
    info!("📂 输出目录: {}", config.output_directory.display());
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
///
/// # 参数
/// - `pool_size`: 题库中可随机抽取的题目数
/// - `fixed_present`: 实际存在的固定题目数
/// - `num_random`: 每套需要随机抽取的题目数
pub fn log_pool_loaded(pool_size: usize, fixed_present: usize, num_random: usize) {
    info!("✓ 题库中找到 {} 道可抽取题目", pool_size);
    info!("📌 固定题目: {} 道", fixed_present);
    info!("🎲 每套随机抽取: {} 道", num_random);
}

/// 记录单套试卷开始
pub fn log_variant_start(ctx: &VariantCtx) {
    info!("\n{}", "─".repeat(60));
    info!("{} 📦 开始生成", ctx);
}

/// 打印最终统计信息
///
/// # 参数
/// - `variants`: 已生成的试卷
/// - `config`: 配置
pub fn print_final_stats(variants: &[VariantOutcome], config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", variants.len(), config.num_variants);
    for outcome in variants {
        info!("   {}", outcome.pdf_path.display());
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_log_file_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exam_log.txt");

        init_log_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        assert!(content.contains("试卷生成日志"));
    }

    #[test]
    fn test_init_log_file_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("exam_log.txt");
        assert!(init_log_file(&path).is_err());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false, None).unwrap();
        init(true, None).unwrap();
    }

    #[test]
    fn test_subscriber_appends_events_after_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exam_log.txt");
        fs::write(&path, "上一次运行的内容").unwrap();

        let subscriber = build_subscriber(false, Some(&path)).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            info!("✓ 题库中找到 {} 道可抽取题目", 10);
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        assert!(!content.contains("上一次运行的内容"));
        assert!(content.contains("题库中找到 10 道可抽取题目"));
        // 文件中不带颜色控制符
        assert!(!content.contains('\u{1b}'));
    }
}
