//! 批量试卷生成器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次运行中所有试卷的生成。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置
//! 2. **加载题库**：扫描题库目录一次，之后只读
//! 3. **全局检查**：题库不够抽时整批终止，不产生任何文件
//! 4. **顺序生成**：按编号逐套调用 `VariantFlow`
//! 5. **全局统计**：汇总生成结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单套试卷的细节
//! - **资源所有者**：唯一持有编译器和随机数发生器的模块
//! - **向下委托**：委托 workflow 生成单套试卷

use crate::config::Config;
use crate::models::{load_questions_from_directory, QuestionPool};
use crate::services::{
    ensure_pool_sufficient, random_question_count, resolve_fixed_questions, DocumentCompiler,
    LatexCompiler,
};
use crate::utils::logging;
use crate::workflow::{VariantCtx, VariantFlow, VariantOutcome};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

/// 一次运行的结果
#[derive(Debug)]
pub enum RunReport {
    /// 全部试卷已生成
    Completed { variants: Vec<VariantOutcome> },
    /// 题库不足，整批终止，没有生成任何文件
    Aborted { required: usize, available: usize },
}

impl RunReport {
    /// 生成的 PDF 数量
    pub fn generated(&self) -> usize {
        match self {
            RunReport::Completed { variants } => variants.len(),
            RunReport::Aborted { .. } => 0,
        }
    }
}

/// 应用主结构
pub struct App<C: DocumentCompiler = LatexCompiler> {
    config: Config,
    compiler: C,
}

impl App<LatexCompiler> {
    /// 使用配置中的外部编译器初始化应用
    pub fn from_config(config: Config) -> Result<Self> {
        let compiler = LatexCompiler::new(config.compiler.clone(), config.keep_tex);
        Self::initialize(config, compiler)
    }
}

impl<C: DocumentCompiler> App<C> {
    /// 初始化应用
    pub fn initialize(config: Config, compiler: C) -> Result<Self> {
        config.validate().context("配置校验失败")?;

        logging::log_startup(&config);

        Ok(Self { config, compiler })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunReport> {
        let config = &self.config;

        // 加载题库（排除固定题目）
        let pool = self.load_pool().await?;

        // 固定题目：不存在的直接忽略
        let fixed =
            resolve_fixed_questions(&config.questions_directory, &config.fixed_questions).await;
        if fixed.len() > config.total_questions {
            warn!(
                "⚠️ 固定题目数量 ({}) 超过每套题目总数 ({})，所有固定题目仍会保留",
                fixed.len(),
                config.total_questions
            );
        }

        let num_random = random_question_count(config.total_questions, fixed.len());
        logging::log_pool_loaded(pool.len(), fixed.len(), num_random);

        // 任何一套都不够抽时整批终止
        if let Err(e) = ensure_pool_sufficient(&pool, num_random) {
            error!("❌ {}", e);
            println!("题库中题目不足，无法抽取 {} 道随机题目。", num_random);
            return Ok(RunReport::Aborted {
                required: num_random,
                available: pool.len(),
            });
        }

        tokio::fs::create_dir_all(&config.output_directory)
            .await
            .with_context(|| {
                format!("无法创建输出目录: {}", config.output_directory.display())
            })?;

        let mut rng = match config.seed {
            Some(seed) => {
                info!("🎲 使用固定随机种子: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        // 编译器在输出目录中运行，图片路径必须是绝对路径
        let questions_directory = tokio::fs::canonicalize(&config.questions_directory)
            .await
            .with_context(|| {
                format!("无法解析题库目录: {}", config.questions_directory.display())
            })?;

        let flow = VariantFlow::new(config, &questions_directory, &self.compiler);
        let mut variants = Vec::with_capacity(config.num_variants);

        // 逐套生成，互不共享状态
        for variant_index in 1..=config.num_variants {
            let ctx = VariantCtx::new(variant_index, config.num_variants);
            logging::log_variant_start(&ctx);

            let outcome = flow
                .run(&ctx, &pool, &fixed, num_random, &mut rng)
                .await
                .with_context(|| format!("{} 生成失败", ctx))?;
            variants.push(outcome);
        }

        logging::print_final_stats(&variants, config);
        println!("试卷已全部生成。");

        Ok(RunReport::Completed { variants })
    }

    /// 加载题库
    async fn load_pool(&self) -> Result<QuestionPool> {
        info!("📁 正在扫描题库: {}", self.config.questions_directory.display());

        load_questions_from_directory(
            &self.config.questions_directory,
            self.config.extension(),
            &self.config.fixed_questions,
        )
        .await
        .context("加载题库失败")
    }
}
