//! # Random Exam
//!
//! 从图片题库随机组卷，生成多套 PDF 试卷（防作弊用）
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、题库、试卷、考试信息
//! - `loaders` - 扫描题库目录、读取 TOML 配置
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单套试卷
//! - `selection` - 固定题目过滤、随机抽题、打乱顺序
//! - `latex` - 渲染 LaTeX 源码
//! - `compiler` - 调用外部编译器生成 PDF
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一套卷子"的完整生成流程
//! - `VariantCtx` - 上下文封装（第几套 / 共几套）
//! - `VariantFlow` - 流程编排（选题 → 渲染 → 编译）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 加载题库、全局检查、逐套生成
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{CompilerConfig, Config};
pub use error::{AppError, AppResult};
pub use models::{ExamMetadata, ExamVariant, Question, QuestionPool};
pub use orchestrator::{App, RunReport};
pub use services::{DocumentCompiler, LatexCompiler};
pub use workflow::{VariantCtx, VariantFlow, VariantOutcome};
