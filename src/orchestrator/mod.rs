//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次运行的整体调度，是整个系统的"指挥中心"。
//!
//! ### `batch_processor` - 批量试卷生成器
//! - 管理应用生命周期（初始化、运行）
//! - 加载题库，做全局的题量检查
//! - 持有编译器和随机数发生器
//! - 按顺序逐套生成，输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 N 套试卷)
//!     ↓
//! workflow::VariantFlow (处理单套试卷)
//!     ↓
//! services (能力层：selection / latex / compiler)
//!     ↓
//! models (题目、题库、考试信息)
//! ```

pub mod batch_processor;

// 重新导出主要类型
pub use batch_processor::{App, RunReport};
