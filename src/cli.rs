//! 命令行参数
//!
//! 命令行参数优先级最高，覆盖配置文件和环境变量

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// 从图片题库随机生成多套 PDF 试卷
#[derive(Parser, Debug, Default)]
#[command(name = "random_exam", version, about)]
pub struct Cli {
    /// TOML 配置文件
    #[arg(short, long, env = "EXAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// 题库目录
    #[arg(long)]
    pub questions_dir: Option<PathBuf>,

    /// 输出目录
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 每套试卷的题目总数
    #[arg(short = 'n', long)]
    pub total: Option<usize>,

    /// 生成的试卷套数
    #[arg(long)]
    pub variants: Option<usize>,

    /// 随机种子
    #[arg(long)]
    pub seed: Option<u64>,

    /// 保留中间 .tex 文件
    #[arg(long)]
    pub keep_tex: bool,

    /// LaTeX 编译程序
    #[arg(long)]
    pub compiler: Option<String>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 把命令行参数叠加到配置上
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.questions_dir {
            config.questions_directory = dir.clone();
        }
        if let Some(dir) = &self.output {
            config.output_directory = dir.clone();
        }
        if let Some(total) = self.total {
            config.total_questions = total;
        }
        if let Some(variants) = self.variants {
            config.num_variants = variants;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(program) = &self.compiler {
            config.compiler.program = program.clone();
        }
        config.keep_tex |= self.keep_tex;
        config.verbose_logging |= self.verbose;
        config
    }
}
