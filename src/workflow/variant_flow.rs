//! 试卷生成流程 - 流程层
//!
//! 核心职责：定义"一套卷子"的完整生成流程
//!
//! 流程顺序：
//! 1. 选题（固定题目 + 随机抽取 → 打乱）
//! 2. 渲染 LaTeX
//! 3. 编译 PDF 并清理中间文件

use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::question::{ExamVariant, Question, QuestionPool};
use crate::services::{select_questions, DocumentCompiler, LatexDocument};
use crate::workflow::variant_ctx::VariantCtx;

/// 单套试卷的生成结果
#[derive(Debug, Clone)]
pub struct VariantOutcome {
    pub pdf_path: PathBuf,
    pub variant: ExamVariant,
}

/// 试卷生成流程
///
/// - 编排选题、渲染、编译三个步骤
/// - 不持有跨试卷的状态，每套卷子独立生成
pub struct VariantFlow<'a, C: DocumentCompiler> {
    renderer: LatexDocument<'a>,
    compiler: &'a C,
    output_directory: &'a Path,
    file_prefix: &'a str,
}

impl<'a, C: DocumentCompiler> VariantFlow<'a, C> {
    /// 创建新的试卷生成流程
    ///
    /// 编译器在输出目录中运行，`questions_directory` 必须是绝对路径
    pub fn new(config: &'a Config, questions_directory: &'a Path, compiler: &'a C) -> Self {
        Self {
            renderer: LatexDocument::new(
                &config.metadata,
                questions_directory,
                config.questions_per_page,
            ),
            compiler,
            output_directory: &config.output_directory,
            file_prefix: &config.file_prefix,
        }
    }

    pub async fn run<R: Rng + ?Sized>(
        &self,
        ctx: &VariantCtx,
        pool: &QuestionPool,
        fixed: &[Question],
        num_random: usize,
        rng: &mut R,
    ) -> AppResult<VariantOutcome> {
        // ========== 步骤 1: 选题 ==========
        let questions = select_questions(pool, fixed, num_random, rng)?;
        let variant = ExamVariant::new(ctx.variant_index, questions);

        info!("{} 🎲 已选出 {} 道题目", ctx, variant.len());
        for (i, q) in variant.questions.iter().enumerate() {
            debug!("{}   {}. {}", ctx, i + 1, q);
        }

        // ========== 步骤 2: 渲染 ==========
        let source = self.renderer.render(&variant);

        // ========== 步骤 3: 编译 ==========
        let file_stem = variant.file_stem(self.file_prefix);
        info!("{} 📄 正在编译 {}.pdf ...", ctx, file_stem);

        let pdf_path = self
            .compiler
            .compile(&source, self.output_directory, &file_stem)
            .await?;

        info!("{} ✓ 已生成: {}", ctx, pdf_path.display());

        Ok(VariantOutcome { pdf_path, variant })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    /// 记录收到的源码，不真正编译
    #[derive(Default)]
    struct RecordingCompiler {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl DocumentCompiler for RecordingCompiler {
        async fn compile(
            &self,
            source: &str,
            output_directory: &Path,
            file_stem: &str,
        ) -> AppResult<PathBuf> {
            self.calls
                .borrow_mut()
                .push((file_stem.to_string(), source.to_string()));
            Ok(output_directory.join(format!("{}.pdf", file_stem)))
        }
    }

    #[tokio::test]
    async fn test_run_renders_selected_questions() {
        let config = Config {
            questions_directory: PathBuf::from("/pool"),
            output_directory: PathBuf::from("/out"),
            ..Config::default()
        };
        let compiler = RecordingCompiler::default();
        let flow = VariantFlow::new(&config, &config.questions_directory, &compiler);

        let pool = QuestionPool::new(vec![
            Question::from("q1.png"),
            Question::from("q2.png"),
            Question::from("q3.png"),
        ]);
        let fixed = vec![Question::from("dice1.png")];
        let mut rng = StdRng::seed_from_u64(2);

        let outcome = flow
            .run(&VariantCtx::new(3, 5), &pool, &fixed, 2, &mut rng)
            .await
            .unwrap();

        assert_eq!(outcome.pdf_path, PathBuf::from("/out/exam_variant_3.pdf"));
        assert_eq!(outcome.variant.index, 3);
        assert_eq!(outcome.variant.len(), 3);
        assert!(outcome.variant.questions.contains(&fixed[0]));

        let calls = compiler.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "exam_variant_3");
        for q in &outcome.variant.questions {
            assert!(calls[0].1.contains(&format!("{{/pool/{}}}", q)));
        }
    }

    #[tokio::test]
    async fn test_run_insufficient_pool_skips_compiler() {
        let config = Config::default();
        let compiler = RecordingCompiler::default();
        let flow = VariantFlow::new(&config, Path::new("/pool"), &compiler);
        let mut rng = StdRng::seed_from_u64(0);

        let result = flow
            .run(&VariantCtx::new(1, 1), &QuestionPool::default(), &[], 1, &mut rng)
            .await;

        assert!(result.unwrap_err().is_insufficient_questions());
        assert!(compiler.calls.borrow().is_empty());
    }
}
