//! 选题服务 - 业务能力层
//!
//! 只负责"这一套卷子用哪些题、什么顺序"，不关心渲染

use crate::error::{AppResult, BusinessError};
use crate::models::question::{Question, QuestionPool};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// 过滤出题库目录中实际存在的固定题目
///
/// 不存在的文件直接忽略（只记录警告），重复的文件名只保留第一次出现
pub async fn resolve_fixed_questions(directory: &Path, fixed: &[String]) -> Vec<Question> {
    let mut seen = HashSet::new();
    let mut present = Vec::new();

    for name in fixed {
        if !seen.insert(name.as_str()) {
            debug!("固定题目重复配置，已忽略: {}", name);
            continue;
        }

        // 只认普通文件，与题库扫描一致
        let question = Question::new(name.as_str());
        let is_file = fs::metadata(question.path_in(directory))
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if is_file {
            present.push(question);
        } else {
            warn!("⚠️ 固定题目不存在，已跳过: {}", name);
        }
    }

    present
}

/// 需要从题库随机抽取的题目数量
///
/// 固定题目已经超过总数时为 0
pub fn random_question_count(total_questions: usize, fixed_present: usize) -> usize {
    total_questions.saturating_sub(fixed_present)
}

/// 检查题库是否够抽
pub fn ensure_pool_sufficient(pool: &QuestionPool, num_random: usize) -> AppResult<()> {
    if num_random > pool.len() {
        return Err(BusinessError::InsufficientQuestions {
            required: num_random,
            available: pool.len(),
        }
        .into());
    }
    Ok(())
}

/// 为一套试卷选题
///
/// 固定题目全部保留，从题库不放回地抽取 `num_random` 道，合并后整体打乱
pub fn select_questions<R: Rng + ?Sized>(
    pool: &QuestionPool,
    fixed: &[Question],
    num_random: usize,
    rng: &mut R,
) -> AppResult<Vec<Question>> {
    ensure_pool_sufficient(pool, num_random)?;

    let mut combined: Vec<Question> = Vec::with_capacity(fixed.len() + num_random);
    combined.extend_from_slice(fixed);
    combined.extend(pool.questions().choose_multiple(rng, num_random).cloned());
    combined.shuffle(rng);

    Ok(combined)
}
