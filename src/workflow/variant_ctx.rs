//! 试卷生成上下文
//!
//! 封装"我正在生成第几套卷子"这一信息

use std::fmt::Display;

/// 单套试卷的生成上下文
#[derive(Debug, Clone, Copy)]
pub struct VariantCtx {
    /// 试卷编号（从1开始）
    pub variant_index: usize,

    /// 本次运行的试卷总套数（仅用于日志显示）
    pub total_variants: usize,
}

impl VariantCtx {
    /// 创建新的试卷上下文
    pub fn new(variant_index: usize, total_variants: usize) -> Self {
        Self {
            variant_index,
            total_variants,
        }
    }
}

impl Display for VariantCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[试卷 {}/{}]", self.variant_index, self.total_variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(VariantCtx::new(2, 5).to_string(), "[试卷 2/5]");
    }
}
