use serde::{Deserialize, Serialize};

/// 考试信息，同一次运行的所有试卷共用
///
/// 字段原样写入 LaTeX，可以包含 LaTeX 命令
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExamMetadata {
    /// 标题页第一行
    pub preamble: String,
    /// 课程编号
    pub lecture_number: String,
    /// 课程名称
    pub title: String,
    /// 主考人
    pub examiner: String,
    /// 考试地点，显示在日期前
    pub location: String,
    pub exam_date: String,
    pub exam_time: String,
    /// 考试须知，每条一行
    pub guidelines: Vec<String>,
}

impl Default for ExamMetadata {
    fn default() -> Self {
        Self {
            preamble: "Examination of the Lecture".to_string(),
            lecture_number: "VO 724650".to_string(),
            title: "Advanced Quantum Chemistry".to_string(),
            examiner: "Assoz Prof. Dr. Thomas Hofer".to_string(),
            location: "Innsbruck".to_string(),
            exam_date: "17.07.2024".to_string(),
            exam_time: "10:00".to_string(),
            guidelines: vec![
                "Time: 60 minutes.".to_string(),
                "Turn off your mobile devices or put them in your bag.".to_string(),
                "Leave one empty seat between you and your neighbor.".to_string(),
                "Do NOT work in teams.".to_string(),
            ],
        }
    }
}

impl ExamMetadata {
    /// 页眉左侧文字
    pub fn header_title(&self) -> String {
        format!("Examination: {} {}", self.lecture_number, self.title)
    }

    /// 标题页的地点+日期行
    pub fn place_and_date(&self) -> String {
        if self.location.is_empty() {
            self.exam_date.clone()
        } else {
            format!("{}, {}", self.location, self.exam_date)
        }
    }
}
