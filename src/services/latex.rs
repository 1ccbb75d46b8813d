//! LaTeX 渲染服务 - 业务能力层
//!
//! 把一套试卷渲染成完整的 LaTeX 源码，不负责编译

use crate::models::metadata::ExamMetadata;
use crate::models::question::ExamVariant;
use std::path::Path;

/// 试卷文档渲染器
///
/// 同一次运行共用一个渲染器，每套试卷调用一次 [`LatexDocument::render`]
pub struct LatexDocument<'a> {
    metadata: &'a ExamMetadata,
    questions_directory: &'a Path,
    questions_per_page: usize,
}

impl<'a> LatexDocument<'a> {
    pub fn new(
        metadata: &'a ExamMetadata,
        questions_directory: &'a Path,
        questions_per_page: usize,
    ) -> Self {
        Self {
            metadata,
            questions_directory,
            questions_per_page: questions_per_page.max(1),
        }
    }

    /// 渲染整套试卷
    pub fn render(&self, variant: &ExamVariant) -> String {
        let mut doc = String::with_capacity(4096);
        self.write_preamble(&mut doc);
        doc.push_str("\\begin{document}\n");
        self.write_title_page(&mut doc);
        self.write_questions(&mut doc, variant);
        doc.push_str("\\end{document}\n");
        doc
    }

    fn write_preamble(&self, doc: &mut String) {
        let meta = self.metadata;

        for line in [
            r"\documentclass{article}",
            r"\usepackage[T1]{fontenc}",
            r"\usepackage[utf8]{inputenc}",
            r"\usepackage{lmodern}",
            r"\usepackage{textcomp}",
            r"\usepackage{lastpage}",
            r"\usepackage{graphicx}",
            r"\usepackage[margin=0.8in]{geometry}",
            r"\usepackage{titlesec}",
            r"\usepackage{titling}",
            r"\usepackage{fancyhdr}",
            r"\pagestyle{fancy}",
            r"\fancyhf{}",
        ] {
            push_line(doc, line);
        }

        push_line(
            doc,
            &format!(
                r"\fancyhead[L]{{\fontsize{{12}}{{14}}\selectfont {}}}",
                meta.header_title()
            ),
        );
        push_line(
            doc,
            &format!(
                r"\fancyhead[R]{{\fontsize{{12}}{{14}}\selectfont {}}}",
                meta.exam_date
            ),
        );

        for line in [
            r"\renewcommand{\footrulewidth}{0.4pt}",
            r"\fancyfoot[C]{\fontsize{12}{14}\selectfont \thepage}",
            r"\date{}",
            r"\pretitle{\vspace{1cm}\begin{center}\Huge\bfseries}",
            r"\posttitle{\par\end{center}\vspace{0.5cm}}",
            r"\preauthor{\vspace{0.5cm}\begin{center}\LARGE}",
            r"\postauthor{\end{center}\vspace{0.5cm}}",
            r"\titleformat{\section}{\large\bfseries}{}{0pt}{}",
            r"\titleformat{\subsection}{\large\bfseries}{}{0pt}{}",
            r"\titleformat{\subsubsection}{\large\bfseries}{}{0pt}{}",
            // 标题页不显示页码
            r"\pagenumbering{gobble}",
        ] {
            push_line(doc, line);
        }

        push_line(doc, r"\title{");
        push_line(doc, r"\begin{center}");
        push_line(doc, &format!(r"{{\LARGE {}}}\\[1cm]", meta.preamble));
        push_line(doc, &format!(r"\textbf{{\LARGE {}}}\\[0.5cm]", meta.lecture_number));
        push_line(doc, &format!(r"\textbf{{\Huge {}}}\\[1cm]", meta.title));
        push_line(doc, &format!(r"{{\Large \normalfont {}}}\\[0.5cm]", meta.examiner));
        push_line(
            doc,
            &format!(r"{{\Large \normalfont {}}}\\[0.5cm]", meta.place_and_date()),
        );
        push_line(doc, &format!(r"{{\Large \normalfont {}}}", meta.exam_time));
        push_line(doc, r"\end{center}");
        push_line(doc, "}");
    }

    fn write_title_page(&self, doc: &mut String) {
        push_line(doc, r"\maketitle");
        push_line(doc, r"\noindent\rule{\textwidth}{0.4pt}\vspace{1cm}");

        if !self.metadata.guidelines.is_empty() {
            push_line(doc, r"\section*{\fontsize{16}{18}\selectfont Guidelines:}");
            push_line(doc, r"\begin{itemize}");
            for item in &self.metadata.guidelines {
                push_line(doc, &format!(r"\item \fontsize{{14}}{{16}}\selectfont {}", item));
            }
            push_line(doc, r"\end{itemize}");
        }

        push_line(doc, r"\newpage");
        // 从第二页开始编页码
        push_line(doc, r"\pagenumbering{arabic}");
    }

    fn write_questions(&self, doc: &mut String, variant: &ExamVariant) {
        push_line(doc, r"\section*{ }");

        for (index, question) in variant.questions.iter().enumerate() {
            let number = index + 1;
            let image = question.path_in(self.questions_directory);

            push_line(doc, &format!(r"\subsection*{{Question {}}}", number));
            push_line(doc, r"\begin{figure}[h!]%");
            push_line(doc, r"\centering%");
            push_line(
                doc,
                &format!(
                    r"\includegraphics[width=\textwidth]{{{}}}%",
                    latex_image_path(&image)
                ),
            );
            push_line(doc, r"\end{figure}");

            if number % self.questions_per_page == 0 {
                push_line(doc, r"\newpage");
            }
        }
    }
}

/// 转换为 `\includegraphics` 可用的路径
///
/// 统一使用 `/` 分隔；文件名主体含有多余的点时用花括号包住，
/// 否则 graphicx 会把第一个点之后的部分当成扩展名
pub fn latex_image_path(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");

    let (dir, file) = match raw.rfind('/') {
        Some(pos) => raw.split_at(pos + 1),
        None => ("", raw.as_str()),
    };

    match file.rsplit_once('.') {
        Some((stem, ext)) if stem.contains('.') => format!("{{{}{}}}.{}", dir, stem, ext),
        _ => raw.clone(),
    }
}

fn push_line(doc: &mut String, line: &str) {
    doc.push_str(line);
    doc.push('\n');
}
