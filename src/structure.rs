//! 文档结构分析模块
//!
//! 识别Markdown标题并按层级切分章节内容。以 `#` 开头的每一行都视为标题，
//! `#` 的连续个数即标题级别。

use serde::Serialize;

use crate::constants::input_config::HEADER_MARKER;

/// 标题记录
///
/// `content` 在切分阶段填充，此后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRecord {
    pub level: usize,
    pub title: String,
    /// 标题所在行号，从1开始
    #[serde(rename = "line_num")]
    pub line_number: usize,
    pub content: String,
}

/// 解析一行，若为标题则返回 (级别, 标题文本)
pub fn parse_header_line(line: &str) -> Option<(usize, String)> {
    if !line.starts_with(HEADER_MARKER) {
        return None;
    }

    let rest = line.trim_start_matches(HEADER_MARKER);
    let level = line.len() - rest.len();
    Some((level, rest.trim().to_string()))
}

/// 按文档顺序提取所有标题
pub fn parse_headers(text: &str) -> Vec<HeaderRecord> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            parse_header_line(line).map(|(level, title)| HeaderRecord {
                level,
                title,
                line_number: index + 1,
                content: String::new(),
            })
        })
        .collect()
}

/// 计算第 `index` 个标题的内容行范围（0起始，左闭右开）
///
/// 结束于下一个级别不深于自身的标题之前，否则到文档末尾。
fn section_range(headers: &[HeaderRecord], index: usize, total_lines: usize) -> (usize, usize) {
    let header = &headers[index];
    let start = header.line_number;
    let end = headers[index + 1..]
        .iter()
        .find(|next| next.level <= header.level)
        .map(|next| next.line_number - 1)
        .unwrap_or(total_lines);

    (start, end)
}

/// 为每个标题填充所属章节内容
pub fn extract_section_content(mut headers: Vec<HeaderRecord>, text: &str) -> Vec<HeaderRecord> {
    let lines: Vec<&str> = text.split('\n').collect();

    for index in 0..headers.len() {
        let (start, end) = section_range(&headers, index, lines.len());
        headers[index].content = lines[start..end].join("\n");
    }

    headers
}

/// 解析并切分，一步完成
pub fn analyze_structure(text: &str) -> Vec<HeaderRecord> {
    extract_section_content(parse_headers(text), text)
}

/// 生成缩进的标题大纲，每级缩进两个空格
pub fn outline(headers: &[HeaderRecord]) -> Vec<String> {
    headers
        .iter()
        .map(|h| {
            format!(
                "{}H{}: {}",
                "  ".repeat(h.level.saturating_sub(1)),
                h.level,
                h.title
            )
        })
        .collect()
}

/// 最深的标题级别
pub fn max_depth(headers: &[HeaderRecord]) -> usize {
    headers.iter().map(|h| h.level).max().unwrap_or(0)
}
