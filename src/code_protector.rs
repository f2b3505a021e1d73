//! 代码保护模块
//!
//! 将文本切分为普通文本片段和代码片段：先识别 ``` 围栏代码块（可跨行，非贪婪），
//! 再在围栏之外识别单行、非空的行内代码。翻译只作用于文本片段，
//! 还原时代码片段按原样拼回，不依赖字符串占位符。

// 标准库导入
use std::ops::Range;

// 第三方crate导入
use regex::Regex;

// 本地模块导入
use crate::error::Result;

/// 代码片段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// ``` 围栏代码块
    Fenced,
    /// `行内代码`
    Inline,
}

/// 被保护的代码片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    pub kind: CodeKind,
    /// 在原文中的字节范围
    pub range: Range<usize>,
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    /// 指向 `spans` 的下标
    Code(usize),
}

/// 切分后的文本骨架
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedText {
    pieces: Vec<Piece>,
    spans: Vec<ProtectedSpan>,
}

impl ProtectedText {
    /// 不做任何保护，整段作为文本
    pub fn unprotected(text: &str) -> Self {
        Self {
            pieces: vec![Piece::Text(text.to_string())],
            spans: Vec::new(),
        }
    }

    /// 按出现顺序排列的代码片段
    pub fn spans(&self) -> &[ProtectedSpan] {
        &self.spans
    }

    /// 对每个文本片段应用变换，代码片段保持不变
    pub fn map_text<F>(self, mut transform: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let pieces = self
            .pieces
            .into_iter()
            .map(|piece| match piece {
                Piece::Text(text) => Piece::Text(transform(&text)),
                code => code,
            })
            .collect();

        Self {
            pieces,
            spans: self.spans,
        }
    }

    /// 拼回完整文本
    pub fn restore(&self) -> String {
        let mut output = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => output.push_str(text),
                Piece::Code(index) => output.push_str(&self.spans[*index].literal),
            }
        }
        output
    }
}

/// 代码识别器
#[derive(Debug, Clone)]
pub struct CodeProtector {
    fenced: Regex,
    inline: Regex,
}

impl CodeProtector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fenced: Regex::new(r"(?s)```.*?```")?,
            inline: Regex::new(r"`[^`\n]+`")?,
        })
    }

    /// 切分文本，代码片段进入保护列表
    pub fn protect(&self, text: &str) -> ProtectedText {
        let mut pieces = Vec::new();
        let mut spans = Vec::new();
        let mut cursor = 0;

        for fenced in self.fenced.find_iter(text) {
            self.split_inline(text, cursor..fenced.start(), &mut pieces, &mut spans);
            push_code(
                CodeKind::Fenced,
                fenced.range(),
                fenced.as_str(),
                &mut pieces,
                &mut spans,
            );
            cursor = fenced.end();
        }
        self.split_inline(text, cursor..text.len(), &mut pieces, &mut spans);

        ProtectedText { pieces, spans }
    }

    /// 在围栏之外的区间内识别行内代码
    fn split_inline(
        &self,
        text: &str,
        region: Range<usize>,
        pieces: &mut Vec<Piece>,
        spans: &mut Vec<ProtectedSpan>,
    ) {
        let slice = &text[region.clone()];
        let mut cursor = 0;

        for inline in self.inline.find_iter(slice) {
            push_text(&slice[cursor..inline.start()], pieces);
            let absolute = region.start + inline.start()..region.start + inline.end();
            push_code(CodeKind::Inline, absolute, inline.as_str(), pieces, spans);
            cursor = inline.end();
        }
        push_text(&slice[cursor..], pieces);
    }
}

fn push_text(text: &str, pieces: &mut Vec<Piece>) {
    if !text.is_empty() {
        pieces.push(Piece::Text(text.to_string()));
    }
}

fn push_code(
    kind: CodeKind,
    range: Range<usize>,
    literal: &str,
    pieces: &mut Vec<Piece>,
    spans: &mut Vec<ProtectedSpan>,
) {
    pieces.push(Piece::Code(spans.len()));
    spans.push(ProtectedSpan {
        kind,
        range,
        literal: literal.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protector() -> CodeProtector {
        CodeProtector::new().unwrap()
    }

    #[test]
    fn test_restore_without_changes_is_identity() {
        let text = "Run `cargo build`:\n```sh\necho `nested`\n```\nthen `done`.";
        let protected = protector().protect(text);
        assert_eq!(protected.restore(), text);
    }

    #[test]
    fn test_spans_in_order() {
        let text = "a `x` b\n```\ncode `y`\n``` c `z`";
        let protected = protector().protect(text);
        let kinds: Vec<_> = protected
            .spans()
            .iter()
            .map(|s| (s.kind, s.literal.as_str()))
            .collect();

        assert_eq!(
            kinds,
            vec![
                (CodeKind::Inline, "`x`"),
                (CodeKind::Fenced, "```\ncode `y`\n```"),
                (CodeKind::Inline, "`z`"),
            ]
        );
        for span in protected.spans() {
            assert_eq!(&text[span.range.clone()], span.literal);
        }
    }

    #[test]
    fn test_map_text_skips_code() {
        let text = "upper `keep me` upper";
        let protected = protector()
            .protect(text)
            .map_text(|t| t.to_uppercase());
        assert_eq!(protected.restore(), "UPPER `keep me` UPPER");
    }

    #[test]
    fn test_placeholder_like_text_is_not_confused() {
        let text = "__CODE_BLOCK_0__ and `real`";
        let protected = protector()
            .protect(text)
            .map_text(|t| t.replace("and", "&"));
        assert_eq!(protected.restore(), "__CODE_BLOCK_0__ & `real`");
    }

    #[test]
    fn test_empty_and_multiline_backticks_are_not_inline() {
        let protected = protector().protect("a `` b\n`line\nbreak` c");
        assert!(protected.spans().is_empty());
    }

    #[test]
    fn test_unprotected_keeps_everything_as_text() {
        let protected = ProtectedText::unprotected("`x`").map_text(|t| t.replace('x', "y"));
        assert_eq!(protected.restore(), "`y`");
        assert!(protected.spans().is_empty());
    }
}
