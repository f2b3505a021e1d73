use regex::{NoExpand, Regex};
use tracing::debug;

use crate::code_protector::{CodeKind, CodeProtector, ProtectedText};
use crate::error::Result;
use crate::localize_error;
use crate::terminology::{Dictionary, Terminology};

/// 一条编译好的替换规则
#[derive(Debug, Clone)]
struct SubstitutionRule {
    english: String,
    chinese: String,
    pattern: Regex,
}

impl SubstitutionRule {
    fn compile(english: &str, chinese: &str, pattern: String) -> Result<Self> {
        let pattern =
            Regex::new(&pattern).map_err(|e| localize_error!(pattern, english, e))?;
        Ok(Self {
            english: english.to_string(),
            chinese: chinese.to_string(),
            pattern,
        })
    }

    /// 整词、大小写不敏感
    fn whole_word(english: &str, chinese: &str) -> Result<Self> {
        Self::compile(
            english,
            chinese,
            format!(r"(?i)\b{}\b", regex::escape(english)),
        )
    }

    /// 子串、大小写不敏感（仅用于判断是否命中）
    fn phrase(english: &str, chinese: &str) -> Result<Self> {
        Self::compile(english, chinese, format!("(?i){}", regex::escape(english)))
    }
}

fn compile_rules<F>(dictionary: &Dictionary, build: F) -> Result<Vec<SubstitutionRule>>
where
    F: Fn(&str, &str) -> Result<SubstitutionRule>,
{
    dictionary
        .iter()
        .map(|entry| build(&entry.english, &entry.chinese))
        .collect()
}

/// 基于术语词典的翻译器
///
/// 规则按词典顺序依次作用于整段文本，后面的规则会看到前面规则替换后的结果。
#[derive(Debug, Clone)]
pub struct GuideTranslator {
    term_rules: Vec<SubstitutionRule>,
    title_rules: Vec<SubstitutionRule>,
    protector: CodeProtector,
}

impl GuideTranslator {
    pub fn new(terminology: &Terminology) -> Result<Self> {
        let term_rules = compile_rules(&terminology.terms, SubstitutionRule::whole_word)?;
        let title_rules = compile_rules(&terminology.titles, SubstitutionRule::phrase)?;
        debug!(
            "术语规则: {} 条, 标题规则: {} 条",
            term_rules.len(),
            title_rules.len()
        );

        Ok(Self {
            term_rules,
            title_rules,
            protector: CodeProtector::new()?,
        })
    }

    /// 翻译正文
    ///
    /// `preserve_code` 为真时，围栏代码块和行内代码原样保留。
    pub fn translate_text(&self, text: &str, preserve_code: bool) -> String {
        let skeleton = if preserve_code {
            let protected = self.protector.protect(text);
            for span in protected.spans() {
                let kind = match span.kind {
                    CodeKind::Fenced => "代码块",
                    CodeKind::Inline => "行内代码",
                };
                debug!("保留{}: 字节 {}..{}", kind, span.range.start, span.range.end);
            }
            protected
        } else {
            ProtectedText::unprotected(text)
        };

        skeleton
            .map_text(|segment| self.apply_terms(segment))
            .restore()
    }

    /// 翻译标题
    ///
    /// 标题短语表中第一个（大小写不敏感）出现在标题里的短语即为命中，
    /// 随后只替换该短语第一次按原大小写出现的位置；大小写不一致时标题原样返回，
    /// 不再退回正文翻译。没有命中时退回到不保护代码的正文翻译。
    pub fn translate_title(&self, title: &str) -> String {
        self.translate_title_with_phrase(title).0
    }

    /// 翻译标题，同时返回命中的短语（英文）
    pub fn translate_title_with_phrase(&self, title: &str) -> (String, Option<&str>) {
        match self.find_title_rule(title) {
            Some(rule) => {
                debug!("标题短语命中: {} -> {}", rule.english, rule.chinese);
                let translated = title.replacen(&rule.english, &rule.chinese, 1);
                (translated, Some(rule.english.as_str()))
            }
            None => (self.translate_text(title, false), None),
        }
    }

    fn find_title_rule(&self, title: &str) -> Option<&SubstitutionRule> {
        self.title_rules.iter().find(|rule| rule.pattern.is_match(title))
    }

    fn apply_terms(&self, text: &str) -> String {
        self.term_rules.iter().fold(text.to_string(), |current, rule| {
            rule.pattern
                .replace_all(&current, NoExpand(&rule.chinese))
                .into_owned()
        })
    }
}
