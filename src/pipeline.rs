//! 处理流程编排
//!
//! 加载 → 结构分析 → 章节切分 → 标题翻译 → 文件名 → 目录骨架 → 清单，
//! 各阶段严格顺序执行。加载失败时不创建任何目录或清单。

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::config::LocalizerConfig;
use crate::document::{load_document, SourceDocument};
use crate::error::Result;
use crate::filename::{find_collisions, FilenameDeriver};
use crate::manifest::{ChineseStructureRecord, Manifest};
use crate::skeleton::{SkeletonBuilder, SkeletonReport};
use crate::stats::RunStats;
use crate::structure::{analyze_structure, max_depth, outline, HeaderRecord};
use crate::terminology::Terminology;
use crate::translator::GuideTranslator;

/// 一次运行的完整结果
#[derive(Debug)]
pub struct RunOutcome {
    pub headers: Vec<HeaderRecord>,
    pub chinese_structure: Vec<ChineseStructureRecord>,
    pub skeleton: SkeletonReport,
    pub manifest_path: PathBuf,
    pub stats: RunStats,
}

/// 指南本地化处理器
///
/// 词典在构造时注入并编译，之后只读。
pub struct GuideLocalizer {
    config: LocalizerConfig,
    terminology: Terminology,
    translator: GuideTranslator,
    deriver: FilenameDeriver,
}

impl GuideLocalizer {
    pub fn new(config: LocalizerConfig, terminology: Terminology) -> Result<Self> {
        let translator = GuideTranslator::new(&terminology)?;
        Ok(Self {
            config,
            terminology,
            translator,
            deriver: FilenameDeriver::new()?,
        })
    }

    /// 固定输出布局 + 内置词典
    pub fn with_defaults() -> Result<Self> {
        Self::new(LocalizerConfig::new(), Terminology::builtin())
    }

    pub fn config(&self) -> &LocalizerConfig {
        &self.config
    }

    /// 为每个标题生成中文标题和文件名
    pub fn build_chinese_structure(
        &self,
        headers: &[HeaderRecord],
    ) -> Vec<ChineseStructureRecord> {
        self.translate_headers(headers).0
    }

    /// 同 `build_chinese_structure`，另返回命中标题短语的标题数
    fn translate_headers(&self, headers: &[HeaderRecord]) -> (Vec<ChineseStructureRecord>, usize) {
        let mut phrase_hits = 0;
        let records = headers
            .iter()
            .map(|header| {
                let (chinese_title, phrase) =
                    self.translator.translate_title_with_phrase(&header.title);
                if phrase.is_some() {
                    phrase_hits += 1;
                }
                let filename = self.deriver.derive(&chinese_title, header.level);
                ChineseStructureRecord {
                    level: header.level,
                    original_title: header.title.clone(),
                    chinese_title,
                    filename,
                }
            })
            .collect();

        (records, phrase_hits)
    }

    /// 从文件路径处理整个文档
    pub fn process_document<P: AsRef<Path>>(&self, path: P) -> Result<RunOutcome> {
        info!("开始处理文档: {}", path.as_ref().display());

        let load_start = Instant::now();
        let document = load_document(path)?;
        let load_time = load_start.elapsed();

        let mut outcome = self.process_source(&document)?;
        outcome.stats.load_time = load_time;
        Ok(outcome)
    }

    /// 处理已加载的文档
    pub fn process_source(&self, document: &SourceDocument) -> Result<RunOutcome> {
        let mut stats = RunStats {
            input_chars: document.char_count(),
            input_lines: document.line_count(),
            ..Default::default()
        };

        // 1. 结构分析与章节切分
        let parse_start = Instant::now();
        let headers = analyze_structure(&document.content);
        stats.parse_time = parse_start.elapsed();
        stats.total_headers = headers.len();
        stats.max_depth = max_depth(&headers);

        info!("发现 {} 个标题", headers.len());
        for line in outline(&headers) {
            info!("{}", line);
        }

        // 2. 中文结构
        let translate_start = Instant::now();
        let (chinese_structure, phrase_hits) = self.translate_headers(&headers);
        stats.translate_time = translate_start.elapsed();
        stats.title_phrase_hits = phrase_hits;

        let collisions = find_collisions(chinese_structure.iter().map(|r| r.filename.as_str()));
        for (filename, count) in &collisions {
            warn!("⚠️  文件名冲突: {} 被 {} 个标题使用", filename, count);
        }
        stats.filename_collisions = collisions.len();

        // 3. 目录骨架与清单
        let write_start = Instant::now();
        let skeleton = SkeletonBuilder::new(&self.config).build()?;
        stats.dirs_created = skeleton.created.len();

        let manifest_path = self.config.manifest_path();
        Manifest::new(
            document.display_path(),
            &headers,
            &chinese_structure,
            &self.terminology.terms,
        )
        .write_to(&manifest_path)?;
        stats.write_time = write_start.elapsed();

        info!("处理完成！分析结果已保存: {}", manifest_path.display());

        Ok(RunOutcome {
            headers,
            chinese_structure,
            skeleton,
            manifest_path,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocalizeError;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    const GUIDE: &str = "# Introduction\nWelcome to the CLI guide.\n\n## Getting Started with Installation\nRun `install CLI` first.\n\n### Best Practices\nKeep it simple.\n\n## Troubleshooting\nCheck logs.\n";

    fn localizer_in(tmp: &TempDir) -> GuideLocalizer {
        let config = LocalizerConfig::new().with_base_dir(tmp.path().join("docs"));
        GuideLocalizer::new(config, Terminology::builtin()).unwrap()
    }

    #[test]
    fn test_full_run_writes_skeleton_and_manifest() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("guide.md");
        fs::write(&input, GUIDE).unwrap();

        let localizer = localizer_in(&tmp);
        let outcome = localizer.process_document(&input).unwrap();

        assert_eq!(outcome.headers.len(), 4);
        assert_eq!(outcome.stats.total_headers, 4);
        assert_eq!(outcome.stats.max_depth, 3);
        assert_eq!(outcome.stats.title_phrase_hits, 4);
        assert_eq!(outcome.stats.dirs_created, 7);
        assert!(localizer.config().guide_root().join("06-reference").is_dir());

        let titles: Vec<_> = outcome
            .chinese_structure
            .iter()
            .map(|r| (r.chinese_title.as_str(), r.filename.as_str()))
            .collect();
        assert_eq!(
            titles,
            vec![
                ("介绍", "chapter-介绍.md"),
                ("快速开始 with Installation", "section-快速开始-with-installation.md"),
                ("最佳实践", "subsection-最佳实践.md"),
                ("故障排除", "section-故障排除.md"),
            ]
        );

        let json = fs::read_to_string(&outcome.manifest_path).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["original_file"], input.to_string_lossy().to_string());
        assert_eq!(value["total_headers"], 4);
        assert_eq!(value["structure"][1]["line_num"], 4);
        assert_eq!(
            value["structure"][1]["content"],
            "Run `install CLI` first.\n\n### Best Practices\nKeep it simple.\n"
        );
        assert_eq!(value["terminology"]["CLI"], "命令行界面");
    }

    #[test]
    fn test_zero_headers() {
        let tmp = TempDir::new().unwrap();
        let localizer = localizer_in(&tmp);
        let doc = SourceDocument::from_text("plain.md", "just text\nno headers\n");

        let outcome = localizer.process_source(&doc).unwrap();
        assert!(outcome.headers.is_empty());

        let value: Value =
            serde_json::from_str(&fs::read_to_string(&outcome.manifest_path).unwrap()).unwrap();
        assert_eq!(value["total_headers"], 0);
        assert_eq!(value["chinese_structure"], Value::Array(vec![]));
    }

    #[test]
    fn test_missing_input_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let localizer = localizer_in(&tmp);

        let err = localizer
            .process_document(tmp.path().join("missing.md"))
            .unwrap_err();
        assert!(matches!(err, LocalizeError::FileNotFound { .. }));
        assert!(!tmp.path().join("docs").exists());
    }

    #[test]
    fn test_collisions_are_kept_and_counted() {
        let tmp = TempDir::new().unwrap();
        let localizer = localizer_in(&tmp);
        let doc = SourceDocument::from_text("dup.md", "## Setup\na\n## Setup!\nb\n");

        let outcome = localizer.process_source(&doc).unwrap();
        assert_eq!(outcome.chinese_structure[0].filename, "section-设置.md");
        assert_eq!(outcome.chinese_structure[1].filename, "section-设置.md");
        assert_eq!(outcome.stats.filename_collisions, 1);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let localizer = localizer_in(&tmp);
        let doc = SourceDocument::from_text("g.md", GUIDE);

        let first = localizer.process_source(&doc).unwrap();
        let first_json = fs::read_to_string(&first.manifest_path).unwrap();
        let second = localizer.process_source(&doc).unwrap();

        assert_eq!(second.stats.dirs_created, 0);
        assert_eq!(fs::read_to_string(&second.manifest_path).unwrap(), first_json);
    }

    #[test]
    fn test_custom_terminology_is_injected() {
        let tmp = TempDir::new().unwrap();
        let config = LocalizerConfig::new().with_base_dir(tmp.path().join("docs"));
        let terminology = Terminology::new(
            crate::terminology::Dictionary::from_pairs([("widget", "部件")]),
            crate::terminology::Dictionary::new(),
        );
        let localizer = GuideLocalizer::new(config, terminology).unwrap();

        let records = localizer.build_chinese_structure(&[HeaderRecord {
            level: 1,
            title: "Widget Basics".to_string(),
            line_number: 1,
            content: String::new(),
        }]);
        assert_eq!(records[0].chinese_title, "部件 Basics");
        assert_eq!(records[0].filename, "chapter-部件-basics.md");
    }

    #[test]
    fn test_title_case_mismatch_keeps_title_and_filename() {
        let tmp = TempDir::new().unwrap();
        let localizer = localizer_in(&tmp);
        let doc = SourceDocument::from_text("case.md", "# INSTALLATION
## getting started
");

        let outcome = localizer.process_source(&doc).unwrap();
        let records: Vec<_> = outcome
            .chinese_structure
            .iter()
            .map(|r| (r.chinese_title.as_str(), r.filename.as_str()))
            .collect();
        assert_eq!(
            records,
            vec![
                ("INSTALLATION", "chapter-installation.md"),
                ("getting started", "section-getting-started.md"),
            ]
        );
        assert_eq!(outcome.stats.title_phrase_hits, 2);
    }
}
