//! 文件名生成模块

use std::collections::HashMap;

use regex::Regex;

use crate::constants::{filename_config, prefix_for_level};
use crate::error::Result;

/// 标题 → 文件名
///
/// 小写化后去掉非单词、非空白、非连字符的字符，空白与连字符的连续段折叠为一个 `-`，
/// 再去掉首尾 `-`。中文等Unicode单词字符保留。
#[derive(Debug, Clone)]
pub struct FilenameDeriver {
    disallowed: Regex,
    separators: Regex,
}

impl FilenameDeriver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            disallowed: Regex::new(r"[^\w\s-]")?,
            separators: Regex::new(r"[-\s]+")?,
        })
    }

    pub fn slugify(&self, title: &str) -> String {
        let lowered = title.to_lowercase();
        let cleaned = self.disallowed.replace_all(&lowered, "");
        let joined = self.separators.replace_all(&cleaned, "-");
        joined.trim_matches('-').to_string()
    }

    pub fn derive(&self, title: &str, level: usize) -> String {
        format!(
            "{}{}{}",
            prefix_for_level(level),
            self.slugify(title),
            filename_config::FILE_SUFFIX
        )
    }
}

/// 找出被多个标题共用的文件名，按首次出现顺序返回 (文件名, 次数)
pub fn find_collisions<'a, I>(filenames: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for name in filenames {
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|name| {
            let count = counts[name];
            (count > 1).then(|| (name.to_string(), count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deriver() -> FilenameDeriver {
        FilenameDeriver::new().unwrap()
    }

    #[test]
    fn test_level_prefixes() {
        let d = deriver();
        assert_eq!(d.derive("最佳实践", 2), "section-最佳实践.md");
        assert_eq!(d.derive("介绍", 1), "chapter-介绍.md");
        assert_eq!(d.derive("Linux", 3), "subsection-linux.md");
        assert_eq!(d.derive("Deep", 5), "subsection-deep.md");
    }

    #[test]
    fn test_slug_rules() {
        let d = deriver();
        assert_eq!(d.slugify("快速开始 with Installation"), "快速开始-with-installation");
        assert_eq!(d.slugify("  What's New?  "), "whats-new");
        assert_eq!(d.slugify("a -- b\t\tc"), "a-b-c");
        assert_eq!(d.slugify("--edge--"), "edge");
        assert_eq!(d.slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(d.slugify("!!!"), "");
    }

    #[test]
    fn test_deterministic() {
        let d = deriver();
        assert_eq!(d.derive("Same Title", 2), d.derive("Same Title", 2));
    }

    #[test]
    fn test_collisions_detected() {
        let names = ["a.md", "b.md", "a.md", "c.md", "b.md", "a.md"];
        assert_eq!(
            find_collisions(names.iter().copied()),
            vec![("a.md".to_string(), 3), ("b.md".to_string(), 2)]
        );
        assert!(find_collisions(["x.md", "y.md"].iter().copied()).is_empty());
    }
}
