//! 术语词典模块
//!
//! 提供英文→中文的有序对照表。词条顺序即替换顺序，
//! 重复键保留首次出现的位置，值以最后一次为准。

// 第三方crate导入
use serde::ser::{Serialize, SerializeMap, Serializer};

/// 单条术语
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub english: String,
    pub chinese: String,
}

/// 有序术语词典
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<TermEntry>,
}

impl Dictionary {
    /// 创建空词典
    pub fn new() -> Self {
        Self::default()
    }

    /// 从有序词条构建词典
    pub fn from_pairs<I, E, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, C)>,
        E: Into<String>,
        C: Into<String>,
    {
        let mut dictionary = Self::new();
        for (english, chinese) in pairs {
            dictionary.insert(english, chinese);
        }
        dictionary
    }

    /// 插入词条，已存在的键原位覆盖
    pub fn insert<E: Into<String>, C: Into<String>>(&mut self, english: E, chinese: C) {
        let english = english.into();
        let chinese = chinese.into();

        match self.entries.iter_mut().find(|e| e.english == english) {
            Some(existing) => existing.chinese = chinese,
            None => self.entries.push(TermEntry { english, chinese }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.english, &entry.chinese)?;
        }
        map.end()
    }
}

/// 正文术语对照表与标题短语对照表
#[derive(Debug, Clone)]
pub struct Terminology {
    /// 正文术语，整词、大小写不敏感替换
    pub terms: Dictionary,
    /// 标题短语，按顺序首个命中即替换
    pub titles: Dictionary,
}

impl Terminology {
    pub fn new(terms: Dictionary, titles: Dictionary) -> Self {
        Self { terms, titles }
    }

    /// 内置的技术文档对照表
    pub fn builtin() -> Self {
        Self::new(builtin_terms(), builtin_titles())
    }
}

impl Default for Terminology {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 技术术语对照表
pub fn builtin_terms() -> Dictionary {
    Dictionary::from_pairs([
        ("Claude Code", "Claude Code"),
        ("CLI", "命令行界面"),
        ("API", "API"),
        ("JSON", "JSON"),
        ("Markdown", "Markdown"),
        ("GitHub", "GitHub"),
        ("repository", "仓库"),
        ("branch", "分支"),
        ("commit", "提交"),
        ("pull request", "拉取请求"),
        ("configuration", "配置"),
        ("installation", "安装"),
        ("deployment", "部署"),
        ("debugging", "调试"),
        ("testing", "测试"),
        ("integration", "集成"),
        ("automation", "自动化"),
        ("workflow", "工作流程"),
        ("plugin", "插件"),
        ("extension", "扩展"),
        ("template", "模板"),
        ("context", "上下文"),
        ("environment", "环境"),
        ("variable", "变量"),
        ("function", "函数"),
        ("method", "方法"),
        ("class", "类"),
        ("object", "对象"),
        ("module", "模块"),
        ("package", "包"),
        ("dependency", "依赖"),
        ("framework", "框架"),
        ("library", "库"),
        ("database", "数据库"),
        ("server", "服务器"),
        ("client", "客户端"),
        ("authentication", "认证"),
        ("authorization", "授权"),
        ("encryption", "加密"),
        ("security", "安全"),
        ("performance", "性能"),
        ("optimization", "优化"),
        ("scalability", "可扩展性"),
        ("maintainability", "可维护性"),
        ("documentation", "文档"),
        ("tutorial", "教程"),
        ("guide", "指南"),
        ("reference", "参考"),
        ("example", "示例"),
        ("sample", "示例"),
        ("demonstration", "演示"),
        ("walkthrough", " walkthrough"),
        ("overview", "概述"),
        ("introduction", "介绍"),
        ("getting started", "快速开始"),
        ("prerequisites", "先决条件"),
        ("requirements", "要求"),
        ("setup", "设置"),
        ("configuration", "配置"),
        ("troubleshooting", "故障排除"),
        ("FAQ", "常见问题"),
        ("best practices", "最佳实践"),
        ("tips", "技巧"),
        ("tricks", "技巧"),
        ("hacks", "技巧"),
        ("secrets", "秘诀"),
        ("advanced", "高级"),
        ("intermediate", "中级"),
        ("beginner", "初学者"),
        ("expert", "专家"),
        ("professional", "专业"),
        ("enterprise", "企业"),
        ("community", "社区"),
        ("contribution", "贡献"),
        ("open source", "开源"),
        ("license", "许可证"),
        ("copyright", "版权"),
        ("trademark", "商标"),
        ("patent", "专利"),
        ("intellectual property", "知识产权"),
    ])
}

/// 常见标题对照表
pub fn builtin_titles() -> Dictionary {
    Dictionary::from_pairs([
        ("Introduction", "介绍"),
        ("Getting Started", "快速开始"),
        ("Installation", "安装"),
        ("Configuration", "配置"),
        ("Basic Usage", "基本使用"),
        ("Advanced Features", "高级功能"),
        ("Examples", "示例"),
        ("Troubleshooting", "故障排除"),
        ("API Reference", "API参考"),
        ("Contributing", "贡献指南"),
        ("License", "许可证"),
        ("Overview", "概述"),
        ("Prerequisites", "先决条件"),
        ("Requirements", "系统要求"),
        ("Setup", "设置"),
        ("Configuration", "配置"),
        ("Best Practices", "最佳实践"),
        ("Tips and Tricks", "技巧和秘诀"),
        ("Common Issues", "常见问题"),
        ("Debugging", "调试"),
        ("Testing", "测试"),
        ("Deployment", "部署"),
        ("Security", "安全"),
        ("Performance", "性能"),
        ("Optimization", "优化"),
        ("Integration", "集成"),
        ("Automation", "自动化"),
        ("Workflow", "工作流程"),
        ("Plugins", "插件"),
        ("Extensions", "扩展"),
        ("Templates", "模板"),
        ("Context", "上下文"),
        ("Environment", "环境"),
        ("Variables", "变量"),
        ("Functions", "函数"),
        ("Methods", "方法"),
        ("Classes", "类"),
        ("Objects", "对象"),
        ("Modules", "模块"),
        ("Packages", "包"),
        ("Dependencies", "依赖"),
        ("Frameworks", "框架"),
        ("Libraries", "库"),
        ("Databases", "数据库"),
        ("Servers", "服务器"),
        ("Clients", "客户端"),
        ("Authentication", "认证"),
        ("Authorization", "授权"),
        ("Encryption", "加密"),
        ("Community", "社区"),
        ("Contributions", "贡献"),
        ("Open Source", "开源"),
        ("Resources", "资源"),
        ("Documentation", "文档"),
        ("Tutorials", "教程"),
        ("Guides", "指南"),
        ("References", "参考"),
        ("Examples", "示例"),
        ("Samples", "示例"),
        ("Demonstrations", "演示"),
        ("Walkthroughs", "详细指南"),
        ("FAQ", "常见问题"),
        ("Glossary", "术语表"),
        ("Index", "索引"),
        ("Appendix", "附录"),
    ])
}
