use std::time::Duration;

/// 单次运行统计
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub load_time: Duration,
    pub parse_time: Duration,
    pub translate_time: Duration,
    pub write_time: Duration,
    pub input_chars: usize,
    pub input_lines: usize,
    pub total_headers: usize,
    pub max_depth: usize,
    pub title_phrase_hits: usize,
    pub filename_collisions: usize,
    pub dirs_created: usize,
}

impl RunStats {
    pub fn total_time(&self) -> Duration {
        self.load_time + self.parse_time + self.translate_time + self.write_time
    }
}

/// 打印运行统计
pub fn print_run_stats(stats: &RunStats) {
    println!("\n📊 运行统计报告:");
    println!("═══════════════════════════════════════");

    // 时间分解
    println!("⏱️  时间分解:");
    println!("   文件读取: {}", format_duration(stats.load_time));
    println!("   结构分析: {}", format_duration(stats.parse_time));
    println!("   标题翻译: {}", format_duration(stats.translate_time));
    println!("   输出写入: {}", format_duration(stats.write_time));
    println!("   总耗时: {}", format_duration(stats.total_time()));

    // 文档统计
    println!("\n📏 文档统计:");
    println!("   字符数: {}", stats.input_chars);
    println!("   行数: {}", stats.input_lines);
    println!("   标题数: {}", stats.total_headers);
    println!("   最深级别: H{}", stats.max_depth);

    // 翻译统计
    println!("\n🔤 翻译统计:");
    println!(
        "   短语表命中: {} / {}",
        stats.title_phrase_hits, stats.total_headers
    );
    println!(
        "   术语回退: {}",
        stats.total_headers.saturating_sub(stats.title_phrase_hits)
    );

    if stats.filename_collisions > 0 {
        println!("\n⚠️  文件名冲突: {} 个", stats.filename_collisions);
    }

    println!("\n📁 新建目录: {} 个", stats.dirs_created);
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.500s");
    }

    #[test]
    fn test_total_time() {
        let stats = RunStats {
            load_time: Duration::from_millis(1),
            parse_time: Duration::from_millis(2),
            translate_time: Duration::from_millis(3),
            write_time: Duration::from_millis(4),
            ..Default::default()
        };
        assert_eq!(stats.total_time(), Duration::from_millis(10));
    }
}
