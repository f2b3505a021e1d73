use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};

use guide_localizer::config::Cli;
use guide_localizer::constants::messages;
use guide_localizer::error::LocalizeError;
use guide_localizer::localize_error;
use guide_localizer::pipeline::GuideLocalizer;
use guide_localizer::stats::{format_duration, print_run_stats};
use guide_localizer::utils::{init_logging, validate_input_file};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // 参数错误统一以1退出
            let err = localize_error!(usage, format!("{}\n{}", messages::USAGE, e));
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    // 初始化日志系统
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        if cli.quiet {
            eprintln!("{:#}", e);
        } else {
            error!("❌ 处理失败: {:#}", e);
        }

        let code = e
            .downcast_ref::<LocalizeError>()
            .map(LocalizeError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    validate_input_file(&cli.input)?;

    let localizer = GuideLocalizer::with_defaults().context("初始化本地化处理器失败")?;
    let outcome = localizer.process_document(&cli.input)?;

    if !cli.quiet {
        info!(
            "✅ 完成：{} 个标题，总耗时 {}",
            outcome.headers.len(),
            format_duration(outcome.stats.total_time())
        );
    }

    // 显示运行统计
    if cli.stats || cli.verbose {
        print_run_stats(&outcome.stats);
    }

    Ok(())
}
