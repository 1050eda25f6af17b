use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};

use autodork::infrastructure::output::{current_timestamp, write_output};
use autodork::{
    generate_dorks, read_domains, Category, Config, DorkError, GenerationSummary, Logger, LoggerTrait,
    OutputFormat,
};

/// 🔍 AutoDork - Google Dork Generator Tool
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(group(ArgGroup::new("target").required(true).args(["domain", "input_file"])))]
struct Args {
    /// Target domain
    #[clap(long)]
    domain: Option<String>,

    /// File containing multiple domains (one per line)
    #[clap(long)]
    input_file: Option<PathBuf>,

    /// Dork category to generate
    #[clap(long, value_parser = ["filetypes", "images", "videos", "advanced"])]
    category: String,

    /// Output file path [default: dorks.txt]
    #[clap(long)]
    output: Option<PathBuf>,

    /// Generate HTML with clickable links
    #[clap(long, conflicts_with = "text")]
    html: bool,

    /// Generate plain text even if the config enables HTML
    #[clap(long)]
    text: bool,

    /// TOML configuration file
    #[clap(long)]
    config: Option<PathBuf>,

    /// 启用运行日志，日志文件保存到当前目录
    #[clap(long)]
    log: bool,
}

impl Args {
    /// 命令行优先，其次为配置文件
    fn output_format(&self, config: &Config) -> OutputFormat {
        if self.text {
            OutputFormat::Text
        } else {
            OutputFormat::from_html_flag(self.html || config.output.html)
        }
    }

    fn output_path(&self, config: &Config) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.default_path))
    }
}

/// 参数解析失败时的退出码：--help/--version 为 0，其余为 1
fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => DorkError::Argument(err.kind().as_str().unwrap_or("invalid arguments").to_string()).exit_code(),
    }
}

/// 输出 clap 的提示信息，错误信息中已包含用法
fn report_usage(err: &clap::Error) -> ExitCode {
    let code = usage_exit_code(err);
    if code != 0 {
        eprintln!("\n❗ Error: Missing or incorrect arguments.\n");
    }
    let _ = err.print();
    ExitCode::from(code)
}

fn load_domains(args: &Args) -> Result<Vec<String>, DorkError> {
    match (&args.domain, &args.input_file) {
        (_, Some(path)) => read_domains(path),
        (Some(domain), None) => Ok(vec![domain.clone()]),
        (None, None) => Err(DorkError::Argument(
            "one of --domain or --input-file is required".to_string(),
        )),
    }
}

fn generate(args: &Args, config: &Config, logger: &Logger) -> Result<()> {
    let category: Category = args.category.parse()?;
    let format = args.output_format(config);
    let output_path = args.output_path(config);

    logger.log_message(&format!("分类: {}", category))?;
    logger.log_message(&format!("输出格式: {}", format.as_str()))?;
    logger.log_message(&format!("输出文件: {}", output_path.display()))?;

    let domains = load_domains(args)?;
    logger.log_message(&format!("读取域名: {} 个", domains.len()))?;

    let mut summary = GenerationSummary::new(category, format, output_path.clone());

    let dorks = generate_dorks(&domains, category);
    write_output(
        &dorks,
        &output_path,
        format,
        &current_timestamp(),
        &config.search.engine_url,
    )?;

    summary.total_domains = domains.len();
    summary.total_dorks = dorks.len();
    summary.print()?;

    logger
        .finalize(domains.len(), dorks.len(), &output_path, summary.start_time.elapsed())
        .context("无法写入运行日志")?;

    Ok(())
}

/// 执行生成，失败时也在日志中留下原因
fn generate_logged(args: &Args, config: &Config, logger: &Logger) -> Result<()> {
    let result = generate(args, config, logger);
    if let Err(err) = &result {
        let _ = logger.log_message(&format!("错误: {:#}", err));
    }
    result
}

fn run(args: Args) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let logger = Logger::new(args.log)?;
    generate_logged(&args, &config, &logger)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return report_usage(&err),
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❗ Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
