use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use humansize::{format_size, BINARY};

use crate::domain::Category;
use crate::infrastructure::OutputFormat;

/// 格式化文件大小
pub fn format_file_size(size: u64) -> String {
    format_size(size, BINARY)
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    }
}

/// 生成摘要
pub struct GenerationSummary {
    pub start_time: Instant,
    pub category: Category,
    pub format: OutputFormat,
    pub output_path: PathBuf,
    pub total_domains: usize,
    pub total_dorks: usize,
}

impl GenerationSummary {
    pub fn new(category: Category, format: OutputFormat, output_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            category,
            format,
            output_path,
            total_domains: 0,
            total_dorks: 0,
        }
    }

    /// 一行结果说明
    pub fn headline(&self) -> String {
        format!(
            "✅ Generated {} dorks for {} domain(s). Output saved to: {}",
            self.total_dorks,
            self.total_domains,
            self.output_path.display()
        )
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let duration = self.start_time.elapsed();
        let size = std::fs::metadata(&self.output_path)
            .map(|m| format_file_size(m.len()))
            .unwrap_or_else(|_| "-".to_string());

        writeln!(out, "\n{}", self.headline())?;
        writeln!(out, "----------------------------")?;
        writeln!(out, "分类: {}", self.category)?;
        writeln!(out, "输出格式: {}", self.format.as_str())?;
        writeln!(out, "文件大小: {}", size)?;
        writeln!(out, "总用时: {}", format_duration(duration))?;

        Ok(())
    }

    pub fn print(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
    }
}
