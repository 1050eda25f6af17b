use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;

/// 日志记录器trait
pub trait LoggerTrait {
    fn is_enabled(&self) -> bool;
    fn log_message(&self, message: &str) -> Result<()>;
    fn finalize(&self, domains: usize, dorks: usize, output: &Path, duration: Duration) -> Result<()>;
}

/// 运行日志记录器，未启用时所有操作均为空操作
pub struct Logger {
    log_file: Mutex<Option<File>>,
    log_path: PathBuf,
    enabled: bool,
}

impl Logger {
    /// 创建新的日志记录器，日志写入当前目录下的 `autodork_<时间戳>.log`
    pub fn new(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::disabled());
        }

        let now = Local::now();
        let log_path = PathBuf::from(format!("autodork_{}.log", now.format("%Y%m%d_%H%M%S")));
        Self::create_at(log_path)
    }

    /// 在指定路径创建日志文件
    pub fn create_at(log_path: PathBuf) -> Result<Self> {
        let now = Local::now();

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(true)
            .open(&log_path)?;

        // 写入UTF-8 BOM以确保文件被正确识别为UTF-8
        file.write_all(&[0xEF, 0xBB, 0xBF])?;

        writeln!(file, "# AutoDork 运行日志")?;
        writeln!(file, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file, "# --------------------------------------------")?;

        println!("日志文件已创建: {}", log_path.display());

        Ok(Self {
            log_file: Mutex::new(Some(file)),
            log_path,
            enabled: true,
        })
    }

    fn disabled() -> Self {
        Self {
            log_file: Mutex::new(None),
            log_path: PathBuf::new(),
            enabled: false,
        }
    }

    /// 获取日志文件路径
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

impl LoggerTrait for Logger {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn log_message(&self, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "[{}] {}", timestamp, message)?;
                file.flush()?;
            }
        }

        Ok(())
    }

    fn finalize(&self, domains: usize, dorks: usize, output: &Path, duration: Duration) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = Local::now();

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "# --------------------------------------------")?;
                writeln!(file, "# 完成时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
                writeln!(file, "# 总用时: {:.3}秒", duration.as_secs_f64())?;
                writeln!(file, "# 域名数: {}", domains)?;
                writeln!(file, "# 生成 dork 数: {}", dorks)?;
                writeln!(file, "# 输出文件: {}", output.display())?;
                writeln!(file, "# ============================================")?;
                file.flush()?;
            }
        }

        println!("完整日志已保存到: {}", self.log_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_disabled_logger_is_noop() {
        let logger = Logger::new(false).unwrap();
        assert!(!logger.is_enabled());
        assert!(logger.log_message("ignored").is_ok());
        assert!(logger
            .finalize(1, 7, Path::new("dorks.txt"), Duration::from_millis(5))
            .is_ok());
        assert_eq!(logger.log_path(), Path::new(""));
    }

    #[test]
    fn test_logger_writes_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("run.log");

        let logger = Logger::create_at(path.clone()).unwrap();
        let logger_trait: &dyn LoggerTrait = &logger;
        assert!(logger_trait.is_enabled());

        logger_trait.log_message("分类: images").unwrap();
        logger_trait
            .finalize(2, 14, Path::new("out.txt"), Duration::from_millis(1500))
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

        let content = String::from_utf8_lossy(&bytes[3..]).to_string();
        assert!(content.starts_with("# AutoDork 运行日志"));
        assert!(content.contains("] 分类: images"));
        assert!(content.contains("# 生成 dork 数: 14"));
        assert!(content.contains("# 输出文件: out.txt"));
        assert!(content.contains("# 总用时: 1.500秒"));
    }
}
