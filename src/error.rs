use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Dork 生成过程中的错误类型
#[derive(Error, Debug)]
pub enum DorkError {
    /// 命令行参数缺失或冲突
    #[error("Missing or incorrect arguments: {0}")]
    Argument(String),

    /// 输入文件不存在
    #[error("File '{}' not found.", path.display())]
    FileNotFound { path: PathBuf },

    /// 输入文件读取失败
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 未知的分类名称
    #[error("Invalid category selected: '{category}'")]
    InvalidCategory { category: String },

    /// 输出文件写入失败
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DorkError {
    /// 进程退出码，所有错误均为 1
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, DorkError>;
