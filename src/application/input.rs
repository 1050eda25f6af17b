use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DorkError, Result};

/// 解析域名列表文本：每行一个域名，去除首尾空白并跳过空行
pub fn parse_domains(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 从文件读取域名列表
pub fn read_domains(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DorkError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DorkError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(parse_domains(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_domains() {
        let domains = parse_domains("  a.com \n\n\tb.org\r\n   \nc.net");
        assert_eq!(domains, vec!["a.com", "b.org", "c.net"]);
        assert!(parse_domains("\n \n").is_empty());
    }

    #[test]
    fn test_read_domains() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("domains.txt");
        fs::write(&path, "example.com\n\n  test.org  \n").unwrap();

        let domains = read_domains(&path).unwrap();
        assert_eq!(domains, vec!["example.com", "test.org"]);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.txt");

        match read_domains(&path) {
            Err(DorkError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_directory_is_read_error() {
        let temp_dir = tempdir().unwrap();
        assert!(matches!(
            read_domains(temp_dir.path()),
            Err(DorkError::Read { .. })
        ));
    }
}
