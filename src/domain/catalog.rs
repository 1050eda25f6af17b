use std::fmt;
use std::str::FromStr;

use crate::error::DorkError;

/// 文件类型扩展名
pub static FILETYPES: &[&str] = &[
    "p12", "bmp", "xml", "wml", "htm", "jar", "odp", "csv", "properties", "cs", "sql", "conf", "py",
    "mp4", "js", "key", "aac", "xps", "ppt", "pem", "pub", "bak", "cc", "msg", "flac", "cer", "cpp",
    "3gp", "xlsx", "csv.gz", "tar.bz2", "kmz", "jsp", "tif", "txt", "avi", "ods", "html", "asp",
    "sh", "tar", "markdown", "dotx", "bash", "h", "wav", "java", "cpl", "ott", "bat", "eml",
    "sql.zip", "class", "webp", "zsh", "chm", "ps", "c", "shtml", "tex", "pl", "m4a", "txt.gz",
    "xltx", "pdf", "doc", "epub", "epub.zip", "aspx", "rb", "log.gz", "cxx", "yaml", "gz", "hpp",
    "zip", "xml.gz", "md", "text", "dot", "json", "cfg", "wps", "mht", "rtf", "mp3", "cab", "dmg",
    "svg", "hwp", "yml", "tiff", "mov", "sql.gz", "wap", "xls", "vsdx", "wmv", "kml", "docx",
    "docm", "gpx", "pfx", "dox", "iso", "xlsm", "apk", "xlt", "odt", "tar.gz", "bas", "backup",
    "pptx", "php", "exe", "log",
];

/// 图片格式
pub static IMAGES: &[&str] = &["BMP", "GIF", "JPEG", "PNG", "WebP", "SVG", "AVIF"];

/// 视频格式
pub static VIDEOS: &[&str] = &[
    "3GP", "3G2", "ASF", "AVI", "DivX", "M2V", "M3U", "M3U8", "M4V", "MKV", "MOV", "MP4", "MPEG",
    "OGV", "QVT", "RAM", "RM", "VOB", "WebM", "WMV", "XAP",
];

/// 高级搜索操作符，已包含各自的前缀
pub static ADVANCED: &[&str] = &[
    "intitle:\"index of\"",
    "inurl:login",
    "ext:sql",
    "ext:xml",
    "ext:conf",
    "intitle:\"admin login\"",
    "inurl:wp-content",
    "inurl:config",
    "intext:\"password\"",
    "inurl:dashboard",
];

/// Dork 分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FileTypes,
    Images,
    Videos,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::FileTypes,
        Category::Images,
        Category::Videos,
        Category::Advanced,
    ];

    /// 命令行与配置中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            Category::FileTypes => "filetypes",
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Advanced => "advanced",
        }
    }

    /// 该分类对应的目录
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Category::FileTypes => FILETYPES,
            Category::Images => IMAGES,
            Category::Videos => VIDEOS,
            Category::Advanced => ADVANCED,
        }
    }

    /// 高级分类的条目自带操作符，不再拼接 `filetype:`
    pub fn is_operator(self) -> bool {
        matches!(self, Category::Advanced)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DorkError::InvalidCategory {
                category: s.to_string(),
            })
    }
}
