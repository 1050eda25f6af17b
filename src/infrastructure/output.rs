use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::application::config::DEFAULT_ENGINE_URL;
use crate::error::{DorkError, Result};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 纯文本，每行一条查询
    Text,
    /// 带可点击搜索链接的 HTML
    Html,
}

impl OutputFormat {
    pub fn from_html_flag(html: bool) -> Self {
        if html {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        }
    }
}

/// 当前本地时间，格式 `YYYY-MM-DD HH:MM:SS`
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn heading(timestamp: &str) -> String {
    format!("Dork list generated on {}", timestamp)
}

/// 写出纯文本格式
pub fn render_text<W: Write, S: AsRef<str>>(out: &mut W, dorks: &[S], timestamp: &str) -> std::io::Result<()> {
    writeln!(out, "# {}", heading(timestamp))?;
    writeln!(out)?;
    for dork in dorks {
        writeln!(out, "{}", dork.as_ref())?;
    }
    Ok(())
}

/// 写出 HTML 格式，查询字符串不做转义
pub fn render_html<W: Write, S: AsRef<str>>(
    out: &mut W,
    dorks: &[S],
    timestamp: &str,
    engine_url: &str,
) -> std::io::Result<()> {
    write!(out, "<html><body><h2>{}</h2><ul>", heading(timestamp))?;
    for dork in dorks {
        let dork = dork.as_ref();
        writeln!(
            out,
            "<li><a href=\"{}{}\" target=\"_blank\">{}</a></li>",
            engine_url, dork, dork
        )?;
    }
    write!(out, "</ul></body></html>")?;
    Ok(())
}

/// 将查询列表写入文件，已有内容会被覆盖
///
/// 文件句柄只在本函数内持有，任何写入错误都会在返回前释放句柄。
pub fn write_output<S: AsRef<str>>(
    dorks: &[S],
    output_path: &Path,
    format: OutputFormat,
    timestamp: &str,
    engine_url: &str,
) -> Result<()> {
    let to_write_error = |source| DorkError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);

    let rendered = match format {
        OutputFormat::Text => render_text(&mut writer, dorks, timestamp),
        OutputFormat::Html => render_html(&mut writer, dorks, timestamp, engine_url),
    };
    rendered.map_err(to_write_error)?;

    writer.flush().map_err(to_write_error)?;
    Ok(())
}

/// 使用当前时间和默认搜索引擎保存输出
pub fn save_output<S: AsRef<str>>(dorks: &[S], output_path: &Path, format: OutputFormat) -> Result<()> {
    write_output(dorks, output_path, format, &current_timestamp(), DEFAULT_ENGINE_URL)
}
