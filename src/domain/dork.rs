use crate::domain::catalog::Category;
use crate::error::Result;

/// 生成单条 dork 查询
pub fn build_query(domain: &str, category: Category, token: &str) -> String {
    if category.is_operator() {
        format!("site:{} {}", domain, token)
    } else {
        format!("site:{} filetype:{}", domain, token)
    }
}

/// 按域名优先的顺序生成 dork 列表
///
/// 外层遍历域名（保持输入顺序），内层遍历分类目录（保持目录顺序），
/// 结果长度为 `domains.len() * category.tokens().len()`。
pub fn generate_dorks<S: AsRef<str>>(domains: &[S], category: Category) -> Vec<String> {
    let tokens = category.tokens();
    let mut dorks = Vec::with_capacity(domains.len() * tokens.len());

    for domain in domains {
        for token in tokens {
            dorks.push(build_query(domain.as_ref(), category, token));
        }
    }

    dorks
}

/// 按分类名称生成 dork 列表，名称无效时在遍历前返回错误
pub fn generate_dorks_by_name<S: AsRef<str>>(domains: &[S], category: &str) -> Result<Vec<String>> {
    let category = category.parse::<Category>()?;
    Ok(generate_dorks(domains, category))
}
