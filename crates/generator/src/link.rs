use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// 默认的 Postman 主机
pub const DEFAULT_POSTMAN_HOST: &str = "app.getpostman.com";

/// 与 `encodeURIComponent` 相同的保留集：字母数字与 `-_.!~*'()` 不编码
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn normalize_host(host: &str) -> &str {
    let host = host.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/')
}

/// 生成 fork collection 的深链接
///
/// `collection-url` 参数值只编码一次；ID 先去除首尾空白，
/// Postman UID 只含字母数字和 `-`，编码后保持原样。
pub fn deep_link(host: &str, collection_id: &str, workspace_id: &str) -> String {
    let collection_id = collection_id.trim();
    let workspace_id = workspace_id.trim();

    let collection_url = format!(
        "entityId={}&entityType=collection&workspaceId={}",
        collection_id, workspace_id
    );

    format!(
        "https://{}/run-collection/{}?action={}&source=rip_markdown&collection-url={}",
        normalize_host(host),
        utf8_percent_encode(collection_id, COMPONENT),
        utf8_percent_encode("collection/fork", COMPONENT),
        utf8_percent_encode(&collection_url, COMPONENT),
    )
}
