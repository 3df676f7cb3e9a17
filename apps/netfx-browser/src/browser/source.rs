//! Markup sources. Only local files and the built-in welcome page are
//! served; network schemes are reported as unavailable.

use super::*;

/// Turns address-bar input into a URL. Anything without a scheme is a path,
/// resolved against `cwd` when relative.
pub(super) fn normalize_location(input: &str, cwd: &Path) -> BrowserResult<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Url::parse(WELCOME_URL)
            .map_err(|error| BrowserError::source_unavailable(WELCOME_URL, error));
    }

    if trimmed.contains("://") || trimmed.starts_with("about:") {
        return Url::parse(trimmed)
            .map_err(|error| BrowserError::new("source.invalid_url", error.to_string()));
    }

    let path = Path::new(trimmed);
    let absolute: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    Url::from_file_path(&absolute).map_err(|()| {
        BrowserError::new(
            "source.invalid_path",
            format!("`{}` is not a usable file path", absolute.display()),
        )
    })
}

/// Resolves a link target against the page it was clicked on.
pub(super) fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    base.join(href.trim()).ok()
}

pub(super) fn load_markup(url: &Url) -> BrowserResult<String> {
    match url.scheme() {
        "about" if url.path() == "netfx" => Ok(WELCOME_PAGE.to_owned()),
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| BrowserError::source_unavailable(url.as_str(), "not a local path"))?;
            let bytes = std::fs::read(&path)
                .map_err(|error| BrowserError::source_unavailable(url.as_str(), error))?;
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "read local document");
            Ok(decode_html(&bytes))
        }
        "http" | "https" => Err(BrowserError::source_unavailable(
            url.as_str(),
            "network transport is not available",
        )),
        scheme => Err(BrowserError::source_unavailable(
            url.as_str(),
            format!("unsupported scheme `{scheme}`"),
        )),
    }
}

/// Decodes markup bytes: byte order mark first, then a `charset=` in the
/// document prefix, then lossy UTF-8.
pub(super) fn decode_html(body: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(body) {
        let (decoded, _) = encoding.decode_without_bom_handling(&body[bom_len..]);
        return decoded.into_owned();
    }

    if let Some(label) = parse_charset_from_html_prefix(body) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            let (decoded, _, had_errors) = encoding.decode(body);
            if had_errors {
                tracing::warn!(charset = %label, "document contained malformed sequences");
            }
            return decoded.into_owned();
        }
        tracing::debug!(charset = %label, "unknown charset label, falling back to utf-8");
    }

    String::from_utf8_lossy(body).into_owned()
}

pub(super) fn parse_charset_from_html_prefix(body: &[u8]) -> Option<String> {
    let prefix_len = body.len().min(MAX_CHARSET_PREFIX_BYTES);
    let prefix = String::from_utf8_lossy(&body[..prefix_len]);
    let lower = prefix.to_ascii_lowercase();
    let mut search_start = 0_usize;

    while let Some(relative) = lower[search_start..].find("charset=") {
        let charset_start = search_start + relative + "charset=".len();
        if let Some(label) = parse_charset_label(&prefix[charset_start..]) {
            return Some(label);
        }
        search_start = charset_start;
    }

    None
}

fn parse_charset_label(input: &str) -> Option<String> {
    let trimmed = input.trim_start();
    let first = trimmed.chars().next()?;

    let label = if first == '"' || first == '\'' {
        let rest = &trimmed[first.len_utf8()..];
        let end = rest.find(first)?;
        rest[..end].trim()
    } else {
        let end = trimmed
            .find(|ch: char| ch.is_whitespace() || matches!(ch, '"' | '\'' | ';' | '>' | '/'))
            .unwrap_or(trimmed.len());
        trimmed[..end].trim()
    };

    (!label.is_empty()).then(|| label.to_owned())
}
