//! Target-page substitution into a base URI.
//!
//! The page number lives in a `page` (or short `p`) segment of the URI,
//! addressed either query-style (`?page=3`) or path-style (`/page/3`). The
//! substitution is an explicit scan for that segment, not a regex rewrite.

/// How the page number is embedded in the URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAddressing {
    /// `?page=N` / `?p=N`
    Query,
    /// `/page/N` / `/p/N`
    Path,
}

impl PageAddressing {
    fn separator(&self) -> char {
        match self {
            PageAddressing::Query => '=',
            PageAddressing::Path => '/',
        }
    }

    fn default_segment(&self) -> &'static str {
        match self {
            PageAddressing::Query => "?page=1",
            PageAddressing::Path => "page/1",
        }
    }
}

/// Builds the href for `page` by substituting it into `uri` and prepending
/// `base_url`.
///
/// A blank `uri` is normalized to `/`; a root `uri` gets a default page
/// segment appended before substitution. A uri with no recognizable page
/// segment is returned unchanged.
pub fn page_url(base_url: &str, uri: &str, addressing: PageAddressing, page: usize) -> String {
    let mut uri = uri.to_string();
    if uri.trim().is_empty() {
        uri.push('/');
    }
    if uri.trim() == "/" {
        uri.push_str(addressing.default_segment());
    }

    let uri = substitute_page_number(&uri, addressing.separator(), page);

    format!("{base_url}{uri}")
}

/// Replaces the digit run of the first `page{sep}` or `p{sep}` segment.
fn substitute_page_number(uri: &str, separator: char, page: usize) -> String {
    let bytes = uri.as_bytes();

    for position in 0..bytes.len() {
        if bytes[position] != b'p' {
            continue;
        }

        let rest = &uri[position..];
        let key_len = if rest.starts_with("page") { 4 } else { 1 };
        let after_key = &rest[key_len..];
        if !after_key.starts_with(separator) {
            continue;
        }

        let digits_at = position + key_len + separator.len_utf8();
        let digits_len = uri[digits_at..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            continue;
        }

        return format!(
            "{}{}{}",
            &uri[..digits_at],
            page,
            &uri[digits_at + digits_len..]
        );
    }

    uri.to_string()
}
