use std::fmt;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("empty url")]
    EmptyInput,

    #[error("url is too long")]
    TooLong,

    #[error("url must contain scheme")]
    MissingScheme,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("empty host")]
    EmptyHost,

    #[error("invalid host: {0}")]
    InvalidHost(String),

    #[error("idna: {0}")]
    InvalidIdna(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    fn parse(raw: &str) -> Result<Self, NormalizeError> {
        if raw.eq_ignore_ascii_case("http") {
            Ok(Scheme::Http)
        } else if raw.eq_ignore_ascii_case("https") {
            Ok(Scheme::Https)
        } else {
            Err(NormalizeError::UnsupportedScheme(raw.to_string()))
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL reduced to the parts that take part in blocklist matching.
///
/// `host` is lowercase ASCII (punycode for IDN hosts) or the canonical text of
/// an IP literal without brackets. `path` always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl {
    pub scheme: Scheme,
    pub host: String,
    pub path: String,
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// Longest accepted raw URL, in bytes.
pub const MAX_URL_LEN: usize = 2048;

/// Converts a URL as a user would type it into its canonical form.
///
/// Query strings and fragments are dropped, they never take part in matching.
/// Input longer than [`MAX_URL_LEN`] bytes is rejected before any parsing.
pub fn normalize(raw: &str) -> Result<CanonicalUrl, NormalizeError> {
    if raw.len() > MAX_URL_LEN {
        return Err(NormalizeError::TooLong);
    }

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let scheme_end = match raw.find("://") {
        Some(i) if i > 0 => i,
        _ => return Err(NormalizeError::MissingScheme),
    };

    let scheme = Scheme::parse(&raw[..scheme_end])?;
    let rest = &raw[scheme_end + 3..];
    if rest.is_empty() {
        return Err(NormalizeError::EmptyHost);
    }

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let hostport = &rest[..authority_end];
    let path = if rest[authority_end..].starts_with('/') {
        let tail = &rest[authority_end..];
        &tail[..tail.find(['?', '#']).unwrap_or(tail.len())]
    } else {
        ""
    };

    let host = normalize_host(hostport)?;
    let path = clean_path_fast(path);

    Ok(CanonicalUrl { scheme, host, path })
}

/// Normalizes a bare host (no scheme, no path), optionally carrying userinfo
/// and a port.
pub fn normalize_host(hostport: &str) -> Result<String, NormalizeError> {
    let hostport = hostport.trim();
    if hostport.is_empty() {
        return Err(NormalizeError::EmptyHost);
    }

    let hostport = match hostport.rfind('@') {
        Some(at) => &hostport[at + 1..],
        None => hostport,
    };

    let mut host = hostport;
    if hostport.contains(':') {
        if let Some((h, _port)) = split_host_port(hostport) {
            host = h;
        }
    }

    let host = host.trim();
    if host.is_empty() {
        return Err(NormalizeError::EmptyHost);
    }

    let host = host.strip_suffix('.').unwrap_or(host);

    let host = if host.len() >= 2 && host.starts_with('[') && host.ends_with(']') {
        &host[1..host.len() - 1]
    } else {
        host
    };

    if host.is_empty() {
        return Err(NormalizeError::EmptyHost);
    }

    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(canonical_ip(ip));
    }

    let ascii = if host.is_ascii() {
        host.to_ascii_lowercase()
    } else {
        idna::domain_to_ascii(host)
            .map_err(|e| NormalizeError::InvalidIdna(e.to_string()))?
            .to_ascii_lowercase()
    };

    validate_domain(&ascii)?;
    Ok(ascii)
}

/// Canonical text of an IP literal. IPv4-mapped IPv6 addresses collapse to
/// their dotted IPv4 form.
pub fn canonical_ip(ip: IpAddr) -> String {
    match ip {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => v4.to_string(),
            None => v6.to_string(),
        },
        IpAddr::V4(v4) => v4.to_string(),
    }
}

/// Splits `host:port` or `[host]:port`. Returns `None` for ambiguous input
/// (bare IPv6, brackets without a port, stray brackets).
fn split_host_port(hostport: &str) -> Option<(&str, &str)> {
    if let Some(inner) = hostport.strip_prefix('[') {
        let end = inner.find(']')?;
        let host = &inner[..end];
        let port = inner[end + 1..].strip_prefix(':')?;
        if port.contains([':', '[', ']']) {
            return None;
        }
        return Some((host, port));
    }

    let colon = hostport.rfind(':')?;
    let host = &hostport[..colon];
    let port = &hostport[colon + 1..];
    if host.contains([':', '[', ']']) || port.contains(['[', ']']) {
        return None;
    }
    Some((host, port))
}

// Rejects whitespace, control bytes, forbidden host code points and empty labels.
fn validate_domain(host: &str) -> Result<(), NormalizeError> {
    let forbidden = host.bytes().any(|b| {
        b <= 0x20
            || b == 0x7f
            || matches!(
                b,
                b'#' | b'%' | b'/' | b':' | b'<' | b'>' | b'?' | b'@' | b'[' | b'\\' | b']'
                    | b'^' | b'|' | b'"' | b'{' | b'}' | b'`'
            )
    });
    if forbidden || host.split('.').any(str::is_empty) {
        return Err(NormalizeError::InvalidHost(host.to_string()));
    }
    Ok(())
}

fn clean_path_fast(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    if !path.contains('.') && !path.contains("//") {
        if path.starts_with('/') {
            return path.to_string();
        }
        return format!("/{path}");
    }

    clean_path(path)
}

/// Lexical path cleaning: collapses repeated separators, drops `.` segments,
/// resolves `..` without climbing above the root and drops a trailing `/`.
fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut out = String::with_capacity(path.len());
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
