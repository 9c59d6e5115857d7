use crate::error::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_EMAIL_DOMAIN: &str = "company.com.br";

static DISALLOWED_LOCAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9.]").expect("valid local part regex"));
static DOT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.+").expect("valid dot run regex"));

/// Builds company addresses from standardized names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDeriver {
    domain: String,
}

impl Default for EmailDeriver {
    fn default() -> Self {
        Self {
            domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl EmailDeriver {
    pub fn new(domain: &str) -> Result<Self, CoreError> {
        let domain = normalize_email_domain(domain)?;
        Ok(Self { domain })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Derives `<local>@<domain>` from a standardized name.
    ///
    /// Never fails: a name that strips away to nothing yields an empty local
    /// part, e.g. `"@company.com.br"`.
    pub fn derive(&self, standardized_name: &str) -> String {
        self.address(&derive_local_part(standardized_name))
    }

    pub fn address(&self, local_part: &str) -> String {
        format!("{}@{}", local_part, self.domain)
    }
}

/// Local part for a standardized name.
///
/// Diacritics are removed through canonical decomposition, spaces become
/// dots, anything outside `[a-z0-9.]` is dropped, and dot runs collapse
/// into a single dot with none left at either end.
pub fn derive_local_part(standardized_name: &str) -> String {
    let stripped: String = standardized_name
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    let dotted = stripped.to_lowercase().replace(' ', ".");
    let cleaned = DISALLOWED_LOCAL_RE.replace_all(&dotted, "");
    let collapsed = DOT_RUN_RE.replace_all(&cleaned, ".");
    collapsed.trim_matches('.').to_string()
}

pub fn normalize_email_domain(raw: &str) -> Result<String, CoreError> {
    let domain = raw.trim().to_ascii_lowercase();
    let valid = !domain.is_empty()
        && domain.contains('.')
        && domain
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '.' || ch == '-')
        && !domain.starts_with(['.', '-'])
        && !domain.ends_with(['.', '-'])
        && !domain.contains("..");
    if !valid {
        return Err(CoreError::InvalidEmailDomain(raw.to_string()));
    }
    Ok(domain)
}
