use crate::Diagnostics;
use regex::Regex;
use serde::Serialize;

/// A DNS-1123 label, as used for namespace names.
const DNS_LABEL_REGEX: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";
/// A DNS-1123 subdomain, as used for most object names.
const DNS_SUBDOMAIN_REGEX: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";

const DNS_LABEL_MAX_LEN: usize = 63;
const DNS_SUBDOMAIN_MAX_LEN: usize = 253;

lazy_static::lazy_static! {
    static ref DNS_LABEL: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(DNS_LABEL_REGEX).unwrap()
    };
    static ref DNS_SUBDOMAIN: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(DNS_SUBDOMAIN_REGEX).unwrap()
    };
}

/// A check applied to a configured string attribute before a read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "validator", content = "value", rename_all = "snake_case")]
pub enum StringValidator {
    LengthAtLeast(usize),
    /// The value must be a valid Kubernetes object name (DNS-1123 subdomain).
    Name,
    /// The value must be a valid Kubernetes namespace name (DNS-1123 label).
    Namespace,
}

impl StringValidator {
    pub fn description(&self) -> String {
        match self {
            StringValidator::LengthAtLeast(n) => format!("string length must be at least {}", n),
            StringValidator::Name => format!(
                "value must be a lowercase RFC 1123 subdomain of at most {} characters",
                DNS_SUBDOMAIN_MAX_LEN
            ),
            StringValidator::Namespace => format!(
                "value must be a lowercase RFC 1123 label of at most {} characters",
                DNS_LABEL_MAX_LEN
            ),
        }
    }

    /// Check `value`, adding an error for the attribute at `path` to `diagnostics` if it fails.
    pub fn validate(&self, path: &str, value: &str, diagnostics: &mut Diagnostics) {
        let len = value.chars().count();
        let (ok, summary) = match self {
            StringValidator::LengthAtLeast(n) => (len >= *n, "Invalid Attribute Value Length"),
            StringValidator::Name => (
                len <= DNS_SUBDOMAIN_MAX_LEN && DNS_SUBDOMAIN.is_match(value),
                "Invalid Attribute Value Match",
            ),
            StringValidator::Namespace => (
                len <= DNS_LABEL_MAX_LEN && DNS_LABEL.is_match(value),
                "Invalid Attribute Value Match",
            ),
        };
        if !ok {
            diagnostics.add_attribute_error(
                path,
                summary,
                format!(
                    "Attribute {} {}, got: \"{}\"",
                    path,
                    self.description(),
                    value
                ),
            );
        }
    }
}
