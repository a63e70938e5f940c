//! Link handling for writes that come from users
//!
//! The store itself accepts any space-free string. Entry points that take
//! links from people (the admin CLI, a serving layer) go through here first:
//! - `go/<name>` and bare `<name>` pointing at an existing entry become a
//!   link back through the redirect host
//! - everything else must be an absolute URL, stored in normalized form
//! - deletes only apply to names that currently resolve

use url::Url;

use crate::error::{LinkError, Result};
use crate::store::Store;

/// Prefix users type for links to other short names
const ALIAS_PREFIX: &str = "go/";

/// Validate `link` as an absolute URL and return its normalized form.
///
/// Normalization lower-cases the scheme and host, drops default ports,
/// and percent-encodes what the log format cannot hold.
pub fn normalize_link(link: &str) -> Result<String> {
    let url = Url::parse(link).map_err(|e| {
        LinkError::InvalidEntry(format!("link {:?} is not an absolute URL: {}", link, e))
    })?;
    Ok(url.into())
}

/// Rewrite a link to another short name into a full URL on `host`.
///
/// Links starting with `http` are left alone, as are names that do not
/// resolve in `store`.
pub fn canonicalize_alias(store: &dyn Store, host: &str, link: &str) -> String {
    if link.starts_with("http") {
        return link.to_string();
    }

    let name = link.strip_prefix(ALIAS_PREFIX).unwrap_or(link);
    if !name.is_empty() && store.get(name).is_some() {
        return format!("https://{}/{}", host, name);
    }
    link.to_string()
}

/// Resolve aliases, then validate and normalize
pub fn prepare_link(store: &dyn Store, host: &str, link: &str) -> Result<String> {
    normalize_link(&canonicalize_alias(store, host, link))
}

/// Delete `name` if it currently resolves.
///
/// Returns `false` without writing anything when there is nothing to delete.
pub fn delete_existing(store: &dyn Store, name: &str) -> Result<bool> {
    if store.get(name).is_none() {
        return Ok(false);
    }
    store.delete(name)?;
    Ok(true)
}
