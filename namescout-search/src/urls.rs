//! URL helpers: host extraction and search-engine self-link detection.

use url::Url;

use crate::sites::{REPOSITORY_SITES, SOCIAL_SITES};
use crate::types::SearchEngine;

/// Second-level labels used under country-code TLDs (`co.uk`, `com.br`).
const COUNTRY_SECOND_LEVELS: &[&str] = &["co", "com", "net", "org", "ac", "ne", "or"];

/// Lowercase host of `raw` without a leading `www.`.
///
/// Returns `None` when `raw` is not an absolute URL with a host.
///
/// # Examples
///
/// ```
/// use namescout_search::urls::domain_of;
///
/// assert_eq!(domain_of("https://WWW.GitHub.com/ana").as_deref(), Some("github.com"));
/// assert_eq!(domain_of("not a url"), None);
/// ```
pub fn domain_of(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").map(str::to_owned).unwrap_or(host);
    Some(host)
}

/// `true` if `link` points at one of the given engines' own pages.
///
/// Any subdomain of an engine's registrable domains counts, under any TLD
/// (`news.google.com`, `www.google.co.uk`, `tieba.baidu.com`). Hosts of the
/// social and repository sites are never engine links, so `drive.google.com`
/// hits survive. Links without a parseable host are not engine links.
pub fn is_engine_link(link: &str, engines: &[SearchEngine]) -> bool {
    let Some(host) = domain_of(link) else {
        return false;
    };
    if is_searched_site(&host) {
        return false;
    }
    engines.iter().any(|engine| {
        under_brand(&host, engine.brand())
            || engine
                .extra_domains()
                .iter()
                .any(|domain| host_matches(&host, domain))
    })
}

fn is_searched_site(host: &str) -> bool {
    SOCIAL_SITES
        .iter()
        .chain(REPOSITORY_SITES)
        .any(|site| host_matches(host, site))
}

/// `true` if `host` is `brand.<tld>`, `brand.<sld>.<cctld>` or a subdomain
/// of either.
fn under_brand(host: &str, brand: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    labels.iter().enumerate().any(|(i, label)| {
        if *label != brand {
            return false;
        }
        match &labels[i + 1..] {
            [_tld] => true,
            [sld, tld] => tld.len() == 2 && COUNTRY_SECOND_LEVELS.contains(sld),
            _ => false,
        }
    })
}

/// `true` if `host` equals `domain` or is a subdomain of it.
pub fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
