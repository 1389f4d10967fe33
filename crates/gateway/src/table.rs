use std::collections::HashMap;

use configs::GatewayConfig;

/// Static dispatch table mapping a service selector (the first path
/// segment of an inbound request) to that backend's base address.
///
/// Built once at startup and injected into the router; tests inject
/// tables pointing at local mock backends. Exactly one address per
/// selector; dispatch is name lookup, not discovery.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let routes = entries
            .into_iter()
            .map(|(selector, base)| {
                // Normalize so URL composition never doubles slashes
                let base = base.into().trim_end_matches('/').to_string();
                (selector.into(), base)
            })
            .collect();
        Self { routes }
    }

    pub fn from_config(cfg: &GatewayConfig) -> Self {
        Self::new(cfg.upstreams.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// Base address for a selector, or None for services the table does
    /// not know.
    pub fn resolve(&self, selector: &str) -> Option<&str> {
        self.routes.get(selector).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Compose the downstream URL from a base address, the path remainder
    /// after the selector, and the original query string.
    pub fn downstream_url(base: &str, rest: &str, query: Option<&str>) -> String {
        let mut url = String::from(base);
        if !rest.is_empty() {
            url.push('/');
            url.push_str(rest);
        }
        if let Some(q) = query {
            url.push('?');
            url.push_str(q);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new([
            ("users", "http://127.0.0.1:8081/users"),
            ("products", "http://127.0.0.1:8082/products/"),
        ])
    }

    #[test]
    fn resolves_known_selectors() {
        let t = table();
        assert_eq!(t.resolve("users"), Some("http://127.0.0.1:8081/users"));
        assert_eq!(t.resolve("orders"), None);
        assert_eq!(t.resolve(""), None);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let t = table();
        assert_eq!(
            t.resolve("products"),
            Some("http://127.0.0.1:8082/products")
        );
    }

    #[test]
    fn composes_downstream_urls() {
        let base = "http://127.0.0.1:8082/products";
        assert_eq!(
            RouteTable::downstream_url(base, "42", None),
            "http://127.0.0.1:8082/products/42"
        );
        assert_eq!(
            RouteTable::downstream_url(base, "", None),
            "http://127.0.0.1:8082/products"
        );
        assert_eq!(
            RouteTable::downstream_url(base, "42", Some("expand=1")),
            "http://127.0.0.1:8082/products/42?expand=1"
        );
    }
}
