//! Public relay endpoints used when no scraping-API key is configured.

/// One relay candidate: a named URL template that wraps the target page URL.
///
/// The template's `{url}` placeholder is substituted with the target,
/// percent-encoded when `encode` is set (query-parameter relays) and verbatim
/// otherwise (path-suffix relays). Templates are plain data so tests can
/// inject endpoints pointing at a local mock server.
#[derive(Debug, Clone)]
pub struct RelayEndpoint {
    pub name: String,
    template: String,
    encode: bool,
}

impl RelayEndpoint {
    #[must_use]
    pub fn new(name: impl Into<String>, template: impl Into<String>, encode: bool) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            encode,
        }
    }

    /// Build the proxied URL for a target page.
    #[must_use]
    pub fn proxy_url(&self, target: &str) -> String {
        if self.encode {
            self.template
                .replace("{url}", urlencoding::encode(target).as_ref())
        } else {
            self.template.replace("{url}", target)
        }
    }
}

/// The fixed, ordered fallback list. Walked strictly in sequence; the first
/// 2xx response with a non-empty body wins.
#[must_use]
pub fn default_relays() -> Vec<RelayEndpoint> {
    vec![
        RelayEndpoint::new("allorigins", "https://api.allorigins.win/raw?url={url}", true),
        RelayEndpoint::new("cors-anywhere", "https://cors-anywhere.herokuapp.com/{url}", false),
        RelayEndpoint::new("htmldriven", "https://cors-proxy.htmldriven.com/?url={url}", true),
        RelayEndpoint::new("crossorigin", "https://crossorigin.me/{url}", false),
        RelayEndpoint::new("thingproxy", "https://thingproxy.freeboard.io/fetch/{url}", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_relay_escapes_target() {
        let relay = RelayEndpoint::new("t", "https://relay.test/raw?url={url}", true);
        assert_eq!(
            relay.proxy_url("https://a.com/x?y=1"),
            "https://relay.test/raw?url=https%3A%2F%2Fa.com%2Fx%3Fy%3D1"
        );
    }

    #[test]
    fn passthrough_relay_keeps_target_verbatim() {
        let relay = RelayEndpoint::new("t", "https://relay.test/fetch/{url}", false);
        assert_eq!(
            relay.proxy_url("https://a.com/x"),
            "https://relay.test/fetch/https://a.com/x"
        );
    }

    #[test]
    fn default_list_is_ordered() {
        let names: Vec<_> = default_relays().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["allorigins", "cors-anywhere", "htmldriven", "crossorigin", "thingproxy"]
        );
    }
}
