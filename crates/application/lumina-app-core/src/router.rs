use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use crate::observe::{Observable, Subscription};

/// Named parameters captured from a matched pattern. Rebuilt on every
/// resolution, never persisted.
pub type Params = HashMap<String, String>;

/// A navigation string split into its path and query components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    /// Split `raw` at the first `?`. The query component is kept aside and
    /// never takes part in route matching. An empty string normalizes to
    /// the root path.
    pub fn parse(raw: &str) -> Self {
        let raw = if raw.is_empty() { "/" } else { raw };
        match raw.split_once('?') {
            Some((path, query)) => Self {
                pathname: path.to_string(),
                search: query.to_string(),
            },
            None => Self {
                pathname: raw.to_string(),
                search: String::new(),
            },
        }
    }

    /// First value for `name` in the query component, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.search.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key == name {
                let value = value.replace('+', " ");
                Some(percent_decode_str(&value).decode_utf8_lossy().into_owned())
            } else {
                None
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternKind {
    Segments(Vec<Segment>),
    Wildcard,
}

/// A slash-delimited path template. `:name` segments capture one or more
/// non-slash characters; the literal `*` is the catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    kind: PatternKind,
}

impl RoutePattern {
    pub fn parse(template: &str) -> Self {
        let kind = if template == "*" {
            PatternKind::Wildcard
        } else {
            PatternKind::Segments(
                template
                    .split('/')
                    .map(|s| match s.strip_prefix(':') {
                        Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                        _ => Segment::Literal(s.to_string()),
                    })
                    .collect(),
            )
        };
        Self {
            raw: template.to_string(),
            kind,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, PatternKind::Wildcard)
    }

    pub fn template(&self) -> &str {
        &self.raw
    }

    /// Anchored full-string match against a pathname. Trailing slashes are
    /// significant and a parameter never crosses `/`. The wildcard is
    /// handled by the table, not here.
    fn matches(&self, pathname: &str) -> Option<Params> {
        let segments = match &self.kind {
            PatternKind::Wildcard => return None,
            PatternKind::Segments(s) => s,
        };

        let mut parts = pathname.split('/');
        let mut params = Params::new();
        for segment in segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

/// A resolved route: the selected view and its captured parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<V> {
    pub view: V,
    pub params: Params,
}

/// Ordered route declarations. First structural match wins; the catch-all
/// is only reachable once every other entry has been tried, wherever it
/// was declared.
#[derive(Debug, Clone, Default)]
pub struct RouteTable<V> {
    entries: Vec<(RoutePattern, V)>,
}

impl<V: Clone> RouteTable<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn route(mut self, template: &str, view: V) -> Self {
        self.entries.push((RoutePattern::parse(template), view));
        self
    }

    /// Resolve a navigation string to a view. The query component is
    /// stripped before matching. `None` means not-found: the caller
    /// renders nothing.
    pub fn resolve(&self, path: &str) -> Option<Resolved<V>> {
        let location = Location::parse(path);
        for (pattern, view) in &self.entries {
            if pattern.is_wildcard() {
                continue;
            }
            if let Some(params) = pattern.matches(&location.pathname) {
                return Some(Resolved {
                    view: view.clone(),
                    params,
                });
            }
        }
        self.entries
            .iter()
            .find(|(pattern, _)| pattern.is_wildcard())
            .map(|(_, view)| Resolved {
                view: view.clone(),
                params: Params::new(),
            })
    }
}

/// Process-wide navigation state: a single current path, overwritten on
/// every navigation. Push and replace are indistinguishable; subscribers
/// are notified synchronously with the new path.
#[derive(Clone)]
pub struct Navigator {
    path: Observable<String>,
}

impl Navigator {
    pub fn new(initial: &str) -> Self {
        Self {
            path: Observable::new(normalize(initial)),
        }
    }

    pub fn path(&self) -> String {
        self.path.get()
    }

    pub fn location(&self) -> Location {
        Location::parse(&self.path.get())
    }

    /// Overwrite the current path and republish it to every subscriber
    /// before returning.
    pub fn navigate(&self, target: &str) {
        self.path.set(normalize(target));
    }

    pub fn subscribe(&self, f: impl Fn(&String) + Send + Sync + 'static) -> Subscription<String> {
        self.path.subscribe(f)
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_do_not_cross_slashes() {
        let pattern = RoutePattern::parse("/product/:id");
        assert!(pattern.matches("/product/1/2").is_none());
        assert!(pattern.matches("/product/").is_none());
        assert_eq!(
            pattern.matches("/product/42").unwrap().get("id"),
            Some(&"42".to_string())
        );
    }

    #[test]
    fn trailing_slashes_are_distinct() {
        let plain = RoutePattern::parse("/shop");
        let slashed = RoutePattern::parse("/shop/");
        assert!(plain.matches("/shop/").is_none());
        assert!(slashed.matches("/shop").is_none());
        assert!(plain.matches("/shop").is_some());
        assert!(slashed.matches("/shop/").is_some());
    }

    #[test]
    fn multiple_params_capture_by_name() {
        let pattern = RoutePattern::parse("/orders/:order/items/:item");
        let params = pattern.matches("/orders/9/items/3").unwrap();
        assert_eq!(params.get("order"), Some(&"9".to_string()));
        assert_eq!(params.get("item"), Some(&"3".to_string()));
    }

    #[test]
    fn query_params_are_percent_decoded() {
        let location = Location::parse("/shop?category=Home%20Office&sort=price");
        assert_eq!(location.pathname, "/shop");
        assert_eq!(
            location.query_param("category"),
            Some("Home Office".to_string())
        );
        assert_eq!(location.query_param("sort"), Some("price".to_string()));
        assert_eq!(location.query_param("missing"), None);
    }
}
