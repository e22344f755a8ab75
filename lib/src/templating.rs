use minijinja::Environment;
use once_cell::sync::Lazy;

use crate::error::{Result, Chainable};
use crate::gallery::Group;

/// The template engine, wrapping a `minijinja` environment configured once
/// per process.
#[derive(Debug)]
pub struct Engine {
    env: Environment<'static>,
}

impl Engine {
    pub fn new() -> Engine {
        let mut env = Environment::new();
        env.add_filter("deslug", ext::deslug);
        Engine { env }
    }

    /// Renders `template_str` with the groups bound as `groups`.
    ///
    /// `name` labels the template in diagnostics. Parse and render failures
    /// are not recovered; they surface with the template name attached.
    pub fn render(&self, name: &str, template_str: &str, groups: &[Group]) -> Result<String> {
        let context = minijinja::context! { groups => groups };
        self.env.render_named_str(name, template_str, context)
            .chain_with(|| error! {
                "failed to render template",
                "template" => name,
            })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

/// The process-wide engine. Built on first use, torn down at process exit.
pub fn engine() -> &'static Engine {
    static ENGINE: Lazy<Engine> = Lazy::new(Engine::new);
    &ENGINE
}

mod ext {
    pub fn deslug(value: &str) -> String {
        value.replace('-', " ")
    }
}

impl_error_detail_with_std_error!(minijinja::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Nft, RawNft};
    use crate::gallery::group_by_distribution;

    fn groups() -> Vec<Group> {
        let mut nfts = Vec::new();
        for (token, distribution) in [("MyToken", "5"), ("RareToken", "1")] {
            let raw = RawNft {
                image: format!("ipfs://Qm{token}"),
                distribution: distribution.to_string(),
                extra: serde_json::Map::new(),
            };

            let mut nft = Nft::process("ABC123", token, raw).unwrap();
            nft.add_scarcity(6).unwrap();
            nfts.push(nft);
        }

        group_by_distribution(nfts).unwrap()
    }

    #[test]
    fn test_render_binds_groups() {
        let template = "\
            {% for group in groups %}\
            {% for nft in group %}{{ nft.token }}={{ nft.scarcity_percentage }};{% endfor %}\
            {% endfor %}";

        let html = engine().render("test", template, &groups()).unwrap();
        assert_eq!(html, "RareToken=16.67%;MyToken=83.33%;");
    }

    #[test]
    fn test_render_reaches_nested_fields() {
        let template = "{{ groups[0][0].url }} {{ groups[0][0].pool_pm }}";
        let html = engine().render("test", template, &groups()).unwrap();
        assert_eq!(html, "./nft/rare-token.png https://pool.pm/ABC123.RareToken");
    }

    #[test]
    fn test_deslug_filter() {
        let template = "{{ 'my-token' | deslug }}";
        let html = engine().render("test", template, &[]).unwrap();
        assert_eq!(html, "my token");
    }

    #[test]
    fn test_syntax_errors_propagate() {
        let error = engine()
            .render("broken", "{% for x in %}", &[])
            .unwrap_err()
            .to_string();

        assert!(error.contains("failed to render template"), "{error}");
        assert!(error.contains("broken"), "{error}");
    }

    #[test]
    fn test_runtime_errors_propagate() {
        // deslug wants a string; handing it a number fails at render time.
        let result = engine().render("test", "{{ 1 | deslug }}", &[]);
        assert!(result.is_err());
    }
}
