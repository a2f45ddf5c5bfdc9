//! HTML templates, compiled into the binary and rendered with minijinja.
//!
//! Auto-escaping is on for every template because all names end in `.html`.

use std::sync::LazyLock;

use minijinja::Environment;
use serde::Serialize;

const SOURCES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("error.html", include_str!("../templates/error.html")),
    ("users/index.html", include_str!("../templates/users/index.html")),
    ("users/new.html", include_str!("../templates/users/new.html")),
    ("users/detail.html", include_str!("../templates/users/detail.html")),
    ("users/edit.html", include_str!("../templates/users/edit.html")),
    ("posts/new.html", include_str!("../templates/posts/new.html")),
    ("posts/detail.html", include_str!("../templates/posts/detail.html")),
    ("posts/edit.html", include_str!("../templates/posts/edit.html")),
];

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    for &(name, source) in SOURCES {
        env.add_template(name, source)
            .unwrap_or_else(|e| panic!("built-in template {name} failed to parse: {e}"));
    }
    env
});

/// Render a named template with the given context.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    TEMPLATES.get_template(name)?.render(ctx)
}
