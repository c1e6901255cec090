//! Template rendering

use css_inline::CSSInliner;
use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::notifications::NotificationError;

/// Renders an HTML email template and inlines its stylesheet.
///
/// Placeholders use `{{ Name }}` syntax and are HTML-escaped unless the
/// context value is marked safe. Referencing a parameter the context does not
/// provide is an error rather than an empty string. Only `<style>` blocks are
/// inlined; linked stylesheets are never fetched.
///
/// # Arguments
/// * `name` - The logical template name; its `.html` extension turns on HTML escaping.
/// * `source` - The template text.
/// * `context` - The substitution parameters.
pub fn render(name: &str, source: &str, context: Value) -> Result<String, NotificationError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(name, source)?;

    let html = env.get_template(name)?.render(context)?;

    let inliner = CSSInliner::options().load_remote_stylesheets(false).build();

    Ok(inliner.inline(&html)?)
}
