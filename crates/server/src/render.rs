use askama::Template;
use shared::view::ViewResult;
use thiserror::Error;

/// Identifies the controller and action a view result came from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewContext<'a> {
    pub(crate) controller: &'a str,
    pub(crate) action: &'a str,
}

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("view '{path}' was not found")]
    ViewNotFound { path: String },
    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "home/index.html")]
struct HomeIndexView<'a> {
    title: &'a str,
}

pub(crate) fn resolve_view_name<'a>(ctx: &ViewContext<'a>, view: &'a ViewResult) -> &'a str {
    view.view_name().unwrap_or(ctx.action)
}

/// Renders `view` with the template registered under `{controller}/{view name}`.
pub(crate) fn render_view(ctx: &ViewContext<'_>, view: &ViewResult) -> Result<String, RenderError> {
    let name = resolve_view_name(ctx, view);
    let title = view.view_data().get_str("Title").unwrap_or_default();

    match (ctx.controller, name) {
        ("Home", "Index") => Ok(HomeIndexView { title }.render()?),
        (controller, name) => Err(RenderError::ViewNotFound {
            path: format!("{controller}/{name}"),
        }),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
