use shared::view::{ActionResult, ViewResult};

pub(crate) const APP_TITLE: &str = "Fake App";

/// Serves the landing page. Holds no state, so a fresh instance per request is free.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct HomeController;

impl HomeController {
    pub(crate) const NAME: &'static str = "Home";
    pub(crate) const INDEX: &'static str = "Index";

    pub(crate) fn index(&self) -> ActionResult {
        ViewResult::new().with_data("Title", APP_TITLE).into()
    }
}

#[cfg(test)]
#[path = "tests/home_tests.rs"]
mod tests;
