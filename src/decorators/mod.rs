//! Decorators that inject lifecycle code into an [`OptionsBag`].
//!
//! Each decorator consumes its own control option and prepends its fragments
//! to `before`/`complete`. A [`Pipeline`] applies them in order, so the last
//! decorator's `before` code runs first in the browser.

pub mod form;
pub mod indicator;
pub mod submit;

pub use form::FormDisableDecorator;
pub use indicator::{IndicatorDecorator, IndicatorSetting};
pub use submit::SubmitDisableDecorator;

use crate::error::RemoteResult;
use crate::options::OptionsBag;

/// Control option shared by the form and submit decorators
pub const DISABLE_FORM: &str = "disable_form";

/// A single-shot transform over an options bag
pub trait Decorator: Send + Sync {
    /// Short name used in log events
    fn name(&self) -> &'static str;

    fn apply(&self, bag: OptionsBag) -> RemoteResult<OptionsBag>;
}

/// An ordered list of decorators applied front to back
#[derive(Default)]
pub struct Pipeline {
    decorators: Vec<Box<dyn Decorator>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, decorator: impl Decorator + 'static) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Names of the decorators in application order
    pub fn names(&self) -> Vec<&'static str> {
        self.decorators.iter().map(|d| d.name()).collect()
    }

    pub fn run(&self, bag: OptionsBag) -> RemoteResult<OptionsBag> {
        self.decorators
            .iter()
            .try_fold(bag, |bag, decorator| decorator.apply(bag))
    }
}
