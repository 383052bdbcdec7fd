use crate::callbacks::{add_callback_code, CallbackCode};
use crate::decorators::{Decorator, DISABLE_FORM};
use crate::error::RemoteResult;
use crate::javascript::{disable_current_form, enable_current_form};
use crate::options::OptionsBag;

/// Disables the form being submitted for the duration of the call.
///
/// The `before` fragment captures the form as `this`, and the `complete`
/// fragment re-enables that same reference, so forms without an id work.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormDisableDecorator;

impl FormDisableDecorator {
    pub fn callback_code() -> CallbackCode {
        CallbackCode {
            before: disable_current_form(),
            complete: enable_current_form(),
        }
    }
}

impl Decorator for FormDisableDecorator {
    fn name(&self) -> &'static str {
        "form_disable"
    }

    fn apply(&self, mut bag: OptionsBag) -> RemoteResult<OptionsBag> {
        if bag.take_bool(DISABLE_FORM, true)? {
            tracing::debug!("disabling current form during remote call");
            add_callback_code(&mut bag, &Self::callback_code())?;
        } else {
            tracing::debug!("form disabling turned off by caller");
        }
        Ok(bag)
    }
}
