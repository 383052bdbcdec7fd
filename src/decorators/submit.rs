use crate::callbacks::{add_callback_code, CallbackCode};
use crate::decorators::{Decorator, DISABLE_FORM};
use crate::error::RemoteResult;
use crate::javascript::{disable_named_form, enable_named_form};
use crate::options::OptionsBag;

pub const SUBMIT: &str = "submit";

/// Disables the form named by the `submit` option for the duration of the call.
/// Does nothing when no `submit` target is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitDisableDecorator;

impl SubmitDisableDecorator {
    pub fn callback_code(target: &str) -> CallbackCode {
        CallbackCode {
            before: disable_named_form(target),
            complete: enable_named_form(target),
        }
    }
}

impl Decorator for SubmitDisableDecorator {
    fn name(&self) -> &'static str {
        "submit_disable"
    }

    fn apply(&self, mut bag: OptionsBag) -> RemoteResult<OptionsBag> {
        let disable = bag.take_bool(DISABLE_FORM, true)?;
        let target = bag.get_str(SUBMIT)?.map(str::to_string);
        match target {
            Some(target) if disable => {
                tracing::debug!(submit = %target, "disabling submit target during remote call");
                add_callback_code(&mut bag, &Self::callback_code(&target))?;
            }
            _ => tracing::debug!(disable, "no submit target disabled"),
        }
        Ok(bag)
    }
}
