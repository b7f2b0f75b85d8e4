//! Minimum capabilities a container must expose before its laws can run.

use std::any::type_name;

use lawful_types::{ContainerDescriptor, LawfulError, LawfulResult};

/// Check that `descriptor` really describes `C` and identifies it.
///
/// Laws downcast drawn values to `C`; a descriptor built for another type
/// would make every law fail for reasons unrelated to the law.
pub fn check_environment<C: 'static>(descriptor: &ContainerDescriptor) -> LawfulResult<()> {
    if !descriptor.describes::<C>() {
        return Err(LawfulError::Environment(format!(
            "descriptor `{}` describes `{}`, not `{}`",
            descriptor.id(),
            descriptor.type_name(),
            type_name::<C>()
        )));
    }
    if descriptor.id().as_str().trim().is_empty() {
        return Err(LawfulError::Environment(format!(
            "`{}` has an empty container id",
            type_name::<C>()
        )));
    }
    Ok(())
}
