//! Radio-group evaluation.
//!
//! Mutually-exclusive radio sets validate as a unit: the group passes iff
//! any member is selected. On failure every member is marked errored, so
//! the group's error clears through whichever member the user focuses
//! next. Whether a group is required at all is the caller's decision (any
//! required member makes the whole group mandatory).

use formvalidate_core::ValidateOptions;

use crate::host::Host;
use crate::presenter::ErrorPresenter;

/// Evaluates the radio group with the given name.
pub(crate) fn evaluate_group<H: Host>(
    host: &H,
    options: &ValidateOptions,
    presenter: &mut ErrorPresenter<H>,
    name: &str,
) -> bool {
    let members = host.elements_named(name);
    let selected = members.iter().any(|member| host.is_checked(member));
    if !selected {
        for member in &members {
            presenter.set_error(host, options, member);
        }
    }
    selected
}
