use rpr_model::{DecisionCountry, DecisionRoute, EditAction};
use tracing::debug;

/// Apply one structural edit action, returning the next matrix to render.
///
/// The input is left untouched; callers re-render from the returned value.
/// Terminal actions (`save`/`submit`/`publish`) pass through unchanged —
/// they are routed to validation and persistence before this function is
/// reached, so treating them as no-ops keeps the call site total.
///
/// # Panics
///
/// Indices must resolve against the currently rendered structure; this
/// function does no bounds-checking of its own, so an out-of-range index
/// panics. That is a caller contract violation, not a recoverable state —
/// the edit view round-trips the exact structure it rendered.
pub fn apply_action(routes: &[DecisionRoute], action: &EditAction) -> Vec<DecisionRoute> {
    let mut next = routes.to_vec();
    match *action {
        EditAction::AddRoute => {
            debug!("adding empty route");
            next.push(DecisionRoute::empty());
        }
        EditAction::RemoveRoute { route } => {
            debug!(route, "removing route");
            next.remove(route);
        }
        EditAction::AddCountry { route } => {
            debug!(route, "adding empty country row");
            next[route].countries.push(DecisionCountry::empty());
        }
        EditAction::RemoveCountry { route, country } => {
            debug!(route, country, "removing country row");
            next[route].countries.remove(country);
        }
        EditAction::Save | EditAction::Submit | EditAction::Publish => {}
    }
    next
}
