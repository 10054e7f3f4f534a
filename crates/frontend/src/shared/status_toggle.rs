//! Active/inactive switch shared by the entity list pages.

use contracts::domain::common::RecordId;

use crate::shared::data::store;
use crate::shared::notify::NotifyService;
use crate::system::auth::storage as auth_storage;

/// Flips the `isActive` flag of one row.
///
/// The session is checked fresh before the call; without one the store is
/// never contacted, `on_unauthenticated` runs (the caller drops back to
/// the sign-in screen) and the result is `false`. On success `apply`
/// patches the one affected row in place, so the list needs no refetch.
/// `label` names the entity in the outcome toast ("Branch", "Student").
pub async fn toggle_status(
    notify: NotifyService,
    table: &str,
    label: &str,
    id: RecordId,
    current: bool,
    apply: impl FnOnce(bool),
    on_unauthenticated: impl FnOnce(),
) -> bool {
    if auth_storage::get_session().is_none() {
        notify.error("You must be logged in to perform this action");
        on_unauthenticated();
        return false;
    }

    let next = !current;
    let patch = serde_json::json!({ "isActive": next });
    match store::update(table, id, &patch).await {
        Ok(()) => {
            apply(next);
            notify.success(format!(
                "{} {} successfully",
                label,
                if next { "activated" } else { "deactivated" }
            ));
            true
        }
        Err(e) => {
            log::error!("Status toggle on {} {} failed: {}", table, id, e);
            notify.error(e.to_string());
            false
        }
    }
}
