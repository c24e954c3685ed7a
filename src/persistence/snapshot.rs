use super::storage::Storage;
use crate::domain::AppState;
use chrono::NaiveDate;

/// Storage key holding the whole popup state
pub const STATE_KEY: &str = "focuspad_state_v1";

/// Load the persisted state, falling back to the default state for `today`
/// when the slot is missing, unreadable or malformed.
pub fn load_state(storage: &dyn Storage, today: NaiveDate) -> AppState {
    let raw = match storage.get(STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = STATE_KEY, "no saved state, starting fresh");
            return AppState::default_for(today);
        }
        Err(err) => {
            tracing::warn!(key = STATE_KEY, error = %err, "could not read saved state, starting fresh");
            return AppState::default_for(today);
        }
    };

    match serde_json::from_str::<AppState>(&raw) {
        Ok(state) => {
            tracing::debug!(
                tasks = state.tasks.len(),
                days = state.activity.len(),
                "loaded saved state"
            );
            state
        }
        Err(err) => {
            tracing::warn!(key = STATE_KEY, error = %err, "saved state is malformed, starting fresh");
            AppState::default_for(today)
        }
    }
}

/// Persist the full state. Best effort: failures are logged and reported
/// as `false`, never propagated.
pub fn save_state(storage: &mut dyn Storage, state: &AppState) -> bool {
    let json = match serde_json::to_string(state) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "could not serialize state");
            return false;
        }
    };

    match storage.set(STATE_KEY, &json) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key = STATE_KEY, error = %err, "could not save state");
            false
        }
    }
}
