//! Access to `localStorage`.
//!
//! Storage is best effort. It may be unavailable (private browsing, disabled cookies), in which
//! case reads return nothing and writes are dropped.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|m| m.local_storage().ok().flatten())
}

pub(crate) fn read(key: &str) -> Option<String> {
    local_storage().and_then(|m| m.get_item(key).ok().flatten())
}

pub(crate) fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };

    if let Err(e) = storage.set_item(key, value) {
        tracing::warn!("failed to write {} to storage: {:?}", key, e);
    }
}

pub(crate) fn remove(key: &str) {
    let Some(storage) = local_storage() else {
        return;
    };

    if let Err(e) = storage.remove_item(key) {
        tracing::warn!("failed to remove {} from storage: {:?}", key, e);
    }
}
