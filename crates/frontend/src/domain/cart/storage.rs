use contracts::domain::cart::CartItem;

const CART_STORAGE_KEY: &str = "grocery_cart_v1";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the saved line-item collection from localStorage.
///
/// Any failure (storage unavailable, key missing, malformed JSON) is treated
/// as "no saved cart" and only logged. `addedAt` strings are revived into
/// `DateTime<Utc>` by serde.
pub fn load_items() -> Option<Vec<CartItem>> {
    let raw = storage()?.get_item(CART_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(items) => Some(items),
        Err(err) => {
            log::warn!("discarding unreadable saved cart: {err}");
            None
        }
    }
}

/// Best-effort write of the full line-item collection.
///
/// Failures are logged and ignored; the in-memory state stays authoritative
/// for the session and the next mutation's write is the de-facto retry.
pub fn save_items(items: &[CartItem]) {
    let Some(storage) = storage() else { return };
    let raw = match serde_json::to_string(items) {
        Ok(raw) => raw,
        Err(err) => {
            log::error!("failed to serialize cart: {err}");
            return;
        }
    };
    if storage.set_item(CART_STORAGE_KEY, &raw).is_err() {
        log::warn!("failed to persist cart, keeping in-memory state");
    }
}
