//! Settings visible to `Serialize`/`Deserialize` impls during a codec call
//!
//! Enum and date-time representation are decided deep inside serde impls,
//! which have no handle on the codec that is driving them. Codecs publish their
//! settings here for the duration of a single call. The slot is thread-local,
//! so concurrent calls on other threads never observe each other.

use crate::config::CodecSettings;
use std::cell::Cell;

thread_local! {
    static ACTIVE: Cell<Option<CodecSettings>> = const { Cell::new(None) };
}

/// Run `f` with `settings` active on the current thread
///
/// Scopes nest: the previously active settings are restored when `f` returns
/// or unwinds, so a layered codec calling an inner codec behaves correctly.
pub fn with_settings<R>(settings: &CodecSettings, f: impl FnOnce() -> R) -> R {
    let previous = ACTIVE.with(|slot| slot.replace(Some(*settings)));
    let _restore = Restore(previous);
    f()
}

/// Settings of the innermost active codec call, or the defaults outside any call
pub fn current() -> CodecSettings {
    ACTIVE.with(|slot| slot.get()).unwrap_or_default()
}

/// Check whether a codec call is in progress on this thread
pub fn is_active() -> bool {
    ACTIVE.with(|slot| slot.get().is_some())
}

struct Restore(Option<CodecSettings>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = self.0.take();
        ACTIVE.with(|slot| slot.set(previous));
    }
}
