//! One-shot notice that survives a navigation. Transient messages render as
//! alert banners here rather than toasts, and a banner lives inside the page
//! that renders it; a flow that sets a message and immediately routes away
//! parks it in this slot so the destination page can show it.

use leptos::prelude::*;

/// Context-held slot for a single pending message. Copyable like the other
/// context handles; the slot outlives route changes because it belongs to the
/// provider, not to any page.
#[derive(Clone, Copy)]
pub(crate) struct FlashNotice {
    slot: RwSignal<Option<String>>,
}

impl FlashNotice {
    pub(crate) fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
        }
    }

    /// Parks a message for the next page that takes it.
    pub(crate) fn set(self, message: impl Into<String>) {
        self.slot.set(Some(message.into()));
    }

    /// Takes the pending message, leaving the slot empty so the notice shows
    /// only once.
    pub(crate) fn take(self) -> Option<String> {
        let message = self.slot.get_untracked();
        if message.is_some() {
            self.slot.set(None);
        }
        message
    }
}

/// Returns the shared notice slot or a detached fallback.
pub(crate) fn use_flash_notice() -> FlashNotice {
    use_context::<FlashNotice>().unwrap_or_else(FlashNotice::new)
}

#[cfg(test)]
mod tests {
    use super::FlashNotice;

    #[test]
    fn parked_message_survives_until_taken_and_shows_only_once() {
        let notice = FlashNotice::new();
        assert_eq!(notice.take(), None);

        notice.set("Something went wrong. Please login your new account");
        assert_eq!(
            notice.take(),
            Some("Something went wrong. Please login your new account".to_string())
        );
        assert_eq!(notice.take(), None);
    }

    #[test]
    fn a_newer_message_replaces_the_pending_one() {
        let notice = FlashNotice::new();
        notice.set("first");
        notice.set("second");
        assert_eq!(notice.take(), Some("second".to_string()));
    }
}
