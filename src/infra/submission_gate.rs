use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use uuid::Uuid;

/// Tracks which form instances have a submission in flight.
///
/// A form instance is identified by the id rendered into its hidden field. At
/// most one permit per id exists at a time.
#[derive(Default)]
pub struct SubmissionGate {
    in_flight: Mutex<HashSet<Uuid>>,
}

/// Held for the duration of one submission; releases the form id on drop.
pub struct SubmissionPermit {
    gate: Arc<SubmissionGate>,
    form_id: Uuid,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` while another submission for `form_id` is outstanding.
    pub fn try_acquire(self: &Arc<Self>, form_id: Uuid) -> Option<SubmissionPermit> {
        let mut in_flight = self.lock();
        if !in_flight.insert(form_id) {
            return None;
        }
        Some(SubmissionPermit {
            gate: Arc::clone(self),
            form_id,
        })
    }

    #[cfg(test)]
    pub fn is_in_flight(&self, form_id: Uuid) -> bool {
        self.lock().contains(&form_id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<Uuid>> {
        // A panic while holding the lock leaves the set itself consistent.
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.gate.lock().remove(&self.form_id);
    }
}
