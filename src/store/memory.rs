use crate::error::Result;
use crate::schema::{Registration, RegistrationForm};
use crate::store::IntakeStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Process-lifetime registration store.
///
/// Ids start at 1 and increment by 1, never reused within a process. The
/// ordered map keyed by id makes traversal return records in insertion
/// order. Constructed explicitly and injected into the router, so tests get
/// a fresh store per instance.
pub struct RegistrationStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Registration>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// All stored registrations, in insertion order.
    pub fn list_all(&self) -> Vec<Registration> {
        let inner = self.inner.lock().expect("registration store poisoned");
        inner.rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.lock().expect("registration store poisoned");
        inner.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegistrationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntakeStore for RegistrationStore {
    type Form = RegistrationForm;
    type Record = Registration;

    async fn create(&self, form: RegistrationForm, created_at: DateTime<Utc>) -> Result<Registration> {
        let mut inner = self.inner.lock().expect("registration store poisoned");
        let id = inner.next_id;
        inner.next_id += 1;

        let registration = Registration {
            id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            organization: form.organization,
            job_title: form.job_title,
            created_at,
        };
        inner.rows.insert(id, registration.clone());

        Ok(registration)
    }
}
