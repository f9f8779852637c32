//! In-memory store doubles shared by the application and presentation tests.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::domain::ContactSubmission;
use crate::infrastructure::{ContactStore, StoreError};

#[derive(Clone, Copy)]
enum Behaviour {
    Accept,
    Reject,
    Unreachable,
}

pub struct FakeStore {
    behaviour: Behaviour,
    inserted: Mutex<Vec<ContactSubmission>>,
    gate: Option<Mutex<Receiver<()>>>,
}

impl FakeStore {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            inserted: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn accepting() -> Self {
        Self::with(Behaviour::Accept)
    }

    pub fn rejecting() -> Self {
        Self::with(Behaviour::Reject)
    }

    pub fn unreachable() -> Self {
        Self::with(Behaviour::Unreachable)
    }

    /// An accepting store whose inserts block until the returned sender fires.
    pub fn gated() -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let mut store = Self::accepting();
        store.gate = Some(Mutex::new(rx));
        (store, tx)
    }

    pub fn inserted(&self) -> Vec<ContactSubmission> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inserted.lock().unwrap().len()
    }
}

impl ContactStore for FakeStore {
    fn insert(&self, record: &ContactSubmission) -> Result<(), StoreError> {
        self.inserted.lock().unwrap().push(record.clone());
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv();
        }
        match self.behaviour {
            Behaviour::Accept => Ok(()),
            Behaviour::Reject => Err(StoreError::Rejected {
                status: 400,
                message: "new row violates check constraint".to_string(),
            }),
            Behaviour::Unreachable => Err(StoreError::Transport("connection refused".to_string())),
        }
    }

    fn describe(&self) -> String {
        "fake store".to_string()
    }
}

pub fn john_doe() -> ContactSubmission {
    ContactSubmission {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        company: None,
        subject: "Demo request".to_string(),
        message: "Please contact me".to_string(),
    }
}
