//! The patient record consumed by the intake workflow.

use serde::{Deserialize, Serialize};

/// A patient as handed to the intake workflow.
///
/// No invariants are enforced here. Age validity is checked by the
/// validator at intake time, and `existing_condition` is carried along for
/// callers but never read by any decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub existing_condition: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: i32, existing_condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            existing_condition: existing_condition.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn existing_condition(&self) -> &str {
        &self.existing_condition
    }

    pub fn set_existing_condition(&mut self, condition: impl Into<String>) {
        self.existing_condition = condition.into();
    }
}
