//! Employee record shared by the bookstore and the dealership.

use crate::types::names_match;
use serde::{Deserialize, Serialize};

/// A salesperson.
///
/// Sales refer to employees by a copy of their name, not by a key, so removing
/// an employee leaves their past sales in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether this employee answers to `name`.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}
