use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Record for User {
    const RESOURCE: &'static str = "users";
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    // Users carry no field constraints beyond the identifier; name and
    // email are stored as given.
    fn validate(&self) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::Validation("id is required".into()));
        }
        Ok(())
    }
}
