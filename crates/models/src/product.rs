use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Record for Product {
    const RESOURCE: &'static str = "products";
    const KIND: &'static str = "product";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::Validation("id is required".into()));
        }
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name is required".into()));
        }
        if self.price <= 0.0 {
            return Err(ModelError::Validation("price must be positive".into()));
        }
        Ok(())
    }
}
