use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::Record;

/// An order references a product by id only; the reference is not checked
/// against the product store (no cross-service consistency).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    pub total: f64,
}

impl Record for Order {
    const RESOURCE: &'static str = "orders";
    const KIND: &'static str = "order";

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
        if self.product_id.trim().is_empty() {
            return Err(ModelError::Validation("product_id is required".into()));
        }
        if self.quantity == 0 {
            return Err(ModelError::Validation("quantity must be positive".into()));
        }
        if self.total <= 0.0 {
            return Err(ModelError::Validation("total must be positive".into()));
        }
        Ok(())
    }
}
