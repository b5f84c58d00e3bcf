use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::validation::{EMPTY_NAME, INVALID_PRICE};

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(EMPTY_NAME.into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !(price.is_finite() && price > 0.0) {
        return Err(ValidationError::new("price").with_message(INVALID_PRICE.into()));
    }
    Ok(())
}

/// Product as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store, never reused
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    /// Always greater than zero
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

impl Product {
    /// Overwrite every mutable field.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        self.availability = update.availability;
    }
}

/// DTO for creating a new product; availability starts as `true`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(
        length(min = 1, message = "El nombre del producto no puede ir vacio"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 300.0)]
    pub price: f64,
}

/// DTO for replacing all mutable fields of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(
        length(min = 1, message = "El nombre del producto no puede ir vacio"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}
