//! Request validation chains for the product routes.
//!
//! Every chain reports one entry per failing rule, in the order listed here.

use axum_helpers::validation::rules::{
    is_boolean, is_int, is_numeric, is_positive, loose_number, not_blank, not_empty, text_form,
    to_bool,
};
use axum_helpers::{Rule, RuleChain};
use serde_json::Value;

use crate::models::{CreateProduct, UpdateProduct};

pub const INVALID_ID: &str = "ID no valido";
pub const EMPTY_NAME: &str = "El nombre del producto no puede ir vacio";
pub const NOT_A_NUMBER: &str = "Valor no valido";
pub const EMPTY_PRICE: &str = "El precio del producto no puede ir vacio";
pub const INVALID_PRICE: &str = "Precio no valido";
pub const INVALID_AVAILABILITY: &str = "valor para disponibilidad no valido";

const ID: Rule = Rule::param("id", is_int, INVALID_ID);
const NAME: Rule = Rule::body("name", not_blank, EMPTY_NAME);
const PRICE_NUMERIC: Rule = Rule::body("price", is_numeric, NOT_A_NUMBER);
const PRICE_NOT_EMPTY: Rule = Rule::body("price", not_empty, EMPTY_PRICE);
const PRICE_POSITIVE: Rule = Rule::body("price", is_positive, INVALID_PRICE);
const AVAILABILITY: Rule = Rule::body("availability", is_boolean, INVALID_AVAILABILITY);

/// GET, PATCH and DELETE on `/{id}`
pub const ID_RULES: RuleChain = RuleChain::new(&[ID]);

/// POST `/`
pub const CREATE_RULES: RuleChain =
    RuleChain::new(&[NAME, PRICE_NUMERIC, PRICE_NOT_EMPTY, PRICE_POSITIVE]);

/// PUT `/{id}`
pub const UPDATE_RULES: RuleChain = RuleChain::new(&[
    ID,
    NAME,
    PRICE_NUMERIC,
    PRICE_NOT_EMPTY,
    PRICE_POSITIVE,
    AVAILABILITY,
]);

/// Id column value for a path id that passed [`ID_RULES`].
///
/// `None` when it does not fit the column, which callers treat as absent.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

/// Typed command from a body that passed [`CREATE_RULES`].
pub fn create_command(body: &Value) -> CreateProduct {
    CreateProduct {
        name: text_form(body.get("name")).into_owned(),
        price: loose_number(body.get("price")),
    }
}

/// Typed command from a body that passed [`UPDATE_RULES`].
pub fn update_command(body: &Value) -> UpdateProduct {
    UpdateProduct {
        name: text_form(body.get("name")).into_owned(),
        price: loose_number(body.get("price")),
        availability: to_bool(body.get("availability")).unwrap_or(true),
    }
}
