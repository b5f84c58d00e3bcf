//! Ordered request validation.
//!
//! A [`RuleChain`] is a fixed list of [`Rule`]s. Every rule is evaluated
//! against the request, and each failing rule contributes exactly one
//! [`FieldError`], in the order the rules were declared. A field may
//! therefore fail several rules at once.
//!
//! ```ignore
//! use axum_helpers::validation::{Rule, RuleChain, RequestInput, rules};
//!
//! const ID: Rule = Rule::param("id", rules::is_int, "ID no valido");
//! const PRICE: Rule = Rule::body("price", rules::is_numeric, "Valor no valido");
//! const CHAIN: RuleChain = RuleChain::new(&[ID, PRICE]);
//!
//! let input = RequestInput::new().with_param("id", "abc").with_body(body);
//! CHAIN.validate(&input).check()?;
//! ```

pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::errors::AppError;

/// Where the validated value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the path parameter or body field
    #[schema(example = "price")]
    pub field: String,
    #[schema(example = "Precio no valido")]
    pub msg: String,
    pub location: Location,
}

/// Predicate over a raw request value. `None` means the field is absent.
pub type Check = fn(Option<&Value>) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    location: Location,
    field: &'static str,
    check: Check,
    message: &'static str,
}

impl Rule {
    pub const fn param(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            location: Location::Params,
            field,
            check,
            message,
        }
    }

    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            location: Location::Body,
            field,
            check,
            message,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// `Some` when the rule fails for this input.
    pub fn evaluate(&self, input: &RequestInput) -> Option<FieldError> {
        if (self.check)(input.lookup(self.location, self.field)) {
            return None;
        }

        Some(FieldError {
            field: self.field.to_string(),
            msg: self.message.to_string(),
            location: self.location,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RuleChain(&'static [Rule]);

impl RuleChain {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self(rules)
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.0
    }

    pub fn validate(&self, input: &RequestInput) -> ValidationReport {
        let errors = self.0.iter().filter_map(|rule| rule.evaluate(input)).collect();
        ValidationReport { errors }
    }
}

/// Raw request values as seen before any typing: path parameters as
/// strings and the body as loosely parsed JSON.
#[derive(Debug, Clone)]
pub struct RequestInput {
    params: Map<String, Value>,
    body: Value,
}

impl RequestInput {
    pub fn new() -> Self {
        Self {
            params: Map::new(),
            body: Value::Object(Map::new()),
        }
    }

    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params
            .insert(name.to_string(), Value::String(value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(Value::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Non-object bodies have no fields.
    pub fn lookup(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.get(field),
        }
    }
}

impl Default for RequestInput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Gate: `Ok` when nothing failed, otherwise the full ordered list as a 400.
    pub fn check(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}
