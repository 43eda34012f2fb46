//! Declarative per-field rules for the record editor form.
//!
//! Every field is required; price and quantity must additionally contain at
//! least one digit. Messages are user-facing text rendered inline next to
//! the offending field, not structured error codes.

use crate::catalog::record::ProductFields;
use regex_lite::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    Name,
    Category,
    Price,
    Quantity,
}

/// Field order as presented in the form. Focus cycling follows this.
pub const FIELD_ORDER: [FieldId; 4] = [
    FieldId::Name,
    FieldId::Category,
    FieldId::Price,
    FieldId::Quantity,
];

impl FieldId {
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Category => "Category",
            FieldId::Price => "Price",
            FieldId::Quantity => "Quantity",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            FieldId::Name => "Enter Product Name!",
            FieldId::Category => "Enter Product Category!",
            FieldId::Price => "Enter Product Price!",
            FieldId::Quantity => "Enter Product Quantity!",
        }
    }

    const fn required_message(self) -> &'static str {
        match self {
            FieldId::Name => "Please enter product name.",
            FieldId::Category => "Please enter product category.",
            FieldId::Price => "Please enter product price.",
            FieldId::Quantity => "Please enter product quantity.",
        }
    }

    const fn digit_checked(self) -> bool {
        matches!(self, FieldId::Price | FieldId::Quantity)
    }

    pub fn next(self) -> Self {
        let idx = FIELD_ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default();
        FIELD_ORDER[(idx + 1) % FIELD_ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = FIELD_ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default();
        FIELD_ORDER[(idx + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single inline validation message attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: FieldId,
    pub message: String,
}

const DIGIT_MESSAGE: &str = "Field accepts numbers only.";

fn digit_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[0-9]").ok()).as_ref()
}

fn field_value(fields: &ProductFields, field: FieldId) -> &str {
    match field {
        FieldId::Name => &fields.name,
        FieldId::Category => &fields.category,
        FieldId::Price => &fields.price,
        FieldId::Quantity => &fields.quantity,
    }
}

/// Evaluates every rule against the draft and returns the issues in field
/// order. An empty result means the draft may be submitted.
pub fn validate_fields(fields: &ProductFields) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    for field in FIELD_ORDER {
        // Required is a literal non-empty check; whitespace-only values
        // pass it and are submitted as entered.
        let value = field_value(fields, field);
        if value.is_empty() {
            issues.push(FieldIssue {
                field,
                message: field.required_message().to_string(),
            });
            continue;
        }
        // A pattern that failed to compile blocks submission rather than
        // letting unvalidated text through.
        let digit_ok = digit_pattern().is_some_and(|re| re.is_match(value));
        if field.digit_checked() && !digit_ok {
            issues.push(FieldIssue {
                field,
                message: DIGIT_MESSAGE.to_string(),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ProductFields {
        ProductFields {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: "10".to_string(),
            quantity: "5".to_string(),
        }
    }

    #[test]
    fn valid_draft_has_no_issues() {
        assert!(validate_fields(&valid_fields()).is_empty());
    }

    #[test]
    fn missing_fields_report_required_messages() {
        let issues = validate_fields(&ProductFields::default());
        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0].field, FieldId::Name);
        assert_eq!(issues[0].message, "Please enter product name.");
        assert_eq!(issues[3].field, FieldId::Quantity);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut fields = valid_fields();
        fields.price = "abc".to_string();
        let issues = validate_fields(&fields);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, FieldId::Price);
        assert_eq!(issues[0].message, DIGIT_MESSAGE);
    }

    #[test]
    fn one_digit_anywhere_satisfies_the_pattern() {
        let mut fields = valid_fields();
        fields.price = "usd 12".to_string();
        assert!(validate_fields(&fields).is_empty());
    }

    #[test]
    fn whitespace_only_text_passes_the_required_check() {
        let mut fields = valid_fields();
        fields.name = " ".to_string();
        assert!(validate_fields(&fields).is_empty());

        // Whitespace-only price is non-empty but still has no digit.
        fields.price = " ".to_string();
        let issues = validate_fields(&fields);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, FieldId::Price);
        assert_eq!(issues[0].message, DIGIT_MESSAGE);
    }

    #[test]
    fn focus_order_wraps_in_both_directions() {
        assert_eq!(FieldId::Quantity.next(), FieldId::Name);
        assert_eq!(FieldId::Name.prev(), FieldId::Quantity);
        assert_eq!(FieldId::Name.next(), FieldId::Category);
    }
}
