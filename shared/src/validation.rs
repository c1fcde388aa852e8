use strum_macros::{AsRefStr, Display, EnumIter};

use crate::models::CreateServerRequest;

/// Values of the create-server form as the user edits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerForm {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    ImageUrl,
}

impl Field {
    pub fn value<'a>(&self, form: &'a ServerForm) -> &'a str {
        match self {
            Field::Name => &form.name,
            Field::ImageUrl => &form.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

pub trait Validator<I> {
    type Output;

    fn validate(&self, input: &I) -> Result<Self::Output, Vec<FieldError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinLength(usize),
}

impl Rule {
    fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinLength(min) => value.chars().count() >= *min,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

pub const SERVER_FORM_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        rule: Rule::MinLength(1),
        message: "Server name is required",
    },
    FieldRule {
        field: Field::ImageUrl,
        rule: Rule::MinLength(1),
        message: "Image URL is required",
    },
];

/// Static schema for the create-server form.
#[derive(Debug, Clone, Copy)]
pub struct ServerFormSchema {
    rules: &'static [FieldRule],
}

impl Default for ServerFormSchema {
    fn default() -> Self {
        Self {
            rules: SERVER_FORM_RULES,
        }
    }
}

impl Validator<ServerForm> for ServerFormSchema {
    type Output = CreateServerRequest;

    fn validate(&self, input: &ServerForm) -> Result<CreateServerRequest, Vec<FieldError>> {
        let errors: Vec<FieldError> = self
            .rules
            .iter()
            .filter(|rule| !rule.rule.check(rule.field.value(input)))
            .map(|rule| FieldError {
                field: rule.field,
                message: rule.message,
            })
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateServerRequest {
            name: input.name.clone(),
            image_url: input.image_url.clone(),
        })
    }
}
