use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Text,
    Email,
    Password,
    Textarea,
    Select,
    Checkbox,
}

/// Where a select widget takes its options from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceScope {
    Publishers,
    Categories,
    Journalists,
    Roles,
    Statuses,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Choices {
    pub scope: ChoiceScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_label: Option<String>,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldDescription {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: WidgetKind,
    pub required: bool,
    pub css_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Choices>,
}

impl FieldDescription {
    pub fn new(name: &'static str, label: &'static str, widget: WidgetKind) -> Self {
        let css_class = match widget {
            WidgetKind::Checkbox => "form-check-input",
            _ => "form-control",
        };
        Self {
            name,
            label,
            widget,
            required: true,
            css_class,
            placeholder: None,
            rows: None,
            max_length: None,
            min_length: None,
            choices: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Select backed by stored rows; options are filled in later.
    pub fn scoped(mut self, scope: ChoiceScope, empty_label: Option<&str>) -> Self {
        self.choices = Some(Choices {
            scope,
            empty_label: empty_label.map(str::to_string),
            options: Vec::new(),
        });
        self
    }

    /// Select with a fixed option list.
    pub fn fixed(mut self, scope: ChoiceScope, options: Vec<ChoiceOption>) -> Self {
        self.choices = Some(Choices {
            scope,
            empty_label: None,
            options,
        });
        self
    }
}

/// Field list and widget hints a client needs to render a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormDescription {
    pub form: &'static str,
    pub fields: Vec<FieldDescription>,
}

impl FormDescription {
    pub fn new(form: &'static str, fields: Vec<FieldDescription>) -> Self {
        Self { form, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Scopes whose options still have to be loaded.
    pub fn pending_scopes(&self) -> Vec<ChoiceScope> {
        let mut scopes: Vec<ChoiceScope> = self
            .fields
            .iter()
            .filter_map(|field| field.choices.as_ref())
            .filter(|choices| choices.options.is_empty())
            .map(|choices| choices.scope)
            .collect();
        scopes.dedup();
        scopes
    }

    pub fn fill(&mut self, scope: ChoiceScope, options: &[ChoiceOption]) {
        for choices in self
            .fields
            .iter_mut()
            .filter_map(|field| field.choices.as_mut())
            .filter(|choices| choices.scope == scope)
        {
            choices.options = options.to_vec();
        }
    }
}
