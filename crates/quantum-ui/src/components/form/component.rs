use std::time::Duration;

use dioxus::prelude::*;
use quantum_types::{ValidationSet, ValidityKey};

use crate::components::aria::flag;
use crate::hooks::{dom, use_unique_id};

#[derive(Clone, PartialEq)]
pub struct FormContext {
    pub form_id: String,
    /// Incremented by every `FormSubmitButton` click.
    pub submit_count: Signal<u32>,
    focus_scheduled: Signal<bool>,
}

impl FormContext {
    pub fn mark_submitted(&self) {
        let mut count = self.submit_count;
        let next = *count.peek() + 1;
        count.set(next);
    }

    /// Move focus to the first invalid input once the current batch of
    /// `invalid` events has been delivered.
    fn report_invalid(&self) {
        let mut scheduled = self.focus_scheduled;
        if *scheduled.peek() {
            return;
        }
        scheduled.set(true);
        let form_id = self.form_id.clone();
        spawn(async move {
            dom::sleep(Duration::ZERO).await;
            dom::focus_first_invalid(&form_id);
            scheduled.set(false);
        });
    }
}

/// The enclosing `FormRoot`, if any.
pub fn use_form() -> Option<FormContext> {
    try_use_context::<FormContext>()
}

#[component]
pub fn FormRoot(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let form_id = use_unique_id("form");
    use_context_provider(|| FormContext {
        form_id: form_id.clone(),
        submit_count: Signal::new(0),
        focus_scheduled: Signal::new(false),
    });

    rsx! {
        form {
            id: "{form_id}",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct FormFieldContext {
    pub name: Signal<String>,
    /// Id of the field's input, referenced by its label.
    pub field_id: String,
    pub validation: Signal<ValidationSet>,
}

impl FormFieldContext {
    /// Read the input's `ValidityState` and record its first violated flag.
    pub async fn record_validity(&self) {
        let Some(flags) = dom::read_validity(&self.field_id).await else {
            return;
        };
        let set = ValidationSet::from_flags(&flags);
        if set.is_invalid() {
            tracing::debug!(field = %self.field_id, "constraint validation failed");
            let mut validation = self.validation;
            validation.set(set);
        }
    }
}

pub fn use_form_field() -> FormFieldContext {
    use_context::<FormFieldContext>()
}

#[component]
pub fn FormField(
    name: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let field_id = use_unique_id("form-field");
    let field = use_context_provider(|| FormFieldContext {
        name: Signal::new(name.clone()),
        field_id,
        validation: Signal::new(ValidationSet::default()),
    });
    let mut field_name = field.name;
    use_effect(use_reactive((&name,), move |(name,)| {
        if *field_name.peek() != name {
            field_name.set(name);
        }
    }));

    let invalid = field.validation.read().is_invalid();

    rsx! {
        div {
            "aria-invalid": flag(invalid),
            "data-invalid": flag(invalid),
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn FormLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let field = use_form_field();

    rsx! {
        label { "for": "{field.field_id}", ..attributes, {children} }
    }
}

/// The field's native input.
///
/// A failed constraint check records its first violated flag on the field;
/// typing or changing the value clears it, and so does focusing when
/// `remove_validation_when_focus` is set.
#[component]
pub fn FormInput(
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] required: bool,
    #[props(default)] placeholder: String,
    #[props(default)] pattern: Option<String>,
    #[props(default)] min_length: Option<u32>,
    #[props(default)] max_length: Option<u32>,
    #[props(default)] remove_validation_when_focus: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onchange: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let form = use_form();
    let field = use_form_field();
    let mut validation = field.validation;
    let mut clear = move || {
        if validation.peek().is_invalid() {
            validation.set(ValidationSet::default());
        }
    };

    let name = field.name.cloned();
    let invalid_field = field.clone();

    rsx! {
        input {
            id: "{field.field_id}",
            name: "{name}",
            r#type: "{input_type}",
            required,
            placeholder,
            pattern,
            minlength: min_length,
            maxlength: max_length,
            oninput: move |evt| {
                clear();
                oninput.call(evt);
            },
            onchange: move |evt| {
                clear();
                onchange.call(evt);
            },
            onfocus: move |_| {
                if remove_validation_when_focus {
                    clear();
                }
            },
            oninvalid: move |evt| {
                evt.prevent_default();
                let field = invalid_field.clone();
                spawn(async move { field.record_validity().await });
                if let Some(form) = &form {
                    form.report_invalid();
                }
            },
            ..attributes,
        }
    }
}

/// What a `FormMessage` reacts to.
#[derive(Clone, Copy, PartialEq)]
pub enum FormMatch {
    /// Shown while the field's recorded violation is this flag.
    Validity(ValidityKey),
    /// Evaluated on every submit; a `true` result marks the field with a
    /// custom error.
    Custom(Callback<(), bool>),
}

impl From<ValidityKey> for FormMatch {
    fn from(key: ValidityKey) -> Self {
        FormMatch::Validity(key)
    }
}

impl From<Callback<(), bool>> for FormMatch {
    fn from(matcher: Callback<(), bool>) -> Self {
        FormMatch::Custom(matcher)
    }
}

#[component]
pub fn FormMessage(
    #[props(into)] matches: FormMatch,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let form = use_form();
    let field = use_form_field();
    let submit_count = form.as_ref().map(|form| form.submit_count);
    let mut validation = field.validation;

    let field_id = field.field_id.clone();
    use_effect(use_reactive((&matches,), move |(matches,)| {
        let FormMatch::Custom(matcher) = matches else {
            return;
        };
        let submitted = submit_count.map(|count| count()).unwrap_or(0);
        if submitted == 0 {
            return;
        }
        if matcher.call(()) {
            validation.set(ValidationSet::single(ValidityKey::CustomError));
            dom::set_custom_validity(&field_id, "custom-error");
        } else {
            validation.set(ValidationSet::default());
            dom::set_custom_validity(&field_id, "");
        }
    }));

    let visible = match matches {
        FormMatch::Validity(key) => field.validation.read().contains(key),
        FormMatch::Custom(matcher) => {
            let submitted = submit_count.map(|count| count()).unwrap_or(0);
            submitted > 0
                && matcher.call(())
                && field.validation.read().contains(ValidityKey::CustomError)
        }
    };
    if !visible {
        return rsx! {};
    }

    rsx! {
        span { ..attributes, {children} }
    }
}

#[component]
pub fn FormSubmitButton(
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let form = use_form();

    rsx! {
        button {
            r#type: "submit",
            onclick: move |evt| {
                onclick.call(evt);
                if let Some(form) = &form {
                    form.mark_submitted();
                }
            },
            ..attributes,
            {children}
        }
    }
}
