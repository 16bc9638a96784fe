use crate::domain::{FormField, IsNew, PredictorState, ReferenceData};
use maud::{html, Markup};

pub fn predictor_form(reference: &ReferenceData, state: &PredictorState) -> Markup {
    let form = &state.form;

    let is_new_options: Vec<(String, &str)> = IsNew::ALL
        .iter()
        .map(|o| (o.as_flag().to_string(), o.label()))
        .collect();
    let is_new_selected = form.is_new.map(|o| o.as_flag().to_string());

    html! {
        form
            method="post"
            action="/predict"
            hx-post="/predict"
            hx-target="#prediction-result"
            hx-swap="innerHTML"
            hx-disabled-elt="button"
            class="predictor-form"
        {
            div class="form-grid" {
                (number_input(FormField::Area, "Area (sqm)", &form.area))
                (number_input(FormField::Rooms, "Rooms", &form.rooms))
                (number_input(FormField::Baths, "Baths", &form.baths))

                (select_control(
                    FormField::Region,
                    "Select Region",
                    reference.regions.iter().map(|r| (r.as_str(), r.as_str())),
                    form.region.as_deref(),
                ))
                (select_control(
                    FormField::Locality,
                    "Select Locality",
                    reference.localities.iter().map(|l| (l.as_str(), l.as_str())),
                    form.locality.as_deref(),
                ))
                (select_control(
                    FormField::PropertyType,
                    "Select Property Type",
                    reference.types.iter().map(|t| (t.as_str(), t.as_str())),
                    form.property_type.as_deref(),
                ))
                (select_control(
                    FormField::IsNew,
                    "Is it New?",
                    is_new_options.iter().map(|(v, l)| (v.as_str(), *l)),
                    is_new_selected.as_deref(),
                ))

                button type="submit" class="primary" disabled[!state.submit_enabled()] {
                    span class="btn-text" { "Predict My Price 💸" }
                    span class="htmx-indicator" aria-hidden="true" { "Thinking... 🤖" }
                }
            }
        }
    }
}

fn number_input(field: FormField, placeholder: &str, value: &str) -> Markup {
    html! {
        div class="form-cell" {
            label class="sr-only" for=(field.name()) { (field.label()) }
            input
                type="number"
                id=(field.name())
                name=(field.name())
                placeholder=(placeholder)
                value=(value);
        }
    }
}

fn select_control<'a>(
    field: FormField,
    placeholder: &str,
    options: impl Iterator<Item = (&'a str, &'a str)>,
    selected: Option<&str>,
) -> Markup {
    html! {
        div class="form-cell" {
            label class="sr-only" for=(field.name()) { (field.label()) }
            select id=(field.name()) name=(field.name()) {
                option value="" selected[selected.is_none()] { (placeholder) }
                @for (value, label) in options {
                    option value=(value) selected[selected == Some(value)] { (label) }
                }
            }
        }
    }
}
