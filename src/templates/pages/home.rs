// templates/pages/home.rs

use crate::domain::{PredictorState, ReferenceData};
use crate::templates::{
    components::{predictor_form, result_panel},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(reference: &ReferenceData, state: &PredictorState) -> Markup {
    desktop_layout(
        "AI Property Price Predictor",
        html! {
            main class="container" {
                div class="intro" {
                    h2 { "🏡 AI Property Price Predictor" }
                    p class="lead" {
                        "Whether you're buying your dream home or just curious about your "
                        "property's value, enter its details below. We predict a fair price "
                        "from current market data and show similar listings to compare. 🧠📊"
                    }
                }

                (predictor_form(reference, state))

                div id="prediction-result" class="result" aria-live="polite" {
                    (result_panel(state))
                }
            }
        },
    )
}
