use crate::domain::format::group_thousands;
use crate::domain::{Notice, Phase, PredictorState};
use crate::predictor::PredictionResponse;
use crate::templates::components::listing_card;
use maud::{html, Markup};

/// Contents of `#prediction-result`. Also returned on its own to htmx.
pub fn result_panel(state: &PredictorState) -> Markup {
    html! {
        @match &state.phase {
            Phase::Idle { notice: Some(notice) } => {
                (notice_box(notice))
            }
            Phase::Idle { notice: None } => {}
            Phase::Submitting => {
                p class="text-muted" { "Thinking... 🤖" }
            }
            Phase::Displayed(resp) => {
                (prediction_result(resp))
            }
        }
    }
}

pub fn notice_box(notice: &Notice) -> Markup {
    let class = match notice {
        Notice::Validation(_) => "notice notice-warning",
        Notice::Failure => "notice notice-error",
    };

    html! {
        div class=(class) role="alert" {
            (notice.message())
        }
    }
}

pub fn prediction_result(resp: &PredictionResponse) -> Markup {
    html! {
        div class="prediction" {
            h3 class="text-success" {
                "🎯 Predicted Price: " (group_thousands(resp.predicted_price)) " EGP"
            }
            p class="text-muted" {
                "AI-powered prediction. No crystal ball, just smart data 🤓"
            }

            @if !resp.similar_listings.is_empty() {
                section class="similar-listings" {
                    h4 { "🔍 Similar Listings:" }
                    div class="listing-grid" {
                        @for listing in &resp.similar_listings {
                            (listing_card(listing))
                        }
                    }
                }
            }
        }
    }
}
