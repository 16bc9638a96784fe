use crate::domain::format::{group_thousands, map_link, plain_number};
use crate::predictor::Listing;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        div class="card listing-card" {
            @if let Some(src) = listing.cover_image() {
                img class="card-img-top" src=(src) alt=(listing.property_type);
            }
            div class="card-body" {
                h6 class="card-title" { (listing.property_type) }
                p class="card-text" {
                    "📍 " (listing.locality) ", " (listing.region)
                    br;
                    "📐 " (plain_number(listing.area)) " sqm"
                    br;
                    "🛏️ " (plain_number(listing.rooms)) " | 🛁 " (plain_number(listing.baths))
                    br;
                    "💰 " (group_thousands(listing.price)) " EGP"
                }
                @if let Some((lat, lng)) = listing.coordinates() {
                    a
                        href=(map_link(lat, lng))
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn map-link"
                    { "🌍 View on Map" }
                }
            }
        }
    }
}
