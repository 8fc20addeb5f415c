//! User Card Component
//!
//! Read-only card for one user: contact details, address and company.

use leptos::prelude::*;

use crate::models::UserRecord;

#[component]
pub fn UserCard(user: UserRecord) -> impl IntoView {
    let mailto = user.mailto_href();
    let website_href = user.website_href();
    let street_line = user.street_line();
    let city_line = user.city_line();
    let coordinates = user.coordinates_line();
    let catch_phrase = format!("\"{}\"", user.company.catch_phrase);

    view! {
        <div class="user-card">
            <div class="user-card-header">
                <h2 class="user-card-name">{user.name}</h2>
                <p class="user-card-username">"@" {user.username}</p>
            </div>

            <div class="user-card-contact">
                <div class="contact-row">
                    <span class="contact-label">"Email:"</span>
                    <a href=mailto class="contact-link">{user.email}</a>
                </div>
                <div class="contact-row">
                    <span class="contact-label">"Phone:"</span>
                    <span class="contact-value">{user.phone}</span>
                </div>
                <div class="contact-row">
                    <span class="contact-label">"Website:"</span>
                    <a
                        href=website_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="contact-link"
                    >
                        {user.website}
                    </a>
                </div>
            </div>

            <div class="user-card-section address">
                <h3>"Address"</h3>
                <p>{street_line}</p>
                <p>{city_line}</p>
                <p class="coordinates">{coordinates}</p>
            </div>

            <div class="user-card-section company">
                <h3>"Company"</h3>
                <p class="company-name">{user.company.name}</p>
                <p class="catch-phrase">{catch_phrase}</p>
                <p class="company-bs">{user.company.bs}</p>
            </div>

            <div class="user-card-footer">
                <span>"User ID: " {user.id}</span>
                <span class="status-badge">
                    <span class="status-dot"></span>
                    "Active"
                </span>
            </div>
        </div>
    }
}
