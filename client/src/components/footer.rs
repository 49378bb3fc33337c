//! Site footer: mission blurb, link columns, contact details.

use leptos::prelude::*;

use crate::content::{CONTACT_LINES, COPYRIGHT_YEAR, FOOTER_COLUMNS, ORG_NAME, FOOTER_BLURB, SHORT_NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div>
                    <a href="/" class="site-footer__brand">
                        <span class="site-footer__mark" aria-hidden="true">"🖐️"</span>
                        {SHORT_NAME}
                    </a>
                    <p>{FOOTER_BLURB}</p>
                    <div class="site-footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|&(label, href)| view! { <a href=href aria-label=label>{label}</a> })
                            .collect_view()}
                    </div>
                </div>

                {FOOTER_COLUMNS
                    .iter()
                    .map(|col| {
                        view! {
                            <div>
                                <h3>{col.heading}</h3>
                                <ul>
                                    {col.links.iter().map(|&l| view! { <li><a href="#">{l}</a></li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}

                <div>
                    <h3>"Contact Us"</h3>
                    <ul>{CONTACT_LINES.iter().map(|&line| view! { <li>{line}</li> }).collect_view()}</ul>
                </div>
            </div>

            <div class="container site-footer__legal">
                <p>{format!("© {COPYRIGHT_YEAR} {ORG_NAME}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
