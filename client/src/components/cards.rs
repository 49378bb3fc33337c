//! Content cards: programs, events, donation options, gallery posts.

use leptos::prelude::*;

use crate::content::{DonateOption, Event, GalleryPost, Icon, Program};

#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = "icon")] size: &'static str) -> impl IntoView {
    view! {
        <svg class=size fill="currentColor" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <path fill-rule="evenodd" clip-rule="evenodd" d=icon.path()></path>
        </svg>
    }
}

/// "Our Work" program card.
#[component]
pub fn ServiceCard(program: Program) -> impl IntoView {
    view! {
        <div class="card service-card">
            <div class="service-card__icon">
                <IconGlyph icon=program.icon size="icon icon--lg"/>
            </div>
            <h3 class="card__title">{program.title}</h3>
            <p class="card__body">{program.description}</p>
        </div>
    }
}

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    view! {
        <div class="card event-card">
            <p class="event-card__date">{event.date}</p>
            <h3 class="card__title">{event.title}</h3>
            <p class="event-card__location">
                <span aria-hidden="true">"📍 "</span>
                {event.location}
            </p>
            <p class="card__body">{event.description}</p>
            <button class="btn btn--primary">"Register Now"</button>
        </div>
    }
}

#[component]
pub fn DonateCard(option: DonateOption) -> impl IntoView {
    view! {
        <div class="card donate-card">
            <div class="donate-card__icon">
                <IconGlyph icon=option.icon/>
            </div>
            <h3 class="card__title">{option.title}</h3>
            <p class="card__body">{option.description}</p>
            <button class="btn btn--primary btn--block">{option.button_text}</button>
        </div>
    }
}

/// Square gallery tile; caption and likes appear on hover.
#[component]
pub fn GalleryTile(post: GalleryPost) -> impl IntoView {
    view! {
        <div class="gallery-tile" id=post.id>
            <img src=post.image_url alt=post.caption width="400" height="400" loading="lazy"/>
            <div class="gallery-tile__overlay">
                <p class="gallery-tile__caption">{post.caption}</p>
                <div class="gallery-tile__meta">
                    <span>
                        <IconGlyph icon=Icon::Heart size="icon icon--sm"/>
                        {post.likes}
                    </span>
                    <span>{post.posted}</span>
                </div>
            </div>
        </div>
    }
}

/// Badge, heading, and rule shared by section intros.
#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
    #[prop(optional)] inverted: bool,
) -> impl IntoView {
    view! {
        <div class="section-heading" class:is-inverted=inverted>
            <div class="badge">{badge}</div>
            <h2>{title}</h2>
            <div class="rule"></div>
            {lead.map(|text| view! { <p class="lead">{text}</p> })}
        </div>
    }
}
