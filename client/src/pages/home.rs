//! The single landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render in document order with the ids listed in
//! `content::SECTION_IDS`; the header's scroll tracking measures them by
//! those ids. Card grids stagger their fade-in.

use leptos::prelude::*;

use crate::components::cards::{DonateCard, EventCard, GalleryTile, SectionHeading, ServiceCard};
use crate::components::fade_in::FadeIn;
use crate::components::footer::Footer;
use crate::components::header::{Header, go_to_section};
use crate::components::newsletter_form::NewsletterForm;
use crate::content::{
    DONATE_OPTIONS, EVENTS, GALLERY_POSTS, IMPACT_STATS, INSTAGRAM_HANDLE, INSTAGRAM_URL, MISSION, PLACEHOLDER_WIDE,
    PROGRAMS, TAGLINE, VOLUNTEER_PERKS, stagger_delay_ms,
};
use crate::state::nav::NavState;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main>
                <HeroSection/>
                <WorkSection/>
                <ImpactSection/>
                <EventsSection/>
                <VolunteerSection/>
                <DonateSection/>
                <GallerySection/>
                <NewsletterForm/>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let (lead, accent) = TAGLINE.rsplit_once(' ').unwrap_or(("", TAGLINE));

    view! {
        <section id="hero" class="section hero">
            <div class="container hero__inner">
                <FadeIn>
                    <div class="hero__copy">
                        <div class="badge">"Community Impact Platform"</div>
                        <h1>{lead}" "<span class="accent">{accent}</span></h1>
                        <p class="lead">{MISSION}</p>
                        <div class="hero__actions">
                            <button class="btn btn--primary" on:click=move |_| go_to_section(nav, "volunteer")>
                                "Get Involved"
                            </button>
                            <button class="btn btn--outline" on:click=move |_| go_to_section(nav, "work")>
                                "Learn More"
                            </button>
                        </div>
                    </div>
                </FadeIn>
                <FadeIn delay_ms=300>
                    <div class="hero__media">
                        <img src=PLACEHOLDER_WIDE alt="Children learning together" width="600" height="400"/>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}

#[component]
fn WorkSection() -> impl IntoView {
    view! {
        <section id="work" class="section">
            <div class="container">
                <FadeIn>
                    <SectionHeading
                        badge="What We Do"
                        title="Our Work"
                        lead="We focus on sustainable development through education, healthcare, and community empowerment programs across Africa."
                    />
                </FadeIn>
                <div class="grid grid--3">
                    {PROGRAMS
                        .iter()
                        .enumerate()
                        .map(|(i, &program)| {
                            view! {
                                <FadeIn delay_ms=stagger_delay_ms(i, 100, 100)>
                                    <ServiceCard program=program/>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ImpactSection() -> impl IntoView {
    view! {
        <section id="impact" class="section section--accent">
            <div class="container">
                <FadeIn>
                    <SectionHeading badge="Our Impact" title="Making A Difference" inverted=true/>
                </FadeIn>
                <div class="grid grid--4">
                    {IMPACT_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <FadeIn delay_ms=stagger_delay_ms(i, 100, 100)>
                                    <div class="stat">
                                        <div class="stat__value">{stat.value}</div>
                                        <div class="stat__label">{stat.label}</div>
                                    </div>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EventsSection() -> impl IntoView {
    view! {
        <section id="events" class="section">
            <div class="container">
                <FadeIn>
                    <SectionHeading badge="Get Involved" title="Upcoming Events"/>
                </FadeIn>
                <div class="grid grid--3">
                    {EVENTS
                        .iter()
                        .enumerate()
                        .map(|(i, &event)| {
                            view! {
                                <FadeIn delay_ms=stagger_delay_ms(i, 0, 100)>
                                    <EventCard event=event/>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section__more">
                    <a href="#events" class="link">"View All Events →"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn VolunteerSection() -> impl IntoView {
    view! {
        <section id="volunteer" class="section section--muted">
            <div class="container split">
                <FadeIn>
                    <div class="split__copy">
                        <div class="badge">"Join Our Team"</div>
                        <h2>"Volunteer With Us"</h2>
                        <p class="lead">
                            "Make a difference by volunteering your time and skills. We have opportunities for everyone, whether you're looking to volunteer remotely or in-person across our project locations."
                        </p>
                        <ul class="checklist">
                            {VOLUNTEER_PERKS.iter().map(|&perk| view! { <li>{perk}</li> }).collect_view()}
                        </ul>
                        <button class="btn btn--primary">"Apply to Volunteer"</button>
                    </div>
                </FadeIn>
                <FadeIn delay_ms=300>
                    <div class="split__media">
                        <img src=PLACEHOLDER_WIDE alt="Volunteers working together" width="600" height="400"/>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}

#[component]
fn DonateSection() -> impl IntoView {
    view! {
        <section id="donate" class="section">
            <div class="container">
                <FadeIn>
                    <SectionHeading
                        badge="Support Our Mission"
                        title="Make A Donation"
                        lead="Your donation helps us continue our work in providing education, healthcare, and community support across Africa."
                    />
                </FadeIn>
                <div class="grid grid--3">
                    {DONATE_OPTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, &option)| {
                            view! {
                                <FadeIn delay_ms=stagger_delay_ms(i, 100, 100)>
                                    <DonateCard option=option/>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GallerySection() -> impl IntoView {
    view! {
        <section id="gallery" class="section">
            <div class="container">
                <FadeIn>
                    <SectionHeading
                        badge=INSTAGRAM_HANDLE
                        title="Instagram Gallery"
                        lead="Follow our journey on Instagram and see the impact we're making across communities."
                    />
                </FadeIn>
                <div class="grid grid--gallery">
                    {GALLERY_POSTS
                        .iter()
                        .enumerate()
                        .map(|(i, &post)| {
                            view! {
                                <FadeIn delay_ms=stagger_delay_ms(i, 100, 50)>
                                    <GalleryTile post=post/>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section__more">
                    <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer" class="btn btn--primary">
                        "Follow Us on Instagram"
                    </a>
                </div>
            </div>
        </section>
    }
}
