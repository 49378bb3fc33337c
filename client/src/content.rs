//! Static site content.
//!
//! Everything the page shows that is not layout: programs, statistics,
//! events, donation options, gallery posts, navigation and footer links.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const ORG_NAME: &str = "High Five Initiative";
pub const SHORT_NAME: &str = "High Five";
pub const TAGLINE: &str = "Care. Connect. Impact.";
pub const PAGE_TITLE: &str = "High Five Charity - Care. Connect. Impact.";
pub const PAGE_DESCRIPTION: &str = "High Five is a community platform dedicated to creating meaningful social impact through various campaigns and programs across Africa.";
pub const MISSION: &str = "The High Five Initiative is a community platform dedicated to creating meaningful social impact through various campaigns and programs across Africa.";
pub const FOOTER_BLURB: &str = "Creating meaningful social impact through various campaigns and programs across Africa.";
pub const INSTAGRAM_HANDLE: &str = "@highfiveinitiative";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/highfive_initiative/";
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Ids of every `section[id]` on the page, in document order.
pub const SECTION_IDS: [&str; 7] = ["hero", "work", "impact", "events", "volunteer", "donate", "gallery"];

/// Inline SVG glyphs used by cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Education,
    Heart,
    Community,
    Gift,
    Calendar,
    Office,
}

impl Icon {
    /// SVG path data for a 20x20 view box.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Education => "M10.394 2.08a1 1 0 00-.788 0l-7 3a1 1 0 000 1.84L5.25 8.051a.999.999 0 01.356-.257l4-1.714a1 1 0 11.788 1.838l-2.727 1.17 1.94.831a1 1 0 00.787 0l7-3a1 1 0 000-1.838l-7-3zM3.31 9.397L5 10.12v4.102a8.969 8.969 0 00-1.05-.174 1 1 0 01-.89-.89 11.115 11.115 0 01.25-3.762zM9.3 16.573A9.026 9.026 0 007 14.935v-3.957l1.818.78a3 3 0 002.364 0l5.508-2.361a11.026 11.026 0 01.25 3.762 1 1 0 01-.89.89 8.968 8.968 0 00-5.35 2.524 1 1 0 01-1.4 0zM6 18a1 1 0 001-1v-2.065a8.935 8.935 0 00-2-.712V17a1 1 0 001 1z",
            Self::Heart => "M3.172 5.172a4 4 0 015.656 0L10 6.343l1.172-1.171a4 4 0 115.656 5.656L10 17.657l-6.828-6.829a4 4 0 010-5.656z",
            Self::Community => "M13 6a3 3 0 11-6 0 3 3 0 016 0zM18 8a2 2 0 11-4 0 2 2 0 014 0zM14 15a4 4 0 00-8 0v3h8v-3zM6 8a2 2 0 11-4 0 2 2 0 014 0zM16 18v-3a5.972 5.972 0 00-.75-2.906A3.005 3.005 0 0119 15v3h-3zM4.75 12.094A5.973 5.973 0 004 15v3H1v-3a3 3 0 013.75-2.906z",
            Self::Gift => "M5 5a3 3 0 015-2.236A3 3 0 0114.83 6H16a2 2 0 110 4h-5V9a1 1 0 10-2 0v1H4a2 2 0 110-4h1.17C5.06 5.687 5 5.35 5 5zm4 1V5a1 1 0 10-1 1h1zm3 0a1 1 0 10-1-1v1h1zM9 12H4v4a2 2 0 002 2h3v-6zM11 18h3a2 2 0 002-2v-4h-5v6z",
            Self::Calendar => "M6 2a1 1 0 00-1 1v1H4a2 2 0 00-2 2v10a2 2 0 002 2h12a2 2 0 002-2V6a2 2 0 00-2-2h-1V3a1 1 0 10-2 0v1H7V3a1 1 0 00-1-1zm0 5a1 1 0 000 2h8a1 1 0 100-2H6z",
            Self::Office => "M4 4a2 2 0 012-2h8a2 2 0 012 2v12a1 1 0 110 2h-3a1 1 0 01-1-1v-2a1 1 0 00-1-1H9a1 1 0 00-1 1v2a1 1 0 01-1 1H4a1 1 0 110-2V4zm3 1h2v2H7V5zm2 4H7v2h2V9zm2-4h2v2h-2V5zm2 4h-2v2h2V9z",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: &'static str,
    /// Rendered as the call-to-action button.
    pub primary: bool,
    /// Only listed in the mobile menu.
    pub mobile_only: bool,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", section: "hero", primary: false, mobile_only: false },
    NavLink { label: "Our Work", section: "work", primary: false, mobile_only: false },
    NavLink { label: "Events", section: "events", primary: false, mobile_only: false },
    NavLink { label: "Impact", section: "impact", primary: false, mobile_only: true },
    NavLink { label: "Donate Now", section: "donate", primary: true, mobile_only: false },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Program {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROGRAMS: [Program; 3] = [
    Program {
        icon: Icon::Education,
        title: "Education",
        description: "We provide access to quality education for underserved communities, focusing on infrastructure, resources, and teacher training.",
    },
    Program {
        icon: Icon::Heart,
        title: "Healthcare",
        description: "We work to improve healthcare access through mobile clinics, vaccination programs, and health education initiatives.",
    },
    Program {
        icon: Icon::Community,
        title: "Community Empowerment",
        description: "We support local initiatives, entrepreneurship, and sustainable development projects led by community members.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const IMPACT_STATS: [ImpactStat; 4] = [
    ImpactStat { value: "12K+", label: "Children Educated" },
    ImpactStat { value: "36", label: "Communities Served" },
    ImpactStat { value: "8", label: "Countries Reached" },
    ImpactStat { value: "5M+", label: "Funds Raised" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub const EVENTS: [Event; 3] = [
    Event {
        title: "Community Fundraiser Gala",
        date: "April 18, 2025",
        location: "Nairobi Convention Center",
        description: "Join us for an evening of inspiration, entertainment, and community spirit as we raise funds for our education programs.",
    },
    Event {
        title: "Volunteer Day: School Rebuilding",
        date: "May 2, 2025",
        location: "Little Haven Center, Mombasa",
        description: "Help us renovate and prepare our newest daycare center. All skills welcome!",
    },
    Event {
        title: "Youth Leadership Workshop",
        date: "May 15, 2025",
        location: "Virtual Event",
        description: "Empowering the next generation of leaders with practical skills and mentorship.",
    },
];

pub const VOLUNTEER_PERKS: [&str; 3] = [
    "Flexible time commitments",
    "Remote and in-person opportunities",
    "Training and support provided",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DonateOption {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
}

pub const DONATE_OPTIONS: [DonateOption; 3] = [
    DonateOption {
        icon: Icon::Gift,
        title: "One-time Donation",
        description: "Make a one-time donation to support our programs. Every contribution makes a difference.",
        button_text: "Donate Now",
    },
    DonateOption {
        icon: Icon::Calendar,
        title: "Monthly Giving",
        description: "Become a monthly donor and provide sustainable support for our long-term initiatives.",
        button_text: "Give Monthly",
    },
    DonateOption {
        icon: Icon::Office,
        title: "Corporate Sponsorship",
        description: "Partner with us through corporate sponsorship programs tailored to your organization's goals.",
        button_text: "Partner With Us",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryPost {
    pub id: &'static str,
    pub image_url: &'static str,
    pub caption: &'static str,
    pub likes: u32,
    pub posted: &'static str,
}

pub const LOGO_URL: &str = "/images/high-five-logo.svg";
pub const PLACEHOLDER_WIDE: &str = "/images/placeholder-600x400.svg";
const PLACEHOLDER_SQUARE: &str = "/images/placeholder-400x400.svg";

pub const GALLERY_POSTS: [GalleryPost; 8] = [
    GalleryPost {
        id: "post1",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Celebrating the opening of our new school in Mombasa! Thanks to all our supporters who made this possible. #EducationForAll #HighFiveInitiative",
        likes: 124,
        posted: "2 days ago",
    },
    GalleryPost {
        id: "post2",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Our healthcare volunteers providing essential vaccines to children in rural communities. Every child deserves access to healthcare. #HealthForAll",
        likes: 98,
        posted: "4 days ago",
    },
    GalleryPost {
        id: "post3",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Women's empowerment workshop teaching sustainable farming techniques. These skills will help build resilient communities. #WomenEmpowerment",
        likes: 156,
        posted: "1 week ago",
    },
    GalleryPost {
        id: "post4",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Clean water initiative completed in Turkana County. Now over 500 families have access to clean drinking water. #WaterForLife",
        likes: 201,
        posted: "1 week ago",
    },
    GalleryPost {
        id: "post5",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Youth leadership program graduation ceremony. These young leaders are ready to make a difference in their communities! #YouthLeaders",
        likes: 87,
        posted: "2 weeks ago",
    },
    GalleryPost {
        id: "post6",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Building playgrounds for children in underserved areas. Play is an essential part of childhood development. #PlayMatters",
        likes: 112,
        posted: "2 weeks ago",
    },
    GalleryPost {
        id: "post7",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Volunteer teams distributing food packages during the pandemic. Together we can overcome any challenge. #CommunitySupport",
        likes: 145,
        posted: "3 weeks ago",
    },
    GalleryPost {
        id: "post8",
        image_url: PLACEHOLDER_SQUARE,
        caption: "Teacher training program in session. Equipping educators with new skills to improve learning outcomes. #QualityEducation",
        likes: 78,
        posted: "3 weeks ago",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn { heading: "Quick Links", links: &["Home", "About Us", "Our Programs", "Events", "Contact"] },
    FooterColumn { heading: "Get Involved", links: &["Volunteer", "Donate", "Partnerships", "Fundraise"] },
];

pub const CONTACT_LINES: [&str; 3] = [
    "123 Charity Street, Nairobi, Kenya",
    "info@highfiveinitiative.org",
    "+254 123 456 789",
];

/// Social profiles shown in the footer: (label, href).
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Facebook", "#"),
    ("Twitter", "#"),
    ("Instagram", INSTAGRAM_URL),
];

/// Fade-in delay for the `index`-th card of a grid, in milliseconds.
#[must_use]
pub fn stagger_delay_ms(index: usize, base: u32, step: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(step.saturating_mul(index))
}
