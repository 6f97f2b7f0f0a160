//! Named pages of the front end and their static content.
//!
//! Profile and Dashboard render session data; the rest are fixed copy.

pub mod handlers;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    /// True when the page content comes from the session rather than `body`.
    pub session_bound: bool,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub body: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
}

pub const HOME: Page = Page {
    slug: "home",
    title: "Welcome to AI Admissions Counselor",
    icon: "house",
    session_bound: false,
    body: &["Your personalized guide for academic program recommendations and application advice."],
};

pub const PROFILE: Page = Page {
    slug: "profile",
    title: "Profile",
    icon: "person",
    session_bound: true,
    body: &[],
};

pub const DASHBOARD: Page = Page {
    slug: "dashboard",
    title: "Recommendations",
    icon: "check2-circle",
    session_bound: true,
    body: &[],
};

pub const TESTIMONIALS: Page = Page {
    slug: "testimonials",
    title: "Testimonials",
    icon: "chat-quote",
    session_bound: false,
    body: &[],
};

pub const ABOUT: Page = Page {
    slug: "about",
    title: "About",
    icon: "info-circle",
    session_bound: false,
    body: &[
        "AI Admissions Counselor matches your interests and preferences against a curated list of programs.",
        "Advice is generated by a language model and should be checked against each program's official admissions pages.",
    ],
};

pub const CONTACT: Page = Page {
    slug: "contact",
    title: "Contact",
    icon: "envelope",
    session_bound: false,
    body: &["Questions or feedback: counselor@example.com"],
};

/// Navigation order.
pub static PAGES: [Page; 6] = [HOME, PROFILE, DASHBOARD, TESTIMONIALS, ABOUT, CONTACT];

pub static TESTIMONIAL_QUOTES: [Testimonial; 3] = [
    Testimonial {
        author: "Priya, admitted to a data science master",
        quote: "The recommendations narrowed a long list down to three programs worth applying to.",
    },
    Testimonial {
        author: "Marcus, bootcamp graduate",
        quote: "Filtering by location saved me hours of searching.",
    },
    Testimonial {
        author: "Lena, undergraduate applicant",
        quote: "The advice helped me decide which strengths to highlight in my essays.",
    },
];

pub fn find(slug: &str) -> Option<&'static Page> {
    PAGES.iter().find(|p| p.slug.eq_ignore_ascii_case(slug))
}
