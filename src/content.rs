// Fixed marketing copy rendered by the page sections.
use crate::icons::Icon;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Testimonials", href: "#testimonials" },
    NavLink { label: "Contact", href: "#contact" },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "15+", label: "Years Experience" },
    Stat { value: "2.5k", label: "Projects Done" },
    Stat { value: "12", label: "Expert Plumbers" },
    Stat { value: "30m", label: "Response Time" },
];

/// Colour family used for a service card's icon tile and border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Orange,
    Cyan,
    Emerald,
    Purple,
    Slate,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Orange => "accent-orange",
            Accent::Cyan => "accent-cyan",
            Accent::Emerald => "accent-emerald",
            Accent::Purple => "accent-purple",
            Accent::Slate => "accent-slate",
        }
    }
}

pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const SERVICES: [ServiceOffering; 6] = [
    ServiceOffering {
        title: "Emergency Repairs",
        description: "Burst pipes, major leaks, or flooding? We are available 24/7 for immediate assistance.",
        icon: Icon::Droplets,
        accent: Accent::Blue,
    },
    ServiceOffering {
        title: "Geyser Services",
        description: "Installation, maintenance, and repair of all geyser types to ensure you have hot water.",
        icon: Icon::Thermometer,
        accent: Accent::Orange,
    },
    ServiceOffering {
        title: "Drain Cleaning",
        description: "Professional high-pressure drain cleaning to remove stubborn blockages quickly.",
        icon: Icon::Waves,
        accent: Accent::Cyan,
    },
    ServiceOffering {
        title: "Leak Detection",
        description: "Advanced equipment to find hidden leaks behind walls or underground without damage.",
        icon: Icon::ShieldCheck,
        accent: Accent::Emerald,
    },
    ServiceOffering {
        title: "Bathroom Remodel",
        description: "Complete plumbing overhaul for your bathroom or kitchen renovation projects.",
        icon: Icon::Hammer,
        accent: Accent::Purple,
    },
    ServiceOffering {
        title: "General Maintenance",
        description: "Taps, toilets, showers, and more. We handle all your day-to-day plumbing needs.",
        icon: Icon::Wrench,
        accent: Accent::Slate,
    },
];

pub struct SellingPoint {
    pub title: &'static str,
    pub description: &'static str,
}

pub const WHY_US: [SellingPoint; 4] = [
    SellingPoint { title: "Licensed & Insured", description: "Fully qualified professionals you can trust." },
    SellingPoint { title: "24/7 Availability", description: "Emergency support anytime, day or night." },
    SellingPoint { title: "Upfront Pricing", description: "No hidden costs. Clear quotes before we start." },
    SellingPoint { title: "Guaranteed Work", description: "We stand by the quality of our craftsmanship." },
];

pub struct Project {
    pub title: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub tag: &'static str,
}

pub const GALLERY: [Project; 3] = [
    Project {
        title: "Bathroom Pipe Burst",
        before: "https://images.unsplash.com/photo-1585909665970-21c5bc462879?auto=format&fit=crop&q=80&w=800",
        after: "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?auto=format&fit=crop&q=80&w=800",
        tag: "Emergency Repair",
    },
    Project {
        title: "Geyser Installation",
        before: "https://images.unsplash.com/photo-1621905251918-48416bd8575a?auto=format&fit=crop&q=80&w=800",
        after: "https://images.unsplash.com/photo-1504148455328-c376907d081c?auto=format&fit=crop&q=80&w=800",
        tag: "Installation",
    },
    Project {
        title: "Drain Unblocking",
        before: "https://images.unsplash.com/photo-1542013936693-884638332954?auto=format&fit=crop&q=80&w=800",
        after: "https://images.unsplash.com/photo-1605270012917-bf157c5a9541?auto=format&fit=crop&q=80&w=800",
        tag: "Maintenance",
    },
];

pub struct Review {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    /// 1..=5
    pub rating: u8,
}

impl Review {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: [Review; 3] = [
    Review {
        name: "Sarah Jenkins",
        location: "Ferndale",
        text: "Had a burst pipe at 2 AM on a Sunday. They were here within 30 minutes and fixed it perfectly. Truly life savers!",
        rating: 5,
    },
    Review {
        name: "Michael van der Merwe",
        location: "Randburg",
        text: "Professional, clean, and efficient. They installed a new geyser for us and the service was top-notch from start to finish.",
        rating: 5,
    },
    Review {
        name: "David Nkosi",
        location: "Linden",
        text: "Finally a plumber that actually shows up on time! Clear pricing and great communication. Highly recommended.",
        rating: 5,
    },
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?auto=format&fit=crop&q=80&w=2000";
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1621905251918-48416bd8575a?auto=format&fit=crop&q=80&w=1000";
pub const WHY_US_IMAGE: &str = "https://images.unsplash.com/photo-1504148455328-c376907d081c?auto=format&fit=crop&q=80&w=1000";

pub fn avatar_url(seed: u8) -> String {
    format!("https://i.pravatar.cc/100?img={}", seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_ratings_are_in_range() {
        for review in &TESTIMONIALS {
            assert!((1..=5).contains(&review.rating), "{}", review.name);
        }
    }

    #[test]
    fn nav_links_point_at_page_anchors() {
        assert_eq!(NAV_LINKS[0].href, "#");
        assert!(NAV_LINKS[1..].iter().all(|link| link.href == format!("#{}", link.label.to_lowercase())));
    }

    #[test]
    fn initial_comes_from_the_name() {
        assert_eq!(TESTIMONIALS[2].initial(), 'D');
    }
}
