//! Fixed site copy that does not live in the backend.

pub const CLUB_NAME: &str = "CSI Club";
pub const COPYRIGHT_HOLDER: &str = "CSI Club NRCM";

pub struct NavEntry {
    pub label: &'static str,
    pub footer_label: &'static str,
    pub path: &'static str,
}

pub const NAV: [NavEntry; 5] = [
    NavEntry { label: "Home", footer_label: "Home", path: "/" },
    NavEntry { label: "Events", footer_label: "Events", path: "/events" },
    NavEntry { label: "Members", footer_label: "Members", path: "/members" },
    NavEntry { label: "Join Us", footer_label: "Join", path: "/join" },
    NavEntry { label: "Contact", footer_label: "Contact", path: "/contact" },
];

pub const MEMBER_BENEFITS: [&str; 8] = [
    "Exclusive workshops and seminars",
    "Networking opportunities with industry professionals",
    "Access to club resources and projects",
    "Mentorship from senior members and faculty",
    "Participation in inter-college competitions",
    "Leadership roles and skill development",
    "Certificate of membership and participation",
    "Early access to event registrations",
];

pub const CAMPUS_MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3803.842911916916!2d78.4535264750557!3d17.56266419773235!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bcb8f9e56c187c5%3A0x4ae6789c2b9c5baf!2sNarsimha%20Reddy%20Engineering%20College%20(NRCM)!5e0!3m2!1sen!2sin!4v1760937895084!5m2!1sen!2sin";
