//! Static navigation links.

pub const HOME_PATH: &str = "/";
pub const SETTINGS_PATH: &str = "/create";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Links shown in the navigation bar, in display order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Home",
        href: HOME_PATH,
    },
    NavLink {
        label: "Settings",
        href: SETTINGS_PATH,
    },
];
