//! Site identity, navigation, and contact configuration.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Who the site belongs to and how to reach them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteIdentity {
    pub owner: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub discord: &'static str,
}

pub const SITE: SiteIdentity = SiteIdentity {
    owner: "Your Name",
    tagline: "Cybersecurity & Homelab Enthusiast",
    email: "your.email@example.com",
    github: "github.com/yourusername",
    discord: "username#1234",
};

/// How the contact form delivers a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactMode {
    /// Hand the message to the visitor's mail client via a `mailto:` link.
    Mailto,
    /// Pretend to send: wait briefly, confirm, and clear the form.
    Simulated,
}

/// Mode used by the contact section embedded on the home page.
pub const HOME_CONTACT_MODE: ContactMode = ContactMode::Mailto;

/// Mode used by the dedicated `/contact` page.
pub const CONTACT_PAGE_MODE: ContactMode = ContactMode::Simulated;

/// A top-level navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/projects", label: "Projects" },
    NavItem { path: "/about", label: "About" },
    NavItem { path: "/homelab", label: "Homelab" },
    NavItem { path: "/contact", label: "Contact" },
];

/// Whether `item_path` should be highlighted while the router is at `current`.
///
/// Home only matches exactly; other items also match their sub-routes, so
/// `/projects/<id>` keeps "Projects" highlighted.
pub fn is_active(current: &str, item_path: &str) -> bool {
    if item_path == "/" {
        return current == "/";
    }
    current == item_path || current.strip_prefix(item_path).is_some_and(|rest| rest.starts_with('/'))
}

/// Calendar year containing `days` days since the Unix epoch (proleptic Gregorian).
pub fn year_from_unix_days(days: i64) -> i64 {
    // Shift to a March-based era so leap days fall at the end of each year.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400;
    if month <= 2 { year + 1 } else { year }
}

/// The current calendar year, for the copyright line.
pub fn current_year() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        i64::from(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        year_from_unix_days(i64::try_from(secs / 86_400).unwrap_or(0))
    }
}
