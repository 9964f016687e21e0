use std::fmt;
use std::str::FromStr;

pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub ceo: &'static str,
    pub phone: &'static str,
    pub phone_link: &'static str,
    pub email: &'static str,
    pub email_link: &'static str,
    pub telegram: &'static str,
    pub telegram_link: &'static str,
    pub instagram: &'static str,
    pub instagram_link: &'static str,
}

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "Falcon Team",
    tagline: "Your Partner in the World of Trucking and Compliance",
    ceo: "Jasur Saynazimov",
    phone: "+1 (773) 832-7323",
    phone_link: "tel:+17738327323",
    email: "info@falcontm.org",
    email_link: "mailto:info@falcontm.org",
    telegram: "@falconteamus",
    telegram_link: "https://t.me/falconteamus",
    instagram: "@falconteam_eld",
    instagram_link: "https://instagram.com/falconteam_eld",
};

pub struct Stat {
    pub key: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { key: "clients", value: 300, suffix: "+" },
    Stat { key: "trucks", value: 1500, suffix: "+" },
    Stat { key: "years", value: 7, suffix: "+" },
    Stat { key: "team", value: 50, suffix: "+" },
];

pub struct Milestone {
    pub year: &'static str,
    pub key: &'static str,
}

pub const TIMELINE: [Milestone; 5] = [
    Milestone { year: "2018", key: "2018" },
    Milestone { year: "2020", key: "2020" },
    Milestone { year: "2021", key: "2021" },
    Milestone { year: "2024", key: "2024" },
    Milestone { year: "2025", key: "2025" },
];

/// The services that have their own detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceKey {
    Eld,
    Safety,
    Ifta,
    Accounting,
}

impl ServiceKey {
    pub const ALL: [ServiceKey; 4] = [
        ServiceKey::Eld,
        ServiceKey::Safety,
        ServiceKey::Ifta,
        ServiceKey::Accounting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKey::Eld => "eld",
            ServiceKey::Safety => "safety",
            ServiceKey::Ifta => "ifta",
            ServiceKey::Accounting => "accounting",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ServiceKey::Eld => "📡",
            ServiceKey::Safety => "🛡️",
            ServiceKey::Ifta => "📄",
            ServiceKey::Accounting => "📊",
        }
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownService(pub String);

impl FromStr for ServiceKey {
    type Err = UnknownService;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        ServiceKey::ALL
            .into_iter()
            .find(|service| service.as_str() == key)
            .ok_or_else(|| UnknownService(key.to_string()))
    }
}

pub struct Platform {
    pub key: &'static str,
    pub name: &'static str,
    pub accent: &'static str,
}

pub const PLATFORMS: [Platform; 2] = [
    Platform {
        key: "sba",
        name: "Clear Path ELD",
        accent: "#00d4ff",
    },
    Platform {
        key: "securePath",
        name: "Secure Path ELD",
        accent: "#a855f7",
    },
];

pub const INTEGRATIONS: [&str; 8] = [
    "Highway",
    "Macropoint",
    "Trucker Tools",
    "Project44",
    "Progressive",
    "TruckerCloud",
    "Terminal",
    "FourKites",
];

/// A keyed card with an emoji icon, used by the clients, values and
/// advantages grids.
#[derive(Debug, PartialEq, Eq)]
pub struct Tile {
    pub key: &'static str,
    pub icon: &'static str,
}

pub const CLIENT_SEGMENTS: &[Tile] = &[
    Tile { key: "ownerOperator", icon: "🚚" },
    Tile { key: "fleet", icon: "🚛" },
    Tile { key: "centralAsian", icon: "🌍" },
];

pub const VALUES: &[Tile] = &[
    Tile { key: "speed", icon: "⏱️" },
    Tile { key: "honesty", icon: "🤝" },
    Tile { key: "responsibility", icon: "🛡️" },
    Tile { key: "innovation", icon: "💡" },
];

pub const ADVANTAGES: &[Tile] = &[
    Tile { key: "support", icon: "🎧" },
    Tile { key: "platforms", icon: "🖥️" },
    Tile { key: "automation", icon: "⚙️" },
    Tile { key: "security", icon: "🔒" },
    Tile { key: "experience", icon: "🏅" },
    Tile { key: "quality", icon: "✅" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_keys_parse_back() {
        for service in ServiceKey::ALL {
            assert_eq!(service.as_str().parse::<ServiceKey>(), Ok(service));
        }
    }

    #[test]
    fn unknown_service_keys_are_rejected() {
        assert_eq!(
            "unknown-key".parse::<ServiceKey>(),
            Err(UnknownService("unknown-key".to_string()))
        );
        assert!("ELD".parse::<ServiceKey>().is_err());
        assert!("".parse::<ServiceKey>().is_err());
    }
}
