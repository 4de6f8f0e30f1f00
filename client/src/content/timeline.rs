//! Career milestones for the "My Journey" section.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

/// Which side of the spine the milestone text sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// CSS modifier class for the milestone row.
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "milestone milestone-left",
            Self::Right => "milestone milestone-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub side: Side,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: 2016,
        title: "Started Coding",
        description: "Began learning Python and web development, creating small automation tools and websites.",
        icon: "🖥️",
        side: Side::Right,
    },
    Milestone {
        year: 2018,
        title: "CompTIA Security+ Certification",
        description: "Earned my first cybersecurity certification and started focusing on network security.",
        icon: "🔒",
        side: Side::Left,
    },
    Milestone {
        year: 2019,
        title: "Built First Homelab",
        description: "Set up my first homelab environment with basic virtualization and network segmentation.",
        icon: "🛠️",
        side: Side::Right,
    },
    Milestone {
        year: 2020,
        title: "First Cybersecurity Role",
        description: "Landed my first professional position in cybersecurity as a SOC analyst.",
        icon: "👨‍💼",
        side: Side::Left,
    },
    Milestone {
        year: 2021,
        title: "Advanced Homelab Upgrade",
        description: "Expanded homelab with Proxmox cluster, enterprise networking, and automated security monitoring.",
        icon: "📊",
        side: Side::Right,
    },
    Milestone {
        year: 2022,
        title: "CISSP Certification",
        description: "Achieved CISSP certification and expanded expertise in security architecture.",
        icon: "🏆",
        side: Side::Left,
    },
    Milestone {
        year: 2023,
        title: "Open Source Contributions",
        description: "Started contributing to open source security tools and released own GitHub projects.",
        icon: "🌐",
        side: Side::Right,
    },
];
