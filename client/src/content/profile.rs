//! Copy for the about, stats, homelab and contact sections.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::site::SITE;

// =============================================================================
// ABOUT
// =============================================================================

pub const ABOUT_HEADLINE: &str = "Cybersecurity & Network Specialist";

pub const ABOUT_BIO: &[&str] = &[
    "I'm a cybersecurity professional and homelab enthusiast passionate about network security, \
     penetration testing, and building secure infrastructure. With expertise in both offensive and \
     defensive security, I enjoy solving complex security challenges and building robust systems.",
    "My homelab serves as my personal cybersecurity playground where I experiment with network \
     configurations, security tools, and automation. I'm passionate about sharing knowledge and \
     contributing to the security community through open-source projects and documentation.",
];

pub const WHO_AM_I: &str = "I'm a cybersecurity professional and homelab enthusiast with a passion for \
     network security, penetration testing, and building secure infrastructures. With over 5 years of \
     experience in the field, I've helped organizations protect their digital assets through effective \
     security strategies and technical implementations.";

pub const EXPERTISE: &[&str] = &[
    "Network Security & Firewall Configuration",
    "Penetration Testing & Vulnerability Assessment",
    "Cybersecurity Strategy Implementation",
    "Home Lab Architecture & Maintenance",
];

pub const SKILL_CHIPS: &[&str] = &["Python", "Docker", "Kali Linux", "Wireshark", "pfSense", "Network+", "Security+"];

pub const TECHNICAL_SKILLS: &[&str] = &["Network Security", "Penetration Testing", "Python, Bash", "Docker, Kubernetes"];

pub const CERTIFICATIONS: &[&str] = &["CompTIA Security+", "Cisco CCNA", "CEH (Certified Ethical Hacker)", "OSCP (In Progress)"];

pub const PORTRAIT_IMAGE: &str = "https://images.unsplash.com/photo-1568602471122-7832951cc4c5";
pub const WORKSPACE_IMAGE: &str = "https://images.unsplash.com/photo-1531297484001-80022131f5a1";

// =============================================================================
// STATS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "350+", label: "Happy Customer", sublabel: "Satisfaction score of 95%" },
    Stat { value: "410+", label: "Project Done", sublabel: "Across various industries" },
    Stat { value: "88%", label: "Uptime Server", sublabel: "High availability guarantee" },
    Stat { value: "168+", label: "Network Sensor", sublabel: "Global threat monitoring" },
];

// =============================================================================
// HOMELAB
// =============================================================================

pub const HOMELAB_INTRO: &str = "My personal cybersecurity testing environment and network infrastructure lab";

pub const HOMELAB_OVERVIEW: &str = "My homelab is designed to simulate enterprise-grade network environments \
     for security testing, monitoring, and automation. It includes segmented networks, IDS/IPS systems, \
     and multiple VLANs.";

/// `(name, role)` pairs listed under "Key Components".
pub const KEY_COMPONENTS: &[(&str, &str)] = &[
    ("pfsense", "Firewall with IDS/IPS capabilities"),
    ("Cisco", "Managed switches for VLAN segmentation"),
    ("Proxmox", "Virtualization cluster for services and testing"),
    ("Security Stack", "including Suricata, ELK, and Wazuh"),
];

/// A box in the network topology diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopologyNode {
    pub label: &'static str,
    /// Parallax speed: pixels of vertical offset per pixel scrolled.
    pub speed: f64,
    pub tooltip: Option<&'static str>,
    /// Diagram tier, top to bottom.
    pub tier: u8,
}

pub const TOPOLOGY: &[TopologyNode] = &[
    TopologyNode { label: "Internet", speed: 0.05, tooltip: None, tier: 0 },
    TopologyNode { label: "pfsense", speed: 0.08, tooltip: Some("Firewall, VPN, IDS/IPS"), tier: 1 },
    TopologyNode { label: "Switch", speed: 0.12, tooltip: None, tier: 2 },
    TopologyNode { label: "Proxmox", speed: 0.1, tooltip: None, tier: 2 },
    TopologyNode { label: "Kali VM", speed: 0.15, tooltip: None, tier: 3 },
    TopologyNode { label: "NAS", speed: 0.14, tooltip: None, tier: 3 },
    TopologyNode { label: "IOT VLAN", speed: 0.13, tooltip: None, tier: 3 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const HOMELAB_SPECS: &[SpecGroup] = &[
    SpecGroup {
        title: "Networking",
        items: &[
            "pfSense firewall (4-core, 8GB RAM)",
            "Cisco 3750 Switch (24-port Gigabit)",
            "Ubiquiti AP (802.11ac Wave 2)",
            "Segmented VLANs for security isolation",
        ],
    },
    SpecGroup {
        title: "Compute",
        items: &["2x Proxmox Nodes", "64GB RAM per node", "AMD Ryzen CPUs", "10TB Network Storage"],
    },
    SpecGroup {
        title: "Security Tools",
        items: &["Suricata IDS/IPS", "Elastic Stack for SIEM", "Wazuh security monitoring", "Kali Linux VM for testing"],
    },
];

// =============================================================================
// CONTACT
// =============================================================================

pub const CONTACT_INTRO: &str = "Have a question or want to collaborate? Send me a message!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    pub name: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
}

pub const CHANNELS: &[Channel] = &[
    Channel { name: "Email", icon: "✉", value: SITE.email },
    Channel { name: "GitHub", icon: "⌥", value: SITE.github },
    Channel { name: "Discord", icon: "☍", value: SITE.discord },
];
