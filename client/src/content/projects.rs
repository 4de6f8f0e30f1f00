//! Portfolio projects and the lookups the project pages need.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// A portfolio entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    /// URL slug used by `/projects/:id`.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    /// External repository or demo link.
    pub link: &'static str,
    /// Long-form write-up in Markdown.
    pub details: &'static str,
}

impl Project {
    /// In-site link to this project's detail page.
    pub fn detail_href(&self) -> String {
        format!("/projects/{}", self.id)
    }

    /// The project's primary category: its first tag.
    pub fn kind(&self) -> &'static str {
        self.tags.first().copied().unwrap_or("Project")
    }

    /// Whether the two projects have at least one tag in common.
    pub fn shares_tag_with(&self, other: &Project) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }
}

/// Maximum number of related projects listed under a detail page.
pub const RELATED_LIMIT: usize = 3;

/// Shown in every detail page's information sidebar.
pub const PROJECT_STATUS: &str = "Active Development";
pub const PROJECT_LAST_UPDATED: &str = "June 2023";

/// `(icon, text)` bullets shown under "Key Features".
pub const KEY_FEATURES: &[(&str, &str)] = &[
    ("🔒", "Advanced security mechanisms with encryption and authentication"),
    ("⑂", "Open-source architecture with clear documentation and API references"),
    ("🖧", "Highly scalable infrastructure with cloud deployment options"),
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "secure-network-monitor",
        title: "Secure Network Monitor",
        description: "A Python-based tool for monitoring network traffic and detecting anomalies using machine learning algorithms.",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b",
        tags: &["Python", "Machine Learning", "Network Security"],
        link: "#",
        details: "Captures flows from a mirrored switch port and scores them with an \
                  **isolation forest** trained on a week of baseline traffic.\n\n\
                  - Streams NetFlow v9 and raw pcap\n\
                  - Alerts are pushed to the SIEM over syslog\n\
                  - Models retrain nightly from the last seven days",
    },
    Project {
        id: "docker-security-scanner",
        title: "Docker Security Scanner",
        description: "An automated tool to scan Docker containers for vulnerabilities and security misconfigurations.",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6",
        tags: &["Docker", "Security", "Bash", "CI/CD"],
        link: "#",
        details: "Runs in CI on every image push. Layers are unpacked and checked against \
                  the CVE feed, and the Dockerfile is linted for risky patterns such as \
                  running as `root` or fetching unpinned packages.\n\n\
                  A failing scan blocks the merge and posts a summary on the pull request.",
    },
    Project {
        id: "home-intrusion-detection",
        title: "Home Intrusion Detection",
        description: "A Raspberry Pi based IDS/IPS system designed for home networks with real-time alerts and logging.",
        image: "https://images.unsplash.com/photo-1531297484001-80022131f5a1",
        tags: &["Raspberry Pi", "IDS/IPS", "Python", "Linux"],
        link: "#",
        details: "Suricata on a Raspberry Pi 4 sits inline between the ISP router and the \
                  home switch.\n\n\
                  1. Emerging Threats rules refresh daily\n\
                  2. Alerts fan out to a phone via a small Python notifier\n\
                  3. Logs ship to the homelab ELK stack for retention",
    },
    Project {
        id: "password-vault",
        title: "Password Vault",
        description: "Secure, encrypted password manager with zero-knowledge architecture and 2FA integration.",
        image: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7",
        tags: &["Encryption", "JavaScript", "Security"],
        link: "#",
        details: "Secrets are encrypted client-side with a key derived from the master \
                  password, so the server only ever stores ciphertext.\n\n\
                  TOTP second factors are required for every new device.",
    },
    Project {
        id: "network-topology-visualizer",
        title: "Network Topology Visualizer",
        description: "Tool to automatically map and visualize your network infrastructure with security insights.",
        image: "https://images.unsplash.com/photo-1581090464777-f3220bbe1b8b",
        tags: &["Network", "Visualization", "Python"],
        link: "#",
        details: "Walks SNMP and LLDP neighbour tables to build a live graph of the network, \
                  then highlights hosts with open management ports or outdated firmware.",
    },
    Project {
        id: "secure-api-gateway",
        title: "Secure API Gateway",
        description: "A custom API gateway with advanced security features like rate limiting and JWT auth.",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085",
        tags: &["API", "Authentication", "Node.js"],
        link: "#",
        details: "Fronts the homelab's internal services. Requests are authenticated with \
                  short-lived JWTs and throttled per client with a token bucket.\n\n\
                  | Limit | Value |\n|---|---|\n| Burst | 20 |\n| Sustained | 5 req/s |",
    },
];

/// Look up a project by its URL slug.
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Other projects sharing at least one tag with `project`, in list order, at most `limit`.
pub fn related_projects(project: &Project, limit: usize) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.id != project.id && p.shares_tag_with(project))
        .take(limit)
        .collect()
}

/// What the detail route should do for a requested id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailRoute {
    Show(&'static Project),
    /// Unknown or missing id: replace the history entry with this path.
    Redirect(&'static str),
}

/// Where unknown project ids are sent.
pub const PROJECTS_PATH: &str = "/projects";

pub fn resolve_detail(id: Option<&str>) -> DetailRoute {
    id.and_then(find_project).map_or(DetailRoute::Redirect(PROJECTS_PATH), DetailRoute::Show)
}
