use super::*;

#[test]
fn four_stats_with_values() {
    assert_eq!(STATS.len(), 4);
    assert!(STATS.iter().all(|s| !s.value.is_empty() && !s.label.is_empty()));
}

#[test]
fn topology_starts_at_internet_and_speeds_are_small() {
    assert_eq!(TOPOLOGY[0].label, "Internet");
    assert!(TOPOLOGY.iter().all(|n| n.speed > 0.0 && n.speed < 0.2));
    assert!(TOPOLOGY.windows(2).all(|w| w[0].tier <= w[1].tier));
}

#[test]
fn only_the_firewall_has_a_tooltip() {
    let with_tooltip: Vec<_> = TOPOLOGY.iter().filter(|n| n.tooltip.is_some()).map(|n| n.label).collect();
    assert_eq!(with_tooltip, vec!["pfsense"]);
}

#[test]
fn spec_groups_have_four_items_each() {
    let titles: Vec<_> = HOMELAB_SPECS.iter().map(|g| g.title).collect();
    assert_eq!(titles, vec!["Networking", "Compute", "Security Tools"]);
    assert!(HOMELAB_SPECS.iter().all(|g| g.items.len() == 4));
}

#[test]
fn channels_reuse_site_identity() {
    assert_eq!(CHANNELS[0].value, SITE.email);
    assert_eq!(CHANNELS.iter().map(|c| c.name).collect::<Vec<_>>(), vec!["Email", "GitHub", "Discord"]);
}

#[test]
fn about_lists_are_populated() {
    assert_eq!(EXPERTISE.len(), 4);
    assert_eq!(CERTIFICATIONS.len(), 4);
    assert!(SKILL_CHIPS.contains(&"Wireshark"));
    assert_eq!(ABOUT_BIO.len(), 2);
}
