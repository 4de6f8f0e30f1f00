use super::*;

#[test]
fn project_ids_are_unique() {
    for (i, a) in PROJECTS.iter().enumerate() {
        assert!(PROJECTS[i + 1..].iter().all(|b| b.id != a.id), "duplicate id {}", a.id);
    }
}

#[test]
fn every_detail_link_resolves_to_exactly_one_project() {
    for project in PROJECTS {
        let href = project.detail_href();
        let id = href.strip_prefix("/projects/").expect("detail href prefix");
        assert_eq!(PROJECTS.iter().filter(|p| p.id == id).count(), 1);
        assert_eq!(resolve_detail(Some(id)), DetailRoute::Show(project));
    }
}

#[test]
fn ids_are_url_safe_slugs() {
    for project in PROJECTS {
        assert!(!project.id.is_empty());
        assert!(project.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }
}

#[test]
fn unknown_id_redirects_to_listing() {
    assert_eq!(resolve_detail(Some("does-not-exist")), DetailRoute::Redirect("/projects"));
    assert_eq!(resolve_detail(Some("")), DetailRoute::Redirect("/projects"));
    assert_eq!(resolve_detail(None), DetailRoute::Redirect("/projects"));
}

#[test]
fn related_projects_share_a_tag_and_exclude_self() {
    let monitor = find_project("secure-network-monitor").expect("known project");
    let related = related_projects(monitor, RELATED_LIMIT);
    let ids: Vec<_> = related.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["home-intrusion-detection", "network-topology-visualizer"]);
}

#[test]
fn related_projects_respect_limit() {
    let monitor = find_project("secure-network-monitor").expect("known project");
    assert_eq!(related_projects(monitor, 1).len(), 1);
    assert!(related_projects(monitor, 0).is_empty());
    for project in PROJECTS {
        assert!(related_projects(project, RELATED_LIMIT).len() <= RELATED_LIMIT);
    }
}

#[test]
fn project_without_overlap_has_no_related() {
    let gateway = find_project("secure-api-gateway").expect("known project");
    assert!(related_projects(gateway, RELATED_LIMIT).is_empty());
}

#[test]
fn kind_is_first_tag() {
    let vault = find_project("password-vault").expect("known project");
    assert_eq!(vault.kind(), "Encryption");
}
