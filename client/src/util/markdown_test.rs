use super::*;
use crate::content::projects::PROJECTS;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**bold**\n\n- one\n- two");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script>\n\n<div onclick=\"x\">block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("hello"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

#[test]
fn every_project_write_up_renders() {
    for project in PROJECTS {
        let html = render_markdown_html(project.details);
        assert!(html.starts_with('<'), "{} rendered to {html:?}", project.id);
    }
}
