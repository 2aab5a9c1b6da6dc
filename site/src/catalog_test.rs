use std::io::Write as _;

use super::*;

fn record(title: &str) -> ProjectRecord {
    ProjectRecord {
        title: title.to_owned(),
        date: "2024".to_owned(),
        image: "static/images/x.png".to_owned(),
        description: "Something useful.".to_owned(),
        technologies: vec!["Rust".to_owned()],
        demo_link: "https://demo.example.com/x".to_owned(),
        github_link: "https://github.com/example/x".to_owned(),
    }
}

const SAMPLE_YAML: &str = r#"
current:
  - title: Alpha
    date: "2025"
    image: static/images/alpha.png
    description: First.
    technologies: [rust, axum]
    demo-link: https://demo.example.com/alpha
    github-link: https://github.com/example/alpha
  - title: Beta
    date: "2024"
    image: static/images/beta.png
    description: Second.
    technologies: [go]
    demo_link: https://demo.example.com/beta
    github_link: https://github.com/example/beta
archived:
  - title: Gamma
    date: "2019"
    image: static/images/gamma.png
    description: Old.
    technologies: [c]
    demo-link: https://demo.example.com/gamma
    github-link: https://github.com/example/gamma
"#;

// =============================================================
// Built-in dataset
// =============================================================

#[test]
fn builtin_has_ten_current_and_ten_archived() {
    let catalog = ProjectCatalog::builtin();
    assert_eq!(catalog.current_projects().len(), 10);
    assert_eq!(catalog.archived_projects().len(), 10);
    assert_eq!(catalog.len(), 20);
}

fn titles(projects: &[ProjectRecord]) -> Vec<&str> {
    projects.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn builtin_preserves_authored_order() {
    let catalog = ProjectCatalog::builtin();
    assert_eq!(
        titles(catalog.current_projects()),
        [
            "AI-Powered Task Manager",
            "Sustainable Living App",
            "Virtual Reality Fitness",
            "Blockchain Voting System",
            "Augmented Reality Navigation",
            "Smart Home Energy Monitor",
            "Personalized Learning Platform",
            "Quantum Computing Simulator",
            "Decentralized Social Network",
            "Autonomous Drone Delivery",
        ]
    );
    assert_eq!(
        titles(catalog.archived_projects()),
        [
            "Neural Network Visualizer",
            "Cryptocurrency Portfolio Tracker",
            "Remote Team Collaboration Tool",
            "Natural Language Processing API",
            "3D Printing Marketplace",
            "Gesture-Controlled Music Player",
            "Automated Content Moderator",
            "Procedural Landscape Generator",
            "Peer-to-Peer File Sharing",
            "Accessibility Checker Extension",
        ]
    );
}

#[test]
fn builtin_first_record_matches_authored_fields() {
    let first = &ProjectCatalog::builtin().current_projects()[0];
    assert_eq!(first.date, "Oct 2025");
    assert!(first.image.starts_with("https://images.unsplash.com/"));
    assert_eq!(first.technologies, ["React", "Node.js", "TensorFlow.js", "MongoDB"]);
    assert_eq!(first.demo_link, "https://ai-task-manager.example.com");
    assert_eq!(first.github_link, "https://github.com/tanaypd/ai-task-manager");

    let dates: Vec<&str> = ProjectCatalog::builtin()
        .archived_projects()
        .iter()
        .map(|p| p.date.as_str())
        .collect();
    assert_eq!(dates.first(), Some(&"Dec 2024"));
    assert_eq!(dates.last(), Some(&"Mar 2024"));
}

#[test]
fn builtin_records_have_every_field() {
    let catalog = ProjectCatalog::builtin();
    for (section, index, record) in catalog.iter() {
        assert!(!record.title.is_empty(), "{section} #{index} title");
        assert!(!record.date.is_empty(), "{section} #{index} date");
        assert!(!record.image.is_empty(), "{section} #{index} image");
        assert!(!record.description.is_empty(), "{section} #{index} description");
        assert!(!record.demo_link.is_empty(), "{section} #{index} demo link");
        assert!(!record.github_link.is_empty(), "{section} #{index} github link");
        assert!(!record.technologies.is_empty(), "{section} #{index} technologies");
    }
    catalog.validate().unwrap();
}

#[test]
fn builtin_is_shared() {
    assert!(std::ptr::eq(ProjectCatalog::builtin(), ProjectCatalog::builtin()));
}

// =============================================================
// Access
// =============================================================

#[test]
fn get_addresses_records_by_section_and_index() {
    let catalog = ProjectCatalog::new(vec![record("a"), record("b")], vec![record("c")]);
    assert_eq!(catalog.get(Section::Current, 1).unwrap().title, "b");
    assert_eq!(catalog.get(Section::Archived, 0).unwrap().title, "c");
    assert!(catalog.get(Section::Archived, 1).is_none());
}

#[test]
fn iter_walks_current_then_archived() {
    let catalog = ProjectCatalog::new(vec![record("a"), record("b")], vec![record("c")]);
    let order: Vec<_> = catalog
        .iter()
        .map(|(section, index, r)| (section, index, r.title.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (Section::Current, 0, "a"),
            (Section::Current, 1, "b"),
            (Section::Archived, 0, "c"),
        ]
    );
}

#[test]
fn empty_catalog_reports_empty() {
    let catalog = ProjectCatalog::default();
    assert!(catalog.is_empty());
    assert!(catalog.validate().is_ok());
}

#[test]
fn section_slugs_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_slug(section.slug()), Some(section));
    }
    assert_eq!(Section::from_slug("drafts"), None);
    assert_eq!(Section::Archived.to_string(), "archived");
}

// =============================================================
// YAML
// =============================================================

#[test]
fn yaml_accepts_both_link_spellings() {
    let catalog = ProjectCatalog::from_yaml_str(SAMPLE_YAML).unwrap();
    assert_eq!(catalog.current_projects().len(), 2);
    assert_eq!(catalog.archived_projects().len(), 1);
    assert_eq!(catalog.current_projects()[0].demo_link, "https://demo.example.com/alpha");
    assert_eq!(catalog.current_projects()[1].github_link, "https://github.com/example/beta");
    assert_eq!(catalog.current_projects()[0].technologies, vec!["rust", "axum"]);
    catalog.validate().unwrap();
}

#[test]
fn yaml_missing_section_is_empty() {
    let catalog = ProjectCatalog::from_yaml_str("archived: []\n").unwrap();
    assert!(catalog.current_projects().is_empty());
}

#[test]
fn yaml_missing_field_is_rejected() {
    let text = "current:\n  - title: Alpha\n    description: no links\n";
    let err = ProjectCatalog::from_yaml_str(text).unwrap_err();
    assert!(matches!(err, CatalogError::Yaml(_)));
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_YAML.as_bytes()).unwrap();
    let catalog = ProjectCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.archived_projects()[0].title, "Gamma");
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    let err = ProjectCatalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("nope.yaml"));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_reports_first_empty_field() {
    let mut broken = record("b");
    broken.github_link = "  ".to_owned();
    let catalog = ProjectCatalog::new(vec![record("a")], vec![record("c"), broken]);
    let err = catalog.validate().unwrap_err();
    match err {
        CatalogError::EmptyField {
            section,
            index,
            field,
        } => {
            assert_eq!(section, Section::Archived);
            assert_eq!(index, 1);
            assert_eq!(field, "github-link");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_rejects_missing_technologies() {
    let mut broken = record("a");
    broken.technologies.clear();
    let err = ProjectCatalog::new(vec![broken], vec![]).validate().unwrap_err();
    assert_eq!(err.to_string(), "current project #1 has an empty `technologies`");
}

#[test]
fn validate_rejects_blank_technology_tag() {
    let mut broken = record("a");
    broken.technologies.push(String::new());
    assert!(ProjectCatalog::new(vec![broken], vec![]).validate().is_err());
}
