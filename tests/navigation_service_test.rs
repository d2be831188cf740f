//! Tests for NavigationService: loading, route checks and export

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use sidenav::application::services::NavigationService;
use sidenav::application::{ApplicationError, DescriptorFormat};
use sidenav::config::Settings;
use sidenav::domain::{dashboard, DomainError, Location, NavError};
use sidenav::infrastructure::di::ServiceContainer;
use sidenav::infrastructure::traits::{FileSystem, RealFileSystem};
use sidenav::util::testing;

const APPS_JSON: &str = r#"[
  { "title": "Home", "to": "home", "icon": { "icon": "bx-home" } },
  {
    "title": "Apps",
    "children": [
      { "title": "Email", "to": "apps-email" },
      { "title": "Chat", "to": "apps-chat" }
    ],
    "badgeContent": "3",
    "badgeClass": "bg-primary"
  }
]"#;

const APPS_TOML: &str = r#"
[[groups]]
title = "Home"
to = "home"

[groups.icon]
icon = "bx-home"

[[groups]]
title = "Apps"
badgeContent = "3"
badgeClass = "bg-primary"

[[groups.children]]
title = "Email"
to = "apps-email"

[[groups.children]]
title = "Chat"
to = "apps-chat"
"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn service() -> NavigationService {
    testing::init_test_setup();
    NavigationService::new(Arc::new(RealFileSystem))
}

/// In-memory filesystem double.
#[derive(Default)]
struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    fn with_file(path: &str, content: &str) -> Self {
        let fs = Self::default();
        fs.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        fs
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

// ============================================================
// Loading
// ============================================================

#[test]
fn given_json_and_toml_descriptors_when_loading_then_same_tree() {
    let temp = TempDir::new().unwrap();
    let json = write_file(&temp, "nav.json", APPS_JSON);
    let toml = write_file(&temp, "nav.toml", APPS_TOML);

    let svc = service();
    let from_json = svc.load(&json).unwrap();
    let from_toml = svc.load(&toml).unwrap();

    assert_eq!(from_json, from_toml);
    assert_eq!(from_json.len(), 2);
    assert_eq!(from_json.groups()[1].children().len(), 2);
}

#[test]
fn given_invalid_descriptor_when_loading_then_navigation_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "nav.json",
        r#"[{ "title": "Home", "to": "home", "children": [{ "title": "A", "to": "a" }] }]"#,
    );

    let err = service().load(&path).unwrap_err();

    match err {
        ApplicationError::Domain(DomainError::Navigation(nav)) => {
            assert_eq!(nav.location(), Location::Group(0))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn given_missing_file_when_loading_then_file_not_found() {
    let temp = TempDir::new().unwrap();
    let err = service().load(&temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ApplicationError::FileNotFound(_)));
}

#[test]
fn given_unknown_extension_when_loading_then_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "nav.yaml", "- title: Home\n");
    let err = service().load(&path).unwrap_err();
    assert!(matches!(err, ApplicationError::UnsupportedFormat(_)));
}

#[test]
fn given_no_path_when_loading_or_builtin_then_dashboard_tree() {
    let tree = service().load_or_builtin(None).unwrap();
    assert_eq!(&*tree, dashboard().unwrap());
}

#[test]
fn given_no_path_when_loading_or_builtin_twice_then_same_shared_tree() {
    let svc = service();
    let first = svc.load_or_builtin(None).unwrap();
    let second = svc.load_or_builtin(None).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn given_single_group_object_when_loading_then_parse_error_not_empty_tree() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "nav.json", r#"{ "title": "Home", "to": "home" }"#);

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::Parse { .. }), "{}", err);
}

#[test]
fn given_toml_with_misspelled_badge_key_when_loading_then_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "nav.toml",
        "[[groups]]\ntitle = \"Home\"\nto = \"home\"\nbadge_content = \"New\"\n",
    );

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::Parse { .. }), "{}", err);
    assert!(err.to_string().contains("badge_content"), "{}", err);
}

#[test]
fn given_memory_filesystem_when_loading_then_reads_through_trait() {
    let fs = Arc::new(MemoryFileSystem::with_file("/nav/apps.json", APPS_JSON));
    let svc = NavigationService::new(fs);

    let tree = svc.load(Path::new("/nav/apps.json")).unwrap();

    assert_eq!(tree.groups()[0].route(), Some("home"));
}

// ============================================================
// Route checks
// ============================================================

#[test]
fn given_registry_missing_one_route_when_checking_then_reports_it() {
    let temp = TempDir::new().unwrap();
    let nav = write_file(&temp, "nav.json", APPS_JSON);
    let registry = write_file(&temp, "routes.txt", "# app routes\nhome\napps-email\n");

    let svc = service();
    let tree = svc.load(&nav).unwrap();
    let report = svc.check_routes(&tree, &registry).unwrap();

    assert_eq!(report.checked, 3);
    assert_eq!(report.unknown.len(), 1);
    assert_eq!(report.unknown[0].route, "apps-chat");
    assert_eq!(report.unknown[0].location, Location::Child { group: 1, child: 1 });
    assert!(matches!(
        report.into_result(),
        Err(DomainError::UnknownRoutes(_))
    ));
}

#[test]
fn given_toml_registry_with_all_routes_when_checking_builtin_then_ok() {
    let temp = TempDir::new().unwrap();
    let registry = write_file(
        &temp,
        "routes.toml",
        "routes = [\"dashboards-analytics\", \"dashboards-crm\", \"dashboards-ecommerce\"]\n",
    );

    let svc = service();
    let report = svc.check_routes(dashboard().unwrap(), &registry).unwrap();

    assert!(report.is_ok());
    assert_eq!(report.checked, 3);
}

// ============================================================
// Export
// ============================================================

#[test]
fn given_tree_when_written_then_reloads_equal() {
    let fs = Arc::new(MemoryFileSystem::default());
    let svc = NavigationService::new(fs.clone());
    let tree = dashboard().unwrap();

    svc.write(tree, Path::new("/out/nav.toml")).unwrap();
    let reloaded = svc.load(Path::new("/out/nav.toml")).unwrap();

    assert!(fs.is_file(Path::new("/out/nav.toml")));
    assert_eq!(&reloaded, tree);
}

#[test]
fn given_toml_format_when_exporting_then_groups_array_of_tables() {
    let text = service()
        .export(dashboard().unwrap(), DescriptorFormat::Toml)
        .unwrap();
    assert!(text.contains("[[groups]]"), "{}", text);
    assert!(text.contains("badgeClass = \"bg-error\""), "{}", text);
}

// ============================================================
// Container wiring
// ============================================================

#[test]
fn given_container_with_memory_fs_when_loading_then_uses_injected_fs() {
    let fs = Arc::new(MemoryFileSystem::with_file("/nav.json", APPS_JSON));
    let container = ServiceContainer::with_deps(Settings::default(), fs);

    let tree = container
        .navigation
        .load_or_builtin(Some(Path::new("/nav.json")))
        .unwrap();

    assert_eq!(tree.len(), 2);
    assert!(container.settings.strict_routes);
}

#[test]
fn given_local_config_in_memory_fs_when_loading_settings_then_read_through_trait() {
    let fs = MemoryFileSystem::with_file("/proj/.sidenav.toml", "strict_routes = false\nformat = \"toml\"\n");

    let settings = Settings::load_with(&fs, Some(Path::new("/proj")), None).unwrap();

    assert!(!settings.strict_routes);
    assert_eq!(settings.format, DescriptorFormat::Toml);
}

#[test]
fn given_shape_error_when_displayed_then_mentions_location() {
    let err = ApplicationError::from(NavError::Shape {
        location: Location::Child { group: 1, child: 0 },
        rule: sidenav::domain::ShapeRule::MissingRoute,
    });
    assert_eq!(
        err.to_string(),
        "invalid navigation descriptor: shape error at group 1, child 0: route is missing or empty"
    );
}
