//! Migration scope analysis over real directories

use flkit::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LOGIN_CONTROLLER: &str = r#"
final class LoginViewController: UIViewController {
    let stack = UIStackView()

    override func viewDidLoad() {
        stack.addArrangedSubview(emailField)
        stack.addArrangedSubview(passwordField)
    }
}
"#;

const FEED_CELL: &str = r#"
final class FeedCell: UITableViewCell {
    func setup() {
        NSLayoutConstraint.activate([
            avatar.topAnchor.constraint(equalTo: contentView.topAnchor, constant: 8),
            avatar.leadingAnchor.constraint(equalTo: contentView.leadingAnchor, constant: 16)
        ])
    }
}
"#;

fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App/Login/LoginViewController.swift", LOGIN_CONTROLLER);
    write(dir.path(), "App/Feed/FeedCell.swift", FEED_CELL);
    write(dir.path(), "App/README.md", "NSLayoutConstraint.activate([])");
    write(dir.path(), "Pods/SnapKit/Constraint.swift", FEED_CELL);
    write(dir.path(), ".build/Generated.swift", FEED_CELL);
    dir
}

#[test]
fn test_project_scan_skips_vendored_and_hidden_dirs() {
    let dir = project();
    let analysis =
        analyze_migration_scope(&MigrationInput::Project(dir.path().to_path_buf()), OutputFormat::Json)
            .unwrap();

    let paths: Vec<&str> = analysis.guide.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("FeedCell.swift"));
    assert!(paths[1].ends_with("LoginViewController.swift"));
    assert!(paths.iter().all(|p| !p.contains("Pods")));

    let feed = &analysis.guide.files[0];
    assert_eq!(feed.constraint_blocks, 1);
    assert_eq!(feed.anchor_constraints, 2);

    let login = &analysis.guide.files[1];
    assert_eq!(login.stack_views, 1);
    assert_eq!(login.arranged_subviews, 2);

    assert_eq!(analysis.guide.complexity, Complexity::Low);
    assert_eq!(analysis.guide.estimated_effort, "2-4 days");
}

#[test]
fn test_recommendations_from_project() {
    let dir = project();
    let analysis = analyze_migration_scope(
        &MigrationInput::Project(dir.path().to_path_buf()),
        OutputFormat::Markdown,
    )
    .unwrap();

    let recommendations = &analysis.guide.recommendations;
    assert_eq!(recommendations[0], "Start with view controllers that use simple layouts");
    assert_eq!(
        recommendations[1],
        "Migrate UIStackView usage first as it maps well to StackFrameLayout"
    );
    assert!(recommendations
        .iter()
        .any(|r| r.ends_with("LoginViewController.swift: Good candidate for migration")));
    assert!(!recommendations.iter().any(|r| r.contains("FeedCell")));
}

#[test]
fn test_markdown_guide() {
    let dir = project();
    let analysis = analyze_migration_scope(
        &MigrationInput::Project(dir.path().to_path_buf()),
        OutputFormat::Markdown,
    )
    .unwrap();

    assert!(analysis.rendered.starts_with("# FrameLayoutKit Migration Guide"));
    assert!(analysis.rendered.contains("- **Files to migrate:** 2"));
    assert!(analysis.rendered.contains("- **Complexity:** low"));
    assert!(analysis
        .rendered
        .contains("1. Start with view controllers that use simple layouts"));
}

#[test]
fn test_file_list_with_missing_file() {
    let dir = TempDir::new().unwrap();
    let cell = write(dir.path(), "FeedCell.swift", FEED_CELL);
    let missing = dir.path().join("Missing.swift");

    let analysis =
        analyze_migration_scope(&MigrationInput::Files(vec![cell, missing]), OutputFormat::Html)
            .unwrap();

    assert_eq!(analysis.guide.file_count, 2);
    assert_eq!(analysis.guide.files[1].score(), 0);
    assert!(analysis.rendered.contains("FeedCell.swift"));
}

#[test]
fn test_missing_project_dir_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = analyze_migration_scope(
        &MigrationInput::Project(dir.path().join("nope")),
        OutputFormat::Markdown,
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_json_guide_round_trips() {
    let dir = project();
    let analysis =
        analyze_migration_scope(&MigrationInput::Project(dir.path().to_path_buf()), OutputFormat::Json)
            .unwrap();

    let parsed: MigrationGuide = serde_json::from_str(&analysis.rendered).unwrap();
    assert_eq!(parsed, analysis.guide);
}
