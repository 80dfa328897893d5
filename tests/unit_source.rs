// Unit tests for document sources: explicit fetch outcomes, filesystem
// layout, and degradation of failures to empty documents.

use std::fs;

use docvec::source::{
    load_documents, DocumentSource, FetchOutcome, FileDocumentSource, StaticDocumentSource,
};

#[test]
fn fetch_outcome_into_text() {
    assert_eq!(FetchOutcome::Found("text".into()).into_text(), "text");
    assert_eq!(FetchOutcome::missing("offline").into_text(), "");
    assert!(!FetchOutcome::missing("offline").is_found());
}

#[tokio::test]
async fn filesystem_source_reads_language_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("en")).unwrap();
    fs::create_dir_all(dir.path().join("de")).unwrap();
    fs::write(dir.path().join("en/black_hole.txt"), "A black hole.").unwrap();
    fs::write(dir.path().join("de/black_hole.txt"), "Ein Schwarzes Loch.").unwrap();

    let en = FileDocumentSource::new(dir.path(), "en");
    let de = FileDocumentSource::new(dir.path(), "de");

    assert_eq!(
        en.fetch("Black hole").await,
        FetchOutcome::Found("A black hole.".into())
    );
    assert_eq!(
        de.fetch("Black   Hole").await,
        FetchOutcome::Found("Ein Schwarzes Loch.".into())
    );
}

#[tokio::test]
async fn filesystem_source_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileDocumentSource::new(dir.path(), "en");
    match source.fetch("Data mining").await {
        FetchOutcome::Missing { reason } => assert!(reason.contains("data_mining.txt")),
        other => panic!("expected Missing, got {other:?}"),
    }
    assert!(!source.fetch("   ").await.is_found());
}

#[tokio::test]
async fn failed_fetches_become_empty_documents() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("en")).unwrap();
    fs::write(dir.path().join("en/nebula.txt"), "Nebulae are clouds.").unwrap();

    let source = FileDocumentSource::new(dir.path(), "en");
    let topics = vec!["Nebula".to_string(), "Galaxy".to_string()];
    let docs = load_documents(&source, &topics, 4).await;

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].tokens, vec!["nebulae", "are", "clouds"]);
    assert_eq!(docs[1].id, "Galaxy");
    assert!(docs[1].text.is_empty());
    assert!(docs[1].tokens.is_empty());
}

#[tokio::test]
async fn static_source_is_exact_match() {
    let mut source = StaticDocumentSource::default();
    source.insert("Galaxy", "stars");
    assert!(source.fetch("Galaxy").await.is_found());
    assert!(!source.fetch("galaxy").await.is_found());
}
