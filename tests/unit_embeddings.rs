// Unit tests for embedding tables, providers and mean pooling.

use docvec::embeddings::{mean_pool, EmbeddingProvider, EmbeddingTable, RandomIndexing};
use docvec::text::tokenize;

fn table() -> EmbeddingTable {
    EmbeddingTable::from_text(
        "4 3\n\
         galaxy 1 0 0\n\
         star 0 1 0\n\
         nebula 0 0 1\n\
         dust 1 1 1\n",
    )
    .unwrap()
}

// ============================================================
// mean_pool
// ============================================================

#[test]
fn pooling_without_embedded_tokens_gives_zero_vector() {
    let tokens = tokenize("logistic regression is a statistical model");
    assert_eq!(mean_pool(&tokens, &table(), 3).unwrap(), vec![0.0; 3]);
}

#[test]
fn pooling_empty_document_gives_zero_vector() {
    assert_eq!(mean_pool(&[], &table(), 3).unwrap(), vec![0.0; 3]);
}

#[test]
fn pooling_averages_only_embedded_tokens() {
    let tokens = tokenize("A galaxy of stars: galaxy, star, unknownword.");
    // galaxy x2, star x1 -> (2/3, 1/3, 0)
    let v = mean_pool(&tokens, &table(), 3).unwrap();
    assert!((v[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((v[1] - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(v[2], 0.0);
}

#[test]
fn pooling_rejects_dimension_mismatch() {
    let tokens = tokenize("galaxy");
    assert!(mean_pool(&tokens, &table(), 100).is_err());
}

// ============================================================
// EmbeddingProvider
// ============================================================

#[test]
fn prebuilt_table_is_a_provider() {
    let t = table();
    let trained = t.train(&[tokenize("anything")], 3).unwrap();
    assert_eq!(trained, t);
    assert!(t.train(&[], 5).is_err());
}

#[test]
fn random_indexing_dimension_is_fixed() {
    let corpus = vec![
        tokenize("a galaxy is a system of stars and dust"),
        tokenize("a nebula is a cloud of dust and gas"),
    ];
    let table = RandomIndexing::default().train(&corpus, 24).unwrap();
    assert_eq!(table.dimension(), 24);
    assert!(table.contains("dust"));
    for term in table.terms() {
        assert_eq!(table.get(term).unwrap().len(), 24);
    }
}

#[test]
fn random_indexing_seed_changes_vectors() {
    let corpus = vec![tokenize("x y x y"), tokenize("y x y x")];
    let a = RandomIndexing {
        seed: 1,
        ..RandomIndexing::default()
    }
    .train(&corpus, 40)
    .unwrap();
    let b = RandomIndexing {
        seed: 2,
        ..RandomIndexing::default()
    }
    .train(&corpus, 40)
    .unwrap();
    assert_ne!(a.get("x"), b.get("x"));
}

#[test]
fn random_indexing_pooled_vectors_have_configured_dimension() {
    let corpus = vec![tokenize("gas gas dust"), tokenize("unrelated words only")];
    let table = RandomIndexing::default().train(&corpus, 10).unwrap();
    let pooled_known = mean_pool(&corpus[0], &table, 10).unwrap();
    let pooled_unknown = mean_pool(&corpus[1], &table, 10).unwrap();
    assert_eq!(pooled_known.len(), 10);
    assert!(pooled_known.iter().any(|&v| v != 0.0));
    assert_eq!(pooled_unknown, vec![0.0; 10]);
}

#[test]
fn test_boxed_provider_trains_on_another_thread() {
    let provider: Box<dyn EmbeddingProvider> = Box::new(table());
    let corpus = vec![tokenize("galaxy star")];
    let trained = std::thread::scope(|s| s.spawn(|| provider.train(&corpus, 3)).join().unwrap());
    assert_eq!(trained.unwrap().len(), 4);
}
