use simdoc_matrix::metrics::{
    cosine_similarity, hamming_distance, hamming_similarity, jaccard_similarity,
    levenshtein_distance, levenshtein_similarity, overlap_coefficient, term_frequencies,
};
use simdoc_matrix::winnowing::Fingerprinter;
use simdoc_matrix::{Document, EngineConfig, MatrixGenerator, Metric};

const LIKE: &str = "I like to read.";
const LOVE: &str = "I love to read.";

fn all_metrics() -> MatrixGenerator {
    MatrixGenerator::new(EngineConfig::default()).unwrap()
}

#[test]
fn test_similar_texts() {
    let words = |t: &'static str| t.split_whitespace();
    assert_eq!(jaccard_similarity(words(LIKE), words(LOVE)), Some(0.6));
    assert_eq!(overlap_coefficient(words(LIKE), words(LOVE)), Some(0.75));
    assert_eq!(
        cosine_similarity(&term_frequencies(words(LIKE)), &term_frequencies(words(LOVE))),
        1.
    );
    assert_eq!(levenshtein_distance(LIKE, LOVE), 2);
    assert!((levenshtein_similarity(LIKE, LOVE) - 0.8667).abs() < 1e-4);
    assert_eq!(hamming_distance(LIKE, LOVE), Ok(2));
    assert!((hamming_similarity(LIKE, LOVE).unwrap() - 0.8667).abs() < 1e-4);
}

#[test]
fn test_similar_texts_in_matrices() {
    let docs = vec![Document::new("1", LIKE), Document::new("2", LOVE)];
    let matrices = all_metrics().generate(&docs).unwrap();
    let score = |m| matrices.get(m).unwrap().get(0, 1);
    assert_eq!(score(Metric::Jaccard), 0.6);
    assert_eq!(score(Metric::Overlap), 0.75);
    assert_eq!(score(Metric::Cosine), 1.);
    assert!((score(Metric::Levenshtein) - 0.8667).abs() < 1e-4);
    assert!((score(Metric::Hamming) - 0.8667).abs() < 1e-4);
    // Four words cannot fill a window of four 3-grams.
    assert_eq!(score(Metric::Winnowing), 0.);
}

#[test]
fn test_identical_texts() {
    let text = "Welcome to Jimbocho, the town of books and curry!";
    let docs = vec![Document::new("1", text), Document::new("2", text)];
    let matrices = all_metrics().generate(&docs).unwrap();
    for matrix in matrices.iter() {
        assert_eq!(matrix.get(0, 1), 1., "{}", matrix.metric());
        assert_eq!(matrix.get(1, 0), 1., "{}", matrix.metric());
    }
    assert_eq!(levenshtein_distance(text, text), 0);
}

#[test]
fn test_disjoint_texts() {
    let docs = vec![
        Document::new("1", "apples oranges bananas"),
        Document::new("2", "cars trucks planes"),
    ];
    let matrices = all_metrics().generate(&docs).unwrap();
    for metric in [Metric::Jaccard, Metric::Overlap, Metric::Cosine] {
        assert_eq!(matrices.get(metric).unwrap().get(0, 1), 0.);
    }
}

#[test]
fn test_winnowing_self_similarity() {
    let fp = Fingerprinter::new(3, 4).unwrap();
    let text = "We welcome you to Jimbocho, the town of books and curry.";
    assert!(!fp.fingerprint(text).is_empty());
    assert_eq!(fp.similarity(text, text), 1.);
    assert_eq!(fp.similarity(text, LIKE), 0.);
}

#[test]
fn test_ranges_and_symmetry() {
    let texts = [
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "During weekends, I like to read books.",
        "I love to read books on Saturday and Sunday.",
        "The research is about similarity calculation.",
    ];
    let docs: Vec<_> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| Document::new(i.to_string(), *t))
        .collect();
    let matrices = all_metrics().generate_in_parallel(&docs).unwrap();
    let symmetric = [
        Metric::Jaccard,
        Metric::Cosine,
        Metric::Overlap,
        Metric::Winnowing,
    ];
    for matrix in matrices.iter() {
        for i in 0..texts.len() {
            assert!(matrix.get(i, i).is_nan());
            for j in 0..texts.len() {
                let score = matrix.get(i, j);
                if i == j || score.is_nan() {
                    continue;
                }
                assert!((0. ..=1.).contains(&score), "{}", matrix.metric());
                if symmetric.contains(&matrix.metric()) {
                    assert_eq!(score, matrix.get(j, i), "{}", matrix.metric());
                }
            }
        }
    }
}

#[test]
fn test_unknown_names_fail_fast() {
    assert!(EngineConfig::from_names("word", "bow", &["cosine", "soundex"]).is_err());
    assert!(EngineConfig::from_names("sentence", "bow", &["cosine"]).is_err());
}
