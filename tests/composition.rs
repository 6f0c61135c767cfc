// Composition tests: tokenizer -> term frequencies -> cosine, end to end.
//
// These run the same chain the binary runs, on in-memory documents, with no
// filesystem access.

use papercheck::similarity::{cosine_similarity, term_frequencies};
use papercheck::tokenize::whitespace::WhitespaceSegmenter;
use papercheck::tokenize::Tokenizer;
use papercheck::Checker;

const ORIGINAL: &str = "今天天气真好，我打算去公园散步，呼吸新鲜空气，享受美好的周末时光。";
const PARAPHRASE: &str = "今天天气真好，我计划去公园散步，呼吸新鲜空气，享受愉快的周末时光。";
const WEEKEND_ORIGINAL: &str =
    "今天天气真好，阳光明媚，我打算去公园散步，呼吸新鲜空气，享受这美好的周末时光。";
const WEEKEND_REWORDED: &str =
    "今天天气很不错，阳光灿烂，我计划去公园走走，呼吸一下新鲜空气，好好享受这个愉快的周末。";
const UNRELATED: &str = "量子计算机利用量子比特进行并行运算，有望突破经典算法的瓶颈。";

// ============================================================
// Checker on real documents
// ============================================================

#[test]
fn paraphrase_scores_above_half() {
    let checker = Checker::default();
    let score = checker.similarity(ORIGINAL, PARAPHRASE);
    assert!(score > 0.5, "Near-paraphrase should score > 0.5, got {score}");
    assert!(score < 1.0, "Reworded text should not be identical, got {score}");
}

#[test]
fn heavily_reworded_paraphrase_scores_above_half() {
    let checker = Checker::default();
    let score = checker.similarity(WEEKEND_ORIGINAL, WEEKEND_REWORDED);
    assert!(score > 0.5, "Reworded paraphrase should score > 0.5, got {score}");
    assert!(score < 0.8, "Most words were changed, got {score}");
}

#[test]
fn anagram_words_do_not_match() {
    let checker = Checker::default();
    let score = checker.similarity("кот ток", "отк тко");
    assert!(score < 1.0, "Anagrams are different words, got {score}");
    assert_eq!(score, 0.0);
}

#[test]
fn unrelated_documents_score_below_threshold() {
    let checker = Checker::default();
    let score = checker.similarity(ORIGINAL, UNRELATED);
    assert!(score < 0.3, "Unrelated documents should score < 0.3, got {score}");
}

#[test]
fn identical_documents_score_one() {
    let checker = Checker::default();
    let text = "有机会的话就去冰岛看看吧";
    let score = checker.similarity(text, text);
    assert!((score - 1.0).abs() < 1e-10, "Got {score}");
}

#[test]
fn punctuation_changes_do_not_matter() {
    let checker = Checker::default();
    let score = checker.similarity(
        "有机会的话，就去冰岛看看吧！",
        "有机会的话就去冰岛看看吧……",
    );
    assert!((score - 1.0).abs() < 1e-10, "Got {score}");
}

#[test]
fn empty_document_scores_zero() {
    let checker = Checker::default();
    assert_eq!(checker.similarity(ORIGINAL, ""), 0.0);
    assert_eq!(checker.similarity("", ORIGINAL), 0.0);
    assert_eq!(checker.similarity("", ""), 0.0);
    assert_eq!(checker.similarity("。，！", ORIGINAL), 0.0);
}

#[test]
fn document_similarity_is_symmetric() {
    let checker = Checker::default();
    let ab = checker.similarity(ORIGINAL, PARAPHRASE);
    let ba = checker.similarity(PARAPHRASE, ORIGINAL);
    assert!((ab - ba).abs() < 1e-12, "{ab} vs {ba}");
}

#[test]
fn repeated_comparisons_are_identical() {
    let checker = Checker::default();
    let first = checker.compare(ORIGINAL, PARAPHRASE);
    for _ in 0..5 {
        assert_eq!(checker.compare(ORIGINAL, PARAPHRASE), first);
    }
}

#[test]
fn compare_reports_consistent_counts() {
    let checker = Checker::default();
    let cmp = checker.compare(ORIGINAL, PARAPHRASE);
    assert!(cmp.original_tokens > 0);
    assert!(cmp.candidate_tokens > 0);
    assert!(cmp.shared_terms > 0);
    assert!(cmp.shared_terms <= cmp.vocabulary);
    assert_eq!(cmp.score, checker.similarity(ORIGINAL, PARAPHRASE));
}

#[test]
fn checker_shared_across_threads() {
    let checker = std::sync::Arc::new(Checker::default());
    let expected = checker.similarity(ORIGINAL, PARAPHRASE);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let checker = checker.clone();
            std::thread::spawn(move || checker.similarity(ORIGINAL, PARAPHRASE))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ============================================================
// Chain: tokenize -> term_frequencies -> cosine
// ============================================================

#[test]
fn manual_chain_matches_checker() {
    let tokenizer = Tokenizer::default();
    let a = term_frequencies(&tokenizer.tokenize(ORIGINAL));
    let b = term_frequencies(&tokenizer.tokenize(PARAPHRASE));
    let manual = cosine_similarity(&a, &b);

    let checker = Checker::default();
    assert_eq!(manual, checker.similarity(ORIGINAL, PARAPHRASE));
}

#[test]
fn worked_example_through_whitespace_tokenizer() {
    let checker = Checker::new(Tokenizer::new(Box::new(WhitespaceSegmenter)));

    let same = checker.similarity("明天 明天 空气 爽", "爽 空气， 明天！ 明天");
    assert!((same - 1.0).abs() < 1e-10, "Got {same}");

    let partial = checker.similarity("西区 共享 食堂", "西区 共享 吃饭");
    assert!((partial - 2.0 / 3.0).abs() < 1e-10, "Got {partial}");
}

#[test]
fn english_documents_with_whitespace_tokenizer() {
    let checker = Checker::new(Tokenizer::new(Box::new(WhitespaceSegmenter)));
    let near = checker.similarity(
        "The quick brown fox jumps over the lazy dog.",
        "The quick brown fox leaps over the lazy dog!",
    );
    let far = checker.similarity(
        "The quick brown fox jumps over the lazy dog.",
        "Compilers translate source programs into machine code.",
    );
    assert!(near > 0.5, "Got {near}");
    assert!(far < 0.3, "Got {far}");
}
