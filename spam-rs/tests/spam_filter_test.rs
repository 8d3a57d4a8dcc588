//! Integration tests for training and evaluating the spam filter

use spam_rs::config::Config;
use spam_rs::spam::{test_document_path, Label, Report, SpamFilter};
use spam_rs::SpamError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HAM_MAILS: &[&str] = &[
    "the meeting is moved to monday",
    "lunch with the team on friday",
    "please review the attached report before the meeting",
    "minutes from the project meeting",
];

const SPAM_MAILS: &[&str] = &[
    "win a free prize now",
    "claim your free casino bonus",
    "free prize winner click now",
    "casino bonus win win win",
];

/// Lay out a workspace with stop words, two training corpora and two test sets
fn setup_workspace(testing_size: usize) -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(root.join("stop-words"), "the a to is on with from your\n").unwrap();
    write_corpus(&root.join("emails/hamtraining"), HAM_MAILS);
    write_corpus(&root.join("emails/spamtraining"), SPAM_MAILS);

    let ham_testing = root.join("emails/hamtesting");
    let spam_testing = root.join("emails/spamtesting");
    fs::create_dir_all(&ham_testing).unwrap();
    fs::create_dir_all(&spam_testing).unwrap();
    for i in 1..=testing_size {
        fs::write(test_document_path(&ham_testing, "hamtesting", i), "team meeting on monday").unwrap();
        fs::write(test_document_path(&spam_testing, "spamtesting", i), "free casino prize").unwrap();
    }

    let mut config = Config::default().with_base_dir(root);
    config.evaluation.testing_size = testing_size;
    (dir, config)
}

fn write_corpus(dir: &Path, documents: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for (i, body) in documents.iter().enumerate() {
        fs::write(dir.join(format!("{:03}.txt", i)), body).unwrap();
    }
}

#[test]
fn test_train_builds_both_distributions() {
    let (_dir, config) = setup_workspace(1);
    let filter = SpamFilter::train(&config).unwrap();

    // "meeting" appears three times in ham: 1 + 3
    assert_eq!(filter.ham().get("meeting"), Some(4));
    assert_eq!(filter.spam().get("free"), Some(4));
    assert!(!filter.ham().contains("the"));
    assert!(filter.ham().len() <= config.classifier.top_k);
}

#[test]
fn test_evaluate_both_test_sets() {
    let (_dir, config) = setup_workspace(5);
    let filter = SpamFilter::train(&config).unwrap();

    let evaluation = filter
        .evaluate(&config.paths.ham_testing, &config.paths.spam_testing, &config.evaluation)
        .unwrap();

    assert_eq!(evaluation.spam.expected, Label::Spam);
    assert_eq!(evaluation.spam.total(), 5);
    assert_eq!(evaluation.spam.ratio(), 100.0);
    assert_eq!(evaluation.ham.ratio(), 100.0);

    let report = Report::new(&evaluation).to_string();
    assert!(report.contains("Spam ratio: 100.0"));
    assert!(report.contains("Test result 5 = Correct"));
}

#[test]
fn test_verdict_for_single_document() {
    let (dir, config) = setup_workspace(1);
    let filter = SpamFilter::train(&config).unwrap();

    let mail = dir.path().join("incoming.txt");
    fs::write(&mail, "win a casino bonus").unwrap();
    let verdict = filter.verdict(&mail).unwrap();
    assert!(verdict.is_spam);
    assert_eq!(verdict.label(), Label::Spam);

    fs::write(&mail, "the report for monday").unwrap();
    assert!(!filter.is_spam(&mail).unwrap());
}

#[test]
fn test_small_top_k_truncates() {
    let (_dir, mut config) = setup_workspace(1);
    config.classifier.top_k = 3;

    let filter = SpamFilter::train(&config).unwrap();
    assert_eq!(filter.ham().len(), 3);
    assert_eq!(filter.spam().len(), 3);
    // The most frequent words survive
    assert!(filter.ham().contains("meeting"));
    assert!(filter.spam().contains("win"));
}

#[test]
fn test_missing_stop_words_fails() {
    let (dir, config) = setup_workspace(1);
    fs::remove_file(dir.path().join("stop-words")).unwrap();

    match SpamFilter::train(&config) {
        Err(SpamError::Read { path, .. }) => assert!(path.ends_with("stop-words")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("training should fail without stop words"),
    }
}

#[test]
fn test_empty_corpus_fails() {
    let (dir, config) = setup_workspace(1);
    let spam_training = dir.path().join("emails/spamtraining");
    fs::remove_dir_all(&spam_training).unwrap();
    fs::create_dir(&spam_training).unwrap();

    assert!(matches!(
        SpamFilter::train(&config),
        Err(SpamError::EmptyCorpus(path)) if path == spam_training
    ));
}

#[test]
fn test_missing_test_document_fails() {
    let (dir, mut config) = setup_workspace(2);
    config.evaluation.testing_size = 3;
    let filter = SpamFilter::train(&config).unwrap();

    let err = filter
        .evaluate(&config.paths.ham_testing, &config.paths.spam_testing, &config.evaluation)
        .unwrap_err();
    match err {
        SpamError::Read { path, .. } => {
            assert_eq!(path, test_document_path(&dir.path().join("emails/spamtesting"), "spamtesting", 3))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_config_file_round_trip() {
    let (dir, config) = setup_workspace(1);
    let path = dir.path().join("spam-rs.toml");
    fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.paths.ham_training, config.paths.ham_training);
    assert_eq!(loaded.evaluation.testing_size, 1);
}
