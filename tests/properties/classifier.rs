//! Throughput property for import classification.

use std::time::Instant;

use lambda_bundler::domain::services::ImportClassifier;
use lambda_bundler::domain::value_objects::{ImportOrigin, DEFAULT_SHARED_MODULE};

/// Classification is a hash lookup, so even an unoptimized build clears 10k/s easily.
#[test]
fn property_classifier_throughput() {
    let classifier = ImportClassifier::new(DEFAULT_SHARED_MODULE)
        .with_third_party((0..5_000).map(|i| format!("vendor_pkg_{}", i)));
    let modules = [
        "os.path",
        "boto3",
        "vendor_pkg_4999.sub",
        ".helpers",
        "shared_configuration",
        "my_local_module",
    ];

    const ROUNDS: usize = 20_000;
    let started = Instant::now();
    let mut shared = 0usize;
    for i in 0..ROUNDS {
        if classifier.classify(modules[i % modules.len()]) == ImportOrigin::SharedConfig {
            shared += 1;
        }
    }
    let elapsed = started.elapsed().as_secs_f64();

    assert!(shared > 0);
    let per_second = ROUNDS as f64 / elapsed.max(f64::EPSILON);
    assert!(per_second >= 10_000.0, "only {per_second:.0} classifications/s");
}

#[test]
fn classification_priority() {
    let classifier = ImportClassifier::new(DEFAULT_SHARED_MODULE);
    assert_eq!(classifier.classify("os.path"), ImportOrigin::StandardLibrary);
    assert_eq!(classifier.classify("botocore.exceptions"), ImportOrigin::ThirdParty);
    assert_eq!(classifier.classify(".helpers"), ImportOrigin::RelativeImport);
    assert_eq!(classifier.classify(".shared_configuration"), ImportOrigin::SharedConfig);
    assert_eq!(classifier.classify("orders_model"), ImportOrigin::LocalImport);
}
