// tests/integration/session_flow.rs
use flag_checker::{run_session, Metrics, SecretVerifier, Verdict, VerifierConfig};
use tokio::io::BufReader;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn test_correct_flag_session() {
    init_logger();
    let config = VerifierConfig::default();
    let verifier = SecretVerifier::builtin();
    let metrics = Metrics::new();

    let mock = tokio_test::io::Builder::new().read(b"SKY-REVE-4680\n").build();
    let mut reader = BufReader::new(mock);
    let mut output = Vec::new();

    let verdict = run_session(&verifier, &config, &mut reader, &mut output, &metrics)
        .await
        .unwrap();

    assert_eq!(verdict, Verdict::Correct);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "=== Welcome to the CTF Challenge ===\nEnter the flag: Correct! Here is your reward.\n"
    );
    assert_eq!(
        metrics.report(),
        "attempts: 1, accepted: 1, rejected: 0, invalid_length: 0"
    );
}

#[tokio::test]
async fn test_wrong_flag_session() {
    init_logger();
    let config = VerifierConfig::default();
    let verifier = SecretVerifier::builtin();
    let metrics = Metrics::new();

    let mut input: &[u8] = b"SKY-REVE-4681\r\n";
    let mut output = Vec::new();

    let verdict = run_session(&verifier, &config, &mut input, &mut output, &metrics)
        .await
        .unwrap();

    assert_eq!(verdict, Verdict::Wrong);
    assert!(String::from_utf8(output).unwrap().ends_with("Wrong flag. Try again.\n"));
    assert_eq!(
        metrics.report(),
        "attempts: 1, accepted: 0, rejected: 1, invalid_length: 0"
    );
}

#[tokio::test]
async fn test_short_input_reported_as_wrong() {
    init_logger();
    let config = VerifierConfig::test_config();
    let verifier = config.build_verifier().unwrap();
    let metrics = Metrics::new();

    let mock = tokio_test::io::Builder::new().read(b"test\n").build();
    let mut reader = BufReader::new(mock);
    let mut output = Vec::new();

    let verdict = run_session(&verifier, &config, &mut reader, &mut output, &metrics)
        .await
        .unwrap();

    assert_eq!(verdict, Verdict::Wrong);
    assert_eq!(String::from_utf8(output).unwrap(), "banner\n> nope\n");
    assert_eq!(
        metrics.report(),
        "attempts: 1, accepted: 0, rejected: 0, invalid_length: 1"
    );
}

#[tokio::test]
async fn test_empty_input_session() {
    init_logger();
    let config = VerifierConfig::test_config();
    let verifier = config.build_verifier().unwrap();
    let metrics = Metrics::new();

    let mut input: &[u8] = b"";
    let mut output = Vec::new();

    let verdict = run_session(&verifier, &config, &mut input, &mut output, &metrics)
        .await
        .unwrap();

    assert_eq!(verdict, Verdict::Wrong);
}
