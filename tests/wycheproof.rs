use curve25519::{Error, exchange, verify};

use wycheproof::TestResult;

#[test]
fn test_wycheproof_ed25519() {
    let test_set = wycheproof::eddsa::TestSet::load(wycheproof::eddsa::TestName::Ed25519)
        .expect("bundled ed25519 vectors");

    let mut checked = 0;
    for group in test_set.test_groups {
        let public: [u8; 32] = group.key.pk[..].try_into().expect("32-byte public key");

        for test in group.tests {
            let accepted = verify(&public, &test.msg[..], &test.sig[..]);

            match test.result {
                TestResult::Valid => {
                    assert!(accepted, "tc {} rejected: {}", test.tc_id, test.comment)
                }
                TestResult::Invalid => {
                    assert!(!accepted, "tc {} accepted: {}", test.tc_id, test.comment)
                }
                // Either outcome is allowed.
                TestResult::Acceptable => {}
            }
            checked += 1;
        }
    }

    assert!(checked > 0);
}

#[test]
fn test_wycheproof_x25519() {
    let test_set = wycheproof::xdh::TestSet::load(wycheproof::xdh::TestName::X25519)
        .expect("bundled x25519 vectors");

    let mut checked = 0;
    for group in test_set.test_groups {
        for test in group.tests {
            let (Ok(secret), Ok(public)) = (
                <[u8; 32]>::try_from(&test.private_key[..]),
                <[u8; 32]>::try_from(&test.public_key[..]),
            ) else {
                continue;
            };

            let result = exchange(&secret, &public);

            if test.shared_secret.iter().all(|&b| b == 0) {
                assert_eq!(
                    result,
                    Err(Error::DegenerateSharedSecret),
                    "tc {}: {}",
                    test.tc_id,
                    test.comment
                );
            } else {
                match test.result {
                    TestResult::Valid | TestResult::Acceptable => {
                        assert_eq!(
                            result.as_ref().map(|s| &s[..]),
                            Ok(&test.shared_secret[..]),
                            "tc {}: {}",
                            test.tc_id,
                            test.comment
                        );
                    }
                    TestResult::Invalid => {
                        assert_ne!(
                            result.as_ref().map(|s| &s[..]),
                            Ok(&test.shared_secret[..]),
                            "tc {}: {}",
                            test.tc_id,
                            test.comment
                        );
                    }
                }
            }
            checked += 1;
        }
    }

    assert!(checked > 0);
}
