use digest256::hash::{Sha256, sha256};

fn one_shot(input: &[u8]) -> [u8; 32] {
    sha256(input).unwrap().to_bytes()
}

fn chunked(input: &[u8], chunk_size: usize) -> [u8; 32] {
    let mut hasher = Sha256::new();

    for chunk in input.chunks(chunk_size) {
        hasher.update(chunk);
    }

    hasher.finalize().unwrap().to_bytes()
}

// -------------------------------------------------------
// 1. EQUIVALENCE WITH THE ONE-SHOT FUNCTION
// -------------------------------------------------------

#[test]
fn stream_matches_one_shot_across_chunkings() {
    let message: Vec<u8> = (0..300).map(|i| (i * 13 % 256) as u8).collect();
    let expected = one_shot(&message);

    for chunk_size in [1, 2, 3, 7, 16, 55, 56, 63, 64, 65, 128, 300] {
        assert_eq!(
            chunked(&message, chunk_size),
            expected,
            "digest diverged for chunk size {}",
            chunk_size,
        );
    }
}

#[test]
fn stream_byte_at_a_time_over_a_sweep() {
    let mut message = Vec::new();

    for len in 0..=130 {
        assert_eq!(
            chunked(&message, 1),
            one_shot(&message),
            "digest diverged at {} bytes",
            len,
        );

        message.push((len * 3 % 256) as u8);
    }
}

#[test]
fn stream_empty_updates_are_neutral() {
    let mut hasher = Sha256::new();

    hasher.update(&[]);
    hasher.update(b"ab");
    hasher.update(&[]);
    hasher.update(b"c");
    hasher.update(&[]);

    assert_eq!(hasher.finalize().unwrap().to_bytes(), one_shot(b"abc"));
}

#[test]
fn stream_default_matches_new() {
    let mut a = Sha256::new();
    let mut b = Sha256::default();

    a.update(b"abc");
    b.update(b"abc");

    assert_eq!(a.finalize().unwrap(), b.finalize().unwrap());
}

// -------------------------------------------------------
// 2. OFFICIAL VECTORS THROUGH THE STREAMING PATH
// -------------------------------------------------------

#[test]
fn stream_abc_vector() {
    let mut hasher = Sha256::new();

    hasher.update(b"a");
    hasher.update(b"b");
    hasher.update(b"c");

    assert_eq!(
        hasher.finalize().unwrap().to_string(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn stream_empty_vector() {
    let hasher = Sha256::new();

    assert_eq!(
        hasher.finalize().unwrap().to_string(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn stream_million_a_vector() {
    let chunk = [b'a'; 1000];
    let mut hasher = Sha256::new();

    for _ in 0..1000 {
        hasher.update(&chunk);
    }

    assert_eq!(
        hasher.finalize().unwrap().to_string(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// 3. BLOCK BOUNDARIES
// -------------------------------------------------------

#[test]
fn stream_updates_straddling_block_boundaries() {
    let message: Vec<u8> = (0..200).map(|i| (i % 256) as u8).collect();
    let expected = one_shot(&message);

    // Split so the second update both completes a buffered block and
    // leaves a fresh remainder.
    for split in [1, 31, 55, 63, 64, 65, 100, 127, 128, 199] {
        let mut hasher = Sha256::new();
        hasher.update(&message[..split]);
        hasher.update(&message[split..]);

        assert_eq!(
            hasher.finalize().unwrap().to_bytes(),
            expected,
            "digest diverged for split at {}",
            split,
        );
    }
}
