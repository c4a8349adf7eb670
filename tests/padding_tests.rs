// tests/padding_tests.rs
use pbe_crypt::core::padding::{pad, padded_len, unpad};
use pbe_crypt::CoreError;

#[test]
fn test_pad_unpad_roundtrip_all_lengths() {
    for block in [8usize, 16, 32] {
        for len in 0..=3 * block {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let padded = pad(&data, block).unwrap();

            assert_eq!(padded.len() % block, 0, "block {block} len {len}");
            assert!(padded.len() > data.len(), "block {block} len {len}");
            assert_eq!(padded.len(), padded_len(len, block).unwrap());
            assert_eq!(unpad(padded), data, "block {block} len {len}");
        }
    }
}

#[test]
fn test_exact_block_gets_full_block_of_padding() {
    let padded = pad(&[0xAA; 16], 16).unwrap();
    assert_eq!(padded.len(), 32);
    assert_eq!(&padded[16..], &[16u8; 16]);
}

#[test]
fn test_padding_bytes_carry_their_count() {
    let padded = pad(b"world", 32).unwrap();
    assert_eq!(padded.len(), 32);
    assert_eq!(&padded[..5], b"world");
    assert!(padded[5..].iter().all(|b| *b == 27));
}

#[test]
fn test_unpad_does_not_validate_padding_bytes() {
    // Only the last byte is trusted
    let buf = vec![1, 2, 3, 4, 9, 9, 9, 3];
    assert_eq!(unpad(buf), vec![1, 2, 3, 4, 9]);
}

#[test]
fn test_unpad_oversized_count_saturates() {
    assert_eq!(unpad(vec![1, 2, 200]), Vec::<u8>::new());
    assert_eq!(unpad(Vec::new()), Vec::<u8>::new());
}

#[test]
fn test_unpad_zero_count_keeps_everything() {
    assert_eq!(unpad(vec![5, 6, 0]), vec![5, 6, 0]);
}

#[test]
fn test_invalid_block_size_is_configuration_error() {
    assert!(matches!(pad(b"x", 0), Err(CoreError::Configuration(_))));
    assert!(matches!(pad(b"x", 256), Err(CoreError::Configuration(_))));
    assert!(pad(b"x", 255).is_ok());
}

#[test]
fn test_padded_len_rejects_same_block_sizes_as_pad() {
    assert!(matches!(padded_len(7, 0), Err(CoreError::Configuration(_))));
    assert!(matches!(padded_len(7, 256), Err(CoreError::Configuration(_))));
    assert_eq!(padded_len(0, 255).unwrap(), 255);
    assert_eq!(padded_len(32, 32).unwrap(), 64);
}
