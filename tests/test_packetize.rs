// Packetizer behavior: block counts, padding, strobe shape, is_last
// placement, and the message round-trip property.

use fixbus_core::framing::{BlockPacketizer, BusConfig, FrameError};
use proptest::prelude::*;

fn packetizer(bits: usize) -> BlockPacketizer {
    BlockPacketizer::new(&BusConfig::new(bits)).unwrap()
}

#[test]
fn default_config_gives_64_byte_blocks() {
    let config = BusConfig::default();
    assert_eq!(config.bus_width_bits, 512);
    assert_eq!(config.block_size(), 64);
}

#[test]
fn invalid_widths_are_rejected() {
    assert_eq!(
        BusConfig::new(0).validate(),
        Err(FrameError::InvalidBusWidth(0))
    );
    assert_eq!(
        BusConfig::new(12).validate(),
        Err(FrameError::InvalidBusWidth(12))
    );
    assert!(BusConfig::new(1 << 30).validate().is_err());
    assert!(BusConfig::new(512).validate().is_ok());
    assert!(BlockPacketizer::new(&BusConfig::new(100)).is_err());
}

#[test]
fn empty_message_yields_no_blocks() {
    assert!(packetizer(512).packetize(b"").is_empty());
}

#[test]
fn short_message_fits_one_padded_block() {
    let p = packetizer(512);
    let blocks = p.packetize(b"hello");

    assert_eq!(blocks.len(), 1);
    let b = &blocks[0];
    assert!(b.is_last);
    assert_eq!(b.data.len(), 64);
    assert_eq!(b.strobe.len(), 64);
    assert_eq!(&b.data[..5], b"hello");
    assert!(b.data[5..].iter().all(|&x| x == 0x00));
    assert!(b.strobe[..5].iter().all(|&x| x == 0xFF));
    assert!(b.strobe[5..].iter().all(|&x| x == 0x00));
    assert_eq!(b.valid_len(), 5);
}

#[test]
fn exact_multiple_has_no_padding() {
    let p = packetizer(512);
    let message = vec![0xAB; 128];
    let blocks = p.packetize(&message);

    assert_eq!(blocks.len(), 2);
    assert!(!blocks[0].is_last);
    assert!(blocks[1].is_last);
    for b in &blocks {
        assert_eq!(b.valid_len(), 64);
        assert!(b.strobe.iter().all(|&x| x == 0xFF));
        assert!(b.data.iter().all(|&x| x == 0xAB));
    }
}

#[test]
fn is_last_set_exactly_once_per_message() {
    let p = packetizer(512);
    let blocks = p.packetize(&vec![7u8; 200]); // 4 blocks

    assert_eq!(blocks.len(), 4);
    let last_flags: Vec<bool> = blocks.iter().map(|b| b.is_last).collect();
    assert_eq!(last_flags, vec![false, false, false, true]);
}

#[test]
fn narrow_bus_packetizes_per_byte() {
    let p = packetizer(8);
    let blocks = p.packetize(b"abc");
    assert_eq!(blocks.len(), 3);
    assert_eq!(&*blocks[1].data, b"b");
    assert_eq!(&*blocks[1].strobe, &[0xFF][..]);
    assert!(blocks[2].is_last);
}

proptest! {
    #[test]
    fn concatenated_valid_bytes_reconstruct_the_message(
        message in proptest::collection::vec(any::<u8>(), 0..800),
        width in prop_oneof![Just(8usize), Just(64), Just(256), Just(512), Just(1024)],
    ) {
        let config = BusConfig::new(width);
        let p = BlockPacketizer::new(&config).unwrap();
        let blocks = p.packetize(&message);

        prop_assert_eq!(blocks.len(), message.len().div_ceil(config.block_size()));

        let mut rebuilt = Vec::new();
        for (i, b) in blocks.iter().enumerate() {
            prop_assert_eq!(b.data.len(), config.block_size());
            prop_assert_eq!(b.strobe.len(), config.block_size());
            prop_assert_eq!(b.is_last, i + 1 == blocks.len());
            rebuilt.extend_from_slice(b.valid_bytes());
        }
        prop_assert_eq!(rebuilt, message);
    }

    #[test]
    fn strobe_is_a_valid_prefix_mask(
        len in 0usize..600,
        width in prop_oneof![Just(64usize), Just(512)],
    ) {
        let config = BusConfig::new(width);
        let p = BlockPacketizer::new(&config).unwrap();
        let message = vec![0x5A; len];

        for b in p.packetize(&message) {
            let k = b.valid_len();
            prop_assert!(b.strobe[..k].iter().all(|&x| x == 0xFF));
            prop_assert!(b.strobe[k..].iter().all(|&x| x == 0x00));
            prop_assert!(b.data[k..].iter().all(|&x| x == 0x00));
        }
    }
}
