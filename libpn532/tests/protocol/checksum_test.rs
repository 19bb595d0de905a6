use libpn532::protocol::checksum::{crc16a, data_residual, dcs, lcs, length_residual, with_crc16a};

#[test]
fn crc_a_known_vectors() {
    assert_eq!(crc16a(&[]), [0x63, 0x63]);
    assert_eq!(crc16a(&[0x00, 0x00]), [0xA0, 0x1E]);
    assert_eq!(crc16a(&[0x12, 0x34]), [0x26, 0xCF]);
    // HLTA
    assert_eq!(with_crc16a(&[0x50, 0x00]), vec![0x50, 0x00, 0x57, 0xCD]);
}

#[test]
fn checksums_cancel_out() {
    let payload = [0x4A, 0x01, 0x00];
    assert_eq!(data_residual(0xD4, &payload, dcs(0xD4, &payload)), 0);
    assert_eq!(length_residual(&[0x01, 0x2D], lcs(&[0x01, 0x2D])), 0);
    assert_eq!(lcs(&[0x04]), 0xFC);
}
