use libpn532::protocol::commands::{Command, RfItem, SamMode};
use libpn532::protocol::encode_command_frame;
use libpn532::types::CardType;

use crate::common::fixtures;

#[test]
fn configuration_commands() {
    let sam = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0,
    };
    assert_eq!(encode_command_frame(&sam), fixtures::sam_configuration_frame());
    assert_eq!(
        Command::RfConfiguration(RfItem::DEFAULT_RETRIES).encode(),
        fixtures::bytes("32 05 01 00 01")
    );
    assert_eq!(
        Command::RfConfiguration(RfItem::FIELD_OFF).encode(),
        fixtures::bytes("32 01 02")
    );
}

#[test]
fn polling_and_exchange_commands() {
    assert_eq!(
        Command::InListPassiveTarget(CardType::TypeA).encode(),
        fixtures::bytes("4a 01 00")
    );
    assert_eq!(
        Command::InListPassiveTarget(CardType::TypeB).encode(),
        fixtures::bytes("4a 01 03 00")
    );

    let mut apdu = vec![0x01];
    apdu.extend_from_slice(&fixtures::select_aid());
    let encoded = Command::InDataExchange(apdu.clone()).encode();
    assert_eq!(encoded[0], 0x40);
    assert_eq!(&encoded[1..], &apdu[..]);
}

#[test]
fn communicate_thru_appends_crc() {
    assert_eq!(
        Command::InCommunicateThru(vec![0x50, 0x00]).encode(),
        fixtures::bytes("42 50 00 57 cd")
    );
    assert_eq!(
        Command::WriteRegister {
            address: [0x63, 0x3D],
            value: 0x00
        }
        .encode(),
        fixtures::bytes("08 63 3d 00")
    );
}
