// libpn532/src/protocol/commands/exchange.rs

use crate::constants::{
    CMD_IN_COMMUNICATE_THRU, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET, CMD_WRITE_REGISTER,
};
use crate::protocol::checksum::with_crc16a;
use crate::types::CardType;

/// Encode InListPassiveTarget (0x4A) for one target of the given type.
pub fn encode_in_list_passive_target(card_type: CardType) -> Vec<u8> {
    let args = card_type.in_list_args();
    let mut buf = Vec::with_capacity(1 + args.len());
    buf.push(CMD_IN_LIST_PASSIVE_TARGET);
    buf.extend_from_slice(args);
    buf
}

/// Encode InDataExchange (0x40). `data` starts with the target number.
pub fn encode_in_data_exchange(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + data.len());
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.extend_from_slice(data);
    buf
}

/// Encode WriteRegister (0x08) for a single register.
pub fn encode_write_register(address: [u8; 2], value: u8) -> Vec<u8> {
    vec![CMD_WRITE_REGISTER, address[0], address[1], value]
}

/// Encode InCommunicateThru (0x42) carrying `data` followed by its CRC_A.
pub fn encode_in_communicate_thru(data: &[u8]) -> Vec<u8> {
    let framed = with_crc16a(data);
    let mut buf = Vec::with_capacity(1 + framed.len());
    buf.push(CMD_IN_COMMUNICATE_THRU);
    buf.extend_from_slice(&framed);
    buf
}
