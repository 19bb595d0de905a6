// libpn532/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Bulk endpoint pair and the interface that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkEndpoints {
    /// Interface number to claim.
    pub interface: u8,
    /// Bulk IN endpoint address.
    pub in_ep: u8,
    /// Bulk OUT endpoint address.
    pub out_ep: u8,
}

/// Inspect the active configuration and return the first interface that
/// exposes both a bulk IN and a bulk OUT endpoint.
pub fn find_bulk_endpoints<T: UsbContext>(device: &Device<T>) -> Option<BulkEndpoints> {
    let config = device.config_descriptor(0).ok()?;

    for interface in config.interfaces() {
        for interface_desc in interface.descriptors() {
            let mut in_ep = None;
            let mut out_ep = None;
            for endpoint_desc in interface_desc.endpoint_descriptors() {
                if endpoint_desc.transfer_type() != TransferType::Bulk {
                    continue;
                }
                match endpoint_desc.direction() {
                    Direction::In if in_ep.is_none() => in_ep = Some(endpoint_desc.address()),
                    Direction::Out if out_ep.is_none() => out_ep = Some(endpoint_desc.address()),
                    _ => {}
                }
            }
            if let (Some(in_ep), Some(out_ep)) = (in_ep, out_ep) {
                return Some(BulkEndpoints {
                    interface: interface_desc.interface_number(),
                    in_ep,
                    out_ep,
                });
            }
        }
    }

    None
}
