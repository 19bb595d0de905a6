// libpn532/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use log::{debug, warn};
use rusb::{Context, Device, DeviceHandle, UsbContext};

use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::{Error, Result};

mod descriptor;
pub use descriptor::{BulkEndpoints, find_bulk_endpoints};

/// Write timeout used for bulk OUT transfers.
const WRITE_TIMEOUT_MS: u64 = 500;

/// Bulk-endpoint transport backed by `rusb`. It claims the interface holding
/// the first bulk IN/OUT endpoint pair and moves raw bytes over it.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    endpoints: BulkEndpoints,
    write_timeout_ms: u64,
}

impl UsbTransport {
    /// Open the first device matching `vendor_id`/`product_id`.
    pub fn open(vendor_id: u16, product_id: u16) -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            if dd.vendor_id() == vendor_id && dd.product_id() == product_id {
                return Self::from_device(&device);
            }
        }

        Err(Error::DeviceNotFound)
    }

    /// Open and claim an already-located device.
    pub fn from_device(device: &Device<Context>) -> Result<Self> {
        let endpoints = find_bulk_endpoints(device).ok_or(Error::DeviceNotFound)?;
        let mut handle = device.open()?;

        // On Linux a kernel driver may own the interface; detach it so the
        // claim below can succeed. A failed detach surfaces as a claim error.
        if let Ok(true) = handle.kernel_driver_active(endpoints.interface) {
            if let Err(e) = handle.detach_kernel_driver(endpoints.interface) {
                warn!("failed to detach kernel driver: {}", e);
            }
        }
        handle.claim_interface(endpoints.interface)?;

        debug!(
            "claimed interface {} (in {:#04x}, out {:#04x})",
            endpoints.interface, endpoints.in_ep, endpoints.out_ep
        );

        Ok(Self {
            handle,
            endpoints,
            write_timeout_ms: WRITE_TIMEOUT_MS,
        })
    }

    /// Endpoints claimed at open.
    pub fn endpoints(&self) -> BulkEndpoints {
        self.endpoints
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let timeout = ms(self.write_timeout_ms);
        let written = self
            .handle
            .write_bulk(self.endpoints.out_ep, data, timeout)?;
        if written != data.len() {
            return Err(Error::Transport(format!(
                "short write: {} of {} bytes",
                written,
                data.len()
            )));
        }
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64, max_len: usize) -> Result<Vec<u8>> {
        let timeout = ms(timeout_ms);
        let mut buf = vec![0u8; max_len];
        match self.handle.read_bulk(self.endpoints.in_ep, &mut buf, timeout) {
            Ok(n) => {
                buf.truncate(n);
                #[cfg(feature = "diagnostics")]
                debug!("bulk in: {}", crate::utils::bytes_to_hex_spaced(&buf));
                Ok(buf)
            }
            Err(rusb::Error::Timeout) => Err(Error::Timeout),
            Err(e) => Err(e.into()),
        }
    }

    fn reset(&mut self) -> Result<()> {
        // Clear a possible stall on both endpoints.
        self.handle.clear_halt(self.endpoints.in_ep)?;
        self.handle.clear_halt(self.endpoints.out_ep)?;
        Ok(())
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        let _ = self.handle.release_interface(self.endpoints.interface);
    }
}
