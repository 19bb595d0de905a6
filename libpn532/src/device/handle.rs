// libpn532/src/device/handle.rs

use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

use crate::card::CardTarget;
use crate::checked::Checked;
use crate::constants::{ACK_FRAME, REG_BIT_FRAMING};
use crate::device::config::ControllerConfig;
use crate::protocol::codec;
use crate::protocol::validator::read_response;
use crate::protocol::{Command, Frame, Response, RfItem, SamMode};
use crate::transport::Transport;
use crate::types::CardType;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Session before `initialize`.
pub struct Uninitialized;
/// Session ready for polling and exchanges.
pub struct Initialized;

/// Transport owned by a controller.
pub type BoxedTransport = Box<dyn Transport + Send>;

fn poisoned() -> Error {
    Error::Transport("transport lock poisoned".into())
}

fn unexpected(resp: &Response) -> Error {
    Error::IntegrityFault(format!(
        "unexpected response code {:02x}",
        resp.response_code()
    ))
}

/// Controller session that enforces initialization state at compile time.
///
/// Methods take `&self`; the transport sits behind a mutex that is held for
/// a whole cycle (command, ACK, response, host ACK), so exchanges never
/// interleave.
pub struct Controller<State = Uninitialized> {
    transport: Mutex<BoxedTransport>,
    config: ControllerConfig,
    _state: PhantomData<State>,
}

impl<State> Controller<State> {
    /// Settings in effect, after normalization.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Give the transport back, ending the session.
    pub fn into_transport(self) -> Result<BoxedTransport> {
        self.transport.into_inner().map_err(|_| poisoned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BoxedTransport>> {
        self.transport.lock().map_err(|_| poisoned())
    }

    fn transceive_frame(&self, frame: &[u8], timeout_ms: u64) -> Result<Checked<Vec<u8>>> {
        let mut transport = self.lock()?;
        debug!("sending frame {}", bytes_to_hex(frame));
        transport.send(frame)?;
        read_response(&mut **transport, timeout_ms, self.config.read_len)
    }

    fn run(&self, cmd: &Command, timeout_ms: u64) -> Result<Checked<Response>> {
        let code = cmd.command_code();
        self.transceive_frame(&codec::encode_command_frame(cmd), timeout_ms)?
            .and_then(|payload| Response::decode(code, &payload))
    }

    /// Send a command whose answer only matters if the link itself broke.
    fn fire(&self, cmd: &Command, timeout_ms: u64) -> Result<()> {
        match self.transceive_frame(&codec::encode_command_frame(cmd), timeout_ms) {
            Ok(resp) => {
                debug!(
                    "command {:02x} answered {}",
                    cmd.command_code(),
                    bytes_to_hex(&resp.value)
                );
                Ok(())
            }
            Err(e) if e.is_transport() => Err(e),
            Err(e) => {
                warn!("command {:02x} got no usable answer: {}", cmd.command_code(), e);
                Ok(())
            }
        }
    }
}

impl Controller<Uninitialized> {
    /// Create a Controller with default settings from an existing Transport,
    /// e.g. a MockTransport in tests.
    pub fn new_with_transport(transport: BoxedTransport) -> Self {
        Self::with_config(transport, ControllerConfig::default())
    }

    /// Create a Controller with `config`; read and preamble sizes below
    /// their defaults are raised.
    pub fn with_config(transport: BoxedTransport, config: ControllerConfig) -> Self {
        Self {
            transport: Mutex::new(transport),
            config: config.normalized(),
            _state: PhantomData,
        }
    }

    /// Wake the chip and apply the base configuration.
    ///
    /// Only a failed wake-up write is fatal. SAM and RF configuration
    /// failures are logged and the session continues.
    pub fn initialize(self) -> Result<Controller<Initialized>> {
        {
            let mut transport = self.lock()?;
            if let Err(e) = transport.reset() {
                warn!("transport reset failed: {}", e);
            }
            let mut wake = vec![0u8; self.config.preamble_len];
            wake.extend_from_slice(&ACK_FRAME);
            transport.send(&wake)?;
        }
        debug!("wake-up sent");

        self.configure(&Command::SamConfiguration {
            mode: SamMode::Normal,
            timeout: 0,
        });
        self.configure(&Command::RfConfiguration(RfItem::DEFAULT_RETRIES));
        info!("controller initialized");

        Ok(Controller {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        })
    }

    fn configure(&self, cmd: &Command) {
        match self.run(cmd, self.config.exchange_timeout_ms) {
            Ok(resp) => debug!("configured: {:?}", resp.value),
            Err(e) => warn!("configuration {:02x} failed: {}", cmd.command_code(), e),
        }
    }
}

impl Controller<Initialized> {
    /// Frame `payload`, write it and validate the answer.
    pub fn send_and_receive(&self, payload: &[u8], timeout_ms: u64) -> Result<Checked<Vec<u8>>> {
        self.transceive_frame(&Frame::encode(payload), timeout_ms)
    }

    /// Execute a command and return the decoded Response.
    pub fn execute(&self, cmd: &Command) -> Result<Checked<Response>> {
        let timeout_ms = match cmd {
            Command::InListPassiveTarget(_) => self.config.poll_timeout_ms,
            _ => self.config.exchange_timeout_ms,
        };
        self.run(cmd, timeout_ms)
    }

    /// Look for one Type A target. `None` when nothing answered.
    pub fn poll_type_a(&self) -> Result<Checked<Option<CardTarget<'_>>>> {
        debug!("polling type A");
        let Checked { value, anomalies } =
            self.execute(&Command::InListPassiveTarget(CardType::TypeA))?;
        match value {
            Response::InListPassiveTarget(target) => Ok(Checked::with_anomalies(
                target.map(|info| CardTarget::new(self, info)),
                anomalies,
            )),
            other => Err(unexpected(&other)),
        }
    }

    /// Probe for Type B targets. The answer is not interpreted, so the
    /// exchange timeout applies instead of the poll timeout.
    pub fn poll_type_b(&self) -> Result<()> {
        debug!("polling type B");
        self.fire(
            &Command::InListPassiveTarget(CardType::TypeB),
            self.config.exchange_timeout_ms,
        )
    }

    /// InDataExchange with the target addressed by the first payload byte.
    /// Returns the card's answer without echo and status.
    pub fn exchange_data(&self, payload: &[u8]) -> Result<Checked<Vec<u8>>> {
        debug!("exchanging {}", bytes_to_hex(payload));
        let Checked { value, anomalies } =
            self.execute(&Command::InDataExchange(payload.to_vec()))?;
        match value {
            Response::InDataExchange(data) => Ok(Checked::with_anomalies(data, anomalies)),
            other => Err(unexpected(&other)),
        }
    }

    /// Send raw bytes with CRC_A to whatever is in the field. Call after
    /// `poll_type_a`.
    pub fn send_broadcast(&self, payload: &[u8]) -> Result<()> {
        debug!("broadcast {}", bytes_to_hex(payload));
        let timeout_ms = self.config.exchange_timeout_ms;
        self.fire(
            &Command::WriteRegister {
                address: REG_BIT_FRAMING,
                value: 0x00,
            },
            timeout_ms,
        )?;
        self.fire(&Command::InCommunicateThru(payload.to_vec()), timeout_ms)
    }

    /// Switch the RF field off. Call after each polling loop.
    pub fn mute(&self) -> Result<()> {
        debug!("muting");
        self.fire(
            &Command::RfConfiguration(RfItem::FIELD_OFF),
            self.config.exchange_timeout_ms,
        )
    }
}
