// Poll for a Type A card and run a SELECT AID script against it.
//
//   RUST_LOG=debug cargo run -p libpn532 --example poll_and_transact --features usb -- 04cc:2533

use std::time::Instant;

use anyhow::{Context, bail};
use libpn532::prelude::*;
use libpn532::transport::UsbTransport;

const SCRIPT: [(&str, &str); 2] = [
    ("00A4040007A0000002471001", "*"),
    ("00B0000000", "*"),
];

fn parse_ids(arg: &str) -> anyhow::Result<(u16, u16)> {
    let (vid, pid) = arg.split_once(':').context("expected VID:PID")?;
    Ok((u16::from_str_radix(vid, 16)?, u16::from_str_radix(pid, 16)?))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ids = std::env::args().nth(1).unwrap_or_else(|| "04cc:2533".to_string());
    let (vid, pid) = parse_ids(&ids)?;

    println!("Opening controller {:04x}:{:04x}...", vid, pid);
    let transport = UsbTransport::open(vid, pid).context("opening USB device")?;
    let controller = ControllerBuilder::new()
        .with_transport(Box::new(transport))
        .build()?;

    let started = Instant::now();
    let polled = controller.poll_type_a()?;
    for anomaly in &polled.anomalies {
        println!("  warning: {}", anomaly);
    }
    let Some(card) = polled.value else {
        controller.mute()?;
        bail!("no Type A card in the field after {:?}", started.elapsed());
    };

    let info = card.info();
    println!("Found {}", info.target_id);
    println!("  SENS_RES = {}", bytes_to_hex(&info.sense_res));
    println!("  SEL_RES  = {:02x}", info.sel_res);
    println!("  NFCID    = {}", bytes_to_hex(&info.nfc_id));
    println!("  ATS      = {}", bytes_to_hex_spaced(&info.ats));

    let commands: Vec<&str> = SCRIPT.iter().map(|(c, _)| *c).collect();
    let expected: Vec<ExpectedResponse> = SCRIPT
        .iter()
        .map(|(_, e)| e.parse::<ExpectedResponse>())
        .collect::<Result<_>>()?;
    let commands = commands
        .iter()
        .map(|c| parse_hex(c).map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let report = card.transact_report(&commands, &expected);
    for outcome in &report.outcomes {
        match &outcome.response {
            Ok(answer) => println!(
                "{} -> {}",
                bytes_to_hex(&outcome.command),
                bytes_to_hex(answer)
            ),
            Err(e) => println!("{} -> error: {}", bytes_to_hex(&outcome.command), e),
        }
    }
    println!("script {}", if report.passed() { "passed" } else { "failed" });

    controller.mute()?;
    Ok(())
}
