use std::net::{Ipv4Addr, SocketAddr, UdpSocket};

use rosc::{encoder, OscMessage, OscPacket, OscType};

use crate::color::{scale, Color, PixelOrder};
use crate::config::LightConfig;
use crate::error::LightError;
use crate::output::PixelSink;

const DMX_UNIVERSE_SIZE: usize = 512;

/// Sends the strip as one DMX universe to an OLA daemon, via its OSC plugin.
pub struct OlaOutput {
    sock: UdpSocket,
    target_addr: SocketAddr,
    universe_addr: String,
    buffer: Vec<u8>,
    start_channel: usize,
    pixel_count: usize,
    pixel_order: PixelOrder,
    brightness: f64,
}

impl OlaOutput {
    pub fn new(config: &LightConfig) -> Result<Self, LightError> {
        let start_channel = config.ola.start_channel;
        let needed = start_channel + config.pixel_count * 3;
        if needed > DMX_UNIVERSE_SIZE {
            return Err(LightError::HardwareInit(format!(
                "{} pixels from channel {} do not fit into a {} channel DMX universe",
                config.pixel_count, start_channel, DMX_UNIVERSE_SIZE
            )));
        }

        let our_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0));
        let sock = UdpSocket::bind(our_addr).map_err(|err| {
            LightError::HardwareInit(format!("cannot bind UDP socket for OLA: {}", err))
        })?;

        log::debug!(
            "Sending universe {} to OLA at {}",
            config.ola.universe,
            config.ola.address
        );

        Ok(OlaOutput {
            sock,
            target_addr: config.ola.address,
            universe_addr: format!("/dmx/universe/{}", config.ola.universe),
            buffer: vec![0; DMX_UNIVERSE_SIZE],
            start_channel,
            pixel_count: config.pixel_count,
            pixel_order: config.pixel_order,
            brightness: config.brightness,
        })
    }

    fn encode(&self) -> Result<Vec<u8>, LightError> {
        encoder::encode(&OscPacket::Message(OscMessage {
            addr: self.universe_addr.clone(),
            args: vec![OscType::Blob(self.buffer.clone())],
        }))
        .map_err(|err| LightError::Output(format!("cannot encode OSC packet: {}", err)))
    }
}

impl PixelSink for OlaOutput {
    fn fill(&mut self, color: Color) {
        let values = self.pixel_order.arrange(scale(color, self.brightness));
        let end = self.start_channel + self.pixel_count * 3;
        for pixel in self.buffer[self.start_channel..end].chunks_exact_mut(3) {
            pixel.copy_from_slice(&values);
        }
    }

    fn show(&mut self) -> Result<(), LightError> {
        let msg_buf = self.encode()?;
        self.sock
            .send_to(&msg_buf, self.target_addr)
            .map_err(|err| {
                LightError::Output(format!("cannot reach OLA at {}: {}", self.target_addr, err))
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OlaConfig;
    use std::time::Duration;

    fn listener() -> (UdpSocket, SocketAddr) {
        let sock = UdpSocket::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).unwrap();
        sock.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
        let addr = sock.local_addr().unwrap();
        (sock, addr)
    }

    fn config_for(address: SocketAddr, pixel_count: usize) -> LightConfig {
        LightConfig {
            pixel_count,
            brightness: 1.0,
            pixel_order: PixelOrder::Grb,
            ola: OlaConfig {
                address,
                universe: 3,
                start_channel: 1,
            },
            ..LightConfig::default()
        }
    }

    #[test]
    fn sends_arranged_pixels_as_blob() {
        let (receiver, addr) = listener();
        let mut output = OlaOutput::new(&config_for(addr, 2)).unwrap();

        output.fill(Color::new(10, 20, 30));
        output.show().unwrap();

        let mut buf = [0u8; rosc::decoder::MTU];
        let (len, _) = receiver.recv_from(&mut buf).unwrap();
        let packet = rosc::decoder::decode(&buf[..len]).unwrap();

        match packet {
            OscPacket::Message(msg) => {
                assert_eq!(msg.addr, "/dmx/universe/3");
                match &msg.args[..] {
                    [OscType::Blob(data)] => {
                        assert_eq!(data.len(), DMX_UNIVERSE_SIZE);
                        assert_eq!(&data[..8], &[0, 20, 10, 30, 20, 10, 30, 0]);
                    }
                    other => panic!("unexpected arguments {:?}", other),
                }
            }
            other => panic!("unexpected packet {:?}", other),
        }
    }

    #[test]
    fn applies_brightness_cap() {
        let (_receiver, addr) = listener();
        let mut config = config_for(addr, 1);
        config.brightness = 0.5;
        let mut output = OlaOutput::new(&config).unwrap();

        output.fill(Color::new(200, 100, 50));
        assert_eq!(&output.buffer[1..4], &[50, 100, 25]);
    }

    #[test]
    fn rejects_strips_larger_than_a_universe() {
        let (_receiver, addr) = listener();
        let result = OlaOutput::new(&config_for(addr, 171));
        assert!(matches!(result, Err(LightError::HardwareInit(_))));
    }
}
