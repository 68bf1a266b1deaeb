use std::cell::RefCell;
use std::rc::Rc;

use crate::color::{Color, BLACK};
use crate::error::LightError;
use crate::output::PixelSink;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SinkCall {
    Fill(Color),
    Show,
    Release,
}

/// Strip which resides in memory, for dry runs or testing.
///
/// Every call is appended to a journal that can be inspected after the sink
/// itself has been dropped.
pub struct MemorySink {
    pixels: Vec<Color>,
    journal: Rc<RefCell<Vec<SinkCall>>>,
    shown: usize,
}

impl MemorySink {
    pub fn new(pixel_count: usize) -> MemorySink {
        MemorySink {
            pixels: vec![BLACK; pixel_count],
            journal: Rc::new(RefCell::new(Vec::new())),
            shown: 0,
        }
    }

    #[cfg(test)]
    pub fn journal(&self) -> Rc<RefCell<Vec<SinkCall>>> {
        Rc::clone(&self.journal)
    }
}

impl PixelSink for MemorySink {
    fn fill(&mut self, color: Color) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
        self.journal.borrow_mut().push(SinkCall::Fill(color));
    }

    fn show(&mut self) -> Result<(), LightError> {
        self.shown += 1;
        if let Some(pixel) = self.pixels.first() {
            let (r, g, b) = pixel.into_components();
            log::debug!(
                "Frame {}: #{:02X}{:02X}{:02X} on {} pixels",
                self.shown,
                r,
                g,
                b,
                self.pixels.len()
            );
        }
        self.journal.borrow_mut().push(SinkCall::Show);
        Ok(())
    }

    fn release(&mut self) {
        log::debug!("Dry run showed {} frames", self.shown);
        self.journal.borrow_mut().push(SinkCall::Release);
    }
}

/// Colors actually made visible, one per `show`.
#[cfg(test)]
pub fn shown_colors(journal: &[SinkCall]) -> Vec<Color> {
    let mut current = BLACK;
    let mut shown = Vec::new();
    for call in journal {
        match call {
            SinkCall::Fill(color) => current = *color,
            SinkCall::Show => shown.push(current),
            SinkCall::Release => {}
        }
    }
    shown
}
