//! GPIO interrupt binding for the button on ESP32-S3
//!
//! The handler cannot take arguments, so the pin and the edge sender are
//! parked in a critical-section mutex when the button is attached.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use esp_hal::gpio::{Event, Input, Io};
use esp_hal::handler;
use esp_hal::interrupt::Priority;

use super::isr::{on_rising_edge, InterruptPin};
use crate::signal::EdgeSender;

type ButtonSender = EdgeSender<'static, CriticalSectionRawMutex>;

struct ButtonLine {
    pin: Input<'static>,
    edges: ButtonSender,
}

static BUTTON: Mutex<CriticalSectionRawMutex, RefCell<Option<ButtonLine>>> =
    Mutex::new(RefCell::new(None));

impl InterruptPin for Input<'static> {
    fn is_interrupt_set(&self) -> bool {
        Input::is_interrupt_set(self)
    }

    fn clear_interrupt(&mut self) {
        Input::clear_interrupt(self)
    }
}

/// Install the GPIO handler and start listening for rising edges on `pin`.
pub fn attach(io: &mut Io<'_>, mut pin: Input<'static>, edges: ButtonSender) {
    io.set_interrupt_handler(button_interrupt);

    BUTTON.lock(|cell| {
        pin.listen(Event::RisingEdge);
        cell.replace(Some(ButtonLine { pin, edges }));
    });
}

/// Runs above the controller's executor so it preempts every task.
#[handler(priority = Priority::Priority3)]
fn button_interrupt() {
    BUTTON.lock(|cell| {
        if let Some(line) = cell.borrow_mut().as_mut() {
            on_rising_edge(&mut line.pin, &line.edges);
        }
    });
}
