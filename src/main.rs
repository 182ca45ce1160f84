#![no_std]
#![no_main]

// Required for ESP-IDF bootloader compatibility
// Use explicit parameters to ensure correct efuse block revision values
esp_bootloader_esp_idf::esp_app_desc!(
    env!("CARGO_PKG_VERSION"),  // version
    env!("CARGO_PKG_NAME"),     // project_name
    "00:00:00",                 // build_time
    "2025-01-01",               // build_date
    "0.0.0",                    // idf_ver (not using IDF)
    0x10000,                    // mmu_page_size (64KB)
    0,                          // min_efuse_blk_rev_full (accept all)
    u16::MAX                    // max_efuse_blk_rev_full (accept all)
);

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use esp_backtrace as _;
use esp_hal::gpio::{Input, InputConfig, Io, Pull};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::interrupt::Priority;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode as SpiMode;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::Blocking;
use esp_rtos::embassy::{Executor, InterruptExecutor};
use static_cell::StaticCell;
use ws2812_spi::Ws2812;

use blink_toggle_firmware::button;
use blink_toggle_firmware::config;
use blink_toggle_firmware::controller::{BlinkConfig, BlinkController};
use blink_toggle_firmware::led::PixelLed;
use blink_toggle_firmware::signal::{EdgeReceiver, EdgeSignal};

/// Type alias for the LED output
type StripLed = PixelLed<Ws2812<Spi<'static, Blocking>>>;

/// Type alias for the controller's end of the edge handoff
type EdgeRx = EdgeReceiver<'static, CriticalSectionRawMutex>;

/// Thread-mode executor (idle)
static EXECUTOR: StaticCell<Executor> = StaticCell::new();

/// Interrupt executor hosting the blink controller, so a posted edge
/// preempts thread-mode work
static CONTROL_EXECUTOR: StaticCell<InterruptExecutor<2>> = StaticCell::new();

/// Backing slot for the button-to-controller edge signal
static EDGE_SIGNAL: StaticCell<EdgeSignal<CriticalSectionRawMutex>> = StaticCell::new();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger(config::logging::LEVEL);

    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Initialise the RTOS scheduler with timer - MUST be done before any async operations
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let blink_config = BlinkConfig::from_build_env().expect("Invalid blink configuration");

    // No degraded mode without the handoff
    let (edge_tx, edge_rx) =
        EdgeSignal::claim(&EDGE_SIGNAL).expect("Failed to allocate edge signal");

    // WS2812 pixel, encoded on SPI2 MOSI
    let spi = Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_khz(config::led::SPI_FREQUENCY_KHZ))
            .with_mode(SpiMode::_0),
    )
    .expect("Failed to configure LED SPI")
    // Keep in sync with config::led::PIN
    .with_mosi(peripherals.GPIO48);
    let led = PixelLed::new(Ws2812::new(spi), config::led::STRIP_LEN);

    // Button: pull-up, interrupt on release
    let mut io = Io::new(peripherals.IO_MUX);
    // Keep in sync with config::button::PIN
    let button_pin = Input::new(peripherals.GPIO0, InputConfig::default().with_pull(Pull::Up));
    button::esp::attach(&mut io, button_pin, edge_tx);

    log::info!(
        "Button on GPIO{}, LED on GPIO{}",
        config::button::PIN,
        config::led::PIN
    );

    let sw_ints = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    let control_executor = CONTROL_EXECUTOR.init(InterruptExecutor::new(sw_ints.software_interrupt2));
    let control_spawner = control_executor.start(Priority::Priority2);
    control_spawner.must_spawn(blink_task(edge_rx, led, blink_config));

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|_spawner| {})
}

/// Task that runs the blink controller
///
/// Waits for button edges with the blink period as timeout and drives the LED.
#[embassy_executor::task]
async fn blink_task(edges: EdgeRx, led: StripLed, config: BlinkConfig) {
    BlinkController::new(edges, led, config).run().await
}
