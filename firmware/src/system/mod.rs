pub use stm32h7xx_hal as hal;

use hal::gpio::{Edge, ErasedPin, ExtiPin, Input, Output, PushPull};
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::time::Hertz;
use systick_monotonic::Systick;
use tri_blink_control::{Levels, CHANNELS};

/// Button pin with an internal pull-up, shorted to the ground when pressed.
///
/// Its EXTI line is served by the `EXTI9_5` interrupt.
pub type Button = hal::gpio::gpiob::PB8<Input>;

pub struct System {
    pub mono: Systick<1000>,
    pub button: Button,
    pub indicators: Indicators,
    pub system_clock: Hertz,
}

impl System {
    /// Initialize system abstraction.
    ///
    /// All indicators are left dark. The button interrupt is configured and
    /// enabled, with any pending request cleared.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, mut dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let system_clock = ccdr.clocks.sys_ck();

        let indicators = Indicators::new([
            pins.GPIO.PIN_B5.into_push_pull_output().erase(),
            pins.GPIO.PIN_B6.into_push_pull_output().erase(),
            pins.GPIO.PIN_C10.into_push_pull_output().erase(),
        ]);

        let mut button = pins.GPIO.PIN_B7.into_pull_up_input();
        button.make_interrupt_source(&mut dp.SYSCFG);
        button.trigger_on_edge(&mut dp.EXTI, Edge::Falling);
        button.clear_interrupt_pending_bit();
        button.enable_interrupt(&mut dp.EXTI);

        Self {
            mono,
            button,
            indicators,
            system_clock,
        }
    }
}

/// Output pins of the blinking indicators, in the order of channels.
pub struct Indicators {
    pins: [ErasedPin<Output<PushPull>>; CHANNELS],
}

impl Indicators {
    fn new(pins: [ErasedPin<Output<PushPull>>; CHANNELS]) -> Self {
        let mut indicators = Self { pins };
        indicators.set(Levels::default());
        indicators
    }

    pub fn set(&mut self, levels: Levels) {
        for (pin, lit) in self.pins.iter_mut().zip(levels.0) {
            if lit {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }

    /// Light up each indicator in turn and leave all of them dark.
    ///
    /// This is blocking and meant to be called only during initialization,
    /// before interrupts get enabled.
    pub fn sweep(&mut self, system_clock: Hertz) {
        let step_cycles = system_clock.raw() / 8;
        for i in 0..CHANNELS {
            let mut levels = Levels::default();
            levels.0[i] = true;
            self.set(levels);
            cortex_m::asm::delay(step_cycles);
        }
        self.set(Levels::default());
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
