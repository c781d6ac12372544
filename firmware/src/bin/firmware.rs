#![no_main]
#![no_std]
#![allow(clippy::no_mangle_with_rust_abi)] // rtic::app fails this.

use tri_blink_firmware as _; // Global logger and panicking behavior.

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1, EXTI2])]
mod app {
    use fugit::ExtU64;
    use stm32h7xx_hal::gpio::ExtiPin;
    use systick_monotonic::Systick;
    use tri_blink_control::{Clicker, Edge, Expiry, Timing};

    use tri_blink_firmware::system::{Button, Indicators, System};

    // 1 kHz / 1 ms granularity for task scheduling.
    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>;

    #[shared]
    struct Shared {
        clicker: Clicker,
    }

    #[local]
    struct Local {
        button: Button,
        indicators: Indicators,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("Starting the firmware, initializing resources");

        let mut system = System::init(cx.core, cx.device);
        system.indicators.sweep(system.system_clock);

        let timing = Timing::DEFAULT;
        defmt::info!("Timing: {}", timing);
        let clicker = Clicker::new(timing);

        let now = <Mono as rtic::Monotonic>::zero();
        tick::spawn_at(now + 1.millis(), now + 1.millis()).unwrap();

        defmt::info!("Initialization was completed, waiting for clicks");

        (
            Shared { clicker },
            Local {
                button: system.button,
                indicators: system.indicators,
            },
            init::Monotonics(system.mono),
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    #[task(binds = EXTI9_5, local = [button], shared = [clicker], priority = 2)]
    fn on_button(mut cx: on_button::Context) {
        cx.local.button.clear_interrupt_pending_bit();
        let edge = cx.shared.clicker.lock(Clicker::edge);
        match edge {
            Edge::Bounced => defmt::trace!("Rejected a bouncing edge"),
            Edge::Armed => defmt::debug!("Click, counting window armed"),
            Edge::Counted(clicks) => defmt::debug!("Click number {}", clicks),
        }
    }

    #[task(local = [indicators], shared = [clicker], priority = 3)]
    fn tick(mut cx: tick::Context, scheduled: fugit::TimerInstantU64<1000>) {
        let outcome = cx.shared.clicker.lock(Clicker::tick);
        cx.local.indicators.set(outcome.levels);

        if let Some(expiry) = outcome.expired {
            report::spawn(expiry).ok();
        }

        let next = scheduled + 1.millis();
        tick::spawn_at(next, next).unwrap();
    }

    #[task(priority = 1, capacity = 2)]
    fn report(_: report::Context, expiry: Expiry) {
        match expiry {
            Expiry::Toggled { gesture, active } => {
                defmt::info!(
                    "Gesture {}, indicator {} is now active={}",
                    gesture,
                    gesture.channel(),
                    active
                );
            }
            Expiry::Ignored { clicks } => {
                defmt::warn!("Ignoring {} clicks, not a recognized gesture", clicks);
            }
        }
    }
}
