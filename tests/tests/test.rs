use cucumber::{given, then, when, World};
use tri_blink_control::{Channel, Clicker, Expiry, Gesture, Timing, CHANNELS};

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ControlWorld {
    clicker: Clicker,
    inversions: [u32; CHANNELS],
    expiry: Option<Expiry>,
}

impl ControlWorld {
    fn new() -> Self {
        Self {
            clicker: Clicker::default(),
            inversions: [0; CHANNELS],
            expiry: None,
        }
    }

    fn advance(&mut self, ticks: u32) {
        self.inversions = [0; CHANNELS];
        self.expiry = None;
        for _ in 0..ticks {
            let before = self.clicker.levels();
            let tick = self.clicker.tick();
            for channel in Channel::ALL {
                if tick.levels.get(channel) != before.get(channel) {
                    self.inversions[channel.index()] += 1;
                }
            }
            if let Some(expiry) = tick.expired {
                assert!(self.expiry.is_none(), "Window expired twice in one step");
                self.expiry = Some(expiry);
            }
        }
    }
}

fn parse_channel(name: &str) -> Channel {
    match name {
        "A" => Channel::A,
        "B" => Channel::B,
        "C" => Channel::C,
        _ => panic!("Unknown indicator {name}"),
    }
}

#[given(
    expr = "a window of {int} ticks, a debounce guard of {int} ticks and blink periods of {int}, {int} and {int} ticks"
)]
fn custom_timing(world: &mut ControlWorld, window: u32, debounce: u32, a: u32, b: u32, c: u32) {
    world.clicker = Clicker::new(Timing {
        window,
        debounce,
        periods: [a, b, c],
    });
}

#[given("the default timing")]
fn default_timing(world: &mut ControlWorld) {
    world.clicker = Clicker::new(Timing::DEFAULT);
}

#[when("the button is clicked")]
fn click(world: &mut ControlWorld) {
    world.clicker.edge();
}

#[when(expr = "the button is clicked {int} time(s), {int} ticks apart")]
fn click_repeatedly(world: &mut ControlWorld, clicks: u32, spacing: u32) {
    for i in 0..clicks {
        if i > 0 {
            world.advance(spacing);
        }
        world.clicker.edge();
    }
}

#[when(expr = "the button bounces {int} time(s)")]
fn bounce(world: &mut ControlWorld, edges: u32) {
    for _ in 0..edges {
        world.clicker.edge();
    }
}

#[when(expr = "{int} tick(s) pass(es)")]
fn ticks_pass(world: &mut ControlWorld, ticks: u32) {
    world.advance(ticks);
}

#[then(expr = "the window holds {int} click(s)")]
fn window_holds(world: &mut ControlWorld, clicks: u8) {
    assert!(world.clicker.window().is_armed(), "Window is not counting");
    assert_eq!(world.clicker.window().clicks(), clicks);
}

#[then("the window is idle")]
fn window_idle(world: &mut ControlWorld) {
    assert!(!world.clicker.window().is_armed(), "Window is still counting");
}

#[then("the window did not expire")]
fn window_not_expired(world: &mut ControlWorld) {
    assert_eq!(world.expiry, None);
}

#[then(expr = "the window expired with {int} click(s)")]
fn window_expired(world: &mut ControlWorld, clicks: u8) {
    let expired_clicks = match world.expiry.expect("Window did not expire") {
        Expiry::Toggled { gesture, .. } => match gesture {
            Gesture::Single => 1,
            Gesture::Double => 2,
            Gesture::Triple => 3,
        },
        Expiry::Ignored { clicks } => clicks,
    };
    assert_eq!(expired_clicks, clicks);
}

#[then("no indicator is active")]
fn none_active(world: &mut ControlWorld) {
    for channel in Channel::ALL {
        assert!(
            !world.clicker.channel(channel).is_active(),
            "Indicator {channel:?} is active"
        );
    }
}

#[then(expr = "only indicator {word} is active")]
fn only_active(world: &mut ControlWorld, name: String) {
    let selected = parse_channel(&name);
    for channel in Channel::ALL {
        assert_eq!(
            world.clicker.channel(channel).is_active(),
            channel == selected,
            "Unexpected activity of indicator {channel:?}"
        );
    }
}

#[then(expr = "indicator {word} is active")]
fn active(world: &mut ControlWorld, name: String) {
    assert!(world.clicker.channel(parse_channel(&name)).is_active());
}

#[then(expr = "indicator {word} is inactive")]
fn inactive(world: &mut ControlWorld, name: String) {
    assert!(!world.clicker.channel(parse_channel(&name)).is_active());
}

#[then(expr = "indicator {word} is lit")]
fn lit(world: &mut ControlWorld, name: String) {
    assert!(world.clicker.levels().get(parse_channel(&name)));
}

#[then(expr = "indicator {word} is dark")]
fn dark(world: &mut ControlWorld, name: String) {
    assert!(!world.clicker.levels().get(parse_channel(&name)));
}

#[then(expr = "indicator {word} inverted {int} time(s)")]
fn inverted(world: &mut ControlWorld, name: String, times: u32) {
    assert_eq!(world.inversions[parse_channel(&name).index()], times);
}

fn main() {
    futures::executor::block_on(
        ControlWorld::cucumber()
            .fail_on_skipped()
            .run_and_exit("tests"),
    );
}
