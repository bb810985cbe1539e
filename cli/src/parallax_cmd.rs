use clap::Args;
use folio_parallax::{
    FrameId, HostEvent, Observer, ParallaxController, ParallaxHost, ParallaxOffsets, Viewport,
};

#[derive(Debug, Args)]
pub struct ParallaxArgs {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,

    /// Pointer x coordinate
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,

    /// Pointer y coordinate
    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,

    /// Behave as if the user prefers reduced motion
    #[arg(long)]
    pub reduced_motion: bool,

    /// Print the computed offsets as JSON
    #[arg(long)]
    pub json: bool,
}

/// Host that records writes instead of touching a styling layer.
#[derive(Debug)]
struct PrintHost {
    viewport: Viewport,
    reduced_motion: bool,
    next_frame: u64,
    vars: Vec<(String, String)>,
}

impl PrintHost {
    fn new(viewport: Viewport, reduced_motion: bool) -> Self {
        Self {
            viewport,
            reduced_motion,
            next_frame: 0,
            vars: Vec::new(),
        }
    }

    /// Last value written per variable, in first-write order.
    fn latest_vars(&self) -> Vec<(String, String)> {
        let mut latest: Vec<(String, String)> = Vec::new();
        for (name, value) in &self.vars {
            match latest.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1.clone_from(value),
                None => latest.push((name.clone(), value.clone())),
            }
        }
        latest
    }
}

impl ParallaxHost for PrintHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn observe(&mut self, observer: Observer) {
        tracing::trace!(?observer, "observe");
    }

    fn unobserve(&mut self, observer: Observer) {
        tracing::trace!(?observer, "unobserve");
    }

    fn request_frame(&mut self) -> FrameId {
        self.next_frame += 1;
        FrameId(self.next_frame)
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        tracing::trace!(?frame, "cancel frame");
    }

    fn set_style_var(&mut self, name: &str, value: &str) {
        self.vars.push((name.to_string(), value.to_string()));
    }
}

/// Drive a controller through one pointer move and the frame that follows.
fn simulate(args: &ParallaxArgs) -> (Option<ParallaxOffsets>, Vec<(String, String)>) {
    let host = PrintHost::new(Viewport::new(args.width, args.height), args.reduced_motion);
    let mut controller = ParallaxController::activate(host);

    controller.handle(HostEvent::PointerMove {
        x: args.x,
        y: args.y,
    });
    if controller.has_pending_frame() {
        let frame = FrameId(controller.host().next_frame);
        controller.handle(HostEvent::Frame(frame));
    }
    controller.deactivate();

    (controller.offsets(), controller.host().latest_vars())
}

pub fn run_parallax(args: ParallaxArgs) -> i32 {
    let (offsets, vars) = simulate(&args);

    if args.json {
        match serde_json::to_string_pretty(&offsets) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to encode offsets: {e}");
                return 1;
            }
        }
        return 0;
    }

    for (name, value) in vars {
        println!("{name}: {value}");
    }
    0
}
