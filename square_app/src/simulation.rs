//! Simulated platform threads
//!
//! Three threads drive the coordinator the way a real host would: the
//! lifecycle thread (here, the caller), a render thread ticking frames, and
//! an input producer feeding a delivery thread over a channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use host_bridge::events::{forward_until_closed, HostEvent};
use host_bridge::foundation::time::time_ns;
use host_bridge::input::{MotionSample, PointerEvent, TouchAction};
use host_bridge::sensor::VirtualSensorProbe;
use host_bridge::Coordinator;
use rand::Rng;

use crate::DemoError;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_INTERVAL: Duration = Duration::from_millis(20);
const PHASE_DURATION: Duration = Duration::from_millis(250);

/// Counters reported once the simulation is over
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulationReport {
    /// Frame ticks issued by the render thread
    pub frame_ticks: u64,
    /// Events delivered through the input channel
    pub input_events: usize,
}

/// Run the full create/start/resume/pause/stop/restart sequence
pub fn run(coordinator: &Arc<Coordinator>, probe: VirtualSensorProbe) -> Result<SimulationReport, DemoError> {
    let running = Arc::new(AtomicBool::new(true));
    let (sender, receiver) = mpsc::channel::<HostEvent>();

    let render = {
        let coordinator = Arc::clone(coordinator);
        let running = Arc::clone(&running);
        thread::Builder::new()
            .name("render".into())
            .spawn(move || render_loop(&coordinator, &running))?
    };

    let delivery = {
        let coordinator = Arc::clone(coordinator);
        thread::Builder::new()
            .name("input-delivery".into())
            .spawn(move || forward_until_closed(&receiver, &coordinator))?
    };

    let producer = {
        let running = Arc::clone(&running);
        thread::Builder::new()
            .name("input".into())
            .spawn(move || produce_input(&sender, &probe, &running))?
    };

    drive_lifecycle(coordinator);
    running.store(false, Ordering::SeqCst);

    producer.join().map_err(|_| DemoError::ThreadPanicked("input"))?;
    let input_events = delivery.join().map_err(|_| DemoError::ThreadPanicked("input-delivery"))?;
    let frame_ticks = render.join().map_err(|_| DemoError::ThreadPanicked("render"))?;

    Ok(SimulationReport {
        frame_ticks,
        input_events,
    })
}

fn drive_lifecycle(coordinator: &Coordinator) {
    let pause = |label: &str| {
        log::info!("Lifecycle: {label} ({:?})", coordinator.phase());
        thread::sleep(PHASE_DURATION);
    };

    coordinator.on_app_start();
    coordinator.on_app_resume();
    pause("foreground");

    coordinator.on_app_pause();
    coordinator.on_app_stop();
    pause("background");

    coordinator.on_app_restart();
    coordinator.on_app_start();
    coordinator.on_app_resume();
    pause("foreground again");

    coordinator.on_app_pause();
    coordinator.on_app_stop();
    log::info!("Lifecycle: stopped ({:?})", coordinator.phase());
}

fn render_loop(coordinator: &Coordinator, running: &AtomicBool) -> u64 {
    coordinator.on_surface_context_created();
    coordinator.on_surface_geometry(800, 600);

    let mut ticks = 0;
    while running.load(Ordering::SeqCst) {
        coordinator.on_frame_tick();
        ticks += 1;

        // Soft keyboard or status bar eats part of the height
        if ticks == 30 {
            coordinator.on_surface_geometry(800, 480);
        }
        thread::sleep(FRAME_INTERVAL);
    }
    ticks
}

/// Drag from the square's starting center to the middle of an 800x600
/// surface, then keep tilting while the accelerometer is registered
fn produce_input(sender: &mpsc::Sender<HostEvent>, probe: &VirtualSensorProbe, running: &AtomicBool) {
    let mut rng = rand::thread_rng();
    let (from, to) = ((260.0_f32, 105.0_f32), (400.0_f32, 300.0_f32));
    let mut drag = vec![PointerEvent::new(TouchAction::Down, from.0, from.1)];
    for step in 1..=10 {
        #[allow(clippy::cast_precision_loss)]
        let t = step as f32 / 10.0;
        drag.push(PointerEvent::new(
            TouchAction::Move,
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
        ));
    }
    drag.push(PointerEvent::new(TouchAction::Up, to.0, to.1));
    let mut drag = drag.into_iter();

    while running.load(Ordering::SeqCst) {
        if let Some(event) = drag.next() {
            if sender.send(event.into()).is_err() {
                return;
            }
        }
        if probe.is_registered() {
            let sample = MotionSample::from_nanos(
                time_ns(),
                0.5 + rng.gen_range(-0.1..0.1),
                rng.gen_range(-0.1..0.1),
                9.81,
            );
            if sender.send(sample.into()).is_err() {
                return;
            }
        }
        thread::sleep(INPUT_INTERVAL);
    }
}
