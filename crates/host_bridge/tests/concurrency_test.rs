//! The gateway is never entered by two threads at once

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use host_bridge::foundation::logging;
use host_bridge::prelude::*;
use host_bridge::sensor::VirtualAccelerometer;

const ITERATIONS: usize = 200;

fn shared_coordinator(delay: Duration) -> (Arc<Coordinator>, RecordingGateway) {
    logging::init_for_tests();
    let gateway = RecordingGateway::new().with_call_delay(delay);
    let (device, _probe) = VirtualAccelerometer::new();
    let coordinator = Coordinator::new(&HostConfig::default(), Box::new(gateway.clone()), Box::new(device))
        .expect("engine should initialize");
    (Arc::new(coordinator), gateway)
}

#[test]
fn test_pointer_and_frame_threads_never_overlap() {
    let (coordinator, gateway) = shared_coordinator(Duration::from_micros(50));
    coordinator.on_surface_geometry(800, 600);
    coordinator.on_app_resume();
    gateway.clear();

    let barrier = Arc::new(Barrier::new(2));

    let input = {
        let coordinator = Arc::clone(&coordinator);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..ITERATIONS {
                #[allow(clippy::cast_precision_loss)]
                let x = i as f32;
                assert!(coordinator.on_pointer_event(2, x, x));
            }
        })
    };

    let render = {
        let coordinator = Arc::clone(&coordinator);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS {
                coordinator.on_frame_tick();
            }
        })
    };

    input.join().unwrap();
    render.join().unwrap();

    assert_eq!(gateway.overlapping_calls(), 0);
    assert_eq!(gateway.count(|call| *call == GatewayCall::Render), ITERATIONS);
    assert_eq!(
        gateway.count(|call| matches!(call, GatewayCall::DispatchTouch { .. })),
        ITERATIONS
    );
}

#[test]
fn test_racing_resume_and_geometry_activate_exactly_once() {
    for _ in 0..50 {
        let (coordinator, gateway) = shared_coordinator(Duration::ZERO);
        let barrier = Arc::new(Barrier::new(3));

        let lifecycle = {
            let coordinator = Arc::clone(&coordinator);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                coordinator.on_app_start();
                coordinator.on_app_resume();
            })
        };

        let surface = {
            let coordinator = Arc::clone(&coordinator);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                coordinator.on_surface_context_created();
                coordinator.on_surface_geometry(800, 600);
                coordinator.on_frame_tick();
            })
        };

        let sensor = {
            let coordinator = Arc::clone(&coordinator);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                coordinator.on_sensor_sample(0.1, 0.0, 9.8, 0.0);
                coordinator.on_pointer_event(0, 1.0, 1.0);
            })
        };

        lifecycle.join().unwrap();
        surface.join().unwrap();
        sensor.join().unwrap();

        let calls = gateway.calls_after_init();
        let activations: Vec<usize> = calls
            .iter()
            .enumerate()
            .filter(|(_, call)| **call == GatewayCall::Activate)
            .map(|(index, _)| index)
            .collect();
        let first_visible = calls
            .iter()
            .position(|call| matches!(call, GatewayCall::SetVisible { .. }))
            .expect("surface must have been shown");

        assert_eq!(activations.len(), 1, "calls: {calls:?}");
        assert!(first_visible < activations[0], "calls: {calls:?}");
        assert!(
            !calls
                .iter()
                .any(|call| matches!(call, GatewayCall::DispatchMotionSample { .. })),
            "samples must not be delivered without a subscription"
        );
        assert_eq!(gateway.overlapping_calls(), 0);
        assert_eq!(coordinator.phase(), LifecyclePhase::SurfaceActive);
    }
}

#[test]
fn test_engine_requests_from_its_own_thread() {
    let (coordinator, gateway) = shared_coordinator(Duration::ZERO);
    let requests = gateway.requests().expect("initialize stores the request queue");

    let engine_thread = thread::spawn(move || {
        requests.subscribe_sensor(true);
    });
    engine_thread.join().unwrap();

    coordinator.on_sensor_sample(0.2, 1.0, 2.0, 3.0);
    assert_eq!(
        gateway.calls_after_init(),
        vec![GatewayCall::DispatchMotionSample { timestamp: 0.2, x: 1.0, y: 2.0, z: 3.0 }]
    );
}
