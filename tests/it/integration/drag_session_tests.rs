//! Full drag-session lifecycle tests: sequencing, quantization, axis
//! locking, callbacks, and misuse containment.

use crate::helpers::*;
use freedrag::{Cadence, DragController, DragOptions, PointerEvent, Position, Rect};

#[test]
fn basic_session_moves_element_by_pointer_delta() {
    // Container 300x300, element 50x50 at offset (100,100), cadence 1.
    let mut controller = TestControllerBuilder::new()
        .with_container(Rect::new(0.0, 0.0, 300.0, 300.0))
        .build();

    press(&mut controller, 10.0, 10.0);
    assert!(controller.active());
    assert!(!controller.dragging());

    move_to(&mut controller, 20.0, 20.0);
    assert!(controller.active());
    assert!(controller.dragging());
    assert_eq!(controller.position(), Position::new(110.0, 110.0));

    release(&mut controller, 20.0, 20.0);
    assert!(!controller.active());
    assert!(!controller.dragging());
    // Position is retained after the session ends.
    assert_eq!(controller.position(), Position::new(110.0, 110.0));
}

#[test]
fn cadence_absorbs_sub_threshold_motion() {
    let mut controller = TestControllerBuilder::new()
        .with_container(Rect::new(0.0, 0.0, 300.0, 300.0))
        .with_cadence(Cadence::Uniform(10.0))
        .build();

    press(&mut controller, 10.0, 10.0);

    // Raw delta (14,14) -> round(14/10)*10 = 10.
    move_to(&mut controller, 24.0, 24.0);
    assert_eq!(controller.position(), Position::new(110.0, 110.0));

    // Raw delta (15,15) -> round(1.5)*10 = 20.
    move_to(&mut controller, 25.0, 25.0);
    assert_eq!(controller.position(), Position::new(120.0, 120.0));
}

#[test]
fn per_axis_cadence_resolves_independently() {
    let mut controller = TestControllerBuilder::new()
        .with_cadence(Cadence::PerAxis {
            left: 10.0,
            top: 1.0,
        })
        .build();

    press(&mut controller, 0.0, 0.0);
    move_to(&mut controller, 14.0, 14.0);
    assert_eq!(controller.position(), Position::new(110.0, 114.0));
}

#[test]
fn locked_vertical_axis_stays_at_start_offset() {
    let mut controller = TestControllerBuilder::new()
        .with_element(Rect::new(0.0, 0.0, 50.0, 50.0))
        .with_axes(true, false)
        .build();

    press(&mut controller, 10.0, 10.0);
    move_to(&mut controller, 15.0, 15.0);
    assert_eq!(controller.position(), Position::new(5.0, 0.0));

    // Locked for any sequence of moves, not just the first.
    move_to(&mut controller, 80.0, -40.0);
    assert_eq!(controller.position(), Position::new(70.0, 0.0));
}

#[test]
fn locked_horizontal_axis_stays_at_start_offset() {
    let mut controller = TestControllerBuilder::new()
        .with_axes(false, true)
        .build();

    press(&mut controller, 10.0, 10.0);
    move_to(&mut controller, 25.0, 35.0);
    assert_eq!(controller.position(), Position::new(100.0, 125.0));
}

#[test]
fn element_offset_is_relative_to_container_origin() {
    let mut controller = TestControllerBuilder::new()
        .with_container(Rect::new(20.0, 30.0, 300.0, 300.0))
        .with_element(Rect::new(120.0, 130.0, 50.0, 50.0))
        .build();

    press(&mut controller, 10.0, 10.0);
    move_to(&mut controller, 20.0, 20.0);
    assert_eq!(controller.position(), Position::new(110.0, 110.0));
}

#[test]
fn disabled_controller_never_starts_a_session() {
    let log = new_log();
    let mut controller = TestControllerBuilder::new()
        .disabled()
        .with_log(&log)
        .build();

    press(&mut controller, 10.0, 10.0);
    assert!(!controller.active());
    assert_eq!(controller.position(), Position::ZERO);
    assert!(log.borrow().is_empty());

    // Global streams stay inert too.
    move_to(&mut controller, 50.0, 50.0);
    release(&mut controller, 50.0, 50.0);
    assert_eq!(controller.position(), Position::ZERO);
    assert!(log.borrow().is_empty());
}

#[test]
fn non_pointer_down_event_is_a_contained_usage_error() {
    init_tracing();
    let log = new_log();
    let mut controller = TestControllerBuilder::new().with_log(&log).build();

    // Wrong event kind: warned, nothing mutated, no callback.
    let mut move_event = PointerEvent::moved(10.0, 10.0);
    controller.begin_drag(&mut move_event);
    assert!(!controller.active());
    assert!(!move_event.is_default_suppressed());
    assert_eq!(controller.position(), Position::ZERO);
    assert!(log.borrow().is_empty());

    controller.begin_drag(&mut PointerEvent::up(10.0, 10.0));
    assert!(!controller.active());
    assert!(log.borrow().is_empty());
}

#[test]
fn unbound_handle_makes_begin_drag_a_silent_noop() {
    let log = new_log();
    let mut controller = TestControllerBuilder::new().with_log(&log).build();
    controller.handle().unbind();

    press(&mut controller, 10.0, 10.0);
    assert!(!controller.active());
    assert!(log.borrow().is_empty());
}

#[test]
fn handle_unbound_mid_session_suppresses_moves() {
    let mut controller = TestControllerBuilder::new().build();

    press(&mut controller, 10.0, 10.0);
    move_to(&mut controller, 20.0, 20.0);
    assert_eq!(controller.position(), Position::new(110.0, 110.0));

    controller.handle().unbind();
    move_to(&mut controller, 90.0, 90.0);
    assert_eq!(controller.position(), Position::new(110.0, 110.0));
}

#[test]
fn moves_and_ups_are_ignored_while_idle() {
    let log = new_log();
    let mut controller = TestControllerBuilder::new().with_log(&log).build();

    move_to(&mut controller, 50.0, 50.0);
    release(&mut controller, 50.0, 50.0);
    assert!(!controller.active());
    assert_eq!(controller.position(), Position::ZERO);
    assert!(log.borrow().is_empty());
}

#[test]
fn repeated_pointer_up_is_idempotent() {
    let log = new_log();
    let mut controller = TestControllerBuilder::new().with_log(&log).build();

    press(&mut controller, 10.0, 10.0);
    move_to(&mut controller, 20.0, 20.0);
    release(&mut controller, 20.0, 20.0);
    assert_eq!(drain(&log), vec!["start", "move", "end"]);

    let settled = controller.position();
    release(&mut controller, 20.0, 20.0);
    release(&mut controller, 99.0, 99.0);
    assert!(!controller.active());
    assert_eq!(controller.position(), settled);
    assert!(log.borrow().is_empty(), "end callback must not re-fire");
}

#[test]
fn callbacks_fire_in_lifecycle_order() {
    let log = new_log();
    let mut controller = TestControllerBuilder::new().with_log(&log).build();

    press(&mut controller, 0.0, 0.0);
    move_to(&mut controller, 5.0, 5.0);
    move_to(&mut controller, 9.0, 9.0);
    release(&mut controller, 9.0, 9.0);

    assert_eq!(drain(&log), vec!["start", "move", "move", "end"]);
}

#[test]
fn move_callback_observes_committed_position() {
    // onDragMove runs after the position is committed: a callback reading
    // shared state updated from position() would see the new value. Here we
    // verify ordering indirectly through the dragging flag at callback time.
    let saw_drag = new_log();
    let saw_drag_inner = saw_drag.clone();
    let options = DragOptions::new().on_drag_move(move |event| {
        saw_drag_inner
            .borrow_mut()
            .push(format!("move@{},{}", event.position.x, event.position.y));
    });
    let mut controller = DragController::new(options);
    controller.handle().bind(Rect::new(0.0, 0.0, 50.0, 50.0));

    press(&mut controller, 0.0, 0.0);
    move_to(&mut controller, 7.0, 3.0);
    assert_eq!(drain(&saw_drag), vec!["move@7,3"]);
    assert_eq!(controller.position(), Position::new(7.0, 3.0));
}

#[test]
fn dragging_implies_active_at_every_step() {
    let mut controller = TestControllerBuilder::new()
        .with_container(Rect::new(0.0, 0.0, 300.0, 300.0))
        .build();

    let check = |controller: &DragController| {
        if controller.dragging() {
            assert!(controller.active(), "dragging must imply active");
        }
    };

    check(&controller);
    press(&mut controller, 10.0, 10.0);
    check(&controller);
    for step in 0..10 {
        move_to(&mut controller, 10.0 + step as f32, 10.0);
        check(&controller);
    }
    release(&mut controller, 20.0, 10.0);
    check(&controller);
}

#[test]
fn session_start_suppresses_the_events_default_handling() {
    let mut controller = TestControllerBuilder::new().build();

    // Successful start: host default (text selection, native drag) is
    // suppressed for this press.
    let event = press(&mut controller, 10.0, 10.0);
    assert!(controller.active());
    assert!(event.is_default_suppressed());
    release(&mut controller, 10.0, 10.0);

    // No-op paths leave the event untouched.
    let mut disabled = TestControllerBuilder::new().disabled().build();
    let event = press(&mut disabled, 10.0, 10.0);
    assert!(!event.is_default_suppressed());

    let mut unbound = TestControllerBuilder::new().build();
    unbound.handle().unbind();
    let event = press(&mut unbound, 10.0, 10.0);
    assert!(!event.is_default_suppressed());
}

#[test]
fn session_ends_even_if_handle_unbinds_mid_session() {
    let log = new_log();
    let mut controller = TestControllerBuilder::new().with_log(&log).build();

    press(&mut controller, 10.0, 10.0);
    move_to(&mut controller, 20.0, 20.0);

    // Element unmounts while the pointer is still down: the release must
    // still reset the lifecycle and report the end, or the controller
    // would be stuck active forever.
    controller.handle().unbind();
    release(&mut controller, 20.0, 20.0);

    assert!(!controller.active());
    assert!(!controller.dragging());
    assert_eq!(controller.position(), Position::new(110.0, 110.0));
    assert_eq!(drain(&log), vec!["start", "move", "end"]);
}

#[test]
fn restarting_a_session_resnapshots_geometry() {
    let mut controller = TestControllerBuilder::new()
        .with_element(Rect::new(0.0, 0.0, 50.0, 50.0))
        .build();

    press(&mut controller, 0.0, 0.0);
    move_to(&mut controller, 30.0, 30.0);
    release(&mut controller, 30.0, 30.0);
    assert_eq!(controller.position(), Position::new(30.0, 30.0));

    // Host re-renders the element at the committed position and re-binds.
    controller.handle().bind(Rect::new(30.0, 30.0, 50.0, 50.0));

    press(&mut controller, 100.0, 100.0);
    move_to(&mut controller, 110.0, 100.0);
    assert_eq!(controller.position(), Position::new(40.0, 30.0));
}
