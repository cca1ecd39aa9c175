//! End-to-end state machine tests against the in-memory sink.

use yew_hand_cursor::cursor::CursorSession;
use yew_hand_cursor::cursor::sink::{RecordedTarget, RecordingSink};
use yew_hand_cursor::model::{GestureFlags, GestureSample, Viewport};

const VIEW: Viewport = Viewport {
    width: 1000.0,
    height: 1000.0,
};

fn sample(x: f64, y: f64, pinching: bool) -> GestureSample {
    GestureSample {
        x,
        y,
        state: GestureFlags {
            is_pinching: pinching,
            is_scrolling: false,
        },
    }
}

fn session_over(surface: &str) -> CursorSession<RecordingSink> {
    CursorSession::new(RecordingSink::over(surface), VIEW)
}

/// Idle ticks at a fixed point until the smoothed position has settled there,
/// so subsequent press/release travel is effectively zero.
fn settle(s: &mut CursorSession<RecordingSink>, x: f64, y: f64, now: &mut f64) {
    for _ in 0..200 {
        s.tick(&sample(x, y, false), *now);
        *now += 16.0;
    }
    assert!(s.sink().events.is_empty(), "settling must not emit events");
}

#[test]
fn quick_press_release_emits_ordered_pairs_and_click() {
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.5, 0.5, &mut now);

    s.tick(&sample(0.5, 0.5, true), now);
    now += 16.0;
    s.tick(&sample(0.5, 0.5, true), now);
    now += 16.0;
    s.tick(&sample(0.5, 0.5, false), now);

    let sink = s.into_sink();
    assert_eq!(
        sink.names(),
        vec![
            "pointerdown",
            "mousedown",
            "pointermove",
            "mousemove",
            "click",
            "pointerup",
            "mouseup"
        ]
    );

    let events = &sink.events;
    // Down and up land on the resolved element; moves go to the document.
    assert_eq!(events[0].target, RecordedTarget::Element("card".into()));
    assert_eq!(events[2].target, RecordedTarget::Document);
    assert_eq!(events[5].target, RecordedTarget::Element("card".into()));
    // buttons=1 while pressed/moving, 0 from the click decision onward.
    assert!(events[..4].iter().all(|e| e.buttons == 1));
    assert!(events[4..].iter().all(|e| e.buttons == 0));
}

#[test]
fn long_travel_suppresses_click() {
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.2, 0.2, &mut now);

    s.tick(&sample(0.2, 0.2, true), now);
    now += 16.0;
    for _ in 0..5 {
        s.tick(&sample(0.8, 0.8, true), now);
        now += 16.0;
    }
    s.tick(&sample(0.8, 0.8, false), now);

    let names = s.sink().names();
    assert!(!names.contains(&"click"));
    assert!(!names.contains(&"dblclick"));
    assert_eq!(&names[..2], &["pointerdown", "mousedown"]);
    assert_eq!(&names[names.len() - 2..], &["pointerup", "mouseup"]);
    // Five held ticks, one move pair each.
    assert_eq!(names.iter().filter(|n| **n == "pointermove").count(), 5);
}

#[test]
fn slow_press_suppresses_click() {
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.5, 0.5, &mut now);

    s.tick(&sample(0.5, 0.5, true), now);
    s.tick(&sample(0.5, 0.5, false), now + 600.0);

    let names = s.sink().names();
    assert!(!names.contains(&"click"));
    assert_eq!(
        names,
        vec!["pointerdown", "mousedown", "pointerup", "mouseup"]
    );
}

#[test]
fn second_quick_release_becomes_double_click() {
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.5, 0.5, &mut now);

    // Cycle 1: a plain click.
    s.tick(&sample(0.5, 0.5, true), now);
    s.tick(&sample(0.5, 0.5, false), now + 50.0);
    // Cycle 2: release lands 150 ms after the first -> dblclick, no click.
    s.tick(&sample(0.5, 0.5, true), now + 150.0);
    s.tick(&sample(0.5, 0.5, false), now + 200.0);
    // Cycle 3: well past the window (and the dblclick reset the release
    // timestamp) -> plain click again.
    s.tick(&sample(0.5, 0.5, true), now + 900.0);
    s.tick(&sample(0.5, 0.5, false), now + 950.0);

    let names = s.sink().names();
    assert_eq!(names.iter().filter(|n| **n == "click").count(), 2);
    assert_eq!(names.iter().filter(|n| **n == "dblclick").count(), 1);

    // The dblclick replaces the click on the second release, before its up pair.
    let decisions: Vec<_> = names
        .iter()
        .filter(|n| **n == "click" || **n == "dblclick")
        .collect();
    assert_eq!(decisions, vec![&"click", &"dblclick", &"click"]);
}

#[test]
fn quick_third_release_after_double_click_is_a_plain_click() {
    // The dblclick clears the stored release timestamp, so a third release
    // landing inside the 500 ms window starts a fresh click cycle instead of
    // chaining a second dblclick.
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.5, 0.5, &mut now);

    s.tick(&sample(0.5, 0.5, true), now);
    s.tick(&sample(0.5, 0.5, false), now + 50.0);
    s.tick(&sample(0.5, 0.5, true), now + 150.0);
    s.tick(&sample(0.5, 0.5, false), now + 200.0);
    // Third release only 100 ms after the dblclick.
    s.tick(&sample(0.5, 0.5, true), now + 250.0);
    s.tick(&sample(0.5, 0.5, false), now + 300.0);

    let names = s.sink().names();
    assert_eq!(names.iter().filter(|n| **n == "dblclick").count(), 1);
    let decisions: Vec<_> = names
        .iter()
        .filter(|n| **n == "click" || **n == "dblclick")
        .collect();
    assert_eq!(decisions, vec![&"click", &"dblclick", &"click"]);
}

#[test]
fn degenerate_sample_flushes_window_mouseup_while_pinching() {
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.5, 0.5, &mut now);

    s.tick(&sample(0.5, 0.5, true), now);
    s.sink_mut().events.clear();

    // Detection lost: coordinates collapse to (0, 0) while still pinching.
    s.tick(&sample(0.0, 0.0, true), now + 16.0);
    let last = s.sink().events.last().expect("flush must fire");
    assert_eq!(last.name, "mouseup");
    assert_eq!(last.target, RecordedTarget::Window);
}

#[test]
fn degenerate_sample_flushes_even_when_idle() {
    let mut s = session_over("card");
    s.tick(&sample(0.0, 0.0, false), 0.0);
    assert_eq!(s.sink().names(), vec!["mouseup"]);
    assert_eq!(s.sink().events[0].target, RecordedTarget::Window);
}

#[test]
fn idle_ticks_emit_nothing() {
    let mut s = session_over("card");
    let mut now = 0.0;
    for _ in 0..50 {
        s.tick(&sample(0.3, 0.7, false), now);
        now += 16.0;
    }
    assert!(s.sink().events.is_empty());
}

#[test]
fn missing_target_skips_every_dispatch() {
    let mut s = CursorSession::new(RecordingSink::default(), VIEW);
    let mut now = 0.0;
    for _ in 0..200 {
        s.tick(&sample(0.5, 0.5, false), now);
        now += 16.0;
    }
    s.tick(&sample(0.5, 0.5, true), now);
    s.tick(&sample(0.5, 0.5, true), now + 16.0);
    s.tick(&sample(0.5, 0.5, false), now + 32.0);
    assert!(s.sink().events.is_empty());
}

#[test]
fn ending_mid_press_forces_a_release() {
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.5, 0.5, &mut now);

    s.tick(&sample(0.5, 0.5, true), now);
    s.sink_mut().events.clear();

    s.end();
    assert_eq!(s.sink().names(), vec!["mouseup"]);
    assert_eq!(s.sink().events[0].target, RecordedTarget::Window);

    // Idempotent.
    s.end();
    assert_eq!(s.sink().events.len(), 1);
}

#[test]
fn press_and_release_resolve_independently() {
    // The hit-test runs at the instant of each dispatch: dropping the surface
    // between press and release suppresses the release sequence entirely.
    let mut s = session_over("card");
    let mut now = 0.0;
    settle(&mut s, 0.5, 0.5, &mut now);

    s.tick(&sample(0.5, 0.5, true), now);
    s.sink_mut().surface = None;
    s.tick(&sample(0.5, 0.5, false), now + 32.0);

    assert_eq!(s.sink().names(), vec!["pointerdown", "mousedown"]);
}
