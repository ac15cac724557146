// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end behavior of one vacuum session: telemetry decoding, state
//! derivation, event subscriptions, and the ping deadman switch, all
//! driven through the `VacBot` facade with a recording transport.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use vacbot_lib::telemetry::RawCtl;
use vacbot_lib::types::{ComponentWear, VacuumStatus};
use vacbot_lib::{DeviceInfo, LivenessMonitor, MonitorMode, Transport, TransportError, VacBot};

/// Transport fake that records outgoing payloads and can fail pings.
#[derive(Clone, Default)]
struct RecordingTransport {
    sent: Rc<RefCell<Vec<String>>>,
    fail_pings: Rc<Cell<bool>>,
    pings: Rc<Cell<u32>>,
}

impl Transport for RecordingTransport {
    fn send(&self, _to: &str, payload: &str) -> Result<(), TransportError> {
        self.sent.borrow_mut().push(payload.to_string());
        Ok(())
    }

    fn ping(&self, _to: &str) -> Result<(), TransportError> {
        self.pings.set(self.pings.get() + 1);
        if self.fail_pings.get() {
            Err(TransportError::PingFailed("no answer".to_string()))
        } else {
            Ok(())
        }
    }
}

fn a_vacbot() -> (VacBot<RecordingTransport>, RecordingTransport) {
    a_vacbot_with_monitor(LivenessMonitor::new(MonitorMode::Passive))
}

fn a_vacbot_with_monitor(
    monitor: LivenessMonitor,
) -> (VacBot<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::default();
    let device = DeviceInfo::new("E0000000001234567890", "126").with_nick("bob");
    let bot = VacBot::with_monitor(device, transport.clone(), monitor);
    (bot, transport)
}

fn raw(pairs: &[(&str, &str)]) -> RawCtl {
    pairs.iter().copied().collect()
}

fn handle(bot: &mut VacBot<RecordingTransport>, pairs: &[(&str, &str)]) {
    bot.handle_message(&raw(pairs)).unwrap();
}

#[test]
fn handle_clean_report() {
    let (mut bot, _) = a_vacbot();
    assert!(bot.state().clean_status().is_none());

    handle(&mut bot, &[("event", "clean_report"), ("type", "auto"), ("speed", "strong")]);
    assert_eq!(bot.state().clean_status().unwrap().as_str(), "auto");
    assert_eq!(bot.state().fan_speed().unwrap().as_str(), "high");

    handle(&mut bot, &[("event", "clean_report"), ("type", "border"), ("speed", "standard")]);
    assert_eq!(bot.state().clean_status().unwrap().as_str(), "edge");
    assert_eq!(bot.state().fan_speed().unwrap().as_str(), "normal");
}

#[test]
fn clean_report_without_speed_leaves_fan_speed_unset() {
    let (mut bot, _) = a_vacbot();

    handle(&mut bot, &[("event", "clean_report"), ("type", "border")]);
    assert_eq!(bot.state().clean_status().unwrap().as_str(), "edge");
    assert!(bot.state().fan_speed().is_none());
}

#[test]
fn clean_report_unmapped_tokens_pass_through() {
    let (mut bot, _) = a_vacbot();

    handle(
        &mut bot,
        &[
            ("event", "clean_report"),
            ("type", "a_type_not_supported"),
            ("speed", "a_weird_speed"),
        ],
    );
    assert_eq!(
        bot.state().clean_status().unwrap().as_str(),
        "a_type_not_supported"
    );
    assert_eq!(bot.state().fan_speed().unwrap().as_str(), "a_weird_speed");
}

#[test]
fn canonical_names_on_the_wire_still_classify() {
    // Some firmware reports canonical names instead of the wire tokens;
    // they must still count as cleaning/charging.
    let (mut bot, _) = a_vacbot();

    handle(&mut bot, &[("event", "clean_report"), ("type", "edge")]);
    assert_eq!(bot.state().vacuum_status(), Some(&VacuumStatus::Edge));
    assert!(bot.state().is_cleaning());

    handle(&mut bot, &[("event", "charge_state"), ("type", "charging")]);
    assert_eq!(bot.state().charge_status().unwrap().as_str(), "charging");
    assert!(bot.state().is_charging());
}

#[test]
fn handle_charge_state() {
    let (mut bot, _) = a_vacbot();

    handle(&mut bot, &[("event", "charge_state"), ("type", "going")]);
    assert_eq!(bot.state().charge_status().unwrap().as_str(), "returning");

    handle(&mut bot, &[("event", "charge_state"), ("type", "slot_charging")]);
    assert_eq!(bot.state().charge_status().unwrap().as_str(), "charging");

    handle(&mut bot, &[("event", "charge_state"), ("type", "idle")]);
    assert_eq!(bot.state().charge_status().unwrap().as_str(), "idle");

    handle(
        &mut bot,
        &[("event", "charge_state"), ("type", "a_type_not_supported")],
    );
    assert_eq!(
        bot.state().charge_status().unwrap().as_str(),
        "a_type_not_supported"
    );
}

#[test]
fn vacuum_status_derivation() {
    // The derived status usually mirrors the latest clean or charge
    // report, except for the spurious-idle edge cases.
    let (mut bot, _) = a_vacbot();
    assert!(bot.state().vacuum_status().is_none());

    handle(&mut bot, &[("event", "clean_report"), ("type", "auto"), ("speed", "strong")]);
    assert_eq!(bot.state().vacuum_status(), Some(&VacuumStatus::Auto));

    // An "idle" charge report during a clean is noise.
    handle(&mut bot, &[("event", "clean_report"), ("type", "auto")]);
    handle(&mut bot, &[("event", "charge_state"), ("type", "idle")]);
    assert_eq!(bot.state().vacuum_status(), Some(&VacuumStatus::Auto));

    // But "idle" right after "charging" is a real transition.
    handle(&mut bot, &[("event", "charge_state"), ("type", "slot_charging")]);
    handle(&mut bot, &[("event", "charge_state"), ("type", "idle")]);
    assert_eq!(bot.state().vacuum_status(), Some(&VacuumStatus::Idle));
}

#[test]
fn handle_battery_info() {
    let (mut bot, _) = a_vacbot();
    assert!(bot.state().battery_fraction().is_none());

    handle(&mut bot, &[("event", "battery_info"), ("power", "100")]);
    assert_eq!(bot.state().battery_fraction(), Some(1.0));

    handle(&mut bot, &[("event", "battery_info"), ("power", "095")]);
    assert_eq!(bot.state().battery_fraction(), Some(0.95));

    handle(&mut bot, &[("event", "battery_info"), ("power", "000")]);
    assert_eq!(bot.state().battery_fraction(), Some(0.0));
}

#[test]
fn malformed_battery_info_is_a_decode_error() {
    let (mut bot, _) = a_vacbot();

    let err = bot
        .handle_message(&raw(&[("event", "battery_info"), ("power", "lots")]))
        .unwrap_err();
    assert!(matches!(err, vacbot_lib::Error::Decode(_)));
    assert!(bot.state().battery_fraction().is_none());
}

#[test]
fn lifespan_reports() {
    let (mut bot, _) = a_vacbot();
    assert!(bot.state().components().is_empty());

    handle(
        &mut bot,
        &[("event", "life_span"), ("type", "side_brush"), ("total", "100"), ("val", "50")],
    );
    assert_eq!(bot.state().components().get("side_brush"), Some(&0.5));

    handle(
        &mut bot,
        &[("event", "life_span"), ("type", "brush"), ("total", "200"), ("val", "1")],
    );
    assert_eq!(bot.state().components().get("main_brush"), Some(&0.005));

    handle(
        &mut bot,
        &[("event", "life_span"), ("type", "side_brush"), ("total", "100"), ("val", "0")],
    );
    assert_eq!(bot.state().components().get("side_brush"), Some(&0.0));
    assert_eq!(bot.state().components().get("main_brush"), Some(&0.005));

    handle(
        &mut bot,
        &[("event", "life_span"), ("type", "a_weird_component"), ("total", "100"), ("val", "87")],
    );
    assert_eq!(bot.state().components().get("a_weird_component"), Some(&0.87));
    assert_eq!(bot.state().components().len(), 3);
}

#[test]
fn is_cleaning() {
    let (mut bot, _) = a_vacbot();
    assert!(!bot.state().is_cleaning());

    handle(&mut bot, &[("event", "clean_report"), ("type", "auto"), ("speed", "strong")]);
    assert!(bot.state().is_cleaning());

    handle(&mut bot, &[("event", "clean_report"), ("type", "stop")]);
    assert!(!bot.state().is_cleaning());

    handle(&mut bot, &[("event", "clean_report"), ("type", "border"), ("speed", "standard")]);
    assert!(bot.state().is_cleaning());

    handle(&mut bot, &[("event", "charge_state"), ("type", "going")]);
    assert!(!bot.state().is_cleaning());
}

#[test]
fn is_charging() {
    let (mut bot, _) = a_vacbot();
    assert!(!bot.state().is_charging());

    handle(&mut bot, &[("event", "clean_report"), ("type", "auto"), ("speed", "strong")]);
    assert!(!bot.state().is_charging());

    handle(&mut bot, &[("event", "charge_state"), ("type", "going")]);
    assert!(!bot.state().is_charging());

    handle(&mut bot, &[("event", "charge_state"), ("type", "slot_charging")]);
    assert!(bot.state().is_charging());

    // A clean report flips the vacuum status but leaves the charge status
    // alone; only charge telemetry ends a charge cycle.
    handle(&mut bot, &[("event", "clean_report"), ("type", "border"), ("speed", "standard")]);
    assert!(bot.state().is_cleaning());
    assert!(bot.state().is_charging());

    handle(&mut bot, &[("event", "charge_state"), ("type", "idle")]);
    assert!(!bot.state().is_charging());
}

#[test]
fn ping_deadman_switch_passive() {
    let (mut bot, transport) = a_vacbot();

    bot.on_ping_tick().unwrap();
    assert!(bot.state().vacuum_status().is_none());

    // On four failed pings, the status flips to offline.
    transport.fail_pings.set(true);
    bot.on_ping_tick().unwrap();
    bot.on_ping_tick().unwrap();
    bot.on_ping_tick().unwrap();
    assert!(bot.state().vacuum_status().is_none());
    bot.on_ping_tick().unwrap();
    assert_eq!(bot.state().vacuum_status(), Some(&VacuumStatus::Offline));

    // A successful ping resets the status to unknown, without re-querying.
    transport.fail_pings.set(false);
    bot.on_ping_tick().unwrap();
    assert!(bot.state().vacuum_status().is_none());
    assert!(transport.sent.borrow().is_empty());
}

#[test]
fn ping_deadman_switch_active_requeries_on_recovery() {
    let (mut bot, transport) =
        a_vacbot_with_monitor(LivenessMonitor::new(MonitorMode::Active));

    transport.fail_pings.set(true);
    for _ in 0..4 {
        bot.on_ping_tick().unwrap();
    }
    assert_eq!(bot.state().vacuum_status(), Some(&VacuumStatus::Offline));

    transport.fail_pings.set(false);
    bot.on_ping_tick().unwrap();
    assert!(bot.state().vacuum_status().is_none());
    assert_eq!(
        *transport.sent.borrow(),
        vec![
            r#"<ctl td="GetCleanState"/>"#,
            r#"<ctl td="GetChargeState"/>"#,
            r#"<ctl td="GetBatteryInfo"/>"#,
        ]
    );

    // One resync per recovery, not per healthy tick.
    bot.on_ping_tick().unwrap();
    assert_eq!(transport.sent.borrow().len(), 3);
}

#[test]
fn offline_is_published_on_the_status_channel() {
    let (mut bot, transport) = a_vacbot();

    let offline_publishes = Arc::new(AtomicU32::new(0));
    let count = Arc::clone(&offline_publishes);
    bot.events().on_status(move |status| {
        if *status == VacuumStatus::Offline {
            count.fetch_add(1, Ordering::SeqCst);
        }
    });

    transport.fail_pings.set(true);
    for _ in 0..6 {
        bot.on_ping_tick().unwrap();
    }
    assert_eq!(offline_publishes.load(Ordering::SeqCst), 1);
}

#[test]
fn status_event_subscription() {
    let (mut bot, _) = a_vacbot();

    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&published);
    bot.events().on_status(move |status| sink.lock().push(status.clone()));

    handle(&mut bot, &[("event", "clean_report"), ("type", "auto"), ("speed", "strong")]);
    assert_eq!(*published.lock(), vec![VacuumStatus::Auto]);

    handle(&mut bot, &[("event", "charge_state"), ("type", "going")]);
    assert_eq!(
        *published.lock(),
        vec![VacuumStatus::Auto, VacuumStatus::Returning]
    );
}

#[test]
fn status_event_unsubscribe() {
    let (mut bot, _) = a_vacbot();

    let calls = Arc::new(AtomicU32::new(0));
    let count = Arc::clone(&calls);
    let subscription = bot.events().on_status(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
    });

    handle(&mut bot, &[("event", "charge_state"), ("type", "going")]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert!(bot.events().unsubscribe(subscription));
    handle(&mut bot, &[("event", "charge_state"), ("type", "slot_charging")]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Double unsubscribe is a no-op.
    assert!(!bot.events().unsubscribe(subscription));
}

#[test]
fn battery_event_subscription() {
    let (mut bot, _) = a_vacbot();

    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&published);
    let subscription = bot.events().on_battery(move |fraction| sink.lock().push(*fraction));

    handle(&mut bot, &[("event", "battery_info"), ("power", "095")]);
    assert_eq!(*published.lock(), vec![0.95]);

    bot.events().unsubscribe(subscription);
    handle(&mut bot, &[("event", "battery_info"), ("power", "090")]);
    assert_eq!(*published.lock(), vec![0.95]);
}

#[test]
fn lifespan_event_subscription() {
    let (mut bot, _) = a_vacbot();

    let published = Arc::new(Mutex::new(Vec::<ComponentWear>::new()));
    let sink = Arc::clone(&published);
    let subscription = bot.events().on_lifespan(move |wear| sink.lock().push(wear.clone()));

    handle(
        &mut bot,
        &[("event", "life_span"), ("type", "side_brush"), ("total", "100"), ("val", "50")],
    );
    {
        let events = published.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].component, "side_brush");
        assert_eq!(events[0].level, 0.5);
    }

    bot.events().unsubscribe(subscription);
    handle(
        &mut bot,
        &[("event", "life_span"), ("type", "side_brush"), ("total", "100"), ("val", "25")],
    );
    assert_eq!(published.lock().len(), 1);
}

#[test]
fn error_event_subscription() {
    let (mut bot, _) = a_vacbot();

    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&published);
    bot.events().on_error(move |message| sink.lock().push(message.to_string()));

    handle(&mut bot, &[("event", "error"), ("error", "an_error_name")]);
    assert_eq!(*published.lock(), vec!["an_error_name".to_string()]);

    handle(&mut bot, &[("event", "error"), ("errno", "102")]);
    assert_eq!(
        published.lock().last().unwrap(),
        "HostHang: Robot is off the floor"
    );

    handle(&mut bot, &[("event", "error"), ("errno", "999")]);
    assert_eq!(published.lock().last().unwrap(), "unknown");

    handle(&mut bot, &[("event", "error")]);
    assert_eq!(published.lock().last().unwrap(), "unknown");
}

#[test]
fn handle_unknown_ctl() {
    let (mut bot, _) = a_vacbot();
    // As long as it doesn't blow up or touch the state, that's fine.
    handle(&mut bot, &[("event", "weird_and_unknown_event"), ("type", "pretty_weird")]);
    assert!(bot.state().vacuum_status().is_none());
}

#[test]
fn bot_address() {
    let (bot, _) = a_vacbot();
    assert_eq!(bot.address(), "E0000000001234567890@126.ecorobot.net/atom");
}

#[test]
fn bot_address_model_variation() {
    let transport = RecordingTransport::default();
    let device = DeviceInfo::new("E0000000001234567890", "141").with_nick("bob");
    let bot = VacBot::new(device, transport);
    assert_eq!(bot.address(), "E0000000001234567890@141.ecorobot.net/atom");
}

#[test]
fn commands_are_sent_to_the_device_address() {
    let (bot, transport) = a_vacbot();

    bot.charge().unwrap();
    bot.play_sound().unwrap();
    assert_eq!(
        *transport.sent.borrow(),
        vec![
            r#"<ctl td="Charge"><charge type="go"/></ctl>"#,
            r#"<ctl td="PlaySound" sid="0"/>"#,
        ]
    );
}

#[test]
fn request_all_statuses_sends_the_query_set() {
    let (bot, transport) = a_vacbot();

    bot.request_all_statuses().unwrap();
    assert_eq!(
        *transport.sent.borrow(),
        vec![
            r#"<ctl td="GetCleanState"/>"#,
            r#"<ctl td="GetChargeState"/>"#,
            r#"<ctl td="GetBatteryInfo"/>"#,
        ]
    );
}
