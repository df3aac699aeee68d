// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the event bus and event formatting.

use std::net::Ipv4Addr;

use picolink_common::service::EVENT_BUS_CAPACITY;
use picolink_common::{EventBus, InterfaceState, LinkEvent, ReadyAddr, SupervisorConfig};

fn changed(state: InterfaceState) -> LinkEvent {
    LinkEvent::StateChanged { state, addr: None }
}

#[test]
fn test_drain_preserves_publish_order() {
    let bus = EventBus::new();
    bus.publish(changed(InterfaceState::Up));
    bus.publish(LinkEvent::ForceDown { active: true });
    bus.publish(changed(InterfaceState::Joining));

    let mut seen = Vec::new();
    bus.drain(|e| seen.push(e));

    assert_eq!(
        seen,
        [
            changed(InterfaceState::Up),
            LinkEvent::ForceDown { active: true },
            changed(InterfaceState::Joining),
        ]
    );
    assert!(bus.is_empty());
}

#[test]
fn test_consume_removes_matching_only() {
    let bus = EventBus::new();
    bus.publish(changed(InterfaceState::Up));
    bus.publish(LinkEvent::ForceDown { active: true });

    bus.consume(|e| matches!(e, LinkEvent::ForceDown { .. }));

    assert_eq!(bus.len(), 1);
    assert!(bus.has_event(|e| matches!(e, LinkEvent::StateChanged { .. })));
    assert!(!bus.has_event(|e| matches!(e, LinkEvent::ForceDown { .. })));
}

#[test]
fn test_full_bus_drops_new_events() {
    let bus = EventBus::new();
    for _ in 0..EVENT_BUS_CAPACITY {
        bus.publish(changed(InterfaceState::Up));
    }
    bus.publish(LinkEvent::ForceDown { active: true });

    assert_eq!(bus.len(), EVENT_BUS_CAPACITY);
    assert!(!bus.has_event(|e| matches!(e, LinkEvent::ForceDown { .. })));
}

#[test]
fn test_event_display() {
    let ready = LinkEvent::StateChanged {
        state: InterfaceState::Ready,
        addr: Some(ReadyAddr {
            ip: Ipv4Addr::new(10, 1, 2, 3),
            gateway: Ipv4Addr::new(10, 1, 2, 254),
        }),
    };

    assert_eq!(ready.to_string(), "IP state: READY, IP: 10.1.2.3, GW: 10.1.2.254");
    assert_eq!(changed(InterfaceState::Down).to_string(), "IP state: DOWN");
    assert_eq!(
        LinkEvent::ForceDown { active: true }.to_string(),
        "Force down: on"
    );
    assert_eq!(
        LinkEvent::ForceDown { active: false }.to_string(),
        "Force down: off"
    );
}

#[test]
fn test_default_config() {
    let config = SupervisorConfig::default();

    assert_eq!(config.link_up_blink_ms, 500);
    assert_eq!(config.link_down_blink_ms, 100);
    assert_eq!(config.join_down_ms, 3000);
    assert_eq!(config.poll_wait_ms, 50);
    assert_eq!(config.blink_interval(true), 500);
    assert_eq!(config.blink_interval(false), 100);
}
