//! Integration tests for Encajar widgets driven through the fake host.

use encajar_core::{Key, LightChild};
use encajar_test::Harness;
use encajar_widgets::{Alert, Tabs, Toggle, CHANGE_EVENT};

fn tabs_harness(children: Vec<LightChild>) -> Harness<Tabs> {
    let mut harness = Harness::new(Tabs::new());
    for child in children {
        harness = harness.child(child);
    }
    harness.connect()
}

fn three_tabs() -> Vec<LightChild> {
    (0..3)
        .map(|i| {
            LightChild::new()
                .slot(format!("tab-{i}"))
                .data("label", format!("Tab {}", i + 1))
        })
        .collect()
}

#[test]
fn activation_selects_exactly_one_button_and_panel() {
    let mut harness = tabs_harness(three_tabs());

    harness.click("#tab-1-tab");

    let selected: Vec<_> = harness
        .query_all(".x-tabs__button")
        .iter()
        .map(|b| b.get_attr("aria-selected").unwrap_or("").to_string())
        .collect();
    assert_eq!(selected, ["false", "true", "false"]);

    for (id, hidden) in [("#tab-0", true), ("#tab-1", false), ("#tab-2", true)] {
        let panel = harness.query(id).unwrap();
        assert_eq!(panel.has_class("hidden"), hidden, "panel {id}");
        assert_eq!(panel.has_attr("hidden"), hidden, "panel {id}");
    }
}

#[test]
fn invalid_activation_changes_nothing_and_emits_nothing() {
    let children = vec![
        LightChild::new().slot("tab-0"),
        LightChild::new().slot("tab-1").data("visible", "false"),
    ];
    let mut harness = tabs_harness(children);

    assert!(harness.widget.activate(1).is_none());
    assert!(harness.widget.activate(9).is_none());

    assert_eq!(harness.widget.current_tab(), 0);
    assert!(harness.events().is_empty());
    harness.assert_attr("#tab-0-tab", "aria-selected", "true");
}

#[test]
fn full_scenario_external_silence_then_click_notification() {
    // Three children slotted tab-0..2, current-tab unset.
    let mut harness = tabs_harness(three_tabs());

    harness.assert_attr("#tab-0-tab", "aria-selected", "true");
    assert!(harness.query("#tab-1").unwrap().has_class("hidden"));
    assert!(harness.query("#tab-2").unwrap().has_class("hidden"));

    // External mutation: panel 2 becomes visible, no notification.
    harness.set_attribute("current-tab", "2");
    assert!(!harness.query("#tab-2").unwrap().has_class("hidden"));
    assert!(harness.query("#tab-0").unwrap().has_class("hidden"));
    assert!(harness.events().is_empty());

    // Click button 1: notification fires with previousIndex 2.
    harness.click("#tab-1-tab");
    let (event, detail) = &harness.events()[0];
    assert_eq!(event, CHANGE_EVENT);
    assert_eq!(detail["previousIndex"], 2);
    assert_eq!(detail["currentIndex"], 1);
    harness.assert_attr("#tab-1-tab", "tabindex", "0");
}

#[test]
fn hidden_tab_leaves_panel_addressable() {
    let children = vec![
        LightChild::new().slot("tab-0"),
        LightChild::new().slot("tab-1").data("visible", "false"),
        LightChild::new().slot("tab-2"),
    ];
    let mut harness = tabs_harness(children);

    // Button list is two entries; traversal skips the hidden middle tab.
    assert_eq!(harness.query_all(".x-tabs__button").len(), 2);
    harness.focus("#tab-0-tab");
    harness.press_key(Key::Right);
    assert_eq!(harness.focused_id(), Some("tab-2-tab"));

    // Its panel still renders and stays addressable by id.
    assert!(harness.query("#tab-1").is_some());
}

#[test]
fn roving_tabindex_holds_across_interactions() {
    let mut harness = tabs_harness(three_tabs());

    let assert_single_zero = |harness: &Harness<Tabs>, expected: &str| {
        let buttons = harness.query_all(".x-tabs__button");
        let zeros: Vec<_> = buttons
            .iter()
            .filter(|b| b.get_attr("tabindex") == Some("0"))
            .collect();
        assert_eq!(zeros.len(), 1);
        assert_eq!(zeros[0].id(), Some(expected));
    };

    assert_single_zero(&harness, "tab-0-tab");

    harness.click("#tab-2-tab");
    assert_single_zero(&harness, "tab-2-tab");

    harness.set_attribute("current-tab", "1");
    assert_single_zero(&harness, "tab-1-tab");
}

#[test]
fn keyboard_wrap_around_both_directions() {
    let mut harness = tabs_harness(three_tabs());

    harness.focus("#tab-2-tab");
    harness.press_key(Key::Right);
    assert_eq!(harness.focused_id(), Some("tab-0-tab"));

    harness.press_key(Key::Left);
    assert_eq!(harness.focused_id(), Some("tab-2-tab"));

    harness.press_key(Key::Home);
    assert_eq!(harness.focused_id(), Some("tab-0-tab"));

    harness.press_key(Key::End);
    assert_eq!(harness.focused_id(), Some("tab-2-tab"));
}

#[test]
fn programmatic_activation_uses_commit_validation() {
    let mut harness = tabs_harness(three_tabs());

    let message = harness.widget.activate(2);
    assert!(message.is_some());
    assert_eq!(harness.widget.current_tab(), 2);
    assert_eq!(harness.widget.visible_count(), 3);
}

#[test]
fn structural_rescan_drops_hidden_button_keeps_panel() {
    let mut harness = tabs_harness(three_tabs());
    assert_eq!(harness.query_all(".x-tabs__button").len(), 3);

    // The middle child turns invisible; the model is rebuilt whole.
    let mut children = three_tabs();
    children[1] = LightChild::new().slot("tab-1").data("visible", "false");
    harness.set_children(children);

    assert_eq!(harness.query_all(".x-tabs__button").len(), 2);
    assert!(harness.query("#tab-1-tab").is_none());
    assert!(harness.query("#tab-1").is_some());

    harness.focus("#tab-0-tab");
    harness.press_key(Key::Right);
    assert_eq!(harness.focused_id(), Some("tab-2-tab"));
}

#[test]
fn alert_lifecycle_close_and_timer() {
    let mut harness = Harness::new(Alert::new())
        .attr("type", "warning")
        .attr("closeable", "")
        .attr("self-destruct-in", "3")
        .connect();

    assert!(harness.query(".x-alert").unwrap().has_class("x-alert--warning"));
    assert_eq!(harness.scheduled_removal(), Some(3));

    // Replacing the delay cancels the previous timer.
    harness.set_attribute("self-destruct-in", "8");
    assert_eq!(harness.scheduled_removal(), Some(8));

    harness.click(".x-alert__close");
    assert!(harness.is_removed());
}

#[test]
fn toggle_round_trip_between_user_and_attribute() {
    let mut harness = Harness::new(Toggle::new()).attr("name", "wifi").connect();

    // User change reflects to the host attribute and notifies.
    harness.change(true);
    assert_eq!(harness.host_attr("checked"), Some(""));
    assert_eq!(harness.events().len(), 1);

    // Attribute change mirrors silently.
    harness.remove_attribute("checked");
    assert!(!harness.widget.is_checked());
    assert_eq!(harness.events().len(), 1);
    assert!(!harness
        .query(".x-toggle__input")
        .unwrap()
        .has_attr("checked"));
}
