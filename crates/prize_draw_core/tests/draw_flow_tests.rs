mod support;

use prize_draw_core::contract::{EntryId, Rank};
use prize_draw_core::draw::{DrawController, DrawPhase, DEFAULT_SHAKE_DELAY};
use prize_draw_core::inventory::PrizeInventory;
use prize_draw_core::presentation::result_descriptor;
use support::{rows, service_error, Call, FakePrizeService, RecordingPause};

fn controller(id: &str) -> DrawController {
    DrawController::new(EntryId::new(id).expect("valid id"))
}

#[test]
fn recorded_outcome_starts_done_and_never_draws() {
    for rank in [Rank::NONE, Rank::SECOND, Rank::THIRD, Rank(8)] {
        let service = FakePrizeService::new()
            .with_inventory(rows(Some(3), Some(4)))
            .with_entry("E1", Some(rank))
            .with_draw_results(vec![Ok(Rank::SECOND)]);
        let pause = RecordingPause::new();
        let mut controller = controller("E1");

        controller.initialize(&service);
        assert_eq!(controller.phase(), DrawPhase::Done);
        assert_eq!(controller.result(), Some(rank));

        assert!(!controller.draw(&service, &pause));
        assert_eq!(service.draw_calls(), 0);
        assert!(pause.pauses().is_empty());
        assert_eq!(controller.result(), Some(rank));
    }
}

#[test]
fn initialization_loads_inventory_with_fixed_fallbacks() {
    let service = FakePrizeService::new()
        .with_inventory(rows(None, Some(12)))
        .with_entry("E1", None);
    let mut controller = controller("E1");

    controller.initialize(&service);

    assert_eq!(controller.phase(), DrawPhase::Idle);
    assert_eq!(controller.inventory(), PrizeInventory::new(40, 12));
    assert_eq!(
        service.calls(),
        vec![
            Call::ListInventory,
            Call::FetchOutcome(EntryId::new("E1").expect("valid id"))
        ]
    );
}

#[test]
fn failed_initial_fetches_leave_controller_idle_and_usable() {
    let service = FakePrizeService::new().with_draw_results(vec![Ok(Rank::THIRD)]);
    let pause = RecordingPause::new();
    let mut controller = controller("missing");

    controller.initialize(&service);
    assert_eq!(controller.phase(), DrawPhase::Idle);
    assert_eq!(controller.inventory(), PrizeInventory::default());
    assert!(controller.is_ready());

    assert!(controller.draw(&service, &pause));
    assert_eq!(controller.phase(), DrawPhase::Done);
    assert_eq!(controller.result(), Some(Rank::THIRD));
}

#[test]
fn repeated_triggers_after_first_have_no_effect() {
    let service = FakePrizeService::new()
        .with_inventory(rows(Some(5), Some(9)))
        .with_entry("E1", None)
        .with_draw_results(vec![Ok(Rank::SECOND), Ok(Rank::THIRD)]);
    let pause = RecordingPause::new();
    let mut controller = controller("E1");
    controller.initialize(&service);

    assert!(controller.begin_draw());
    for _ in 0..5 {
        assert!(!controller.begin_draw());
        assert!(!controller.draw(&service, &pause));
    }
    assert_eq!(controller.phase(), DrawPhase::Shaking);
    assert_eq!(service.draw_calls(), 0);
    assert!(pause.pauses().is_empty());
}

#[test]
fn draw_after_done_is_a_no_op() {
    let service = FakePrizeService::new()
        .with_inventory(rows(Some(5), Some(9)))
        .with_entry("E1", None)
        .with_draw_results(vec![Ok(Rank::SECOND), Ok(Rank::THIRD)]);
    let pause = RecordingPause::new();
    let mut controller = controller("E1");
    controller.initialize(&service);

    assert!(controller.draw(&service, &pause));
    assert!(!controller.draw(&service, &pause));
    assert_eq!(service.draw_calls(), 1);
    assert_eq!(controller.result(), Some(Rank::SECOND));
    assert_eq!(pause.pauses(), vec![DEFAULT_SHAKE_DELAY]);
}

#[test]
fn failure_reverts_to_idle_and_retry_succeeds() {
    let service = FakePrizeService::new()
        .with_inventory(rows(Some(5), Some(9)))
        .with_entry("E1", None)
        .with_draw_results(vec![Err(service_error("deadlock")), Ok(Rank::THIRD)])
        .with_inventory_after_draw(rows(Some(5), Some(8)));
    let pause = RecordingPause::new();
    let mut controller = controller("E1");
    controller.initialize(&service);

    assert!(controller.draw(&service, &pause));
    assert_eq!(controller.phase(), DrawPhase::Idle);
    assert_eq!(controller.result(), None);
    assert_eq!(controller.inventory(), PrizeInventory::new(5, 9));
    assert_eq!(service.recorded_outcome("E1"), None);
    // No refresh after a failed draw.
    assert_eq!(
        service
            .calls()
            .iter()
            .filter(|call| **call == Call::ListInventory)
            .count(),
        1
    );

    assert!(controller.draw(&service, &pause));
    assert_eq!(controller.phase(), DrawPhase::Done);
    assert_eq!(controller.result(), Some(Rank::THIRD));
    assert_eq!(controller.inventory(), PrizeInventory::new(5, 8));
    assert_eq!(service.draw_calls(), 2);
}

#[test]
fn refresh_falls_back_to_pre_draw_values_per_rank() {
    let service = FakePrizeService::new()
        .with_inventory(rows(Some(5), Some(9)))
        .with_inventory_after_draw(rows(None, Some(8)))
        .with_entry("E1", None)
        .with_draw_results(vec![Ok(Rank::THIRD)]);
    let pause = RecordingPause::new();
    let mut controller = controller("E1");
    controller.initialize(&service);
    assert_eq!(controller.inventory(), PrizeInventory::new(5, 9));

    controller.draw(&service, &pause);

    assert_eq!(controller.inventory(), PrizeInventory::new(5, 8));
}

#[test]
fn unknown_rank_reaches_done_without_panel() {
    let service = FakePrizeService::new()
        .with_inventory(rows(Some(5), Some(9)))
        .with_entry("E1", None)
        .with_draw_results(vec![Ok(Rank(5))]);
    let pause = RecordingPause::new();
    let mut controller = controller("E1");
    controller.initialize(&service);

    controller.draw(&service, &pause);

    assert_eq!(controller.phase(), DrawPhase::Done);
    assert_eq!(controller.result(), Some(Rank(5)));
    assert_eq!(controller.descriptor(), None);
    assert_eq!(result_descriptor(Rank(5)), None);
}

#[test]
fn null_draw_reply_completes_without_panel_and_refreshes() {
    let service = FakePrizeService::new()
        .with_inventory(rows(Some(5), Some(9)))
        .with_inventory_after_draw(rows(Some(5), Some(8)))
        .with_entry("E1", None)
        .with_draw_replies(vec![Ok(None), Ok(Some(Rank::THIRD))]);
    let pause = RecordingPause::new();
    let mut controller = controller("E1");
    controller.initialize(&service);

    assert!(controller.draw(&service, &pause));

    assert_eq!(controller.phase(), DrawPhase::Done);
    assert_eq!(controller.result(), None);
    assert_eq!(controller.descriptor(), None);
    assert_eq!(controller.inventory(), PrizeInventory::new(5, 8));

    assert!(!controller.draw(&service, &pause));
    assert_eq!(service.draw_calls(), 1);
}

#[test]
fn shake_delay_is_configurable() {
    let service = FakePrizeService::new()
        .with_inventory(rows(Some(5), Some(9)))
        .with_entry("E1", None)
        .with_draw_results(vec![Ok(Rank::NONE)]);
    let pause = RecordingPause::new();
    let mut controller =
        controller("E1").with_shake_delay(std::time::Duration::from_millis(250));
    controller.initialize(&service);

    controller.draw(&service, &pause);

    assert_eq!(pause.pauses(), vec![std::time::Duration::from_millis(250)]);
    assert_eq!(controller.result(), Some(Rank::NONE));
}
