mod common;

use common::Page;
use movee_core::{
    ConfigurationError, ControlIds, ControlKind, Dispatch, InputEvent, Key, MoveOutcome, Movee,
    MoveeConfig, Offset, setup_movement,
};

fn movee(page: Page) -> Movee<Page> {
    Movee::configure(page, MoveeConfig::CONTAINER_ID, MoveeConfig::MOVEE_ID, 20).unwrap()
}

fn click(id: &str) -> InputEvent {
    InputEvent::Click(id.to_string())
}

fn change(value: &str) -> InputEvent {
    InputEvent::Change {
        control: MoveeConfig::STEP_INPUT_ID.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn setup_fails_fast_on_missing_control() {
    let movee = movee(Page::reference().without_control(MoveeConfig::MOVE_UP_ID));
    let err = setup_movement(&movee, ControlIds::default()).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::MissingControl(MoveeConfig::MOVE_UP_ID.to_string())
    );
}

#[test]
fn setup_rejects_controls_of_the_wrong_kind() {
    let mut page = Page::reference();
    page.controls
        .insert(MoveeConfig::STEP_INPUT_ID.to_string(), ControlKind::Button);

    let err = setup_movement(&movee(page), ControlIds::default()).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::ControlKindMismatch {
            expected: ControlKind::NumberInput,
            found: ControlKind::Button,
            ..
        }
    ));
}

#[test]
fn buttons_and_arrow_keys_drive_the_movee() {
    let mut movee = movee(Page::reference().with_box_at(100.0, 100.0));
    let bindings = setup_movement(&movee, ControlIds::default()).unwrap();

    let events = [
        (click(MoveeConfig::MOVE_RIGHT_ID), Offset::new(120, 100)),
        (click(MoveeConfig::MOVE_DOWN_ID), Offset::new(120, 120)),
        (InputEvent::KeyDown(Key::ArrowLeft), Offset::new(100, 120)),
        (InputEvent::KeyDown(Key::ArrowUp), Offset::new(100, 100)),
        (click(MoveeConfig::MOVE_UP_ID), Offset::new(100, 80)),
        (InputEvent::KeyDown(Key::ArrowRight), Offset::new(120, 80)),
        (InputEvent::KeyDown(Key::ArrowDown), Offset::new(120, 100)),
        (click(MoveeConfig::MOVE_LEFT_ID), Offset::new(100, 100)),
    ];

    for (event, expected) in events {
        let dispatch = bindings.dispatch(&mut movee, &event).unwrap();
        assert!(matches!(dispatch, Dispatch::Moved(MoveOutcome::Moved { .. })));
        assert_eq!(movee.position(), expected, "after {event:?}");
    }
}

#[test]
fn unknown_keys_and_controls_are_ignored() {
    let mut movee = movee(Page::reference().with_box_at(100.0, 100.0));
    let bindings = setup_movement(&movee, ControlIds::default()).unwrap();

    for event in [
        InputEvent::KeyDown(Key::Other("KeyX".into())),
        InputEvent::KeyDown(Key::Other("Enter".into())),
        click("somewhere-else"),
        InputEvent::Change {
            control: "other-input".into(),
            value: "5".into(),
        },
    ] {
        assert_eq!(bindings.dispatch(&mut movee, &event), Ok(Dispatch::Ignored));
    }
    assert_eq!(movee.position(), Offset::new(100, 100));
    assert_eq!(movee.step_size().get(), 20);
}

#[test]
fn step_input_changes_the_step_size() {
    let mut movee = movee(Page::reference());
    let bindings = setup_movement(&movee, ControlIds::default()).unwrap();

    let dispatch = bindings.dispatch(&mut movee, &change("45")).unwrap();
    assert!(matches!(dispatch, Dispatch::StepSizeChanged(step) if step.get() == 45));

    bindings
        .dispatch(&mut movee, &InputEvent::KeyDown(Key::ArrowRight))
        .unwrap();
    assert_eq!(movee.position().left, 45);
}

#[test]
fn invalid_step_input_is_rejected_without_side_effects() {
    let mut movee = movee(Page::reference());
    let bindings = setup_movement(&movee, ControlIds::default()).unwrap();

    for value in ["0", "-5", "", "abc", "7px"] {
        assert!(matches!(
            bindings.dispatch(&mut movee, &change(value)),
            Err(ConfigurationError::InvalidStepSize(_))
        ));
    }
    assert_eq!(movee.step_size().get(), 20);
}

#[test]
fn blocked_moves_are_reported_not_raised() {
    let mut movee = movee(Page::reference());
    let bindings = setup_movement(&movee, ControlIds::default()).unwrap();

    assert_eq!(
        bindings.dispatch(&mut movee, &click(MoveeConfig::MOVE_LEFT_ID)),
        Ok(Dispatch::Moved(MoveOutcome::Blocked))
    );
}

#[test]
fn custom_control_ids_are_honoured() {
    let mut page = Page::reference();
    page.controls.insert("west".into(), ControlKind::Button);
    let controls = ControlIds {
        left: "west".into(),
        ..ControlIds::default()
    };

    let mut movee = movee(page.with_box_at(40.0, 0.0));
    let bindings = setup_movement(&movee, controls).unwrap();

    assert_eq!(
        bindings.dispatch(&mut movee, &click(MoveeConfig::MOVE_LEFT_ID)),
        Ok(Dispatch::Ignored)
    );
    assert!(matches!(
        bindings.dispatch(&mut movee, &click("west")),
        Ok(Dispatch::Moved(MoveOutcome::Moved { .. }))
    ));
    assert_eq!(movee.position().left, 20);
}
