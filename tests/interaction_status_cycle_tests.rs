use radar_rs::api::{RadarEngine, RadarEngineConfig};
use radar_rs::core::types::{AxisSpec, DatasetSpec, DatasetStatus};
use radar_rs::interaction::HoverTarget;
use radar_rs::render::NullRenderer;

fn engine_with(datasets: Vec<DatasetSpec>) -> RadarEngine<NullRenderer> {
    let mut engine =
        RadarEngine::new(NullRenderer::default(), RadarEngineConfig::new()).expect("engine init");
    engine
        .set_axes(vec![
            AxisSpec::new("Speed").with_max_value(100.0),
            AxisSpec::new("Power").with_max_value(100.0),
            AxisSpec::new("Range").with_max_value(100.0),
        ])
        .expect("axes");
    engine.set_datasets(datasets).expect("datasets");
    engine
}

#[test]
fn click_cycles_with_period_three() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Active);

    engine.legend_click(0).expect("click");
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Highlighted);
    engine.legend_click(0).expect("click");
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Inactive);
    engine.legend_click(0).expect("click");
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Active);
}

#[test]
fn three_clicks_return_a_dataset_to_its_original_status() {
    for start in [
        DatasetStatus::Inactive,
        DatasetStatus::Active,
        DatasetStatus::Highlighted,
    ] {
        let mut engine = engine_with(vec![
            DatasetSpec::new("a"),
            DatasetSpec::new("b").with_status(start),
        ]);
        for _ in 0..3 {
            engine.legend_click(1).expect("click");
        }
        assert_eq!(engine.datasets()[1].status, start);
    }
}

#[test]
fn hidden_is_never_reached_by_clicking() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    for _ in 0..12 {
        engine.legend_click(0).expect("click");
        assert_ne!(engine.datasets()[0].status, DatasetStatus::Hidden);
    }
}

#[test]
fn clicking_a_hidden_dataset_is_a_no_op_on_status() {
    let mut engine = engine_with(vec![
        DatasetSpec::new("a").with_status(DatasetStatus::Hidden),
        DatasetSpec::new("b"),
    ]);
    engine.legend_click(0).expect("click");
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Hidden);
}

#[test]
fn click_rejects_out_of_range_index() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    assert!(engine.legend_click(5).is_err());
}

#[test]
fn polygon_click_matches_legend_click() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    engine.polygon_click(0).expect("click");
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Highlighted);
}

#[test]
fn hover_marks_without_changing_status() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    engine.hover_dataset(0);
    assert_eq!(engine.hovered(), Some(HoverTarget::Dataset(0)));
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Active);

    engine.hover_leave();
    assert_eq!(engine.hovered(), None);
}

#[test]
fn long_press_pins_a_persistent_highlight() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    engine.press_began_dataset(0);
    assert_eq!(engine.pinned_highlight(), None);

    let changed = engine.advance(600.0).expect("advance");
    assert!(changed);
    assert_eq!(engine.pinned_highlight(), Some(HoverTarget::Dataset(0)));

    // Survives release, cleared by a tap elsewhere.
    engine.press_released().expect("release");
    assert_eq!(engine.pinned_highlight(), Some(HoverTarget::Dataset(0)));
    engine.background_tap();
    assert_eq!(engine.pinned_highlight(), None);
}

#[test]
fn short_press_release_acts_as_a_tap() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    engine.press_began_dataset(0);
    engine.advance(100.0).expect("advance");
    engine.press_released().expect("release");
    assert_eq!(engine.datasets()[0].status, DatasetStatus::Highlighted);
    assert_eq!(engine.pinned_highlight(), None);
}

#[test]
fn axis_click_toggles_the_pinned_axis_highlight() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    engine.axis_click(1).expect("axis click");
    assert!(engine.axes()[1].highlighted);
    assert!(!engine.axes()[0].highlighted);

    engine.axis_click(1).expect("axis click");
    assert!(!engine.axes()[1].highlighted);
}

#[test]
fn axis_hover_is_transient() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    engine.hover_axis(2);
    assert_eq!(engine.hovered(), Some(HoverTarget::Axis(2)));
    // Hover never pins the axis itself.
    assert!(!engine.axes()[2].highlighted);
    engine.hover_leave();
    assert_eq!(engine.hovered(), None);
}

#[test]
fn data_change_starts_the_animation_window() {
    let mut engine = engine_with(vec![DatasetSpec::new("a")]);
    assert!(engine.is_animating());
    engine.advance(2_000.0).expect("advance");
    assert!(!engine.is_animating());
}
