use radar_rs::api::{RadarEngine, RadarEngineConfig, RadarOptions};
use radar_rs::core::types::{AxisSpec, DatasetSpec, DatasetStatus};
use radar_rs::render::NullRenderer;

fn chart_only_options() -> RadarOptions {
    let mut options = RadarOptions::default();
    options.show_legend = false;
    options
}

fn engine_with(options: RadarOptions, datasets: Vec<DatasetSpec>) -> RadarEngine<NullRenderer> {
    let mut engine = RadarEngine::new(
        NullRenderer::default(),
        RadarEngineConfig::new().with_options(options),
    )
    .expect("engine init");
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

fn settle(engine: &mut RadarEngine<NullRenderer>) {
    // Step past the data-change crossfade so alphas are at rest.
    engine.advance(2_000.0).expect("advance");
}

#[test]
fn hidden_datasets_render_no_polygon() {
    let engine = engine_with(
        chart_only_options(),
        vec![
            DatasetSpec::new("a"),
            DatasetSpec::new("b").with_status(DatasetStatus::Hidden),
        ],
    );
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.paths.len(), 1);
}

#[test]
fn hidden_datasets_render_no_legend_row() {
    let mut engine = RadarEngine::new(
        NullRenderer::default(),
        RadarEngineConfig::new().with_width(600),
    )
    .expect("engine init");
    engine
        .set_axes(vec![AxisSpec::new("Speed"), AxisSpec::new("Power")])
        .expect("axes");
    engine
        .set_datasets(vec![
            DatasetSpec::new("a"),
            DatasetSpec::new("b").with_status(DatasetStatus::Hidden),
        ])
        .expect("datasets");

    let frame = engine.build_render_frame().expect("frame");
    // Background + legend block + one swatch.
    assert_eq!(frame.rects.len(), 3);
    assert!(frame.texts.iter().any(|t| t.text == "a"));
    assert!(!frame.texts.iter().any(|t| t.text == "b"));
}

#[test]
fn draw_order_is_the_reverse_of_the_stacking_order() {
    let mut engine = engine_with(
        chart_only_options(),
        vec![DatasetSpec::new("a"), DatasetSpec::new("b")],
    );
    settle(&mut engine);

    // Default stack [0, 1]: dataset 0 (blue #3b82f6) draws last.
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.paths.len(), 2);
    let top_stroke = frame.paths[1].stroke_color.expect("stroke");
    assert!((top_stroke.red - 59.0 / 255.0).abs() < 1e-6);

    // Clicking dataset 1 (red #ef4444) moves it to the front.
    engine.legend_click(1).expect("click");
    settle(&mut engine);
    let frame = engine.build_render_frame().expect("frame");
    let top_stroke = frame.paths[1].stroke_color.expect("stroke");
    assert!((top_stroke.red - 239.0 / 255.0).abs() < 1e-6);
}

#[test]
fn topmost_dataset_gets_boosted_stroke_opacity() {
    let mut engine = engine_with(
        chart_only_options(),
        vec![DatasetSpec::new("a"), DatasetSpec::new("b")],
    );
    settle(&mut engine);

    let frame = engine.build_render_frame().expect("frame");
    let below = frame.paths[0].stroke_color.expect("stroke");
    let top = frame.paths[1].stroke_color.expect("stroke");
    assert!((below.alpha - 0.8).abs() < 1e-9);
    assert!((top.alpha - 0.9).abs() < 1e-9);
}

#[test]
fn inactive_datasets_draw_a_gray_outline_without_fill() {
    let mut engine = engine_with(chart_only_options(), vec![DatasetSpec::new("a")]);
    engine.legend_click(0).expect("click"); // Highlighted
    engine.legend_click(0).expect("click"); // Inactive
    settle(&mut engine);

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.paths.len(), 1);
    assert!(frame.paths[0].fill.is_none());
    let stroke = frame.paths[0].stroke_color.expect("stroke");
    assert_eq!(stroke.red, stroke.green);
    assert_eq!(stroke.green, stroke.blue);
    // No vertex dots on grayed-out datasets.
    assert!(frame.markers.is_empty());
}

#[test]
fn grid_toggle_controls_ring_circles() {
    let engine = engine_with(chart_only_options(), vec![DatasetSpec::new("a")]);
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.circles.len(), 5);

    let mut options = chart_only_options();
    options.show_grid = false;
    let engine = engine_with(options, vec![DatasetSpec::new("a")]);
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.circles.is_empty());
}

#[test]
fn labels_toggle_controls_spoke_labels() {
    let engine = engine_with(chart_only_options(), vec![DatasetSpec::new("a")]);
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.texts.len(), 3);
    assert!(frame.texts.iter().any(|t| t.text == "Speed"));

    let mut options = chart_only_options();
    options.show_labels = false;
    let engine = engine_with(options, vec![DatasetSpec::new("a")]);
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.texts.is_empty());
}

#[test]
fn pinned_axis_draws_the_zoomed_ruler() {
    let mut engine = engine_with(chart_only_options(), vec![DatasetSpec::new("a")]);
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 3);

    engine.axis_click(0).expect("axis click");
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 9);
    assert!(frame.texts.iter().any(|t| t.text == "100"));
    assert!(frame.texts.iter().any(|t| t.text == "20"));
}

#[test]
fn show_values_draws_a_bubble_per_vertex() {
    let mut options = chart_only_options();
    options.show_values = true;
    options.show_labels = false;
    let engine = engine_with(
        options,
        vec![
            DatasetSpec::new("a")
                .with_value("Speed", 85.0)
                .with_value("Power", 42.5),
        ],
    );

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.markers.len(), 3);
    assert_eq!(frame.texts.len(), 3);
    assert!(frame.texts.iter().any(|t| t.text == "85"));
    assert!(frame.texts.iter().any(|t| t.text == "42.5"));
    assert!(frame.texts.iter().any(|t| t.text == "0"));
}

#[test]
fn playback_forces_bubbles_for_the_active_step_only() {
    let mut options = chart_only_options();
    options.show_labels = false;
    let mut engine = engine_with(
        options,
        vec![DatasetSpec::new("a"), DatasetSpec::new("b")],
    );
    engine.play();
    engine.advance(1_000.0).expect("advance");

    let frame = engine.build_render_frame().expect("frame");
    // Step 0 fired: dataset 0 active with bubbles, dataset 1 still hidden.
    assert_eq!(frame.paths.len(), 1);
    assert_eq!(frame.markers.len(), 3);
    assert_eq!(frame.texts.len(), 3);
}

#[test]
fn empty_axes_produce_a_background_only_frame() {
    let mut engine = RadarEngine::new(
        NullRenderer::default(),
        RadarEngineConfig::new().with_options(chart_only_options()),
    )
    .expect("engine init");
    engine.set_datasets(vec![DatasetSpec::new("a")]).expect("datasets");

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.rects.len(), 1);
    assert!(frame.paths.is_empty());
    assert!(frame.circles.is_empty());
}

#[test]
fn footnote_strip_lists_labels_and_the_placeholder() {
    let mut options = chart_only_options();
    options.show_labels = false;
    options.footnotes = vec![
        radar_rs::core::types::Footnote::new("one", "first note"),
        radar_rs::core::types::Footnote::new("two", "second note"),
    ];
    options.placeholder = "pick a note".to_owned();
    let mut engine = engine_with(options, vec![DatasetSpec::new("a")]);

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.texts.iter().any(|t| t.text == "one"));
    assert!(frame.texts.iter().any(|t| t.text == "pick a note"));

    engine.footnote_click(1).expect("footnote");
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.texts.iter().any(|t| t.text == "second note"));
    assert!(!frame.texts.iter().any(|t| t.text == "pick a note"));
}

#[test]
fn timeline_draws_a_track_with_a_step_marker() {
    let mut options = chart_only_options();
    options.show_labels = false;
    options.show_timeline = true;
    options.show_play_button = true;
    options.show_grid = false;
    let mut engine = engine_with(
        options,
        vec![DatasetSpec::new("a"), DatasetSpec::new("b")],
    );

    let frame = engine.build_render_frame().expect("frame");
    // Two dataset polygons plus the play glyph.
    assert_eq!(frame.paths.len(), 3);
    // Spokes plus the timeline track.
    assert_eq!(frame.lines.len(), 4);

    let marker_before = *frame.markers.last().expect("marker");
    engine.scrub(100.0).expect("scrub");
    let frame = engine.build_render_frame().expect("frame");
    let marker_after = *frame.markers.last().expect("marker");
    assert!(marker_after.cx > marker_before.cx);
}

#[test]
fn frames_pass_renderer_validation() {
    let mut engine = engine_with(
        RadarOptions::default(),
        vec![
            DatasetSpec::new("a").with_value("Speed", 80.0),
            DatasetSpec::new("b").with_value("Power", 120.0),
        ],
    );
    engine.render().expect("render");
}
