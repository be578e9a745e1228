use radar_rs::api::{RadarEngine, RadarEngineConfig, RadarOptions};
use radar_rs::core::types::{AxisSpec, DatasetSpec, DatasetStatus};
use radar_rs::playback::PlaybackPhase;
use radar_rs::render::NullRenderer;

fn engine_with_speed(play_speed_ms: f64, dataset_count: usize) -> RadarEngine<NullRenderer> {
    let options = RadarOptions::default().with_play_speed_ms(play_speed_ms);
    let mut engine = RadarEngine::new(
        NullRenderer::default(),
        RadarEngineConfig::new().with_options(options),
    )
    .expect("engine init");
    engine
        .set_axes(vec![AxisSpec::new("x"), AxisSpec::new("y"), AxisSpec::new("z")])
        .expect("axes");
    engine
        .set_datasets(
            (0..dataset_count)
                .map(|i| DatasetSpec::new(format!("d{i}")))
                .collect(),
        )
        .expect("datasets");
    engine
}

fn statuses(engine: &RadarEngine<NullRenderer>) -> Vec<DatasetStatus> {
    engine.datasets().iter().map(|d| d.status).collect()
}

#[test]
fn play_hides_everything_until_the_first_tick() {
    let mut engine = engine_with_speed(100.0, 3);
    assert!(engine.play());
    assert_eq!(
        statuses(&engine),
        vec![
            DatasetStatus::Hidden,
            DatasetStatus::Hidden,
            DatasetStatus::Hidden
        ]
    );
    assert_eq!(engine.playback_phase(), PlaybackPhase::Playing);
}

#[test]
fn two_ticks_after_250ms_at_speed_100() {
    let mut engine = engine_with_speed(100.0, 3);
    engine.play();
    let stepped = engine.advance(250.0).expect("advance");
    assert!(stepped);

    assert_eq!(
        statuses(&engine),
        vec![
            DatasetStatus::Inactive,
            DatasetStatus::Active,
            DatasetStatus::Hidden
        ]
    );
    assert_eq!(engine.playback_step(), 2);
    assert_eq!(engine.playback_phase(), PlaybackPhase::Playing);
}

#[test]
fn playback_finishes_after_the_last_step() {
    let mut engine = engine_with_speed(100.0, 3);
    engine.play();
    engine.advance(300.0).expect("advance");

    assert_eq!(engine.playback_phase(), PlaybackPhase::Finished);
    assert_eq!(
        statuses(&engine),
        vec![
            DatasetStatus::Inactive,
            DatasetStatus::Inactive,
            DatasetStatus::Active
        ]
    );

    // Further time changes nothing once finished.
    let stepped = engine.advance(1_000.0).expect("advance");
    assert!(!stepped);
}

#[test]
fn play_is_a_no_op_while_playing_or_empty() {
    let mut engine = engine_with_speed(100.0, 3);
    assert!(engine.play());
    assert!(!engine.play());

    let mut empty = engine_with_speed(100.0, 0);
    assert!(!empty.play());
}

#[test]
fn pause_freezes_visibility_at_the_current_step() {
    let mut engine = engine_with_speed(100.0, 3);
    engine.play();
    engine.advance(150.0).expect("advance");
    engine.pause();

    let frozen = statuses(&engine);
    let stepped = engine.advance(500.0).expect("advance");
    assert!(!stepped);
    assert_eq!(statuses(&engine), frozen);
    assert_eq!(engine.playback_phase(), PlaybackPhase::Idle);
}

#[test]
fn scrub_maps_percent_onto_steps() {
    let mut engine = engine_with_speed(100.0, 4);
    engine.play();

    engine.scrub(100.0).expect("scrub");
    assert_eq!(engine.playback_step(), 3);
    assert_eq!(engine.playback_phase(), PlaybackPhase::Scrubbing);
    assert_eq!(
        statuses(&engine),
        vec![
            DatasetStatus::Inactive,
            DatasetStatus::Inactive,
            DatasetStatus::Inactive,
            DatasetStatus::Active
        ]
    );

    engine.scrub(50.0).expect("scrub");
    assert_eq!(engine.playback_step(), 1);
    engine.scrub(0.0).expect("scrub");
    assert_eq!(engine.playback_step(), 0);
    assert_eq!(
        statuses(&engine),
        vec![
            DatasetStatus::Active,
            DatasetStatus::Hidden,
            DatasetStatus::Hidden,
            DatasetStatus::Hidden
        ]
    );
}

#[test]
fn scrub_cancels_playback() {
    let mut engine = engine_with_speed(100.0, 3);
    engine.play();
    engine.scrub(50.0).expect("scrub");

    let stepped = engine.advance(1_000.0).expect("advance");
    assert!(!stepped);
}

#[test]
fn scrub_clamps_out_of_range_percentages() {
    let mut engine = engine_with_speed(100.0, 4);
    engine.scrub(250.0).expect("scrub");
    assert_eq!(engine.playback_step(), 3);
    engine.scrub(-25.0).expect("scrub");
    assert_eq!(engine.playback_step(), 0);
    assert!(engine.scrub(f64::NAN).is_err());
}

#[test]
fn reset_restores_the_initial_playback_frame() {
    let mut engine = engine_with_speed(100.0, 3);
    engine.play();
    engine.advance(250.0).expect("advance");
    engine.reset_playback();

    assert_eq!(engine.playback_phase(), PlaybackPhase::Idle);
    assert_eq!(engine.playback_step(), 0);
    assert_eq!(
        statuses(&engine),
        vec![
            DatasetStatus::Active,
            DatasetStatus::Hidden,
            DatasetStatus::Hidden
        ]
    );
}

#[test]
fn invalid_play_speed_is_rejected_at_construction() {
    let options = RadarOptions::default().with_play_speed_ms(0.0);
    assert!(
        RadarEngine::new(
            NullRenderer::default(),
            RadarEngineConfig::new().with_options(options)
        )
        .is_err()
    );
}
