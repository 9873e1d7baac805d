use overlay_sketch::{Argb, Canvas, CanvasConfig, DrawingState};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn create_test_canvas(smoothing: bool) -> Canvas {
    let mut canvas = Canvas::new(800, 600);
    canvas.brush_mut().set_smoothing_enabled(smoothing);
    canvas
}

fn draw_line(canvas: &mut Canvas, from: (i32, i32), to: (i32, i32)) {
    canvas.start_stroke(from.0, from.1);
    canvas.continue_stroke(to.0, to.1);
    canvas.end_stroke();
}

#[test]
fn test_straight_stroke_without_smoothing() {
    init_logging();
    let mut canvas = create_test_canvas(false);

    canvas.start_stroke(0, 0);
    assert_eq!(canvas.state(), DrawingState::Drawing);
    canvas.continue_stroke(10, 0);
    canvas.end_stroke();

    assert_eq!(canvas.state(), DrawingState::Idle);
    assert_eq!(canvas.stroke_count(), 1);
    assert!(canvas.current_stroke().is_none());

    let stroke = &canvas.strokes()[0];
    assert!(stroke.is_sealed());
    assert!(stroke.len() >= 11);
    assert!(stroke.points().iter().all(|p| p.y() == 0 && (0..=10).contains(&p.x())));
    assert_eq!(stroke.first_point().unwrap().x(), 0);
    assert_eq!(stroke.last_point().unwrap().x(), 10);
}

#[test]
fn test_stroke_uses_current_brush() {
    let mut canvas = create_test_canvas(false);
    canvas.set_brush_color(Argb(0xFF22B14C));
    canvas.adjust_brush_size(3.0);

    draw_line(&mut canvas, (0, 0), (0, 5));

    let stroke = &canvas.strokes()[0];
    assert!(stroke.points().iter().all(|p| p.color() == Argb(0xFF22B14C) && p.size() == 5.0));
}

#[test]
fn test_smoothing_replaces_raw_points() {
    let mut canvas = create_test_canvas(true);

    canvas.start_stroke(0, 0);
    canvas.continue_stroke(5, 5);
    canvas.continue_stroke(10, 0);
    assert_eq!(canvas.control_points().len(), 3);
    let raw_count = canvas.current_stroke().unwrap().len();
    canvas.end_stroke();

    let stroke = &canvas.strokes()[0];
    assert_ne!(stroke.len(), raw_count);
    assert_eq!((stroke.first_point().unwrap().x(), stroke.first_point().unwrap().y()), (0, 0));
    assert_eq!((stroke.last_point().unwrap().x(), stroke.last_point().unwrap().y()), (10, 0));

    // The raw path peaks at y = 5; the curve never reaches it
    assert!(stroke.points().iter().all(|p| p.y() < 5));
    assert!(canvas.control_points().is_empty());
}

#[test]
fn test_short_strokes_skip_smoothing() {
    let mut canvas = create_test_canvas(true);

    // A tap commits a single point
    canvas.start_stroke(4, 4);
    canvas.end_stroke();
    assert_eq!(canvas.strokes()[0].len(), 1);

    // Two samples keep the raw interpolated points
    draw_line(&mut canvas, (0, 0), (3, 0));
    assert_eq!(canvas.strokes()[1].len(), 5);
}

#[test]
fn test_guarded_calls_are_no_ops() {
    let mut canvas = create_test_canvas(false);

    canvas.continue_stroke(5, 5);
    canvas.end_stroke();
    assert_eq!(canvas.stroke_count(), 0);
    assert!(!canvas.history().can_undo());

    canvas.start_stroke(0, 0);
    canvas.start_stroke(50, 50); // Ignored while drawing
    assert_eq!(canvas.history().undo_depth(), 1);
    assert_eq!(canvas.current_stroke().unwrap().len(), 1);
}

#[test]
fn test_start_snapshots_committed_strokes_only() {
    let mut canvas = create_test_canvas(false);
    draw_line(&mut canvas, (0, 0), (5, 0));

    canvas.start_stroke(10, 10);
    canvas.continue_stroke(12, 10);

    // Undo mid-stroke restores the pre-first-stroke state and leaves the open stroke alone
    assert!(canvas.undo());
    assert_eq!(canvas.stroke_count(), 1);
    assert!(canvas.undo());
    assert_eq!(canvas.stroke_count(), 0);
    assert!(canvas.is_drawing());
    assert_eq!(canvas.current_stroke().unwrap().len(), 4);
}

#[test]
fn test_undo_and_redo_a_stroke() {
    let mut canvas = create_test_canvas(false);
    draw_line(&mut canvas, (0, 0), (5, 0));
    let drawn = canvas.strokes().to_vec();

    assert!(canvas.undo());
    assert!(canvas.strokes().is_empty());
    assert!(!canvas.undo());

    assert!(canvas.redo());
    assert_eq!(canvas.strokes(), drawn.as_slice());
    assert!(!canvas.redo());
}

#[test]
fn test_three_clears_then_three_undos() {
    init_logging();
    let mut canvas = create_test_canvas(false);
    draw_line(&mut canvas, (0, 0), (5, 0));
    draw_line(&mut canvas, (0, 10), (0, 20));
    let before = canvas.strokes().to_vec();

    canvas.clear();
    canvas.clear();
    canvas.clear();
    assert_eq!(canvas.stroke_count(), 0);

    canvas.undo();
    canvas.undo();
    canvas.undo();
    assert_eq!(canvas.strokes(), before.as_slice());
}

#[test]
fn test_clear_while_drawing_keeps_state() {
    let mut canvas = create_test_canvas(false);
    draw_line(&mut canvas, (0, 0), (5, 0));

    canvas.start_stroke(0, 0);
    canvas.continue_stroke(5, 0);
    canvas.clear();

    assert!(canvas.is_drawing());
    assert!(canvas.current_stroke().unwrap().is_empty());
    assert_eq!(canvas.stroke_count(), 0);

    // Nothing left to commit
    canvas.end_stroke();
    assert!(!canvas.is_drawing());
    assert_eq!(canvas.stroke_count(), 0);
}

#[test]
fn test_new_stroke_invalidates_redo() {
    let mut canvas = create_test_canvas(false);
    draw_line(&mut canvas, (0, 0), (5, 0));
    canvas.undo();
    assert!(canvas.history().can_redo());

    draw_line(&mut canvas, (0, 0), (0, 5));
    assert!(!canvas.history().can_redo());
    assert!(!canvas.redo());
}

#[test]
fn test_point_counts() {
    let mut canvas = create_test_canvas(false);
    draw_line(&mut canvas, (0, 0), (4, 0)); // seed + 5 interpolated

    canvas.start_stroke(0, 0);
    assert_eq!(canvas.total_point_count(), 7);
    assert_eq!(canvas.render_points().count(), 7);
}

#[test]
fn test_brush_controls() {
    let mut canvas = create_test_canvas(true);

    assert!(canvas.adjust_brush_size(0.5));
    assert_eq!(canvas.brush().line_width(), 2.5);
    assert!(!canvas.adjust_brush_size(0.0));

    canvas.toggle_smoothing();
    assert!(!canvas.brush().is_smoothing_enabled());

    canvas.set_brush_color(Argb(0xFF3F48CC));
    assert_eq!(canvas.picker().selected_index(), Some(12));
}

#[test]
fn test_configured_history_depth() {
    let config = CanvasConfig {
        history_depth: 2,
        ..CanvasConfig::default()
    };
    let mut canvas = Canvas::with_config(&config, 800, 600);
    canvas.brush_mut().set_smoothing_enabled(false);

    for i in 0..3 {
        draw_line(&mut canvas, (0, i * 10), (5, i * 10));
    }
    assert_eq!(canvas.history().undo_depth(), 2);

    canvas.undo();
    canvas.undo();
    assert_eq!(canvas.stroke_count(), 1);
    assert!(!canvas.undo());
}
