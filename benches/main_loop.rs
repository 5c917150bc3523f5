//! Benchmarks for the main Msg → Update → Cmd → Render loop
//!
//! Run with: cargo bench main_loop

use edgebar::config::SidebarConfig;
use edgebar::geometry::{Point, Rect, ScreenLayout, Side};
use edgebar::messages::{IndicatorMsg, Msg, PanelMsg, PointerMsg};
use edgebar::model::{AppModel, INDICATOR_SIZE, PANEL_SIZE};
use edgebar::theme::Theme;
use edgebar::update::update;
use edgebar::view::frame::Frame;
use edgebar::view::{draw_indicator, draw_panel};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_model() -> AppModel {
    AppModel::new(
        SidebarConfig::default(),
        ScreenLayout::single(Rect::new(0, 0, 1920, 1080)),
    )
}

fn panel_pointer(event: PointerMsg) -> Msg {
    Msg::Panel(PanelMsg::Pointer {
        event,
        button: None,
    })
}

// ============================================================================
// Update-only benchmarks (no rendering)
// Measures the cost of state transformations per message
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn update_panel_drag(moves: i32) {
    let mut model = make_model();
    let start = Point::new(1000, 500);
    model.panel.position = Point::new(975, 440);

    update(&mut model, panel_pointer(PointerMsg::Pressed(start)));
    for i in 0..moves {
        let at = start + Point::new(-(i % 400), i % 200);
        let cmd = update(&mut model, panel_pointer(PointerMsg::Moved(at)));
        divan::black_box(cmd);
    }
    let cmd = update(&mut model, panel_pointer(PointerMsg::Released(start)));

    divan::black_box(cmd);
    divan::black_box(&model);
}

#[divan::bench(args = [10, 100])]
fn update_hide_restore_cycle(cycles: usize) {
    let mut model = make_model();

    for _ in 0..cycles {
        update(&mut model, Msg::Panel(PanelMsg::Hide));
        let center = model.indicators.right.rect();
        let at = Point::new(center.x + 10, center.y + 30);
        update(
            &mut model,
            Msg::Indicator(Side::Right, IndicatorMsg::Pointer(PointerMsg::Pressed(at))),
        );
        let cmd = update(
            &mut model,
            Msg::Indicator(Side::Right, IndicatorMsg::Pointer(PointerMsg::Released(at))),
        );
        divan::black_box(cmd);
    }

    divan::black_box(&model);
}

// ============================================================================
// Render-only benchmarks
// ============================================================================

#[divan::bench]
fn render_panel(bencher: divan::Bencher) {
    let model = make_model();
    let theme = Theme::default();
    let mut buffer = vec![0u32; (PANEL_SIZE.width * PANEL_SIZE.height) as usize];

    bencher.bench_local(|| {
        let mut frame = Frame::new(
            &mut buffer,
            PANEL_SIZE.width as usize,
            PANEL_SIZE.height as usize,
        );
        draw_panel(&mut frame, &model.panel, &theme);
    });
}

#[divan::bench]
fn render_indicator(bencher: divan::Bencher) {
    let model = make_model();
    let theme = Theme::default();
    let mut buffer = vec![0u32; (INDICATOR_SIZE.width * INDICATOR_SIZE.height) as usize];

    bencher.bench_local(|| {
        let mut frame = Frame::new(
            &mut buffer,
            INDICATOR_SIZE.width as usize,
            INDICATOR_SIZE.height as usize,
        );
        draw_indicator(&mut frame, &model.indicators.right, &theme);
    });
}
