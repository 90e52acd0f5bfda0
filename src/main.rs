//! Cytoscope - Entry point
//!
//! Animated cell and particle visualisations with an instrument HUD.
//!
//! CLI Usage:
//!   cargo run                              # Open the particle field
//!   cargo run -- --view microscope         # Start on another view
//!   cargo run -- --headless --view scan -n 120   # Run a view without a window

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use cytoscope::{
    clock::{ManualClock, SystemClock},
    config::Parameters,
    render::{DrawCommand, HudAction, HudFrame, RenderState},
    scan::ScanPhase,
    view::{ReadoutDetail, ViewCommand, ViewHost, ViewKind},
};
use glam::Vec2;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Simulated frame interval for headless runs
const HEADLESS_FRAME: Duration = Duration::from_millis(16);
/// Surface size assumed by headless runs
const HEADLESS_SURFACE: Vec2 = Vec2::new(1280.0, 720.0);

/// Command-line options
struct Options {
    view: ViewKind,
    config: Option<PathBuf>,
    headless: bool,
    ticks: usize,
}

fn load_parameters(config: Option<&PathBuf>) -> Result<Parameters> {
    match config {
        Some(path) => Parameters::load(path),
        None => Ok(Parameters::load_or_default()),
    }
}

/// Run one view for a number of simulated frames without a window
fn run_diagnostics(options: &Options) -> Result<()> {
    println!("=== Cytoscope - Headless Diagnostics ===\n");

    let params = load_parameters(options.config.as_ref())?;
    let time = ManualClock::new();
    let mut host = ViewHost::new(params, Rc::new(time.clone()));
    host.set_surface(Some(HEADLESS_SURFACE));

    println!("View: {} ({})", options.view.title(), options.view);
    println!("Surface: {:.0}×{:.0}", HEADLESS_SURFACE.x, HEADLESS_SURFACE.y);

    if !host.activate(options.view) {
        anyhow::bail!("Failed to activate {} view", options.view);
    }
    if options.view == ViewKind::Scan {
        host.command(ViewCommand::StartScan);
    }

    let ticks = options.ticks;
    println!("\n--- Running {} frames of {:?} ---\n", ticks, HEADLESS_FRAME);

    let start_time = Instant::now();
    let mut max_commands = 0;
    let mut out_of_bounds = 0;
    for tick in 0..ticks {
        time.advance(HEADLESS_FRAME);
        let Some(frame) = host.frame() else {
            break;
        };

        let size = frame.size();
        max_commands = max_commands.max(frame.len());
        out_of_bounds += frame
            .circles()
            .filter(|(center, radius, _)| {
                center.x < -radius || center.y < -radius || center.x > size.x + radius || center.y > size.y + radius
            })
            .count();

        // Report progress every 10%
        if ticks >= 10 && tick % (ticks / 10) == 0 {
            let progress = (tick as f32 / ticks as f32) * 100.0;
            let text = frame
                .commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::Text { .. }))
                .count();
            println!(
                "  {:3.0}%: frame={}, commands={}, circles={}, lines={}, captions={}",
                progress,
                tick,
                frame.len(),
                frame.circles().count(),
                frame.lines().count(),
                text
            );
        }
    }
    let elapsed = start_time.elapsed();

    let metrics = host.metrics().clone();
    let readout = host.readout();

    println!("\n=== Results ===");
    println!("Elapsed time: {:.2?}", elapsed);
    println!("Frames rendered: {}", metrics.frames);
    println!("Frames per second (wall): {:.0}", metrics.frames as f32 / elapsed.as_secs_f32().max(1e-6));
    println!("Simulated time: {:.3} s", metrics.elapsed_sec);
    println!("Entities: {}", metrics.entity_count);
    println!("Connections (last frame): {}", metrics.connection_count);
    println!("Max commands per frame: {}", max_commands);

    if let Some(readout) = readout.as_ref() {
        match &readout.detail {
            ReadoutDetail::Microscope {
                focus,
                zoom,
                pan,
                stain,
                blur,
            } => {
                println!();
                println!("Focus: {:.0}  Zoom: {:.1}×  Pan: ({:.1}, {:.1})", focus, zoom, pan.x, pan.y);
                println!("Stain: {}  Blur: {:.1} px", stain.label(), blur);
            }
            ReadoutDetail::Scan {
                phase,
                scan_line,
                detections,
                ..
            } => {
                println!();
                println!("Scan phase: {}  Line: {:.0} px", phase.label(), scan_line);
                for record in detections {
                    println!("  {} at ({:.0}, {:.0})", record.caption(), record.x, record.y);
                }
            }
            ReadoutDetail::None => {}
        }
    }

    println!("\n=== Diagnostic Checks ===");
    if metrics.frames as usize == ticks {
        println!("✓ Every tick produced a frame");
    } else {
        println!("⚠️  WARNING: {} of {} ticks produced a frame", metrics.frames, ticks);
    }

    if metrics.entity_count == 0 {
        println!("⚠️  WARNING: View has no entities");
    } else {
        println!("✓ Entities seeded");
    }

    // Only the particle field clamps to its canvas; other views wrap through margins.
    if options.view == ViewKind::ParticleField {
        if out_of_bounds == 0 {
            println!("✓ All particles stayed on the canvas");
        } else {
            println!("⚠️  WARNING: {} particles drawn off the canvas", out_of_bounds);
        }
    }

    if let Some(ReadoutDetail::Scan { phase, .. }) = readout.as_ref().map(|r| &r.detail) {
        if *phase == ScanPhase::Complete {
            println!("✓ Scan completed");
        } else {
            println!("⚠️  WARNING: Scan still {} (try -n 60)", phase.label());
        }
    }

    host.deactivate();
    Ok(())
}

/// Parse CLI arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        view: ViewKind::ParticleField,
        config: None,
        headless: false,
        ticks: 600,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--headless" => options.headless = true,
            "--view" => {
                i += 1;
                if i < args.len() {
                    match args[i].parse() {
                        Ok(view) => options.view = view,
                        Err(e) => log::warn!("{}; using {}", e, options.view),
                    }
                }
            }
            "--config" => {
                i += 1;
                if i < args.len() {
                    options.config = Some(PathBuf::from(&args[i]));
                }
            }
            "-n" | "--ticks" => {
                i += 1;
                if i < args.len() {
                    options.ticks = args[i].parse().unwrap_or(600);
                }
            }
            "--help" | "-h" => {
                println!("Cytoscope");
                println!();
                println!("Usage: cytoscope [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --view NAME        particles | cells | helix | microscope | scan");
                println!("  --config PATH      Load parameters from a JSON file");
                println!("  --headless         Run the view without a window and print stats");
                println!("  -n, --ticks N      Frames to run headless (default: 600)");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            other => log::warn!("Ignoring unknown argument {}", other),
        }
        i += 1;
    }

    options
}

/// Activate `kind`, dropping the previous view's trail on success
fn switch_view(host: &mut ViewHost, render_state: &mut RenderState, kind: ViewKind) {
    if host.kind() == Some(kind) {
        return;
    }
    if host.activate(kind) {
        render_state.clear_trail();
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args();

    if options.headless {
        return run_diagnostics(&options);
    }

    log::info!("Cytoscope starting...");

    let params = load_parameters(options.config.as_ref())?;
    log::info!(
        "Parameters loaded: {} particles, {} cells, {} strands",
        params.particle_field.count,
        params.cell_stream.count,
        params.helix.strand_count
    );

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Cytoscope")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .build(&event_loop)?,
    );

    let mut render_state = pollster::block_on(RenderState::new(window.clone()))?;

    let mut host = ViewHost::new(params, Rc::new(SystemClock::new()));
    host.set_surface(render_state.logical_size());
    let mut selected = options.view;
    host.activate(selected);

    let mut cursor = Vec2::ZERO;

    log::info!("Controls:");
    log::info!("  1-5: Switch view");
    log::info!("  Mouse drag: Pan microscope slide");
    log::info!("  S: Start scan");
    log::info!("  R: Reset microscope");
    log::info!("  Tab: Toggle HUD");
    log::info!("  H: Toggle help");
    log::info!("  Escape: Exit");

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => {
                let consumed = render_state.handle_event(&event);

                match event {
                    WindowEvent::CloseRequested => {
                        host.deactivate();
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key_code),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } if !render_state.hud.wants_keyboard_input() => {
                        let view = match key_code {
                            KeyCode::Digit1 => Some(ViewKind::ParticleField),
                            KeyCode::Digit2 => Some(ViewKind::CellStream),
                            KeyCode::Digit3 => Some(ViewKind::Helix),
                            KeyCode::Digit4 => Some(ViewKind::Microscope),
                            KeyCode::Digit5 => Some(ViewKind::Scan),
                            _ => None,
                        };
                        if let Some(kind) = view {
                            selected = kind;
                            switch_view(&mut host, &mut render_state, kind);
                        }

                        match key_code {
                            KeyCode::Escape => {
                                host.deactivate();
                                elwt.exit();
                            }
                            KeyCode::KeyS => {
                                if !host.command(ViewCommand::StartScan) {
                                    log::debug!("Scan not started");
                                }
                            }
                            KeyCode::KeyR => {
                                if host.command(ViewCommand::ResetViewport) {
                                    log::info!("Microscope reset");
                                }
                            }
                            KeyCode::Tab => render_state.hud.toggle_hud(),
                            KeyCode::KeyH => render_state.hud.toggle_help(),
                            _ => {}
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = render_state.to_logical(position.x, position.y);
                        host.pointer_moved(cursor);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        host.pointer_left();
                    }
                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    } => match state {
                        ElementState::Pressed if !consumed => host.pointer_pressed(cursor),
                        ElementState::Released => host.pointer_released(),
                        _ => {}
                    },
                    WindowEvent::Resized(new_size) => {
                        render_state.resize(new_size);
                        host.set_surface(render_state.logical_size());
                        if !host.is_active() && host.activate(selected) {
                            render_state.clear_trail();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        for action in render_state.hud.take_actions() {
                            match action {
                                HudAction::SwitchView(kind) => {
                                    selected = kind;
                                    switch_view(&mut host, &mut render_state, kind);
                                }
                                HudAction::Command(command) => {
                                    host.command(command);
                                }
                            }
                        }

                        if let Some(frame) = host.frame() {
                            render_state.push_frame(frame);
                        }

                        let metrics = host.metrics();
                        if metrics.frames > 0 && metrics.frames % 600 == 0 {
                            log::debug!(
                                "Frame {}: {:.0} fps, {} entities, {} connections",
                                metrics.frames,
                                metrics.fps,
                                metrics.entity_count,
                                metrics.connection_count
                            );
                        }

                        let readout = host.readout();
                        let hud_frame = HudFrame {
                            params: host.params(),
                            metrics: host.metrics(),
                            active: host.kind(),
                            readout: readout.as_ref(),
                        };
                        match render_state.render(&hud_frame, host.origin()) {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => render_state.resize(render_state.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::error!("Render error: {:?}", e),
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
