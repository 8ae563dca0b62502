/// RMandel - Visualizador do conjunto de Mandelbrot
/// Cálculo na CPU (rayon), apresentação via wgpu

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use rmandel::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderConfig};
use rmandel::fractal::{Frame, MandelbrotRenderer, RenderError};
use rmandel::palette::Palette;
use rmandel::renderer::Renderer;

#[derive(Parser, Debug)]
#[command(name = "rmandel", about = "Renderiza o conjunto de Mandelbrot em uma janela")]
struct Args {
    /// Arquivo de paleta (256 linhas "r g b"); sem ele usa a paleta embutida
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Largura inicial da janela
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Altura inicial da janela
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Sem paleta válida não há o que desenhar
    let palette = match &args.palette {
        Some(path) => Palette::load(path)
            .with_context(|| format!("Não foi possível carregar {}", path.display()))?,
        None => {
            log::info!("Usando paleta embutida");
            Palette::bundled().context("Paleta embutida inválida")?
        }
    };
    let mandelbrot = MandelbrotRenderer::new(palette, RenderConfig::default());

    let event_loop = EventLoop::new()?;

    // Cria a janela
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Set")
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true)
            .build(&event_loop)?,
    );
    center_window(&window);
    log::info!("Janela {}x{}", args.width, args.height);

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut frame = Frame::new(0, 0);
    window.request_redraw();

    event_loop.run(move |event, elwt| {
        // Imagem estática: só redesenha quando o sistema pede
        elwt.set_control_flow(ControlFlow::Wait);

        if let Event::WindowEvent { event, window_id } = event {
            if window_id != window.id() {
                return;
            }
            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }

                WindowEvent::KeyboardInput {
                    event: KeyEvent {
                        state: ElementState::Pressed,
                        logical_key: Key::Named(NamedKey::Escape),
                        ..
                    },
                    ..
                } => {
                    elwt.exit();
                }

                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                    window.request_redraw();
                }

                WindowEvent::RedrawRequested => {
                    let size = window.inner_size();
                    let started = Instant::now();
                    match mandelbrot.render_into(&mut frame, size.width, size.height) {
                        Ok(()) => {
                            log::debug!(
                                "Frame {}x{} em {:?}",
                                size.width,
                                size.height,
                                started.elapsed()
                            );
                            if let Err(e) = renderer.render(&frame) {
                                log::error!("Erro de renderização: {:?}", e);
                            }
                        }
                        Err(e @ RenderError::DegenerateSurface { .. }) => {
                            log::debug!("{e}");
                        }
                    }
                }

                _ => {}
            }
        }
    })?;

    Ok(())
}

/// Centraliza a janela no monitor atual
fn center_window(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    let screen = monitor.size();
    let origin = monitor.position();
    let outer = window.outer_size();
    let width = outer.width.min(screen.width);
    let height = outer.height.min(screen.height);
    window.set_outer_position(PhysicalPosition::new(
        origin.x + ((screen.width - width) / 2) as i32,
        origin.y + ((screen.height - height) / 2) as i32,
    ));
}
