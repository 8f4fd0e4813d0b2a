use std::time::Duration;

use eframe::egui;

use crate::board::{self, AppState, DispatchOutcome, InputEvent, PointerButton};
use crate::board::palette::Palette;
use crate::board::render;
use crate::settings::Settings;

/// The eframe shell around the board: translates backend events into
/// [`InputEvent`]s, dispatches them, and paints the frame.
pub struct SandboxApp {
    state: AppState,
    tile_images: Vec<egui::ColorImage>,
    textures: Vec<egui::TextureHandle>,
}

impl SandboxApp {
    pub fn new(settings: &Settings, tile_images: Vec<egui::ColorImage>) -> Self {
        let palette = if tile_images.is_empty() {
            Palette::default_colors()
        } else {
            Palette::from_texture_count(tile_images.len())
        };
        Self {
            state: AppState::new(settings, palette),
            tile_images,
            textures: Vec::new(),
        }
    }

    fn upload_textures(&mut self, ctx: &egui::Context) {
        if self.textures.len() == self.tile_images.len() {
            return;
        }
        self.textures = self
            .tile_images
            .iter()
            .enumerate()
            .map(|(idx, image)| {
                ctx.load_texture(
                    format!("tile-{idx}"),
                    image.clone(),
                    egui::TextureOptions::LINEAR,
                )
            })
            .collect();
    }

    fn collect_events(&self, ctx: &egui::Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(InputEvent::Quit);
        }
        ctx.input(|i| {
            for event in &i.events {
                match *event {
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed,
                        ..
                    } => {
                        let Some(button) = map_button(button) else {
                            continue;
                        };
                        let pos = (pos.x as i32, pos.y as i32);
                        events.push(if pressed {
                            InputEvent::ButtonDown { button, pos }
                        } else {
                            InputEvent::ButtonUp { button, pos }
                        });
                    }
                    egui::Event::PointerMoved(pos) => {
                        events.push(InputEvent::Motion {
                            pos: (pos.x as i32, pos.y as i32),
                        });
                    }
                    egui::Event::MouseWheel { delta, .. } => {
                        // One discrete tick per event; horizontal scroll is ignored.
                        if delta.y > 0.0 {
                            events.push(InputEvent::Wheel { ticks: 1 });
                        } else if delta.y < 0.0 {
                            events.push(InputEvent::Wheel { ticks: -1 });
                        }
                    }
                    _ => {}
                }
            }
        });
        events
    }
}

impl eframe::App for SandboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.upload_textures(ctx);

        for event in self.collect_events(ctx) {
            if board::dispatch(&mut self.state, event) == DispatchOutcome::Quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                render::paint_frame(ui.painter(), &self.state, &self.textures);
            });

        // ~60 Hz cadence even without input.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}
