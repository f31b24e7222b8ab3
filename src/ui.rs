use std::sync::Arc;

use log::warn;
use tokio::runtime::Handle;

use crate::auth::{AuthProvider, LocalAuth, User};
use crate::geometry::Complexity;
use crate::math::HexColor;
use crate::prompt;
use crate::session::{GeneratedModel, GenerationStatus, Session};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Generator,
    Gallery,
    Settings,
}

/// Prompt entry, gallery and settings drawn over the viewport.
pub struct PromptPanel {
    session: Session,
    auth: Arc<LocalAuth>,
    runtime: Handle,
    prompt: String,
    user_name: String,
    tab: Tab,
}

impl PromptPanel {
    pub fn new(session: Session, auth: Arc<LocalAuth>, runtime: Handle) -> Self {
        Self {
            session,
            auth,
            runtime,
            prompt: String::new(),
            user_name: String::new(),
            tab: Tab::Generator,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        egui::Window::new("prompt3d")
            .title_bar(true)
            .resizable(true)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(340.0)
            .show(ctx, |ui| {
                let state = self.auth.current();
                if state.is_loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading...");
                    });
                    return;
                }
                if state.user.is_none() {
                    self.sign_in_ui(ui);
                    return;
                }

                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.tab, Tab::Generator, "Generator");
                    ui.selectable_value(&mut self.tab, Tab::Gallery, "Gallery");
                    ui.selectable_value(&mut self.tab, Tab::Settings, "Settings");
                });
                ui.separator();

                match self.tab {
                    Tab::Generator => self.generator_ui(ui),
                    Tab::Gallery => self.gallery_ui(ui),
                    Tab::Settings => self.settings_ui(ui),
                }
            });
    }

    fn sign_in_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading(egui::RichText::new("Welcome!").color(ACCENT));
        ui.label("Sign in to start generating 3D models.");
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.user_name);
        });
        let name = self.user_name.trim();
        if ui
            .add_enabled(!name.is_empty(), egui::Button::new("Sign in"))
            .clicked()
        {
            self.auth.sign_in(User::new(name));
        }
    }

    fn generator_ui(&mut self, ui: &mut egui::Ui) {
        let generating = self.session.is_generating();

        ui.label(egui::RichText::new("Create a 3D model").size(16.0).color(ACCENT));
        ui.add_enabled(
            !generating,
            egui::TextEdit::multiline(&mut self.prompt)
                .hint_text("Describe the 3D model you want to create...")
                .desired_rows(3),
        );

        ui.add_space(5.0);
        ui.label(egui::RichText::new("Examples:").color(egui::Color32::GRAY));
        ui.horizontal_wrapped(|ui| {
            for example in prompt::example_prompts() {
                if ui.small_button(*example).clicked() {
                    self.prompt = example.to_string();
                }
            }
        });

        if generating {
            ui.add_space(5.0);
            ui.label("Generating model...");
            ui.add(
                egui::ProgressBar::new(self.session.progress() as f32 / 100.0).show_percentage(),
            );
        }

        ui.add_space(5.0);
        if ui
            .add_enabled(can_generate(&self.prompt, generating), egui::Button::new("Generate"))
            .clicked()
        {
            self.spawn_generation();
        }

        ui.add_space(10.0);
        ui.separator();
        match self.session.current() {
            Some(object) => ui.monospace(object.summary()),
            None => ui.label("Generated models appear in the viewport."),
        };
    }

    fn spawn_generation(&mut self) {
        let session = self.session.clone();
        let text = std::mem::take(&mut self.prompt);
        self.runtime.spawn(async move {
            if let Err(e) = session.generate(&text).await {
                warn!("generation for {:?} failed: {}", text, e);
            }
        });
    }

    fn gallery_ui(&mut self, ui: &mut egui::Ui) {
        let models = self.session.models();
        if models.is_empty() {
            ui.label("No models yet.");
            return;
        }
        egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
            for model in &models {
                if self.model_row(ui, model) && self.session.select(model.id) {
                    self.tab = Tab::Generator;
                }
                ui.separator();
            }
        });
    }

    /// True when the row was clicked.
    fn model_row(&self, ui: &mut egui::Ui, model: &GeneratedModel) -> bool {
        let mut clicked = false;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(status_label(model.status)).color(status_color(model.status)));
            ui.label(&model.prompt);
        });
        ui.label(
            egui::RichText::new(model.created_at.format("%H:%M:%S").to_string())
                .size(11.0)
                .color(egui::Color32::GRAY),
        );
        if let Some(object) = &model.model {
            ui.monospace(object.summary());
            clicked = ui.button("Show").clicked();
        }
        if !model.image_url.is_empty() {
            ui.hyperlink_to("Preview image", &model.image_url);
        }
        clicked
    }

    fn settings_ui(&mut self, ui: &mut egui::Ui) {
        let mut options = self.session.options();
        let before = options;

        egui::ComboBox::from_label("Complexity")
            .selected_text(complexity_label(options.complexity))
            .show_ui(ui, |ui| {
                for complexity in [Complexity::Low, Complexity::Medium, Complexity::High] {
                    ui.selectable_value(
                        &mut options.complexity,
                        complexity,
                        complexity_label(complexity),
                    );
                }
            });
        ui.add(egui::Slider::new(&mut options.size, 0.1..=3.0).text("Size"));

        let [r, g, b] = options.color.to_rgb().map(|c| (c * 255.0).round() as u8);
        let mut rgb = [r, g, b];
        ui.horizontal(|ui| {
            ui.label("Default color:");
            ui.color_edit_button_srgb(&mut rgb);
            ui.monospace(options.color.to_string());
        });
        options.color = HexColor::from_u32(
            (u32::from(rgb[0]) << 16) | (u32::from(rgb[1]) << 8) | u32::from(rgb[2]),
        );

        if options != before {
            self.session.set_options(options);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label(egui::RichText::new("Export formats").color(egui::Color32::GRAY));
        ui.monospace("OBJ  STL  GLTF");

        ui.add_space(10.0);
        if ui.button("Sign out").clicked() {
            self.auth.sign_out();
        }
    }
}

pub fn can_generate(prompt: &str, generating: bool) -> bool {
    !generating && !prompt.trim().is_empty()
}

pub fn status_label(status: GenerationStatus) -> &'static str {
    match status {
        GenerationStatus::Generating => "Generating",
        GenerationStatus::Completed => "Ready",
        GenerationStatus::Failed => "Failed",
    }
}

fn status_color(status: GenerationStatus) -> egui::Color32 {
    match status {
        GenerationStatus::Generating => egui::Color32::from_rgb(234, 179, 8),
        GenerationStatus::Completed => egui::Color32::from_rgb(34, 197, 94),
        GenerationStatus::Failed => egui::Color32::from_rgb(239, 68, 68),
    }
}

fn complexity_label(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Low => "Low",
        Complexity::Medium => "Medium",
        Complexity::High => "High",
    }
}
