use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::Result;
use serde::{Deserialize, Serialize};

const SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Serialize)]
struct HumanizeRequest<'a> {
    text: &'a str,
    noise_level: f32,
    human_level: f32,
}

#[derive(Deserialize)]
struct HumanizeResponse {
    result: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    status: String,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request to `/` and returns the status message.
    fn get_status(&self) -> Result<String> {
        let response: StatusResponse = self.client
            .get(format!("{SERVER_URL}/"))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.status)
    }

    /// Sends a POST request to `/humanize` with a JSON body.
    fn post_humanize(&self, text: &str, noise_level: f32, human_level: f32) -> Result<String> {
        let response: HumanizeResponse = self.client
            .post(format!("{SERVER_URL}/humanize"))
            .json(&HumanizeRequest { text, noise_level, human_level })
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.result)
    }
}

/// Global UI state (MUST persist between frames in egui).
struct HumanizerUI {
    rest: RESTContext,
    status: String,
    input: String,
    output: Option<String>,
    noise_level: f32,
    human_level: f32,
}

impl HumanizerUI {
    /// Initializes the UI with the server defaults and checks the server.
    fn new() -> Result<Self> {
        let mut humanizer = Self {
            rest: RESTContext::new()?,
            status: String::new(),
            input: String::new(),
            output: None,
            noise_level: 0.5,
            human_level: 0.5,
        };
        humanizer.get_status();
        Ok(humanizer)
    }

    /// Performs the status request.
    fn get_status(&mut self) {
        self.status = match self.rest.get_status() {
            Ok(status) => status,
            Err(e) => format!("Server unreachable: {e}"),
        };
    }

    /// Performs the humanize request.
    fn post_humanize(&mut self) {
        match self.rest.post_humanize(&self.input, self.noise_level, self.human_level) {
            Ok(text) => self.output = Some(text),
            Err(e) => self.output = Some(format!("Error: {e}")),
        }
    }
}

impl eframe::App for HumanizerUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                if ui.small_button("Retry").clicked() {
                    self.get_status();
                }
            });
            ui.separator();

            ui.label("Text");
            ui.add(
                egui::TextEdit::multiline(&mut self.input)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            egui::Grid::new("levels_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Noise level");
                    ui.add(egui::Slider::new(&mut self.noise_level, 0.0..=1.0));
                    ui.end_row();

                    ui.label("Human level");
                    ui.add(egui::Slider::new(&mut self.human_level, 0.0..=1.0));
                    ui.end_row();
                });

            ui.separator();
            if ui
                .add_sized([200.0, 40.0], egui::Button::new("Humanize"))
                .clicked()
            {
                self.post_humanize();
            }

            // Output
            match &self.output {
                Some(text) => {
                    ui.add(egui::Label::new(text).wrap());
                }
                None => {
                    ui.label("Click Humanize to start");
                }
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "ushiro",
        options,
        Box::new(|_| Ok(Box::new(HumanizerUI::new()?))),
    )
}
