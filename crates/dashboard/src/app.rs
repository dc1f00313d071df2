//! Dashboard principal – App eframe/egui.
//!
//! Single-threaded e dirigido por interação: cada evento de UI (troca de
//! papel, senha, edição de linha) é processado por completo dentro do frame,
//! sem threads de fundo nem I/O assíncrono.

use egui::RichText;
use rand::SeedableRng;
use rand::rngs::StdRng;

use hydro_core::access::{self, Role, RoleResolution, SharedSecretVerifier};
use hydro_core::alerts::{self, Alert};
use hydro_core::config::AppConfig;
use hydro_core::generator;
use hydro_core::store::SessionStore;
use hydro_core::types::{Dataset, Parameter, SiteStatus, monitoring_sites};

use crate::panels;
use crate::theme_egui::{self, EguiTheme};

/// Visão selecionada na sidebar: geral ou um parâmetro isolado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewSelection {
    Dashboard,
    Single(Parameter),
}

/// Estado do dashboard.
pub struct WaterDashboard {
    config: AppConfig,
    theme: EguiTheme,
    theme_index: usize,
    all_themes: Vec<EguiTheme>,

    // Dados
    store: SessionStore,
    verifier: SharedSecretVerifier,
    live: Dataset,
    live_alerts: Vec<Alert>,
    sites: Vec<SiteStatus>,
    rng: StdRng,

    // UI state
    requested_role: Role,
    password: String,
    resolution: RoleResolution,
    view: ViewSelection,
    last_write_denied: bool,
    is_fullscreen: bool,
}

impl WaterDashboard {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut rng = StdRng::from_entropy();

        // Série ao vivo para tiles/alertas
        let live = Self::generate_or_empty(&config.generator.live.spec(chrono::Utc::now()), &mut rng);
        let live_alerts = live
            .latest()
            .map(|r| alerts::evaluate_alerts(r, &config.alerts))
            .unwrap_or_default();

        // Dataset editável semeado com a série histórica
        let mut store = SessionStore::new();
        store.initialize(Self::generate_or_empty(
            &config.generator.historical.spec(),
            &mut rng,
        ));

        let verifier = SharedSecretVerifier::new(config.access.technician_secret.clone());

        // Carrega tema
        let all_themes = theme_egui::all_themes();
        let theme_index = all_themes
            .iter()
            .position(|t| t.name == config.dashboard.theme)
            .unwrap_or(0);
        let theme = all_themes[theme_index].clone();

        Self {
            config,
            theme,
            theme_index,
            all_themes,
            store,
            verifier,
            live,
            live_alerts,
            sites: monitoring_sites(),
            rng,
            requested_role: Role::Viewer,
            password: String::new(),
            resolution: RoleResolution::default(),
            view: ViewSelection::Dashboard,
            last_write_denied: false,
            is_fullscreen: false,
        }
    }

    fn generate_or_empty(spec: &generator::SeriesSpec, rng: &mut StdRng) -> Dataset {
        match generator::generate(spec, rng) {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!("Falha ao gerar série: {e}");
                Dataset::default()
            }
        }
    }

    /// Gera uma nova série ao vivo e reavalia os alertas.
    fn refresh_live_series(&mut self) {
        let spec = self.config.generator.live.spec(chrono::Utc::now());
        self.live = Self::generate_or_empty(&spec, &mut self.rng);
        self.live_alerts = self
            .live
            .latest()
            .map(|r| alerts::evaluate_alerts(r, &self.config.alerts))
            .unwrap_or_default();
        tracing::info!(
            "Série ao vivo atualizada: {} leituras, {} alertas",
            self.live.len(),
            self.live_alerts.len()
        );
    }

    /// Reavalia o papel efetivo a partir dos inputs atuais da sidebar.
    /// Sem estado entre frames: uma senha corrigida vale imediatamente.
    fn resolve_role(&mut self) {
        let credential = match self.requested_role {
            Role::Technician if !self.password.is_empty() => Some(self.password.as_str()),
            _ => None,
        };
        self.resolution = access::resolve_role(self.requested_role, credential, &self.verifier);
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("User Login")
                .color(self.theme.title)
                .strong()
                .monospace()
                .size(15.0),
        );
        ui.add_space(4.0);

        ui.label(RichText::new("Select role:").color(self.theme.dim).monospace());
        ui.radio_value(&mut self.requested_role, Role::Viewer, "Viewer");
        ui.radio_value(&mut self.requested_role, Role::Technician, "Technician");

        if self.requested_role == Role::Technician {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Technician password:")
                    .color(self.theme.dim)
                    .monospace(),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.password)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(
            RichText::new("Parameter")
                .color(self.theme.title)
                .strong()
                .monospace()
                .size(15.0),
        );
        ui.radio_value(&mut self.view, ViewSelection::Dashboard, "Dashboard");
        for parameter in Parameter::ALL {
            ui.radio_value(&mut self.view, ViewSelection::Single(parameter), parameter.label());
        }
    }

    fn render_role_banners(&self, ui: &mut egui::Ui) {
        if self.resolution.is_rejected() {
            panels::warning_banner(
                ui,
                &self.theme,
                "Incorrect password. You are in Viewer mode.",
            );
        } else if self.resolution.role == Role::Technician {
            panels::success_banner(ui, &self.theme, "Technician access granted!");
        } else {
            panels::warning_banner(
                ui,
                &self.theme,
                "Viewer access: Read-only mode. You cannot update or control devices.",
            );
        }

        if self.last_write_denied {
            panels::error_banner(
                ui,
                &self.theme,
                "Permission denied: only technicians can edit the dataset.",
            );
        }
    }

    /// Gráfico das séries do dataset, todas as linhas ou uma só.
    fn render_chart(&self, ui: &mut egui::Ui) {
        let dataset = self.store.get();
        if dataset.is_empty() {
            ui.label(RichText::new("Sem dados").color(self.theme.dim).monospace());
            return;
        }

        let parameters: Vec<Parameter> = match self.view {
            ViewSelection::Dashboard => Parameter::ALL.to_vec(),
            ViewSelection::Single(p) => vec![p],
        };

        let plot_id = match self.view {
            ViewSelection::Dashboard => "chart_all".to_string(),
            ViewSelection::Single(p) => format!("chart_{}", p.label()),
        };

        egui_plot::Plot::new(plot_id)
            .height(220.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                for &parameter in &parameters {
                    let points: egui_plot::PlotPoints = dataset
                        .iter()
                        .enumerate()
                        .map(|(i, r)| [i as f64, r.value(parameter)])
                        .collect();
                    plot_ui.line(
                        egui_plot::Line::new(points)
                            .color(self.theme.parameter_color(parameter))
                            .width(1.5),
                    );
                }
            });
    }

    fn render_dataset_section(&mut self, ui: &mut egui::Ui) {
        let role = self.resolution.role;
        if role == Role::Technician {
            ui.label(
                RichText::new("Edit Sensor Data")
                    .color(self.theme.title)
                    .strong()
                    .monospace(),
            );
            if let Some(edited) = panels::dataset_editor(ui, self.store.get(), &self.theme) {
                // O store revalida o papel por conta própria
                match self.store.set(role, edited) {
                    Ok(()) => self.last_write_denied = false,
                    Err(e) => {
                        tracing::warn!("Edição rejeitada: {e}");
                        self.last_write_denied = true;
                    }
                }
            }
        } else {
            ui.label(
                RichText::new("View Sensor Data")
                    .color(self.theme.title)
                    .strong()
                    .monospace(),
            );
            panels::render_dataset_table(ui, self.store.get(), &self.theme);
        }
    }
}

impl eframe::App for WaterDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Papel efetivo deste frame ──
        self.resolve_role();

        // ── Configurar estilo visual baseado no tema ──
        let mut visuals = if self.theme.name == "light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        visuals.panel_fill = self.theme.bg;
        visuals.window_fill = self.theme.panel;
        visuals.override_text_color = Some(self.theme.text);
        ctx.set_visuals(visuals);

        // ── Atalhos de teclado (fora de campos de texto) ──
        if !ctx.wants_keyboard_input() {
            ctx.input(|i: &egui::InputState| {
                if i.key_pressed(egui::Key::T) {
                    self.theme_index = (self.theme_index + 1) % self.all_themes.len();
                    self.theme = self.all_themes[self.theme_index].clone();
                    tracing::info!("Tema: {}", self.theme.name);
                }
                if i.key_pressed(egui::Key::R) {
                    self.refresh_live_series();
                }
                if i.key_pressed(egui::Key::Q) || i.key_pressed(egui::Key::Escape) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if i.key_pressed(egui::Key::F) || i.key_pressed(egui::Key::F11) {
                    self.is_fullscreen = !self.is_fullscreen;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.is_fullscreen));
                }
            });
        }

        // ── Sidebar ──
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui: &mut egui::Ui| {
                self.render_sidebar(ui);
            });

        // ── Painel central ──
        egui::CentralPanel::default().show(ctx, |ui: &mut egui::Ui| {
            egui::ScrollArea::vertical().show(ui, |ui: &mut egui::Ui| {
                // ── Título ──
                ui.vertical_centered(|ui: &mut egui::Ui| {
                    ui.label(
                        RichText::new("💧 Water Quality Monitoring Dashboard")
                            .color(self.theme.title)
                            .size(22.0)
                            .strong()
                            .monospace(),
                    );
                });

                ui.add_space(6.0);
                self.render_role_banners(ui);
                ui.add_space(8.0);

                // ── Leitura atual ──
                ui.horizontal(|ui: &mut egui::Ui| {
                    ui.label(
                        RichText::new("Current Sensor Readings")
                            .color(self.theme.title)
                            .strong()
                            .monospace(),
                    );
                    if ui.button("↻ Refresh").clicked() {
                        self.refresh_live_series();
                    }
                });
                ui.add_space(4.0);

                if let Some(latest) = self.live.latest() {
                    panels::render_metric_tiles(ui, latest, &self.live_alerts, &self.theme);
                    ui.add_space(6.0);
                    panels::render_alert_banners(ui, &self.live_alerts, &self.theme);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // ── Gráfico + dataset editável ──
                self.render_chart(ui);
                ui.add_space(8.0);
                self.render_dataset_section(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                panels::render_sites_table(ui, &self.sites, &self.theme);

                // ── Help bar ──
                ui.add_space(12.0);
                ui.vertical_centered(|ui: &mut egui::Ui| {
                    ui.label(
                        RichText::new("[F] Fullscreen | [R] Refresh | [T] Theme | [Q/Esc] Quit")
                            .color(self.theme.dim)
                            .monospace()
                            .size(10.0),
                    );
                });
            });
        });
    }
}
