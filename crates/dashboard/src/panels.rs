//! Widgets do dashboard: tiles, banners, tabelas e editor do dataset.

use chrono::Utc;
use egui::{Color32, RichText, Ui};
use hydro_core::alerts::{self, Alert};
use hydro_core::types::{Dataset, Parameter, Reading, SiteStatus};

use crate::theme_egui::EguiTheme;

// ──────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────

/// Formata um valor com a precisão usada pelo dashboard para o parâmetro.
pub fn format_parameter(parameter: Parameter, value: f64) -> String {
    match parameter {
        Parameter::Ph => format!("{value:.2}"),
        Parameter::Temperature => format!("{value:.1}"),
        Parameter::DissolvedOxygen => format!("{value:.2}"),
        Parameter::Conductivity => format!("{value:.0}"),
        Parameter::Turbidity => format!("{value:.2}"),
    }
}

fn panel_frame(
    ui: &mut Ui,
    title: &str,
    accent: Color32,
    theme: &EguiTheme,
    add_body: impl FnOnce(&mut Ui),
) {
    egui::Frame::new()
        .fill(theme.panel)
        .stroke(egui::Stroke::new(2.0, accent))
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new(format!("── {title} ──"))
                        .color(accent)
                        .strong()
                        .monospace()
                        .size(13.0),
                );
            });
            ui.add_space(4.0);
            add_body(ui);
        });
}

// ──────────────────────────────────────────
// Tiles da leitura atual
// ──────────────────────────────────────────

/// Linha de tiles com a leitura mais recente, um por parâmetro.
/// Parâmetro com alerta ativo ganha borda e valor na cor crítica.
pub fn render_metric_tiles(
    ui: &mut Ui,
    latest: &Reading,
    alerts: &[Alert],
    theme: &EguiTheme,
) {
    ui.columns(Parameter::ALL.len(), |cols| {
        for (col, &parameter) in cols.iter_mut().zip(Parameter::ALL.iter()) {
            let in_alert = alerts.iter().any(|a| a.parameter == parameter);
            let accent = if in_alert {
                theme.critical
            } else {
                theme.parameter_color(parameter)
            };
            panel_frame(col, parameter.label(), accent, theme, |ui: &mut Ui| {
                ui.vertical_centered(|ui: &mut Ui| {
                    let value = format_parameter(parameter, latest.value(parameter));
                    ui.label(
                        RichText::new(value)
                            .color(if in_alert { theme.critical } else { theme.text })
                            .monospace()
                            .strong()
                            .size(20.0),
                    );
                    if !parameter.unit().is_empty() {
                        ui.label(RichText::new(parameter.unit()).color(theme.dim).monospace());
                    }
                });
            });
        }
    });
}

// ──────────────────────────────────────────
// Banners de status
// ──────────────────────────────────────────

pub fn success_banner(ui: &mut Ui, theme: &EguiTheme, text: &str) {
    banner(ui, theme.ok, text);
}

pub fn warning_banner(ui: &mut Ui, theme: &EguiTheme, text: &str) {
    banner(ui, theme.warning, text);
}

pub fn error_banner(ui: &mut Ui, theme: &EguiTheme, text: &str) {
    banner(ui, theme.critical, text);
}

fn banner(ui: &mut Ui, accent: Color32, text: &str) {
    egui::Frame::new()
        .fill(accent.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, accent))
        .corner_radius(4.0)
        .inner_margin(6.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(accent).monospace());
        });
}

/// Banners de alerta da leitura atual, ou banner de sucesso se nominal.
pub fn render_alert_banners(ui: &mut Ui, alerts: &[Alert], theme: &EguiTheme) {
    if alerts::is_nominal(alerts) {
        success_banner(ui, theme, "All parameters are within acceptable ranges.");
        return;
    }
    for alert in alerts {
        error_banner(ui, theme, &alert.message);
    }
}

// ──────────────────────────────────────────
// Tabela do dataset (somente leitura)
// ──────────────────────────────────────────

pub fn render_dataset_table(ui: &mut Ui, dataset: &Dataset, theme: &EguiTheme) {
    dataset_grid(ui, "dataset_view", theme, |ui: &mut Ui| {
        for reading in dataset.iter() {
            ui.label(
                RichText::new(reading.timestamp.format("%Y-%m-%d %H:%M").to_string())
                    .color(theme.dim)
                    .monospace(),
            );
            for parameter in Parameter::ALL {
                ui.label(
                    RichText::new(format_parameter(parameter, reading.value(parameter)))
                        .color(theme.text)
                        .monospace(),
                );
            }
            ui.end_row();
        }
    });
}

// ──────────────────────────────────────────
// Editor do dataset (Technician)
// ──────────────────────────────────────────

/// Editor de linhas dinâmicas. Retorna o dataset alterado quando o
/// Technician mexeu em algum valor, adicionou ou removeu linha.
pub fn dataset_editor(ui: &mut Ui, dataset: &Dataset, theme: &EguiTheme) -> Option<Dataset> {
    let mut draft = dataset.clone();
    let mut changed = false;
    let mut remove_row: Option<usize> = None;

    dataset_grid(ui, "dataset_editor", theme, |ui: &mut Ui| {
        for (index, reading) in draft.iter_mut().enumerate() {
            ui.label(
                RichText::new(reading.timestamp.format("%Y-%m-%d %H:%M").to_string())
                    .color(theme.dim)
                    .monospace(),
            );
            for parameter in Parameter::ALL {
                let mut value = reading.value(parameter);
                let response = ui.add(
                    egui::DragValue::new(&mut value)
                        .speed(drag_speed(parameter))
                        .max_decimals(2),
                );
                if response.changed() {
                    reading.set_value(parameter, value);
                    changed = true;
                }
            }
            if ui.button("✖").on_hover_text("Remover linha").clicked() {
                remove_row = Some(index);
            }
            ui.end_row();
        }
    });

    if let Some(index) = remove_row {
        draft.remove(index);
        changed = true;
    }

    if ui.button("＋ Adicionar linha").clicked() {
        let timestamp = draft
            .latest()
            .map(|r| r.timestamp + chrono::Duration::days(1))
            .unwrap_or_else(Utc::now);
        draft.push(Reading { timestamp, ..Default::default() });
        changed = true;
    }

    changed.then_some(draft)
}

// Incremento de arraste proporcional à escala do parâmetro
fn drag_speed(parameter: Parameter) -> f64 {
    match parameter {
        Parameter::Conductivity => 1.0,
        Parameter::Temperature => 0.1,
        _ => 0.05,
    }
}

fn dataset_grid(ui: &mut Ui, id: &str, theme: &EguiTheme, add_rows: impl FnOnce(&mut Ui)) {
    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(260.0)
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new(id)
                .striped(true)
                .min_col_width(70.0)
                .show(ui, |ui: &mut Ui| {
                    ui.label(RichText::new("Time").color(theme.title).monospace().strong());
                    for parameter in Parameter::ALL {
                        let header = if parameter.unit().is_empty() {
                            parameter.label().to_string()
                        } else {
                            format!("{} ({})", parameter.label(), parameter.unit())
                        };
                        ui.label(
                            RichText::new(header)
                                .color(theme.parameter_color(parameter))
                                .monospace()
                                .strong(),
                        );
                    }
                    ui.end_row();

                    add_rows(ui);
                });
        });
}

// ──────────────────────────────────────────
// Tabela de estações
// ──────────────────────────────────────────

pub fn render_sites_table(ui: &mut Ui, sites: &[SiteStatus], theme: &EguiTheme) {
    panel_frame(ui, "Monitoring Sites", theme.border, theme, |ui: &mut Ui| {
        egui::Grid::new("sites").striped(true).show(ui, |ui: &mut Ui| {
            ui.label(RichText::new("Location").color(theme.title).monospace().strong());
            ui.label(RichText::new("Status").color(theme.title).monospace().strong());
            ui.end_row();

            for site in sites {
                ui.label(RichText::new(&site.name).color(theme.text).monospace());
                let (dot, color) = if site.active {
                    ("● Active", theme.ok)
                } else {
                    ("● Inactive", theme.critical)
                };
                ui.label(RichText::new(dot).color(color).monospace());
                ui.end_row();
            }
        });
    });
}
