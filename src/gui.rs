use crate::iq::{self, CommitOutcome, GainTable, IqView, OtherItemGain, ScalarFieldKey, SkillEntry};
use crate::{ModifiedCategory, RomProject, statics};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::{collections::HashMap, path::PathBuf};

pub fn run_gui(initial_project: Option<PathBuf>) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = IqedApp {
                theme_dark: true,
                ..Default::default()
            };
            if let Some(dir) = initial_project {
                app.open_project(dir);
            }
            Ok(Box::new(app))
        }),
    )
}

/// Application state: the open project (owned), the view built from it, and the text buffers
/// behind the editable settings.
#[derive(Default)]
struct IqedApp {
    project: Option<RomProject>,
    view: Option<IqView>,
    scalar_buffers: HashMap<ScalarFieldKey, String>,
    dialog_dir: Option<PathBuf>,
    status: String,
    last_error: Option<String>,
    about_open: bool,
    theme_dark: bool,
}

impl IqedApp {
    fn open_project(&mut self, dir: PathBuf) {
        let loaded = RomProject::load_dir(&dir)
            .and_then(|project| IqView::build(&project).map(|view| (project, view)));

        match loaded {
            Ok((project, view)) => {
                self.dialog_dir = dir.parent().map(PathBuf::from);
                self.status = format!("Loaded {}", dir.display());
                self.fill_buffers(&view);
                self.project = Some(project);
                self.view = Some(view);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("failed to open {dir:?}: {e:#}");
                self.last_error = Some(format!("Failed to load: {e:#}"));
            }
        }
    }

    fn pick_project(&mut self) {
        let mut dlg = rfd::FileDialog::new();
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        if let Some(dir) = dlg.pick_folder() {
            self.open_project(dir);
        }
    }

    /// Rebuild every table from the binaries as they are now.
    fn refresh(&mut self) {
        let Some(project) = self.project.as_ref() else {
            return;
        };
        match IqView::build(project) {
            Ok(view) => {
                self.fill_buffers(&view);
                self.view = Some(view);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("Failed to read IQ data: {e:#}")),
        }
    }

    fn fill_buffers(&mut self, view: &IqView) {
        self.scalar_buffers = view
            .scalars
            .iter()
            .map(|field| (field.key, field.value.to_string()))
            .collect();
    }

    fn commit_field(&mut self, key: ScalarFieldKey) {
        let Some(project) = self.project.as_mut() else {
            return;
        };
        let text = self.scalar_buffers.get(&key).map(String::as_str).unwrap_or_default();

        match iq::commit_scalar(project, key, text) {
            Ok(CommitOutcome::Written { value, .. }) => {
                self.status = format!("{}: {value}", key.label());
                self.last_error = None;
            }
            Ok(CommitOutcome::Ignored) => {}
            Err(e) => {
                self.last_error = Some(format!("Failed to set {}: {e:#}", key.label()));
            }
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let mut changed = Vec::new();
        egui::Grid::new("iq_settings_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for key in ScalarFieldKey::ALL {
                    ui.label(key.label());
                    let buffer = self.scalar_buffers.entry(key).or_default();
                    if ui
                        .add(egui::TextEdit::singleline(buffer).desired_width(120.0))
                        .changed()
                    {
                        changed.push(key);
                    }
                    ui.end_row();
                }
            });

        for key in changed {
            self.commit_field(key);
        }
    }

    fn render_gain_table(ui: &mut egui::Ui, id: &str, table: &GainTable) {
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

        ui.push_id(id, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto())
                .column(Column::initial(140.0).resizable(true))
                .columns(Column::auto().at_least(48.0), table.column_labels.len())
                .header(row_h, |mut header| {
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_ID);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_NAME);
                    });
                    for label in &table.column_labels {
                        header.col(|ui| {
                            ui.strong(label.as_str());
                        });
                    }
                })
                .body(|mut body| {
                    for row in &table.rows {
                        body.row(row_h, |mut tr| {
                            tr.col(|ui| {
                                ui.monospace(row.index.to_string());
                            });
                            tr.col(|ui| {
                                ui.label(row.label.as_str());
                            });
                            for cell in &row.cells {
                                tr.col(|ui| {
                                    ui.monospace(cell.as_str());
                                });
                            }
                        });
                    }
                });
        });
    }

    fn render_other_items(ui: &mut egui::Ui, items: &[OtherItemGain]) {
        egui::Grid::new("iq_other_items_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                ui.strong(statics::EN_COL_ITEM);
                ui.strong(statics::EN_COL_GAIN);
                ui.end_row();
                for item in items {
                    ui.label(item.name.as_str());
                    ui.monospace(item.value.to_string());
                    ui.end_row();
                }
            });
    }

    fn render_skills(ui: &mut egui::Ui, skills: &[SkillEntry]) {
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

        ui.push_id("iq_skills_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto())
                .column(Column::initial(220.0).resizable(true))
                .column(Column::auto().at_least(80.0))
                .column(Column::auto().at_least(60.0))
                .header(row_h, |mut header| {
                    for title in [
                        statics::EN_COL_ID,
                        statics::EN_COL_NAME,
                        statics::EN_COL_IQ_REQUIRED,
                        statics::EN_COL_UNK2,
                    ] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for skill in skills {
                        body.row(row_h, |mut tr| {
                            tr.col(|ui| {
                                ui.monospace(skill.index.to_string());
                            });
                            tr.col(|ui| {
                                ui.label(skill.name.as_str());
                            });
                            tr.col(|ui| {
                                ui.monospace(skill.iq_required.to_string());
                            });
                            tr.col(|ui| {
                                ui.monospace(skill.unk2.to_string());
                            });
                        });
                    }
                });
        });
    }
}

impl eframe::App for IqedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.pick_project();
                }

                let has_project = self.project.is_some();
                if ui
                    .add_enabled(has_project, egui::Button::new(statics::EN_BTN_REFRESH))
                    .clicked()
                {
                    self.refresh();
                }

                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }

                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if let Some(project) = self.project.as_ref() {
                    ui.separator();
                    for (category, badge) in [
                        (ModifiedCategory::Iq, statics::EN_BADGE_IQ_MODIFIED),
                        (ModifiedCategory::MiscSettings, statics::EN_BADGE_MISC_MODIFIED),
                    ] {
                        if project.is_modified(category) {
                            ui.colored_label(egui::Color32::YELLOW, badge);
                        }
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.label(statics::EN_ABOUT_PROJECT_LAYOUT);
                    if let Some(project) = self.project.as_ref() {
                        for name in project.binary_names() {
                            ui.monospace(name.to_string());
                        }
                    }
                });
            self.about_open = open;
        }

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.view.is_none() {
                ui.heading(statics::EN_HOME_HEADING);
                ui.label(statics::EN_HOME_INSTRUCTIONS);
                return;
            }

            egui::ScrollArea::both().show(ui, |ui| {
                ui.heading(statics::EN_HEADING_MISC_SETTINGS);
                self.render_settings(ui);

                let Some(view) = self.view.as_ref() else {
                    return;
                };

                ui.separator();
                ui.heading(statics::EN_HEADING_IQ_GAIN);
                ui.label(statics::EN_HINT_READ_ONLY_TABLE);
                Self::render_gain_table(ui, "iq_gain_table", &view.gains.iq_gain);

                ui.separator();
                ui.heading(statics::EN_HEADING_BELLY_HEAL);
                Self::render_gain_table(ui, "belly_heal_table", &view.gains.belly_heal);

                ui.separator();
                ui.heading(statics::EN_HEADING_OTHER_ITEMS);
                Self::render_other_items(ui, &view.gains.other_items);

                ui.separator();
                ui.heading(statics::EN_HEADING_IQ_SKILLS);
                Self::render_skills(ui, &view.skills);
            });
        });
    }
}
