//! UI словаря - форма создания и список слов

use crate::app::App;
use dota_dictionary::utils::truncate_string;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

impl App {
    pub fn render_dictionary(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        ui.heading(t.app_title);
        ui.add_space(10.0);

        // Форма создания слова
        self.render_create_form(ui);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // Список слов
        self.render_words_section(ui);
    }

    fn render_create_form(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        ui.heading(t.create_title);

        ui.horizontal(|ui| {
            ui.label(t.word_label);
            ui.add(
                egui::TextEdit::singleline(&mut self.title_input)
                    .desired_width(150.0)
                    .hint_text("gank"),
            );

            ui.label(t.translate_label);
            ui.add(egui::TextEdit::singleline(&mut self.translate_input).desired_width(220.0));
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if ui.button(t.create_button).clicked() {
                self.submit_word();
            }
            if self.is_creating {
                ui.spinner();
            }
        });
    }

    fn render_words_section(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        ui.horizontal(|ui| {
            ui.heading(t.words_title);
            if ui.button(t.refresh).clicked() {
                self.start_refresh();
            }
            if self.is_fetching {
                ui.spinner();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&self.status_message);
            });
        });

        ui.add_space(5.0);

        if self.dictionary.is_empty() {
            ui.colored_label(egui::Color32::GRAY, t.no_words);
            return;
        }

        self.render_words_table(ui);
    }

    fn render_words_table(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(60.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong(t.word_label);
                });
                header.col(|ui| {
                    ui.strong(t.translate_label);
                });
                header.col(|ui| {
                    ui.strong(t.quantity_label);
                });
            })
            .body(|mut body| {
                for word in self.dictionary.words() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&word.title);
                        });
                        row.col(|ui| {
                            // Длинные переводы обрезаем, полный текст по наведению
                            let display = truncate_string(&word.translate, 60);
                            ui.label(display).on_hover_text(&word.translate);
                        });
                        row.col(|ui| {
                            ui.label(word.quantity.to_string());
                        });
                    });
                }
            });
    }
}
